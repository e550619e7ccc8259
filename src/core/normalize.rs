//! Catalog normalization
//!
//! Degree, specialization, and field labels originate from independently
//! authored catalogs and disagree on spelling, casing, and abbreviation.
//! This module canonicalizes them so records become comparable. The strategy
//! is table lookup throughout: degree labels form a finite enumeration, so a
//! fixed table is the right tool. A label missing from the table is an
//! explicit `Unrecognized` outcome, never a silent pass-through, so callers
//! can surface catalog drift.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fixed table mapping lower-cased raw degree spellings to canonical tags.
const DEGREE_TABLE: &[(&str, &str)] = &[
    ("b.tech", "B.Tech"),
    ("btech", "B.Tech"),
    ("b.e.", "B.Tech"),
    ("bachelor of engineering", "B.Tech"),
    ("b.sc", "B.Sc"),
    ("b.sc.", "B.Sc"),
    ("bsc", "B.Sc"),
    ("bachelor of science", "B.Sc"),
    ("b.sc (hons)", "B.Sc"),
    ("b.sc (hons.)", "B.Sc"),
    ("b.sc. (hons.)", "B.Sc"),
    ("b.sc. (hons)", "B.Sc"),
    ("b.sc (hons/research)", "B.Sc"),
    ("b.sc. (hons./research)", "B.Sc"),
    ("bba", "BBA"),
    ("bachelor of business administration", "BBA"),
    ("b.com", "B.Com"),
    ("b.com.", "B.Com"),
    ("bachelor of commerce", "B.Com"),
    ("b.com (hons)", "B.Com"),
    ("b.com (hons.)", "B.Com"),
    ("b.com. (hons.)", "B.Com"),
    ("ba", "BA"),
    ("b.a", "BA"),
    ("b.a.", "BA"),
    ("bachelor of arts", "BA"),
    ("bca", "BCA"),
    ("bachelor of computer applications", "BCA"),
    ("b.arch", "B.Arch"),
    ("bachelor of architecture", "B.Arch"),
    ("b.des", "B.Des"),
    ("bachelor of design", "B.Des"),
    ("b.pharm", "B.Pharm"),
    ("bachelor of pharmacy", "B.Pharm"),
    ("bpt", "BPT"),
    ("bachelor of physiotherapy", "BPT"),
    ("b.optom", "B.Optom"),
    ("bachelor of optometry", "B.Optom"),
    ("bjmc", "BJMC"),
    ("bachelor of journalism", "BJMC"),
    ("bballb", "BBA LLB"),
    ("bba llb", "BBA LLB"),
    ("ballb", "BA LLB"),
    ("ba llb", "BA LLB"),
    ("llb", "LLB"),
    ("bachelor of law", "LLB"),
    ("b.ed", "B.Ed"),
    ("bachelor of education", "B.Ed"),
    ("bhm", "BHM"),
    ("bachelor of hotel management", "BHM"),
    ("b.sc hotel management", "BHM"),
    ("mbbs", "MBBS"),
    ("bds", "BDS"),
    ("m.tech", "M.Tech"),
    ("mtech", "M.Tech"),
    ("m.e.", "M.Tech"),
    ("master of engineering", "M.Tech"),
    ("m.sc", "M.Sc"),
    ("m.sc.", "M.Sc"),
    ("msc", "M.Sc"),
    ("master of science", "M.Sc"),
    ("mba", "MBA"),
    ("master of business administration", "MBA"),
    ("m.com", "M.Com"),
    ("m.com.", "M.Com"),
    ("master of commerce", "M.Com"),
    ("ma", "MA"),
    ("m.a", "MA"),
    ("m.a.", "MA"),
    ("master of arts", "MA"),
    ("mca", "MCA"),
    ("master of computer applications", "MCA"),
    ("m.arch", "M.Arch"),
    ("master of architecture", "M.Arch"),
    ("m.des", "M.Des"),
    ("master of design", "M.Des"),
    ("m.pharm", "M.Pharm"),
    ("master of pharmacy", "M.Pharm"),
    ("mpt", "MPT"),
    ("master of physiotherapy", "MPT"),
    ("m.optom", "M.Optom"),
    ("master of optometry", "M.Optom"),
    ("llm", "LLM"),
    ("master of law", "LLM"),
    ("m.ed", "M.Ed"),
    ("master of education", "M.Ed"),
    ("ph.d.", "Ph.D."),
    ("ph.d", "Ph.D."),
    ("phd", "Ph.D."),
    ("doctor of philosophy", "Ph.D."),
    ("pharm.d", "Pharm.D"),
    ("doctor of pharmacy", "Pharm.D"),
    ("diploma", "Diploma"),
    ("d.pharm", "D.Pharm"),
    ("diploma in pharmacy", "D.Pharm"),
    ("certificate", "Certificate"),
    ("btech lateral", "B.Tech Lateral"),
    ("b.tech lateral", "B.Tech Lateral"),
    ("b.sc lateral", "B.Sc Lateral"),
    ("b.sc. lateral", "B.Sc Lateral"),
    ("b.des lateral", "B.Des Lateral"),
    ("bhm lateral", "BHM Lateral"),
    ("b.optom lateral", "B.Optom Lateral"),
    ("bpt lateral", "BPT Lateral"),
];

/// Leading degree-name prefixes stripped from specialization strings,
/// longest first so compound forms win over their stems.
const SPECIALIZATION_PREFIXES: &[&str] = &[
    "bachelor of",
    "master of",
    "doctor of",
    "diploma in",
    "certificate in",
    "pharm.d",
    "b.optom",
    "m.optom",
    "b.pharm",
    "m.pharm",
    "d.pharm",
    "b.tech",
    "m.tech",
    "b.arch",
    "m.arch",
    "b.sc.",
    "m.sc.",
    "b.des",
    "m.des",
    "b.com",
    "m.com",
    "btech",
    "mtech",
    "b.ed",
    "m.ed",
    "b.sc",
    "m.sc",
    "b.e.",
    "b.a.",
    "m.a.",
    "bba",
    "mba",
    "bca",
    "mca",
    "llb",
    "llm",
    "phd",
    "bpt",
    "mpt",
    "b.e",
    "b.a",
    "m.a",
];

/// Trailing generic suffixes stripped from specialization strings.
const SPECIALIZATION_SUFFIXES: &[&str] = &[
    "engineering",
    "science",
    "technology",
    "management",
    "administration",
    "commerce",
    "arts",
    "law",
    "pharmacy",
    "architecture",
    "design",
    "education",
    "nursing",
    "physiotherapy",
    "optometry",
    "applications",
    "studies",
    "program",
];

/// Fixed table standardizing raw field labels into umbrella categories.
const FIELD_TABLE: &[(&str, &str)] = &[
    ("Engineering", "Engineering"),
    ("Computer Science", "Computer Science & IT"),
    ("Computing", "Computer Science & IT"),
    ("Science", "Basic Sciences"),
    ("Sciences", "Basic Sciences"),
    ("Biotechnology", "Basic Sciences"),
    ("Allied Health Sciences", "Health Sciences"),
    ("Health Sciences", "Health Sciences"),
    ("Nursing", "Health Sciences"),
    ("Medical Sciences", "Medical Sciences"),
    ("Commerce", "Commerce & Business"),
    ("Management", "Commerce & Business"),
    ("Tourism & Hospitality", "Commerce & Business"),
    ("Hospitality", "Commerce & Business"),
    ("Design", "Design & Arts"),
    ("Fine Arts", "Design & Arts"),
    ("Media", "Media & Communication"),
    ("Journalism", "Media & Communication"),
    ("Liberal Arts", "Arts & Humanities"),
    ("Law", "Law"),
    ("Pharmacy", "Pharmacy"),
    ("Architecture", "Architecture"),
    ("Education", "Education"),
    ("Agriculture", "Agriculture"),
];

/// A degree label after canonicalization.
///
/// `Unrecognized` carries the trimmed raw label. Two unrecognized labels are
/// equal iff they match case-insensitively, so drifted catalogs still match
/// against themselves without ever being conflated with a recognized tag.
#[derive(Debug, Clone, Eq)]
pub enum NormalizedDegree {
    /// Canonical degree tag from the fixed table
    Recognized(&'static str),
    /// Trimmed raw label missing from the table
    Unrecognized(String),
}

impl NormalizedDegree {
    /// Display label: the canonical tag, or the raw label for unrecognized input
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Recognized(tag) => tag,
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether the label was found in the canonical table
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }
}

impl PartialEq for NormalizedDegree {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Recognized(a), Self::Recognized(b)) => a == b,
            (Self::Unrecognized(a), Self::Unrecognized(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

impl fmt::Display for NormalizedDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Canonicalize a raw degree label via the fixed table.
#[must_use]
pub fn normalize_degree(raw: &str) -> NormalizedDegree {
    let folded = raw.trim().to_lowercase();
    DEGREE_TABLE
        .iter()
        .find(|(from, _)| *from == folded)
        .map_or_else(
            || NormalizedDegree::Unrecognized(raw.trim().to_string()),
            |(_, to)| NormalizedDegree::Recognized(to),
        )
}

/// Normalize a specialization string for matching.
///
/// Lower-cases and trims, strips one leading degree-name prefix and one
/// trailing generic suffix (both at word boundaries), collapses parentheses,
/// commas, and whitespace. Total function; worst case returns the trimmed
/// lower-cased input.
#[must_use]
pub fn normalize_specialization(raw: &str) -> String {
    let mut s = raw.trim().to_lowercase();

    for prefix in SPECIALIZATION_PREFIXES {
        if let Some(rest) = s.strip_prefix(prefix) {
            // Word boundary: the prefix must end the string or be followed
            // by a non-alphanumeric character.
            if rest.is_empty() || rest.starts_with(|c: char| !c.is_alphanumeric()) {
                s = rest.trim_start().to_string();
                break;
            }
        }
    }

    let collapsed: String = s
        .chars()
        .map(|c| if matches!(c, '(' | ')' | ',') { ' ' } else { c })
        .collect();
    let mut s = collapsed.split_whitespace().collect::<Vec<_>>().join(" ");

    for suffix in SPECIALIZATION_SUFFIXES {
        if let Some(rest) = s.strip_suffix(suffix) {
            if rest.ends_with(' ') {
                s = rest.trim_end().trim_end_matches('&').trim_end().to_string();
                break;
            }
        }
    }

    s
}

/// Standardize a raw field label into its umbrella category.
/// Unmapped input passes through unchanged.
#[must_use]
pub fn standardize_field(raw: &str) -> String {
    FIELD_TABLE
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(raw.trim()))
        .map_or_else(|| raw.trim().to_string(), |(_, to)| (*to).to_string())
}

/// Whether a raw field label maps to an umbrella category.
#[must_use]
pub fn is_recognized_field(raw: &str) -> bool {
    FIELD_TABLE
        .iter()
        .any(|(from, _)| from.eq_ignore_ascii_case(raw.trim()))
}

/// Hierarchical degree levels used for UI filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DegreeLevel {
    /// Diploma-level programs
    Diploma,
    /// Bachelor's degrees
    Bachelor,
    /// Bachelor's degrees entered laterally (year 2 onward)
    BachelorLateral,
    /// Master's degrees
    Masters,
    /// Doctoral programs
    Phd,
    /// Certificate programs
    Certificate,
    /// Everything not mapped to a level
    Other,
}

impl DegreeLevel {
    /// The fixed, ordered set of selectable levels (excludes `Other`).
    pub const SELECTABLE: [Self; 6] = [
        Self::Diploma,
        Self::Bachelor,
        Self::BachelorLateral,
        Self::Masters,
        Self::Phd,
        Self::Certificate,
    ];
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Diploma => "Diploma",
            Self::Bachelor => "Bachelor",
            Self::BachelorLateral => "Bachelor (Lateral Entry)",
            Self::Masters => "Masters",
            Self::Phd => "PhD",
            Self::Certificate => "Certificate",
            Self::Other => "Other",
        };
        write!(f, "{label}")
    }
}

impl FromStr for DegreeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diploma" => Ok(Self::Diploma),
            "bachelor" => Ok(Self::Bachelor),
            "bachelor (lateral entry)" | "bachelor-lateral" | "lateral" => {
                Ok(Self::BachelorLateral)
            }
            "masters" | "master" => Ok(Self::Masters),
            "phd" | "ph.d." => Ok(Self::Phd),
            "certificate" => Ok(Self::Certificate),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown degree level: '{s}'")),
        }
    }
}

/// Canonical degree tags per level.
const LEVEL_TABLE: &[(DegreeLevel, &[&str])] = &[
    (DegreeLevel::Diploma, &["Diploma", "D.Pharm"]),
    (
        DegreeLevel::Bachelor,
        &[
            "B.Tech", "B.Sc", "BBA", "B.Com", "BA", "BCA", "B.Arch", "B.Des", "B.Pharm", "BPT",
            "B.Optom", "BJMC", "BBA LLB", "BA LLB", "LLB", "B.Ed", "BHM",
        ],
    ),
    (
        DegreeLevel::BachelorLateral,
        &[
            "B.Tech Lateral",
            "B.Sc Lateral",
            "B.Des Lateral",
            "BHM Lateral",
            "B.Optom Lateral",
            "BPT Lateral",
        ],
    ),
    (
        DegreeLevel::Masters,
        &[
            "M.Tech", "M.Sc", "MBA", "M.Com", "MA", "MCA", "M.Arch", "M.Des", "M.Pharm", "MPT",
            "M.Optom", "LLM", "M.Ed",
        ],
    ),
    (DegreeLevel::Phd, &["Ph.D."]),
    (DegreeLevel::Certificate, &["Certificate"]),
];

/// Map a raw degree label to its hierarchical level.
/// Unrecognized labels and recognized tags outside every level list map to
/// [`DegreeLevel::Other`].
#[must_use]
pub fn degree_level_of(raw: &str) -> DegreeLevel {
    match normalize_degree(raw) {
        NormalizedDegree::Recognized(tag) => LEVEL_TABLE
            .iter()
            .find(|(_, tags)| tags.contains(&tag))
            .map_or(DegreeLevel::Other, |(level, _)| *level),
        NormalizedDegree::Unrecognized(_) => DegreeLevel::Other,
    }
}
