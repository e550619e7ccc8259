//! Specialization similarity scoring
//!
//! A heuristic closeness measure between two free-text specialization names,
//! applied after normalization. Rules run in strict precedence order; the
//! first matching rule wins. Scores are on a 0..=100 scale and the tier tag
//! records which rule fired.

use crate::core::normalize::normalize_specialization;

/// Score assigned when one normalized string contains the other.
pub const CONTAINS_SCORE: f64 = 90.0;
/// Score assigned when both strings fall into the same synonym group.
pub const GROUP_SCORE: f64 = 85.0;
/// Weight applied to the common-token ratio in the partial rule.
pub const PARTIAL_WEIGHT: f64 = 70.0;
/// Minimum score for a partial overlap to count as a match.
pub const MATCH_THRESHOLD: f64 = 50.0;

/// Generic words ignored by the token-overlap rule.
const STOPLIST: &[&str] = &[
    "engineering",
    "science",
    "technology",
    "management",
    "studies",
    "and",
    "with",
    "in",
];

/// Synonym groups: each entry lists spellings counselors use interchangeably.
/// Membership is substring-based in both directions against the normalized
/// input, so abbreviations ("cse") and expansions both land in their group.
const SPECIALIZATION_GROUPS: &[&[&str]] = &[
    &[
        "computer science & engineering",
        "computer science and engineering",
        "computer science engineering",
        "cse",
    ],
    &["mechanical engineering", "mechanical"],
    &["civil engineering", "civil"],
    &[
        "electronics & communication engineering",
        "electronics and communication engineering",
        "electronics communication",
        "ece",
    ],
    &["electrical engineering", "electrical"],
    &["information technology", "it"],
    &["biotechnology", "biotech", "bio technology"],
    &["chemical engineering", "chemical"],
    &["aerospace engineering", "aerospace"],
    &[
        "automobile engineering",
        "automotive engineering",
        "automobile",
    ],
    &["mechatronics engineering", "mechatronics"],
    &["food technology", "food tech"],
    &[
        "artificial intelligence & machine learning",
        "artificial intelligence and machine learning",
        "artificial intelligence",
        "machine learning",
        "ai & ml",
        "aiml",
        "ai/ml",
    ],
    &[
        "data science",
        "data science & analytics",
        "data science and analytics",
        "data analytics",
        "big data",
    ],
    &[
        "cyber security",
        "cybersecurity",
        "cyber security & forensics",
        "cyber security and forensics",
    ],
    &[
        "cloud computing",
        "cloud computing & virtualization",
        "cloud computing and virtualization",
        "cloud technology",
    ],
    &["full stack development", "full stack", "fullstack development"],
    &["internet of things", "iot"],
    &["blockchain technology", "blockchain", "block chain technology"],
    &[
        "augmented & virtual reality",
        "augmented and virtual reality",
        "augmented reality",
        "virtual reality",
        "ar/vr",
        "arvr",
    ],
    &[
        "business administration",
        "general management",
        "business admin",
    ],
    &[
        "banking & finance",
        "banking and finance",
        "banking finance",
        "financial management",
        "finance",
    ],
    &["marketing management", "marketing"],
    &[
        "human resource management",
        "human resources",
        "hr management",
        "hrm",
    ],
    &["international business", "global business", "international trade"],
    &[
        "supply chain management",
        "logistics and supply chain management",
        "supply chain",
        "logistics",
    ],
    &[
        "health care management",
        "healthcare management",
        "hospital management",
    ],
    &["business analytics", "analytics"],
    &["commerce", "accounting", "finance & accounting"],
    &["computer science", "cs"],
    &["physics", "applied physics"],
    &["chemistry", "applied chemistry"],
    &["mathematics", "maths", "applied mathematics"],
    &["microbiology", "applied microbiology"],
    &["environmental science", "environmental studies"],
    &["forensic science", "forensics"],
    &["nursing"],
    &[
        "medical lab technology",
        "medical laboratory technology",
        "laboratory technology",
        "bmlt",
    ],
    &[
        "radiology & imaging technology",
        "radiological imaging techniques",
        "radiology",
    ],
    &[
        "nutrition & dietetics",
        "nutrition and dietetics",
        "clinical nutrition",
    ],
    &["physiotherapy", "physical therapy"],
    &["optometry"],
    &["english", "english literature", "english language"],
    &["psychology", "applied psychology", "clinical psychology"],
    &["economics", "applied economics"],
    &[
        "political science",
        "politics",
        "international relations",
        "international affairs",
    ],
    &["fashion design", "fashion", "apparel design"],
    &["interior design", "interior", "space design"],
    &[
        "communication design",
        "graphic design",
        "visual communication",
    ],
    &[
        "animation & vfx",
        "animation and vfx",
        "animation",
        "vfx",
    ],
    &[
        "journalism & mass communication",
        "journalism and mass communication",
        "journalism",
        "mass communication",
    ],
    &["law", "legal studies"],
    &["architecture", "architectural studies"],
    &["pharmacy", "pharmaceutical sciences"],
];

/// Which rule produced a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Normalized strings are identical
    Exact,
    /// One normalized string contains the other
    Contains,
    /// Both strings belong to the same synonym group
    Group,
    /// Token overlap at or above the match threshold
    Partial,
    /// Below the match threshold
    None,
}

/// A specialization similarity result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecializationScore {
    /// Closeness on a 0..=100 scale
    pub score: f64,
    /// The rule that produced the score
    pub tier: ScoreTier,
}

impl SpecializationScore {
    /// Whether the score counts as a match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.tier != ScoreTier::None
    }
}

/// Compute the similarity between two specialization strings.
///
/// Symmetric and reflexive: `score(a, b) == score(b, a)` and
/// `score(x, x).score == 100` for every input.
#[must_use]
pub fn score_specializations(a: &str, b: &str) -> SpecializationScore {
    let na = normalize_specialization(a);
    let nb = normalize_specialization(b);

    if na == nb {
        return SpecializationScore {
            score: 100.0,
            tier: ScoreTier::Exact,
        };
    }

    if na.contains(&nb) || nb.contains(&na) {
        return SpecializationScore {
            score: CONTAINS_SCORE,
            tier: ScoreTier::Contains,
        };
    }

    if share_synonym_group(&na, &nb) {
        return SpecializationScore {
            score: GROUP_SCORE,
            tier: ScoreTier::Group,
        };
    }

    let tokens_a = significant_tokens(&na);
    let tokens_b = significant_tokens(&nb);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return SpecializationScore {
            score: 0.0,
            tier: ScoreTier::None,
        };
    }

    let common = tokens_a.iter().filter(|t| tokens_b.contains(t)).count();
    if common == 0 {
        return SpecializationScore {
            score: 0.0,
            tier: ScoreTier::None,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let score = (common as f64 / tokens_a.len().max(tokens_b.len()) as f64) * PARTIAL_WEIGHT;

    if score >= MATCH_THRESHOLD {
        SpecializationScore {
            score,
            tier: ScoreTier::Partial,
        }
    } else {
        SpecializationScore {
            score,
            tier: ScoreTier::None,
        }
    }
}

/// Test whether both normalized strings fall into the same synonym group.
fn share_synonym_group(na: &str, nb: &str) -> bool {
    SPECIALIZATION_GROUPS.iter().any(|group| {
        let a_in = group.iter().any(|v| na.contains(v) || v.contains(na));
        let b_in = group.iter().any(|v| nb.contains(v) || v.contains(nb));
        a_in && b_in
    })
}

/// Tokenize a normalized string, dropping short tokens and stoplist words.
fn significant_tokens(s: &str) -> Vec<&str> {
    s.split_whitespace()
        .filter(|t| t.len() > 3 && !STOPLIST.contains(t))
        .collect()
}
