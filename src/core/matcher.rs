//! Cross-university program matching
//!
//! Pairs a selected program with the most comparable program in another
//! university's pool. Candidates must share the normalized degree AND the
//! duration before specializations are compared; the specialization score
//! then decides the quality tier. Ties are broken by encounter order: the
//! first candidate scanned with the maximum score wins.

use crate::core::models::Program;
use crate::core::normalize::normalize_degree;
use crate::core::similarity::{score_specializations, MATCH_THRESHOLD};

/// Minimum score for a perfect-quality match (exact or contains tier).
const PERFECT_THRESHOLD: f64 = 90.0;
/// Minimum score for a good-quality match.
const GOOD_THRESHOLD: f64 = 70.0;

/// Categorical confidence level for a cross-university pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchQuality {
    /// No qualifying candidate
    NoMatch,
    /// Same degree and duration, loosely related specialization
    Approximate,
    /// Same degree and duration, similar specialization
    Good,
    /// Same degree, duration, and (near-)identical specialization
    Perfect,
}

impl MatchQuality {
    /// Human-facing label for the quality tier.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect Match",
            Self::Good => "Good Match",
            Self::Approximate => "Approximate Match",
            Self::NoMatch => "No Match Available",
        }
    }
}

/// The outcome of one match attempt against one candidate pool.
/// Owned by the caller and discarded once consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome<'a> {
    /// The winning candidate
    pub program: &'a Program,
    /// Quality tier of the pairing
    pub quality: MatchQuality,
    /// Specialization similarity score of the winning candidate
    pub score: f64,
    /// Human-readable justification
    pub reason: String,
}

/// Select the best match for `selected` from `candidates` (typically another
/// university's pool after UI filtering).
///
/// Returns `None` when no candidate shares the degree and duration, or when
/// the best specialization score falls below the match threshold. `None` is
/// the no-match condition, not an error; the caller renders it distinctly.
#[must_use]
pub fn find_best_match<'a>(
    selected: &Program,
    candidates: &[&'a Program],
) -> Option<MatchOutcome<'a>> {
    if candidates.is_empty() {
        return None;
    }

    let selected_degree = normalize_degree(&selected.degree);

    let pool: Vec<&'a Program> = candidates
        .iter()
        .copied()
        .filter(|p| {
            normalize_degree(&p.degree) == selected_degree && p.duration == selected.duration
        })
        .collect();

    if pool.is_empty() {
        return None;
    }

    // Exact or containing specialization wins outright.
    for &candidate in &pool {
        let result = score_specializations(&candidate.specialization, &selected.specialization);
        if result.score >= PERFECT_THRESHOLD {
            return Some(MatchOutcome {
                program: candidate,
                quality: MatchQuality::Perfect,
                score: result.score,
                reason: "Perfect match: same degree, duration, and specialization".to_string(),
            });
        }
    }

    let mut best: Option<&'a Program> = None;
    let mut best_score = 0.0;
    for &candidate in &pool {
        let result = score_specializations(&candidate.specialization, &selected.specialization);
        if result.score > best_score {
            best_score = result.score;
            best = Some(candidate);
        }
    }

    let program = best?;

    if best_score >= GOOD_THRESHOLD {
        Some(MatchOutcome {
            program,
            quality: MatchQuality::Good,
            score: best_score,
            reason: format!(
                "Strong match: same degree ({}) and duration ({} years) with similar specialization",
                selected_degree.label(),
                selected.duration
            ),
        })
    } else if best_score >= MATCH_THRESHOLD {
        Some(MatchOutcome {
            program,
            quality: MatchQuality::Approximate,
            score: best_score,
            reason: format!(
                "Related match: same degree ({}) and duration ({} years) but different specialization",
                selected_degree.label(),
                selected.duration
            ),
        })
    } else {
        None
    }
}
