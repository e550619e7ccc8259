//! Outreach message rendering
//!
//! Renders fee calculations into deterministic, shareable multi-line
//! messages: a per-university offer and a cross-university comparison
//! summary. Templates are compiled into the binary and filled by placeholder
//! substitution; every monetary amount is formatted in Indian-style rupee
//! grouping. Rendering is pure: the same inputs always produce the same
//! text, and the side effect of actually sharing it belongs to the caller.

pub mod comparison;
pub mod offer;

use crate::core::compare::StudentProfile;

pub use comparison::render_comparison;
pub use offer::{render_offer, OfferOptions};

/// Format an amount as whole rupees with Indian digit grouping
/// (e.g., `₹20,50,000`).
#[must_use]
pub fn format_inr(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rupees = amount.abs().round() as u64;
    let digits = rupees.to_string();

    let mut parts: Vec<String> = Vec::new();
    let head_len = if digits.len() > 3 { digits.len() - 3 } else { 0 };
    let (head, tail) = digits.split_at(head_len);
    parts.push(tail.to_string());

    // Remaining digits group in pairs from the right
    let mut rest = head;
    while !rest.is_empty() {
        let cut = if rest.len() > 2 { rest.len() - 2 } else { 0 };
        let (next, pair) = rest.split_at(cut);
        parts.push(pair.to_string());
        rest = next;
    }

    parts.reverse();
    let sign = if amount.round() < 0.0 { "-" } else { "" };
    format!("{sign}\u{20b9}{}", parts.join(","))
}

/// Render an optional "Dear <name>,\n\n" greeting line.
#[must_use]
pub fn greeting_line(student: &StudentProfile) -> String {
    student
        .name
        .as_deref()
        .map_or_else(String::new, |name| format!("Dear {name},\n\n"))
}

/// Replace one `{{placeholder}}` in a template, used by both renderers.
pub(crate) fn fill(template: &mut String, placeholder: &str, value: &str) {
    *template = template.replace(&format!("{{{{{placeholder}}}}}"), value);
}

/// Render a `- ` bullet list, or a fallback line when the list is empty.
pub(crate) fn bullet_list(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_groups_last_three_then_pairs() {
        assert_eq!(format_inr(0.0), "\u{20b9}0");
        assert_eq!(format_inr(500.0), "\u{20b9}500");
        assert_eq!(format_inr(5_000.0), "\u{20b9}5,000");
        assert_eq!(format_inr(50_000.0), "\u{20b9}50,000");
        assert_eq!(format_inr(500_000.0), "\u{20b9}5,00,000");
        assert_eq!(format_inr(2_050_000.0), "\u{20b9}20,50,000");
        assert_eq!(format_inr(12_345_678.0), "\u{20b9}1,23,45,678");
    }

    #[test]
    fn inr_rounds_to_whole_rupees() {
        assert_eq!(format_inr(1_499.5), "\u{20b9}1,500");
        assert_eq!(format_inr(1_499.4), "\u{20b9}1,499");
    }

    #[test]
    fn inr_handles_negative_amounts() {
        assert_eq!(format_inr(-5_000.0), "-\u{20b9}5,000");
    }

    #[test]
    fn greeting_is_present_only_with_a_name() {
        let anonymous = StudentProfile::default();
        assert_eq!(greeting_line(&anonymous), "");

        let named = StudentProfile {
            name: Some("Anika".to_string()),
            gpa: None,
        };
        assert_eq!(greeting_line(&named), "Dear Anika,\n\n");
    }

    #[test]
    fn bullets_fall_back_when_empty() {
        assert_eq!(bullet_list(&[], "None listed"), "None listed");
        assert_eq!(
            bullet_list(&["One".to_string(), "Two".to_string()], ""),
            "- One\n- Two"
        );
    }
}
