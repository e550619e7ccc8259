//! Per-university offer messages
//!
//! One message per program/university pair, adapted to the scholarship
//! outcome: a confirmed tier, a multiple-tier summary, a premium
//! no-scholarship note, or the enhanced partner package when it is the
//! genuinely cheaper path.

use super::{bullet_list, fill, format_inr, greeting_line};
use crate::core::compare::StudentProfile;
use crate::core::fees::{FeeCalculation, ScholarshipOutcome, TierQuote};
use crate::core::models::{Program, University};
use std::fmt::Write;

/// Embedded offer message template
const OFFER_TEMPLATE: &str = include_str!("templates/offer.txt");

/// Rendering options for one offer.
#[derive(Debug, Clone, Default)]
pub struct OfferOptions {
    /// Student profile for the greeting and eligibility filtering
    pub student: StudentProfile,
    /// Force a specific tier by name instead of the best eligible quote
    pub tier_override: Option<String>,
}

/// Which fee schedule a selected quote prices against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schedule {
    Standard,
    Enhanced,
}

/// Render the outreach message for one program at one university.
///
/// Pure function of its inputs; the clipboard/share side effect belongs to
/// the caller.
///
/// # Errors
/// Returns an error only when `tier_override` names a tier that does not
/// exist on this calculation.
pub fn render_offer(
    program: &Program,
    university: &University,
    calc: &FeeCalculation,
    options: &OfferOptions,
) -> Result<String, String> {
    let selected = select_quote(calc, options)?;

    let mut output = OFFER_TEMPLATE.to_string();
    fill(&mut output, "greeting", &greeting_line(&options.student));
    fill(&mut output, "university_name", &university.name);
    fill(&mut output, "program_name", &program.name);
    fill(&mut output, "duration", &program.duration.to_string());
    fill(
        &mut output,
        "location",
        non_empty(&university.location, "Shared on request"),
    );
    fill(
        &mut output,
        "recognition",
        non_empty(&university.recognition, "Shared on request"),
    );

    fill(
        &mut output,
        "fee_section",
        &fee_section(calc, selected.as_ref(), options),
    );
    fill(
        &mut output,
        "highlights",
        &bullet_list(&program.highlights, "- Details shared on request"),
    );
    fill(
        &mut output,
        "one_time_includes",
        &bullet_list(
            &university.additional_fees.one_time.includes,
            "- Admission processing",
        ),
    );
    fill(
        &mut output,
        "services_section",
        &services_section(university, selected.as_ref()),
    );

    Ok(output)
}

/// Choose the quote the message is built around.
fn select_quote<'a>(
    calc: &'a FeeCalculation,
    options: &OfferOptions,
) -> Result<Option<(&'a TierQuote, Schedule)>, String> {
    if let Some(name) = options.tier_override.as_deref() {
        return find_named_quote(calc, name).map(Some);
    }

    let gpa = options.student.gpa;
    let standard = calc.best_quote(gpa);
    let enhanced = calc.best_enhanced_quote(gpa);

    // The enhanced package is offered only when it genuinely beats the best
    // standard quote.
    Ok(match (standard, enhanced) {
        (Some(s), Some(e)) if e.total_fees < s.total_fees => Some((e, Schedule::Enhanced)),
        (Some(s), _) => Some((s, Schedule::Standard)),
        (None, Some(e)) => Some((e, Schedule::Enhanced)),
        (None, None) => None,
    })
}

/// Find a quote by name, searching standard tiers first.
fn find_named_quote<'a>(
    calc: &'a FeeCalculation,
    name: &str,
) -> Result<(&'a TierQuote, Schedule), String> {
    if let Some(quote) = calc
        .eligible_tiers(None)
        .into_iter()
        .find(|q| q.name.eq_ignore_ascii_case(name))
    {
        return Ok((quote, Schedule::Standard));
    }
    if let Some(quote) = calc
        .eligible_enhanced(None)
        .into_iter()
        .find(|q| q.name.eq_ignore_ascii_case(name))
    {
        return Ok((quote, Schedule::Enhanced));
    }
    Err(format!("Unknown scholarship tier: '{name}'"))
}

/// Build the fee section for the chosen quote (or its absence).
fn fee_section(
    calc: &FeeCalculation,
    selected: Option<&(&TierQuote, Schedule)>,
    options: &OfferOptions,
) -> String {
    let Some((quote, schedule)) = selected else {
        return no_scholarship_section(calc);
    };

    let gpa = options.student.gpa;
    let eligible_count = calc.eligible_tiers(gpa).len() + calc.eligible_enhanced(gpa).len();

    let mut section = String::new();
    if *schedule == Schedule::Enhanced {
        let _ = writeln!(
            section,
            "PARTNER PACKAGE OFFER: {}% SCHOLARSHIP",
            quote.percentage
        );
    } else if eligible_count > 1 {
        let _ = writeln!(
            section,
            "MULTIPLE SCHOLARSHIPS AVAILABLE - BEST OPTION: {}% DISCOUNT",
            quote.percentage
        );
    } else {
        let _ = writeln!(section, "SCHOLARSHIP CONFIRMED: {}% DISCOUNT", quote.percentage);
    }

    if let Some(gpa) = gpa {
        let _ = writeln!(
            section,
            "Based on the reported GPA of {gpa}, the student qualifies for {}.",
            quote.name
        );
    } else {
        let _ = writeln!(section, "Applied tier: {}.", quote.name);
    }
    if let Some(conditions) = &quote.conditions {
        let _ = writeln!(section, "Conditions: {conditions}");
    }

    let _ = writeln!(section, "\nTUITION AFTER SCHOLARSHIP");
    for (year, fee) in quote.yearly_fees.iter().enumerate() {
        let _ = writeln!(section, "Year {}: {}", year + 1, format_inr(*fee));
    }

    let _ = writeln!(section, "\nADDITIONAL FEES");
    if *schedule == Schedule::Enhanced {
        let _ = writeln!(
            section,
            "Year 1 comprehensive package: {}",
            format_inr(calc.additional.enhanced_package)
        );
        if calc.additional.enhanced_recurring > 0.0 {
            let _ = writeln!(
                section,
                "Annual fees (years 2 onward, total): {}",
                format_inr(calc.additional.enhanced_recurring)
            );
        }
    } else {
        let _ = writeln!(
            section,
            "One-time fee (first year): {}",
            format_inr(calc.one_time_fee)
        );
        if calc.additional.recurring > 0.0 {
            let _ = writeln!(
                section,
                "Recurring fees (whole program): {}",
                format_inr(calc.additional.recurring)
            );
        }
    }
    if calc.additional.industry > 0.0 {
        let _ = writeln!(
            section,
            "One-time industry fee (year 1): {}",
            format_inr(calc.additional.industry)
        );
    }

    let _ = writeln!(section, "\nTotal after scholarship: {}", format_inr(quote.total_fees));
    let _ = write!(section, "Tuition saved: {}", format_inr(quote.savings));
    section
}

/// Fee section when no quote is presented: the distinct no-scholarship
/// outcome, or a tiered program where no tier matched the reported GPA.
fn no_scholarship_section(calc: &FeeCalculation) -> String {
    let mut section = String::new();
    let _ = writeln!(section, "PROGRAM INVESTMENT");
    match &calc.outcome {
        ScholarshipOutcome::NoScholarship {
            category: Some(info),
        } => {
            let _ = writeln!(
                section,
                "Programs in the {} group carry no scholarship tiers.",
                info.name
            );
        }
        ScholarshipOutcome::Tiered { .. } => {
            let _ = writeln!(
                section,
                "No tier matches the reported GPA; contact us to review scholarship options for this profile."
            );
        }
        _ => {
            let _ = writeln!(section, "No scholarship tiers are available for this program.");
        }
    }
    let _ = write!(
        section,
        "Total program cost: {}",
        format_inr(calc.original_total)
    );
    section
}

/// Partner services block, shown only alongside an enhanced quote.
fn services_section(
    university: &University,
    selected: Option<&(&TierQuote, Schedule)>,
) -> String {
    let enhanced_selected = selected.is_some_and(|(_, schedule)| *schedule == Schedule::Enhanced);
    if !enhanced_selected {
        return String::new();
    }

    university
        .additional_fees
        .enhanced
        .as_ref()
        .filter(|e| !e.services.is_empty())
        .map_or_else(String::new, |e| {
            format!(
                "\nPARTNER SERVICES INCLUDED\n{}\n",
                bullet_list(&e.services, "")
            )
        })
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fees;
    use crate::core::models::CatalogSet;

    fn catalog() -> CatalogSet {
        CatalogSet::builtin()
    }

    fn render(
        catalog: &CatalogSet,
        university_id: &str,
        program_id: &str,
        options: &OfferOptions,
    ) -> String {
        let university = catalog.university(university_id).expect("university");
        let program = university.program(program_id).expect("program");
        let calc = fees::calculate(program, university);
        render_offer(program, university, &calc, options).expect("render offer")
    }

    #[test]
    fn flat_offer_contains_totals_and_no_placeholders() {
        let catalog = catalog();
        let message = render(&catalog, "riverline", "btech-cse", &OfferOptions::default());

        assert!(!message.contains("{{"), "unfilled placeholder in:\n{message}");
        assert!(message.contains("SCHOLARSHIP CONFIRMED: 50% DISCOUNT"));
        assert!(message.contains("Riverline University"));
        assert!(message.contains("Year 1:"));
        assert!(message.contains("Total after scholarship:"));
    }

    #[test]
    fn greeting_appears_with_student_name() {
        let catalog = catalog();
        let options = OfferOptions {
            student: StudentProfile {
                name: Some("Anika".to_string()),
                gpa: None,
            },
            tier_override: None,
        };
        let message = render(&catalog, "riverline", "btech-cse", &options);
        assert!(message.starts_with("Dear Anika,"));
    }

    #[test]
    fn no_scholarship_program_renders_premium_wording() {
        let catalog = catalog();
        let message = render(&catalog, "meadowbrook", "mbbs", &OfferOptions::default());
        assert!(message.contains("PROGRAM INVESTMENT"));
        assert!(message.contains("no scholarship tiers"));
        assert!(message.contains("Total program cost:"));
        assert!(!message.contains("SCHOLARSHIP CONFIRMED"));
    }

    #[test]
    fn gpa_is_echoed_in_confirmed_offers() {
        let catalog = catalog();
        let options = OfferOptions {
            student: StudentProfile {
                name: None,
                gpa: Some(4.0),
            },
            tier_override: None,
        };
        let message = render(&catalog, "northgate", "bba-gen", &options);
        assert!(message.contains("GPA of 4"));
    }

    #[test]
    fn ineligible_gpa_prompts_a_profile_review() {
        let catalog = catalog();
        let options = OfferOptions {
            student: StudentProfile {
                name: None,
                gpa: Some(2.0),
            },
            tier_override: None,
        };
        let message = render(&catalog, "meadowbrook", "btech-cse", &options);
        assert!(message.contains("No tier matches the reported GPA"));
        assert!(message.contains("Total program cost:"));
    }

    #[test]
    fn tier_override_selects_the_named_tier() {
        let catalog = catalog();
        let options = OfferOptions {
            student: StudentProfile::default(),
            tier_override: Some("Merit Scholarship 35%".to_string()),
        };
        let message = render(&catalog, "northgate", "bba-gen", &options);
        assert!(message.contains("Merit Scholarship 35%"));
    }

    #[test]
    fn unknown_tier_override_is_an_error() {
        let catalog = catalog();
        let university = catalog.university("northgate").expect("university");
        let program = university.program("bba-gen").expect("program");
        let calc = fees::calculate(program, university);

        let options = OfferOptions {
            student: StudentProfile::default(),
            tier_override: Some("Nonexistent Tier".to_string()),
        };
        assert!(render_offer(program, university, &calc, &options).is_err());
    }

    #[test]
    fn rendering_is_deterministic() {
        let catalog = catalog();
        let options = OfferOptions {
            student: StudentProfile {
                name: Some("Rafi".to_string()),
                gpa: Some(3.8),
            },
            tier_override: None,
        };
        let first = render(&catalog, "meadowbrook", "btech-cse", &options);
        let second = render(&catalog, "meadowbrook", "btech-cse", &options);
        assert_eq!(first, second);
    }
}
