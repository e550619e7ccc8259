//! Fee calculation
//!
//! Computes the full cost picture for one program at one university: base
//! tuition, one-time and recurring additional fees, and every scholarship
//! outcome the university's rule-set produces. Dispatch is structural over
//! the tagged rule enums chosen at catalog load; the university identifier is
//! never consulted here.
//!
//! Every input, however degenerate, resolves to a defined output value. A
//! missing scholarship category degrades to a `NoScholarship` outcome; absent
//! optional fee components default to zero.

use crate::core::models::{Program, RecurringFees, ScholarshipRules, ScholarshipTier, University};
use crate::core::normalize::normalize_degree;

/// Student GPAs are reported on a 0..=5 scale; values outside it are treated
/// as "no GPA provided".
pub const GPA_SCALE_MAX: f64 = 5.0;

/// Breakdown of non-tuition fees for one program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdditionalFeeBreakdown {
    /// One-time admission fee (year 1)
    pub one_time: f64,
    /// Recurring fees summed over the program duration
    pub recurring: f64,
    /// One-time year-1 industry fee (flagged programs only)
    pub industry: f64,
    /// Enhanced partner package amount (year 1), 0 when unavailable
    pub enhanced_package: f64,
    /// Enhanced annual amounts summed over years 2..=duration
    pub enhanced_recurring: f64,
}

impl AdditionalFeeBreakdown {
    /// Total additional fees on the standard schedule.
    #[must_use]
    pub fn standard_total(&self) -> f64 {
        self.one_time + self.recurring + self.industry
    }

    /// Total additional fees on the enhanced partner-package schedule.
    /// The package replaces the standard one-time + recurring total.
    #[must_use]
    pub fn enhanced_total(&self) -> f64 {
        self.enhanced_package + self.enhanced_recurring + self.industry
    }
}

/// One fully-priced scholarship option.
#[derive(Debug, Clone, PartialEq)]
pub struct TierQuote {
    /// Tier name
    pub name: String,
    /// Discount percentage applied to every annual fee
    pub percentage: f64,
    /// Inclusive lower GPA bound, absent for ungated quotes
    pub gpa_min: Option<f64>,
    /// Inclusive upper GPA bound, absent for ungated quotes
    pub gpa_max: Option<f64>,
    /// Eligibility conditions shown alongside the quote
    pub conditions: Option<String>,
    /// Discounted tuition per year; length equals the program duration
    pub yearly_fees: Vec<f64>,
    /// Discounted tuition plus all applicable additional fees
    pub total_fees: f64,
    /// Tuition saved versus the undiscounted schedule
    pub savings: f64,
}

impl TierQuote {
    /// GPA eligibility test, inclusive at both bounds. Quotes without bounds
    /// are always eligible; an absent GPA makes every quote eligible.
    #[must_use]
    pub fn eligible_for(&self, gpa: Option<f64>) -> bool {
        let Some(gpa) = gpa else { return true };
        let above_min = self.gpa_min.is_none_or(|min| gpa >= min);
        let below_max = self.gpa_max.is_none_or(|max| gpa <= max);
        above_min && below_max
    }
}

/// Category metadata attached to tiered outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInfo {
    /// Category tag from the program record
    pub tag: String,
    /// Human-facing category name
    pub name: String,
    /// Category description
    pub description: String,
}

/// The scholarship side of a fee calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScholarshipOutcome {
    /// One flat-percentage quote, no GPA gating
    Flat(TierQuote),
    /// GPA- or category-gated tier quotes, with optional enhanced quotes
    Tiered {
        /// Category metadata (category-tiered universities only)
        category: Option<CategoryInfo>,
        /// Standard tier quotes, catalog order
        tiers: Vec<TierQuote>,
        /// Enhanced partner-package quotes, catalog order
        enhanced: Vec<TierQuote>,
    },
    /// No scholarship available. Distinct from a zero-percent tier; the
    /// payable total is the original total.
    NoScholarship {
        /// Category metadata when the outcome came from an empty category
        category: Option<CategoryInfo>,
    },
}

/// The complete cost picture for one program at one university.
/// A pure function of its inputs; recomputed on every selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeCalculation {
    /// Sum of the undiscounted annual fees
    pub tuition_total: f64,
    /// One-time admission fee
    pub one_time_fee: f64,
    /// Non-tuition fee breakdown
    pub additional: AdditionalFeeBreakdown,
    /// Tuition plus standard additional fees, before any scholarship
    pub original_total: f64,
    /// Scholarship outcome for this program
    pub outcome: ScholarshipOutcome,
}

impl FeeCalculation {
    /// Standard quotes a student with `gpa` is eligible for. This is a
    /// display filter; it never alters the computed amounts.
    #[must_use]
    pub fn eligible_tiers(&self, gpa: Option<f64>) -> Vec<&TierQuote> {
        match &self.outcome {
            ScholarshipOutcome::Flat(quote) => vec![quote],
            ScholarshipOutcome::Tiered { tiers, .. } => {
                tiers.iter().filter(|t| t.eligible_for(gpa)).collect()
            }
            ScholarshipOutcome::NoScholarship { .. } => Vec::new(),
        }
    }

    /// Enhanced partner-package quotes the student is eligible for.
    #[must_use]
    pub fn eligible_enhanced(&self, gpa: Option<f64>) -> Vec<&TierQuote> {
        match &self.outcome {
            ScholarshipOutcome::Tiered { enhanced, .. } => {
                enhanced.iter().filter(|t| t.eligible_for(gpa)).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Best (first eligible) standard quote, if any.
    #[must_use]
    pub fn best_quote(&self, gpa: Option<f64>) -> Option<&TierQuote> {
        self.eligible_tiers(gpa).into_iter().next()
    }

    /// Best (first eligible) enhanced quote, if any.
    #[must_use]
    pub fn best_enhanced_quote(&self, gpa: Option<f64>) -> Option<&TierQuote> {
        self.eligible_enhanced(gpa).into_iter().next()
    }

    /// The payable total for the student: best eligible quote, or the
    /// original total when no scholarship applies.
    #[must_use]
    pub fn payable_total(&self, gpa: Option<f64>) -> f64 {
        self.best_quote(gpa)
            .map_or(self.original_total, |quote| quote.total_fees)
    }
}

/// Parse a raw GPA string. Non-numeric or out-of-range input is "no GPA
/// provided", never an error.
#[must_use]
pub fn parse_gpa(raw: &str) -> Option<f64> {
    let gpa: f64 = raw.trim().parse().ok()?;
    (gpa.is_finite() && (0.0..=GPA_SCALE_MAX).contains(&gpa)).then_some(gpa)
}

/// Compute the full fee calculation for `program` at `university`.
#[must_use]
pub fn calculate(program: &Program, university: &University) -> FeeCalculation {
    let tuition_total = program.tuition_total();
    let one_time = university.additional_fees.one_time.amount;
    let recurring = recurring_total(&university.additional_fees.recurring, program.duration);

    let industry = if program.has_industry_fee {
        program.industry_fee_first_year.unwrap_or_default()
    } else {
        0.0
    };

    let (enhanced_package, enhanced_recurring) = university
        .additional_fees
        .enhanced
        .as_ref()
        .map_or((0.0, 0.0), |enhanced| {
            #[allow(clippy::cast_precision_loss)]
            let later_years = program.duration.saturating_sub(1) as f64;
            (enhanced.package_amount, enhanced.annual_amount * later_years)
        });

    let additional = AdditionalFeeBreakdown {
        one_time,
        recurring,
        industry,
        enhanced_package,
        enhanced_recurring,
    };

    let original_total = tuition_total + additional.standard_total();
    let outcome = scholarship_outcome(program, university, &additional);

    FeeCalculation {
        tuition_total,
        one_time_fee: one_time,
        additional,
        original_total,
        outcome,
    }
}

/// Sum a recurring schedule over the program duration.
fn recurring_total(schedule: &RecurringFees, duration: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let years = duration as f64;
    #[allow(clippy::cast_precision_loss)]
    let later_years = duration.saturating_sub(1) as f64;

    match schedule {
        RecurringFees::None => 0.0,
        RecurringFees::AnnualCycle {
            examination,
            registration,
            medical,
            alumni,
        } => examination * years + registration * later_years + medical * later_years + alumni,
        RecurringFees::ExamAndInsurance {
            examination,
            health_insurance,
        } => (examination + health_insurance) * years,
        RecurringFees::ExamOnly { examination } => examination * years,
    }
}

/// Resolve the scholarship outcome from the university's rule-set.
fn scholarship_outcome(
    program: &Program,
    university: &University,
    additional: &AdditionalFeeBreakdown,
) -> ScholarshipOutcome {
    match &university.scholarships {
        ScholarshipRules::Flat { percentage } => ScholarshipOutcome::Flat(flat_quote(
            program,
            *percentage,
            additional.standard_total(),
        )),

        ScholarshipRules::DegreeFlat {
            degree,
            percentage,
            default_percentage,
        } => {
            let pct = if normalize_degree(&program.degree).label() == degree {
                *percentage
            } else {
                *default_percentage
            };
            ScholarshipOutcome::Flat(flat_quote(program, pct, additional.standard_total()))
        }

        ScholarshipRules::GpaTiered { tiers } => ScholarshipOutcome::Tiered {
            category: None,
            tiers: tiers
                .iter()
                .map(|t| tier_quote(program, t, additional.standard_total()))
                .collect(),
            enhanced: Vec::new(),
        },

        ScholarshipRules::CategoryTiered { categories } => {
            let category = program
                .scholarship_category
                .as_ref()
                .and_then(|tag| categories.get(tag).map(|c| (tag, c)));

            let Some((tag, category)) = category else {
                return ScholarshipOutcome::NoScholarship { category: None };
            };

            let info = CategoryInfo {
                tag: tag.clone(),
                name: category.name.clone(),
                description: category.description.clone(),
            };

            if category.tiers.is_empty() {
                return ScholarshipOutcome::NoScholarship {
                    category: Some(info),
                };
            }

            let tiers = category
                .tiers
                .iter()
                .map(|t| tier_quote(program, t, additional.standard_total()))
                .collect();

            let enhanced = category
                .enhanced_tiers
                .iter()
                .map(|t| tier_quote(program, t, additional.enhanced_total()))
                .collect();

            ScholarshipOutcome::Tiered {
                category: Some(info),
                tiers,
                enhanced,
            }
        }
    }
}

/// Build an ungated quote from a flat percentage.
fn flat_quote(program: &Program, percentage: f64, extras: f64) -> TierQuote {
    let yearly_fees = discounted_fees(program, percentage);
    let discounted_total: f64 = yearly_fees.iter().sum();
    TierQuote {
        name: format!("Guaranteed {percentage}% Scholarship"),
        percentage,
        gpa_min: None,
        gpa_max: None,
        conditions: None,
        yearly_fees,
        total_fees: discounted_total + extras,
        savings: program.tuition_total() - discounted_total,
    }
}

/// Build a GPA-gated quote from a tier definition.
fn tier_quote(program: &Program, tier: &ScholarshipTier, extras: f64) -> TierQuote {
    let yearly_fees = discounted_fees(program, tier.percentage);
    let discounted_total: f64 = yearly_fees.iter().sum();
    TierQuote {
        name: tier.name.clone(),
        percentage: tier.percentage,
        gpa_min: Some(tier.gpa_min),
        gpa_max: Some(tier.gpa_max),
        conditions: tier.conditions.clone(),
        yearly_fees,
        total_fees: discounted_total + extras,
        savings: program.tuition_total() - discounted_total,
    }
}

/// Apply a percentage discount to every annual fee.
fn discounted_fees(program: &Program, percentage: f64) -> Vec<f64> {
    program
        .annual_fees
        .iter()
        .map(|fee| fee * (1.0 - percentage / 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::university::{
        AdditionalFees, EnhancedFees, OneTimeFee, ScholarshipCategory,
    };
    use std::collections::BTreeMap;

    fn program(degree: &str, duration: usize, annual_fee: f64) -> Program {
        Program {
            id: "p1".to_string(),
            name: format!("{degree} Program"),
            degree: degree.to_string(),
            field: "Engineering".to_string(),
            specialization: "Computer Science & Engineering".to_string(),
            duration,
            annual_fees: vec![annual_fee; duration],
            highlights: Vec::new(),
            scholarship_category: None,
            has_industry_fee: false,
            industry_fee_first_year: None,
        }
    }

    fn university(
        one_time: f64,
        recurring: RecurringFees,
        scholarships: ScholarshipRules,
    ) -> University {
        University {
            id: "u1".to_string(),
            name: "Test University".to_string(),
            location: String::new(),
            recognition: String::new(),
            additional_fees: AdditionalFees {
                one_time: OneTimeFee {
                    amount: one_time,
                    includes: Vec::new(),
                },
                recurring,
                enhanced: None,
            },
            scholarships,
            programs: Vec::new(),
        }
    }

    fn tier(name: &str, percentage: f64, gpa_min: f64, gpa_max: f64) -> ScholarshipTier {
        ScholarshipTier {
            name: name.to_string(),
            percentage,
            gpa_min,
            gpa_max,
            conditions: None,
        }
    }

    #[test]
    fn flat_fifty_percent_scenario() {
        let program = program("B.Tech", 4, 500_000.0);
        let university = university(
            50_000.0,
            RecurringFees::None,
            ScholarshipRules::Flat { percentage: 50.0 },
        );

        let calc = calculate(&program, &university);
        assert!((calc.original_total - 2_050_000.0).abs() < f64::EPSILON);

        let ScholarshipOutcome::Flat(quote) = &calc.outcome else {
            panic!("expected flat outcome");
        };
        assert!((quote.total_fees - 1_050_000.0).abs() < f64::EPSILON);
        assert!((quote.savings - 1_000_000.0).abs() < f64::EPSILON);
        assert_eq!(quote.yearly_fees.len(), program.duration);
    }

    #[test]
    fn zero_percent_discount_is_identity() {
        let program = program("B.Tech", 4, 500_000.0);
        let university = university(
            0.0,
            RecurringFees::None,
            ScholarshipRules::Flat { percentage: 0.0 },
        );

        let calc = calculate(&program, &university);
        let ScholarshipOutcome::Flat(quote) = &calc.outcome else {
            panic!("expected flat outcome");
        };
        let yearly_sum: f64 = quote.yearly_fees.iter().sum();
        assert!((yearly_sum - program.tuition_total()).abs() < f64::EPSILON);
        assert!(quote.savings.abs() < f64::EPSILON);
    }

    #[test]
    fn savings_equal_tuition_minus_discounted_sum() {
        let program = program("B.Sc.", 3, 180_000.0);
        let university = university(
            20_000.0,
            RecurringFees::None,
            ScholarshipRules::GpaTiered {
                tiers: vec![tier("Merit 50%", 50.0, 3.5, 5.0), tier("Merit 35%", 35.0, 2.5, 3.49)],
            },
        );

        let calc = calculate(&program, &university);
        for quote in calc.eligible_tiers(None) {
            let yearly_sum: f64 = quote.yearly_fees.iter().sum();
            assert!((quote.savings - (calc.tuition_total - yearly_sum)).abs() < 1e-9);
            assert!(quote.savings >= 0.0);
        }
    }

    #[test]
    fn annual_cycle_recurring_schedule() {
        let program = program("B.Tech", 4, 250_000.0);
        let university = university(
            30_000.0,
            RecurringFees::AnnualCycle {
                examination: 12_000.0,
                registration: 15_000.0,
                medical: 5_000.0,
                alumni: 5_000.0,
            },
            ScholarshipRules::Flat { percentage: 0.0 },
        );

        let calc = calculate(&program, &university);
        // exam 12000*4 + registration 15000*3 + medical 5000*3 + alumni 5000
        assert!((calc.additional.recurring - 113_000.0).abs() < f64::EPSILON);
        assert!(
            (calc.original_total - (1_000_000.0 + 30_000.0 + 113_000.0)).abs() < f64::EPSILON
        );
    }

    #[test]
    fn exam_and_insurance_recurring_schedule() {
        let program = program("BBA", 3, 120_000.0);
        let university = university(
            45_000.0,
            RecurringFees::ExamAndInsurance {
                examination: 10_000.0,
                health_insurance: 8_000.0,
            },
            ScholarshipRules::Flat { percentage: 0.0 },
        );

        let calc = calculate(&program, &university);
        assert!((calc.additional.recurring - 54_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn industry_fee_applies_exactly_once() {
        let mut program = program("B.Tech", 4, 150_000.0);
        program.has_industry_fee = true;
        program.industry_fee_first_year = Some(50_000.0);

        let university = university(
            40_000.0,
            RecurringFees::ExamOnly {
                examination: 9_000.0,
            },
            ScholarshipRules::DegreeFlat {
                degree: "B.Tech".to_string(),
                percentage: 40.0,
                default_percentage: 25.0,
            },
        );

        let calc = calculate(&program, &university);
        assert!((calc.additional.industry - 50_000.0).abs() < f64::EPSILON);
        // exam 9000*4 only; the industry fee never recurs
        assert!((calc.additional.recurring - 36_000.0).abs() < f64::EPSILON);
        assert!(
            (calc.original_total - (600_000.0 + 40_000.0 + 36_000.0 + 50_000.0)).abs()
                < f64::EPSILON
        );

        // And it is included exactly once in the quote total
        let ScholarshipOutcome::Flat(quote) = &calc.outcome else {
            panic!("expected flat outcome");
        };
        let expected = 600_000.0 * 0.6 + 40_000.0 + 36_000.0 + 50_000.0;
        assert!((quote.total_fees - expected).abs() < 1e-9);
    }

    #[test]
    fn unflagged_program_pays_no_industry_fee() {
        let program = program("BCA", 3, 90_000.0);
        let university = university(
            40_000.0,
            RecurringFees::ExamOnly {
                examination: 9_000.0,
            },
            ScholarshipRules::DegreeFlat {
                degree: "B.Tech".to_string(),
                percentage: 40.0,
                default_percentage: 25.0,
            },
        );

        let calc = calculate(&program, &university);
        assert!(calc.additional.industry.abs() < f64::EPSILON);

        // BCA gets the default rate, not the named-degree rate
        let ScholarshipOutcome::Flat(quote) = &calc.outcome else {
            panic!("expected flat outcome");
        };
        assert!((quote.percentage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degree_flat_rate_matches_on_normalized_degree() {
        // "b.e." normalizes to B.Tech, so it receives the named-degree rate
        let program = program("b.e.", 4, 150_000.0);
        let university = university(
            40_000.0,
            RecurringFees::ExamOnly {
                examination: 9_000.0,
            },
            ScholarshipRules::DegreeFlat {
                degree: "B.Tech".to_string(),
                percentage: 40.0,
                default_percentage: 25.0,
            },
        );

        let calc = calculate(&program, &university);
        let ScholarshipOutcome::Flat(quote) = &calc.outcome else {
            panic!("expected flat outcome");
        };
        assert!((quote.percentage - 40.0).abs() < f64::EPSILON);
    }

    fn category_tiered_university(categories: BTreeMap<String, ScholarshipCategory>) -> University {
        let mut u = university(
            30_000.0,
            RecurringFees::AnnualCycle {
                examination: 12_000.0,
                registration: 15_000.0,
                medical: 5_000.0,
                alumni: 5_000.0,
            },
            ScholarshipRules::CategoryTiered { categories },
        );
        u.additional_fees.enhanced = Some(EnhancedFees {
            package_amount: 52_000.0,
            annual_amount: 32_000.0,
            services: Vec::new(),
        });
        u
    }

    #[test]
    fn empty_category_yields_no_scholarship_outcome() {
        let mut categories = BTreeMap::new();
        categories.insert(
            "category4".to_string(),
            ScholarshipCategory {
                name: "Medical & Pharmacy".to_string(),
                description: String::new(),
                tiers: Vec::new(),
                enhanced_tiers: Vec::new(),
            },
        );

        let mut program = program("B.Pharm", 4, 200_000.0);
        program.scholarship_category = Some("category4".to_string());

        let calc = calculate(&program, &category_tiered_university(categories));
        let ScholarshipOutcome::NoScholarship { category } = &calc.outcome else {
            panic!("expected no-scholarship outcome");
        };
        assert_eq!(category.as_ref().map(|c| c.tag.as_str()), Some("category4"));

        // The payable total is the original total
        assert!((calc.payable_total(Some(4.0)) - calc.original_total).abs() < f64::EPSILON);
        assert!(calc.eligible_tiers(Some(4.0)).is_empty());
    }

    #[test]
    fn missing_category_degrades_to_no_scholarship() {
        let program = program("B.Tech", 4, 200_000.0); // no category assigned
        let calc = calculate(&program, &category_tiered_university(BTreeMap::new()));
        assert!(matches!(
            calc.outcome,
            ScholarshipOutcome::NoScholarship { category: None }
        ));
    }

    #[test]
    fn enhanced_tiers_use_the_package_schedule() {
        let mut categories = BTreeMap::new();
        categories.insert(
            "category1".to_string(),
            ScholarshipCategory {
                name: "Engineering & Management".to_string(),
                description: String::new(),
                tiers: vec![tier("Merit 50%", 50.0, 3.5, 5.0)],
                enhanced_tiers: vec![tier("Partner 55%", 55.0, 3.5, 5.0)],
            },
        );

        let mut program = program("B.Tech", 4, 250_000.0);
        program.scholarship_category = Some("category1".to_string());

        let calc = calculate(&program, &category_tiered_university(categories));
        let ScholarshipOutcome::Tiered {
            tiers, enhanced, ..
        } = &calc.outcome
        else {
            panic!("expected tiered outcome");
        };

        // Standard: 50% of 1,000,000 + one-time 30,000 + recurring 113,000
        assert!((tiers[0].total_fees - 643_000.0).abs() < 1e-9);

        // Enhanced: 45% of 1,000,000 + package 52,000 + 32,000 * 3
        assert!((enhanced[0].total_fees - (450_000.0 + 52_000.0 + 96_000.0)).abs() < 1e-9);
    }

    #[test]
    fn gpa_filter_bounds_are_inclusive() {
        let program = program("BBA", 3, 120_000.0);
        let university = university(
            45_000.0,
            RecurringFees::None,
            ScholarshipRules::GpaTiered {
                tiers: vec![tier("Merit 50%", 50.0, 3.5, 5.0), tier("Merit 35%", 35.0, 2.5, 3.49)],
            },
        );

        let calc = calculate(&program, &university);
        // Both boundary values are included
        assert_eq!(calc.eligible_tiers(Some(3.5)).len(), 1);
        assert_eq!(calc.eligible_tiers(Some(5.0)).len(), 1);
        assert_eq!(calc.eligible_tiers(Some(2.5))[0].name, "Merit 35%");
        assert_eq!(calc.eligible_tiers(Some(3.49))[0].name, "Merit 35%");
        // Out of every window
        assert!(calc.eligible_tiers(Some(2.0)).is_empty());
        // No GPA shows everything
        assert_eq!(calc.eligible_tiers(None).len(), 2);
    }

    #[test]
    fn gpa_parsing_treats_bad_input_as_absent() {
        assert_eq!(parse_gpa("3.5"), Some(3.5));
        assert_eq!(parse_gpa(" 4 "), Some(4.0));
        assert_eq!(parse_gpa("five"), None);
        assert_eq!(parse_gpa(""), None);
        assert_eq!(parse_gpa("-1"), None);
        assert_eq!(parse_gpa("7.2"), None);
        assert_eq!(parse_gpa("NaN"), None);
    }

    #[test]
    fn calculation_is_idempotent() {
        let mut program = program("B.Tech", 4, 250_000.0);
        program.scholarship_category = Some("category1".to_string());

        let mut categories = BTreeMap::new();
        categories.insert(
            "category1".to_string(),
            ScholarshipCategory {
                name: "Engineering & Management".to_string(),
                description: String::new(),
                tiers: vec![tier("Merit 50%", 50.0, 3.5, 5.0)],
                enhanced_tiers: Vec::new(),
            },
        );
        let university = category_tiered_university(categories);

        let first = calculate(&program, &university);
        let second = calculate(&program, &university);
        assert_eq!(first, second);
    }
}
