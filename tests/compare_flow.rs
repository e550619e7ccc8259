//! End-to-end comparison flow over the built-in catalogs
//!
//! Drives the same path the CLI takes: load catalogs, filter, select a
//! program, fan out matches, compute fees, and render shareable messages.

use uni_compare::core::compare::Workspace;
use uni_compare::core::fees::ScholarshipOutcome;
use uni_compare::core::matcher::MatchQuality;
use uni_compare::core::models::CatalogSet;
use uni_compare::core::normalize::DegreeLevel;

fn workspace() -> Workspace {
    Workspace::new(CatalogSet::builtin())
}

#[test]
fn flagship_engineering_program_matches_everywhere() {
    let ws = workspace();
    let comparison = ws
        .select_program("riverline", "btech-cse")
        .expect("selection succeeds");

    // Every partner offers a comparable four-year engineering degree
    assert_eq!(comparison.entries.len(), 4);
    assert_eq!(comparison.overall.quality, MatchQuality::Perfect);

    for entry in &comparison.entries {
        assert!(entry.fees.original_total > 0.0);
        if let Some(matched) = &entry.matched {
            assert!(matched.quality >= MatchQuality::Approximate);
            assert!(matched.score >= 50.0);
        }
    }
}

#[test]
fn selection_from_any_university_works_symmetrically() {
    let ws = workspace();
    // Select at the category-tiered university instead of the flat one
    let comparison = ws
        .select_program("meadowbrook", "btech-cse")
        .expect("selection succeeds");

    assert!(comparison.source().is_source);
    assert_eq!(comparison.source().university_id, "meadowbrook");
    assert!(comparison.entries.iter().any(|e| e.university_id == "riverline"));
}

#[test]
fn postgraduate_selection_never_pairs_with_undergraduate_programs() {
    let ws = workspace();
    let comparison = ws
        .select_program("riverline", "mba-fin")
        .expect("selection succeeds");

    for entry in &comparison.entries {
        if entry.is_source {
            continue;
        }
        let university = ws.catalog().university(&entry.university_id).expect("university");
        let program = university.program(&entry.program_id).expect("program");
        assert_eq!(program.duration, 2);
    }
}

#[test]
fn filters_narrow_the_candidate_pools() {
    let mut ws = workspace();
    ws.filters.level = Some(DegreeLevel::Masters);

    // The management selection still matches the MBA at meadowbrook
    let comparison = ws
        .select_program("riverline", "mba-fin")
        .expect("selection succeeds");
    assert!(comparison.entries.len() >= 2);

    // But an engineering program finds nothing in a masters-only pool
    let mismatch = ws
        .select_program("riverline", "btech-cse")
        .expect("selection succeeds");
    assert_eq!(mismatch.entries.len(), 1);
    assert_eq!(mismatch.overall.quality, MatchQuality::NoMatch);
}

#[test]
fn flat_university_quotes_follow_the_guaranteed_discount() {
    let ws = workspace();
    let comparison = ws
        .select_program("riverline", "btech-cse")
        .expect("selection succeeds");

    let entry = comparison.entry("riverline").expect("source entry");
    let ScholarshipOutcome::Flat(quote) = &entry.fees.outcome else {
        panic!("riverline is the flat-scholarship university");
    };
    assert!((quote.percentage - 50.0).abs() < f64::EPSILON);

    // 50% of 10,00,000 tuition + 50,000 one-time
    assert!((entry.fees.original_total - 1_050_000.0).abs() < f64::EPSILON);
    assert!((quote.total_fees - 550_000.0).abs() < f64::EPSILON);
    assert!((quote.savings - 500_000.0).abs() < f64::EPSILON);
}

#[test]
fn medical_program_surfaces_the_no_scholarship_outcome() {
    let ws = workspace();
    let comparison = ws
        .select_program("meadowbrook", "mbbs")
        .expect("selection succeeds");

    let entry = comparison.entry("meadowbrook").expect("source entry");
    assert!(matches!(
        entry.fees.outcome,
        ScholarshipOutcome::NoScholarship { .. }
    ));
    assert!(
        (entry.fees.payable_total(Some(5.0)) - entry.fees.original_total).abs() < f64::EPSILON
    );

    // No other partner offers a five-year MBBS
    assert_eq!(comparison.overall.quality, MatchQuality::NoMatch);
    assert!(comparison.overall.reason.contains("MBBS"));
}

#[test]
fn gpa_changes_display_eligibility_without_touching_totals() {
    let mut ws = workspace();
    let before = ws
        .select_program("northgate", "bba-gen")
        .expect("selection succeeds");

    ws.set_student_gpa("3.0");
    let after = ws
        .select_program("northgate", "bba-gen")
        .expect("selection succeeds");

    // Monetary results are identical; only the display filter differs
    assert_eq!(before, after);

    let entry = after.entry("northgate").expect("source entry");
    let eligible = entry.fees.eligible_tiers(ws.student.gpa);
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].name, "Merit Scholarship 35%");
}

#[test]
fn offers_render_for_every_university_in_a_comparison() {
    let mut ws = workspace();
    ws.set_student_name("Anika Rahman");
    ws.set_student_gpa("3.8");

    let comparison = ws
        .select_program("riverline", "btech-cse")
        .expect("selection succeeds");

    for entry in &comparison.entries {
        let message = ws
            .export_offer(&comparison, &entry.university_id, None)
            .expect("offer renders");
        assert!(message.starts_with("Dear Anika Rahman,"));
        assert!(!message.contains("{{"));
    }
}

#[test]
fn comparison_message_recommends_a_budget_option() {
    let mut ws = workspace();
    ws.set_student_gpa("4.0");

    let comparison = ws
        .select_program("riverline", "btech-cse")
        .expect("selection succeeds");
    let message = ws.export_comparison(&comparison).expect("message renders");

    assert!(message.contains("RECOMMENDED ON BUDGET"));
    assert!(message.contains("(selected)"));
    // Every compared university appears by name
    for entry in &comparison.entries {
        let university = ws.catalog().university(&entry.university_id).expect("university");
        assert!(message.contains(&university.name));
    }
}

#[test]
fn industry_fee_program_carries_the_fee_through_the_whole_flow() {
    let ws = workspace();
    let comparison = ws
        .select_program("crestfield", "btech-cse")
        .expect("selection succeeds");

    let entry = comparison.entry("crestfield").expect("source entry");
    assert!((entry.fees.additional.industry - 50_000.0).abs() < f64::EPSILON);

    let message = ws
        .export_offer(&comparison, "crestfield", None)
        .expect("offer renders");
    assert!(message.contains("One-time industry fee"));
}
