//! Property-based and scenario tests across the funnel module
//!
//! Unit tests for each component live next to it; this module checks the
//! invariants that span calculator, classifier and tip generation.

use crate::funnel::{
    calculator::{compute_funnel, round_half_up},
    engine::LeadsEngine,
    market::REGIONAL_MARKET_DEFAULTS,
    tips::{default_rules, generate_tips},
    types::*,
};
use proptest::prelude::*;

// Test data generators
fn inputs_strategy() -> impl Strategy<Value = CampaignInputs> {
    (
        1_000.0f64..10_000_000.0f64, // Monthly budget
        50.0f64..5_000.0f64,         // CPC
        0.1f64..=100.0f64,           // CTR %
        0.1f64..=100.0f64,           // Conversion %
    )
        .prop_map(|(investment, cost_per_click, click_rate, conversion_rate)| {
            CampaignInputs::new(investment, cost_per_click, click_rate, conversion_rate)
        })
}

fn rule_index(category: TipCategory) -> usize {
    default_rules()
        .iter()
        .position(|rule| rule.category == category)
        .expect("every category has a rule")
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn reference_campaign_end_to_end() {
    let engine = LeadsEngine::default();
    let estimate = engine
        .estimate(&engine.default_inputs())
        .expect("market defaults are complete inputs");

    let result = &estimate.result;
    assert_eq!(
        (result.impressions, result.clicks, result.leads),
        (8696, 200, 8)
    );
    assert_eq!(result.cost_per_lead, 18_750);
    assert_eq!(result.total_lead_value, 360_000.0);
    assert_eq!(result.roi, 140);
    assert_eq!(result.performance.overall, Rating::Average);

    let titles: Vec<_> = estimate.tips.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Costo por Lead Alto", "Tip Mercado CR"]);
}

#[test]
fn zero_investment_has_no_result_and_no_tips() {
    let inputs = CampaignInputs::new(0.0, 750.0, 2.3, 4.2);

    assert!(compute_funnel(&inputs).is_none());
    assert!(generate_tips(None, &inputs).is_empty());
    assert!(LeadsEngine::default().estimate(&inputs).is_none());
    assert!(LeadsEngine::default().tips_for(&inputs).is_empty());
}

#[test]
fn missing_fields_deserialize_to_no_result() {
    let inputs: CampaignInputs =
        serde_json::from_str(r#"{ "investment": 150000, "costPerClick": 750, "clickRate": 2.3 }"#)
            .unwrap();

    assert_eq!(inputs.conversion_rate, 0.0);
    assert!(compute_funnel(&inputs).is_none());
}

#[test]
fn null_fields_deserialize_to_no_result() {
    let inputs: CampaignInputs = serde_json::from_str(
        r#"{ "investment": null, "costPerClick": 750, "clickRate": 2.3, "conversionRate": 4.2 }"#,
    )
    .unwrap();

    assert_eq!(inputs.investment, 0.0);
    assert_eq!(inputs.cost_per_click, 750.0);
    assert!(compute_funnel(&inputs).is_none());
    assert!(generate_tips(compute_funnel(&inputs).as_ref(), &inputs).is_empty());
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let result = compute_funnel(&CampaignInputs::new(150_000.0, 750.0, 2.3, 4.2)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["costPerLead"], 18_750);
    assert_eq!(json["impressionToClick"], 2.3);
    assert_eq!(json["performance"]["cost"], "expensive");
    assert_eq!(json["performance"]["clickRate"], "average");
}

#[test]
fn tip_serializes_type_field() {
    let inputs = CampaignInputs::new(150_000.0, 750.0, 2.3, 2.5);
    let tips = generate_tips(compute_funnel(&inputs).as_ref(), &inputs);
    let json = serde_json::to_value(&tips[0]).unwrap();

    assert_eq!(json["type"], "warning");
    assert_eq!(json["category"], "conversion");
    assert_eq!(json["priority"], "high");
}

#[test]
fn alternate_dataset_does_not_leak_between_engines() {
    let mut market = REGIONAL_MARKET_DEFAULTS;
    market.avg_lead_value = 1_000.0;
    let cheap = LeadsEngine::new(market);
    let regional = LeadsEngine::default();

    let inputs = CampaignInputs::new(150_000.0, 750.0, 2.3, 4.2);
    let cheap_roi = cheap.estimate(&inputs).unwrap().result.roi;
    let regional_roi = regional.estimate(&inputs).unwrap().result.roi;

    assert_eq!(cheap_roi, -95);
    assert_eq!(regional_roi, 140);
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn funnel_narrows_monotonically(inputs in inputs_strategy()) {
        let result = compute_funnel(&inputs).unwrap();

        prop_assert!(result.impressions >= result.clicks);
        prop_assert!(result.clicks >= result.leads);
        prop_assert!(result.impression_to_lead.is_finite());
        prop_assert!((0.0..=100.0).contains(&result.impression_to_lead));
    }

    #[test]
    fn cost_per_lead_follows_leads(inputs in inputs_strategy()) {
        let result = compute_funnel(&inputs).unwrap();

        if result.leads == 0 {
            prop_assert_eq!(result.cost_per_lead, 0);
            prop_assert_eq!(result.roi, 0);
        } else {
            let expected = round_half_up(inputs.investment / result.leads as f64) as u64;
            prop_assert_eq!(result.cost_per_lead, expected);
        }
    }

    #[test]
    fn roi_sign_tracks_value_versus_spend(inputs in inputs_strategy()) {
        let result = compute_funnel(&inputs).unwrap();

        if result.total_lead_value < inputs.investment {
            prop_assert!(result.roi <= 0);
        } else {
            prop_assert!(result.roi >= 0);
        }
    }

    #[test]
    fn tips_sorted_by_priority_then_rule_order(inputs in inputs_strategy()) {
        let result = compute_funnel(&inputs);
        let tips = generate_tips(result.as_ref(), &inputs);

        for pair in tips.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.priority >= b.priority);
            if a.priority == b.priority {
                prop_assert!(rule_index(a.category) < rule_index(b.category));
            }
        }
    }

    #[test]
    fn conversion_tip_fires_only_below_three_percent(inputs in inputs_strategy()) {
        let result = compute_funnel(&inputs);
        let tips = generate_tips(result.as_ref(), &inputs);

        let has_conversion_tip = tips
            .iter()
            .any(|t| t.category == TipCategory::Conversion && t.priority == Priority::High);
        prop_assert_eq!(has_conversion_tip, inputs.conversion_rate < 3.0);
    }

    #[test]
    fn non_positive_field_means_no_result(
        inputs in inputs_strategy(),
        field in 0usize..4,
        bad in prop_oneof![Just(0.0f64), Just(-1.0f64), Just(f64::NAN)],
    ) {
        let mut inputs = inputs;
        match field {
            0 => inputs.investment = bad,
            1 => inputs.cost_per_click = bad,
            2 => inputs.click_rate = bad,
            _ => inputs.conversion_rate = bad,
        }

        prop_assert!(compute_funnel(&inputs).is_none());
        prop_assert!(generate_tips(compute_funnel(&inputs).as_ref(), &inputs).is_empty());
    }
}
