//! Integration tests for the public estimate pipeline.
//!
//! Each test goes through the same assembly as `main.rs`: a `Config` picks
//! the market dataset, a `LeadsEngine` is built from it, and the estimate is
//! rendered as JSON or text.

use std::fs;
use std::path::PathBuf;

use leads_calculator::{
    config::{Config, OutputFormat},
    error::AppError,
    funnel::{
        CampaignInputs, LeadsEngine, MarketDataset, Priority, Rating, TipCategory,
        REGIONAL_MARKET_DEFAULTS,
    },
    report,
};

// ---- Helpers ----------------------------------------------------------------

fn write_dataset(name: &str, dataset: &MarketDataset) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "leads-calculator-{}-{}.json",
        name,
        std::process::id()
    ));
    fs::write(&path, serde_json::to_string_pretty(dataset).unwrap()).unwrap();
    path
}

fn config_with_market(path: &PathBuf) -> Config {
    let path = path.display().to_string();
    Config::from_lookup(move |key| match key {
        "LEADS_MARKET_FILE" => Some(path.clone()),
        "LEADS_OUTPUT" => Some("json".to_string()),
        _ => None,
    })
    .unwrap()
}

// ---- Tests ------------------------------------------------------------------

#[test]
fn estimate_with_market_loaded_from_file() {
    let mut dataset = REGIONAL_MARKET_DEFAULTS;
    dataset.currency = "$".into();
    dataset.avg_lead_value = 100_000.0;
    let path = write_dataset("file", &dataset);

    let config = config_with_market(&path);
    assert_eq!(config.output, OutputFormat::Json);

    let engine = LeadsEngine::new(config.load_market().unwrap());
    let estimate = engine
        .estimate(&CampaignInputs::new(150_000.0, 750.0, 2.3, 4.2))
        .unwrap();

    // 8 leads * 100_000 = 800_000 -> ROI 433%
    assert_eq!(estimate.result.leads, 8);
    assert_eq!(estimate.result.roi, 433);
    assert_eq!(estimate.result.performance.roi, Rating::Excellent);

    let text = report::render_text(&estimate, engine.market());
    assert!(text.contains("$800K"));

    fs::remove_file(path).ok();
}

#[test]
fn invalid_dataset_file_surfaces_as_app_error() {
    let mut dataset = REGIONAL_MARKET_DEFAULTS;
    dataset.benchmarks.conversion_rate.excellent = 0.5;
    let path = write_dataset("invalid", &dataset);

    let err: AppError = config_with_market(&path).load_market().unwrap_err().into();
    assert!(matches!(err, AppError::Dataset(_)));
    assert!(err.to_string().contains("conversionRate"));

    fs::remove_file(path).ok();
}

#[test]
fn json_output_shape() {
    let engine = LeadsEngine::default();
    let estimate = engine.estimate(&CampaignInputs::new(90_000.0, 750.0, 1.5, 2.0));
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&estimate).unwrap()).unwrap();

    assert_eq!(json["inputs"]["clickRate"], 1.5);
    assert_eq!(json["result"]["impressions"], 8000);
    assert_eq!(json["result"]["leads"], 2);
    assert_eq!(json["result"]["performance"]["overall"], "poor");

    let priorities: Vec<_> = json["tips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tip| tip["priority"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(priorities, vec!["high", "high", "high", "medium", "medium", "low"]);
}

#[test]
fn incomplete_inputs_serialize_as_null() {
    let engine = LeadsEngine::default();
    let estimate = engine.estimate(&CampaignInputs::new(150_000.0, 0.0, 2.3, 4.2));

    assert!(estimate.is_none());
    assert_eq!(serde_json::to_string(&estimate).unwrap(), "null");
}

#[test]
fn tips_follow_rule_order_within_priority() {
    let engine = LeadsEngine::default();
    let tips = engine.tips_for(&CampaignInputs::new(90_000.0, 750.0, 1.5, 2.0));

    let order: Vec<_> = tips.iter().map(|t| (t.priority, t.category)).collect();
    assert_eq!(
        order,
        vec![
            (Priority::High, TipCategory::Conversion),
            (Priority::High, TipCategory::Traffic),
            (Priority::High, TipCategory::Roi),
            (Priority::Medium, TipCategory::Cost),
            (Priority::Medium, TipCategory::Budget),
            (Priority::Low, TipCategory::Market),
        ]
    );
}
