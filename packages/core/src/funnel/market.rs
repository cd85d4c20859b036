//! Regional market dataset: baseline figures and benchmark tables

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::funnel::error::FunnelError;

/// Read-only market data the calculator, classifier and tip rules work from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataset {
    pub currency: Cow<'static, str>,
    pub avg_cost_per_click: f64,
    pub avg_click_rate: f64,
    pub avg_conversion_rate: f64,
    pub avg_lead_value: f64,
    pub default_investment: f64,
    pub benchmarks: Benchmarks,
    pub context: MarketContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmarks {
    pub click_rate: RateBenchmarks,
    pub conversion_rate: RateBenchmarks,
    pub cost_per_lead: CostBenchmarks,
}

/// Minimum value (inclusive) for each tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBenchmarks {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub poor: f64,
}

/// Maximum cost (inclusive) for each tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBenchmarks {
    pub excellent: f64,
    pub good: f64,
    pub acceptable: f64,
    pub expensive: f64,
}

/// Typical ranges shown next to the inputs, e.g. "CPC: 600-900"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketContext {
    pub cost_per_click: Range,
    pub click_rate: Range,
    pub conversion_rate: Range,
    pub lead_value: Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

/// Costa Rica SME digital marketing figures (2024).
pub const REGIONAL_MARKET_DEFAULTS: MarketDataset = MarketDataset {
    currency: Cow::Borrowed("₡"),
    avg_cost_per_click: 750.0,
    avg_click_rate: 2.3,
    avg_conversion_rate: 4.2,
    avg_lead_value: 45_000.0,
    default_investment: 150_000.0,
    benchmarks: Benchmarks {
        click_rate: RateBenchmarks {
            excellent: 4.0,
            good: 2.5,
            average: 1.8,
            poor: 1.0,
        },
        conversion_rate: RateBenchmarks {
            excellent: 8.0,
            good: 5.0,
            average: 3.0,
            poor: 1.5,
        },
        cost_per_lead: CostBenchmarks {
            excellent: 8_000.0,
            good: 12_000.0,
            acceptable: 18_000.0,
            expensive: 25_000.0,
        },
    },
    context: MarketContext {
        cost_per_click: Range { min: 600.0, max: 900.0 },
        click_rate: Range { min: 2.0, max: 3.0 },
        conversion_rate: Range { min: 3.5, max: 5.0 },
        lead_value: Range { min: 30_000.0, max: 60_000.0 },
    },
};

impl Default for MarketDataset {
    fn default() -> Self {
        REGIONAL_MARKET_DEFAULTS
    }
}

impl MarketDataset {
    /// Parse and validate a dataset from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, FunnelError> {
        let dataset: MarketDataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FunnelError> {
        let path = path.as_ref();
        debug!("Loading market dataset from {}", path.display());

        let raw = fs::read_to_string(path).map_err(|source| FunnelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_json_str(&raw)?;

        info!(currency = %dataset.currency, "Market dataset loaded");
        Ok(dataset)
    }

    /// Check baseline figures are positive and benchmark tiers are ordered.
    pub fn validate(&self) -> Result<(), FunnelError> {
        let baselines = [
            ("avgCostPerClick", self.avg_cost_per_click),
            ("avgClickRate", self.avg_click_rate),
            ("avgConversionRate", self.avg_conversion_rate),
            ("avgLeadValue", self.avg_lead_value),
            ("defaultInvestment", self.default_investment),
        ];
        for (name, value) in baselines {
            if !value.is_finite() || value <= 0.0 {
                return Err(FunnelError::invalid_dataset(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        check_descending("benchmarks.clickRate", &self.benchmarks.click_rate)?;
        check_descending("benchmarks.conversionRate", &self.benchmarks.conversion_rate)?;

        let cost = &self.benchmarks.cost_per_lead;
        let tiers = [cost.excellent, cost.good, cost.acceptable, cost.expensive];
        if tiers.iter().any(|t| !t.is_finite()) || tiers.windows(2).any(|w| w[0] > w[1]) {
            return Err(FunnelError::invalid_dataset(
                "benchmarks.costPerLead tiers must be finite and ascending",
            ));
        }

        Ok(())
    }
}

fn check_descending(name: &str, table: &RateBenchmarks) -> Result<(), FunnelError> {
    let tiers = [table.excellent, table.good, table.average, table.poor];
    if tiers.iter().any(|t| !t.is_finite()) || tiers.windows(2).any(|w| w[0] < w[1]) {
        return Err(FunnelError::invalid_dataset(format!(
            "{} tiers must be finite and descending",
            name
        )));
    }
    Ok(())
}
