//! Core data types for the leads funnel

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::funnel::market::MarketDataset;

/// Campaign parameters supplied by the caller.
///
/// Missing and `null` fields deserialize to `0`, which the calculator
/// treats as insufficient input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignInputs {
    /// Monthly ad spend
    #[serde(deserialize_with = "null_as_zero")]
    pub investment: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub cost_per_click: f64,
    /// Click-through rate, in percent
    #[serde(deserialize_with = "null_as_zero")]
    pub click_rate: f64,
    /// Lead conversion rate, in percent
    #[serde(deserialize_with = "null_as_zero")]
    pub conversion_rate: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl CampaignInputs {
    pub fn new(investment: f64, cost_per_click: f64, click_rate: f64, conversion_rate: f64) -> Self {
        Self {
            investment,
            cost_per_click,
            click_rate,
            conversion_rate,
        }
    }

    /// Starting inputs for a market: its default budget and average rates.
    pub fn defaults_for(market: &MarketDataset) -> Self {
        Self {
            investment: market.default_investment,
            cost_per_click: market.avg_cost_per_click,
            click_rate: market.avg_click_rate,
            conversion_rate: market.avg_conversion_rate,
        }
    }

    /// All four fields present, finite and strictly positive.
    pub fn is_complete(&self) -> bool {
        [
            self.investment,
            self.cost_per_click,
            self.click_rate,
            self.conversion_rate,
        ]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0)
    }
}

/// Complete funnel estimate for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelResult {
    // Funnel stages
    pub impressions: u64,
    pub clicks: u64,
    pub leads: u64,

    // Cost metrics
    pub cost_per_lead: u64,
    pub cost_per_click: f64,
    pub total_investment: f64,

    // Value metrics
    pub lead_value: f64,
    pub total_lead_value: f64,
    pub roi: i64,

    pub click_rate: f64,
    pub conversion_rate: f64,

    // Stage-to-stage conversion, in percent
    pub impression_to_click: f64,
    pub click_to_lead: f64,
    pub impression_to_lead: f64,

    pub performance: PerformanceRating,
}

/// Benchmark ratings for one funnel result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRating {
    pub click_rate: Rating,
    pub conversion: Rating,
    pub cost: CostRating,
    pub roi: Rating,
    pub overall: Rating,
}

/// Four-tier rating used for rates, ROI and the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Poor,
}

/// Cost-per-lead rating; the lower the cost, the better the tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostRating {
    Excellent,
    Good,
    Acceptable,
    Expensive,
}

impl Rating {
    /// Numeric score used when averaging into the overall rating.
    pub fn score(self) -> u8 {
        match self {
            Rating::Excellent => 4,
            Rating::Good => 3,
            Rating::Average => 2,
            Rating::Poor => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excelente",
            Rating::Good => "Bueno",
            Rating::Average => "Promedio",
            Rating::Poor => "Bajo",
        }
    }
}

impl CostRating {
    /// Only the top two tiers share a name with the four-tier scale, so
    /// `Acceptable` falls through to the bottom score.
    pub fn score(self) -> u8 {
        match self {
            CostRating::Excellent => 4,
            CostRating::Good => 3,
            CostRating::Acceptable | CostRating::Expensive => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CostRating::Excellent => "Excelente",
            CostRating::Good => "Bueno",
            CostRating::Acceptable => "Aceptable",
            CostRating::Expensive => "Caro",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for CostRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A single improvement tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(rename = "type")]
    pub tip_type: TipType,
    pub category: TipCategory,
    pub title: String,
    pub message: String,
    pub action: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

/// Presentation hint for a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipType {
    Success,
    Warning,
    Info,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Conversion,
    Cost,
    Budget,
    Traffic,
    Roi,
    Optimization,
    Market,
}

/// Tip priority. Variants are declared lowest first so the derived
/// ordering ranks `High` above `Medium` above `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn weight(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Funnel result together with the tips derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub inputs: CampaignInputs,
    pub result: FunnelResult,
    pub tips: Vec<Tip>,
}
