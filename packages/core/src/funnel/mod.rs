//! Leads Funnel Module
//!
//! Pure estimation of a paid-ads funnel (impressions, clicks, leads),
//! its cost and value metrics, a benchmark rating and a list of
//! rule-based improvement tips.

pub mod calculator;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod format;
pub mod market;
pub mod tips;
pub mod types;

#[cfg(test)]
mod tests;

pub use calculator::{compute_funnel, FunnelCalculator};
pub use classifier::{classify, PerformanceClassifier};
pub use engine::LeadsEngine;
pub use error::FunnelError;
pub use format::{format_currency, format_currency_with, format_percentage};
pub use market::{MarketDataset, REGIONAL_MARKET_DEFAULTS};
pub use tips::{default_rules, generate_tips, TipGenerator, TipRule};
pub use types::*;
