//! Funnel Calculator
//!
//! Turns a budget, CPC, CTR and conversion rate into impressions, clicks
//! and leads, plus cost and value metrics. Every funnel stage is rounded
//! to a whole count before it feeds the next stage.

use tracing::{debug, trace};

use crate::funnel::{
    classifier::PerformanceClassifier,
    market::{MarketDataset, REGIONAL_MARKET_DEFAULTS},
    types::{CampaignInputs, FunnelResult},
};

/// Calculator bound to one market dataset
#[derive(Debug, Clone)]
pub struct FunnelCalculator {
    lead_value: f64,
    classifier: PerformanceClassifier,
}

impl FunnelCalculator {
    pub fn new(market: &MarketDataset) -> Self {
        Self {
            lead_value: market.avg_lead_value,
            classifier: PerformanceClassifier::new(market.benchmarks),
        }
    }

    /// Compute the full funnel, or `None` when the inputs are incomplete.
    pub fn compute(&self, inputs: &CampaignInputs) -> Option<FunnelResult> {
        if !inputs.is_complete() {
            trace!(?inputs, "Incomplete campaign inputs, no funnel computed");
            return None;
        }

        let CampaignInputs {
            investment,
            cost_per_click,
            click_rate,
            conversion_rate,
        } = *inputs;

        let impressions = to_count(round_half_up(investment / (cost_per_click * (click_rate / 100.0))));
        let clicks = to_count(round_half_up(impressions as f64 * (click_rate / 100.0)));
        let leads = to_count(round_half_up(clicks as f64 * (conversion_rate / 100.0)));

        let cost_per_lead = if leads > 0 {
            to_count(round_half_up(investment / leads as f64))
        } else {
            0
        };
        let total_lead_value = leads as f64 * self.lead_value;
        let roi = if leads > 0 {
            round_half_up(((total_lead_value - investment) / investment) * 100.0) as i64
        } else {
            0
        };

        let impression_to_lead = if impressions > 0 {
            (leads as f64 / impressions as f64) * 100.0
        } else {
            0.0
        };

        let performance = self
            .classifier
            .classify(click_rate, conversion_rate, cost_per_lead, roi);

        debug!(
            impressions,
            clicks,
            leads,
            cost_per_lead,
            roi,
            overall = ?performance.overall,
            "Funnel computed"
        );

        Some(FunnelResult {
            impressions,
            clicks,
            leads,
            cost_per_lead,
            cost_per_click,
            total_investment: investment,
            lead_value: self.lead_value,
            total_lead_value,
            roi,
            click_rate,
            conversion_rate,
            impression_to_click: click_rate,
            click_to_lead: conversion_rate,
            impression_to_lead,
            performance,
        })
    }
}

impl Default for FunnelCalculator {
    fn default() -> Self {
        Self::new(&REGIONAL_MARKET_DEFAULTS)
    }
}

/// Compute a funnel against the regional market defaults.
pub fn compute_funnel(inputs: &CampaignInputs) -> Option<FunnelResult> {
    FunnelCalculator::default().compute(inputs)
}

/// Round to the nearest integer, with halves going toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// `as` saturates: negatives and NaN become 0, overflow becomes u64::MAX.
fn to_count(value: f64) -> u64 {
    value as u64
}
