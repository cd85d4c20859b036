//! Leads Engine - ties the calculator and tip generator to one market

use tracing::info;

use crate::funnel::{
    calculator::FunnelCalculator,
    market::MarketDataset,
    tips::TipGenerator,
    types::{CampaignInputs, Estimate, Tip},
};

/// Runs funnel calculation and tip generation against one market dataset
#[derive(Debug, Clone)]
pub struct LeadsEngine {
    market: MarketDataset,
    calculator: FunnelCalculator,
    tips: TipGenerator,
}

impl LeadsEngine {
    /// Create an engine with the default rule table
    pub fn new(market: MarketDataset) -> Self {
        Self::with_tip_generator(market, TipGenerator::new())
    }

    pub fn with_tip_generator(market: MarketDataset, tips: TipGenerator) -> Self {
        let calculator = FunnelCalculator::new(&market);
        Self {
            market,
            calculator,
            tips,
        }
    }

    /// Funnel and tips for the inputs, or `None` if they are incomplete.
    pub fn estimate(&self, inputs: &CampaignInputs) -> Option<Estimate> {
        let result = self.calculator.compute(inputs)?;
        let tips = self.tips.generate(Some(&result), inputs);

        info!(
            leads = result.leads,
            roi = result.roi,
            tips = tips.len(),
            "Estimate ready"
        );

        Some(Estimate {
            inputs: *inputs,
            result,
            tips,
        })
    }

    /// Tips only; empty when the inputs are incomplete.
    pub fn tips_for(&self, inputs: &CampaignInputs) -> Vec<Tip> {
        let result = self.calculator.compute(inputs);
        self.tips.generate(result.as_ref(), inputs)
    }

    /// Starting inputs for this engine's market
    pub fn default_inputs(&self) -> CampaignInputs {
        CampaignInputs::defaults_for(&self.market)
    }

    pub fn market(&self) -> &MarketDataset {
        &self.market
    }
}

impl Default for LeadsEngine {
    fn default() -> Self {
        Self::new(MarketDataset::default())
    }
}
