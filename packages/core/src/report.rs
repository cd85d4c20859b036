//! Plain-text rendering of estimates for the terminal

use std::fmt;

use crate::funnel::{
    format::{format_currency_with, format_locale, format_percentage},
    CampaignInputs, Estimate, MarketDataset, Priority,
};

/// Text view of an estimate: funnel, metrics, ratings and tips.
pub struct TextReport<'a> {
    pub estimate: &'a Estimate,
    pub market: &'a MarketDataset,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = |amount: f64| format_currency_with(&self.market.currency, amount);
        let result = &self.estimate.result;
        let rating = &result.performance;

        writeln!(f, "Funnel")?;
        writeln!(f, "  Impressions   {:>12}", format_locale(result.impressions as f64))?;
        writeln!(f, "  Clicks        {:>12}", format_locale(result.clicks as f64))?;
        writeln!(f, "  Leads         {:>12}", format_locale(result.leads as f64))?;
        writeln!(
            f,
            "  Impression -> lead  {}",
            format_percentage(result.impression_to_lead)
        )?;
        writeln!(f)?;

        writeln!(f, "Metrics")?;
        writeln!(f, "  Investment    {:>12}", money(result.total_investment))?;
        writeln!(f, "  CPC           {:>12}", money(result.cost_per_click))?;
        writeln!(
            f,
            "  CTR           {:>12}  [{}]",
            format_percentage(result.click_rate),
            rating.click_rate
        )?;
        writeln!(
            f,
            "  Conversion    {:>12}  [{}]",
            format_percentage(result.conversion_rate),
            rating.conversion
        )?;
        writeln!(
            f,
            "  Cost per lead {:>12}  [{}]",
            money(result.cost_per_lead as f64),
            rating.cost
        )?;
        writeln!(f, "  Lead value    {:>12}", money(result.lead_value))?;
        writeln!(f, "  Total value   {:>12}", money(result.total_lead_value))?;
        writeln!(
            f,
            "  ROI           {:>12}  [{}]",
            format_percentage(result.roi as f64),
            rating.roi
        )?;
        writeln!(f, "  Overall       {:>12}", rating.overall)?;

        if self.estimate.tips.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Tips")?;
        for tip in &self.estimate.tips {
            let marker = match tip.priority {
                Priority::High => "!!!",
                Priority::Medium => "!! ",
                Priority::Low => "!  ",
            };
            writeln!(f, "  {} {}: {}", marker, tip.title, tip.message)?;
            writeln!(f, "      -> {}", tip.action)?;
            if let Some(impact) = &tip.impact {
                writeln!(f, "      Impacto: {}", impact)?;
            }
        }
        Ok(())
    }
}

/// Market context and benchmark cutoffs, e.g. "CPC: ₡600-900".
pub struct MarketReport<'a>(pub &'a MarketDataset);

impl fmt::Display for MarketReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let market = self.0;
        let money = |amount: f64| format_currency_with(&market.currency, amount);
        let ctx = &market.context;
        let bench = &market.benchmarks;

        writeln!(f, "Market")?;
        writeln!(
            f,
            "  CPC: {}{}-{}",
            market.currency,
            format_locale(ctx.cost_per_click.min),
            format_locale(ctx.cost_per_click.max)
        )?;
        writeln!(
            f,
            "  CTR: {}-{}%",
            format_locale(ctx.click_rate.min),
            format_locale(ctx.click_rate.max)
        )?;
        writeln!(
            f,
            "  Conversion: {}-{}%",
            format_locale(ctx.conversion_rate.min),
            format_locale(ctx.conversion_rate.max)
        )?;
        writeln!(
            f,
            "  Lead value: {}-{}",
            money(ctx.lead_value.min),
            money(ctx.lead_value.max)
        )?;
        writeln!(
            f,
            "  CTR tiers: excellent >= {}%, good >= {}%, average >= {}%",
            bench.click_rate.excellent, bench.click_rate.good, bench.click_rate.average
        )?;
        writeln!(
            f,
            "  Conversion tiers: excellent >= {}%, good >= {}%, average >= {}%",
            bench.conversion_rate.excellent, bench.conversion_rate.good, bench.conversion_rate.average
        )?;
        writeln!(
            f,
            "  Cost per lead tiers: excellent <= {}, good <= {}, acceptable <= {}",
            money(bench.cost_per_lead.excellent),
            money(bench.cost_per_lead.good),
            money(bench.cost_per_lead.acceptable)
        )
    }
}

/// Render a full estimate as text.
pub fn render_text(estimate: &Estimate, market: &MarketDataset) -> String {
    TextReport { estimate, market }.to_string()
}

/// Message shown when the inputs cannot produce an estimate.
pub fn render_no_result(inputs: &CampaignInputs) -> String {
    format!(
        "No estimate: investment, cost per click, click rate and conversion rate \
         must all be positive numbers (got {}, {}, {}, {})",
        inputs.investment, inputs.cost_per_click, inputs.click_rate, inputs.conversion_rate
    )
}

pub fn render_market(market: &MarketDataset) -> String {
    MarketReport(market).to_string()
}
