use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;
use crate::funnel::CampaignInputs;

/// Leads Calculator CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "leads-calculator",
    version,
    about = "Estimate impressions, clicks, leads and ROI for a monthly ad budget"
)]
pub struct Cli {
    /// Monthly ad investment
    #[arg(long)]
    pub investment: Option<f64>,

    /// Cost per click
    #[arg(long)]
    pub cost_per_click: Option<f64>,

    /// Click-through rate, in percent
    #[arg(long)]
    pub click_rate: Option<f64>,

    /// Lead conversion rate, in percent
    #[arg(long)]
    pub conversion_rate: Option<f64>,

    /// JSON file with an alternate market dataset
    #[arg(long)]
    pub market_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the market benchmarks before the estimate
    #[arg(long)]
    pub show_market: bool,
}

impl Cli {
    /// Campaign inputs, falling back to `defaults` for any flag not given.
    pub fn inputs(&self, defaults: CampaignInputs) -> CampaignInputs {
        CampaignInputs {
            investment: self.investment.unwrap_or(defaults.investment),
            cost_per_click: self.cost_per_click.unwrap_or(defaults.cost_per_click),
            click_rate: self.click_rate.unwrap_or(defaults.click_rate),
            conversion_rate: self.conversion_rate.unwrap_or(defaults.conversion_rate),
        }
    }
}
