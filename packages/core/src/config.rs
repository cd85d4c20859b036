use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use tracing::debug;

use crate::cli::Cli;
use crate::funnel::{FunnelError, MarketDataset};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub market_file: Option<PathBuf>,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Invalid LEADS_OUTPUT: {}", other)),
        }
    }
}

impl Config {
    /// Read `LEADS_MARKET_FILE` and `LEADS_OUTPUT`. Both are optional.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let market_file = lookup("LEADS_MARKET_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let output = match lookup("LEADS_OUTPUT") {
            Some(value) => value.trim().to_ascii_lowercase().parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            market_file,
            output,
        })
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.market_file {
            self.market_file = Some(path.clone());
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        self
    }

    /// The configured market dataset, or the regional defaults.
    pub fn load_market(&self) -> Result<MarketDataset, FunnelError> {
        match &self.market_file {
            Some(path) => MarketDataset::from_path(path),
            None => {
                debug!("Using regional market defaults");
                Ok(MarketDataset::default())
            }
        }
    }
}
