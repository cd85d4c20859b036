use thiserror::Error;

use crate::funnel::FunnelError;

/// Unified application error.
///
/// Covers the binary's failure points: configuration, loading a market
/// dataset and writing output. Incomplete campaign inputs are not errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] FunnelError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
