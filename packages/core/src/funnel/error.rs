//! Error types for funnel operations
//!
//! Insufficient campaign input is not an error; the calculator returns
//! `None` for it. These variants only cover loading market datasets.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FunnelError {
    #[error("Failed to read market dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed market dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid market dataset: {message}")]
    InvalidDataset { message: String },
}

impl FunnelError {
    pub fn invalid_dataset(message: impl Into<String>) -> Self {
        Self::InvalidDataset { message: message.into() }
    }
}
