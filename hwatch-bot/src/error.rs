//! Error taxonomy of the bot
//!
//! Per-cycle failures are grouped into [`CycleError`] (the cycle stops early)
//! and [`RecordError`] (one record is skipped). Only [`ConfigError`] is fatal.

use hwatch_client::ClientError;
use hwatch_core::{FormatError, SchemaError};
use thiserror::Error;

/// Fetching statuses from the status API failed
#[derive(Debug, Error)]
#[error("status request failed: {0}")]
pub struct TransportError(#[from] pub ClientError);

/// Handing a message to the messaging channel failed
#[derive(Debug, Error)]
#[error("message delivery failed: {0}")]
pub struct DeliveryError(#[from] pub ClientError);

/// Missing or invalid process configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required variables are unset or empty
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// A variable is set but unusable
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// A cycle that stopped before the cursor could advance
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected status API response: {0}")]
    Schema(#[from] SchemaError),
}

/// A single record that could not be notified
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("cannot format status: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
