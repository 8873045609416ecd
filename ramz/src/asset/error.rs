//! Error types for the asset module.

use super::types::AssetId;
use thiserror::Error;

/// Errors that can occur when operating on tracked assets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// No asset with this id has been registered (or it was removed).
    #[error("Unknown asset: {0}")]
    UnknownAsset(AssetId),
}
