//! Error types for inventory calculations and the demo drivers.
//!
//! Calculation failures are represented by [`InventoryError`]. The demo
//! entry points additionally write to an output sink, so they report
//! [`DemoError`], which wraps both I/O and inventory failures.

use thiserror::Error;

/// Errors that can occur while evaluating items, policies and loadouts.
///
/// # Examples
///
/// ```rust
/// use heroforge::InventoryError;
///
/// let err = InventoryError::ZeroWeight(String::from("Feather"));
/// println!("{}", err); // "Item has zero weight: Feather"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    /// Price-per-unit was requested for an item that weighs nothing.
    ///
    /// Contains the item name.
    #[error("Item has zero weight: {0}")]
    ZeroWeight(String),

    /// A weight policy name did not match any known policy.
    #[error("Unknown weight policy: {0}")]
    UnknownPolicy(String),

    /// A loadout document could not be parsed.
    ///
    /// Contains the parser's message.
    #[error("Invalid loadout: {0}")]
    InvalidLoadout(String),
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::InvalidLoadout(err.to_string())
    }
}

/// Errors returned by the demo entry points in [`crate::demo`].
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing to the output sink failed.
    #[error("Failed to write demo output: {0}")]
    Io(#[from] std::io::Error),

    /// A calculation inside the demo failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
