//! Items module.
//!
//! Items are immutable value records carrying a weight and a value.
//! Weights feed the inventory's weight policies; value and weight together
//! give the price-per-unit figure.

use crate::error::InventoryError;
use serde::{Deserialize, Serialize};

/// A priced item that can be carried in an inventory.
///
/// # Examples
///
/// ```rust
/// use heroforge::Item;
///
/// let potion = Item::new("Healing Potion", 0.5, 50.0);
/// assert_eq!(potion.price_per_unit().unwrap(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Weight, expected to be non-negative.
    pub weight: f64,
    /// Value, expected to be non-negative.
    pub value: f64,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }

    /// Value divided by weight.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ZeroWeight`] if the item weighs nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heroforge::{InventoryError, Item};
    ///
    /// let ghost = Item::new("Ghost Lantern", 0.0, 10.0);
    /// assert_eq!(
    ///     ghost.price_per_unit(),
    ///     Err(InventoryError::ZeroWeight(String::from("Ghost Lantern")))
    /// );
    /// ```
    pub fn price_per_unit(&self) -> Result<f64, InventoryError> {
        if self.weight == 0.0 {
            tracing::warn!(item = %self.name, "price per unit requested for weightless item");
            return Err(InventoryError::ZeroWeight(self.name.clone()));
        }
        let price = self.value / self.weight;
        tracing::trace!(item = %self.name, value = self.value, price, "computed price per unit");
        Ok(price)
    }
}

/// Sum of the weights of `items`.
///
/// Returns `0.0` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use heroforge::{total_weight, Item};
///
/// let items = vec![Item::new("A", 0.5, 1.0), Item::new("B", 1.25, 1.0)];
/// assert_eq!(total_weight(&items), 1.75);
/// assert_eq!(total_weight(&[]), 0.0);
/// ```
pub fn total_weight(items: &[Item]) -> f64 {
    items.iter().map(|item| item.weight).sum()
}
