//! Weight modifier module.
//!
//! A weight modifier is an interchangeable policy that turns an inventory's
//! items into an applied weight. Modifiers are stateless, so one instance
//! can be shared by any number of inventories behind an `Arc`.
//!
//! Two policies are provided:
//!
//! ```text
//! FeatherWeight:  total × 0.7
//! HeavyWeight:    (total − 0.32) × 1.7
//! ```
//!
//! An inventory without a modifier uses the raw total. [`WeightPolicy`]
//! names all three cases so they can be selected from text or loaded from
//! a loadout document.

use crate::error::InventoryError;
use crate::item::{total_weight, Item};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Trait for policies that compute a modified weight from a list of items.
///
/// Implementations must be deterministic: the same items always produce
/// the same weight.
///
/// # Examples
///
/// ```rust
/// use heroforge::{FeatherWeight, Item, WeightModifier};
///
/// let items = vec![Item::new("Tent", 2.0, 30.0)];
/// assert_eq!(FeatherWeight.modified_weight(&items), 1.4);
/// ```
pub trait WeightModifier: Send + Sync + fmt::Debug {
    /// Compute the applied weight for `items`.
    fn modified_weight(&self, items: &[Item]) -> f64;

    /// Get a human-readable description of this policy.
    ///
    /// Used in weight reports and log output.
    fn description(&self) -> String;
}

/// Light policy: carries 70% of the raw weight.
///
/// # Examples
///
/// ```rust
/// use heroforge::{FeatherWeight, Item, WeightModifier};
///
/// let items = vec![Item::new("Bedroll", 1.0, 5.0), Item::new("Lamp", 1.0, 8.0)];
/// assert!((FeatherWeight.modified_weight(&items) - 1.4).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatherWeight;

impl FeatherWeight {
    /// Factor applied to the raw total.
    pub const FACTOR: f64 = 0.7;
}

impl WeightModifier for FeatherWeight {
    fn modified_weight(&self, items: &[Item]) -> f64 {
        total_weight(items) * Self::FACTOR
    }

    fn description(&self) -> String {
        format!("×{:.2}", Self::FACTOR)
    }
}

/// Heavy policy: subtracts a fixed allowance, then scales up.
///
/// The allowance is subtracted before scaling, so an inventory lighter
/// than the allowance yields a negative applied weight.
///
/// # Examples
///
/// ```rust
/// use heroforge::{HeavyWeight, Item, WeightModifier};
///
/// let items = vec![Item::new("Anvil", 10.32, 20.0)];
/// assert!((HeavyWeight.modified_weight(&items) - 17.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeavyWeight;

impl HeavyWeight {
    /// Amount subtracted from the raw total before scaling.
    pub const ALLOWANCE: f64 = 0.32;
    /// Factor applied after the allowance is subtracted.
    pub const FACTOR: f64 = 1.7;
}

impl WeightModifier for HeavyWeight {
    fn modified_weight(&self, items: &[Item]) -> f64 {
        (total_weight(items) - Self::ALLOWANCE) * Self::FACTOR
    }

    fn description(&self) -> String {
        format!("(-{:.2})×{:.2}", Self::ALLOWANCE, Self::FACTOR)
    }
}

/// Named weight policy.
///
/// Parses from and displays as `"none"`, `"feather"` or `"heavy"`.
/// `"light"` is accepted as an alias for `"feather"`. Matching is
/// case-insensitive and ignores surrounding whitespace, both for `parse`
/// and when deserializing.
///
/// # Examples
///
/// ```rust
/// use heroforge::WeightPolicy;
///
/// let policy: WeightPolicy = "heavy".parse().unwrap();
/// assert_eq!(policy, WeightPolicy::Heavy);
/// assert!(policy.modifier().is_some());
/// assert!(WeightPolicy::None.modifier().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WeightPolicy {
    /// No modifier; the applied weight is the raw total.
    #[default]
    None,
    /// [`FeatherWeight`].
    Feather,
    /// [`HeavyWeight`].
    Heavy,
}

impl WeightPolicy {
    /// Get the modifier for this policy, if any.
    pub fn modifier(self) -> Option<Arc<dyn WeightModifier>> {
        match self {
            WeightPolicy::None => None,
            WeightPolicy::Feather => Some(Arc::new(FeatherWeight)),
            WeightPolicy::Heavy => Some(Arc::new(HeavyWeight)),
        }
    }

    /// The canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            WeightPolicy::None => "none",
            WeightPolicy::Feather => "feather",
            WeightPolicy::Heavy => "heavy",
        }
    }
}

impl FromStr for WeightPolicy {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(WeightPolicy::None),
            "feather" | "light" => Ok(WeightPolicy::Feather),
            "heavy" => Ok(WeightPolicy::Heavy),
            _ => Err(InventoryError::UnknownPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for WeightPolicy {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for WeightPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
