//! Weight report module.
//!
//! Contains [`WeightReport`], a read-only snapshot of an inventory's raw
//! and applied weight together with the policy that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A snapshot of an inventory's weight figures.
///
/// Produced by [`crate::Inventory::weight_report`]. Serializable so it can
/// be logged or sent elsewhere as-is.
///
/// # Examples
///
/// ```rust
/// use heroforge::{Character, Inventory, Item};
///
/// let lilith = Character::new("Lilith", 10);
/// let inventory = Inventory::new(&lilith, vec![Item::new("Rope", 1.5, 2.0)]);
/// let report = inventory.weight_report();
///
/// assert_eq!(report.character, "Lilith");
/// assert_eq!(report.raw_weight, 1.5);
/// assert_eq!(report.applied_weight, 1.5);
/// assert_eq!(report.policy, "none");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightReport {
    /// Name of the owning character.
    pub character: String,

    /// Number of items carried, duplicates included.
    pub item_count: usize,

    /// Sum of item weights before any policy.
    pub raw_weight: f64,

    /// Weight after the policy is applied.
    pub applied_weight: f64,

    /// Description of the policy, or `"none"`.
    pub policy: String,
}

impl WeightReport {
    /// Applied weight minus raw weight.
    ///
    /// Negative when the policy lightens the load.
    pub fn adjustment(&self) -> f64 {
        self.applied_weight - self.raw_weight
    }
}

impl fmt::Display for WeightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} item(s), raw {:.2}, applied {:.2} ({})",
            self.character, self.item_count, self.raw_weight, self.applied_weight, self.policy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeightReport {
        WeightReport {
            character: String::from("Daemon"),
            item_count: 3,
            raw_weight: 1.5,
            applied_weight: 1.05,
            policy: String::from("×0.70"),
        }
    }

    #[test]
    fn test_adjustment() {
        assert!((sample().adjustment() - (-0.45)).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Daemon: 3 item(s), raw 1.50, applied 1.05 (×0.70)"
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["character"], "Daemon");
        assert_eq!(json["item_count"], 3);
        assert_eq!(json["policy"], "×0.70");
    }
}
