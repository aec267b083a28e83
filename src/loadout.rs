//! Loadout module.
//!
//! A [`Loadout`] describes an inventory's contents and weight policy as
//! data, so sample inventories can be read from JSON instead of being
//! assembled in code.
//!
//! ```text
//! {"items": [{"name": "Rope", "weight": 1.0, "value": 2.0}], "policy": "feather"}
//! ```
//!
//! `policy` may be omitted, in which case no modifier is applied. Policy
//! names follow [`WeightPolicy`]'s parsing rules.

use crate::error::InventoryError;
use crate::item::Item;
use crate::modifier::WeightPolicy;
use serde::{Deserialize, Serialize};

/// Items plus the policy to apply to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    /// Carried items, in order.
    pub items: Vec<Item>,

    /// Weight policy.
    #[serde(default)]
    pub policy: WeightPolicy,
}

impl Loadout {
    /// Create a loadout.
    pub fn new(items: Vec<Item>, policy: WeightPolicy) -> Self {
        Self { items, policy }
    }

    /// Parse a loadout from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidLoadout`] if the document is not
    /// valid JSON or does not match the loadout shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heroforge::{Loadout, WeightPolicy};
    ///
    /// let loadout = Loadout::from_json(
    ///     r#"{"items": [{"name": "Rope", "weight": 1.0, "value": 2.0}], "policy": "heavy"}"#,
    /// ).unwrap();
    /// assert_eq!(loadout.items.len(), 1);
    /// assert_eq!(loadout.policy, WeightPolicy::Heavy);
    ///
    /// assert!(Loadout::from_json("not json").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        let loadout: Loadout = serde_json::from_str(json)?;
        tracing::debug!(
            items = loadout.items.len(),
            policy = %loadout.policy,
            "parsed loadout"
        );
        Ok(loadout)
    }

    /// Serialize this loadout to a JSON string.
    pub fn to_json(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults_to_none() {
        let loadout = Loadout::from_json(r#"{"items": []}"#).unwrap();
        assert_eq!(loadout.policy, WeightPolicy::None);
        assert!(loadout.items.is_empty());
    }

    #[test]
    fn test_light_alias() {
        let loadout = Loadout::from_json(r#"{"items": [], "policy": "light"}"#).unwrap();
        assert_eq!(loadout.policy, WeightPolicy::Feather);
    }

    #[test]
    fn test_policy_name_is_case_insensitive() {
        let loadout = Loadout::from_json(r#"{"items": [], "policy": "Heavy"}"#).unwrap();
        assert_eq!(loadout.policy, WeightPolicy::Heavy);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = Loadout::from_json(r#"{"items": [], "policy": "ultralight"}"#).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidLoadout(_)));
    }

    #[test]
    fn test_missing_items_rejected() {
        let err = Loadout::from_json(r#"{"policy": "heavy"}"#).unwrap_err();
        assert!(err.to_string().contains("items"));
    }

    #[test]
    fn test_json_round_trip() {
        let loadout = Loadout::new(
            vec![Item::new("Mana Potion", 0.5, 40.0), Item::new("Mana Potion", 0.5, 40.0)],
            WeightPolicy::Heavy,
        );
        let json = loadout.to_json().unwrap();
        assert_eq!(Loadout::from_json(&json).unwrap(), loadout);
    }
}
