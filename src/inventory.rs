//! Inventory module.
//!
//! An [`Inventory`] ties a borrowed [`Character`] to an owned list of items
//! and an optional shared [`WeightModifier`]. The applied weight is
//! recomputed on every call.

use crate::character::Character;
use crate::item::{total_weight, Item};
use crate::loadout::Loadout;
use crate::modifier::WeightModifier;
use crate::report::WeightReport;
use std::sync::Arc;

/// A character's carried items plus an optional weight policy.
///
/// # Examples
///
/// ```rust
/// use heroforge::{Character, FeatherWeight, Inventory, Item};
/// use std::sync::Arc;
///
/// let daemon = Character::new("Daemon", 10);
/// let items = vec![
///     Item::new("Healing Potion", 0.5, 50.0),
///     Item::new("Mana Potion", 0.5, 40.0),
/// ];
///
/// let plain = Inventory::new(&daemon, items.clone());
/// assert_eq!(plain.applied_weight(), 1.0);
///
/// let light = Inventory::new(&daemon, items).with_modifier(Arc::new(FeatherWeight));
/// assert!((light.applied_weight() - 0.7).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Inventory<'a> {
    character: &'a Character,
    items: Vec<Item>,
    modifier: Option<Arc<dyn WeightModifier>>,
}

impl<'a> Inventory<'a> {
    /// Create an inventory with no weight modifier.
    pub fn new(character: &'a Character, items: Vec<Item>) -> Self {
        Self {
            character,
            items,
            modifier: None,
        }
    }

    /// Attach a weight modifier, replacing any previous one.
    pub fn with_modifier(mut self, modifier: Arc<dyn WeightModifier>) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Assemble an inventory from a loadout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heroforge::{Character, Inventory, Item, Loadout, WeightPolicy};
    ///
    /// let lilith = Character::new("Lilith", 10);
    /// let loadout = Loadout::new(vec![Item::new("Rope", 1.0, 2.0)], WeightPolicy::Feather);
    /// let inventory = Inventory::from_loadout(&lilith, loadout);
    /// assert!((inventory.applied_weight() - 0.7).abs() < 1e-9);
    /// ```
    pub fn from_loadout(character: &'a Character, loadout: Loadout) -> Self {
        Self {
            character,
            items: loadout.items,
            modifier: loadout.policy.modifier(),
        }
    }

    /// The owning character.
    pub fn character(&self) -> &'a Character {
        self.character
    }

    /// The carried items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The weight modifier, if one is attached.
    pub fn modifier(&self) -> Option<&dyn WeightModifier> {
        self.modifier.as_deref()
    }

    /// Sum of all item weights, ignoring the modifier.
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.items)
    }

    /// Weight after the modifier is applied, or the raw total without one.
    pub fn applied_weight(&self) -> f64 {
        let applied = match &self.modifier {
            Some(modifier) => modifier.modified_weight(&self.items),
            None => self.total_weight(),
        };
        tracing::debug!(
            character = %self.character.name,
            policy = %self.policy_description(),
            applied,
            "computed applied weight"
        );
        applied
    }

    /// Snapshot the raw and applied weight for reporting.
    pub fn weight_report(&self) -> WeightReport {
        WeightReport {
            character: self.character.name.clone(),
            item_count: self.items.len(),
            raw_weight: self.total_weight(),
            applied_weight: self.applied_weight(),
            policy: self.policy_description(),
        }
    }

    fn policy_description(&self) -> String {
        self.modifier
            .as_ref()
            .map(|modifier| modifier.description())
            .unwrap_or_else(|| String::from("none"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{FeatherWeight, HeavyWeight, WeightPolicy};

    fn potions() -> Vec<Item> {
        vec![
            Item::new("Healing Potion", 0.5, 50.0),
            Item::new("Mana Potion", 0.5, 40.0),
            Item::new("Boost Strength Potion", 0.5, 100.0),
        ]
    }

    #[test]
    fn test_total_weight() {
        let character = Character::new("Lilith", 10);
        let inventory = Inventory::new(&character, potions());
        assert_eq!(inventory.total_weight(), 1.5);
    }

    #[test]
    fn test_applied_weight_without_modifier() {
        let character = Character::new("Lilith", 10);
        let inventory = Inventory::new(&character, potions());
        assert!(inventory.modifier().is_none());
        assert_eq!(inventory.applied_weight(), inventory.total_weight());
    }

    #[test]
    fn test_applied_weight_feather() {
        let character = Character::new("Daemon", 10);
        let inventory = Inventory::new(&character, potions()).with_modifier(Arc::new(FeatherWeight));
        assert!((inventory.applied_weight() - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_applied_weight_heavy() {
        let character = Character::new("Belphegor", 10);
        let inventory = Inventory::new(&character, potions()).with_modifier(Arc::new(HeavyWeight));
        assert!((inventory.applied_weight() - 2.006).abs() < 1e-9);
    }

    #[test]
    fn test_empty_inventory() {
        let character = Character::new("Nobody", 0);
        let inventory = Inventory::new(&character, Vec::new());
        assert_eq!(inventory.total_weight(), 0.0);
        assert_eq!(inventory.applied_weight(), 0.0);
    }

    #[test]
    fn test_shared_modifier_across_inventories() {
        let daemon = Character::new("Daemon", 10);
        let lilith = Character::new("Lilith", 10);
        let shared: Arc<dyn WeightModifier> = Arc::new(FeatherWeight);

        let first = Inventory::new(&daemon, potions()).with_modifier(Arc::clone(&shared));
        let second =
            Inventory::new(&lilith, vec![Item::new("Rope", 1.0, 2.0)]).with_modifier(Arc::clone(&shared));

        assert!((first.applied_weight() - 1.05).abs() < 1e-9);
        assert!((second.applied_weight() - 0.7).abs() < 1e-9);
        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn test_with_modifier_replaces_previous() {
        let character = Character::new("Daemon", 10);
        let inventory = Inventory::new(&character, potions())
            .with_modifier(Arc::new(HeavyWeight))
            .with_modifier(Arc::new(FeatherWeight));
        assert_eq!(inventory.modifier().unwrap().description(), "×0.70");
    }

    #[test]
    fn test_from_loadout_none_policy() {
        let character = Character::new("Lilith", 10);
        let inventory = Inventory::from_loadout(&character, Loadout::new(potions(), WeightPolicy::None));
        assert!(inventory.modifier().is_none());
        assert_eq!(inventory.items().len(), 3);
        assert_eq!(inventory.character().name, "Lilith");
    }

    #[test]
    fn test_weight_report() {
        let character = Character::new("Belphegor", 10);
        let inventory = Inventory::new(&character, potions()).with_modifier(Arc::new(HeavyWeight));
        let report = inventory.weight_report();
        assert_eq!(report.character, "Belphegor");
        assert_eq!(report.item_count, 3);
        assert_eq!(report.raw_weight, 1.5);
        assert!((report.applied_weight - 2.006).abs() < 1e-9);
        assert_eq!(report.policy, "(-0.32)×1.70");
    }

    #[test]
    fn test_weight_report_without_modifier() {
        let character = Character::new("Lilith", 10);
        let report = Inventory::new(&character, potions()).weight_report();
        assert_eq!(report.policy, "none");
        assert_eq!(report.applied_weight, report.raw_weight);
    }
}
