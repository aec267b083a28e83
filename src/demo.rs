//! Demo entry points.
//!
//! Each function exercises one pattern with fixed sample data and writes
//! human-readable lines to `out`. The example programs under `demos/`
//! call these against standard output.

use crate::builder::MainCharacter;
use crate::character::Character;
use crate::error::DemoError;
use crate::inventory::Inventory;
use crate::item::Item;
use crate::modifier::{FeatherWeight, HeavyWeight};
use std::io::Write;
use std::sync::Arc;

/// Format a float in shortest round-trip form, keeping `.0` on whole numbers.
fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

fn format_optional(value: Option<i32>) -> String {
    value.map_or_else(|| String::from("unset"), |v| v.to_string())
}

/// Build the sample character and print its stats.
///
/// Returns the built character.
///
/// # Examples
///
/// ```rust
/// use heroforge::demo;
///
/// let mut out = Vec::new();
/// let jimmy = demo::display_character(&mut out).unwrap();
///
/// assert_eq!(jimmy.max_health(), Some(200));
/// assert!(String::from_utf8(out).unwrap().contains("Max health for Jimmy: 200"));
/// ```
pub fn display_character(out: &mut impl Write) -> Result<MainCharacter, DemoError> {
    let jimmy = MainCharacter::builder("Jimmy")
        .max_health(200)
        .max_stamina(150)
        .build();

    tracing::info!(name = jimmy.name(), "built main character");

    writeln!(
        out,
        "Max health for {}: {}",
        jimmy.name(),
        format_optional(jimmy.max_health())
    )?;
    writeln!(
        out,
        "Max stamina for {}: {}",
        jimmy.name(),
        format_optional(jimmy.max_stamina())
    )?;

    Ok(jimmy)
}

/// Price three potions, then weigh the same load under each policy.
///
/// Returns the applied weights for the feather, unmodified and heavy
/// inventories, in that order.
///
/// # Examples
///
/// ```rust
/// use heroforge::demo;
///
/// let mut out = Vec::new();
/// let [feather, plain, heavy] = demo::display_inventory(&mut out).unwrap();
///
/// assert!((feather - 1.05).abs() < 1e-9);
/// assert_eq!(plain, 1.5);
/// assert!((heavy - 2.006).abs() < 1e-9);
/// ```
pub fn display_inventory(out: &mut impl Write) -> Result<[f64; 3], DemoError> {
    let daemon = Character::new("Daemon", 10);
    let lilith = Character::new("Lilith", 10);
    let belphegor = Character::new("Belphegor", 10);

    let healing_potion = Item::new("Healing Potion", 0.5, 50.0);
    let mana_potion = Item::new("Mana Potion", 0.5, 40.0);
    let boost_strength_potion = Item::new("Boost Strength Potion", 0.5, 100.0);

    let priced = [
        ("Healing potion", &healing_potion),
        ("Mana potion", &mana_potion),
        ("Boost strength potion", &boost_strength_potion),
    ];
    for (label, item) in priced {
        writeln!(out, "{} value = {}", item.name, format_value(item.value))?;
        let price = item.price_per_unit()?;
        writeln!(out, "{} price per unit: {}", label, format_value(price))?;
    }

    let items = vec![healing_potion, mana_potion, boost_strength_potion];

    let daemon_inventory =
        Inventory::new(&daemon, items.clone()).with_modifier(Arc::new(FeatherWeight));
    let lilith_inventory = Inventory::new(&lilith, items.clone());
    let belphegor_inventory =
        Inventory::new(&belphegor, items).with_modifier(Arc::new(HeavyWeight));

    // The heavy inventory shares the "Char2" label with the unmodified one.
    let labeled = [
        ("Char1", daemon_inventory),
        ("Char2", lilith_inventory),
        ("Char2", belphegor_inventory),
    ];
    let mut applied = [0.0; 3];
    for (slot, (label, inventory)) in applied.iter_mut().zip(labeled.iter()) {
        *slot = inventory.applied_weight();
        writeln!(
            out,
            "{} - Current applied weight: {}",
            label,
            format_value(*slot)
        )?;
    }

    tracing::info!(
        inventories = labeled.len(),
        "weighed sample inventories"
    );

    Ok(applied)
}
