//! Loadout example: read inventories from JSON and report their weight
//!
//! This example demonstrates:
//! - Parsing `Loadout` documents
//! - Selecting policies by name
//! - Printing `WeightReport` breakdowns

use heroforge::{Character, Inventory, InventoryError, Loadout};

const LOADOUTS: [&str; 3] = [
    r#"{"items": [{"name": "Rope", "weight": 1.0, "value": 2.0},
                  {"name": "Lantern", "weight": 1.5, "value": 12.0}],
        "policy": "feather"}"#,
    r#"{"items": [{"name": "Rope", "weight": 1.0, "value": 2.0},
                  {"name": "Lantern", "weight": 1.5, "value": 12.0}]}"#,
    r#"{"items": [{"name": "Rope", "weight": 1.0, "value": 2.0},
                  {"name": "Lantern", "weight": 1.5, "value": 12.0}],
        "policy": "heavy"}"#,
];

fn main() -> Result<(), InventoryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heroforge=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let ranger = Character::new("Ranger", 7);

    println!("=== Loadout Reports ===");
    for json in LOADOUTS {
        let loadout = Loadout::from_json(json)?;
        let policy = loadout.policy;
        let report = Inventory::from_loadout(&ranger, loadout).weight_report();

        println!("\nPolicy: {}", policy);
        println!("  {}", report);
        println!("  Adjustment: {:+.2}", report.adjustment());
    }

    Ok(())
}
