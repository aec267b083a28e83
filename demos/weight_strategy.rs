//! Strategy example: weigh the same load under three policies
//!
//! This example demonstrates:
//! - Pricing items per unit of weight
//! - Attaching `FeatherWeight` and `HeavyWeight` to inventories
//! - Falling back to the raw total without a policy

use heroforge::{demo, DemoError};

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heroforge=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    demo::display_inventory(&mut stdout.lock())?;

    Ok(())
}
