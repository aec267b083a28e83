//! Builder example: construct an immutable character with optional stat caps
//!
//! This example demonstrates:
//! - Chaining builder setters
//! - Finalizing with `build`
//! - Printing the result

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
    demo::display_character(&mut stdout.lock())?;

    Ok(())
}
