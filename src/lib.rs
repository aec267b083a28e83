//! # heroforge - Character Builders and Inventory Weight Strategies
//!
//! Two small, independent building blocks for RPG-style game code:
//! - **Character builder**: staged construction of an immutable
//!   [`MainCharacter`] with optional stat caps
//! - **Weight strategies**: interchangeable [`WeightModifier`] policies that
//!   turn an [`Inventory`]'s items into an applied weight
//!
//! ## Core Concepts
//!
//! ### Builder
//!
//! ```text
//! MainCharacterBuilder::new(name) → .max_health(..) → .max_stamina(..) → .build()
//! ```
//!
//! Unset stats stay `None`, which is distinct from zero. `build` consumes
//! the builder.
//!
//! ### Weight Pipeline
//!
//! ```text
//! [Item weights] → total_weight → [WeightModifier?] → applied weight
//! ```
//!
//! 1. **Items** carry a weight and a value
//! 2. **Modifiers** are stateless and shared behind `Arc`
//! 3. **Without a modifier** the applied weight is the raw total
//!
//! ## Example
//!
//! ```rust
//! use heroforge::*;
//! use std::sync::Arc;
//!
//! let jimmy = MainCharacter::builder("Jimmy")
//!     .max_health(200)
//!     .max_stamina(150)
//!     .build();
//! assert_eq!(jimmy.max_health(), Some(200));
//!
//! let daemon = Character::new("Daemon", 10);
//! let items = vec![
//!     Item::new("Healing Potion", 0.5, 50.0),
//!     Item::new("Mana Potion", 0.5, 40.0),
//!     Item::new("Boost Strength Potion", 0.5, 100.0),
//! ];
//!
//! let inventory = Inventory::new(&daemon, items).with_modifier(Arc::new(HeavyWeight));
//! assert_eq!(inventory.total_weight(), 1.5);
//! assert!((inventory.applied_weight() - 2.006).abs() < 1e-9); // (1.5 - 0.32) * 1.7
//! ```
//!
//! ## Modules
//!
//! - [`builder`] - Main character and its builder
//! - [`character`] - Inventory owner
//! - [`item`] - Items and weight sums
//! - [`modifier`] - Weight policies
//! - [`inventory`] - Inventory and applied weight
//! - [`report`] - Weight report snapshots
//! - [`loadout`] - JSON-loadable inventory contents
//! - [`demo`] - Sample scenarios that print to a writer
//! - [`error`] - Error types

pub mod builder;
pub mod character;
pub mod demo;
pub mod error;
pub mod inventory;
pub mod item;
pub mod loadout;
pub mod modifier;
pub mod report;

// Re-export main types for convenience
pub use builder::{MainCharacter, MainCharacterBuilder};
pub use character::Character;
pub use error::{DemoError, InventoryError};
pub use inventory::Inventory;
pub use item::{total_weight, Item};
pub use loadout::Loadout;
pub use report::WeightReport;

// Re-export weight policies
pub use modifier::{FeatherWeight, HeavyWeight, WeightModifier, WeightPolicy};
