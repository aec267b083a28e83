//! Character builder module.
//!
//! Provides [`MainCharacter`], an immutable character-stat record, and
//! [`MainCharacterBuilder`], the only way to construct one. The builder
//! accumulates configuration through chained setters and is consumed by
//! [`MainCharacterBuilder::build`].

use serde::Serialize;

/// An immutable character with optional stat caps.
///
/// The name is fixed at construction. `max_health` and `max_stamina` are
/// `None` until assigned through the builder; `None` is distinct from zero.
///
/// # Examples
///
/// ```rust
/// use heroforge::MainCharacter;
///
/// let jimmy = MainCharacter::builder("Jimmy")
///     .max_health(200)
///     .max_stamina(150)
///     .build();
///
/// assert_eq!(jimmy.name(), "Jimmy");
/// assert_eq!(jimmy.max_health(), Some(200));
/// assert_eq!(jimmy.max_stamina(), Some(150));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainCharacter {
    name: String,
    max_health: Option<i32>,
    max_stamina: Option<i32>,
}

impl MainCharacter {
    /// Start building a character with the given name.
    ///
    /// Equivalent to [`MainCharacterBuilder::new`].
    pub fn builder(name: impl Into<String>) -> MainCharacterBuilder {
        MainCharacterBuilder::new(name)
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum health, or `None` if it was never set.
    pub fn max_health(&self) -> Option<i32> {
        self.max_health
    }

    /// Maximum stamina, or `None` if it was never set.
    pub fn max_stamina(&self) -> Option<i32> {
        self.max_stamina
    }
}

/// Staged construction for [`MainCharacter`].
///
/// Setters take the builder by value and return it, so calls chain.
/// Setting a field twice keeps the last value. No validation is performed;
/// negative values are accepted as given.
///
/// `build` consumes the builder, so it cannot be reused after
/// finalization. Clone the builder beforehand to produce several
/// characters from one configuration.
///
/// # Examples
///
/// ```rust
/// use heroforge::MainCharacterBuilder;
///
/// let base = MainCharacterBuilder::new("Ayla").max_health(80);
///
/// let tank = base.clone().max_health(300).build();
/// let scout = base.max_stamina(220).build();
///
/// assert_eq!(tank.max_health(), Some(300));
/// assert_eq!(tank.max_stamina(), None);
/// assert_eq!(scout.max_health(), Some(80));
/// assert_eq!(scout.max_stamina(), Some(220));
/// ```
#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct MainCharacterBuilder {
    character: MainCharacter,
}

impl MainCharacterBuilder {
    /// Create a builder for a character with the given name.
    ///
    /// No other field is set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            character: MainCharacter {
                name: name.into(),
                max_health: None,
                max_stamina: None,
            },
        }
    }

    /// Set the maximum health.
    pub fn max_health(mut self, value: i32) -> Self {
        self.character.max_health = Some(value);
        self
    }

    /// Set the maximum stamina.
    pub fn max_stamina(mut self, value: i32) -> Self {
        self.character.max_stamina = Some(value);
        self
    }

    /// Finalize the character.
    pub fn build(self) -> MainCharacter {
        self.character
    }
}
