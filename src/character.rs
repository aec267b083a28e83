//! Inventory owner type.

use serde::{Deserialize, Serialize};

/// A character that owns an inventory.
///
/// # Examples
///
/// ```rust
/// use heroforge::Character;
///
/// let daemon = Character::new("Daemon", 10);
/// assert_eq!(daemon.name, "Daemon");
/// assert_eq!(daemon.power_level, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Power level.
    pub power_level: i32,
}

impl Character {
    /// Create a new character.
    pub fn new(name: impl Into<String>, power_level: i32) -> Self {
        Self {
            name: name.into(),
            power_level,
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_creation() {
        let lilith = Character::new("Lilith", 10);
        assert_eq!(lilith.name, "Lilith");
        assert_eq!(lilith.power_level, 10);
        assert_eq!(lilith.to_string(), "Lilith");
    }
}
