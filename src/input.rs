//! Player intents
//!
//! The input collaborator translates raw key presses into [`Intent`]s. Keys
//! with no binding are dropped here and never reach the simulation.

use serde::{Deserialize, Serialize};

/// A discrete player action, applied at the start of the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Intent {
    /// Map a DOM-style key name to an intent
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Intent::MoveLeft),
            "ArrowRight" | "Right" => Some(Intent::MoveRight),
            " " | "Space" | "Spacebar" => Some(Intent::Fire),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Intent::from_key("ArrowLeft"), Some(Intent::MoveLeft));
        assert_eq!(Intent::from_key("ArrowRight"), Some(Intent::MoveRight));
        assert_eq!(Intent::from_key(" "), Some(Intent::Fire));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(Intent::from_key("ArrowUp"), None);
        assert_eq!(Intent::from_key(""), None);
        assert_eq!(Intent::from_key("\u{1F680}"), None);
    }
}
