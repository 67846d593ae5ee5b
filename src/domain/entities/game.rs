//! Game and game mode entities.

use serde::Serialize;

use crate::domain::paths::resource_path;

/// A game tournaments can be played in.
///
/// Games are addressed by name, which doubles as their identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub name: String,
    pub available_modes: Vec<String>,
    pub image: String,
    pub icon: String,
}

impl Game {
    pub fn new(name: String, available_modes: Vec<String>, image: String, icon: String) -> Self {
        Self {
            name,
            available_modes,
            image,
            icon,
        }
    }

    /// Returns true if tournaments of this game may use `mode`.
    pub fn supports_mode(&self, mode: &str) -> bool {
        self.available_modes.iter().any(|m| m == mode)
    }

    /// Path of this game's resource, used when linking it from other resources.
    pub fn resource_path(&self) -> String {
        resource_path("games", &self.name)
    }
}

/// A way of playing, e.g. "1v1" or "battle royale".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub name: String,
}

impl Mode {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

/// Input data for creating a new game.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub name: String,
    pub available_modes: Vec<String>,
    pub image: String,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_resource_path_is_encoded() {
        let game = Game::new(
            "Rocket League".to_string(),
            vec!["1v1".to_string(), "3v3".to_string()],
            "rl.png".to_string(),
            "rl-icon.png".to_string(),
        );

        assert_eq!(game.resource_path(), "/games/Rocket%20League");
        assert!(game.supports_mode("3v3"));
        assert!(!game.supports_mode("2v2"));
    }
}
