//! Construction parameters
//!
//! Defaults match the reference 900×780 playfield with a 20×5 brick grid.
//! On the web build a JSON override can be stashed in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Fixed parameters the game is constructed with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub screen_width: f32,
    /// Playfield height in pixels
    pub screen_height: f32,
    /// Brick grid columns
    pub brick_cols: u32,
    /// Brick grid rows
    pub brick_rows: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: consts::SCREEN_WIDTH,
            screen_height: consts::SCREEN_HEIGHT,
            brick_cols: consts::BRICK_COLS,
            brick_rows: consts::BRICK_ROWS,
        }
    }
}

impl GameConfig {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "gridbreak_config";

    /// Load the config override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded config override from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save the config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_configuration() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 900.0);
        assert_eq!(config.screen_height, 780.0);
        assert_eq!(config.brick_cols, 20);
        assert_eq!(config.brick_rows, 5);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = GameConfig {
            brick_cols: 12,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.brick_cols, 12);
        assert_eq!(back.screen_width, config.screen_width);
    }
}
