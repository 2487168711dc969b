//! Game configuration
//!
//! One immutable struct holds every tunable: arena size, speeds, entity
//! dimensions, grid counts, frame cap. It is passed by reference to
//! constructors and to the tick; nothing reads configuration from a
//! process-wide global.

use serde::{Deserialize, Serialize};

/// All game tunables. `Default` is the classic setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Arena width in pixels (also the window width)
    pub arena_width: f32,
    /// Arena height in pixels (also the window height)
    pub arena_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed magnitude; velocity components are always ±this
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Distance of the paddle center above the bottom edge
    pub paddle_baseline: f32,

    // === Brick grid ===
    pub brick_width: f32,
    pub brick_height: f32,
    /// Spacing between neighboring bricks, both axes
    pub brick_gap: f32,
    pub brick_cols: usize,
    pub brick_rows: usize,

    /// Frame cap requested from the window layer
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,

            ball_radius: 10.0,
            ball_speed: 8.0,

            paddle_width: 60.0,
            paddle_height: 20.0,
            paddle_speed: 16.0,
            paddle_baseline: 50.0,

            brick_width: 60.0,
            brick_height: 20.0,
            brick_gap: 3.0,
            brick_cols: 11,
            brick_rows: 4,

            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Config file looked up in the working directory
    const CONFIG_FILE: &'static str = "brickfall.json";

    /// Load configuration from `brickfall.json`, falling back to defaults
    /// when the file is absent or malformed.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::CONFIG_FILE) {
            Ok(json) => Self::from_json(&json),
            Err(_) => {
                log::info!("Using default configuration");
                Self::default()
            }
        }
    }

    fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", Self::CONFIG_FILE);
                config
            }
            Err(err) => {
                log::warn!("Ignoring malformed {}: {err}", Self::CONFIG_FILE);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_classic_setup() {
        let config = GameConfig::default();
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.arena_height, 600.0);
        assert_eq!(config.ball_radius, 10.0);
        assert_eq!(config.ball_speed, 8.0);
        assert_eq!(config.paddle_width, 60.0);
        assert_eq!(config.paddle_speed, 16.0);
        assert_eq!(config.brick_cols, 11);
        assert_eq!(config.brick_rows, 4);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = GameConfig::from_json(&json);
        assert_eq!(back.arena_width, config.arena_width);
        assert_eq!(back.ball_speed, config.ball_speed);
        assert_eq!(back.brick_cols, config.brick_cols);
    }

    #[test]
    fn test_malformed_json_falls_back_to_defaults() {
        let config = GameConfig::from_json("{ not json");
        assert_eq!(config.arena_width, GameConfig::default().arena_width);
        assert_eq!(config.target_fps, GameConfig::default().target_fps);
    }
}
