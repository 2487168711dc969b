//! Brickfall - a classic breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, frame tick)
//! - `config`: Immutable game configuration
//! - `render`: Draw-call submission over the raylib window

pub mod config;
pub mod render;
pub mod sim;

pub use config::GameConfig;
