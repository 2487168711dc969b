//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed timestep per frame, no delta-time scaling
//! - Input arrives as plain data sampled by the platform layer
//! - No rendering or windowing dependencies

pub mod bounds;
pub mod collision;
pub mod state;
pub mod tick;

pub use bounds::{Bounded, intersects};
pub use collision::{brick_ball, paddle_ball};
pub use state::{Ball, Brick, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
