//! Per-frame simulation step
//!
//! One call advances the whole game by exactly one frame: paddle, ball,
//! collision resolution, then pruning of destroyed bricks. Fixed timestep,
//! no delta-time scaling; frame pacing is the platform layer's job.

use super::collision;
use super::state::{GamePhase, GameState};
use crate::config::GameConfig;

/// Input sampled by the platform layer for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// "move left" key currently held
    pub move_left: bool,
    /// "move right" key currently held
    pub move_right: bool,
    /// Exit requested (escape key)
    pub quit: bool,
}

/// Advance the game state by one frame.
///
/// A quit request transitions Running → Terminated before anything moves;
/// a terminated state is frozen for good. Otherwise the frame runs paddle
/// update, ball update, paddle↔ball, brick↔ball for every live brick, and
/// finally drops destroyed bricks from the collection.
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    if state.phase == GamePhase::Terminated {
        return;
    }
    if input.quit {
        state.phase = GamePhase::Terminated;
        return;
    }

    state.paddle.update(input.move_left, input.move_right, config);
    state.ball.update(config);

    collision::paddle_ball(&state.paddle, &mut state.ball, config);
    for brick in &mut state.bricks {
        collision::brick_ball(brick, &mut state.ball, config);
    }

    state.bricks.retain(|brick| !brick.destroyed);
}
