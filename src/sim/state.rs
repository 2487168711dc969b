//! Game state and core simulation types
//!
//! Three entity kinds and their exclusive owner. Entities never hold
//! references to one another; every interaction goes through the collision
//! resolver with short-lived borrows handed out by [`GameState`].

use glam::Vec2;

use super::bounds::Bounded;
use crate::config::GameConfig;

/// Current phase of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Frames are being simulated
    Running,
    /// Quit was requested; the state no longer changes
    Terminated,
}

/// The ball. Velocity components are always exactly `±ball_speed`;
/// collisions and wall bounces flip signs, never rescale.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Serve the ball at `pos`, heading up and to the left.
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            vel: Vec2::new(-config.ball_speed, -config.ball_speed),
            radius: config.ball_radius,
        }
    }

    /// One integration step, then reflect off any arena wall crossed.
    pub fn update(&mut self, config: &GameConfig) {
        self.pos += self.vel;

        if self.left() < 0.0 {
            self.vel.x = config.ball_speed;
        } else if self.right() > config.arena_width {
            self.vel.x = -config.ball_speed;
        }

        if self.top() < 0.0 {
            self.vel.y = config.ball_speed;
        } else if self.bottom() > config.arena_height {
            self.vel.y = -config.ball_speed;
        }
    }
}

impl Bounded for Ball {
    fn left(&self) -> f32 {
        self.pos.x - self.radius
    }
    fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
    fn top(&self) -> f32 {
        self.pos.y - self.radius
    }
    fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle. Moves horizontally only; `vel.x` is 0 or
/// `±paddle_speed`, `vel.y` stays 0.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::new(config.paddle_width, config.paddle_height),
            vel: Vec2::ZERO,
        }
    }

    /// Integrate the previous frame's velocity, then re-sample input.
    ///
    /// The boundary guards test the pre-move edges, so held input takes
    /// effect one frame late and an edge can stop less than one speed step
    /// past a wall before velocity zeroes. Callers rely on this ordering.
    pub fn update(&mut self, move_left: bool, move_right: bool, config: &GameConfig) {
        self.pos += self.vel;

        if move_left && self.left() > 0.0 {
            self.vel.x = -config.paddle_speed;
        } else if move_right && self.right() < config.arena_width {
            self.vel.x = config.paddle_speed;
        } else {
            self.vel.x = 0.0;
        }
    }
}

impl Bounded for Paddle {
    fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }
    fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
    fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }
    fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// A destructible brick. Geometry is fixed at construction; only the
/// `destroyed` flag ever mutates, and only once.
#[derive(Debug, Clone)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::new(config.brick_width, config.brick_height),
            destroyed: false,
        }
    }
}

impl Bounded for Brick {
    fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }
    fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
    fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }
    fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Complete game state: the single ball, the paddle, and the live bricks.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Set up a fresh game: ball at arena center, paddle near the bottom,
    /// full brick grid at the top.
    pub fn new(config: &GameConfig) -> Self {
        let center = Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0);
        let paddle_pos = Vec2::new(
            config.arena_width / 2.0,
            config.arena_height - config.paddle_baseline,
        );

        Self {
            phase: GamePhase::Running,
            ball: Ball::new(center, config),
            paddle: Paddle::new(paddle_pos, config),
            bricks: build_brick_grid(config),
        }
    }

    /// Number of bricks still standing
    pub fn live_bricks(&self) -> usize {
        self.bricks.len()
    }
}

/// Lay out the full grid: `brick_cols × brick_rows` bricks spaced by
/// `brick_gap`, horizontally centered, first row one grid step below the
/// top edge.
fn build_brick_grid(config: &GameConfig) -> Vec<Brick> {
    let step_x = config.brick_width + config.brick_gap;
    let step_y = config.brick_height + config.brick_gap;
    // Equal margins on both sides of the grid
    let inset_x = (config.arena_width - (config.brick_cols as f32 + 1.0) * step_x) / 2.0;

    let mut bricks = Vec::with_capacity(config.brick_cols * config.brick_rows);
    for col in 0..config.brick_cols {
        for row in 0..config.brick_rows {
            let pos = Vec2::new(
                inset_x + (col as f32 + 1.0) * step_x,
                (row as f32 + 1.0) * step_y,
            );
            bricks.push(Brick::new(pos, config));
        }
    }

    log::debug!(
        "brick grid: {}x{} ({} bricks)",
        config.brick_cols,
        config.brick_rows,
        bricks.len()
    );

    bricks
}
