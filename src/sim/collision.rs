//! Collision detection and response
//!
//! Two pair resolvers, each run once per frame per relevant pair. Both only
//! ever flip velocity signs; the per-axis speed magnitude is preserved, so
//! the ball's velocity invariant holds across every collision.

use super::bounds::{Bounded, intersects};
use super::state::{Ball, Brick, Paddle};
use crate::config::GameConfig;

/// Bounce the ball off the paddle.
///
/// The ball is always pushed upward; the horizontal direction depends on
/// which half of the paddle was struck. Two deflection angles total.
pub fn paddle_ball(paddle: &Paddle, ball: &mut Ball, config: &GameConfig) {
    if !intersects(paddle, ball) {
        return;
    }

    ball.vel.y = -config.ball_speed;

    if ball.pos.x < paddle.pos.x {
        ball.vel.x = -config.ball_speed;
    } else {
        ball.vel.x = config.ball_speed;
    }
}

/// Destroy a brick on contact and bounce the ball off it.
///
/// The approach side per axis comes from comparing overlap magnitudes, and
/// the bounce happens on the axis of smaller penetration. Exactly one axis
/// is altered per collision; an exact tie resolves vertically.
pub fn brick_ball(brick: &mut Brick, ball: &mut Ball, config: &GameConfig) {
    // One-shot: a destroyed brick never deflects the ball again
    if brick.destroyed || !intersects(brick, ball) {
        return;
    }

    brick.destroyed = true;

    let overlap_left = ball.right() - brick.left();
    let overlap_right = brick.right() - ball.left();
    let overlap_top = ball.bottom() - brick.top();
    let overlap_bottom = brick.bottom() - ball.top();

    let from_left = overlap_left.abs() < overlap_right.abs();
    let from_top = overlap_top.abs() < overlap_bottom.abs();

    let min_overlap_x = if from_left { overlap_left } else { overlap_right };
    let min_overlap_y = if from_top { overlap_top } else { overlap_bottom };

    if min_overlap_x.abs() < min_overlap_y.abs() {
        ball.vel.x = if from_left {
            -config.ball_speed
        } else {
            config.ball_speed
        };
    } else {
        ball.vel.y = if from_top {
            -config.ball_speed
        } else {
            config.ball_speed
        };
    }
}
