//! Draw-call submission
//!
//! Thin layer over raylib's 2D primitives: a filled circle for the ball,
//! filled rectangles for the paddle and every live brick. Entity positions
//! are center-origin, raylib rectangles are top-left, so edges come from
//! the same `Bounded` accessors the collision code uses.

use raylib::color::Color;
use raylib::drawing::RaylibDraw;

use crate::sim::{Bounded, GameState};

const BACKGROUND: Color = Color::BLACK;
const BALL_COLOR: Color = Color::RED;
const PADDLE_COLOR: Color = Color::RED;
const BRICK_COLOR: Color = Color::YELLOW;

/// Submit one frame's draw calls.
pub fn draw_frame(d: &mut impl RaylibDraw, state: &GameState) {
    d.clear_background(BACKGROUND);

    d.draw_circle(
        state.ball.pos.x as i32,
        state.ball.pos.y as i32,
        state.ball.radius,
        BALL_COLOR,
    );

    d.draw_rectangle(
        state.paddle.left() as i32,
        state.paddle.top() as i32,
        state.paddle.size.x as i32,
        state.paddle.size.y as i32,
        PADDLE_COLOR,
    );

    for brick in &state.bricks {
        d.draw_rectangle(
            brick.left() as i32,
            brick.top() as i32,
            brick.size.x as i32,
            brick.size.y as i32,
            BRICK_COLOR,
        );
    }
}
