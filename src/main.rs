//! Brickfall entry point
//!
//! Owns the window and the keyboard. Each frame samples the held keys into
//! a [`TickInput`], advances the simulation by one step, and submits the
//! draw calls; raylib paces frames to the configured FPS cap.

use raylib::consts::KeyboardKey;
use raylib::init;

use brickfall::config::GameConfig;
use brickfall::render;
use brickfall::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Brickfall starting...");

    let config = GameConfig::load();

    let (mut handle, thread) = init()
        .size(config.arena_width as i32, config.arena_height as i32)
        .title("Brickfall")
        .build();
    handle.set_target_fps(config.target_fps);

    let mut state = GameState::new(&config);
    log::info!(
        "Arena {}x{}, {} bricks",
        config.arena_width,
        config.arena_height,
        state.live_bricks()
    );

    while state.phase == GamePhase::Running && !handle.window_should_close() {
        let input = TickInput {
            move_left: handle.is_key_down(KeyboardKey::KEY_LEFT),
            move_right: handle.is_key_down(KeyboardKey::KEY_RIGHT),
            quit: handle.is_key_down(KeyboardKey::KEY_ESCAPE),
        };

        tick(&mut state, &input, &config);

        let mut d = handle.begin_drawing(&thread);
        render::draw_frame(&mut d, &state);
    }

    log::info!("Brickfall shutting down");
}
