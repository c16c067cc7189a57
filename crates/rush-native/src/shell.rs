//! The desktop shell: window, key sampling, texture blitting.
//!
//! Everything here is thin I/O around a [`GameRunner`]; all game logic runs
//! headless inside the engine crate.

use anyhow::Result;
use macroquad::prelude::{
    clear_background, draw_texture_ex, is_key_pressed, is_key_released, next_frame, vec2, Color,
    Conf, DrawTextureParams, FilterMode, KeyCode, Rect as TextureRect, Texture2D, WHITE,
};
use rush_engine::{Game, GameRunner, InputEvent, Key};

use crate::assets::LoadedAssets;
use crate::audio::SoundBank;
use crate::clock::FrameLimiter;

/// Light-grey desert backdrop.
const BACKGROUND: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0);

/// Physical key → engine key. Esc and Q both quit.
const KEYMAP: [(KeyCode, Key); 6] = [
    (KeyCode::Up, Key::Up),
    (KeyCode::Down, Key::Down),
    (KeyCode::Enter, Key::Confirm),
    (KeyCode::R, Key::Restart),
    (KeyCode::Escape, Key::Quit),
    (KeyCode::Q, Key::Quit),
];

/// Open a window and run the game until it requests quit or the window
/// closes.
pub fn run<G: Game + 'static>(game: G, assets: LoadedAssets) -> Result<()> {
    let config = game.config();
    let conf = Conf {
        window_title: config.title.clone(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, main_loop(game, assets));
    Ok(())
}

async fn main_loop<G: Game>(game: G, assets: LoadedAssets) {
    let config = game.config();

    let texture = Texture2D::from_rgba8(
        assets.pixels.width as u16,
        assets.pixels.height as u16,
        &assets.pixels.rgba,
    );
    texture.set_filter(FilterMode::Nearest);

    let sounds = SoundBank::load(&assets.sounds).await;

    let mut runner = GameRunner::new(game);
    runner.init();
    let mut clock = FrameLimiter::new(config.framerate);

    loop {
        // cooperative quit, observed at the top of the loop
        if runner.quit_requested() {
            log::info!("quit requested, leaving main loop");
            break;
        }

        let frame_ms = clock.tick();
        sample_keys(&mut runner);
        runner.tick(frame_ms);

        for &event in runner.sounds() {
            sounds.play(event);
        }

        clear_background(BACKGROUND);
        for cmd in runner.draw_list().iter() {
            draw_texture_ex(
                &texture,
                cmd.dst.x,
                cmd.dst.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(cmd.dst.w, cmd.dst.h)),
                    source: Some(TextureRect::new(cmd.src.x, cmd.src.y, cmd.src.w, cmd.src.h)),
                    ..Default::default()
                },
            );
        }

        next_frame().await;
    }
}

fn sample_keys<G: Game>(runner: &mut GameRunner<G>) {
    for (code, key) in KEYMAP {
        if is_key_pressed(code) {
            runner.push_input(InputEvent::KeyDown(key));
        }
        if is_key_released(code) {
            runner.push_input(InputEvent::KeyUp(key));
        }
    }
}
