mod display;

use std::io::stdout;
use std::time::{Duration, Instant};

use macroquad::prelude::{
    is_key_down, is_key_pressed, is_quit_requested, next_frame, prevent_quit, Conf, KeyCode,
};
use rand::thread_rng;

use urban_defender::assets::{self, AssetPaths, SpriteSheet};
use urban_defender::compute::{init_state, tick};
use urban_defender::config::{Rules, SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS, WINDOW_TITLE};
use urban_defender::diagnostics;
use urban_defender::entities::{EndReason, FrameInput, GameStatus};

const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Sample the keyboard and the window close button for this frame.
fn poll_input() -> FrameInput {
    FrameInput {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        fire: is_key_pressed(KeyCode::Space),
        quit: is_quit_requested(),
    }
}

/// Print the startup report and decode the sprites.  `None` after a
/// failure has been reported.
fn load_assets() -> Option<SpriteSheet> {
    let mut out = stdout();
    let cwd = std::env::current_dir().unwrap_or_default();
    let paths = AssetPaths::under(&assets::asset_base());
    if let Err(e) = diagnostics::report_probe(&mut out, &cwd, &paths) {
        log::warn!("could not write startup report: {e}");
    }

    match assets::load_sprites(&paths) {
        Ok(sheet) => {
            if let Err(e) = diagnostics::report_loaded(&mut out) {
                log::warn!("could not write startup report: {e}");
            }
            Some(sheet)
        }
        Err(err) => {
            log::error!("asset load failed: {err}");
            if let Err(e) = diagnostics::report_failure(&mut out, &err) {
                log::warn!("could not write failure report: {e}");
            }
            None
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(sheet) = load_assets() else {
        std::process::exit(1);
    };

    // Route the close button through the input step instead of exiting.
    prevent_quit();

    let textures = display::Textures::upload(&sheet);
    let mut rng = thread_rng();
    let mut state = init_state(Rules::default(), sheet.sizes(), &mut rng);
    let started = Instant::now();

    loop {
        let frame_start = Instant::now();

        let input = poll_input();
        let now_ms = started.elapsed().as_millis() as u64;
        state = tick(&state, &input, now_ms, &mut rng);

        if state.status == GameStatus::Terminated(EndReason::WindowClosed) {
            break;
        }

        // The final frame of a lost game is still shown once.
        display::render(&state, &textures);
        next_frame().await;

        if !state.is_running() {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }

    log::info!(
        "session ended ({:?}): score {} after {} frames",
        state.status,
        state.score,
        state.frame
    );
}
