//! Fixed game constants.
//!
//! Nothing here is read from disk; the only runtime knob is the asset
//! directory override (`ASSET_DIR_ENV`).

use std::ops::RangeInclusive;

// ── Window ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const WINDOW_TITLE: &str = "Urban Defender";
pub const TARGET_FPS: u32 = 60;

// ── HUD ───────────────────────────────────────────────────────────────────────

pub const SCORE_POS: (f32, f32) = (10.0, 10.0);
pub const SCORE_FONT_SIZE: f32 = 36.0;

// ── Assets ────────────────────────────────────────────────────────────────────

/// Overrides the directory that holds `assets/` (default: next to the executable).
pub const ASSET_DIR_ENV: &str = "URBAN_DEFENDER_ASSETS";
pub const ASSET_SUBDIR: &str = "assets";
pub const PLAYER_IMAGE: &str = "player.png";
pub const ENEMY_IMAGE: &str = "enemy.png";
pub const BULLET_IMAGE: &str = "bullet.png";

// ── Gameplay ──────────────────────────────────────────────────────────────────

/// Gameplay constants bundled into one value so logic never reaches for
/// globals and tests can shrink the playfield.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rules {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Horizontal pixels per frame while Left/Right is held.
    pub player_speed: i32,
    /// Gap between the player's bottom edge and the screen bottom.
    pub player_bottom_margin: i32,
    pub shoot_cooldown_ms: u64,
    /// Vertical pixels per frame; negative is upward.
    pub bullet_speed: i32,
    pub initial_enemies: usize,
    pub enemy_speed_min: i32,
    pub enemy_speed_max: i32,
    pub enemy_spawn_y_min: i32,
    pub enemy_spawn_y_max: i32,
    /// How far below the bottom edge an enemy's top must go before recycling.
    pub offscreen_margin: i32,
    pub kill_score: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_speed: 5,
            player_bottom_margin: 10,
            shoot_cooldown_ms: 250,
            bullet_speed: -10,
            initial_enemies: 8,
            enemy_speed_min: 1,
            enemy_speed_max: 3,
            enemy_spawn_y_min: -100,
            enemy_spawn_y_max: -40,
            offscreen_margin: 10,
            kill_score: 10,
        }
    }
}

impl Rules {
    pub fn enemy_speed_range(&self) -> RangeInclusive<i32> {
        self.enemy_speed_min..=self.enemy_speed_max
    }

    pub fn enemy_spawn_y_range(&self) -> RangeInclusive<i32> {
        self.enemy_spawn_y_min..=self.enemy_spawn_y_max
    }
}
