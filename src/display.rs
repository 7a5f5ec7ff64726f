//! Rendering layer — all drawing lives here.
//!
//! `render` receives an immutable view of the game state and the uploaded
//! textures.  No game logic is performed; this module only translates
//! state into draw calls.

use macroquad::prelude::{
    clear_background, draw_text, draw_texture, FilterMode, Texture2D, BLACK, WHITE,
};

use urban_defender::assets::{SpriteImage, SpriteSheet};
use urban_defender::config::{SCORE_FONT_SIZE, SCORE_POS};
use urban_defender::entities::{GameState, Rect};

pub struct Textures {
    player: Texture2D,
    enemy: Texture2D,
    bullet: Texture2D,
}

impl Textures {
    /// Needs a live window; call after the event loop has started.
    pub fn upload(sheet: &SpriteSheet) -> Self {
        Self {
            player: upload(&sheet.player),
            enemy: upload(&sheet.enemy),
            bullet: upload(&sheet.bullet),
        }
    }
}

fn upload(img: &SpriteImage) -> Texture2D {
    // Dimensions were bounds-checked when the image was decoded.
    let tex = Texture2D::from_rgba8(img.width as u16, img.height as u16, &img.rgba);
    tex.set_filter(FilterMode::Nearest);
    tex
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render(state: &GameState, textures: &Textures) {
    clear_background(BLACK);

    draw_sprite(&textures.player, &state.player.rect);
    for enemy in &state.enemies {
        draw_sprite(&textures.enemy, &enemy.rect);
    }
    for bullet in &state.bullets {
        draw_sprite(&textures.bullet, &bullet.rect);
    }

    draw_score(state.score);
}

fn draw_sprite(tex: &Texture2D, rect: &Rect) {
    draw_texture(tex, rect.x as f32, rect.y as f32, WHITE);
}

fn draw_score(score: u32) {
    // draw_text anchors at the baseline, not the top-left corner.
    let (x, y) = SCORE_POS;
    draw_text(
        &format!("Score: {score}"),
        x,
        y + SCORE_FONT_SIZE * 0.75,
        SCORE_FONT_SIZE,
        WHITE,
    );
}
