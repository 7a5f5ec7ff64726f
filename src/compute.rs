//! Pure game-logic functions.
//!
//! Every public function takes immutable references to the current state
//! (and, where needed, an RNG handle) and returns brand-new values.  Side
//! effects are limited to the injected RNG and `log` output.

use log::{debug, trace};
use rand::Rng;

use crate::config::Rules;
use crate::entities::{
    Bullet, EndReason, Enemy, FrameInput, GameState, GameStatus, Player, Rect, Size,
    SpriteSizes,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: player centred near the bottom edge and the
/// initial enemy wave staggered above the visible area.
pub fn init_state(rules: Rules, sprites: SpriteSizes, rng: &mut impl Rng) -> GameState {
    let p = sprites.player;
    let player = Player {
        rect: Rect::new(
            rules.screen_width / 2 - p.width / 2,
            rules.screen_height - rules.player_bottom_margin - p.height,
            p.width,
            p.height,
        ),
        last_shot_ms: None,
    };

    let enemies = (0..rules.initial_enemies)
        .map(|_| respawn_enemy(&rules, sprites.enemy, rng))
        .collect();

    GameState {
        player,
        enemies,
        bullets: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        frame: 0,
        sprites,
        rules,
    }
}

/// Fresh enemy state: random column, random height above the screen,
/// random descent speed.  Used for the opening wave, for recycling an enemy
/// that fell off the bottom, and for replacing a destroyed one.
pub fn respawn_enemy(rules: &Rules, size: Size, rng: &mut impl Rng) -> Enemy {
    let max_x = (rules.screen_width - size.width).max(0);
    Enemy {
        rect: Rect::new(
            rng.gen_range(0..=max_x),
            rng.gen_range(rules.enemy_spawn_y_range()),
            size.width,
            size.height,
        ),
        speed_y: rng.gen_range(rules.enemy_speed_range()),
    }
}

/// A bullet whose bottom-centre sits at `(x, y)`.
pub fn spawn_bullet(rules: &Rules, size: Size, x: i32, y: i32) -> Bullet {
    Bullet {
        rect: Rect::new(x - size.width / 2, y - size.height, size.width, size.height),
        speed_y: rules.bullet_speed,
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Apply held direction keys and clamp the player to the screen.
/// Holding both arrows cancels out.
pub fn move_player(player: &Player, input: &FrameInput, rules: &Rules) -> Player {
    let mut x = player.rect.x;
    if input.left {
        x -= rules.player_speed;
    }
    if input.right {
        x += rules.player_speed;
    }
    let max_x = (rules.screen_width - player.rect.width).max(0);
    Player {
        rect: Rect { x: x.clamp(0, max_x), ..player.rect },
        ..player.clone()
    }
}

/// Fire from the player's top-centre once strictly more than the cooldown
/// has passed since the last shot.
/// Suppression is silent: the state comes back unchanged.
pub fn player_shoot(state: &GameState, now_ms: u64) -> GameState {
    let rules = &state.rules;
    if let Some(last) = state.player.last_shot_ms {
        if now_ms.saturating_sub(last) <= rules.shoot_cooldown_ms {
            trace!("shot suppressed: {}ms since last", now_ms.saturating_sub(last));
            return state.clone();
        }
    }

    let p = &state.player.rect;
    let mut bullets = state.bullets.clone();
    bullets.push(spawn_bullet(rules, state.sprites.bullet, p.center_x(), p.top()));

    GameState {
        player: Player {
            last_shot_ms: Some(now_ms),
            ..state.player.clone()
        },
        bullets,
        ..state.clone()
    }
}

// ── Enemies & bullets ────────────────────────────────────────────────────────

/// Descend one frame; once fully below the screen, recycle in place.
pub fn advance_enemy(enemy: &Enemy, rules: &Rules, rng: &mut impl Rng) -> Enemy {
    let rect = Rect { y: enemy.rect.y + enemy.speed_y, ..enemy.rect };
    if rect.top() > rules.screen_height + rules.offscreen_margin {
        debug!("enemy recycled at x={}", rect.x);
        return respawn_enemy(rules, Size::new(rect.width, rect.height), rng);
    }
    Enemy { rect, ..enemy.clone() }
}

/// Ascend one frame.  `None` once the bullet has left through the top edge.
pub fn advance_bullet(bullet: &Bullet) -> Option<Bullet> {
    let rect = Rect { y: bullet.rect.y + bullet.speed_y, ..bullet.rect };
    if rect.bottom() < 0 {
        None
    } else {
        Some(Bullet { rect, ..bullet.clone() })
    }
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Outcome of the bullet × enemy pass.
#[derive(Clone, Debug)]
pub struct HitReport {
    /// Surviving enemies followed by one replacement per kill.
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub kills: u32,
}

/// Every enemy overlapped by at least one still-unused bullet dies and takes
/// all of those bullets with it.  A bullet spent on one enemy cannot hit
/// another in the same frame; each dead enemy scores once.
pub fn resolve_bullet_hits(
    enemies: &[Enemy],
    bullets: &[Bullet],
    rules: &Rules,
    enemy_size: Size,
    rng: &mut impl Rng,
) -> HitReport {
    let mut used = vec![false; bullets.len()];
    let mut survivors = Vec::with_capacity(enemies.len());
    let mut kills = 0u32;

    for enemy in enemies {
        let mut hit = false;
        for (bi, bullet) in bullets.iter().enumerate() {
            if !used[bi] && bullet.rect.intersects(&enemy.rect) {
                used[bi] = true;
                hit = true;
            }
        }
        if hit {
            kills += 1;
            debug!("enemy destroyed at ({}, {})", enemy.rect.x, enemy.rect.y);
        } else {
            survivors.push(enemy.clone());
        }
    }

    for _ in 0..kills {
        survivors.push(respawn_enemy(rules, enemy_size, rng));
    }

    let bullets = bullets
        .iter()
        .zip(&used)
        .filter(|(_, spent)| !**spent)
        .map(|(b, _)| b.clone())
        .collect();

    HitReport { enemies: survivors, bullets, kills }
}

pub fn player_collides(player: &Player, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| e.rect.intersects(&player.rect))
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// A terminated state is returned unchanged.
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    now_ms: u64,
    rng: &mut impl Rng,
) -> GameState {
    if !state.is_running() {
        return state.clone();
    }

    // ── 1. Events ────────────────────────────────────────────────────────────
    if input.quit {
        return GameState {
            status: GameStatus::Terminated(EndReason::WindowClosed),
            ..state.clone()
        };
    }
    let state = if input.fire {
        player_shoot(state, now_ms)
    } else {
        state.clone()
    };
    let rules = state.rules;

    // ── 2. Movement: player first, then everything else ──────────────────────
    let player = move_player(&state.player, input, &rules);
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| advance_enemy(e, &rules, rng))
        .collect();
    let bullets: Vec<Bullet> = state.bullets.iter().filter_map(advance_bullet).collect();

    // ── 3. Collision: bullets ↔ enemies ──────────────────────────────────────
    let hits = resolve_bullet_hits(&enemies, &bullets, &rules, state.sprites.enemy, rng);

    // ── 4. Collision: enemies ↔ player ───────────────────────────────────────
    let status = if player_collides(&player, &hits.enemies) {
        GameStatus::Terminated(EndReason::PlayerHit)
    } else {
        GameStatus::Running
    };

    GameState {
        player,
        enemies: hits.enemies,
        bullets: hits.bullets,
        score: state.score + hits.kills * rules.kill_score,
        status,
        frame: state.frame + 1,
        ..state
    }
}
