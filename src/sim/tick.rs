//! Fixed timestep simulation tick
//!
//! Advances one 60 Hz frame in a fixed order: state machine, then
//! physics/animation, then the spawner, then collision. `now_ms` is the
//! adapter's monotonic millisecond clock; it drives the score and the
//! spawn cadence, while all motion constants are per-frame values.

use serde::{Deserialize, Serialize};

use super::collision::player_hit;
use super::spawn::maybe_spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump key is down this frame (starts a run while in Menu)
    pub jump: bool,
    /// Quit requested; the core ignores this, the host loop exits on it
    pub quit: bool,
}

/// Advance the game state by one fixed frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    match state.phase {
        GamePhase::Menu => {
            if input.jump {
                start_run(state, now_ms);
            }
        }
        GamePhase::Playing => {
            state.score = elapsed_score(state.start_ms, now_ms);

            // Player update order: input, gravity, animation. A jump frame
            // therefore still integrates gravity (impulse -20 moves the
            // player -19 on its first frame).
            if input.jump && state.player.try_jump() {
                state.push_event(GameEvent::Jumped);
            }
            state.player.apply_gravity();
            state.player.animate();

            state.ground_scroll -= GROUND_SCROLL_SPEED;
            if state.ground_scroll <= -SCREEN_WIDTH {
                state.ground_scroll = 0;
            }

            for obstacle in &mut state.obstacles {
                obstacle.advance();
            }
            state.obstacles.retain(|o| !o.off_screen());

            maybe_spawn(state, now_ms);

            if player_hit(&state.player, &state.obstacles) {
                end_run(state);
            }
        }
    }
}

/// Whole seconds elapsed since the run started
fn elapsed_score(start_ms: u64, now_ms: u64) -> u32 {
    (now_ms.saturating_sub(start_ms) / 1000) as u32
}

/// Menu -> Playing: capture the time reference, reset score and spawner
fn start_run(state: &mut GameState, now_ms: u64) {
    state.phase = GamePhase::Playing;
    state.start_ms = now_ms;
    state.last_spawn_ms = now_ms;
    state.score = 0;
    state.obstacles.clear();
    state.push_event(GameEvent::Started);
}

/// Playing -> Menu: freeze the final score, roll the high score forward
fn end_run(state: &mut GameState) {
    state.phase = GamePhase::Menu;
    state.obstacles.clear();

    let new_high_score = if state.score > state.high_score {
        state.high_score = state.score;
        Some(state.score)
    } else {
        None
    };
    state.push_event(GameEvent::Ended {
        score: state.score,
        new_high_score,
    });
}

/// An obstacle positioned right on top of the player
#[cfg(test)]
fn colliding_obstacle() -> super::state::Obstacle {
    use super::state::{Obstacle, ObstacleKind};
    Obstacle::new(ObstacleKind::Ground, PLAYER_START_X)
}
