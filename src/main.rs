//! Dash Runner entry point
//!
//! Runs a headless demo episode: a scripted policy jumps over ground
//! obstacles on a simulated 60 Hz clock until the first collision, then
//! reports the score. Hooking up a real window/audio adapter replaces the
//! loop body; the simulation side stays identical.

use std::time::{SystemTime, UNIX_EPOCH};

use dash_runner::consts::*;
use dash_runner::scene;
use dash_runner::sim::{GameEvent, GamePhase, ObstacleKind, TickInput};
use dash_runner::{Game, HighScoreStore};

/// Demo cap: ten minutes of simulated play
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Dash Runner starting, seed {}", seed);

    let store = HighScoreStore::load(dash_runner::highscore::DEFAULT_PATH);
    let mut game = Game::new(store, seed);

    for frame in 0..MAX_FRAMES {
        let now_ms = frame * 1000 / TICK_HZ as u64;
        let input = TickInput {
            jump: demo_jump(&game),
            quit: false,
        };

        let events = game.frame(&input, now_ms);
        for event in events {
            match event {
                GameEvent::Started => log::info!("run started"),
                GameEvent::Jumped => log::debug!("jump at {} ms", now_ms),
                GameEvent::Ended {
                    score,
                    new_high_score,
                } => {
                    let draw_count = scene::draw_list(game.state()).len();
                    log::info!("run over after {} draw commands on final frame", draw_count);
                    match new_high_score {
                        Some(best) => println!("Game over. Score {score} - new high score {best}!"),
                        None => println!(
                            "Game over. Score {score} (best {})",
                            game.state().high_score
                        ),
                    }
                    return;
                }
            }
        }
    }

    println!("Demo cap reached with score {}", game.state().score);
}

/// Jump when grounded and a ground obstacle is closing in
fn demo_jump(game: &Game) -> bool {
    let state = game.state();
    if state.phase == GamePhase::Menu {
        return true;
    }
    if !state.player.grounded() {
        return false;
    }
    let player_right = state.player.rect.right();
    state.obstacles.iter().any(|o| {
        o.kind == ObstacleKind::Ground
            && o.rect.left() > player_right
            && o.rect.left() - player_right < 24 * SCROLL_SPEED
    })
}
