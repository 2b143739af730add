//! Session driver
//!
//! Glues the pure simulation to the high score store: runs one tick per
//! frame, drains the resulting events, and persists the high score the
//! moment a run ends with a new best. The host loop owns the clock and the
//! input snapshot and acts on the returned events (sounds, quit).

use crate::highscore::HighScoreStore;
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct Game {
    state: GameState,
    store: HighScoreStore,
}

impl Game {
    /// Start a new game session seeded from the store's persisted best
    pub fn new(store: HighScoreStore, seed: u64) -> Self {
        let state = GameState::new(seed, store.best());
        Self { state, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance one frame and hand back the events the adapter must act on
    pub fn frame(&mut self, input: &TickInput, now_ms: u64) -> Vec<GameEvent> {
        tick(&mut self.state, input, now_ms);
        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::Ended {
                score,
                new_high_score: Some(best),
            } = event
            {
                debug_assert_eq!(score, best);
                self.store.record(*best);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{GamePhase, Obstacle, ObstacleKind};
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn temp_path(tag: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "dash-runner-game-{}-{}-{}.txt",
            tag,
            std::process::id(),
            n
        ))
    }

    fn jump() -> TickInput {
        TickInput {
            jump: true,
            quit: false,
        }
    }

    /// Menu, no file, jump at T0, collision at T0+2500 -> score 2 persisted
    #[test]
    fn first_run_persists_new_high_score() {
        let path = temp_path("first-run");
        let mut game = Game::new(HighScoreStore::load(&path), 1);
        assert_eq!(game.state().high_score, 0);

        let events = game.frame(&jump(), 0);
        assert_eq!(events, vec![GameEvent::Started]);
        assert_eq!(game.state().phase, GamePhase::Playing);

        // Force a collision at T0 + 2500 ms
        game.state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Ground, PLAYER_START_X));
        let events = game.frame(&TickInput::default(), 2500);

        assert_eq!(game.state().phase, GamePhase::Menu);
        assert_eq!(
            events,
            vec![GameEvent::Ended {
                score: 2,
                new_high_score: Some(2)
            }]
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "2");
        let _ = fs::remove_file(&path);
    }

    /// Persisted best 5, run ends with 3 -> file untouched
    #[test]
    fn losing_run_leaves_persisted_score_alone() {
        let path = temp_path("keep-best");
        fs::write(&path, "5").unwrap();
        let mut game = Game::new(HighScoreStore::load(&path), 1);
        assert_eq!(game.state().high_score, 5);

        game.frame(&jump(), 0);
        game.state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Ground, PLAYER_START_X));
        let events = game.frame(&TickInput::default(), 3000);

        assert_eq!(
            events,
            vec![GameEvent::Ended {
                score: 3,
                new_high_score: None
            }]
        );
        assert_eq!(game.state().high_score, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "5");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn high_score_survives_across_runs_in_one_session() {
        let path = temp_path("two-runs");
        let mut game = Game::new(HighScoreStore::load(&path), 1);

        // Run 1: dies at 4 seconds
        game.frame(&jump(), 0);
        game.state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Ground, PLAYER_START_X));
        game.frame(&TickInput::default(), 4000);
        assert_eq!(game.state().high_score, 4);

        // Run 2: dies at 1 second, best stays 4
        game.frame(&jump(), 10_000);
        game.state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Ground, PLAYER_START_X));
        game.frame(&TickInput::default(), 11_000);

        assert_eq!(game.state().high_score, 4);
        assert_eq!(fs::read_to_string(&path).unwrap(), "4");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn jump_event_fires_once_per_takeoff() {
        let path = temp_path("jump-sound");
        let mut game = Game::new(HighScoreStore::load(&path), 1);
        game.frame(&jump(), 0);

        let events = game.frame(&jump(), 100);
        assert_eq!(events, vec![GameEvent::Jumped]);

        // Held jump while airborne stays silent
        let events = game.frame(&jump(), 200);
        assert!(events.is_empty());
        let _ = fs::remove_file(&path);
    }
}
