//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed 60 Hz tick only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//!
//! A session is fully reproducible from `(seed, input stream, clock stream)`.

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::player_hit;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{TickInput, tick};
