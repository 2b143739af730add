//! Interval-based obstacle spawner
//!
//! Fires on a fixed wall-clock cadence while a run is active. Each firing
//! draws the obstacle kind from a weighted set (Flying 1 in 4, Ground
//! otherwise) and a uniform horizontal spawn position off-screen right.
//!
//! Randomness is deterministic: each spawn gets its own PCG stream derived
//! from the run seed and the spawn serial, so a session replays identically
//! from `(seed, input, clock)` and survives serialization.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameState, Obstacle, ObstacleKind};
use crate::consts::*;

/// Golden-ratio increment, decorrelates consecutive spawn streams
const STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Spawn one obstacle if the interval has elapsed
pub(crate) fn maybe_spawn(state: &mut GameState, now_ms: u64) {
    if now_ms.saturating_sub(state.last_spawn_ms) < SPAWN_INTERVAL_MS {
        return;
    }
    state.last_spawn_ms = now_ms;

    let mut rng = spawn_rng(state.seed, state.spawn_serial);
    state.spawn_serial += 1;

    let kind = if rng.random_range(0..4) == 0 {
        ObstacleKind::Flying
    } else {
        ObstacleKind::Ground
    };
    let x = rng.random_range(SPAWN_X_MIN..=SPAWN_X_MAX);
    state.obstacles.push(Obstacle::new(kind, x));
}

fn spawn_rng(seed: u64, serial: u32) -> Pcg32 {
    Pcg32::seed_from_u64(seed ^ (serial as u64).wrapping_mul(STREAM_SALT))
}
