//! Dash Runner - a single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `scene`: Per-frame draw command list for the render adapter
//! - `highscore`: File-backed high score persistence
//! - `game`: Session driver tying the simulation to persistence

pub mod game;
pub mod highscore;
pub mod scene;
pub mod sim;

pub use game::Game;
pub use highscore::HighScoreStore;

use glam::IVec2;

/// Game configuration constants
///
/// All motion constants are per-frame values tuned for a fixed 60 Hz tick;
/// they are deliberately not scaled by elapsed real time.
pub mod consts {
    use glam::IVec2;

    /// Fixed simulation tick rate
    pub const TICK_HZ: u32 = 60;
    /// Duration of one tick on the millisecond clock
    pub const TICK_MS: u64 = 1000 / TICK_HZ as u64;

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: i32 = 1380;
    pub const SCREEN_HEIGHT: i32 = 690;
    /// Y coordinate of the ground line (entities stand with hitbox bottom here)
    pub const GROUND_Y: i32 = 620;
    /// Height of the ground strip sprite
    pub const GROUND_STRIP_HEIGHT: i32 = 100;

    /// Player spawn anchor (bottom-center)
    pub const PLAYER_START_X: i32 = 80;
    /// Downward acceleration added to vertical velocity each frame
    pub const GRAVITY: i32 = 1;
    /// Vertical velocity set by a jump (negative = up)
    pub const JUMP_IMPULSE: i32 = -20;

    /// Leftward obstacle translation per frame
    pub const SCROLL_SPEED: i32 = 6;
    /// Obstacles whose left edge reaches this are despawned
    pub const DESPAWN_X: i32 = -100;
    /// Ground strip translation per frame
    pub const GROUND_SCROLL_SPEED: i32 = 5;

    /// Wall-clock spawn cadence while playing
    pub const SPAWN_INTERVAL_MS: u64 = 1500;
    /// Horizontal spawn range (off-screen right, inclusive)
    pub const SPAWN_X_MIN: i32 = 1300;
    pub const SPAWN_X_MAX: i32 = 1500;
    /// Bottom-center spawn height per obstacle kind
    pub const FLYING_SPAWN_Y: i32 = 500;
    pub const GROUND_SPAWN_Y: i32 = 620;

    /// Walk/animation cycle: phase advances 0.1 per frame over 2 frames
    pub const ANIM_PHASE_STEP: f32 = 0.1;
    pub const ANIM_FRAME_COUNT: usize = 2;

    /// Sprite frame dimensions (width, height)
    pub const PLAYER_FRAME_SIZE: IVec2 = IVec2::new(68, 84);
    pub const FLYING_FRAME_SIZE: IVec2 = IVec2::new(69, 38);
    pub const GROUND_FRAME_SIZE: IVec2 = IVec2::new(72, 45);
    /// Ground obstacles collide with a hitbox this much smaller than the frame
    pub const GROUND_HITBOX_INSET: IVec2 = IVec2::new(-20, -10);
}

/// Screen center point
#[inline]
pub fn screen_center() -> IVec2 {
    IVec2::new(consts::SCREEN_WIDTH / 2, consts::SCREEN_HEIGHT / 2)
}
