//! Game state and core simulation types
//!
//! Everything needed to reproduce a session deterministically lives here.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title/game-over screen, waiting for a jump input to start
    Menu,
    /// Active run
    Playing,
}

/// The player entity
///
/// Anchored by the bottom-center of its hitbox; the hitbox is the full
/// sprite frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity in px/frame (positive = down)
    pub velocity: i32,
    /// Fractional walk-cycle counter, wraps at `ANIM_FRAME_COUNT`
    pub phase: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::from_midbottom(IVec2::new(PLAYER_START_X, GROUND_Y), PLAYER_FRAME_SIZE),
            velocity: 0,
            phase: 0.0,
        }
    }
}

impl Player {
    /// Hitbox bottom at or below the ground line
    pub fn grounded(&self) -> bool {
        self.rect.bottom() >= GROUND_Y
    }

    /// Airborne entities display the fixed jump frame
    pub fn airborne(&self) -> bool {
        self.rect.bottom() < GROUND_Y
    }

    /// Set the jump impulse if grounded. Returns whether a jump happened.
    pub fn try_jump(&mut self) -> bool {
        if self.grounded() {
            self.velocity = JUMP_IMPULSE;
            true
        } else {
            false
        }
    }

    /// Accumulate gravity, integrate position, clamp to the ground line.
    ///
    /// The clamp only moves the position; velocity keeps accumulating until
    /// the next jump resets it.
    pub fn apply_gravity(&mut self) {
        self.velocity += GRAVITY;
        self.rect.translate(IVec2::new(0, self.velocity));
        if self.rect.bottom() >= GROUND_Y {
            self.rect.set_bottom(GROUND_Y);
        }
    }

    /// Advance the walk cycle while grounded; airborne frames are static
    pub fn animate(&mut self) {
        if self.grounded() {
            self.phase += ANIM_PHASE_STEP;
            if self.phase >= ANIM_FRAME_COUNT as f32 {
                self.phase = 0.0;
            }
        }
    }

    /// Index into the walk cycle
    pub fn frame_index(&self) -> usize {
        self.phase as usize
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Hovers above jump height; only dangerous mid-jump
    Flying,
    /// Sits on the ground line; must be jumped over
    Ground,
}

impl ObstacleKind {
    /// Bottom-center spawn height
    pub fn spawn_y(&self) -> i32 {
        match self {
            ObstacleKind::Flying => FLYING_SPAWN_Y,
            ObstacleKind::Ground => GROUND_SPAWN_Y,
        }
    }

    /// Visual sprite frame dimensions
    pub fn frame_size(&self) -> IVec2 {
        match self {
            ObstacleKind::Flying => FLYING_FRAME_SIZE,
            ObstacleKind::Ground => GROUND_FRAME_SIZE,
        }
    }

    /// Hitbox inset relative to the visual frame
    fn hitbox_inset(&self) -> IVec2 {
        match self {
            ObstacleKind::Flying => IVec2::ZERO,
            ObstacleKind::Ground => GROUND_HITBOX_INSET,
        }
    }
}

/// An obstacle entity
///
/// `rect` is the collision hitbox; for Ground obstacles it is inset from
/// the visual frame, so drawing goes through [`Obstacle::visual_rect`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Fractional animation counter, wraps at `ANIM_FRAME_COUNT`
    pub phase: f32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: i32) -> Self {
        let frame = Rect::from_midbottom(IVec2::new(x, kind.spawn_y()), kind.frame_size());
        Self {
            kind,
            rect: frame.inflate(kind.hitbox_inset()),
            phase: 0.0,
        }
    }

    /// One frame of movement and animation
    pub fn advance(&mut self) {
        self.phase += ANIM_PHASE_STEP;
        if self.phase >= ANIM_FRAME_COUNT as f32 {
            self.phase = 0.0;
        }
        self.rect.translate(IVec2::new(-SCROLL_SPEED, 0));
    }

    /// Fully scrolled off the left edge, eligible for removal
    pub fn off_screen(&self) -> bool {
        self.rect.left() <= DESPAWN_X
    }

    pub fn frame_index(&self) -> usize {
        self.phase as usize
    }

    /// The sprite frame rectangle (hitbox with the inset undone)
    pub fn visual_rect(&self) -> Rect {
        self.rect.inflate(-self.kind.hitbox_inset())
    }
}

/// Side effects the render/audio adapter should act on, drained each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run started (Menu -> Playing)
    Started,
    /// The player jumped; play the jump sound
    Jumped,
    /// A run ended by collision. `new_high_score` is set when the final
    /// score beat the previous best and should be persisted.
    Ended {
        score: u32,
        new_high_score: Option<u32>,
    },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed driving the obstacle spawn sequence
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles; non-empty only while Playing
    pub obstacles: Vec<Obstacle>,
    /// Clock reading captured at the last Menu -> Playing transition
    pub start_ms: u64,
    /// Clock reading of the last spawner firing
    pub last_spawn_ms: u64,
    /// Spawn counter, also salts the per-spawn RNG stream
    pub spawn_serial: u32,
    /// Whole seconds survived; derived from the clock each frame while
    /// Playing, frozen at the final value in Menu
    pub score: u32,
    /// Best score seen this process (seeded from the persisted value)
    pub high_score: u32,
    /// Ground strip scroll offset, wraps at -SCREEN_WIDTH
    pub ground_scroll: i32,
    /// Pending side effects for the adapter
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            player: Player::default(),
            obstacles: Vec::new(),
            start_ms: 0,
            last_spawn_ms: 0,
            spawn_serial: 0,
            score: 0,
            high_score,
            ground_scroll: 0,
            events: Vec::new(),
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
