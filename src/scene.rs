//! Draw command list for the render adapter
//!
//! The core never draws; it hands the adapter a flat list of
//! `(sprite, top-left position)` pairs per frame. Sprite selection is the
//! only rendering-adjacent decision the simulation owns, because animation
//! frame indices and the ground obstacle hitbox inset live in sim state.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::screen_center;
use crate::sim::{GamePhase, GameState, Obstacle, ObstacleKind};

/// Identifier for a sprite image owned by the render adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Sky,
    GroundStrip,
    PlayerWalk1,
    PlayerWalk2,
    PlayerJump,
    PlayerStand,
    FlyingFrame1,
    FlyingFrame2,
    GroundFrame1,
    GroundFrame2,
}

/// One blit: draw `sprite` with its top-left corner at `pos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub pos: IVec2,
}

impl DrawCommand {
    fn new(sprite: SpriteId, pos: IVec2) -> Self {
        Self { sprite, pos }
    }
}

/// Build the draw list for the current frame, background first
pub fn draw_list(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::new(SpriteId::Sky, IVec2::ZERO)];

    match state.phase {
        GamePhase::Menu => {
            // Standing player centered; text layout is the adapter's problem
            let pos = screen_center() - PLAYER_FRAME_SIZE / 2;
            commands.push(DrawCommand::new(SpriteId::PlayerStand, pos));
        }
        GamePhase::Playing => {
            push_ground_strip(state, &mut commands);
            commands.push(DrawCommand::new(player_sprite(state), state.player.rect.pos));
            for obstacle in &state.obstacles {
                commands.push(DrawCommand::new(
                    obstacle_sprite(obstacle),
                    obstacle.visual_rect().pos,
                ));
            }
        }
    }
    commands
}

/// Two copies of the ground strip so the wrap-around seam is never visible
fn push_ground_strip(state: &GameState, commands: &mut Vec<DrawCommand>) {
    let y = SCREEN_HEIGHT - GROUND_STRIP_HEIGHT;
    commands.push(DrawCommand::new(
        SpriteId::GroundStrip,
        IVec2::new(state.ground_scroll, y),
    ));
    commands.push(DrawCommand::new(
        SpriteId::GroundStrip,
        IVec2::new(state.ground_scroll + SCREEN_WIDTH, y),
    ));
}

fn player_sprite(state: &GameState) -> SpriteId {
    if state.player.airborne() {
        SpriteId::PlayerJump
    } else if state.player.frame_index() == 0 {
        SpriteId::PlayerWalk1
    } else {
        SpriteId::PlayerWalk2
    }
}

fn obstacle_sprite(obstacle: &Obstacle) -> SpriteId {
    match (obstacle.kind, obstacle.frame_index()) {
        (ObstacleKind::Flying, 0) => SpriteId::FlyingFrame1,
        (ObstacleKind::Flying, _) => SpriteId::FlyingFrame2,
        (ObstacleKind::Ground, 0) => SpriteId::GroundFrame1,
        (ObstacleKind::Ground, _) => SpriteId::GroundFrame2,
    }
}
