//! Player/obstacle collision testing
//!
//! A single overlap between the player hitbox and any live obstacle hitbox
//! ends the run; there is no health model and no tie-break, so the first
//! hit found is enough.

use super::state::{Obstacle, Player};

/// True if the player overlaps any live obstacle
pub fn player_hit(player: &Player, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| player.rect.overlaps(&o.rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::ObstacleKind;

    #[test]
    fn no_obstacles_no_hit() {
        let player = Player::default();
        assert!(!player_hit(&player, &[]));
    }

    #[test]
    fn distant_obstacle_misses() {
        let player = Player::default();
        let far = Obstacle::new(ObstacleKind::Ground, 1400);
        assert!(!player_hit(&player, &[far]));
    }

    #[test]
    fn overlapping_ground_obstacle_hits() {
        let player = Player::default();
        let on_top = Obstacle::new(ObstacleKind::Ground, PLAYER_START_X);
        assert!(player_hit(&player, &[on_top]));
    }

    #[test]
    fn flying_obstacle_clears_standing_player() {
        // Flying bottom sits at y=500; the standing player's head is at
        // 620 - 84 = 536, leaving a gap underneath.
        let player = Player::default();
        let overhead = Obstacle::new(ObstacleKind::Flying, PLAYER_START_X);
        assert!(overhead.rect.bottom() < player.rect.top());
        assert!(!player_hit(&player, &[overhead]));
    }

    #[test]
    fn jumping_player_reaches_flying_obstacle() {
        let mut player = Player::default();
        player.try_jump();
        // Integrate a few frames of the jump arc
        for _ in 0..8 {
            player.apply_gravity();
        }
        let overhead = Obstacle::new(ObstacleKind::Flying, PLAYER_START_X);
        assert!(player_hit(&player, &[overhead]));
    }

    #[test]
    fn inset_hitbox_forgives_grazing_contact() {
        let player = Player::default();
        // Player frame spans x 46..114. An obstacle at x=145 overlaps it
        // visually (frame left edge 109) but the 20 px narrower hitbox
        // starts at 119, so the graze does not register.
        let grazing = Obstacle::new(ObstacleKind::Ground, 145);
        assert!(player.rect.overlaps(&grazing.visual_rect()));
        assert!(!player_hit(&player, &[grazing]));
    }

    #[test]
    fn any_of_many_obstacles_triggers() {
        let player = Player::default();
        let obstacles = vec![
            Obstacle::new(ObstacleKind::Ground, 900),
            Obstacle::new(ObstacleKind::Flying, 600),
            Obstacle::new(ObstacleKind::Ground, PLAYER_START_X),
        ];
        assert!(player_hit(&player, &obstacles));
    }
}
