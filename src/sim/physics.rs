//! Vertical player physics
//!
//! Velocity is updated before the obstacles move and position is integrated
//! after, matching the frame order in [`super::tick`].

use super::state::Player;
use crate::consts::{GRAVITY, JUMP_VELOCITY};

/// Apply gravity, or the jump impulse when `jump` arrives while grounded.
///
/// A grounded player has its velocity forced to zero first, so the impulse
/// always launches from rest. A jump while airborne does nothing.
pub fn apply_gravity(player: &mut Player, jump: bool, dt: f32, floor_y: f32) {
    let grounded = player.is_grounded(floor_y);
    if grounded {
        player.velocity = 0.0;
    } else {
        player.velocity += GRAVITY * dt;
    }

    if jump && grounded {
        player.velocity += JUMP_VELOCITY;
    }
}

/// Move the player by its velocity. Landing below the floor snaps back onto it.
pub fn integrate(player: &mut Player, dt: f32, floor_y: f32) {
    player.sprite.pos.y += player.velocity * dt;

    let rest_y = floor_y - player.sprite.rect.height;
    if player.sprite.pos.y > rest_y {
        player.sprite.pos.y = rest_y;
        player.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SheetMetrics;
    use proptest::prelude::*;

    const FLOOR: f32 = 380.0;
    const DT: f32 = 1.0 / 60.0;

    fn grounded_player() -> Player {
        Player::spawn(&SheetMetrics::default(), FLOOR)
    }

    #[test]
    fn test_grounded_forces_zero_velocity() {
        let mut p = grounded_player();
        p.velocity = 300.0;
        apply_gravity(&mut p, false, DT, FLOOR);
        assert_eq!(p.velocity, 0.0);
    }

    #[test]
    fn test_gravity_accelerates_when_airborne() {
        let mut p = grounded_player();
        p.sprite.pos.y -= 100.0;
        apply_gravity(&mut p, false, 0.1, FLOOR);
        assert!((p.velocity - 125.0).abs() < 1e-3);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut p = grounded_player();
        apply_gravity(&mut p, true, DT, FLOOR);
        assert_eq!(p.velocity, JUMP_VELOCITY);

        let y = p.sprite.pos.y;
        integrate(&mut p, DT, FLOOR);
        assert!(p.sprite.pos.y < y);
    }

    #[test]
    fn test_jump_ignored_in_air() {
        let mut p = grounded_player();
        p.sprite.pos.y -= 50.0;
        p.velocity = -100.0;
        apply_gravity(&mut p, true, DT, FLOOR);
        assert!(p.velocity > -100.0);
    }

    #[test]
    fn test_landing_snaps_to_floor() {
        let mut p = grounded_player();
        p.sprite.pos.y = FLOOR - 128.0 - 1.0;
        p.velocity = 600.0;
        integrate(&mut p, DT, FLOOR);
        assert_eq!(p.sprite.pos.y + p.sprite.rect.height, FLOOR);
        assert_eq!(p.velocity, 0.0);
    }

    proptest! {
        #[test]
        fn prop_never_below_floor(
            inputs in proptest::collection::vec((any::<bool>(), 0.0f32..0.1), 1..400),
        ) {
            let mut p = grounded_player();
            for (jump, dt) in inputs {
                apply_gravity(&mut p, jump, dt, FLOOR);
                integrate(&mut p, dt, FLOOR);
                prop_assert!(p.sprite.pos.y + p.sprite.rect.height <= FLOOR);
            }
        }
    }
}
