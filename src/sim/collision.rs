//! Collision detection between the player and nebulae
//!
//! Sprite frames have transparent margins, so both sides are tested with a box
//! inset from the frame: [`NEBULA_PADDING`] for nebulae, [`SCARFY_PADDING`] for
//! the player.

use super::anim::Sprite;
use super::rect::Rect;
use super::state::Player;
use crate::consts::{NEBULA_PADDING, SCARFY_PADDING};

/// Collision box of a nebula at its current position
#[inline]
pub fn nebula_hitbox(nebula: &Sprite) -> Rect {
    nebula.bounds().inset(NEBULA_PADDING)
}

/// Collision box of the player at its current position
#[inline]
pub fn player_hitbox(player: &Player) -> Rect {
    player.sprite.bounds().inset(SCARFY_PADDING)
}

/// Index of the first nebula whose box overlaps the player's, if any
pub fn first_hit(player: &Player, nebulae: &[Sprite]) -> Option<usize> {
    let player_box = player_hitbox(player);
    nebulae
        .iter()
        .position(|nebula| nebula_hitbox(nebula).overlaps(&player_box))
}
