//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - State is owned by one [`GameState`] value, mutated once per frame
//! - Stable iteration order (nebulae by index)
//! - No rendering or platform dependencies

pub mod anim;
pub mod collision;
pub mod obstacles;
pub mod parallax;
pub mod physics;
pub mod rect;
pub mod state;
pub mod tick;

pub use anim::{Sprite, advance_animation};
pub use collision::{first_hit, nebula_hitbox, player_hitbox};
pub use parallax::{Parallax, ScrollLayer};
pub use rect::Rect;
pub use state::{GamePhase, GameState, Player, SheetMetrics};
pub use tick::{GameEvent, TickInput, tick};
