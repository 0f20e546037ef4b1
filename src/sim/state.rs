//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one [`GameState`] value; there is
//! no process-wide state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::Sprite;
use super::parallax::Parallax;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing, score accruing
    #[default]
    Running,
    /// Player hit a nebula; everything frozen until restart
    GameOver,
}

/// Pixel dimensions of the textures the initial layout is derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetMetrics {
    /// Full nebula sprite sheet (8x8 frames)
    pub nebula_sheet: Vec2,
    /// Full scarfy sprite sheet (one row of 6 frames)
    pub scarfy_sheet: Vec2,
    /// Native widths of the background, midground and foreground textures
    pub layer_widths: [f32; 3],
}

impl Default for SheetMetrics {
    /// Dimensions of the stock texture set
    fn default() -> Self {
        Self {
            nebula_sheet: Vec2::new(800.0, 800.0),
            scarfy_sheet: Vec2::new(768.0, 128.0),
            layer_widths: [272.0, 272.0, 352.0],
        }
    }
}

impl SheetMetrics {
    /// Size of one nebula animation frame
    pub fn nebula_frame(&self) -> Vec2 {
        self.nebula_sheet / NEBULA_SHEET_GRID
    }

    /// Size of one scarfy animation frame
    pub fn scarfy_frame(&self) -> Vec2 {
        Vec2::new(self.scarfy_sheet.x / SCARFY_SHEET_FRAMES, self.scarfy_sheet.y)
    }
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub sprite: Sprite,
    /// Signed vertical velocity (pixels/s, positive is down)
    pub velocity: f32,
}

impl Player {
    /// Player standing on the floor, centred horizontally
    pub fn spawn(metrics: &SheetMetrics, floor_y: f32) -> Self {
        let frame = metrics.scarfy_frame();
        let pos = Vec2::new(
            (WINDOW_WIDTH / 2) as f32 - frame.x / 2.0,
            floor_y - frame.y,
        );
        Self {
            sprite: Sprite::new(
                Rect::new(0.0, 0.0, frame.x, frame.y),
                pos,
                SCARFY_FRAME_DURATION,
            ),
            velocity: 0.0,
        }
    }

    /// Feet at or below the floor line
    #[inline]
    pub fn is_grounded(&self, floor_y: f32) -> bool {
        self.sprite.pos.y >= floor_y - self.sprite.rect.height
    }
}

/// Initial nebula layout: staggered off the right edge, resting on the floor
pub fn spawn_nebulae(metrics: &SheetMetrics, floor_y: f32) -> [Sprite; NEBULA_COUNT] {
    let frame = metrics.nebula_frame();
    std::array::from_fn(|i| {
        Sprite::new(
            Rect::new(0.0, 0.0, frame.x, frame.y),
            Vec2::new(
                WINDOW_WIDTH as f32 + NEBULA_SPACING * i as f32,
                floor_y - frame.y,
            ),
            NEBULA_FRAME_DURATION,
        )
    })
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Texture dimensions the layout is derived from
    pub metrics: SheetMetrics,
    /// Floor line the player stands on
    pub floor_y: f32,
    pub player: Player,
    /// Obstacles, updated and tested in index order
    pub nebulae: [Sprite; NEBULA_COUNT],
    pub parallax: Parallax,
    /// Seconds survived in the current run
    pub score: f32,
    pub phase: GamePhase,
}

impl GameState {
    /// Start a fresh session
    pub fn new(metrics: SheetMetrics) -> Self {
        let floor_y = WINDOW_HEIGHT as f32;
        Self {
            metrics,
            floor_y,
            player: Player::spawn(&metrics, floor_y),
            nebulae: spawn_nebulae(&metrics, floor_y),
            parallax: Parallax::new(metrics.layer_widths),
            score: 0.0,
            phase: GamePhase::Running,
        }
    }

    /// Reset player, nebulae and score for a new run. Scroll offsets carry over.
    pub fn restart(&mut self) {
        self.player = Player::spawn(&self.metrics, self.floor_y);
        self.nebulae = spawn_nebulae(&self.metrics, self.floor_y);
        self.score = 0.0;
        self.phase = GamePhase::Running;
    }

    /// Score as shown on the HUD
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(SheetMetrics::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0.0);

        let p = &state.player.sprite;
        assert_eq!(p.rect, Rect::new(0.0, 0.0, 128.0, 128.0));
        assert_eq!(p.pos, Vec2::new(192.0, 252.0));
        assert!(state.player.is_grounded(state.floor_y));

        for (i, n) in state.nebulae.iter().enumerate() {
            assert_eq!(n.rect, Rect::new(0.0, 0.0, 100.0, 100.0));
            assert_eq!(n.pos, Vec2::new(512.0 + 300.0 * i as f32, 280.0));
            assert_eq!(n.frame, 0);
        }
    }

    #[test]
    fn test_restart_keeps_scroll() {
        let mut state = GameState::new(SheetMetrics::default());
        state.parallax.background.offset = -42.0;
        state.score = 12.5;
        state.phase = GamePhase::GameOver;
        state.nebulae[1].pos.x = 3.0;
        state.player.sprite.pos.y = 10.0;

        state.restart();

        let fresh = GameState::new(SheetMetrics::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.nebulae, fresh.nebulae);
        assert_eq!(state.player, fresh.player);
        assert_eq!(state.parallax.background.offset, -42.0);
    }

    #[test]
    fn test_display_score_truncates() {
        let mut state = GameState::new(SheetMetrics::default());
        state.score = 7.99;
        assert_eq!(state.display_score(), 7);
    }
}
