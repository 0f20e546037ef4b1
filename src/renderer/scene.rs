//! Scene composition
//!
//! Reads the game state and issues draw calls back to front. Nothing here
//! mutates simulation state.

use glam::Vec2;

use super::vertex::colors;
use super::{Canvas, TextureId};
use crate::consts::{LAYER_SCALE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::{GamePhase, GameState, ScrollLayer};

const SCORE_POS: (i32, i32) = (10, 10);
const SCORE_SIZE: i32 = 20;
const GAME_OVER_TEXT: &str = "Game Over!";
const GAME_OVER_SIZE: i32 = 50;
const RETRY_TEXT: &str = "Press [SPACE] to retry";
const RETRY_SIZE: i32 = 20;

/// Textures the scene draws from
#[derive(Debug, Clone, Copy)]
pub struct SceneTextures {
    pub nebula: TextureId,
    pub scarfy: TextureId,
    pub background: TextureId,
    pub midground: TextureId,
    pub foreground: TextureId,
}

/// Draw one complete frame of the game
pub fn draw_scene<C: Canvas>(canvas: &mut C, textures: &SceneTextures, state: &GameState) {
    canvas.clear(colors::BACKGROUND);

    let parallax = &state.parallax;
    draw_layer(canvas, textures.background, &parallax.background);
    draw_layer(canvas, textures.midground, &parallax.midground);
    draw_layer(canvas, textures.foreground, &parallax.foreground);

    for nebula in &state.nebulae {
        canvas.draw_texture_region(textures.nebula, nebula.rect, nebula.pos, colors::SPRITE_TINT);
    }

    let scarfy = &state.player.sprite;
    canvas.draw_texture_region(textures.scarfy, scarfy.rect, scarfy.pos, colors::SPRITE_TINT);

    canvas.draw_text(
        &format!("Score: {}", state.display_score()),
        SCORE_POS.0,
        SCORE_POS.1,
        SCORE_SIZE,
        colors::SCORE_TEXT,
    );

    if state.phase == GamePhase::GameOver {
        let mid_y = (WINDOW_HEIGHT / 2) as i32;
        draw_centered(canvas, GAME_OVER_TEXT, mid_y - GAME_OVER_SIZE, GAME_OVER_SIZE);
        draw_centered(canvas, RETRY_TEXT, mid_y, RETRY_SIZE);
    }
}

/// Both copies of a scrolling layer
fn draw_layer<C: Canvas>(canvas: &mut C, texture: TextureId, layer: &ScrollLayer) {
    for x in layer.draw_positions() {
        canvas.draw_texture_scaled(texture, Vec2::new(x, 0.0), LAYER_SCALE, colors::SPRITE_TINT);
    }
}

fn draw_centered<C: Canvas>(canvas: &mut C, text: &str, y: i32, size: i32) {
    let x = (WINDOW_WIDTH as i32 - canvas.measure_text(text, size)) / 2;
    canvas.draw_text(text, x, y, size, colors::GAME_OVER_TEXT);
}
