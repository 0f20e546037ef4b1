//! Per-frame simulation step
//!
//! Advances the session by one wall-clock frame. There is no fixed-step
//! accumulator: behaviour follows the frame rate the platform delivers.

use super::collision::first_hit;
use super::obstacles;
use super::physics;
use super::state::{GamePhase, GameState};
use crate::consts::{SCARFY_MAX_FRAME, WINDOW_WIDTH};

/// Edge-triggered inputs for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key went down this frame
    pub jump: bool,
    /// Restart key went down this frame
    pub restart: bool,
}

impl TickInput {
    /// The single action key both jumps and restarts
    pub fn action(pressed: bool) -> Self {
        Self {
            jump: pressed,
            restart: pressed,
        }
    }
}

/// Observable outcome of a frame, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player hit nebula `nebula`; the run ended with `score`
    Collided { nebula: usize, score: f32 },
    /// A new run started from Game Over
    Restarted,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Option<GameEvent> {
    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                state.restart();
                log::info!("Run restarted");
                return Some(GameEvent::Restarted);
            }
            None
        }
        GamePhase::Running => step_running(state, input, dt),
    }
}

fn step_running(state: &mut GameState, input: &TickInput, dt: f32) -> Option<GameEvent> {
    let floor_y = state.floor_y;

    state.score += dt;

    physics::apply_gravity(&mut state.player, input.jump, dt, floor_y);
    obstacles::drift(&mut state.nebulae, dt, WINDOW_WIDTH as f32);
    physics::integrate(&mut state.player, dt, floor_y);

    // Running animation freezes mid-air
    if state.player.is_grounded(floor_y) {
        state.player.sprite.animate(dt, SCARFY_MAX_FRAME);
    }
    obstacles::animate(&mut state.nebulae, dt);

    let event = first_hit(&state.player, &state.nebulae).map(|nebula| {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Hit nebula {} - game over with score {}",
            nebula,
            state.display_score()
        );
        GameEvent::Collided {
            nebula,
            score: state.score,
        }
    });

    state.parallax.advance(dt);

    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::JUMP_VELOCITY;
    use crate::sim::state::SheetMetrics;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::new(SheetMetrics::default())
    }

    fn run_frames(state: &mut GameState, frames: usize) {
        for _ in 0..frames {
            tick(state, &TickInput::default(), DT);
        }
    }

    #[test]
    fn test_one_second_idle() {
        let mut state = new_state();
        let start_y = state.player.sprite.pos.y;

        let mut frame_changes = 0;
        for _ in 0..60 {
            let frame = state.player.sprite.frame;
            tick(&mut state, &TickInput::default(), DT);
            if state.player.sprite.frame != frame {
                frame_changes += 1;
            }
        }

        assert!((state.score - 1.0).abs() < 1e-3);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.sprite.pos.y, start_y);
        assert_eq!(state.player.velocity, 0.0);
        // Grounded player keeps running at ~12 frames per second
        assert!((9..=12).contains(&frame_changes));
    }

    #[test]
    fn test_jump_and_land() {
        let mut state = new_state();
        let floor_y = state.floor_y;

        tick(&mut state, &TickInput::action(true), DT);
        assert!(state.player.velocity < 0.0);
        assert!(!state.player.is_grounded(floor_y));

        // Keep nebulae out of the way for the whole arc
        let mut frames = 0;
        while !state.player.is_grounded(floor_y) {
            for nebula in state.nebulae.iter_mut() {
                nebula.pos.x = 2000.0;
            }
            tick(&mut state, &TickInput::default(), DT);
            frames += 1;
            assert!(frames < 600, "player never landed");
        }

        let p = &state.player;
        assert_eq!(p.sprite.pos.y + p.sprite.rect.height, floor_y);
        assert_eq!(p.velocity, 0.0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_airborne_animation_freezes() {
        let mut state = new_state();
        tick(&mut state, &TickInput::action(true), DT);
        let frame = state.player.sprite.frame;
        let elapsed = state.player.sprite.frame_elapsed;
        run_frames(&mut state, 10);
        assert_eq!(state.player.sprite.frame, frame);
        assert_eq!(state.player.sprite.frame_elapsed, elapsed);
    }

    #[test]
    fn test_double_jump_ignored() {
        let mut state = new_state();
        tick(&mut state, &TickInput::action(true), DT);
        let v = state.player.velocity;
        tick(&mut state, &TickInput::action(true), DT);
        assert!(state.player.velocity > v);
        assert!(state.player.velocity > JUMP_VELOCITY);
    }

    #[test]
    fn test_collision_freezes_until_restart() {
        let mut state = new_state();
        state.nebulae[0].pos.x = state.player.sprite.pos.x;

        let event = tick(&mut state, &TickInput::default(), DT);
        assert!(matches!(event, Some(GameEvent::Collided { nebula: 0, .. })));
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = state.clone();
        for _ in 0..30 {
            // Jump input alone must not restart or move anything
            let input = TickInput {
                jump: true,
                restart: false,
            };
            assert_eq!(tick(&mut state, &input, DT), None);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, frozen.score);
        assert_eq!(state.nebulae, frozen.nebulae);
        assert_eq!(state.player, frozen.player);
        assert_eq!(state.parallax, frozen.parallax);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = new_state();
        run_frames(&mut state, 30);
        state.nebulae[1].pos.x = state.player.sprite.pos.x;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        let scroll = state.parallax;

        let event = tick(&mut state, &TickInput::action(true), DT);
        assert_eq!(event, Some(GameEvent::Restarted));

        let fresh = new_state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.player, fresh.player);
        assert_eq!(state.nebulae, fresh.nebulae);
        assert_eq!(state.parallax, scroll);
    }

    #[test]
    fn test_nebula_reaches_idle_player() {
        let mut state = new_state();
        let mut frames = 0;
        while state.phase == GamePhase::Running {
            tick(&mut state, &TickInput::default(), DT);
            frames += 1;
            assert!(frames < 600);
        }
        // First nebula needs ~1.2s to close the 242px gap at 200px/s
        assert!(state.score > 1.0 && state.score < 1.3);
    }

    #[test]
    fn test_scroll_advances_while_running() {
        let mut state = new_state();
        run_frames(&mut state, 30);
        assert!(state.parallax.background.offset < 0.0);
        assert!(state.parallax.foreground.offset < state.parallax.background.offset);
    }

    #[test]
    fn test_zero_dt_is_stationary() {
        let mut state = new_state();
        let before = state.clone();
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.player, before.player);
        assert_eq!(state.score, 0.0);
        for (a, b) in state.nebulae.iter().zip(before.nebulae.iter()) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
