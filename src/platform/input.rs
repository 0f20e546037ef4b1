//! Keyboard state
//!
//! Key events arrive between frames; the game polls once per frame. A press is
//! an edge: it is visible for exactly one frame no matter how long the key is
//! held, and OS key repeat never produces a second one.

use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Jump while running, restart after Game Over
    Space,
    /// Close the window
    Escape,
}

impl Key {
    const COUNT: usize = 2;

    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Space => Some(Key::Space),
            KeyCode::Escape => Some(Key::Escape),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Default, Clone)]
pub struct Keyboard {
    down: [bool; Key::COUNT],
    pressed: [bool; Key::COUNT],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        let i = key.index();
        if !self.down[i] {
            self.pressed[i] = true;
        }
        self.down[i] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.down[key.index()] = false;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    /// Key went down since the last [`Keyboard::end_frame`]
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Clear press edges once the frame has consumed them
    pub fn end_frame(&mut self) {
        self.pressed = [false; Key::COUNT];
    }

    /// Focus lost: key-up events will not arrive
    pub fn release_all(&mut self) {
        self.down = [false; Key::COUNT];
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput::action(self.is_pressed(Key::Space))
    }
}
