//! Keyboard to control-input mapping
//!
//! WASD and the arrow keys both steer. Press sets a direction, release clears
//! it; no per-key bookkeeping, so releasing either key of a pair clears the
//! direction.

use crate::sim::ControlInput;

/// Browser `keyCode` values
pub mod keys {
    pub const W: u32 = 87;
    pub const A: u32 = 65;
    pub const S: u32 = 83;
    pub const D: u32 = 68;
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_RIGHT: u32 = 39;
    pub const ARROW_DOWN: u32 = 40;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            keys::W | keys::ARROW_UP => Some(Direction::Up),
            keys::S | keys::ARROW_DOWN => Some(Direction::Down),
            keys::A | keys::ARROW_LEFT => Some(Direction::Left),
            keys::D | keys::ARROW_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Current directional key state
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    flags: ControlInput,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the direction the key maps to, if any
    pub fn key_pressed(&mut self, code: u32) -> Option<Direction> {
        let dir = Direction::from_key_code(code)?;
        self.set(dir, true);
        Some(dir)
    }

    pub fn key_released(&mut self, code: u32) -> Option<Direction> {
        let dir = Direction::from_key_code(code)?;
        self.set(dir, false);
        Some(dir)
    }

    pub fn set(&mut self, dir: Direction, pressed: bool) {
        let flag = match dir {
            Direction::Up => &mut self.flags.up,
            Direction::Down => &mut self.flags.down,
            Direction::Left => &mut self.flags.left,
            Direction::Right => &mut self.flags.right,
        };
        *flag = pressed;
    }

    /// Input to stage for the next tick
    pub fn snapshot(&self) -> ControlInput {
        self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_layouts_map() {
        assert_eq!(Direction::from_key_code(keys::W), Some(Direction::Up));
        assert_eq!(Direction::from_key_code(keys::ARROW_UP), Some(Direction::Up));
        assert_eq!(Direction::from_key_code(keys::D), Some(Direction::Right));
        assert_eq!(Direction::from_key_code(keys::ARROW_LEFT), Some(Direction::Left));
        assert_eq!(Direction::from_key_code(32), None);
    }

    #[test]
    fn test_press_release() {
        let mut kb = KeyboardState::new();
        kb.key_pressed(keys::ARROW_DOWN);
        kb.key_pressed(keys::A);
        let input = kb.snapshot();
        assert!(input.down && input.left && !input.up && !input.right);

        kb.key_released(keys::S);
        assert!(!kb.snapshot().down);
        assert!(kb.snapshot().left);
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let mut kb = KeyboardState::new();
        assert_eq!(kb.key_pressed(13), None);
        assert!(kb.snapshot().is_idle());
    }
}
