//! Keyboard input to paddle velocity intent
//!
//! Last key wins: there is no held-key tracking, so releasing one direction
//! stops the paddle even while the other direction is still held.

use serde::{Deserialize, Serialize};

use super::state::Paddle;

/// Logical key after alias normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Other,
}

impl Key {
    /// Normalize a host key name. Older browsers report "Left"/"Right"
    /// instead of "ArrowLeft"/"ArrowRight".
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            _ => Key::Other,
        }
    }

    pub fn is_direction(self) -> bool {
        self != Key::Other
    }
}

/// A discrete key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

impl KeyEvent {
    pub fn down(name: &str) -> Self {
        KeyEvent::Down(Key::from_name(name))
    }

    pub fn up(name: &str) -> Self {
        KeyEvent::Up(Key::from_name(name))
    }
}

/// Apply one key event to the paddle's velocity intent.
///
/// With `strict_release` off, every key-up zeroes the intent, whatever the key.
pub fn apply_key_event(paddle: &mut Paddle, event: KeyEvent, strict_release: bool) {
    match event {
        KeyEvent::Down(Key::Right) => paddle.dx = paddle.speed,
        KeyEvent::Down(Key::Left) => paddle.dx = -paddle.speed,
        KeyEvent::Down(Key::Other) => {}
        KeyEvent::Up(key) => {
            if !strict_release || key.is_direction() {
                paddle.dx = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn paddle() -> Paddle {
        Paddle::new(&GameConfig::default())
    }

    #[test]
    fn test_aliases_normalize() {
        assert_eq!(Key::from_name("ArrowLeft"), Key::Left);
        assert_eq!(Key::from_name("Left"), Key::Left);
        assert_eq!(Key::from_name("ArrowRight"), Key::Right);
        assert_eq!(Key::from_name("Right"), Key::Right);
        assert_eq!(Key::from_name("a"), Key::Other);
        assert_eq!(Key::from_name("arrowleft"), Key::Other);
    }

    #[test]
    fn test_key_down_sets_intent() {
        let mut p = paddle();
        apply_key_event(&mut p, KeyEvent::down("ArrowLeft"), false);
        assert_eq!(p.dx, -8.0);
        apply_key_event(&mut p, KeyEvent::down("Right"), false);
        assert_eq!(p.dx, 8.0);
        // Unknown keys leave the intent alone
        apply_key_event(&mut p, KeyEvent::down(" "), false);
        assert_eq!(p.dx, 8.0);
    }

    #[test]
    fn test_release_other_direction_stops_paddle() {
        let mut p = paddle();
        apply_key_event(&mut p, KeyEvent::Down(Key::Left), false);
        apply_key_event(&mut p, KeyEvent::Up(Key::Right), false);
        assert_eq!(p.dx, 0.0);

        // Same with strict release: it only filters non-direction keys
        apply_key_event(&mut p, KeyEvent::Down(Key::Left), true);
        apply_key_event(&mut p, KeyEvent::Up(Key::Right), true);
        assert_eq!(p.dx, 0.0);
    }

    #[test]
    fn test_any_release_stops_paddle_by_default() {
        let mut p = paddle();
        apply_key_event(&mut p, KeyEvent::Down(Key::Right), false);
        apply_key_event(&mut p, KeyEvent::up("Shift"), false);
        assert_eq!(p.dx, 0.0);
    }

    #[test]
    fn test_strict_release_ignores_other_keys() {
        let mut p = paddle();
        apply_key_event(&mut p, KeyEvent::Down(Key::Right), true);
        apply_key_event(&mut p, KeyEvent::up("Shift"), true);
        assert_eq!(p.dx, 8.0);
        apply_key_event(&mut p, KeyEvent::up("ArrowRight"), true);
        assert_eq!(p.dx, 0.0);
    }
}
