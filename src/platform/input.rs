//! Input event channel
//!
//! Hosts push key transitions whenever they arrive; the frame driver drains
//! the whole queue at the start of a frame so a tick never sees half of it.

use std::collections::VecDeque;

use crate::sim::{KeyEvent, TickInput};

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<KeyEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.pending.push_back(event);
    }

    /// Queue a key-down by host key name ("ArrowLeft", "Left", ...)
    pub fn key_down(&mut self, name: &str) {
        self.push(KeyEvent::down(name));
    }

    /// Queue a key-up by host key name
    pub fn key_up(&mut self, name: &str) {
        self.push(KeyEvent::up(name));
    }

    /// Take everything queued so far, oldest first
    pub fn drain(&mut self) -> TickInput {
        TickInput {
            keys: self.pending.drain(..).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Key;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = InputQueue::new();
        queue.key_down("ArrowLeft");
        queue.key_up("Left");
        queue.key_down("x");
        assert_eq!(queue.len(), 3);

        let input = queue.drain();
        assert_eq!(
            input.keys,
            vec![
                KeyEvent::Down(Key::Left),
                KeyEvent::Up(Key::Left),
                KeyEvent::Down(Key::Other),
            ]
        );
        assert!(queue.is_empty());
        assert!(queue.drain().keys.is_empty());
    }
}
