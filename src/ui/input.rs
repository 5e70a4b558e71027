//! Non-blocking key input.

use std::collections::VecDeque;

/// A key the combat screen understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `'1'..='9'`: select a hand slot (1-based).
    Digit(u8),
    /// `'e'` or `'E'`.
    EndTurn,
    /// Anything else.
    Other(char),
}

impl Key {
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        match ch {
            '1'..='9' => Self::Digit(ch as u8 - b'0'),
            'e' | 'E' => Self::EndTurn,
            other => Self::Other(other),
        }
    }

    /// Zero-based hand slot for a digit key.
    #[must_use]
    pub fn hand_slot(self) -> Option<usize> {
        match self {
            Self::Digit(n) => usize::from(n).checked_sub(1),
            _ => None,
        }
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}

/// A non-blocking key source.
pub trait InputSource {
    /// Next pending key, or `None` if nothing is waiting.
    fn poll_key(&mut self) -> Option<Key>;
}

/// Replays a fixed key sequence, one entry per poll.
///
/// `None` entries are idle frames. Once the script runs out every poll
/// returns `None`.
///
/// ```
/// use ccg_combat::ui::{InputSource, Key, ScriptedInput};
///
/// let mut input = ScriptedInput::from_keys("1 e");
/// assert_eq!(input.poll_key(), Some(Key::Digit(1)));
/// assert_eq!(input.poll_key(), None);
/// assert_eq!(input.poll_key(), Some(Key::EndTurn));
/// assert_eq!(input.poll_key(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Option<Key>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a script from characters; spaces become idle frames.
    #[must_use]
    pub fn from_keys(keys: &str) -> Self {
        let queue = keys
            .chars()
            .map(|ch| (ch != ' ').then(|| Key::from_char(ch)))
            .collect();
        Self { queue }
    }

    pub fn push(&mut self, key: Key) {
        self.queue.push_back(Some(key));
    }

    pub fn push_idle(&mut self, frames: usize) {
        self.queue.extend(std::iter::repeat(None).take(frames));
    }

    /// Entries left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Option<Key> {
        self.queue.pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        assert_eq!(Key::from('3'), Key::Digit(3));
        assert_eq!(Key::from('E'), Key::EndTurn);
        assert_eq!(Key::from('e'), Key::EndTurn);
        assert_eq!(Key::from('0'), Key::Other('0'));
        assert_eq!(Key::from('q'), Key::Other('q'));
    }

    #[test]
    fn test_hand_slot() {
        assert_eq!(Key::Digit(1).hand_slot(), Some(0));
        assert_eq!(Key::Digit(5).hand_slot(), Some(4));
        assert_eq!(Key::EndTurn.hand_slot(), None);
    }

    #[test]
    fn test_script_push() {
        let mut input = ScriptedInput::new();
        input.push(Key::EndTurn);
        input.push_idle(2);
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.poll_key(), Some(Key::EndTurn));
        assert_eq!(input.poll_key(), None);
        assert_eq!(input.remaining(), 1);
    }
}
