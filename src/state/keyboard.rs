//! Keyboard Module - Toggle locks and latched key press
//!
//! Tracks the three toggle-lock states (Num/Caps/Scroll Lock) and
//! latches the single most recent key-down for the update loop to
//! drain. Does NOT own stdin (that is the input module).
//!
//! # API
//!
//! - `handle_key_down(event)` - Feed a raw key-down
//! - `take_key_press()` - Drain the latched press (latest wins)
//! - `num_lock` / `caps_lock` / `scroll_lock` - Current toggle state
//!
//! # Example
//!
//! ```ignore
//! use glyphgrid_input::{KeyDown, Keyboard};
//! use crossterm::event::KeyCode;
//!
//! let mut keyboard = Keyboard::new();
//! keyboard.handle_key_down(KeyDown::new(KeyCode::Enter));
//!
//! if let Some(press) = keyboard.take_key_press() {
//!     assert_eq!(press.key, KeyCode::Enter);
//! }
//! // Consumed: the same press is never reported twice.
//! assert!(keyboard.take_key_press().is_none());
//! ```

use bitflags::bitflags;
use crossterm::event::KeyCode;

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

bitflags! {
    /// Toggle-lock states stamped onto every key press.
    ///
    /// A lock bit flips on every physical press of its key: the event
    /// source reports lock-key presses, not hardware LED state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Locks: u8 {
        const NUM = 1 << 0;
        const CAPS = 1 << 1;
        const SCROLL = 1 << 2;
    }
}

/// Raw key-down event from the windowing collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDown {
    /// The key that went down.
    pub code: KeyCode,
    /// Modifier keys held at the moment of the event.
    pub modifiers: Modifiers,
    /// True for an auto-repeat of a held key.
    pub repeat: bool,
}

impl KeyDown {
    /// Create a simple key-down event
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    /// Create a key-down with modifiers
    pub fn with_modifiers(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            repeat: false,
        }
    }
}

/// Description of the most recent key press, drained once by the caller.
///
/// Value equality across all fields: an unconsumed latch is only
/// replaced when the incoming press actually differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub key: KeyCode,
    /// Modifier keys held at the moment of the event.
    pub modifiers: Modifiers,
    /// True for an auto-repeat of a held key.
    pub repeat: bool,
    /// Toggle-lock states at the moment of the event.
    pub locks: Locks,
}

// =============================================================================
// KEYBOARD ADAPTER
// =============================================================================

/// Keyboard adapter: toggle-lock tracking plus a single-slot latch
/// holding the most recent unconsumed key press.
///
/// Only the latest key-down between two polls is retained; intermediate
/// presses are silently dropped.
#[derive(Debug, Default)]
pub struct Keyboard {
    key_press: Option<KeyPress>,
    locks: Locks,
}

impl Keyboard {
    /// Create a keyboard adapter with an empty latch and all locks clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw key-down from the event source.
    ///
    /// Lock keys flip their toggle bit before the press is latched, so
    /// the press carries the post-toggle state.
    pub fn handle_key_down(&mut self, event: KeyDown) {
        match event.code {
            KeyCode::NumLock => self.locks.toggle(Locks::NUM),
            KeyCode::CapsLock => self.locks.toggle(Locks::CAPS),
            KeyCode::ScrollLock => self.locks.toggle(Locks::SCROLL),
            _ => {}
        }

        let press = KeyPress {
            key: event.code,
            modifiers: event.modifiers,
            repeat: event.repeat,
            locks: self.locks,
        };

        // Replacing an identical unconsumed press would be a no-op.
        if self.key_press != Some(press) {
            self.key_press = Some(press);
        }
    }

    /// Drain the latched key press, or `None` if nothing was pressed
    /// since the last poll. The same press is never reported twice.
    pub fn take_key_press(&mut self) -> Option<KeyPress> {
        self.key_press.take()
    }

    /// Current toggle-lock states.
    pub fn locks(&self) -> Locks {
        self.locks
    }

    /// Whether Num Lock is on.
    pub fn num_lock(&self) -> bool {
        self.locks.contains(Locks::NUM)
    }

    /// Whether Caps Lock is on.
    pub fn caps_lock(&self) -> bool {
        self.locks.contains(Locks::CAPS)
    }

    /// Whether Scroll Lock is on.
    pub fn scroll_lock(&self) -> bool {
        self.locks.contains(Locks::SCROLL)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let mut keyboard = Keyboard::new();
        assert!(keyboard.take_key_press().is_none());
        assert!(keyboard.locks().is_empty());
    }

    #[test]
    fn test_take_consumes_latch() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key_down(KeyDown::new(KeyCode::Enter));

        let press = keyboard.take_key_press().unwrap();
        assert_eq!(press.key, KeyCode::Enter);
        assert!(!press.repeat);

        // Second poll without an intervening key-down: nothing.
        assert!(keyboard.take_key_press().is_none());
    }

    #[test]
    fn test_latest_press_wins() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key_down(KeyDown::new(KeyCode::Char('a')));
        keyboard.handle_key_down(KeyDown::new(KeyCode::Char('b')));
        keyboard.handle_key_down(KeyDown::new(KeyCode::Char('c')));

        // Intermediate presses are dropped; only the latest is reported.
        let press = keyboard.take_key_press().unwrap();
        assert_eq!(press.key, KeyCode::Char('c'));
        assert!(keyboard.take_key_press().is_none());
    }

    #[test]
    fn test_identical_press_leaves_latch() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key_down(KeyDown::new(KeyCode::Char('a')));
        keyboard.handle_key_down(KeyDown::new(KeyCode::Char('a')));

        // Observable behavior is unchanged: one latched press.
        assert!(keyboard.take_key_press().is_some());
        assert!(keyboard.take_key_press().is_none());
    }

    #[test]
    fn test_modifiers_and_repeat_carried() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key_down(KeyDown {
            code: KeyCode::Char('x'),
            modifiers: Modifiers { ctrl: true, alt: false, shift: true },
            repeat: true,
        });

        let press = keyboard.take_key_press().unwrap();
        assert!(press.modifiers.ctrl);
        assert!(press.modifiers.shift);
        assert!(!press.modifiers.alt);
        assert!(press.repeat);
    }

    #[test]
    fn test_lock_toggle_parity() {
        let mut keyboard = Keyboard::new();

        // Odd number of presses flips the toggle.
        keyboard.handle_key_down(KeyDown::new(KeyCode::CapsLock));
        assert!(keyboard.caps_lock());

        // Even number of presses restores it.
        keyboard.handle_key_down(KeyDown::new(KeyCode::CapsLock));
        assert!(!keyboard.caps_lock());

        for _ in 0..3 {
            keyboard.handle_key_down(KeyDown::new(KeyCode::NumLock));
        }
        assert!(keyboard.num_lock());

        keyboard.handle_key_down(KeyDown::new(KeyCode::ScrollLock));
        keyboard.handle_key_down(KeyDown::new(KeyCode::ScrollLock));
        assert!(!keyboard.scroll_lock());
    }

    #[test]
    fn test_press_stamped_with_post_toggle_locks() {
        let mut keyboard = Keyboard::new();

        keyboard.handle_key_down(KeyDown::new(KeyCode::NumLock));
        let press = keyboard.take_key_press().unwrap();
        assert_eq!(press.key, KeyCode::NumLock);
        assert_eq!(press.locks, Locks::NUM);

        // Later presses carry the accumulated state.
        keyboard.handle_key_down(KeyDown::new(KeyCode::CapsLock));
        keyboard.handle_key_down(KeyDown::new(KeyCode::Char('a')));
        let press = keyboard.take_key_press().unwrap();
        assert_eq!(press.locks, Locks::NUM | Locks::CAPS);
    }

    #[test]
    fn test_same_key_different_locks_replaces_latch() {
        let mut keyboard = Keyboard::new();

        // Two NumLock presses in a row build different KeyPress values
        // (the lock state differs), so the latch is replaced.
        keyboard.handle_key_down(KeyDown::new(KeyCode::NumLock));
        keyboard.handle_key_down(KeyDown::new(KeyCode::NumLock));

        let press = keyboard.take_key_press().unwrap();
        assert!(press.locks.is_empty());
        assert!(!keyboard.num_lock());
    }
}
