//! Input Module - Event conversion, polling and routing
//!
//! Bridges crossterm's event system with the keyboard and mouse
//! adapters. Converts raw crossterm events into [`WindowEvent`]s,
//! polls the event queue, and routes events into an [`Input`] that
//! owns both adapters.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to a KeyDown
//! - `convert_mouse_event` - Convert crossterm MouseEvent to a WindowEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `Input` - Owns the adapters; `route_event` dispatches, `pump` drains
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use glyphgrid_input::Input;
//!
//! let mut input = Input::new();
//! loop {
//!     input.pump(Duration::from_millis(16))?;
//!     // ... read input.keyboard / input.mouse, then update and render
//! }
//! ```

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
};
use crossterm::execute;
use log::trace;
use std::io::stdout;
use std::time::Duration;

use super::keyboard::{KeyDown, Keyboard, Modifiers};
use super::mouse::{Button, Mouse};

// =============================================================================
// WINDOW EVENT ENUM
// =============================================================================

/// Unified event type fed to the adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    /// Key-down (including auto-repeat).
    KeyDown(KeyDown),
    /// Pointer moved, in the event source's raw coordinates.
    PointerMoved { x: i32, y: i32 },
    /// Tracked button pressed.
    ButtonDown(Button),
    /// Tracked button released.
    ButtonUp(Button),
    /// No event, or an event outside the tracked subset.
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm key event into a raw key-down.
///
/// Press and repeat kinds become key-downs; release events are dropped,
/// only key-downs reach the keyboard adapter.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<KeyDown> {
    let repeat = match event.kind {
        KeyEventKind::Press => false,
        KeyEventKind::Repeat => true,
        KeyEventKind::Release => return None,
    };

    Some(KeyDown {
        code: event.code,
        modifiers: convert_modifiers(event.modifiers),
        repeat,
    })
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm mouse event into a window event.
///
/// Terminal column/row are the raw coordinate space here; the grid may
/// still sit at an origin offset with multi-cell glyphs, which is what
/// mouse calibration accounts for. Middle-button and scroll events fall
/// outside the tracked subset and convert to [`WindowEvent::None`].
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> WindowEvent {
    match event.kind {
        // Drags are moves with a button held; the adapter treats both
        // the same way.
        MouseEventKind::Moved | MouseEventKind::Drag(_) => WindowEvent::PointerMoved {
            x: event.column as i32,
            y: event.row as i32,
        },
        MouseEventKind::Down(btn) => match convert_mouse_button(btn) {
            Some(button) => WindowEvent::ButtonDown(button),
            None => WindowEvent::None,
        },
        MouseEventKind::Up(btn) => match convert_mouse_button(btn) {
            Some(button) => WindowEvent::ButtonUp(button),
            None => WindowEvent::None,
        },
        _ => WindowEvent::None,
    }
}

/// Convert crossterm MouseButton to a tracked Button
fn convert_mouse_button(btn: CrosstermMouseButton) -> Option<Button> {
    match btn {
        CrosstermMouseButton::Left => Some(Button::Left),
        CrosstermMouseButton::Right => Some(Button::Right),
        CrosstermMouseButton::Middle => None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<WindowEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<WindowEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(convert_key_event(key)
            .map(WindowEvent::KeyDown)
            .unwrap_or(WindowEvent::None)),
        CrosstermEvent::Mouse(mouse) => Ok(convert_mouse_event(mouse)),
        _ => Ok(WindowEvent::None),
    }
}

// =============================================================================
// ROUTING
// =============================================================================

/// Owns both adapters and routes window events into them.
///
/// Single consumer thread by precondition: events are pumped on the
/// caller's update thread before each tick, so the adapters carry no
/// interior synchronization. An embedding that reads events on a
/// separate thread must wrap `Input` in its own lock.
#[derive(Debug, Default)]
pub struct Input {
    pub keyboard: Keyboard,
    pub mouse: Mouse,
}

impl Input {
    /// Create an input router with fresh adapters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an event to the adapter that tracks it.
    pub fn route_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::KeyDown(key) => {
                trace!("key down: {:?}", key.code);
                self.keyboard.handle_key_down(key);
            }
            WindowEvent::PointerMoved { x, y } => self.mouse.handle_move(x, y),
            WindowEvent::ButtonDown(button) => {
                trace!("button down: {:?}", button);
                self.mouse.handle_button_down(button);
            }
            WindowEvent::ButtonUp(button) => {
                trace!("button up: {:?}", button);
                self.mouse.handle_button_up(button);
            }
            WindowEvent::None => {}
        }
    }

    /// Drain every queued event before an update tick.
    ///
    /// Waits up to `timeout` for the first event, then consumes the
    /// rest of the queue without blocking. Returns whether any event
    /// was routed.
    pub fn pump(&mut self, timeout: Duration) -> std::io::Result<bool> {
        let mut routed = false;
        let mut wait = timeout;
        while let Some(event) = poll_event(wait)? {
            self.route_event(event);
            routed = true;
            wait = Duration::ZERO;
        }
        Ok(routed)
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
