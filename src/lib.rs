//! # glyphgrid-input
//!
//! Polled keyboard and mouse input state for character-grid console
//! emulators.
//!
//! A console emulator draws a grid of glyph cells somewhere inside a
//! larger surface. Its update loop does not want a stream of raw
//! toolkit events; it wants to ask, once per tick, "what was pressed
//! since I last looked, and which cell is the pointer over?" This crate
//! sits between the two: crossterm events are pumped into a pair of
//! adapters that maintain a handful of latched flags, and the
//! application drains them with take-style polls.
//!
//! ## Architecture
//!
//! ```text
//! crossterm events → WindowEvent → Input::route_event
//!                                    ├── Keyboard (lock toggles, latched KeyPress)
//!                                    └── Mouse (cell coords, held/click flags)
//! ```
//!
//! Everything is single-threaded by design: events are pumped on the
//! caller's update thread before each tick, so the adapters carry no
//! locks. See [`state::Input`] for the precondition.
//!
//! ## Modules
//!
//! - [`state`] - Keyboard and mouse adapters plus the crossterm bridge
//! - [`error`] - Calibration validation errors
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use glyphgrid_input::Input;
//!
//! let mut input = Input::new();
//! input.mouse.calibrate(8, 8, 0, 0, 1.0)?;
//!
//! loop {
//!     input.pump(Duration::from_millis(16))?;
//!
//!     if let Some(press) = input.keyboard.take_key_press() {
//!         // handle the most recent key-down
//!     }
//!     if input.mouse.take_left_click() {
//!         let (x, y) = (input.mouse.cell_x(), input.mouse.cell_y());
//!         // handle a click on cell (x, y)
//!     }
//! }
//! ```

pub mod error;
pub mod state;

pub use error::InputError;

pub use state::{
    // Keyboard
    KeyDown, KeyPress, Keyboard, Locks, Modifiers,
    // Mouse
    Button, Calibration, Mouse,
    // Bridge
    convert_key_event, convert_mouse_event, disable_mouse, enable_mouse,
    poll_event, read_event, Input, WindowEvent,
};
