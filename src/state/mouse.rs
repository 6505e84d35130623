//! Mouse Module - Cell coordinates and button state
//!
//! Converts pointer positions from the event source's raw coordinate
//! space into character-cell coordinates using a calibrated cell size,
//! origin offset and scale, and tracks held/clicked state for the left
//! and right buttons. Does NOT own stdin (that is the input module).
//!
//! # API
//!
//! - `calibrate(...)` - Supply grid geometry for raw-to-cell conversion
//! - `handle_move` / `handle_button_down` / `handle_button_up` - Feed raw events
//! - `cell_x` / `cell_y` - Pointer position in cells
//! - `left_held` / `right_held` - Continuous button state
//! - `take_left_click` / `take_right_click` - One-shot click flags
//!
//! # Example
//!
//! ```ignore
//! use glyphgrid_input::{Button, Mouse};
//!
//! let mut mouse = Mouse::new();
//! mouse.calibrate(8, 8, 0, 0, 1.0)?;
//!
//! mouse.handle_move(20, 44);
//! assert_eq!((mouse.cell_x(), mouse.cell_y()), (2, 5));
//!
//! mouse.handle_button_down(Button::Left);
//! mouse.handle_button_up(Button::Left);
//! assert!(mouse.take_left_click());  // exactly once
//! assert!(!mouse.take_left_click());
//! ```

use crate::error::InputError;

// =============================================================================
// TYPES
// =============================================================================

/// Tracked mouse buttons. Everything else is ignored upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

/// Grid geometry for raw-to-cell conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    pub cell_width: i32,
    pub cell_height: i32,
    pub origin_x: i32,
    pub origin_y: i32,
    pub scale: f32,
}

// =============================================================================
// MOUSE ADAPTER
// =============================================================================

/// Mouse adapter: pointer position in cell space plus continuous and
/// one-shot button state.
///
/// A click-pending flag is only ever true between a button-up and the
/// next poll or pointer move, whichever comes first.
#[derive(Debug, Default)]
pub struct Mouse {
    cell_x: i32,
    cell_y: i32,
    left_held: bool,
    right_held: bool,
    left_click: bool,
    right_click: bool,
    calibration: Option<Calibration>,
}

impl Mouse {
    /// Create an uncalibrated mouse adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the grid geometry used by raw-to-cell conversion.
    ///
    /// Callable at any time, not just at startup: the grid may move or
    /// rescale when the surface is resized. Affects only subsequent
    /// pointer moves; already-computed coordinates stay as they are.
    ///
    /// Fails with [`InputError::InvalidCalibration`] when cell size or
    /// scale is not positive, which would make conversion divide by
    /// zero on the next move.
    pub fn calibrate(
        &mut self,
        cell_width: i32,
        cell_height: i32,
        origin_x: i32,
        origin_y: i32,
        scale: f32,
    ) -> Result<(), InputError> {
        if cell_width <= 0 || cell_height <= 0 || scale <= 0.0 {
            return Err(InputError::InvalidCalibration {
                cell_width,
                cell_height,
                scale,
            });
        }
        self.calibration = Some(Calibration {
            cell_width,
            cell_height,
            origin_x,
            origin_y,
            scale,
        });
        Ok(())
    }

    /// Current calibration, if any.
    pub fn calibration(&self) -> Option<Calibration> {
        self.calibration
    }

    /// Feed a pointer move in raw coordinates.
    ///
    /// Both click-pending flags are dropped unconditionally, even when
    /// a click was never polled: a move that arrives between button-up
    /// and the next poll loses the click.
    ///
    /// Before calibration the cell coordinates stay at 0; the pending
    /// flags are still cleared.
    pub fn handle_move(&mut self, raw_x: i32, raw_y: i32) {
        if let Some(cal) = self.calibration {
            // Truncation toward zero: raw positions just left of or
            // above the origin land in cell 0, not cell -1.
            self.cell_x =
                ((raw_x - cal.origin_x) as f32 / (cal.cell_width as f32 * cal.scale)) as i32;
            self.cell_y =
                ((raw_y - cal.origin_y) as f32 / (cal.cell_height as f32 * cal.scale)) as i32;
        }
        self.left_click = false;
        self.right_click = false;
    }

    /// Feed a button-down for a tracked button.
    pub fn handle_button_down(&mut self, button: Button) {
        match button {
            Button::Left => {
                self.left_held = true;
                self.left_click = false;
            }
            Button::Right => {
                self.right_held = true;
                self.right_click = false;
            }
        }
    }

    /// Feed a button-up for a tracked button. Arms the one-shot click
    /// flag for the next poll.
    pub fn handle_button_up(&mut self, button: Button) {
        match button {
            Button::Left => {
                self.left_held = false;
                self.left_click = true;
            }
            Button::Right => {
                self.right_held = false;
                self.right_click = true;
            }
        }
    }

    /// True exactly once per completed left click; clears the flag.
    pub fn take_left_click(&mut self) -> bool {
        std::mem::take(&mut self.left_click)
    }

    /// True exactly once per completed right click; clears the flag.
    pub fn take_right_click(&mut self) -> bool {
        std::mem::take(&mut self.right_click)
    }

    /// Pointer X position, in cells.
    pub fn cell_x(&self) -> i32 {
        self.cell_x
    }

    /// Pointer Y position, in cells.
    pub fn cell_y(&self) -> i32 {
        self.cell_y
    }

    /// Whether the left button is currently down.
    pub fn left_held(&self) -> bool {
        self.left_held
    }

    /// Whether the right button is currently down.
    pub fn right_held(&self) -> bool {
        self.right_held
    }
}

// =============================================================================
// TESTS
// =============================================================================
