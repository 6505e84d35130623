//! Error types for the input adapters.

use thiserror::Error;

/// Errors surfaced by the input adapters.
///
/// The only fallible operation is mouse calibration: geometry that is
/// zero or negative would turn the next pointer move into a division
/// fault, so it is rejected up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Calibration parameters must all be positive.
    #[error(
        "invalid calibration: cell {cell_width}x{cell_height} at scale {scale} \
         (cell size and scale must be positive)"
    )]
    InvalidCalibration {
        cell_width: i32,
        cell_height: i32,
        scale: f32,
    },
}
