//! Matrix layout math for the effort/benefit scatter view.
//!
//! Pure functions, no I/O, no state. Inputs are not clamped: out-of-range
//! scores project outside the intended margin and are accepted as-is, the
//! caller validates where it cares to.

/// Fraction of the container spanned by the 0-10 value range, in percent.
const SPAN_PCT: f64 = 85.0;

/// Margin on each side keeping a ball off the container edge, in percent.
const MARGIN_PCT: f64 = 7.5;

/// Smallest ball diameter in pixels (effort + benefit = 0).
pub const MIN_BALL_SIZE: f64 = 32.0;

/// Largest ball diameter in pixels (effort + benefit = 20).
pub const MAX_BALL_SIZE: f64 = 64.0;

/// Screen position as percentages of the container's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixPosition {
    pub x: f64,
    pub y: f64,
}

/// Map effort/benefit scores to a container-relative position.
///
/// The y axis is inverted so higher benefit renders nearer the top. For
/// scores in 0-10 both coordinates land in [7.5, 92.5].
pub fn position(effort: i32, benefit: i32) -> MatrixPosition {
    let x = f64::from(effort) / 10.0 * SPAN_PCT + MARGIN_PCT;
    let y = f64::from(10 - benefit) / 10.0 * SPAN_PCT + MARGIN_PCT;
    MatrixPosition { x, y }
}

/// Ball diameter as a linear proxy for combined priority: effort + benefit
/// of 0 maps to [`MIN_BALL_SIZE`], 20 to [`MAX_BALL_SIZE`].
pub fn ball_size(effort: i32, benefit: i32) -> f64 {
    let total = f64::from(effort + benefit);
    MIN_BALL_SIZE + (total / 20.0) * (MAX_BALL_SIZE - MIN_BALL_SIZE)
}
