pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{BubblineError, Result};
pub use geometry::{BubbleParams, BubbleStyle, Direction, OutlinePath, PathCommand, Rect};

use operations::BubbleOutline;

/// Computes the outline of a speech bubble filling `rect` with its tail on
/// `direction`'s edge.
///
/// Lengths are clamped to fit the rectangle; negative lengths become zero.
///
/// # Errors
///
/// Returns `BubblineError::InvalidArgument` if `position_ratio` lies outside
/// `[0, 1]` or any value is NaN.
pub fn compute_outline(
    rect: Rect,
    direction: Direction,
    border_radius: f64,
    arrow_height: f64,
    arrow_width: f64,
    position_ratio: f64,
) -> Result<OutlinePath> {
    let params = BubbleParams::new(
        direction,
        border_radius,
        arrow_height,
        arrow_width,
        position_ratio,
    )?;
    Ok(BubbleOutline::new(rect, params).execute())
}
