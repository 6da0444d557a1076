use tracing::debug;

use crate::geometry::{BubbleParams, Direction, FittedParams, Rect};
use crate::math::TOLERANCE;

/// Clamps requested bubble style values to a rectangle.
///
/// Each value is fitted in a fixed order and depends on the values fitted
/// before it:
///
/// 1. **Arrow height**: at most the rectangle's extent along the protrusion axis.
/// 2. **Border radius**: at most half the smaller side of the body left after
///    reserving the arrow height, so opposite corners never overlap.
/// 3. **Arrow width**: at most the straight part of the tail's edge between
///    its two corners.
/// 4. **Position ratio**: kept inside the window where the tail's base does
///    not reach into either corner.
///
/// Negative lengths fit to zero.
#[derive(Debug, Clone, Copy)]
pub struct FitParams {
    rect: Rect,
    params: BubbleParams,
}

impl FitParams {
    /// Creates a new `FitParams` operation.
    #[must_use]
    pub fn new(rect: Rect, params: BubbleParams) -> Self {
        Self { rect, params }
    }

    /// Executes the fit.
    #[must_use]
    pub fn execute(&self) -> FittedParams {
        let rect = &self.rect;
        let direction = self.params.direction();
        let (w, h) = (rect.width(), rect.height());

        let arrow_height = fit_length(
            "arrow_height",
            self.params.arrow_height(),
            direction.protrusion_extent(rect),
        );

        let max_radius = if direction.is_horizontal() {
            0.5 * (w - arrow_height).min(h)
        } else {
            0.5 * w.min(h - arrow_height)
        };
        let border_radius = fit_length("border_radius", self.params.border_radius(), max_radius);

        let max_width = direction.edge_length(rect) - 2.0 * border_radius;
        let arrow_width = fit_length("arrow_width", self.params.arrow_width(), max_width);

        let (min_ratio, max_ratio) = ratio_window(direction, rect, border_radius, arrow_width);
        let requested = self.params.position_ratio();
        let position_ratio = requested.clamp(min_ratio, max_ratio);
        if position_ratio.to_bits() != requested.to_bits() {
            debug!(
                parameter = "position_ratio",
                requested,
                fitted = position_ratio,
                "clamped bubble parameter"
            );
        }

        FittedParams {
            arrow_height,
            border_radius,
            arrow_width,
            position_ratio,
        }
    }
}

/// Returns the `(min, max)` position ratios that keep a tail of `arrow_width`
/// clear of corners of `border_radius` on `direction`'s edge.
///
/// The window is always centered on `0.5`. A zero-length edge yields `(0.5, 0.5)`.
#[must_use]
pub fn ratio_window(
    direction: Direction,
    rect: &Rect,
    border_radius: f64,
    arrow_width: f64,
) -> (f64, f64) {
    let edge_length = direction.edge_length(rect);
    if edge_length < TOLERANCE {
        return (0.5, 0.5);
    }
    let min_ratio = ((border_radius + 0.5 * arrow_width) / edge_length).clamp(0.0, 0.5);
    (min_ratio, 1.0 - min_ratio)
}

/// Floors `requested` at zero and caps it at `max` (itself floored at zero).
fn fit_length(parameter: &'static str, requested: f64, max: f64) -> f64 {
    let fitted = if requested < 0.0 {
        0.0
    } else {
        requested.min(max.max(0.0))
    };
    if fitted.to_bits() != requested.to_bits() {
        debug!(parameter, requested, fitted, "clamped bubble parameter");
    }
    fitted
}
