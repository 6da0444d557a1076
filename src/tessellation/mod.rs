mod render;
mod stroke_style;
mod tessellate_outline;

pub use render::{stroke_path, Canvas, DrawCall, RecordingCanvas, RenderBubble};
pub use stroke_style::{Color, LineJoin, StrokeStyle};
pub use tessellate_outline::TessellateOutline;

use crate::math::Point2;

/// Parameters controlling arc flattening quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true arc.
    pub tolerance: f64,
    /// Minimum number of segments per arc.
    pub min_segments: u32,
    /// Maximum number of segments per arc.
    pub max_segments: u32,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

/// A polyline approximation of an outline.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}
