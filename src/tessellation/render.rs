use tracing::trace;

use crate::error::Result;
use crate::geometry::{BubbleStyle, OutlinePath};

use super::stroke_style::{Color, StrokeStyle};

/// A drawing surface that can stroke an outline.
///
/// Filling is left to the host, which already knows how to fill a closed path.
pub trait Canvas {
    /// Strokes `path` with `style`.
    fn stroke_path(&mut self, path: &OutlinePath, style: &StrokeStyle);
}

/// Draws a bubble outline according to its style.
///
/// `BubbleStyle::Stroke` strokes the outline once; `BubbleStyle::Fill` draws
/// nothing extra.
#[derive(Debug, Clone, Copy)]
pub struct RenderBubble {
    style: BubbleStyle,
    stroke: StrokeStyle,
}

impl RenderBubble {
    /// Creates a new `RenderBubble` operation.
    #[must_use]
    pub fn new(style: BubbleStyle, stroke: StrokeStyle) -> Self {
        Self { style, stroke }
    }

    /// Executes the render pass on `canvas`.
    pub fn execute<C: Canvas + ?Sized>(&self, path: &OutlinePath, canvas: &mut C) {
        match self.style {
            BubbleStyle::Stroke => {
                trace!(width = self.stroke.width(), "stroking bubble outline");
                canvas.stroke_path(path, &self.stroke);
            }
            BubbleStyle::Fill => {}
        }
    }
}

/// Strokes `path` with round joins.
///
/// # Errors
///
/// Returns an error if `width` is not a positive finite number.
pub fn stroke_path<C: Canvas + ?Sized>(
    canvas: &mut C,
    path: &OutlinePath,
    color: Color,
    width: f64,
) -> Result<()> {
    let style = StrokeStyle::new(width, color)?;
    canvas.stroke_path(path, &style);
    Ok(())
}

/// A recorded canvas operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Stroke {
        path: OutlinePath,
        style: StrokeStyle,
    },
}

/// A [`Canvas`] that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl Canvas for RecordingCanvas {
    fn stroke_path(&mut self, path: &OutlinePath, style: &StrokeStyle) {
        self.calls.push(DrawCall::Stroke {
            path: path.clone(),
            style: *style,
        });
    }
}
