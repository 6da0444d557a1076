use crate::math::Point2;

use super::rect::{Aabb, Rect};

/// The edge of the bounding rectangle the tail protrudes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    /// All directions in clockwise edge order, starting with the left edge.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
    ];

    /// Returns whether the tail protrudes along the X axis.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Extent of `rect` along the tail's protrusion axis.
    #[must_use]
    pub fn protrusion_extent(self, rect: &Rect) -> f64 {
        if self.is_horizontal() {
            rect.width()
        } else {
            rect.height()
        }
    }

    /// Length of the edge the tail sits on.
    #[must_use]
    pub fn edge_length(self, rect: &Rect) -> f64 {
        if self.is_horizontal() {
            rect.height()
        } else {
            rect.width()
        }
    }
}

/// Space reserved on each side of the bounding rectangle for the tail.
///
/// Only the side the tail protrudes from is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInset {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl EdgeInset {
    /// Inset that makes room for a tail of height `arrow_height` on `direction`'s side.
    #[must_use]
    pub fn for_arrow(direction: Direction, arrow_height: f64) -> Self {
        let none = Self::default();
        match direction {
            Direction::Left => Self {
                left: arrow_height,
                ..none
            },
            Direction::Top => Self {
                top: arrow_height,
                ..none
            },
            Direction::Right => Self {
                right: arrow_height,
                ..none
            },
            Direction::Bottom => Self {
                bottom: arrow_height,
                ..none
            },
        }
    }

    /// Shrinks `rect` by this inset, yielding the rounded body of the bubble.
    #[must_use]
    pub fn deflate(&self, rect: &Rect) -> Aabb {
        Aabb {
            min: Point2::new(self.left, self.top),
            max: Point2::new(rect.width() - self.right, rect.height() - self.bottom),
        }
    }
}
