use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// The bounding rectangle of a bubble.
///
/// Only the size is stored; the top-left corner is the origin of every
/// coordinate produced for this rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    width: f64,
    height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimensions` if either dimension is
    /// negative or not finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(GeometryError::InvalidDimensions { width, height }.into());
        }
        Ok(Self { width, height })
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the rectangle as an axis-aligned box anchored at the origin.
    #[must_use]
    pub fn to_aabb(&self) -> Aabb {
        Aabb {
            min: Point2::origin(),
            max: Point2::new(self.width, self.height),
        }
    }

    /// Returns this rectangle with both dimensions multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimensions` if the scaled size is
    /// negative or not finite.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned box in bubble coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum (top-left) corner.
    pub min: Point2,
    /// Maximum (bottom-right) corner.
    pub max: Point2,
}

impl Aabb {
    /// Width of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns whether `other` lies inside this box, allowing `tolerance` slack.
    #[must_use]
    pub fn contains(&self, other: &Aabb, tolerance: f64) -> bool {
        other.min.x >= self.min.x - tolerance
            && other.min.y >= self.min.y - tolerance
            && other.max.x <= self.max.x + tolerance
            && other.max.y <= self.max.y + tolerance
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_with_valid_size() {
        let rect = Rect::new(100.0, 50.0).unwrap();
        assert_relative_eq!(rect.width(), 100.0);
        assert_relative_eq!(rect.height(), 50.0);
    }

    #[test]
    fn zero_size_is_allowed() {
        assert!(Rect::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn negative_size_fails() {
        assert!(Rect::new(-1.0, 10.0).is_err());
        assert!(Rect::new(10.0, -0.5).is_err());
    }

    #[test]
    fn non_finite_size_fails() {
        assert!(Rect::new(f64::NAN, 10.0).is_err());
        assert!(Rect::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn scaled_multiplies_both_dimensions() {
        let rect = Rect::new(20.0, 10.0).unwrap().scaled(1.5).unwrap();
        assert_relative_eq!(rect.width(), 30.0);
        assert_relative_eq!(rect.height(), 15.0);
        assert!(Rect::new(20.0, 10.0).unwrap().scaled(-1.0).is_err());
    }

    #[test]
    fn aabb_contains_with_tolerance() {
        let outer = Rect::new(10.0, 10.0).unwrap().to_aabb();
        let inner = Aabb {
            min: Point2::new(0.0, -1e-12),
            max: Point2::new(10.0, 10.0),
        };
        assert!(outer.contains(&inner, 1e-10));
        assert!(!outer.contains(&inner, 0.0));
    }
}
