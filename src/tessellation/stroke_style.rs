use crate::error::{Result, TessellationError};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from red, green and blue channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// How two stroked segments meet at a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Paint parameters for stroking a bubble outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    width: f64,
    color: Color,
    join: LineJoin,
}

impl StrokeStyle {
    /// Creates a new stroke style with round joins.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not a positive finite number.
    pub fn new(width: f64, color: Color) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self {
            width,
            color,
            join: LineJoin::Round,
        })
    }

    /// Returns this style with a different join.
    #[must_use]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the line join.
    #[must_use]
    pub fn join(&self) -> LineJoin {
        self.join
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = StrokeStyle::new(2.0, Color::rgb(10, 20, 30)).unwrap();
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert_eq!(style.color(), Color::rgba(10, 20, 30, 255));
        assert_eq!(style.join(), LineJoin::Round);
    }

    #[test]
    fn with_join_overrides_default() {
        let style = StrokeStyle::new(1.0, Color::BLACK)
            .unwrap()
            .with_join(LineJoin::Bevel);
        assert_eq!(style.join(), LineJoin::Bevel);
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(StrokeStyle::new(0.0, Color::BLACK).is_err());
    }

    #[test]
    fn new_with_negative_width_fails() {
        assert!(StrokeStyle::new(-1.0, Color::BLACK).is_err());
    }

    #[test]
    fn new_with_nan_width_fails() {
        assert!(StrokeStyle::new(f64::NAN, Color::BLACK).is_err());
    }
}
