use crate::error::{ParameterError, Result};

use super::direction::Direction;

/// Whether the outline is stroked with its own paint or only filled.
///
/// The style never changes the outline geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BubbleStyle {
    Stroke,
    #[default]
    Fill,
}

/// Requested bubble style values, as supplied by the user.
///
/// Lengths may be any non-NaN value; they are clamped into a valid range when
/// the outline is fitted to a rectangle. `position_ratio` must already lie in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleParams {
    direction: Direction,
    border_radius: f64,
    arrow_height: f64,
    arrow_width: f64,
    position_ratio: f64,
}

impl BubbleParams {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` if `position_ratio` is outside
    /// `[0, 1]`, or `ParameterError::NotANumber` if any value is NaN.
    pub fn new(
        direction: Direction,
        border_radius: f64,
        arrow_height: f64,
        arrow_width: f64,
        position_ratio: f64,
    ) -> Result<Self> {
        for (parameter, value) in [
            ("border_radius", border_radius),
            ("arrow_height", arrow_height),
            ("arrow_width", arrow_width),
            ("position_ratio", position_ratio),
        ] {
            if value.is_nan() {
                return Err(ParameterError::NotANumber { parameter }.into());
            }
        }

        if !(0.0..=1.0).contains(&position_ratio) {
            return Err(ParameterError::OutOfRange {
                parameter: "position_ratio",
                value: position_ratio,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }

        Ok(Self {
            direction,
            border_radius,
            arrow_height,
            arrow_width,
            position_ratio,
        })
    }

    /// Starts a builder with default style values and no direction.
    #[must_use]
    pub fn builder() -> BubbleParamsBuilder {
        BubbleParamsBuilder::default()
    }

    /// Returns the tail direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the requested corner radius.
    #[must_use]
    pub fn border_radius(&self) -> f64 {
        self.border_radius
    }

    /// Returns the requested tail length.
    #[must_use]
    pub fn arrow_height(&self) -> f64 {
        self.arrow_height
    }

    /// Returns the requested tail base width.
    #[must_use]
    pub fn arrow_width(&self) -> f64 {
        self.arrow_width
    }

    /// Returns the requested tail position along its edge.
    #[must_use]
    pub fn position_ratio(&self) -> f64 {
        self.position_ratio
    }
}

/// Incremental construction of [`BubbleParams`].
#[derive(Debug, Clone, Copy)]
pub struct BubbleParamsBuilder {
    direction: Option<Direction>,
    border_radius: f64,
    arrow_height: f64,
    arrow_width: f64,
    position_ratio: f64,
}

impl Default for BubbleParamsBuilder {
    fn default() -> Self {
        Self {
            direction: None,
            border_radius: 8.0,
            arrow_height: 8.0,
            arrow_width: 12.0,
            position_ratio: 0.5,
        }
    }
}

impl BubbleParamsBuilder {
    /// Sets the tail direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub fn border_radius(mut self, border_radius: f64) -> Self {
        self.border_radius = border_radius;
        self
    }

    /// Sets the tail length.
    #[must_use]
    pub fn arrow_height(mut self, arrow_height: f64) -> Self {
        self.arrow_height = arrow_height;
        self
    }

    /// Sets the tail base width.
    #[must_use]
    pub fn arrow_width(mut self, arrow_width: f64) -> Self {
        self.arrow_width = arrow_width;
        self
    }

    /// Sets the tail position ratio.
    #[must_use]
    pub fn position_ratio(mut self, position_ratio: f64) -> Self {
        self.position_ratio = position_ratio;
        self
    }

    /// Validates and builds the parameter set.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::MissingDirection` if no direction was set,
    /// plus any error of [`BubbleParams::new`].
    pub fn build(self) -> Result<BubbleParams> {
        let direction = self.direction.ok_or(ParameterError::MissingDirection)?;
        BubbleParams::new(
            direction,
            self.border_radius,
            self.arrow_height,
            self.arrow_width,
            self.position_ratio,
        )
    }
}

/// Style values clamped so that corners never overlap each other, the tail
/// never overlaps a corner, and the tail never leaves the rectangle.
///
/// Produced by [`FitParams`](crate::operations::FitParams) for one rectangle
/// and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedParams {
    pub(crate) arrow_height: f64,
    pub(crate) border_radius: f64,
    pub(crate) arrow_width: f64,
    pub(crate) position_ratio: f64,
}

impl FittedParams {
    /// Returns the fitted tail length.
    #[must_use]
    pub fn arrow_height(&self) -> f64 {
        self.arrow_height
    }

    /// Returns the fitted corner radius.
    #[must_use]
    pub fn border_radius(&self) -> f64 {
        self.border_radius
    }

    /// Returns the fitted tail base width.
    #[must_use]
    pub fn arrow_width(&self) -> f64 {
        self.arrow_width
    }

    /// Returns the fitted tail position ratio.
    #[must_use]
    pub fn position_ratio(&self) -> f64 {
        self.position_ratio
    }
}
