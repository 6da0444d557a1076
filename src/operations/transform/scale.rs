use crate::error::{GeometryError, Result};
use crate::geometry::{FittedParams, Rect};

/// Scales a fitted bubble uniformly about the origin.
///
/// The rectangle and every fitted length are multiplied by `factor`; the
/// position ratio is scale invariant. Fitting the scaled rectangle again
/// yields the scaled parameters, so outlines built either way agree.
#[derive(Debug, Clone, Copy)]
pub struct ScaleBubble {
    rect: Rect,
    fitted: FittedParams,
    factor: f64,
}

impl ScaleBubble {
    /// Creates a new `ScaleBubble` operation.
    #[must_use]
    pub fn new(rect: Rect, fitted: FittedParams, factor: f64) -> Self {
        Self {
            rect,
            fitted,
            factor,
        }
    }

    /// Executes the scaling.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the factor is not a positive
    /// finite number.
    pub fn execute(&self) -> Result<(Rect, FittedParams)> {
        let factor = self.factor;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "scale factor must be positive and finite, got {factor}"
            ))
            .into());
        }

        let rect = self.rect.scaled(factor)?;
        let fitted = FittedParams {
            arrow_height: self.fitted.arrow_height * factor,
            border_radius: self.fitted.border_radius * factor,
            arrow_width: self.fitted.arrow_width * factor,
            position_ratio: self.fitted.position_ratio,
        };
        Ok((rect, fitted))
    }
}
