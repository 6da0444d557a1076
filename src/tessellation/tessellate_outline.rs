use crate::error::{Result, TessellationError};
use crate::geometry::{OutlinePath, PathCommand};
use crate::math::arc_2d::{arc_point_at, arc_subdivision_count};
use crate::math::{Point2, TOLERANCE};

use super::{Polyline, TessellationParams};

/// Flattens an outline into a polyline by subdividing its arcs.
///
/// Consecutive coincident points (zero radius corners, degenerate tails) are
/// merged. For a closed outline the closing point is not repeated.
#[derive(Debug)]
pub struct TessellateOutline<'a> {
    path: &'a OutlinePath,
    params: TessellationParams,
}

impl<'a> TessellateOutline<'a> {
    /// Creates a new `TessellateOutline` operation.
    #[must_use]
    pub fn new(path: &'a OutlinePath, params: TessellationParams) -> Self {
        Self { path, params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if the tolerance is not
    /// a positive finite number or the segment limits are inconsistent.
    pub fn execute(&self) -> Result<Polyline> {
        self.validate()?;

        let mut polyline = Polyline {
            points: Vec::with_capacity(self.path.len() * 2),
            closed: false,
        };

        for command in self.path.commands() {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => push_point(&mut polyline, p),
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    let n = self.segments_for(radius, sweep_angle);
                    for j in 1..=n {
                        let t = f64::from(j) / f64::from(n);
                        let p = arc_point_at(&center, radius, start_angle, sweep_angle, t);
                        push_point(&mut polyline, p);
                    }
                }
                PathCommand::Close => {
                    polyline.closed = true;
                    if polyline.points.len() > 1 {
                        let first = polyline.points[0];
                        if polyline
                            .points
                            .last()
                            .is_some_and(|last| (*last - first).norm() < TOLERANCE)
                        {
                            polyline.points.pop();
                        }
                    }
                }
            }
        }

        Ok(polyline)
    }

    fn validate(&self) -> Result<()> {
        let p = &self.params;
        if !p.tolerance.is_finite() || p.tolerance <= 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {}",
                p.tolerance
            ))
            .into());
        }
        if p.min_segments == 0 || p.min_segments > p.max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "segment limits must satisfy 1 <= min <= max, got {}..{}",
                p.min_segments, p.max_segments
            ))
            .into());
        }
        Ok(())
    }

    fn segments_for(&self, radius: f64, sweep_angle: f64) -> u32 {
        if radius < TOLERANCE || sweep_angle.abs() < TOLERANCE {
            return 1;
        }
        let n = arc_subdivision_count(radius, sweep_angle.abs(), self.params.tolerance);
        n.clamp(self.params.min_segments, self.params.max_segments)
    }
}

fn push_point(polyline: &mut Polyline, p: Point2) {
    if polyline
        .points
        .last()
        .is_some_and(|last| (*last - p).norm() < TOLERANCE)
    {
        return;
    }
    polyline.points.push(p);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{BubbleParams, Direction, Rect};
    use crate::operations::BubbleOutline;

    fn bubble(radius: f64, arrow_height: f64) -> OutlinePath {
        let rect = Rect::new(60.0, 40.0).unwrap();
        let params = BubbleParams::new(Direction::Bottom, radius, arrow_height, 10.0, 0.5).unwrap();
        BubbleOutline::new(rect, params).execute()
    }

    #[test]
    fn sharp_bubble_is_a_heptagon() {
        // 4 body corners + 3 tail vertices.
        let polyline = TessellateOutline::new(&bubble(0.0, 5.0), TessellationParams::default())
            .execute()
            .unwrap();
        assert!(polyline.closed);
        assert_eq!(polyline.points.len(), 7);
    }

    #[test]
    fn rounded_corners_are_subdivided() {
        let params = TessellationParams {
            tolerance: 0.01,
            min_segments: 1,
            max_segments: 256,
        };
        let coarse = TessellateOutline::new(&bubble(8.0, 5.0), params).execute().unwrap();
        let fine = TessellateOutline::new(
            &bubble(8.0, 5.0),
            TessellationParams {
                tolerance: 0.0001,
                ..params
            },
        )
        .execute()
        .unwrap();
        assert!(coarse.points.len() > 7);
        assert!(fine.points.len() > coarse.points.len());
    }

    #[test]
    fn points_stay_on_corner_circle() {
        let path = bubble(8.0, 5.0);
        let polyline = TessellateOutline::new(&path, TessellationParams::default())
            .execute()
            .unwrap();
        // Top-left corner circle is centered at (8, 8).
        let center = Point2::new(8.0, 8.0);
        for p in polyline.points.iter().filter(|p| p.x < 8.0 && p.y < 8.0) {
            assert!(((*p - center).norm() - 8.0).abs() < 1e-9);
        }
    }

    #[test]
    fn max_segments_caps_subdivision() {
        let params = TessellationParams {
            tolerance: 1e-9,
            min_segments: 1,
            max_segments: 2,
        };
        let polyline = TessellateOutline::new(&bubble(8.0, 5.0), params).execute().unwrap();
        // 2 points per corner, 4 straight edge ends (the last one is the
        // start point again and gets dropped), 3 tail vertices.
        assert_eq!(polyline.points.len(), 4 * 2 + 4 + 3);
    }

    #[test]
    fn invalid_params_fail() {
        let path = bubble(4.0, 4.0);
        let bad_tolerance = TessellationParams {
            tolerance: 0.0,
            ..TessellationParams::default()
        };
        assert!(TessellateOutline::new(&path, bad_tolerance).execute().is_err());
        let bad_limits = TessellationParams {
            min_segments: 8,
            max_segments: 4,
            ..TessellationParams::default()
        };
        assert!(TessellateOutline::new(&path, bad_limits).execute().is_err());
    }
}
