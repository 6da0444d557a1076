use std::f64::consts::FRAC_PI_2;

use crate::error::{GeometryError, Result};
use crate::geometry::{Aabb, OutlinePath, PathCommand};
use crate::math::arc_2d::arc_point_at;
use crate::math::Point2;

/// Computes the exact axis-aligned bounding box of an outline.
///
/// Arcs contribute their endpoints plus every axis-extreme point
/// (multiples of a quarter turn) that their sweep passes through.
#[derive(Debug)]
pub struct BoundingBox<'a> {
    path: &'a OutlinePath,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(path: &'a OutlinePath) -> Self {
        Self { path }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the path draws no points or an
    /// arc has a non-finite center, radius or angle.
    pub fn execute(&self) -> Result<Aabb> {
        let mut bounds: Option<Aabb> = None;
        let mut include = |p: Point2| {
            bounds = Some(match bounds {
                None => Aabb { min: p, max: p },
                Some(b) => Aabb {
                    min: Point2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: Point2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                },
            });
        };

        for command in self.path.commands() {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    if !(center.x.is_finite()
                        && center.y.is_finite()
                        && radius.is_finite()
                        && start_angle.is_finite()
                        && sweep_angle.is_finite())
                    {
                        return Err(GeometryError::Degenerate(format!(
                            "arc is not finite: radius {radius}, start {start_angle}, sweep {sweep_angle}"
                        ))
                        .into());
                    }
                    include(arc_point_at(&center, radius, start_angle, sweep_angle, 0.0));
                    include(arc_point_at(&center, radius, start_angle, sweep_angle, 1.0));
                    for angle in axis_extremes(start_angle, sweep_angle) {
                        include(arc_point_at(&center, radius, angle, 0.0, 0.0));
                    }
                }
                PathCommand::Close => {}
            }
        }

        bounds.ok_or_else(|| GeometryError::Degenerate("outline has no points".to_owned()).into())
    }
}

/// Multiples of a quarter turn strictly inside the swept angle range.
///
/// At most four are returned: once the sweep covers a full turn every axis
/// extreme has been reached.
fn axis_extremes(start_angle: f64, sweep_angle: f64) -> Vec<f64> {
    let (lo, hi) = if sweep_angle >= 0.0 {
        (start_angle, start_angle + sweep_angle)
    } else {
        (start_angle + sweep_angle, start_angle)
    };
    #[allow(clippy::cast_possible_truncation)]
    let first = ((lo / FRAC_PI_2).floor() as i64).saturating_add(1);
    let mut angles = Vec::with_capacity(4);
    let mut k = first;
    while angles.len() < 4 {
        #[allow(clippy::cast_precision_loss)]
        let angle = k as f64 * FRAC_PI_2;
        if angle >= hi {
            break;
        }
        angles.push(angle);
        k = k.saturating_add(1);
    }
    angles
}
