//! 2D circular arc math in center form.
//!
//! An arc is described by its center, radius, start angle and signed sweep
//! (radians). Angles are measured from the +X axis towards +Y. Since +Y points
//! down in bubble coordinates, a positive sweep runs clockwise on screen.

use std::f64::consts::PI;

use super::Point2;

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Returns the start point of an arc.
#[must_use]
pub fn arc_start(center: &Point2, radius: f64, start_angle: f64) -> Point2 {
    arc_point_at(center, radius, start_angle, 0.0, 0.0)
}

/// Returns the end point of an arc.
#[must_use]
pub fn arc_end(center: &Point2, radius: f64, start_angle: f64, sweep: f64) -> Point2 {
    arc_point_at(center, radius, start_angle, sweep, 1.0)
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

/// SVG elliptical-arc flags `(large_arc, sweep)` for a center-form arc.
///
/// In a y-down coordinate system the SVG sweep flag is `1` for a positive
/// (clockwise on screen) sweep.
#[must_use]
pub fn svg_arc_flags(sweep: f64) -> (u8, u8) {
    let large = u8::from(sweep.abs() > PI);
    let positive = u8::from(sweep >= 0.0);
    (large, positive)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn quarter_turn_from_left_reaches_top() {
        // Top-left corner of a rounded rect: center (5,5), r=5, from π sweeping +π/2.
        let center = Point2::new(5.0, 5.0);
        let start = arc_start(&center, 5.0, PI);
        let end = arc_end(&center, 5.0, PI, PI / 2.0);
        assert_abs_diff_eq!(start.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(start.y, 5.0, epsilon = TOL);
        assert_abs_diff_eq!(end.x, 5.0, epsilon = TOL);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = TOL);
    }

    #[test]
    fn midpoint_lies_on_circle() {
        let center = Point2::new(1.0, 2.0);
        let mid = arc_point_at(&center, 3.0, 0.0, PI / 2.0, 0.5);
        assert_abs_diff_eq!((mid - center).norm(), 3.0, epsilon = TOL);
        assert!(mid.x > center.x && mid.y > center.y);
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let center = Point2::new(4.0, 7.0);
        let start = arc_start(&center, 0.0, 1.3);
        let end = arc_end(&center, 0.0, 1.3, PI / 2.0);
        assert_eq!(start, center);
        assert_eq!(end, center);
    }

    #[test]
    fn subdivision_count_large_tolerance() {
        let n = arc_subdivision_count(1.0, PI, 10.0);
        assert_eq!(n, 1);
    }

    #[test]
    fn subdivision_count_small_tolerance() {
        let n = arc_subdivision_count(1.0, PI, 0.001);
        assert!(n > 10, "expected many subdivisions, got {n}");
    }

    #[test]
    fn subdivision_count_degenerate_arc() {
        assert_eq!(arc_subdivision_count(0.0, PI / 2.0, 0.01), 1);
        assert_eq!(arc_subdivision_count(1.0, 0.0, 0.01), 1);
    }

    #[test]
    fn svg_flags_for_corner_arcs() {
        assert_eq!(svg_arc_flags(PI / 2.0), (0, 1));
        assert_eq!(svg_arc_flags(-PI / 2.0), (0, 0));
        assert_eq!(svg_arc_flags(1.5 * PI), (1, 1));
    }
}
