use std::f64::consts::PI;

use tracing::trace;

use crate::error::Result;
use crate::geometry::{
    Aabb, BubbleParams, Direction, EdgeInset, FittedParams, OutlinePath, PathProducer, Rect,
};
use crate::math::{Point2, QUARTER_TURN};

use super::fit_params::FitParams;

/// Traces a bubble outline from already fitted parameters.
///
/// The outline runs clockwise on screen starting at the top of the left
/// edge: top-left corner, top edge, top-right corner, right edge, and so on.
/// The tail is inserted into the straight part of the edge facing
/// `direction` as three line segments: base, apex, base. The rounded body is
/// inset by the arrow height on that side so the apex lands exactly on the
/// bounding rectangle.
///
/// Zero radius corners and zero-sized tails are still emitted, as zero sweep
/// arcs and degenerate triangles respectively, so every outline has the same
/// command layout.
#[derive(Debug, Clone, Copy)]
pub struct BuildOutline {
    rect: Rect,
    direction: Direction,
    fitted: FittedParams,
}

impl BuildOutline {
    /// Creates a new `BuildOutline` operation.
    #[must_use]
    pub fn new(rect: Rect, direction: Direction, fitted: FittedParams) -> Self {
        Self {
            rect,
            direction,
            fitted,
        }
    }

    /// Executes the operation, producing a closed outline.
    #[must_use]
    pub fn execute(&self) -> OutlinePath {
        let r = self.fitted.border_radius();
        let body =
            EdgeInset::for_arrow(self.direction, self.fitted.arrow_height()).deflate(&self.rect);
        let (left, top) = (body.min.x, body.min.y);
        let (right, bottom) = (body.max.x, body.max.y);
        let tail = self.tail(&body);

        let mut path = OutlinePath::with_capacity(13);
        path.move_to(Point2::new(left, top + r));
        path.arc(Point2::new(left + r, top + r), r, PI, QUARTER_TURN);

        self.push_tail_if(&mut path, Direction::Top, &tail);
        path.line_to(Point2::new(right - r, top));
        path.arc(Point2::new(right - r, top + r), r, -QUARTER_TURN, QUARTER_TURN);

        self.push_tail_if(&mut path, Direction::Right, &tail);
        path.line_to(Point2::new(right, bottom - r));
        path.arc(Point2::new(right - r, bottom - r), r, 0.0, QUARTER_TURN);

        self.push_tail_if(&mut path, Direction::Bottom, &tail);
        path.line_to(Point2::new(left + r, bottom));
        path.arc(Point2::new(left + r, bottom - r), r, QUARTER_TURN, QUARTER_TURN);

        self.push_tail_if(&mut path, Direction::Left, &tail);
        path.line_to(Point2::new(left, top + r));
        path.close();

        trace!(
            direction = ?self.direction,
            commands = path.len(),
            "built bubble outline"
        );
        path
    }

    /// Tail vertices in traversal order: first base corner, apex, second base corner.
    fn tail(&self, body: &Aabb) -> [Point2; 3] {
        let center = self.fitted.position_ratio() * self.direction.edge_length(&self.rect);
        let half = 0.5 * self.fitted.arrow_width();
        let (w, h) = (self.rect.width(), self.rect.height());

        match self.direction {
            Direction::Top => [
                Point2::new(center - half, body.min.y),
                Point2::new(center, 0.0),
                Point2::new(center + half, body.min.y),
            ],
            Direction::Right => [
                Point2::new(body.max.x, center - half),
                Point2::new(w, center),
                Point2::new(body.max.x, center + half),
            ],
            Direction::Bottom => [
                Point2::new(center + half, body.max.y),
                Point2::new(center, h),
                Point2::new(center - half, body.max.y),
            ],
            Direction::Left => [
                Point2::new(body.min.x, center + half),
                Point2::new(0.0, center),
                Point2::new(body.min.x, center - half),
            ],
        }
    }

    fn push_tail_if(&self, path: &mut OutlinePath, edge: Direction, tail: &[Point2; 3]) {
        if self.direction == edge {
            for &vertex in tail {
                path.line_to(vertex);
            }
        }
    }
}

impl PathProducer for BuildOutline {
    fn produce_path(&self) -> Result<OutlinePath> {
        Ok(self.execute())
    }
}

/// Fits requested parameters to a rectangle and traces the resulting outline.
#[derive(Debug, Clone, Copy)]
pub struct BubbleOutline {
    rect: Rect,
    params: BubbleParams,
}

impl BubbleOutline {
    /// Creates a new `BubbleOutline` operation.
    #[must_use]
    pub fn new(rect: Rect, params: BubbleParams) -> Self {
        Self { rect, params }
    }

    /// Returns the parameters after fitting them to the rectangle.
    #[must_use]
    pub fn fitted(&self) -> FittedParams {
        FitParams::new(self.rect, self.params).execute()
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self) -> OutlinePath {
        BuildOutline::new(self.rect, self.params.direction(), self.fitted()).execute()
    }
}

impl PathProducer for BubbleOutline {
    fn produce_path(&self) -> Result<OutlinePath> {
        Ok(self.execute())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PathCommand;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-9;

    fn outline(
        w: f64,
        h: f64,
        direction: Direction,
        radius: f64,
        ah: f64,
        aw: f64,
        ratio: f64,
    ) -> OutlinePath {
        let rect = Rect::new(w, h).unwrap();
        let params = BubbleParams::new(direction, radius, ah, aw, ratio).unwrap();
        BubbleOutline::new(rect, params).execute()
    }

    fn line_points(path: &OutlinePath) -> Vec<Point2> {
        path.commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn assert_point_near(a: &Point2, x: f64, y: f64) {
        assert!(
            (a.x - x).abs() < TOL && (a.y - y).abs() < TOL,
            "expected ({x}, {y}), got ({}, {})",
            a.x,
            a.y
        );
    }

    #[test]
    fn bottom_tail_vertices() {
        let path = outline(100.0, 50.0, Direction::Bottom, 10.0, 5.0, 8.0, 0.5);
        let lines = line_points(&path);
        // top, right, [tail x3], bottom, left
        assert_eq!(lines.len(), 7);
        assert_point_near(&lines[2], 54.0, 45.0);
        assert_point_near(&lines[3], 50.0, 50.0);
        assert_point_near(&lines[4], 46.0, 45.0);
        assert_point_near(&lines[5], 10.0, 45.0);
    }

    #[test]
    fn command_layout_is_fixed() {
        for direction in Direction::ALL {
            let path = outline(80.0, 60.0, direction, 6.0, 10.0, 12.0, 0.4);
            assert_eq!(path.len(), 13, "{direction:?}");
            let arcs = path
                .commands()
                .iter()
                .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
                .count();
            assert_eq!(arcs, 4);
            assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
            assert_eq!(path.commands().last(), Some(&PathCommand::Close));
        }
    }

    #[test]
    fn outline_is_continuous_and_closed() {
        for direction in Direction::ALL {
            let path = outline(120.0, 70.0, direction, 15.0, 12.0, 20.0, 0.7);
            assert!(path.is_continuous(TOL), "{direction:?}");
            assert!(path.is_closed(), "{direction:?}");
        }
    }

    #[test]
    fn apex_touches_bounding_rect() {
        let lines = line_points(&outline(40.0, 30.0, Direction::Left, 4.0, 6.0, 6.0, 0.5));
        // left tail is inserted after the bottom edge line
        assert_point_near(&lines[4], 0.0, 15.0);
        assert_point_near(&lines[3], 6.0, 18.0);
        assert_point_near(&lines[5], 6.0, 12.0);

        let lines = line_points(&outline(40.0, 30.0, Direction::Top, 4.0, 6.0, 6.0, 0.25));
        assert_point_near(&lines[0], 7.0, 6.0);
        assert_point_near(&lines[1], 10.0, 0.0);
        assert_point_near(&lines[2], 13.0, 6.0);

        let lines = line_points(&outline(40.0, 30.0, Direction::Right, 4.0, 6.0, 6.0, 0.5));
        assert_point_near(&lines[1], 34.0, 12.0);
        assert_point_near(&lines[2], 40.0, 15.0);
        assert_point_near(&lines[3], 34.0, 18.0);
    }

    #[test]
    fn corner_arcs_are_clockwise_quarter_turns() {
        let path = outline(50.0, 50.0, Direction::Bottom, 8.0, 5.0, 5.0, 0.5);
        for command in path.commands() {
            if let PathCommand::ArcTo {
                radius,
                sweep_angle,
                ..
            } = command
            {
                assert_abs_diff_eq!(*radius, 8.0);
                assert_abs_diff_eq!(*sweep_angle, QUARTER_TURN);
            }
        }
    }

    #[test]
    fn zero_radius_gives_sharp_corners() {
        let path = outline(20.0, 10.0, Direction::Top, 0.0, 2.0, 4.0, 0.5);
        assert!(path.is_continuous(TOL));
        let start = path.start_point().unwrap();
        assert_point_near(&start, 0.0, 2.0);
        let corner = path.commands()[1].end_point().unwrap();
        assert_point_near(&corner, 0.0, 2.0);
    }

    #[test]
    fn zero_width_tail_degenerates_to_spike() {
        let lines = line_points(&outline(100.0, 50.0, Direction::Bottom, 10.0, 5.0, -3.0, 0.5));
        assert_point_near(&lines[2], 50.0, 45.0);
        assert_point_near(&lines[3], 50.0, 50.0);
        assert_point_near(&lines[4], 50.0, 45.0);
    }

    #[test]
    fn produce_path_matches_execute() {
        let rect = Rect::new(64.0, 32.0).unwrap();
        let params = BubbleParams::new(Direction::Right, 4.0, 8.0, 8.0, 0.5).unwrap();
        let op = BubbleOutline::new(rect, params);
        assert_eq!(op.produce_path().unwrap(), op.execute());
        let inner = BuildOutline::new(rect, Direction::Right, op.fitted());
        assert_eq!(inner.produce_path().unwrap(), op.execute());
    }
}
