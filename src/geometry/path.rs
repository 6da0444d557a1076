use std::fmt;

use crate::error::Result;
use crate::math::arc_2d::{arc_end, arc_start, svg_arc_flags};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A single outline primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at the point.
    MoveTo(Point2),
    /// Straight line from the current point.
    LineTo(Point2),
    /// Circular arc in center form. A positive sweep runs clockwise on screen.
    ArcTo {
        center: Point2,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
    /// Closes the current subpath back to its `MoveTo` point.
    Close,
}

impl PathCommand {
    /// The point this command starts drawing from, if it names one.
    ///
    /// Lines start implicitly at the previous end point and `Close` has no
    /// geometry of its own, so both return `None`.
    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        match *self {
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                ..
            } => Some(arc_start(&center, radius, start_angle)),
            PathCommand::MoveTo(_) | PathCommand::LineTo(_) | PathCommand::Close => None,
        }
    }

    /// The point this command ends at. `None` for `Close`.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => Some(arc_end(&center, radius, start_angle, sweep_angle)),
            PathCommand::Close => None,
        }
    }

    fn translated(self, offset: Vector2) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + offset),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + offset),
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => PathCommand::ArcTo {
                center: center + offset,
                radius,
                start_angle,
                sweep_angle,
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// An ordered sequence of path commands describing a bubble outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlinePath {
    commands: Vec<PathCommand>,
}

impl OutlinePath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path with room for `capacity` commands.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, to: Point2) {
        self.commands.push(PathCommand::MoveTo(to));
    }

    pub fn line_to(&mut self, to: Point2) {
        self.commands.push(PathCommand::LineTo(to));
    }

    pub fn arc(&mut self, center: Point2, radius: f64, start_angle: f64, sweep_angle: f64) {
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle,
            sweep_angle,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Returns the commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the point of the leading `MoveTo`, if any.
    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Returns whether every command starts where the previous one ended,
    /// within `tolerance`.
    #[must_use]
    pub fn is_continuous(&self, tolerance: f64) -> bool {
        let mut current: Option<Point2> = None;
        for command in &self.commands {
            if let (Some(prev), Some(start)) = (current, command.start_point()) {
                if (start - prev).norm() > tolerance {
                    return false;
                }
            }
            if let Some(end) = command.end_point() {
                current = Some(end);
            }
        }
        true
    }

    /// Returns whether the path ends with `Close` and its last drawn point
    /// coincides with the starting `MoveTo`.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let Some(start) = self.start_point() else {
            return false;
        };
        if self.commands.last() != Some(&PathCommand::Close) {
            return false;
        }
        self.commands
            .iter()
            .rev()
            .find_map(PathCommand::end_point)
            .is_some_and(|last| (last - start).norm() < TOLERANCE)
    }

    /// Returns a copy of this path moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|c| c.translated(offset))
                .collect(),
        }
    }

    /// Serializes the path as SVG path data (`M`, `L`, `A`, `Z`).
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OutlinePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    let end = arc_end(&center, radius, start_angle, sweep_angle);
                    if radius < TOLERANCE || sweep_angle.abs() < TOLERANCE {
                        write!(f, "L{} {}", end.x, end.y)?;
                    } else {
                        let (large, sweep) = svg_arc_flags(sweep_angle);
                        write!(
                            f,
                            "A{radius} {radius} 0 {large} {sweep} {} {}",
                            end.x, end.y
                        )?;
                    }
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Something that can describe itself as an outline path.
pub trait PathProducer {
    /// Produces the outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the producer's inputs cannot form a valid outline.
    fn produce_path(&self) -> Result<OutlinePath>;
}
