pub mod arc_2d;

/// 2D point type. The origin is the top-left corner of the bubble's bounding
/// rectangle, with `y` growing downwards.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Quarter turn in radians, the sweep of every rounded corner.
pub const QUARTER_TURN: f64 = std::f64::consts::FRAC_PI_2;
