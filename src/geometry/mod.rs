mod bubble;
mod direction;
mod path;
mod rect;

pub use bubble::{BubbleParams, BubbleParamsBuilder, BubbleStyle, FittedParams};
pub use direction::{Direction, EdgeInset};
pub use path::{OutlinePath, PathCommand, PathProducer};
pub use rect::{Aabb, Rect};
