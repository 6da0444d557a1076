mod build_outline;
mod fit_params;
pub mod query;
pub mod transform;

pub use build_outline::{BubbleOutline, BuildOutline};
pub use fit_params::{ratio_window, FitParams};
pub use query::BoundingBox;
pub use transform::ScaleBubble;
