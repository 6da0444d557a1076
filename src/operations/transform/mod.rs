mod scale;

pub use scale::ScaleBubble;
