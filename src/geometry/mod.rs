pub mod line;
pub mod segment;

pub use line::Line2;
pub use segment::{ClosestPoint, Intersection, LineSeg2};
