pub mod geometry;
pub mod stoch;

pub use geometry::*;
