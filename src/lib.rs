pub mod error;
pub mod geometry;
pub mod marker;
pub mod math;
pub mod projection;
pub mod supplementary;

pub use error::{GeoeditError, Result};
pub use supplementary::{create_supplementary_points, Options};
