/// 2D screen-space point type (pixel coordinates).
pub type ScreenPoint = nalgebra::Point2<f64>;
