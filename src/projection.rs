use crate::geometry::Position;
use crate::math::ScreenPoint;

/// A map view's projection between geographic and screen-pixel space.
///
/// Midpoint markers are positioned halfway between two vertices *as drawn*,
/// so when a view context is available the interpolation happens in screen
/// space rather than by geographic averaging. The library only calls
/// [`project`](ScreenProjection::project) and
/// [`unproject`](ScreenProjection::unproject); the projection math itself
/// belongs to the hosting map.
pub trait ScreenProjection {
    /// Projects a geographic position to screen pixels.
    fn project(&self, position: Position) -> ScreenPoint;

    /// Maps a screen-pixel point back to a geographic position.
    fn unproject(&self, point: ScreenPoint) -> Position;
}
