use super::{Marker, MarkerKind};
use crate::geometry::Position;
use crate::projection::ScreenProjection;

/// Highest latitude a Web-Mercator map renders; beyond it no midpoint can
/// be placed on screen.
pub const LAT_RENDERED_MAX: f64 = 85.051_129;

/// Creates a midpoint marker between two consecutive vertex markers.
///
/// With a map view context the midpoint is interpolated in screen space
/// (project both endpoints, average the pixels, unproject); without one it
/// is the geographic mean. Returns `None` when either endpoint lies beyond
/// the renderable latitude range. The marker carries the closing vertex's
/// structural path, which is where a drag-inserted coordinate would land.
#[must_use]
pub fn create_midpoint(
    feature_id: Option<&str>,
    start: &Marker,
    end: &Marker,
    map: Option<&dyn ScreenProjection>,
) -> Option<Marker> {
    if start.position.lat.abs() > LAT_RENDERED_MAX || end.position.lat.abs() > LAT_RENDERED_MAX {
        return None;
    }

    let position = match map {
        Some(map) => {
            let a = map.project(start.position);
            let b = map.project(end.position);
            map.unproject(nalgebra::center(&a, &b))
        }
        None => Position::new(
            (start.position.lng + end.position.lng) / 2.0,
            (start.position.lat + end.position.lat) / 2.0,
        ),
    };

    Some(Marker {
        feature_id: feature_id.map(str::to_owned),
        position,
        path: end.path.clone(),
        kind: MarkerKind::Midpoint,
    })
}
