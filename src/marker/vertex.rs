use super::{Marker, MarkerKind};
use crate::geometry::path::StructuralPath;
use crate::geometry::Position;

/// Creates a vertex marker for one geometry coordinate.
#[must_use]
pub fn create_vertex(
    feature_id: Option<&str>,
    position: Position,
    path: Option<&StructuralPath>,
    selected: bool,
) -> Marker {
    Marker {
        feature_id: feature_id.map(str::to_owned),
        position,
        path: path.cloned(),
        kind: MarkerKind::Vertex { selected },
    }
}
