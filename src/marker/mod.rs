pub mod midpoint;
pub mod vertex;

use serde_json::{json, Map, Value};

use crate::geometry::path::StructuralPath;
use crate::geometry::Position;

/// What a marker is, and the state that differs between the two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A handle placed exactly on an existing geometry coordinate.
    Vertex { selected: bool },
    /// A handle between two consecutive vertices, dragged to insert a
    /// new coordinate.
    Midpoint,
}

impl MarkerKind {
    /// The `meta` property value consuming renderers filter on.
    #[must_use]
    pub fn meta_name(self) -> &'static str {
        match self {
            MarkerKind::Vertex { .. } => "vertex",
            MarkerKind::Midpoint => "midpoint",
        }
    }
}

/// An interactive point handle emitted for a feature under edit.
///
/// Markers are transient: built fresh per call, returned in draw order
/// (which doubles as hit-test priority), never stored by the library.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Identifier of the feature being edited (`parent` in the output).
    pub feature_id: Option<String>,
    /// Where the handle sits, geographically.
    pub position: Position,
    /// The structural path of the coordinate this handle addresses. For a
    /// midpoint, the path of the vertex that closes its segment. `None` only
    /// for a bare `Point` feature traversed with no base path.
    pub path: Option<StructuralPath>,
    pub kind: MarkerKind,
}

impl Marker {
    /// Whether this marker is a vertex handle.
    #[must_use]
    pub fn is_vertex(&self) -> bool {
        matches!(self.kind, MarkerKind::Vertex { .. })
    }

    /// Whether this marker is a vertex handle flagged as selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        matches!(self.kind, MarkerKind::Vertex { selected: true })
    }

    /// Renders the marker as a GeoJSON point feature for the map style
    /// layer that draws editing handles.
    ///
    /// Properties carry the renderer vocabulary: `meta` (`"vertex"` or
    /// `"midpoint"`), `parent`, `coord_path`, `active` on vertices, and the
    /// interpolated `lng`/`lat` on midpoints.
    #[must_use]
    pub fn to_feature(&self) -> Value {
        let mut properties = Map::new();
        properties.insert("meta".into(), Value::String(self.kind.meta_name().into()));
        if let Some(id) = &self.feature_id {
            properties.insert("parent".into(), Value::String(id.clone()));
        }
        if let Some(path) = &self.path {
            properties.insert("coord_path".into(), Value::String(path.to_string()));
        }
        match self.kind {
            MarkerKind::Vertex { selected } => {
                properties.insert("active".into(), Value::Bool(selected));
            }
            MarkerKind::Midpoint => {
                properties.insert("lng".into(), json!(self.position.lng));
                properties.insert("lat".into(), json!(self.position.lat));
            }
        }
        json!({
            "type": "Feature",
            "properties": properties,
            "geometry": {
                "type": "Point",
                "coordinates": [self.position.lng, self.position.lat],
            },
        })
    }
}
