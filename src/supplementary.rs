//! Supplementary point generation: the editable vertex and midpoint
//! handles shown for a feature's geometry while it is being edited.

use crate::geometry::path::StructuralPath;
use crate::geometry::{Feature, Geometry, Position};
use crate::marker::midpoint::create_midpoint;
use crate::marker::vertex::create_vertex;
use crate::marker::Marker;
use crate::projection::ScreenProjection;

/// Options controlling supplementary point generation.
#[derive(Default)]
pub struct Options<'a> {
    /// Emit a midpoint marker between each pair of consecutive vertices.
    pub midpoints: bool,
    /// Paths whose vertex markers are flagged as selected.
    pub selected_paths: Vec<StructuralPath>,
    /// Map view context used to position midpoints in screen space.
    pub map: Option<&'a dyn ScreenProjection>,
}

impl Options<'_> {
    fn is_selected(&self, path: Option<&StructuralPath>) -> bool {
        path.is_some_and(|p| self.selected_paths.contains(p))
    }
}

/// Generates the supplementary points for a feature's geometry: one vertex
/// marker per coordinate, interleaved with midpoint markers when enabled.
///
/// `base_path` is supplied by the recursive multi-geometry decomposition and
/// is `None` at the outermost call. Output order is draw order and must be
/// preserved by consumers.
#[must_use]
pub fn create_supplementary_points(
    feature: &Feature,
    options: &Options,
    base_path: Option<&StructuralPath>,
) -> Vec<Marker> {
    let feature_id = feature.id();
    let feature_id = feature_id.as_deref();

    match &feature.geometry {
        Geometry::Point(position) => {
            vec![create_vertex(
                feature_id,
                *position,
                base_path,
                options.is_selected(base_path),
            )]
        }
        Geometry::LineString(line) => process_line(feature_id, line, base_path, options),
        Geometry::Polygon(rings) => {
            let mut points = Vec::new();
            for (ring_index, ring) in rings.iter().enumerate() {
                let ring_path = child_path(base_path, ring_index);
                points.extend(process_line(feature_id, ring, Some(&ring_path), options));
            }
            points
        }
        Geometry::MultiPoint(blocks) => {
            process_multi(feature, options, blocks.iter().map(|p| Geometry::Point(*p)))
        }
        Geometry::MultiLineString(blocks) => process_multi(
            feature,
            options,
            blocks.iter().cloned().map(Geometry::LineString),
        ),
        Geometry::MultiPolygon(blocks) => process_multi(
            feature,
            options,
            blocks.iter().cloned().map(Geometry::Polygon),
        ),
    }
}

/// Walks one line or ring and returns its markers in draw order.
///
/// A closed ring repeats its first position at the end; the repeated
/// position still closes a midpoint segment but gets no second vertex.
/// Duplicate detection compares coordinate values exactly, never paths,
/// and the suppressed vertex still seeds the next segment's midpoint.
fn process_line(
    feature_id: Option<&str>,
    line: &[Position],
    line_base_path: Option<&StructuralPath>,
    options: &Options,
) -> Vec<Marker> {
    let mut points = Vec::with_capacity(if options.midpoints {
        line.len().saturating_mul(2)
    } else {
        line.len()
    });
    let mut first_point: Option<Position> = None;
    let mut last_vertex: Option<Marker> = None;

    for (point_index, &point) in line.iter().enumerate() {
        let point_path = child_path(line_base_path, point_index);
        let vertex = create_vertex(
            feature_id,
            point,
            Some(&point_path),
            options.is_selected(Some(&point_path)),
        );

        if options.midpoints {
            if let Some(last) = &last_vertex {
                if let Some(midpoint) = create_midpoint(feature_id, last, &vertex, options.map) {
                    points.push(midpoint);
                }
            }
        }

        let duplicates_first = first_point.is_some_and(|first| first == point);
        if !duplicates_first {
            points.push(vertex.clone());
        }
        if point_index == 0 {
            first_point = Some(point);
        }
        last_vertex = Some(vertex);
    }

    points
}

/// Splits a multi-geometry into constituent features and accumulates each
/// constituent's markers, re-rooting paths at the constituent's index.
fn process_multi<I>(feature: &Feature, options: &Options, constituents: I) -> Vec<Marker>
where
    I: Iterator<Item = Geometry>,
{
    let mut points = Vec::new();
    for (index, geometry) in constituents.enumerate() {
        let sub_feature = Feature {
            geometry,
            properties: feature.properties.clone(),
        };
        let sub_path = StructuralPath::root(index);
        points.extend(create_supplementary_points(
            &sub_feature,
            options,
            Some(&sub_path),
        ));
    }
    points
}

fn child_path(base: Option<&StructuralPath>, index: usize) -> StructuralPath {
    match base {
        Some(base) => base.child(index),
        None => StructuralPath::root(index),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::marker::MarkerKind;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn feature(geometry_json: serde_json::Value) -> Feature {
        Feature::from_value(&json!({
            "type": "Feature",
            "properties": { "id": "feat" },
            "geometry": geometry_json,
        }))
        .unwrap()
    }

    fn path_of(marker: &Marker) -> String {
        marker.path.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn point_emits_single_vertex_at_base_path() {
        let feature = feature(json!({ "type": "Point", "coordinates": [10.0, 20.0] }));
        let base = StructuralPath::root(1);
        let markers =
            create_supplementary_points(&feature, &Options::default(), Some(&base));
        assert_eq!(markers.len(), 1);
        assert!(markers[0].is_vertex());
        assert_eq!(markers[0].path.as_ref(), Some(&base));
        assert_eq!(markers[0].feature_id.as_deref(), Some("feat"));
    }

    #[test]
    fn bare_point_has_no_path() {
        let feature = feature(json!({ "type": "Point", "coordinates": [10.0, 20.0] }));
        let markers = create_supplementary_points(&feature, &Options::default(), None);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].path, None);
        assert!(!markers[0].is_selected());
    }

    #[test]
    fn line_string_vertices_in_input_order() {
        let feature = feature(json!({
            "type": "LineString",
            "coordinates": [[0.0, 0.0], [1.0, 0.0], [2.0, 1.0], [3.0, 3.0]],
        }));
        let markers = create_supplementary_points(&feature, &Options::default(), None);
        assert_eq!(markers.len(), 4);
        let paths: Vec<String> = markers.iter().map(path_of).collect();
        assert_eq!(paths, ["0", "1", "2", "3"]);
        assert_relative_eq!(markers[2].position.lng, 2.0);
        assert!(markers.iter().all(Marker::is_vertex));
    }

    #[test]
    fn line_string_midpoints_alternate() {
        let feature = feature(json!({
            "type": "LineString",
            "coordinates": [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [4.0, 2.0]],
        }));
        let options = Options {
            midpoints: true,
            ..Options::default()
        };
        let markers = create_supplementary_points(&feature, &options, None);
        assert_eq!(markers.len(), 7);
        for (i, marker) in markers.iter().enumerate() {
            if i % 2 == 0 {
                assert!(marker.is_vertex(), "marker {i} should be a vertex");
            } else {
                assert_eq!(marker.kind, MarkerKind::Midpoint, "marker {i}");
            }
        }
        // First midpoint halves the first segment.
        assert_relative_eq!(markers[1].position.lng, 1.0);
        assert_relative_eq!(markers[1].position.lat, 0.0);
    }

    #[test]
    fn closed_ring_suppresses_trailing_vertex() {
        let feature = feature(json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]]],
        }));
        let markers = create_supplementary_points(&feature, &Options::default(), None);
        assert_eq!(markers.len(), 3);
        let paths: Vec<String> = markers.iter().map(path_of).collect();
        assert_eq!(paths, ["0.0", "0.1", "0.2"]);
    }

    #[test]
    fn closed_ring_midpoints_wrap_around() {
        let feature = feature(json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]]],
        }));
        let options = Options {
            midpoints: true,
            ..Options::default()
        };
        let markers = create_supplementary_points(&feature, &options, None);
        // A, mid(A,B), B, mid(B,C), C, mid(C,A).
        assert_eq!(markers.len(), 6);
        let kinds: Vec<bool> = markers.iter().map(Marker::is_vertex).collect();
        assert_eq!(kinds, [true, false, true, false, true, false]);
        // The closing midpoint interpolates C back to A and carries the
        // suppressed closing coordinate's path.
        let closing = &markers[5];
        assert_relative_eq!(closing.position.lng, 2.0);
        assert_relative_eq!(closing.position.lat, 2.0);
        assert_eq!(path_of(closing), "0.3");
    }

    #[test]
    fn ring_with_degenerate_leading_segment() {
        // First two positions coincide: only duplicates of the *first*
        // recorded point are suppressed, so A appears once and B once.
        let feature = feature(json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
        }));
        let markers = create_supplementary_points(&feature, &Options::default(), None);
        assert_eq!(markers.len(), 2);
        let paths: Vec<String> = markers.iter().map(path_of).collect();
        assert_eq!(paths, ["0.0", "0.2"]);
    }

    #[test]
    fn polygon_second_ring_paths() {
        let feature = feature(json!({
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [8.0, 0.0], [8.0, 8.0], [0.0, 0.0]],
                [[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]],
            ],
        }));
        let markers = create_supplementary_points(&feature, &Options::default(), None);
        assert_eq!(markers.len(), 6);
        let paths: Vec<String> = markers.iter().map(path_of).collect();
        assert_eq!(paths, ["0.0", "0.1", "0.2", "1.0", "1.1", "1.2"]);
    }

    #[test]
    fn multi_polygon_concatenates_constituents() {
        let first = json!([[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]]]);
        let second = json!([[[10.0, 10.0], [14.0, 10.0], [14.0, 14.0], [10.0, 10.0]]]);
        let multi = feature(json!({
            "type": "MultiPolygon",
            "coordinates": [first.clone(), second.clone()],
        }));
        let options = Options::default();
        let combined = create_supplementary_points(&multi, &options, None);

        let mut expected = Vec::new();
        for (index, coordinates) in [first, second].into_iter().enumerate() {
            let sub = feature(json!({ "type": "Polygon", "coordinates": coordinates }));
            let base = StructuralPath::root(index);
            expected.extend(create_supplementary_points(&sub, &options, Some(&base)));
        }
        assert_eq!(combined, expected);

        let paths: Vec<String> = combined.iter().map(path_of).collect();
        assert_eq!(paths, ["0.0.0", "0.0.1", "0.0.2", "1.0.0", "1.0.1", "1.0.2"]);
    }

    #[test]
    fn multi_geometry_propagates_feature_id() {
        let feature = feature(json!({
            "type": "MultiPoint",
            "coordinates": [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]],
        }));
        let markers = create_supplementary_points(&feature, &Options::default(), None);
        assert_eq!(markers.len(), 3);
        let paths: Vec<String> = markers.iter().map(path_of).collect();
        assert_eq!(paths, ["0", "1", "2"]);
        assert!(markers
            .iter()
            .all(|m| m.feature_id.as_deref() == Some("feat")));
    }

    #[test]
    fn selected_paths_flag_matching_vertices_only() {
        let feature = feature(json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]]],
        }));
        let options = Options {
            selected_paths: vec!["0.1".parse().unwrap()],
            ..Options::default()
        };
        let markers = create_supplementary_points(&feature, &options, None);
        let selected: Vec<String> = markers
            .iter()
            .filter(|m| m.is_selected())
            .map(path_of)
            .collect();
        assert_eq!(selected, ["0.1"]);
    }

    #[test]
    fn empty_line_emits_nothing() {
        let feature = feature(json!({ "type": "LineString", "coordinates": [] }));
        let options = Options {
            midpoints: true,
            ..Options::default()
        };
        assert!(create_supplementary_points(&feature, &options, None).is_empty());
    }

    #[test]
    fn single_point_line_has_no_midpoint() {
        let feature = feature(json!({
            "type": "LineString",
            "coordinates": [[7.0, 7.0]],
        }));
        let options = Options {
            midpoints: true,
            ..Options::default()
        };
        let markers = create_supplementary_points(&feature, &options, None);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].is_vertex());
    }

    #[test]
    fn near_equal_coordinates_are_not_suppressed() {
        // Exact value equality only: a ring "closed" with a coordinate that
        // differs in the last ulp keeps its trailing vertex.
        let almost = 1.0 + f64::EPSILON;
        let feature = feature(json!({
            "type": "Polygon",
            "coordinates": [[[1.0, 1.0], [4.0, 1.0], [4.0, 4.0], [almost, 1.0]]],
        }));
        let markers = create_supplementary_points(&feature, &Options::default(), None);
        assert_eq!(markers.len(), 4);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let feature = feature(json!({
            "type": "MultiLineString",
            "coordinates": [
                [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]],
                [[5.0, 5.0], [6.0, 6.0]],
            ],
        }));
        let options = Options {
            midpoints: true,
            selected_paths: vec!["1.0".parse().unwrap()],
            ..Options::default()
        };
        let first = create_supplementary_points(&feature, &options, None);
        let second = create_supplementary_points(&feature, &options, None);
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }
}
