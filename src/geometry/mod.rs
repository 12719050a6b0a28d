pub mod path;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{GeoeditError, Result};

/// Geometry type names this library recognizes.
const GEOMETRY_TYPES: [&str; 6] = [
    "Point",
    "LineString",
    "Polygon",
    "MultiPoint",
    "MultiLineString",
    "MultiPolygon",
];

/// A geographic coordinate pair, `[lng, lat]` on the wire.
///
/// Equality is exact numeric equality of both ordinates, with no
/// floating-point tolerance. Closed-ring detection in the supplementary
/// point traversal relies on this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lng: f64,
    pub lat: f64,
}

impl Position {
    /// Creates a position from longitude and latitude.
    #[must_use]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.lng, self.lat).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct PositionVisitor;

        impl<'de> Visitor<'de> for PositionVisitor {
            type Value = Position;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a position array with at least two numeric ordinates")
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Position, A::Error> {
                let lng = seq
                    .next_element::<f64>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let lat = seq
                    .next_element::<f64>()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                // Drain any extra ordinates (altitude etc.); only the
                // horizontal pair participates in editing.
                while seq.next_element::<f64>()?.is_some() {}
                Ok(Position { lng, lat })
            }
        }

        deserializer.deserialize_seq(PositionVisitor)
    }
}

/// A GeoJSON geometry, tagged by `type` with `coordinates` shaped per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
    MultiPoint(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl Geometry {
    /// Parses a geometry from a GeoJSON value, validating type and shape.
    ///
    /// # Errors
    ///
    /// Returns [`GeoeditError::UnsupportedGeometryType`] for a `type` outside
    /// the recognized six, and [`GeoeditError::InvalidGeometry`] when the
    /// value is not an object, the `type` or `coordinates` member is missing,
    /// or the coordinate nesting does not match the declared type. Fails
    /// atomically: no partially parsed geometry is ever returned.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            GeoeditError::InvalidGeometry("geometry must be a JSON object".into())
        })?;
        let kind = object.get("type").and_then(Value::as_str).ok_or_else(|| {
            GeoeditError::InvalidGeometry("geometry has no \"type\" member".into())
        })?;
        if !GEOMETRY_TYPES.contains(&kind) {
            return Err(GeoeditError::UnsupportedGeometryType(kind.into()));
        }
        let coordinates = object.get("coordinates").ok_or_else(|| {
            GeoeditError::InvalidGeometry(format!("{kind} geometry has no \"coordinates\" member"))
        })?;
        // Re-tag with only the members the enum representation knows, so
        // foreign members like "bbox" do not trip the deserializer.
        let tagged = serde_json::json!({ "type": kind, "coordinates": coordinates });
        serde_json::from_value(tagged).map_err(|err| {
            GeoeditError::InvalidGeometry(format!("malformed {kind} coordinates: {err}"))
        })
    }

    /// The GeoJSON type name of this geometry.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

/// A GeoJSON feature: a geometry plus an optional properties object.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    /// Creates a feature with no properties.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: None,
        }
    }

    /// Parses a feature from a GeoJSON value, validating the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`GeoeditError::InvalidFeature`] when the value is not an
    /// object tagged `"type": "Feature"` with a geometry member and
    /// object-or-null properties, and propagates [`Geometry::from_value`]
    /// errors for the geometry itself.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            GeoeditError::InvalidFeature("feature must be a JSON object".into())
        })?;
        match object.get("type").and_then(Value::as_str) {
            Some("Feature") => {}
            other => {
                return Err(GeoeditError::InvalidFeature(format!(
                    "expected \"type\": \"Feature\", got {other:?}"
                )))
            }
        }
        let geometry_value = object.get("geometry").ok_or_else(|| {
            GeoeditError::InvalidFeature("feature has no \"geometry\" member".into())
        })?;
        let geometry = Geometry::from_value(geometry_value)?;
        let properties = match object.get("properties") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map.clone()),
            Some(_) => {
                return Err(GeoeditError::InvalidFeature(
                    "feature properties must be an object or null".into(),
                ))
            }
        };
        Ok(Self {
            geometry,
            properties,
        })
    }

    /// The feature's identifier, read from `properties.id`.
    ///
    /// String and numeric ids are both accepted; numbers are rendered to
    /// their decimal string form.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.properties.as_ref()?.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
