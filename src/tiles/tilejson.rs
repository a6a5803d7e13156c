use crate::core::constants::TILEJSON_VERSION;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{error::Category, Map, Value};
use std::str::FromStr;

/// TileJSON fields that are recognized but not supported. They are dropped
/// instead of being treated as template variables.
pub const UNSUPPORTED_FIELDS: &[&str] = &[
    "id",
    "template",
    "legend",
    "grids",
    "data",
    "fillzoom",
    "vector_layers",
];

/// Members [`TileJson`] maps to its own fields.
pub const TILEJSON_FIELDS: &[&str] = &[
    "tilejson",
    "name",
    "description",
    "version",
    "attribution",
    "scheme",
    "tiles",
    "minzoom",
    "maxzoom",
    "bounds",
    "center",
];

/// Whether `name` is a TileJSON member and so cannot carry a template variable.
pub fn is_reserved_field(name: &str) -> bool {
    TILEJSON_FIELDS.contains(&name) || UNSUPPORTED_FIELDS.contains(&name)
}

/// TileJSON 2.1.0 document, limited to the fields a raster tile provider uses.
///
/// Unrecognized top-level members are kept in `extra`.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TileJson {
    /// Version of the TileJSON spec implemented by this document.
    #[serde(default = "default_tilejson_version")]
    pub tilejson: String,

    /// A name describing the tileset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A text description of the tileset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A semver.org style version number of the tiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Attribution to be displayed when the map is shown to a user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,

    /// Either "xyz" or "tms". Influences the y direction of the tile coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// An array of tile endpoints. MUST contain at least one endpoint.
    #[serde(default)]
    pub tiles: Vec<String>,

    /// An integer specifying the minimum zoom level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<u8>,

    /// An integer specifying the maximum zoom level. MUST be >= minzoom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<u8>,

    /// WGS:84 extent in the order left, bottom, right, top.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Vec<f64>>,

    /// Longitude, latitude and zoom of the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<f64>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_tilejson_version() -> String {
    TILEJSON_VERSION.to_string()
}

/// Shape errors become configuration errors; syntax and I/O errors stay serialization errors.
fn parse_error(err: serde_json::Error) -> MapError {
    match err.classify() {
        Category::Data => MapError::Configuration(format!("malformed TileJSON: {}", err)),
        _ => MapError::Serialization(err),
    }
}

impl TileJson {
    pub fn new<I, S>(tiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tilejson: default_tilejson_version(),
            name: None,
            description: None,
            version: None,
            attribution: None,
            scheme: None,
            tiles: tiles.into_iter().map(Into::into).collect(),
            minzoom: None,
            maxzoom: None,
            bounds: None,
            center: None,
            extra: Map::new(),
        }
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        TileJson::deserialize(value).map_err(parse_error)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// String-valued extra members, usable as template variables.
    ///
    /// Unsupported TileJSON fields and non-string values are skipped.
    pub fn template_variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra.iter().filter_map(|(key, value)| {
            if UNSUPPORTED_FIELDS.contains(&key.as_str()) {
                #[cfg(feature = "debug")]
                log::debug!("Dropping unsupported TileJSON field `{}`", key);
                return None;
            }
            value.as_str().map(|value| (key.as_str(), value))
        })
    }
}

impl FromStr for TileJson {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(parse_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reading() {
        // language=JSON
        let tilejson_str = r#"
        {
            "tilejson": "2.1.0",
            "attribution": "",
            "name": "compositing",
            "scheme": "tms",
            "tiles": [
                "http://localhost:8888/admin/1.0.0/world-light,broadband/{z}/{x}/{y}.png"
            ],
            "bounds": [-180, -85.0511, 180, 85.0511],
            "center": [0, 0, 2]
        }
        "#;

        let tilejson: TileJson = tilejson_str.parse().unwrap();

        assert_eq!(tilejson.tilejson, "2.1.0");
        assert_eq!(tilejson.name.as_deref(), Some("compositing"));
        assert_eq!(tilejson.attribution.as_deref(), Some(""));
        assert_eq!(tilejson.scheme.as_deref(), Some("tms"));
        assert_eq!(tilejson.tiles.len(), 1);
        assert_eq!(tilejson.bounds, Some(vec![-180.0, -85.0511, 180.0, 85.0511]));
        assert_eq!(tilejson.center, Some(vec![0.0, 0.0, 2.0]));
        assert!(tilejson.extra.is_empty());
    }

    #[test]
    fn test_version_defaults() {
        let tilejson = TileJson::from_value(&json!({ "tiles": ["a/{z}"] })).unwrap();
        assert_eq!(tilejson.tilejson, TILEJSON_VERSION);
    }

    #[test]
    fn test_wrong_types_are_configuration_errors() {
        for doc in [
            json!({ "tiles": ["a/{z}"], "minzoom": "three" }),
            json!({ "tiles": ["a/{z}"], "maxzoom": -1 }),
            json!({ "tiles": "a/{z}" }),
            json!({ "tiles": ["a/{z}"], "bounds": "world" }),
            json!(["a/{z}"]),
        ] {
            assert!(
                matches!(TileJson::from_value(&doc), Err(MapError::Configuration(_))),
                "{} should be rejected",
                doc
            );
        }
    }

    #[test]
    fn test_syntax_errors_are_serialization_errors() {
        assert!(matches!(
            "{ \"tiles\": [".parse::<TileJson>(),
            Err(MapError::Serialization(_))
        ));
    }

    #[test]
    fn test_template_variables() {
        let tilejson = TileJson::from_value(&json!({
            "tiles": ["https://x/{z}/{x}/{y}.png?access_token={access_token}"],
            "access_token": "secret",
            "grids": ["https://x/{z}/{x}/{y}.grid.json"],
            "template": "{{name}}",
            "ratio": 2,
        }))
        .unwrap();

        let variables: Vec<_> = tilejson.template_variables().collect();
        assert_eq!(variables, vec![("access_token", "secret")]);
    }

    #[test]
    fn test_reserved_fields() {
        assert!(is_reserved_field("tiles"));
        assert!(is_reserved_field("name"));
        assert!(is_reserved_field("id"));
        assert!(is_reserved_field("vector_layers"));
        assert!(!is_reserved_field("access_token"));
        assert!(!is_reserved_field("x"));
    }

    #[test]
    fn test_writing_skips_absent_fields() {
        let value = TileJson::new(["a/{z}/{x}/{y}"]).to_value().unwrap();
        assert_eq!(value, json!({ "tilejson": "2.1.0", "tiles": ["a/{z}/{x}/{y}"] }));
    }
}
