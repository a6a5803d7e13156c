//! Configured map tile providers.
//!
//! A [`MapTileProvider`] is built once, either through
//! [`MapTileProviderBuilder`] or from a TileJSON document, and is immutable
//! afterwards. All of its operations take `&self`.

use crate::{
    core::{
        constants::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_TILE_SIZE, MAX_TILE_ZOOM},
        geo::{LatLng, LatLngBounds, TileCoordinate},
    },
    prelude::{Arc, HashMap},
    projection::{default_projection, Projection},
    tiles::{
        key::{TileKey, TileScheme},
        resolver::{NoExtraValues, TemplateValueResolver},
        source::TileSource,
        template::{TemplateValues, UriTemplateSet},
        tilejson::{is_reserved_field, TileJson},
    },
    MapError, Result,
};
use serde_json::Value;
use std::fmt;

/// Identity of a template set: the fxhash of the sorted templates joined by
/// newlines, as 16 hex digits.
pub fn provider_id<S: AsRef<str>>(templates: &[S]) -> String {
    let mut sorted: Vec<&str> = templates.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    format!("{:016x}", fxhash::hash64(&sorted.join("\n")))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CenterSpec {
    Location(LatLng, f64),
    Tile(TileCoordinate),
}

/// A tile provider with templated endpoints and TileJSON metadata.
#[derive(Clone)]
pub struct MapTileProvider {
    id: String,
    name: String,
    description: String,
    attribution: String,
    version: String,
    min_zoom: u8,
    max_zoom: u8,
    tile_width: u32,
    tile_height: u32,
    bounds: LatLngBounds,
    center_location: LatLng,
    center_zoom: f64,
    scheme: TileScheme,
    projection: Arc<dyn Projection>,
    templates: UriTemplateSet,
    dictionary: HashMap<String, String>,
    resolver: Arc<dyn TemplateValueResolver>,
    cacheable: bool,
}

impl MapTileProvider {
    /// Create a provider from explicit parameters
    #[allow(clippy::too_many_arguments)]
    pub fn new<S: Into<String>>(
        uri_templates: Vec<S>,
        min_zoom: u8,
        max_zoom: u8,
        tile_width: u32,
        tile_height: u32,
        bounds: LatLngBounds,
        center: TileCoordinate,
        projection: Arc<dyn Projection>,
    ) -> Result<Self> {
        MapTileProviderBuilder::new(uri_templates)
            .with_zoom_range(min_zoom, max_zoom)
            .with_tile_size(tile_width, tile_height)
            .with_bounds(bounds)
            .with_center(center)
            .with_projection(projection)
            .build()
    }

    pub fn builder<I, S>(uri_templates: I) -> MapTileProviderBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MapTileProviderBuilder::new(uri_templates)
    }

    /// Parses a TileJSON 2.1.0 document using the default projection.
    ///
    /// Not all TileJSON features are supported; see [`MapTileProviderBuilder::from_tilejson`].
    pub fn from_json(json: &Value) -> Result<Self> {
        MapTileProviderBuilder::from_tilejson(&TileJson::from_value(json)?)?.build()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        MapTileProviderBuilder::from_tilejson(&json.parse::<TileJson>()?)?.build()
    }

    /// Exports the provider as a TileJSON 2.1.0 document.
    ///
    /// The projection, resolver and tile size are not part of the format.
    pub fn to_tilejson(&self) -> TileJson {
        let mut doc = TileJson::new(self.uri_templates());
        doc.name = Some(self.name.clone());
        doc.description = Some(self.description.clone());
        doc.version = Some(self.version.clone());
        doc.attribution = Some(self.attribution.clone());
        doc.scheme = Some(self.scheme.as_str().to_string());
        doc.minzoom = Some(self.min_zoom);
        doc.maxzoom = Some(self.max_zoom);
        doc.bounds = Some(self.bounds.to_tilejson_array().to_vec());
        doc.center = Some(vec![
            self.center_location.lng,
            self.center_location.lat,
            self.center_zoom,
        ]);

        let mut variables: Vec<_> = self.dictionary.iter().collect();
        variables.sort();
        for (key, value) in variables {
            doc.extra.insert(key.clone(), Value::String(value.clone()));
        }
        doc
    }

    pub fn to_json(&self) -> Result<Value> {
        self.to_tilejson().to_value()
    }

    /// Unique ID derived from the URI templates
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    pub fn bounds(&self) -> &LatLngBounds {
        &self.bounds
    }

    /// The initial center in tile space at the center zoom
    pub fn center(&self) -> TileCoordinate {
        self.projection
            .geo_to_world(&self.center_location)
            .zoom_to(self.center_zoom)
    }

    pub fn center_location(&self) -> LatLng {
        self.center_location
    }

    pub fn center_zoom(&self) -> f64 {
        self.center_zoom
    }

    pub fn scheme(&self) -> TileScheme {
        self.scheme
    }

    pub fn projection(&self) -> &Arc<dyn Projection> {
        &self.projection
    }

    pub fn templates(&self) -> &UriTemplateSet {
        &self.templates
    }

    /// The URI templates, in configuration order
    pub fn uri_templates(&self) -> Vec<String> {
        self.templates.raw()
    }

    /// Placeholder names of each URI template
    pub fn template_parameters(&self) -> Vec<&[String]> {
        self.templates.parameters()
    }

    /// Name-value pairs available to the URI templates
    pub fn dictionary(&self) -> &HashMap<String, String> {
        &self.dictionary
    }

    pub fn zoom_for_scale(&self, scale: f64) -> f64 {
        self.projection.zoom_for_scale(scale)
    }

    pub fn geo_to_world(&self, location: &LatLng) -> TileCoordinate {
        self.projection.geo_to_world(location)
    }

    pub fn tile_to_geo(&self, coordinate: &TileCoordinate) -> LatLng {
        self.projection.tile_to_geo(coordinate)
    }

    /// Clamps a zoom level into `[min_zoom, max_zoom]`
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// The key of the tile containing `location`, with `zoom` clamped to the provider's range
    pub fn tile_key_for(&self, location: &LatLng, zoom: u8) -> TileKey {
        self.geo_to_world(location).to_tile_key(self.clamp_zoom(zoom))
    }

    /// Builds the request URI for `key` using the configured resolver
    pub fn tile_uri(&self, key: &TileKey) -> Result<String> {
        self.tile_uri_with(key, self.resolver.as_ref())
    }

    /// Builds the request URI for `key`, asking `resolver` for parameters
    /// the built-in variables and the dictionary cannot supply
    pub fn tile_uri_with(
        &self,
        key: &TileKey,
        resolver: &dyn TemplateValueResolver,
    ) -> Result<String> {
        let values = TemplateValues {
            scheme: self.scheme,
            dictionary: &self.dictionary,
            resolver,
        };
        self.templates.expand(key, &values)
    }

    /// Builds URIs for several keys, stopping at the first failure
    pub fn tile_uris<'a, I>(&self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = &'a TileKey>,
    {
        keys.into_iter().map(|key| self.tile_uri(key)).collect()
    }

    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }
}

impl TileSource for MapTileProvider {
    fn tile_uri(&self, key: &TileKey) -> Result<String> {
        MapTileProvider::tile_uri(self, key)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    fn is_cacheable(&self) -> bool {
        self.cacheable
    }
}

impl fmt::Debug for MapTileProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapTileProvider")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("min_zoom", &self.min_zoom)
            .field("max_zoom", &self.max_zoom)
            .field("bounds", &self.bounds)
            .field("scheme", &self.scheme)
            .field("projection", &self.projection.name())
            .field("templates", &self.templates)
            .field("cacheable", &self.cacheable)
            .finish_non_exhaustive()
    }
}

/// Builder for creating and configuring MapTileProvider instances
pub struct MapTileProviderBuilder {
    templates: Vec<String>,
    name: String,
    description: String,
    attribution: String,
    version: String,
    min_zoom: u8,
    max_zoom: u8,
    tile_width: u32,
    tile_height: u32,
    bounds: LatLngBounds,
    center: CenterSpec,
    scheme: TileScheme,
    projection: Arc<dyn Projection>,
    dictionary: HashMap<String, String>,
    resolver: Arc<dyn TemplateValueResolver>,
    cacheable: bool,
}

impl MapTileProviderBuilder {
    /// Create a new builder with default settings
    pub fn new<I, S>(uri_templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            templates: uri_templates.into_iter().map(Into::into).collect(),
            name: String::new(),
            description: String::new(),
            attribution: String::new(),
            version: String::new(),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            bounds: LatLngBounds::world(),
            center: CenterSpec::Tile(TileCoordinate::default()),
            scheme: TileScheme::default(),
            projection: default_projection(),
            dictionary: HashMap::default(),
            resolver: Arc::new(NoExtraValues),
            cacheable: true,
        }
    }

    /// Seeds a builder from a TileJSON document.
    ///
    /// Honors `tiles`, `name`, `description`, `attribution`, `version`,
    /// `scheme`, `minzoom`, `maxzoom`, `bounds` and `center`. Other
    /// string-valued members become template variables.
    pub fn from_tilejson(doc: &TileJson) -> Result<Self> {
        let mut builder = Self::new(doc.tiles.iter().cloned());

        if let Some(name) = &doc.name {
            builder = builder.with_name(name.clone());
        }
        if let Some(description) = &doc.description {
            builder = builder.with_description(description.clone());
        }
        if let Some(attribution) = &doc.attribution {
            builder = builder.with_attribution(attribution.clone());
        }
        if let Some(version) = &doc.version {
            builder = builder.with_version(version.clone());
        }
        if let Some(scheme) = &doc.scheme {
            let scheme = TileScheme::parse(scheme).ok_or_else(|| {
                reject(format!("unknown tile scheme `{}`", scheme))
            })?;
            builder = builder.with_scheme(scheme);
        }
        if let Some(min_zoom) = doc.minzoom {
            builder = builder.with_min_zoom(min_zoom);
        }
        if let Some(max_zoom) = doc.maxzoom {
            builder = builder.with_max_zoom(max_zoom);
        }
        if let Some(bounds) = &doc.bounds {
            let bounds = LatLngBounds::from_tilejson_array(bounds).ok_or_else(|| {
                reject(format!(
                    "bounds must be [west, south, east, north], got {} values",
                    bounds.len()
                ))
            })?;
            builder = builder.with_bounds(bounds);
        }
        if let Some(center) = &doc.center {
            let (location, zoom) = match center.as_slice() {
                [lng, lat] => (LatLng::new(*lat, *lng), 0.0),
                [lng, lat, zoom] => (LatLng::new(*lat, *lng), *zoom),
                _ => {
                    return Err(reject(format!(
                        "center must be [lon, lat] or [lon, lat, zoom], got {} values",
                        center.len()
                    )))
                }
            };
            builder = builder.with_center_location(location, zoom);
        }
        for (key, value) in doc.template_variables() {
            builder = builder.with_value(key, value);
        }

        Ok(builder)
    }

    pub fn with_templates<I, S>(mut self, uri_templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates = uri_templates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_min_zoom(mut self, min_zoom: u8) -> Self {
        self.min_zoom = min_zoom;
        self
    }

    pub fn with_max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_zoom_range(self, min_zoom: u8, max_zoom: u8) -> Self {
        self.with_min_zoom(min_zoom).with_max_zoom(max_zoom)
    }

    pub fn with_tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    pub fn with_bounds(mut self, bounds: LatLngBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the initial center in tile space; converted with the final projection
    pub fn with_center(mut self, center: TileCoordinate) -> Self {
        self.center = CenterSpec::Tile(center);
        self
    }

    /// Set the initial center as a location and zoom level
    pub fn with_center_location(mut self, location: LatLng, zoom: f64) -> Self {
        self.center = CenterSpec::Location(location, zoom);
        self
    }

    pub fn with_scheme(mut self, scheme: TileScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_projection(mut self, projection: Arc<dyn Projection>) -> Self {
        self.projection = projection;
        self
    }

    /// Add a template variable, e.g. an API key.
    ///
    /// TileJSON member names (`name`, `tiles`, `id`, ...) are rejected by [`Self::build`].
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dictionary.insert(key.into(), value.into());
        self
    }

    pub fn with_dictionary(mut self, dictionary: HashMap<String, String>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Set the resolver for parameters beyond the built-ins and the dictionary
    pub fn with_resolver<R>(mut self, resolver: R) -> Self
    where
        R: TemplateValueResolver + 'static,
    {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Mark tiles as generated on the fly and never to be persisted
    pub fn with_cacheable(mut self, cacheable: bool) -> Self {
        self.cacheable = cacheable;
        self
    }

    /// Validate the configuration and build the provider
    pub fn build(self) -> Result<MapTileProvider> {
        let templates = UriTemplateSet::new(self.templates).map_err(|e| {
            #[cfg(feature = "debug")]
            log::warn!("Rejecting tile provider: {}", e);
            e
        })?;

        if self.min_zoom > self.max_zoom {
            return Err(reject(format!(
                "minzoom {} is greater than maxzoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.max_zoom > MAX_TILE_ZOOM {
            return Err(reject(format!(
                "maxzoom {} exceeds the deepest zoom level {}",
                self.max_zoom, MAX_TILE_ZOOM
            )));
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(reject(format!(
                "tile size {}x{} must be positive",
                self.tile_width, self.tile_height
            )));
        }
        if !self.bounds.is_valid() {
            return Err(reject(format!("invalid bounds {:?}", self.bounds)));
        }

        let mut reserved: Vec<&str> = self
            .dictionary
            .keys()
            .map(String::as_str)
            .filter(|name| is_reserved_field(name))
            .collect();
        if !reserved.is_empty() {
            reserved.sort_unstable();
            return Err(reject(format!(
                "template variables named after TileJSON members: {}",
                reserved.join(", ")
            )));
        }

        let (center_location, center_zoom) = match self.center {
            CenterSpec::Location(location, zoom) => (location, zoom),
            CenterSpec::Tile(coordinate) => {
                (self.projection.tile_to_geo(&coordinate), coordinate.zoom)
            }
        };
        if !center_location.is_valid() || !center_zoom.is_finite() {
            return Err(reject(format!(
                "invalid center {:?} at zoom {}",
                center_location, center_zoom
            )));
        }

        let id = provider_id(&templates.raw());

        #[cfg(feature = "debug")]
        log::debug!(
            "Built tile provider {} ({} template(s), zoom {}..={})",
            id,
            templates.len(),
            self.min_zoom,
            self.max_zoom
        );

        Ok(MapTileProvider {
            id,
            name: self.name,
            description: self.description,
            attribution: self.attribution,
            version: self.version,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            bounds: self.bounds,
            center_location,
            center_zoom,
            scheme: self.scheme,
            projection: self.projection,
            templates,
            dictionary: self.dictionary,
            resolver: self.resolver,
            cacheable: self.cacheable,
        })
    }
}

fn reject(reason: String) -> MapError {
    #[cfg(feature = "debug")]
    log::warn!("Rejecting tile provider: {}", reason);
    MapError::Configuration(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::EquirectangularProjection;
    use crate::tiles::resolver::Subdomains;
    use approx::assert_abs_diff_eq;

    const OSM: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

    #[test]
    fn test_defaults() {
        let provider = MapTileProvider::builder(["https://x/{z}/{x}/{y}.png"])
            .build()
            .unwrap();
        assert_eq!(provider.min_zoom(), DEFAULT_MIN_ZOOM);
        assert_eq!(provider.max_zoom(), DEFAULT_MAX_ZOOM);
        assert_eq!(provider.tile_size(), (256, 256));
        assert_eq!(provider.bounds(), &LatLngBounds::world());
        assert_eq!(provider.name(), "");
        assert_eq!(provider.scheme(), TileScheme::Xyz);
        assert!(provider.is_cacheable());

        let center = provider.center();
        assert_abs_diff_eq!(center.column, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(center.row, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(provider.center_location().lat, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_explicit_constructor() {
        let provider = MapTileProvider::new(
            vec!["https://x/{z}/{x}/{y}.png"],
            2,
            10,
            512,
            512,
            LatLngBounds::from_coords(-10.0, -20.0, 10.0, 20.0),
            TileCoordinate::new(2.0, 2.0, 2.0),
            default_projection(),
        )
        .unwrap();
        assert_eq!(provider.min_zoom(), 2);
        assert_eq!(provider.max_zoom(), 10);
        assert_eq!(provider.tile_width(), 512);
        assert_eq!(provider.tile_height(), 512);
        assert_eq!(provider.center_zoom(), 2.0);
        let center = provider.center();
        assert_abs_diff_eq!(center.column, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.row, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_concrete_uri() {
        let provider = MapTileProvider::builder(["https://{s}.tiles.test/{z}/{x}/{y}.png"])
            .build()
            .unwrap();
        let resolver = |_: &TileKey, name: &str| (name == "s").then(|| "a".to_string());
        let uri = provider
            .tile_uri_with(&TileKey::new(3, 5, 4), &resolver)
            .unwrap();
        assert_eq!(uri, "https://a.tiles.test/4/3/5.png");
    }

    #[test]
    fn test_configured_resolver() {
        let provider = MapTileProvider::builder([OSM])
            .with_resolver(Subdomains::default())
            .build()
            .unwrap();
        assert_eq!(
            provider.tile_uri(&TileKey::new(1, 0, 1)).unwrap(),
            "https://b.tile.openstreetmap.org/1/1/0.png"
        );
    }

    #[test]
    fn test_missing_resolver_value_fails() {
        let provider = MapTileProvider::builder([OSM]).build().unwrap();
        assert!(matches!(
            provider.tile_uri(&TileKey::new(0, 0, 0)),
            Err(MapError::TemplateResolution { .. })
        ));
    }

    #[test]
    fn test_dictionary_values() {
        let provider = MapTileProvider::builder(["https://x/{z}/{x}/{y}.png?key={api_key}"])
            .with_value("api_key", "abc123")
            .build()
            .unwrap();
        assert_eq!(
            provider.tile_uri(&TileKey::new(1, 2, 3)).unwrap(),
            "https://x/3/1/2.png?key=abc123"
        );
    }

    #[test]
    fn test_tms_scheme_flips_rows() {
        let provider = MapTileProvider::builder(["https://x/{z}/{x}/{y}.png"])
            .with_scheme(TileScheme::Tms)
            .build()
            .unwrap();
        assert_eq!(
            provider.tile_uri(&TileKey::new(3, 5, 4)).unwrap(),
            "https://x/4/3/10.png"
        );
    }

    #[test]
    fn test_id_depends_only_on_template_set() {
        let a = MapTileProvider::builder(["https://a/{z}/{x}/{y}", "https://b/{z}/{x}/{y}"])
            .with_name("first")
            .build()
            .unwrap();
        let b = MapTileProvider::builder(["https://b/{z}/{x}/{y}", "https://a/{z}/{x}/{y}"])
            .with_name("second")
            .build()
            .unwrap();
        let c = MapTileProvider::builder(["https://c/{z}/{x}/{y}"]).build().unwrap();

        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
        assert_eq!(a.id().len(), 16);
        assert_eq!(a.id(), provider_id(&["https://a/{z}/{x}/{y}", "https://b/{z}/{x}/{y}"]));
    }

    #[test]
    fn test_validation() {
        let templates = ["https://x/{z}/{x}/{y}.png"];
        let cases = [
            MapTileProvider::builder(Vec::<String>::new()).build(),
            MapTileProvider::builder(templates).with_zoom_range(10, 2).build(),
            MapTileProvider::builder(templates).with_max_zoom(31).build(),
            MapTileProvider::builder(templates).with_tile_size(0, 256).build(),
            MapTileProvider::builder(templates)
                .with_bounds(LatLngBounds::from_coords(10.0, 0.0, -10.0, 5.0))
                .build(),
            MapTileProvider::builder(templates)
                .with_center_location(LatLng::new(120.0, 0.0), 3.0)
                .build(),
            MapTileProvider::builder(templates).with_value("name", "layer").build(),
            MapTileProvider::builder(templates).with_value("tiles", "t").build(),
            MapTileProvider::builder(templates).with_value("id", "streets").build(),
        ];
        for result in cases {
            assert!(matches!(result, Err(MapError::Configuration(_))));
        }
    }

    #[test]
    fn test_zoom_helpers() {
        let provider = MapTileProvider::builder(["https://x/{z}/{x}/{y}.png"])
            .with_zoom_range(2, 10)
            .build()
            .unwrap();
        assert_eq!(provider.clamp_zoom(0), 2);
        assert_eq!(provider.clamp_zoom(14), 10);
        assert!(TileSource::supports_zoom(&provider, 5));
        assert!(!TileSource::supports_zoom(&provider, 11));

        let key = provider.tile_key_for(&LatLng::new(40.7128, -74.0060), 18);
        assert_eq!(key, TileKey::new(301, 385, 10));
    }

    #[test]
    fn test_projection_is_shared_not_owned() {
        let projection: Arc<dyn Projection> = Arc::new(EquirectangularProjection::default());
        let provider = MapTileProvider::builder(["https://x/{z}/{x}/{y}.png"])
            .with_projection(projection.clone())
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(provider.projection(), &projection));
        assert_eq!(provider.projection().name(), "EPSG:4326");

        let world = provider.geo_to_world(&LatLng::new(45.0, 90.0));
        assert_abs_diff_eq!(world.row, 0.25);
    }

    #[test]
    fn test_not_cacheable() {
        let provider = MapTileProvider::builder(["https://render/{z}/{x}/{y}.png"])
            .with_cacheable(false)
            .build()
            .unwrap();
        assert!(!provider.is_cacheable());
        assert!(!TileSource::is_cacheable(&provider));
    }

    #[test]
    fn test_batch_uris() {
        let provider = MapTileProvider::builder(["https://x/{z}/{x}/{y}.png"])
            .build()
            .unwrap();
        let keys = TileKey::new(0, 0, 0).children();
        let uris = provider.tile_uris(&keys).unwrap();
        assert_eq!(uris.len(), 4);
        assert_eq!(uris[3], "https://x/1/1/1.png");
    }
}
