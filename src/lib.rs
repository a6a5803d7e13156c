//! # maptiles
//!
//! Addressing and configuration core of a slippy-map tile client.
//!
//! Given a geographic location and a zoom level, this crate determines which
//! tile to request and builds its request URI. Fetching, caching and
//! rendering tiles are left to the caller.

pub mod core;
pub mod prelude;
pub mod projection;
pub mod tiles;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::geo::{LatLng, LatLngBounds, TileCoordinate};

pub use projection::{
    default_projection, EquirectangularProjection, Projection, SphericalMercatorProjection,
};

pub use tiles::{
    MapTileProvider, MapTileProviderBuilder, Subdomains, TemplateValueResolver, TileJson, TileKey,
    TileScheme, TileSource, UriTemplate, UriTemplateSet,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No value for `{{{parameter}}}` in template {template} (tile {key})")]
    TemplateResolution {
        template: String,
        parameter: String,
        key: TileKey,
    },

    #[error("Tile {key} is deeper than the deepest zoom level {max_zoom}")]
    ZoomOutOfRange { key: TileKey, max_zoom: u8 },
}

/// Error type alias for convenience
pub type Error = MapError;
