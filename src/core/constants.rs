//! Core constants derived from TileJSON defaults and common web-map conventions.
//! Keeping them in a single place makes it easier to tweak crate-wide magic numbers.

/// Latitude at which the spherical Mercator projection converges to a square world.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Minimum zoom level assumed when a provider does not specify one.
pub const DEFAULT_MIN_ZOOM: u8 = 0;

/// Maximum zoom level assumed when a provider does not specify one.
pub const DEFAULT_MAX_ZOOM: u8 = 22;

/// Deepest zoom level a tile key may address (TileJSON allows 0..=30).
pub const MAX_TILE_ZOOM: u8 = 30;

/// Default square tile size in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// TileJSON version written by `to_json` when none was parsed.
pub const TILEJSON_VERSION: &str = "2.1.0";

/// Template parameter used for shard letters by [`crate::tiles::Subdomains`].
pub const SUBDOMAIN_PARAMETER: &str = "s";
