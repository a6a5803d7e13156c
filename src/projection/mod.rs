//! Geographic to tile-space projections.
//!
//! A [`Projection`] carries no mutable state, so one instance can be shared
//! behind an `Arc` by any number of providers and threads.

pub mod equirectangular;
pub mod mercator;

use crate::core::geo::{LatLng, TileCoordinate};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

pub use equirectangular::EquirectangularProjection;
pub use mercator::SphericalMercatorProjection;

/// Trait for converting between geographic coordinates and tile space.
///
/// Implementations must be total: out-of-range latitudes are clamped to the
/// supported domain rather than rejected.
pub trait Projection: Send + Sync + fmt::Debug {
    /// Short identifier, e.g. `"EPSG:3857"`
    fn name(&self) -> &str;

    /// The zoom level of the coordinates returned by [`Projection::geo_to_world`]
    fn zoom(&self) -> f64;

    /// The zoom level equivalent to a display scale factor.
    ///
    /// Scale 1 is zoom 0 and every doubling adds one level. Non-positive
    /// scales are treated as the smallest positive scale.
    fn zoom_for_scale(&self, scale: f64) -> f64 {
        scale.max(f64::MIN_POSITIVE).log2()
    }

    /// Projects a location into tile space at [`Projection::zoom`]
    fn geo_to_world(&self, location: &LatLng) -> TileCoordinate;

    /// Inverse of [`Projection::geo_to_world`]; accepts coordinates at any zoom
    fn tile_to_geo(&self, coordinate: &TileCoordinate) -> LatLng;
}

static DEFAULT_PROJECTION: Lazy<Arc<SphericalMercatorProjection>> =
    Lazy::new(|| Arc::new(SphericalMercatorProjection::default()));

/// The shared spherical Mercator instance used by most map tile providers
pub fn default_projection() -> Arc<dyn Projection> {
    DEFAULT_PROJECTION.clone()
}
