//! Prelude module for common maptiles types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use maptiles::prelude::*;`

pub use crate::core::geo::{LatLng, LatLngBounds, TileCoordinate};

pub use crate::projection::{
    default_projection, EquirectangularProjection, Projection, SphericalMercatorProjection,
};

pub use crate::tiles::{
    MapTileProvider, MapTileProviderBuilder, NoExtraValues, Subdomains, TemplateValueResolver,
    TileJson, TileKey, TileScheme, TileSource, UriTemplate, UriTemplateSet,
};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
