//! Geographic value types and crate-wide constants.

pub mod constants;
pub mod geo;

pub use geo::{LatLng, LatLngBounds, TileCoordinate};
