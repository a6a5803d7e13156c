use crate::core::constants::MAX_LATITUDE;
use crate::tiles::key::TileKey;
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
    /// Height above the reference ellipsoid in meters, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            elevation: None,
        }
    }

    /// Creates a new LatLng coordinate carrying an elevation
    pub fn with_elevation(lat: f64, lng: f64, elevation: f64) -> Self {
        Self {
            lat,
            lng,
            elevation: Some(elevation),
        }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the spherical Mercator range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates.
///
/// The box is not required to satisfy `west <= east`: a box crossing the
/// antimeridian is left for the provider to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// The full extent of a spherical Mercator world
    pub fn world() -> Self {
        Self::from_coords(-MAX_LATITUDE, -180.0, MAX_LATITUDE, 180.0)
    }

    pub fn south(&self) -> f64 {
        self.south_west.lat
    }

    pub fn west(&self) -> f64 {
        self.south_west.lng
    }

    pub fn north(&self) -> f64 {
        self.north_east.lat
    }

    pub fn east(&self) -> f64 {
        self.north_east.lng
    }

    /// Checks that both corners are valid coordinates and south <= north
    pub fn is_valid(&self) -> bool {
        self.south_west.is_valid()
            && self.north_east.is_valid()
            && self.south_west.lat <= self.north_east.lat
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// The TileJSON `bounds` ordering: `[west, south, east, north]`
    pub fn to_tilejson_array(&self) -> [f64; 4] {
        [self.west(), self.south(), self.east(), self.north()]
    }

    /// Parses a TileJSON `bounds` array. Returns `None` unless exactly four values are given.
    pub fn from_tilejson_array(values: &[f64]) -> Option<Self> {
        match values {
            [west, south, east, north] => Some(Self::from_coords(*south, *west, *north, *east)),
            _ => None,
        }
    }
}

impl Default for LatLngBounds {
    fn default() -> Self {
        Self::world()
    }
}

/// A location in a projection's normalized tile grid.
///
/// `column` and `row` are fractional; at `zoom` the grid has `2^zoom` tiles
/// per axis, so `(0.5, 0.5, 0.0)` is the middle of the single zoom 0 tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileCoordinate {
    pub column: f64,
    pub row: f64,
    pub zoom: f64,
}

impl TileCoordinate {
    pub fn new(column: f64, row: f64, zoom: f64) -> Self {
        Self { column, row, zoom }
    }

    /// The same location expressed in the grid of another zoom level
    pub fn zoom_to(&self, zoom: f64) -> Self {
        let scale = 2_f64.powf(zoom - self.zoom);
        Self::new(self.column * scale, self.row * scale, zoom)
    }

    pub fn zoom_by(&self, delta: f64) -> Self {
        self.zoom_to(self.zoom + delta)
    }

    pub fn up(&self, distance: f64) -> Self {
        Self::new(self.column, self.row - distance, self.zoom)
    }

    pub fn down(&self, distance: f64) -> Self {
        Self::new(self.column, self.row + distance, self.zoom)
    }

    pub fn left(&self, distance: f64) -> Self {
        Self::new(self.column - distance, self.row, self.zoom)
    }

    pub fn right(&self, distance: f64) -> Self {
        Self::new(self.column + distance, self.row, self.zoom)
    }

    /// Floors column and row, keeping the zoom
    pub fn floor(&self) -> Self {
        Self::new(self.column.floor(), self.row.floor(), self.zoom)
    }

    /// The key of the tile containing this location at `zoom`
    pub fn to_tile_key(&self, zoom: u8) -> TileKey {
        TileKey::from_coordinate(self, zoom)
    }
}

impl Default for TileCoordinate {
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.7128, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lng, -74.0060);
        assert_eq!(coord.elevation, None);
        assert!(coord.is_valid());

        let summit = LatLng::with_elevation(27.9881, 86.9250, 8848.86);
        assert_eq!(summit.elevation, Some(8848.86));
    }

    #[test]
    fn test_lat_lng_validity() {
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.5).is_valid());
        assert!(LatLng::new(-90.0, 180.0).is_valid());
    }

    #[test]
    fn test_wrap_and_clamp() {
        assert_eq!(LatLng::wrap_lng(190.0), -170.0);
        assert_eq!(LatLng::wrap_lng(-190.0), 170.0);
        assert_eq!(LatLng::clamp_lat(89.0), MAX_LATITUDE);
        assert_eq!(LatLng::clamp_lat(-89.0), -MAX_LATITUDE);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(40.0, -75.0, 41.0, -73.0);
        let point_inside = LatLng::new(40.5, -74.0);
        let point_outside = LatLng::new(42.0, -74.0);

        assert!(bounds.contains(&point_inside));
        assert!(!bounds.contains(&point_outside));
        assert_eq!(bounds.center(), LatLng::new(40.5, -74.0));
    }

    #[test]
    fn test_bounds_validity() {
        assert!(LatLngBounds::world().is_valid());
        assert!(!LatLngBounds::from_coords(10.0, 0.0, -10.0, 5.0).is_valid());
        // Crossing the antimeridian is allowed
        assert!(LatLngBounds::from_coords(-10.0, 170.0, 10.0, -170.0).is_valid());
    }

    #[test]
    fn test_bounds_tilejson_order() {
        let bounds = LatLngBounds::from_coords(-10.0, -20.0, 30.0, 40.0);
        let array = bounds.to_tilejson_array();
        assert_eq!(array, [-20.0, -10.0, 40.0, 30.0]);
        assert_eq!(LatLngBounds::from_tilejson_array(&array), Some(bounds));
        assert_eq!(LatLngBounds::from_tilejson_array(&[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_tile_coordinate_zoom() {
        let coord = TileCoordinate::new(0.25, 0.75, 0.0);
        let zoomed = coord.zoom_to(2.0);
        assert_eq!(zoomed, TileCoordinate::new(1.0, 3.0, 2.0));
        assert_eq!(zoomed.zoom_by(-2.0), coord);
    }

    #[test]
    fn test_tile_coordinate_neighbours() {
        let coord = TileCoordinate::new(3.5, 5.5, 4.0);
        assert_eq!(coord.up(1.0).row, 4.5);
        assert_eq!(coord.down(1.0).row, 6.5);
        assert_eq!(coord.left(1.0).column, 2.5);
        assert_eq!(coord.right(1.0).column, 4.5);
        assert_eq!(coord.floor(), TileCoordinate::new(3.0, 5.0, 4.0));
    }
}
