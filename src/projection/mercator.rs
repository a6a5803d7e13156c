use super::Projection;
use crate::core::geo::{LatLng, TileCoordinate};
use std::f64::consts::PI;

/// Web Mercator projection (EPSG:3857) onto a square tile grid.
///
/// Latitudes beyond ±[`MAX_LATITUDE`](crate::core::constants::MAX_LATITUDE)
/// are clipped, where the projection converges to a square world.
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalMercatorProjection {
    zoom: f64,
}

impl SphericalMercatorProjection {
    /// Creates a projection whose world coordinates are expressed at `zoom`
    pub fn new(zoom: f64) -> Self {
        Self { zoom }
    }
}

impl Default for SphericalMercatorProjection {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Projection for SphericalMercatorProjection {
    fn name(&self) -> &str {
        "EPSG:3857"
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn geo_to_world(&self, location: &LatLng) -> TileCoordinate {
        let lat_rad = LatLng::clamp_lat(location.lat).to_radians();
        let n = 2_f64.powf(self.zoom);

        let column = (location.lng + 180.0) / 360.0 * n;
        let row = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n;

        TileCoordinate::new(column, row, self.zoom)
    }

    fn tile_to_geo(&self, coordinate: &TileCoordinate) -> LatLng {
        let n = 2_f64.powf(coordinate.zoom);
        let lng = coordinate.column / n * 360.0 - 180.0;
        let lat_rad = (PI * (1.0 - 2.0 * coordinate.row / n)).sinh().atan();

        LatLng::new(lat_rad.to_degrees(), lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_LATITUDE;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_origin_is_grid_center() {
        let projection = SphericalMercatorProjection::default();
        let world = projection.geo_to_world(&LatLng::new(0.0, 0.0));
        assert_abs_diff_eq!(world.column, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(world.row, 0.5, epsilon = 1e-12);
        assert_eq!(world.zoom, 0.0);
    }

    #[test]
    fn test_reference_zoom_scales_grid() {
        let projection = SphericalMercatorProjection::new(4.0);
        let world = projection.geo_to_world(&LatLng::new(0.0, 0.0));
        assert_abs_diff_eq!(world.column, 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(world.row, 8.0, epsilon = 1e-9);
        assert_eq!(world.zoom, 4.0);
    }

    #[test]
    fn test_known_tile() {
        // New York at zoom 10 is tile 301/385
        let projection = SphericalMercatorProjection::default();
        let key = projection
            .geo_to_world(&LatLng::new(40.7128, -74.0060))
            .to_tile_key(10);
        assert_eq!((key.column(), key.row(), key.zoom()), (301, 385, 10));
    }

    #[test]
    fn test_round_trip() {
        let projection = SphericalMercatorProjection::new(3.0);
        for &(lat, lng) in &[
            (0.0, 0.0),
            (40.7128, -74.0060),
            (-33.8688, 151.2093),
            (85.0, 179.9),
            (-85.0, -179.9),
        ] {
            let back = projection.tile_to_geo(&projection.geo_to_world(&LatLng::new(lat, lng)));
            assert_abs_diff_eq!(back.lat, lat, epsilon = 1e-9);
            assert_abs_diff_eq!(back.lng, lng, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_polar_latitudes_are_clamped() {
        let projection = SphericalMercatorProjection::default();
        let north = projection.geo_to_world(&LatLng::new(90.0, 0.0));
        assert!(north.row.is_finite());
        assert_abs_diff_eq!(north.row, 0.0, epsilon = 1e-9);

        let back = projection.tile_to_geo(&north);
        assert_abs_diff_eq!(back.lat, MAX_LATITUDE, epsilon = 1e-9);

        let south = projection.geo_to_world(&LatLng::new(-90.0, 0.0));
        assert_abs_diff_eq!(south.row, 1.0, epsilon = 1e-9);
    }
}
