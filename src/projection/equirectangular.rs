use super::Projection;
use crate::core::geo::{LatLng, TileCoordinate};

/// Plate carrée (EPSG:4326) mapped linearly onto a square tile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EquirectangularProjection {
    zoom: f64,
}

impl EquirectangularProjection {
    pub fn new(zoom: f64) -> Self {
        Self { zoom }
    }
}

impl Default for EquirectangularProjection {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Projection for EquirectangularProjection {
    fn name(&self) -> &str {
        "EPSG:4326"
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn geo_to_world(&self, location: &LatLng) -> TileCoordinate {
        let n = 2_f64.powf(self.zoom);
        let lat = location.lat.clamp(-90.0, 90.0);

        TileCoordinate::new(
            (location.lng + 180.0) / 360.0 * n,
            (90.0 - lat) / 180.0 * n,
            self.zoom,
        )
    }

    fn tile_to_geo(&self, coordinate: &TileCoordinate) -> LatLng {
        let n = 2_f64.powf(coordinate.zoom);
        LatLng::new(
            90.0 - coordinate.row / n * 180.0,
            coordinate.column / n * 360.0 - 180.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_mapping() {
        let projection = EquirectangularProjection::default();
        let world = projection.geo_to_world(&LatLng::new(45.0, 90.0));
        assert_abs_diff_eq!(world.column, 0.75);
        assert_abs_diff_eq!(world.row, 0.25);
    }

    #[test]
    fn test_round_trip_full_latitude_range() {
        let projection = EquirectangularProjection::new(5.0);
        for &(lat, lng) in &[(90.0, -180.0), (-90.0, 180.0), (12.5, -33.25)] {
            let back = projection.tile_to_geo(&projection.geo_to_world(&LatLng::new(lat, lng)));
            assert_abs_diff_eq!(back.lat, lat, epsilon = 1e-9);
            assert_abs_diff_eq!(back.lng, lng, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_out_of_range_latitude_is_clamped() {
        let projection = EquirectangularProjection::default();
        let world = projection.geo_to_world(&LatLng::new(120.0, 0.0));
        assert_abs_diff_eq!(world.row, 0.0);
    }
}
