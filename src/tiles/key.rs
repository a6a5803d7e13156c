use crate::core::{constants::MAX_TILE_ZOOM, geo::TileCoordinate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tiles per axis at `zoom`, or `None` once it no longer fits an `i64`.
pub fn grid_size(zoom: u8) -> Option<i64> {
    1_i64.checked_shl(u32::from(zoom)).filter(|n| *n > 0)
}

/// Bit `level` of `value` in two's complement, sign-extended past 63.
fn bit(value: i64, level: u32) -> bool {
    value.checked_shr(level).map_or(value < 0, |v| v & 1 != 0)
}

/// Address of one tile image at one zoom level.
///
/// Keys are not required to lie inside the grid; see [`TileKey::is_valid`]
/// and [`TileKey::wrapped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKey {
    column: i64,
    row: i64,
    zoom: u8,
}

impl TileKey {
    pub fn new(column: i64, row: i64, zoom: u8) -> Self {
        Self { column, row, zoom }
    }

    /// Rescales `coordinate` to `zoom` and floors it to the containing tile.
    pub fn from_coordinate(coordinate: &TileCoordinate, zoom: u8) -> Self {
        let zoomed = coordinate.zoom_to(zoom as f64);
        Self::new(zoomed.column.floor() as i64, zoomed.row.floor() as i64, zoom)
    }

    pub fn column(&self) -> i64 {
        self.column
    }

    pub fn row(&self) -> i64 {
        self.row
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Checks that the key lies inside the `2^zoom` grid
    pub fn is_valid(&self) -> bool {
        self.zoom <= MAX_TILE_ZOOM
            && grid_size(self.zoom)
                .map_or(false, |n| (0..n).contains(&self.column) && (0..n).contains(&self.row))
    }

    /// Wraps the column around the antimeridian, leaving the row untouched.
    ///
    /// Keys deeper than an `i64` grid are returned as they are.
    pub fn wrapped(&self) -> Self {
        match grid_size(self.zoom) {
            Some(n) => Self::new(self.column.rem_euclid(n), self.row, self.zoom),
            None => *self,
        }
    }

    /// Index in `0..n` mixing column and row as `column + row_weight * row`.
    ///
    /// Neighbouring keys land on different indices. Panics if `n` is zero.
    pub fn spread_index(&self, n: usize, row_weight: i64) -> usize {
        let mixed = i128::from(self.column) + i128::from(row_weight) * i128::from(self.row);
        mixed.rem_euclid(n as i128) as usize
    }

    /// Gets the parent tile at a lower zoom level
    pub fn parent(&self) -> Option<TileKey> {
        if self.zoom == 0 {
            None
        } else {
            Some(TileKey::new(
                self.column.div_euclid(2),
                self.row.div_euclid(2),
                self.zoom - 1,
            ))
        }
    }

    /// Gets the child tiles at a higher zoom level
    pub fn children(&self) -> Vec<TileKey> {
        if self.zoom >= MAX_TILE_ZOOM {
            Vec::new()
        } else {
            let (x, y, z) = (self.column * 2, self.row * 2, self.zoom + 1);
            vec![
                TileKey::new(x, y, z),
                TileKey::new(x + 1, y, z),
                TileKey::new(x, y + 1, z),
                TileKey::new(x + 1, y + 1, z),
            ]
        }
    }

    /// Bing-style quadtree key, one base-4 digit per zoom level
    pub fn quadkey(&self) -> String {
        (1..=self.zoom)
            .rev()
            .map(|level| {
                let level = u32::from(level - 1);
                let mut digit = b'0';
                if bit(self.column, level) {
                    digit += 1;
                }
                if bit(self.row, level) {
                    digit += 2;
                }
                digit as char
            })
            .collect()
    }

    /// Row counted from the bottom of the grid, as the TMS scheme does.
    ///
    /// `None` when the flipped row does not fit an `i64`.
    pub fn tms_row(&self) -> Option<i64> {
        grid_size(self.zoom).and_then(|n| (n - 1).checked_sub(self.row))
    }

    /// The upper-left corner of this tile in tile space
    pub fn to_tile_coordinate(&self) -> TileCoordinate {
        TileCoordinate::new(self.column as f64, self.row as f64, self.zoom as f64)
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.column, self.row)
    }
}

/// Row addressing scheme of a tile endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileScheme {
    /// Rows counted from the north edge (OSM/Google style)
    #[default]
    Xyz,
    /// Rows counted from the south edge
    Tms,
}

impl TileScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileScheme::Xyz => "xyz",
            TileScheme::Tms => "tms",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "xyz" => Some(TileScheme::Xyz),
            "tms" => Some(TileScheme::Tms),
            _ => None,
        }
    }

    /// The row a request for `key` should carry under this scheme
    pub fn row(&self, key: &TileKey) -> Option<i64> {
        match self {
            TileScheme::Xyz => Some(key.row()),
            TileScheme::Tms => key.tms_row(),
        }
    }
}
