use crate::tiles::key::TileKey;
use crate::Result;

/// Trait representing anything that can produce tile URIs for a given key.
pub trait TileSource: Send + Sync {
    /// Build the request URI for `key`.
    fn tile_uri(&self, key: &TileKey) -> Result<String>;

    /// Returns the source's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the minimum supported zoom level.
    fn min_zoom(&self) -> u8;

    /// Returns the maximum supported zoom level.
    fn max_zoom(&self) -> u8;

    /// Checks if this source supports the given zoom level.
    fn supports_zoom(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom() && zoom <= self.max_zoom()
    }

    /// Whether fetched tiles may be persisted. Sources that render tiles on
    /// the fly return `false`.
    fn is_cacheable(&self) -> bool {
        true
    }
}
