//! Tile addressing and tile providers
//!
//! This module turns tile keys into request URIs:
//! - integer tile keys and the row scheme they are requested with
//! - `{name}` URI templates and the values substituted into them
//! - providers configured in code or from TileJSON documents

pub mod key;
pub mod provider;
pub mod resolver;
pub mod source;
pub mod template;
pub mod tilejson;

pub use key::{TileKey, TileScheme};
pub use provider::{MapTileProvider, MapTileProviderBuilder};
pub use resolver::{NoExtraValues, Subdomains, TemplateValueResolver};
pub use source::TileSource;
pub use template::{UriTemplate, UriTemplateSet};
pub use tilejson::TileJson;
