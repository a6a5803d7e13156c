//! URI templates with `{name}` placeholders.
//!
//! Placeholder names are extracted once when a template is parsed. At request
//! time a value is looked up for every name, in this order:
//!
//! 1. tile address variables: `x`/`col`, `y`/`row`, `z`/`zoom`,
//!    `q`/`quadkey` and `tms_y`
//! 2. the provider dictionary
//! 3. the provider's [`TemplateValueResolver`]
//!
//! A name none of these can answer fails the request.

use crate::core::constants::MAX_TILE_ZOOM;
use crate::prelude::HashMap;
use crate::tiles::{
    key::{TileKey, TileScheme},
    resolver::TemplateValueResolver,
};
use crate::{MapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Parameter(&'a str),
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits a template into literal text and `{identifier}` placeholders.
/// Braces that do not enclose an identifier stay literal.
fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let name_len = after
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(after.len());

        if name_len > 0 && after[name_len..].starts_with('}') {
            if open > 0 {
                tokens.push(Token::Literal(&rest[..open]));
            }
            tokens.push(Token::Parameter(&after[..name_len]));
            rest = &after[name_len + 1..];
        } else {
            tokens.push(Token::Literal(&rest[..open + 1]));
            rest = after;
        }
    }

    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }
    tokens
}

/// Unique placeholder names of `template`, in order of first appearance.
pub fn extract_parameters(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for token in tokenize(template) {
        if let Token::Parameter(name) = token {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// One parsed URI template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    raw: String,
    parameters: Vec<String>,
}

impl UriTemplate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parameters = extract_parameters(&raw);
        Self { raw, parameters }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names found in the template
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Substitutes every placeholder with the value `value_of` returns for it.
    ///
    /// Each distinct name is looked up once. The first name without a value
    /// fails the expansion.
    pub fn expand<F>(&self, key: &TileKey, mut value_of: F) -> Result<String>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut values = Vec::with_capacity(self.parameters.len());
        for name in &self.parameters {
            match value_of(name) {
                Some(value) => values.push(value),
                None => {
                    #[cfg(feature = "debug")]
                    log::warn!("No value for `{{{}}}` in {} (tile {})", name, self.raw, key);
                    return Err(MapError::TemplateResolution {
                        template: self.raw.clone(),
                        parameter: name.clone(),
                        key: *key,
                    });
                }
            }
        }

        let mut uri = String::with_capacity(self.raw.len() + 16);
        for token in tokenize(&self.raw) {
            match token {
                Token::Literal(text) => uri.push_str(text),
                Token::Parameter(name) => {
                    if let Some(idx) = self.parameters.iter().position(|n| n == name) {
                        uri.push_str(&values[idx]);
                    }
                }
            }
        }
        Ok(uri)
    }
}

/// Value of a tile address variable, if `name` is one.
pub fn builtin_value(key: &TileKey, scheme: TileScheme, name: &str) -> Option<String> {
    match name {
        "x" | "col" => Some(key.column().to_string()),
        "y" | "row" => scheme.row(key).map(|row| row.to_string()),
        "z" | "zoom" => Some(key.zoom().to_string()),
        "q" | "quadkey" => Some(key.quadkey()),
        "tms_y" => key.tms_row().map(|row| row.to_string()),
        _ => None,
    }
}

/// The lookup tiers consulted for one request.
pub struct TemplateValues<'a> {
    pub scheme: TileScheme,
    pub dictionary: &'a HashMap<String, String>,
    pub resolver: &'a dyn TemplateValueResolver,
}

impl TemplateValues<'_> {
    pub fn resolve(&self, key: &TileKey, name: &str) -> Option<String> {
        builtin_value(key, self.scheme, name)
            .or_else(|| self.dictionary.get(name).cloned())
            .or_else(|| self.resolver.resolve(key, name))
    }
}

/// The ordered list of templates a provider serves tiles from.
///
/// When several templates are configured, the one for a key is chosen by
/// `(column + row) mod len`, so a given tile always maps to the same endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplateSet {
    templates: Vec<UriTemplate>,
}

impl UriTemplateSet {
    /// Parses every template. Fails when the list is empty or a template is blank.
    pub fn new<I, S>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates: Vec<UriTemplate> = templates
            .into_iter()
            .map(|raw| UriTemplate::parse(raw))
            .collect();

        if templates.is_empty() {
            return Err(MapError::Configuration(
                "at least one tile URI template is required".to_string(),
            ));
        }
        if let Some(idx) = templates.iter().position(|t| t.as_str().trim().is_empty()) {
            return Err(MapError::Configuration(format!(
                "tile URI template {} is empty",
                idx
            )));
        }

        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[UriTemplate] {
        &self.templates
    }

    /// The raw template strings, in configuration order
    pub fn raw(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.raw.clone()).collect()
    }

    /// Placeholder names of each template, parallel to [`UriTemplateSet::templates`]
    pub fn parameters(&self) -> Vec<&[String]> {
        self.templates.iter().map(|t| t.parameters()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// The template serving `key`
    pub fn select(&self, key: &TileKey) -> &UriTemplate {
        &self.templates[key.spread_index(self.templates.len(), 1)]
    }

    /// Builds the request URI for `key`. Keys deeper than [`MAX_TILE_ZOOM`] are rejected.
    pub fn expand(&self, key: &TileKey, values: &TemplateValues<'_>) -> Result<String> {
        if key.zoom() > MAX_TILE_ZOOM {
            #[cfg(feature = "debug")]
            log::warn!("Refusing to build a URI for tile {}", key);
            return Err(MapError::ZoomOutOfRange {
                key: *key,
                max_zoom: MAX_TILE_ZOOM,
            });
        }
        self.select(key)
            .expand(key, |name| values.resolve(key, name))
    }
}
