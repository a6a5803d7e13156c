use crate::core::constants::SUBDOMAIN_PARAMETER;
use crate::tiles::key::TileKey;

/// Trait representing anything that can supply values for provider-specific
/// template parameters.
///
/// Resolvers are consulted after the built-in tile address variables and the
/// provider dictionary, so they only see names neither of those knows.
pub trait TemplateValueResolver: Send + Sync {
    /// Value for `parameter` when requesting `key`, or `None` if unknown.
    fn resolve(&self, key: &TileKey, parameter: &str) -> Option<String>;
}

impl<F> TemplateValueResolver for F
where
    F: Fn(&TileKey, &str) -> Option<String> + Send + Sync,
{
    fn resolve(&self, key: &TileKey, parameter: &str) -> Option<String> {
        self(key, parameter)
    }
}

/// Resolver that knows no extra parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtraValues;

impl TemplateValueResolver for NoExtraValues {
    fn resolve(&self, _key: &TileKey, _parameter: &str) -> Option<String> {
        None
    }
}

/// Shard names for a `{s}`-style parameter, picked by `(x + 2y) mod n`.
///
/// The row weight differs from template selection's `(x + y)`, so a provider
/// with as many templates as shards still sends each host every shard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdomains {
    parameter: String,
    values: Vec<String>,
}

impl Subdomains {
    /// Subdomains substituted for `{s}`
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::for_parameter(SUBDOMAIN_PARAMETER, values)
    }

    /// Subdomains substituted for a differently named parameter
    pub fn for_parameter<I, S>(parameter: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameter: parameter.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The shard serving `key`
    pub fn select(&self, key: &TileKey) -> Option<&str> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values[key.spread_index(self.values.len(), 2)].as_str())
    }
}

impl Default for Subdomains {
    fn default() -> Self {
        Self::new(["a", "b", "c"])
    }
}

impl TemplateValueResolver for Subdomains {
    fn resolve(&self, key: &TileKey, parameter: &str) -> Option<String> {
        if parameter == self.parameter {
            self.select(key).map(str::to_string)
        } else {
            None
        }
    }
}
