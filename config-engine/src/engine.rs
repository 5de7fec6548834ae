use crate::error::Result;
use crate::providers::ConfigSource;
use figment::providers::Serialized;
use figment::Figment;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Builds a layered configuration: defaults first, then each source in
/// the order added, later layers overriding earlier ones.
#[derive(Debug, Clone)]
pub struct ConfigEngine {
    figment: Figment,
    sources: Vec<ConfigSource>,
}

impl Default for ConfigEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigEngine {
    pub fn new() -> Self {
        Self {
            figment: Figment::new(),
            sources: Vec::new(),
        }
    }

    /// Base layer taken from a serializable value, usually `T::default()`
    pub fn with_defaults<T: Serialize>(mut self, defaults: &T) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(defaults));
        self
    }

    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    fn merged(&self) -> Result<Figment> {
        let mut figment = self.figment.clone();
        for source in &self.sources {
            figment = source.merge_into(figment)?;
        }
        Ok(figment)
    }

    /// Merge every layer and deserialize the whole tree
    pub fn load<T: DeserializeOwned>(&self) -> Result<T> {
        let config = self.merged()?.extract()?;
        debug!(sources = self.sources.len(), "Configuration loaded");
        Ok(config)
    }

    /// Merge every layer and deserialize the value under `key`
    pub fn load_section<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        Ok(self.merged()?.extract_inner(key)?)
    }
}
