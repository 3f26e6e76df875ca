use std::path::Path;

use almanac_calendar::{
    BuiltinNames, DisplayNameResolver, Layered, NameTables, ResolverConfig, TimeZone,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// Config file read when `--config` is not given. Missing is not an error.
const DEFAULT_CONFIG_PATH: &str = "almanac.toml";

/// Resolver type produced from configuration.
pub type ConfiguredResolver = DisplayNameResolver<Layered<NameTables, BuiltinNames>>;

/// Top-level Almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Fixed-offset zone used by `now`. Defaults to UTC.
    #[serde(default)]
    pub zone: Option<String>,

    /// Display-name resolver settings.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl AlmanacConfig {
    /// Loads the configuration.
    ///
    /// With `path` set the file must exist. Without it, `almanac.toml` in
    /// the working directory is read if present and defaults are used
    /// otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Path::new(DEFAULT_CONFIG_PATH),
            None => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::from_toml_str(&toml_str)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses a configuration from TOML.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Returns the zone named by `zone_override`, else the configured zone,
    /// else UTC.
    pub fn time_zone(&self, zone_override: Option<&str>) -> Result<TimeZone> {
        match zone_override.or(self.zone.as_deref()) {
            Some(id) => TimeZone::of(id).with_context(|| format!("invalid zone: {id}")),
            None => Ok(TimeZone::utc()),
        }
    }

    /// Builds the display-name resolver, with `locale_override` replacing
    /// the configured locale.
    pub fn resolver(&self, locale_override: Option<&str>) -> Result<ConfiguredResolver> {
        let mut resolver_config = self.resolver.clone();
        if let Some(tag) = locale_override {
            resolver_config.locale = Some(tag.to_string());
        }
        resolver_config
            .build_resolver()
            .context("failed to build display-name resolver")
    }
}
