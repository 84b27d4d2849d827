//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Search attribute declarations live in the `search_attributes` table.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::borrow::Cow;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::traits::SearchAttributeSource;
use crate::types::TypeDescriptor;

pub const SEARCH_ATTRIBUTES_KEY: &str = "search_attributes";

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> { Self::load_from(Path::new(".")) }

    pub fn load_from(base_dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(base_dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join("config.test.toml"))),
            _ => tracing::warn!(env = %env_name, "unknown RUST_ENV, using base config only"),
        }
        figment = figment.merge(Env::prefixed("APP_"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Raw declarations from the `search_attributes` table; empty when the
    /// table is absent.
    pub fn search_attributes(&self) -> anyhow::Result<HashMap<String, TypeDescriptor>> {
        if !self.figment.contains(SEARCH_ATTRIBUTES_KEY) { return Ok(HashMap::new()); }
        self.get(SEARCH_ATTRIBUTES_KEY)
    }

    fn validate(&self) -> anyhow::Result<()> {
        // a provider that failed to parse only shows up on extraction
        self.figment
            .extract::<figment::value::Dict>()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        if self.figment.contains(SEARCH_ATTRIBUTES_KEY) {
            self.figment
                .find_value(SEARCH_ATTRIBUTES_KEY)
                .map_err(|e| Error::InvalidConfig(e.to_string()))?
                .into_dict()
                .ok_or_else(|| Error::InvalidConfig(format!("'{SEARCH_ATTRIBUTES_KEY}' must be a table")))?;
        }
        Ok(())
    }
}

/// [`SearchAttributeSource`] that re-reads the configuration files on every
/// call so edits are picked up by the next type map build.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    base_dir: PathBuf,
}

impl ConfigSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self { Self { base_dir: base_dir.into() } }

    /// Like [`SearchAttributeSource::search_attributes`] but surfaces load
    /// failures instead of reporting an empty declaration set.
    pub fn try_search_attributes(&self) -> anyhow::Result<HashMap<String, TypeDescriptor>> {
        Config::load_from(&self.base_dir)?.search_attributes()
    }
}

impl SearchAttributeSource for ConfigSource {
    fn search_attributes(&self) -> HashMap<String, TypeDescriptor> {
        self.try_search_attributes().unwrap_or_else(|e| {
            tracing::error!(dir = %self.base_dir.display(), error = %e, "failed to load search attributes, typing disabled");
            HashMap::new()
        })
    }
}

/// Turns a user-supplied config directory into a path: `~` and `$VAR` /
/// `${VAR}` are expanded, relative results are taken relative to `cwd`.
/// Unknown variables are left as written.
pub fn resolve_config_dir(cwd: &Path, dir: &str) -> PathBuf {
    let with_vars = shellexpand::env(dir).unwrap_or(Cow::Borrowed(dir));
    let path = PathBuf::from(shellexpand::tilde(&with_vars).as_ref());
    if path.is_absolute() { path } else { cwd.join(path) }
}
