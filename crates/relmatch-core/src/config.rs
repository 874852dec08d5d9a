//! Layered configuration loader and path helpers.
//!
//! Uses Figment to merge `relmatch.toml` + `relmatch.<env>.toml` + `RELMATCH_*`
//! env vars (`__` separates nested keys). Provides helpers to expand `~` and
//! `${VAR}` and to resolve relative paths against a known base directory.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Engine knobs read from the `[scoring]` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    /// Minimum relevance (inclusive) for a release to be kept.
    pub threshold: f64,
    /// Apply the region adjustment when the inventory carries regions.
    pub region_aware: bool,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, region_aware: true }
    }
}

impl ScoringOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidConfig(format!("scoring.threshold must be within [0, 1], got {}", self.threshold)));
        }
        Ok(())
    }
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Load `relmatch.toml` from `dir`, overlay the file for `env_name`
    /// (dev, prod or test), then `RELMATCH_*` variables.
    pub fn load_from(dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::file(dir.join("relmatch.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("relmatch.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("relmatch.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("relmatch.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("RELMATCH_").split("__"));

        let config = Self { figment, base_dir: dir.to_path_buf() };
        config.validate()?;
        tracing::debug!(env = env_name, dir = %dir.display(), "configuration loaded");
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

    /// Like [`Config::get`], but a missing key yields `None` instead of an error.
    pub fn get_opt<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.figment.extract_inner(key) {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.missing() => Ok(None),
            Err(e) => Err(anyhow::anyhow!("Failed to get '{}': {}", key, e)),
        }
    }

    pub fn scoring(&self) -> anyhow::Result<ScoringOptions> {
        Ok(self.get_opt::<ScoringOptions>("scoring")?.unwrap_or_default())
    }

    /// Resolve a configured path key against the directory the config was
    /// loaded from.
    pub fn path(&self, key: &str) -> anyhow::Result<Option<PathBuf>> {
        Ok(self.get_opt::<String>(key)?.map(|p| resolve_with_base(&self.base_dir, p)))
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.scoring()?.validate()?;
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
