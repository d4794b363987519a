use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_WIKI_URL: &str = "https://github.com/accord-net/framework/wiki/Sample-applications";
pub const DEFAULT_TARGET: &str = "samples.html";
const ENV_PREFIX: &str = "SAMPLES";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Wiki page listing the sample applications.
    pub wiki_url: String,
    /// Page whose marker regions get rewritten.
    pub target: PathBuf,
}

/// Values given on the command line; these win over the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub wiki_url: Option<String>,
    pub target: Option<PathBuf>,
}

impl Settings {
    /// Defaults, then `SAMPLES_*` environment variables, then `overrides`.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let target = overrides
            .target
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        Config::builder()
            .set_default("wiki_url", DEFAULT_WIKI_URL)?
            .set_default("target", DEFAULT_TARGET)?
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("wiki_url", overrides.wiki_url.clone())?
            .set_override_option("target", target)?
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

// ── Tests ──
