//! File and environment loading for provisioning network configuration.
//!
//! Builds a [`ProvisioningSpec`] from a TOML file layered with
//! `PROVNET_`-prefixed environment variables, then hands it to
//! `provnet_core` for validation. The core never touches disk; this crate
//! is the only place that does.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use thiserror::Error;
use tracing::debug;

use provnet_core::{ProvisioningSpec, Resolution, ValidationError};

/// Prefix for environment overrides, e.g. `PROVNET_PROVISIONING_IP`.
pub const ENV_PREFIX: &str = "PROVNET_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("provisioning config not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to serialize provisioning spec: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid provisioning configuration: {0}")]
    Validation(#[from] ValidationError),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load a spec from a TOML file, with environment overrides on top.
pub fn load_spec(path: impl AsRef<Path>) -> Result<ProvisioningSpec, ConfigError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading provisioning spec");
    extract(Figment::new().merge(Toml::file(path)))
}

/// Load a spec from an in-memory TOML document, with environment overrides on top.
pub fn load_spec_str(toml: &str) -> Result<ProvisioningSpec, ConfigError> {
    extract(Figment::new().merge(Toml::string(toml)))
}

fn extract(figment: Figment) -> Result<ProvisioningSpec, ConfigError> {
    let spec = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
    Ok(spec)
}

/// Load a spec from `path` and run it through mode resolution and validation.
pub fn load_and_validate(
    path: impl AsRef<Path>,
) -> Result<(ProvisioningSpec, Resolution), ConfigError> {
    let spec = load_spec(path)?;
    let resolution = spec.validate()?;
    Ok((spec, resolution))
}

// ── Saving ──────────────────────────────────────────────────────────

/// Serialize a spec to TOML and write it to `path`, creating parent directories.
pub fn save_spec(path: impl AsRef<Path>, spec: &ProvisioningSpec) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(spec)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
