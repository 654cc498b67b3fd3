//! Configuration management for nodeforge
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `NODEFORGE_` prefix, `__` for nesting)
//! 2. `./nodeforge.toml`
//! 3. `~/.config/nodeforge/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! The defaults reproduce the stock Express setup, so a missing config file is
//! the normal case.
//!
//! # Example Configuration
//!
//! ```toml
//! # nodeforge.toml
//! default_project_name = "api"
//!
//! [provisioning]
//! package_manager = "npm"
//! dependencies = ["express", "cors", "dotenv"]
//! dev_dependencies = ["nodemon"]
//! ```
//!
//! Only provisioning is configurable. Generated file contents are fixed.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::layout::DEFAULT_PROJECT_NAME;

/// Local configuration file, resolved against the working directory
pub const LOCAL_CONFIG_FILE: &str = "nodeforge.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "NODEFORGE_";

/// Package manager settings used while provisioning a generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisioningSettings {
    /// Package manager executable (must accept npm-style `init -y` and `install [-D]`)
    pub package_manager: String,

    /// Runtime dependencies installed into the generated project
    pub dependencies: Vec<String>,

    /// Development-only dependencies installed into the generated project
    pub dev_dependencies: Vec<String>,
}

impl Default for ProvisioningSettings {
    fn default() -> Self {
        let package_manager = if cfg!(windows) { "npm.cmd" } else { "npm" };

        Self {
            package_manager: package_manager.to_string(),
            dependencies: vec![
                "express".to_string(),
                "cors".to_string(),
                "dotenv".to_string(),
            ],
            dev_dependencies: vec!["nodemon".to_string()],
        }
    }
}

/// Complete nodeforge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Project name used when none is given on the command line
    pub default_project_name: String,

    /// Provisioning settings
    pub provisioning: ProvisioningSettings,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
            provisioning: ProvisioningSettings::default(),
        }
    }
}

impl ForgeConfig {
    /// Load configuration from the standard locations
    ///
    /// Precedence, highest first:
    /// 1. Environment variables (`NODEFORGE_*`, use `__` for nesting)
    /// 2. `./nodeforge.toml`
    /// 3. `~/.config/nodeforge/config.toml`
    /// 4. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but cannot be read or parsed
    /// - Configuration values fail type conversion
    pub fn load() -> Result<Self> {
        Self::load_with(Self::recommended_path(), Path::new(LOCAL_CONFIG_FILE))
    }

    /// Load configuration from an explicit user file and local file
    ///
    /// Missing files are skipped. Environment variables still apply.
    ///
    /// # Errors
    ///
    /// See [`ForgeConfig::load`].
    pub fn load_with(user_config: Option<PathBuf>, local_config: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&Self::defaults_toml()?));

        if let Some(user_config) = user_config.filter(|path| path.exists()) {
            tracing::debug!(path = %user_config.display(), "merging user config");
            figment = figment.merge(Toml::file(user_config));
        }

        if local_config.exists() {
            tracing::debug!(path = %local_config.display(), "merging local config");
            figment = figment.merge(Toml::file(local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config = figment.extract().map_err(Box::new)?;
        Ok(config)
    }

    /// Get the XDG config path (`~/.config/nodeforge/config.toml`)
    #[must_use]
    pub fn recommended_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nodeforge").join("config.toml"))
    }

    fn defaults_toml() -> Result<String> {
        toml::to_string(&Self::default()).map_err(|err| {
            Box::new(figment::Error::from(format!(
                "failed to serialize default configuration: {err}"
            )))
            .into()
        })
    }
}
