//! `package.json` loading and script patching
//!
//! The manifest is produced by the package manager's `init` step. It is kept as
//! an ordered JSON object so that every field the initializer wrote survives
//! the rewrite in its original position; only `scripts` is replaced.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};

/// Manifest file name inside the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Command for the `start` script
pub const START_SCRIPT: &str = "node server.js";

/// Command for the `dev` script
pub const DEV_SCRIPT: &str = "nodemon server.js";

/// The script entries written into the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMap {
    /// Runs the entry point directly
    pub start: String,
    /// Runs the entry point under the file-watching supervisor
    pub dev: String,
}

impl Default for ScriptMap {
    fn default() -> Self {
        Self {
            start: START_SCRIPT.to_string(),
            dev: DEV_SCRIPT.to_string(),
        }
    }
}

impl ScriptMap {
    fn to_value(&self) -> Value {
        let mut scripts = Map::new();
        scripts.insert("start".to_string(), Value::String(self.start.clone()));
        scripts.insert("dev".to_string(), Value::String(self.dev.clone()));
        Value::Object(scripts)
    }
}

/// A loaded `package.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl Manifest {
    /// Load the manifest from `root/package.json`
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Io`] if the file cannot be read and
    /// [`ForgeError::Manifest`] if it is not a JSON object.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        let raw = fs::read_to_string(&path).map_err(|err| ForgeError::io(&path, err))?;
        let document = serde_json::from_str(&raw).map_err(|source| ForgeError::Manifest {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, document })
    }

    /// Package name, if present
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// Package version, if present
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.document.get("version").and_then(Value::as_str)
    }

    /// Current script entries as `(name, command)` pairs
    #[must_use]
    pub fn scripts(&self) -> Vec<(&str, &str)> {
        self.document
            .get("scripts")
            .and_then(Value::as_object)
            .map(|scripts| {
                scripts
                    .iter()
                    .filter_map(|(name, cmd)| cmd.as_str().map(|cmd| (name.as_str(), cmd)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace the script map, discarding whatever was there
    pub fn set_scripts(&mut self, scripts: &ScriptMap) {
        self.document.insert("scripts".to_string(), scripts.to_value());
    }

    /// Write the manifest back, pretty-printed with two-space indentation
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Io`] if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let rendered = serde_json::to_string_pretty(&self.document).map_err(|source| {
            ForgeError::Manifest {
                path: self.path.clone(),
                source,
            }
        })?;

        fs::write(&self.path, rendered).map_err(|err| ForgeError::io(&self.path, err))
    }

    /// Load, replace the scripts with the `start`/`dev` pair, and save
    ///
    /// # Errors
    ///
    /// See [`Manifest::load`] and [`Manifest::save`].
    pub fn patch_scripts(root: &Path) -> Result<Self> {
        let mut manifest = Self::load(root)?;
        manifest.set_scripts(&ScriptMap::default());
        manifest.save()?;

        tracing::info!(path = %manifest.path.display(), "patched manifest scripts");
        Ok(manifest)
    }
}
