//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

use crate::provision::{CommandStatus, ProvisionStep};

/// Generator error type
///
/// None of these are recovered from: every variant aborts the run and is
/// reported to the operator.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// Something already exists where the project would be created
    #[error("Folder \"{name}\" already exists at {}", .path.display())]
    AlreadyExists {
        /// Requested project name
        name: String,
        /// Resolved target root
        path: PathBuf,
    },

    /// Filesystem error while creating, reading or writing a path
    #[error("Filesystem error at {}: {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Template rendering error
    #[error("Failed to render template {path}: {source}")]
    Template {
        /// Relative output path of the template
        path: &'static str,
        /// Underlying render error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// External command could not be started
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// External command exited unsuccessfully
    #[error("{step} failed: `{command}` exited with {status}")]
    CommandFailed {
        /// Provisioning step that ran the command
        step: ProvisionStep,
        /// Command line that was run
        command: String,
        /// Exit status reported by the command
        status: CommandStatus,
    },

    /// Manifest is not a JSON object
    #[error("Invalid manifest {}: {source}", .path.display())]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ForgeError {
    /// Build an [`ForgeError::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ForgeError>;
