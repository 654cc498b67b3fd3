//! nodeforge: scaffolding generator for minimal Express backend projects
//!
//! Given a project name, nodeforge materializes a fixed directory layout with a
//! small HTTP service skeleton (routes, controllers, services, middleware), then
//! provisions a `package.json` and installs the declared dependencies through the
//! configured package manager.
//!
//! The run is strictly linear:
//!
//! 1. [`ProjectLayout::plan`] resolves the target root and refuses to continue if
//!    anything already exists there
//! 2. [`ProjectTemplate::render`] renders every file before any I/O happens
//! 3. [`materialize`] creates the directory tree and writes the files
//! 4. [`Provisioner::provision`] initializes the manifest, patches its scripts and
//!    installs dependencies
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nodeforge::{ForgeConfig, Generator, ProjectLayout, ProjectName, SystemCommandRunner};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ForgeConfig::load()?;
//! let name = ProjectName::from_arg(None, &config.default_project_name);
//! let cwd = std::env::current_dir()?;
//!
//! let layout = ProjectLayout::plan(&cwd, &name)?;
//! let generator = Generator::new(&config, SystemCommandRunner);
//! let project = generator.generate(&layout, |progress| println!("{progress}"))?;
//!
//! println!("created {}", project.root.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod manifest;
pub mod materialize;
pub mod observability;
pub mod provision;
pub mod templates;

pub use config::{ForgeConfig, ProvisioningSettings};
pub use error::{ForgeError, Result};
pub use generator::{GeneratedProject, Generator, Progress};
pub use layout::{ProjectLayout, ProjectName, DEFAULT_PROJECT_NAME, PROJECT_DIRECTORIES};
pub use manifest::{Manifest, ScriptMap, MANIFEST_FILE};
pub use materialize::materialize;
pub use provision::{
    CommandLine, CommandRunner, CommandStatus, ProvisionStep, Provisioner, SystemCommandRunner,
};
pub use templates::{ProjectTemplate, RenderedFile, TemplateFile, TEMPLATE_FILES};
