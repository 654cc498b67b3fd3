//! End-to-end project generation
//!
//! Ties the pieces together in their fixed order: render templates, create the
//! tree, write the files, then provision. The target root must already have been
//! checked by [`ProjectLayout::plan`].

use std::fmt;
use std::path::PathBuf;

use crate::config::ForgeConfig;
use crate::error::Result;
use crate::layout::{ProjectLayout, ProjectName};
use crate::manifest::Manifest;
use crate::materialize::materialize;
use crate::provision::{CommandRunner, ProvisionStep, Provisioner};
use crate::templates::ProjectTemplate;

/// Progress notifications emitted while generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Directories and files are being written
    WritingFiles,
    /// A provisioning step is about to run
    Provisioning(ProvisionStep),
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WritingFiles => f.write_str("Generating project files"),
            Self::Provisioning(step) => write!(f, "{step}"),
        }
    }
}

/// Summary of a generated project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// Project name
    pub name: ProjectName,
    /// Absolute project root
    pub root: PathBuf,
    /// Absolute paths of the template files written
    pub files: Vec<PathBuf>,
    /// The patched `package.json`
    pub manifest: Manifest,
}

/// Project generator
pub struct Generator<R> {
    provisioner: Provisioner<R>,
}

impl<R: CommandRunner> Generator<R> {
    /// Create a generator that provisions through `runner`
    #[must_use]
    pub fn new(config: &ForgeConfig, runner: R) -> Self {
        Self {
            provisioner: Provisioner::new(runner, config.provisioning.clone()),
        }
    }

    /// Generate the project described by `layout`
    ///
    /// # Errors
    ///
    /// Returns the first template, filesystem or provisioning error. Whatever
    /// was created before the failure is left in place.
    pub fn generate(
        &self,
        layout: &ProjectLayout,
        mut on_progress: impl FnMut(Progress),
    ) -> Result<GeneratedProject> {
        tracing::info!(name = %layout.name(), root = %layout.root().display(), "generating project");

        let rendered = ProjectTemplate::new(layout.name()).render()?;

        on_progress(Progress::WritingFiles);
        let files = materialize(layout, &rendered)?;

        let manifest = self
            .provisioner
            .provision(layout.root(), |step| on_progress(Progress::Provisioning(step)))?;

        Ok(GeneratedProject {
            name: layout.name().clone(),
            root: layout.root().to_path_buf(),
            files,
            manifest,
        })
    }
}
