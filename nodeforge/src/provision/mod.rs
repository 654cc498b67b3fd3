//! Manifest initialization and dependency installation
//!
//! Provisioning runs four steps in order against the project root:
//!
//! 1. `npm init -y`
//! 2. patch `package.json` scripts to `start`/`dev`
//! 3. `npm install express cors dotenv`
//! 4. `npm install -D nodemon`
//!
//! Every step must succeed before the next one starts. A non-zero exit aborts
//! the run and leaves the project as it is.

use std::fmt;
use std::path::Path;

use crate::config::ProvisioningSettings;
use crate::error::{ForgeError, Result};
use crate::manifest::Manifest;

pub mod runner;
pub use runner::{CommandLine, CommandRunner, CommandStatus, SystemCommandRunner};

#[cfg(test)]
pub use runner::MockCommandRunner;

/// A provisioning step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisionStep {
    /// Create `package.json` with the package manager
    InitManifest,
    /// Replace the manifest's scripts
    PatchScripts,
    /// Install runtime dependencies
    InstallDependencies,
    /// Install development-only dependencies
    InstallDevDependencies,
}

impl ProvisionStep {
    /// All steps in execution order
    pub const ALL: [Self; 4] = [
        Self::InitManifest,
        Self::PatchScripts,
        Self::InstallDependencies,
        Self::InstallDevDependencies,
    ];
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InitManifest => "Initializing manifest",
            Self::PatchScripts => "Patching scripts",
            Self::InstallDependencies => "Installing dependencies",
            Self::InstallDevDependencies => "Installing dev dependencies",
        };
        f.write_str(label)
    }
}

/// Runs the provisioning steps through a [`CommandRunner`]
pub struct Provisioner<R> {
    runner: R,
    settings: ProvisioningSettings,
}

impl<R: CommandRunner> Provisioner<R> {
    /// Create a provisioner
    pub const fn new(runner: R, settings: ProvisioningSettings) -> Self {
        Self { runner, settings }
    }

    /// Command line for an external step, `None` for in-process or skipped steps
    #[must_use]
    pub fn command_for(&self, step: ProvisionStep) -> Option<CommandLine> {
        let pm = &self.settings.package_manager;
        match step {
            ProvisionStep::InitManifest => Some(CommandLine::new(pm, ["init", "-y"])),
            ProvisionStep::PatchScripts => None,
            ProvisionStep::InstallDependencies => {
                Self::install(pm, &[], &self.settings.dependencies)
            }
            ProvisionStep::InstallDevDependencies => {
                Self::install(pm, &["-D"], &self.settings.dev_dependencies)
            }
        }
    }

    fn install(pm: &str, flags: &[&str], packages: &[String]) -> Option<CommandLine> {
        if packages.is_empty() {
            return None;
        }

        let args = std::iter::once("install")
            .chain(flags.iter().copied())
            .chain(packages.iter().map(String::as_str));
        Some(CommandLine::new(pm, args))
    }

    /// Run every step against `root`, calling `on_step` before each one
    ///
    /// Returns the manifest as it was written by the patch step.
    ///
    /// # Errors
    ///
    /// Returns the first failure: [`ForgeError::Spawn`] or
    /// [`ForgeError::CommandFailed`] from an external step, or a manifest error
    /// from the patch step. No later step runs after a failure.
    pub fn provision(
        &self,
        root: &Path,
        mut on_step: impl FnMut(ProvisionStep),
    ) -> Result<Manifest> {
        let mut manifest = None;

        for step in ProvisionStep::ALL {
            on_step(step);

            if step == ProvisionStep::PatchScripts {
                manifest = Some(Manifest::patch_scripts(root)?);
                continue;
            }

            if let Some(command) = self.command_for(step) {
                self.run_step(step, &command, root)?;
            } else {
                tracing::warn!(%step, "no packages configured, skipping");
            }
        }

        tracing::info!(root = %root.display(), "provisioning complete");

        // Only reached if PatchScripts is dropped from ALL
        manifest.map_or_else(|| Manifest::load(root), Ok)
    }

    fn run_step(&self, step: ProvisionStep, command: &CommandLine, root: &Path) -> Result<()> {
        tracing::info!(%step, %command, "running provisioning step");

        let status = self.runner.run(command, root)?;
        if !status.success() {
            return Err(ForgeError::CommandFailed {
                step,
                command: command.to_string(),
                status,
            });
        }

        Ok(())
    }
}
