//! Project scaffolding command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use nodeforge::{
    CommandRunner, ForgeConfig, GeneratedProject, Generator, Manifest, Progress, ProjectLayout,
    ProjectName, ProvisionStep, SystemCommandRunner,
};
use std::path::Path;

/// Create a new backend project
pub struct NewCommand {
    layout: ProjectLayout,
    config: ForgeConfig,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Project name; the configured default is used when missing or empty
    /// * `cwd` - Directory the project is created in
    /// * `config` - Loaded configuration
    ///
    /// # Errors
    ///
    /// Fails if something already exists at `cwd/name`.
    pub fn new(name: Option<String>, cwd: &Path, config: ForgeConfig) -> Result<Self> {
        let name = ProjectName::from_arg(name, &config.default_project_name);
        let layout = ProjectLayout::plan(cwd, &name)?;

        Ok(Self { layout, config })
    }

    /// Project name this command will generate
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        self.layout.name()
    }

    /// Execute the command against the system package manager
    ///
    /// # Errors
    ///
    /// Returns the first filesystem or provisioning failure.
    pub fn execute(&self) -> Result<()> {
        self.execute_with(SystemCommandRunner)?;
        Ok(())
    }

    /// Execute the command with an explicit command runner
    ///
    /// # Errors
    ///
    /// Returns the first filesystem or provisioning failure.
    pub fn execute_with<R: CommandRunner>(&self, runner: R) -> Result<GeneratedProject> {
        println!(
            "{} {} {}",
            style("🚀 Creating").green().bold(),
            style("backend project:").bold(),
            style(self.name()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let generator = Generator::new(&self.config, runner);
        let result = generator.generate(&self.layout, |progress| match progress {
            Progress::WritingFiles => spinner.set_message("Generating project files..."),
            Progress::Provisioning(step) => {
                // package manager output goes straight to the terminal
                if !spinner.is_finished() {
                    spinner.finish_and_clear();
                }
                self.print_step(step);
            }
        });
        spinner.finish_and_clear();

        let project = result?;
        self.print_success(&project);

        Ok(project)
    }

    fn print_step(&self, step: ProvisionStep) {
        let package_manager = &self.config.provisioning.package_manager;
        match step {
            ProvisionStep::InitManifest => println!(
                "{} {}",
                style("📦 Initializing").green().bold(),
                style(format!("{package_manager}...")).bold()
            ),
            ProvisionStep::PatchScripts => {
                println!("{}", style("   Adding start and dev scripts").dim());
            }
            ProvisionStep::InstallDependencies => println!(
                "{} {}",
                style("📦 Installing").green().bold(),
                style("dependencies...").bold()
            ),
            ProvisionStep::InstallDevDependencies => println!(
                "{} {}",
                style("📦 Installing").green().bold(),
                style("dev dependencies...").bold()
            ),
        }
    }

    /// Print success message with next steps
    fn print_success(&self, project: &GeneratedProject) {
        println!();
        println!("{}", style("✅ Backend setup complete!").green().bold());
        if let Some(package) = package_label(&project.manifest) {
            println!("   {} {}", style("Package:").dim(), style(package).cyan());
        }
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!(
            "  {} {} {}",
            style("👉").cyan(),
            style("$").dim(),
            style(format!("cd {}", project.name)).cyan()
        );
        println!(
            "  {} {} {}",
            style("👉").cyan(),
            style("$").dim(),
            style(format!("{} run dev", self.config.provisioning.package_manager)).cyan()
        );
        println!();
        println!(
            "  Then open {}",
            style("http://localhost:5000/api/examples").cyan().underlined()
        );
    }
}

/// `name@version` from the manifest, or just the name when unversioned
fn package_label(manifest: &Manifest) -> Option<String> {
    let name = manifest.name()?;
    Some(manifest.version().map_or_else(
        || name.to_string(),
        |version| format!("{name}@{version}"),
    ))
}
