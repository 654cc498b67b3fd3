//! Project name and target layout planning

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{ForgeError, Result};

/// Project name used when none is supplied
pub const DEFAULT_PROJECT_NAME: &str = "backend";

/// Directories created under the target root, parents before children
pub const PROJECT_DIRECTORIES: &[&str] = &[
    "src",
    "src/routes",
    "src/controllers",
    "src/services",
    "src/models",
    "src/config",
    "src/middlewares",
];

/// Name of the project to generate
///
/// Used verbatim as the directory name and embedded in the generated README.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a project name, substituting `default` when `arg` is missing or empty
    #[must_use]
    pub fn from_arg(arg: Option<String>, default: &str) -> Self {
        match arg {
            Some(name) if !name.is_empty() => Self(name),
            _ => Self(default.to_string()),
        }
    }

    /// Borrow the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_string())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolved location and directory plan for a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    name: ProjectName,
    root: PathBuf,
    directories: Vec<PathBuf>,
}

impl ProjectLayout {
    /// Plan the layout for `name` under `cwd`
    ///
    /// Pure apart from the existence check on the target root.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::AlreadyExists`] if anything (file, directory or
    /// symlink) is already present at `cwd/name`.
    pub fn plan(cwd: &Path, name: &ProjectName) -> Result<Self> {
        let root = resolve_root(cwd, name);

        // symlink_metadata so a dangling link still counts as taken
        if fs::symlink_metadata(&root).is_ok() {
            return Err(ForgeError::AlreadyExists {
                name: name.to_string(),
                path: root,
            });
        }

        let directories = PROJECT_DIRECTORIES.iter().map(PathBuf::from).collect();

        tracing::debug!(root = %root.display(), "planned project layout");

        Ok(Self {
            name: name.clone(),
            root,
            directories,
        })
    }

    /// Project name
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Absolute target root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories to create, relative to the root
    #[must_use]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Absolute paths of every directory to create, root first
    pub fn absolute_directories(&self) -> impl Iterator<Item = PathBuf> + '_ {
        std::iter::once(self.root.clone())
            .chain(self.directories.iter().map(|dir| self.root.join(dir)))
    }

    /// Whether `relative` (a file path under the root) has a planned parent
    #[cfg(test)]
    pub(crate) fn covers(&self, relative: &Path) -> bool {
        match relative.parent() {
            None => true,
            Some(parent) if parent.as_os_str().is_empty() => true,
            Some(parent) => self.directories.iter().any(|dir| dir == parent),
        }
    }
}

/// Join `name` onto `cwd`, dropping root and prefix components
///
/// `Path::join` replaces the base when handed an absolute path, which would
/// place the project outside the working directory.
fn resolve_root(cwd: &Path, name: &ProjectName) -> PathBuf {
    let relative: PathBuf = Path::new(name.as_str())
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect();

    cwd.join(relative)
}
