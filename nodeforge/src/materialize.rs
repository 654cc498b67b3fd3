//! Directory and file creation for a planned project

use std::fs;
use std::path::PathBuf;

use crate::error::{ForgeError, Result};
use crate::layout::ProjectLayout;
use crate::templates::RenderedFile;

/// Create the project tree and write every rendered file
///
/// Directories are created with `create_dir_all`, so intermediate segments
/// that already exist are fine. Nothing is cleaned up on failure: a partial
/// tree stays behind and must be removed by hand before retrying.
///
/// Returns the absolute paths of the written files, in write order.
///
/// # Errors
///
/// Returns [`ForgeError::Io`] naming the path of the first directory or file
/// that could not be created.
pub fn materialize(layout: &ProjectLayout, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
    for dir in layout.absolute_directories() {
        fs::create_dir_all(&dir).map_err(|err| ForgeError::io(&dir, err))?;
        tracing::debug!(path = %dir.display(), "created directory");
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = layout.root().join(&file.path);
        fs::write(&path, &file.contents).map_err(|err| ForgeError::io(&path, err))?;
        tracing::debug!(path = %path.display(), bytes = file.contents.len(), "wrote file");
        written.push(path);
    }

    tracing::info!(
        root = %layout.root().display(),
        files = written.len(),
        "materialized project"
    );

    Ok(written)
}
