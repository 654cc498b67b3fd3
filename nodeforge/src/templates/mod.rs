//! Project template registry
//!
//! Every generated file is listed in [`TEMPLATE_FILES`]. Rendering happens up
//! front in [`ProjectTemplate::render`], so the full set of contents is known
//! before anything touches the filesystem.

use handlebars::Handlebars;
use serde_json::json;
use std::path::PathBuf;

use crate::error::{ForgeError, Result};
use crate::layout::ProjectName;

pub mod files;
pub use files::*;

/// A generated file: output path and template source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Output path relative to the project root
    pub path: &'static str,
    /// Handlebars source (`{{project_name}}` is the only variable)
    pub source: &'static str,
}

/// All generated files, in write order
pub const TEMPLATE_FILES: &[TemplateFile] = &[
    TemplateFile { path: "src/app.js", source: APP_JS },
    TemplateFile { path: "server.js", source: SERVER_JS },
    TemplateFile { path: "src/routes/example.routes.js", source: ROUTES_JS },
    TemplateFile { path: "src/controllers/example.controller.js", source: CONTROLLER_JS },
    TemplateFile { path: "src/services/example.service.js", source: SERVICE_JS },
    TemplateFile { path: "src/models/example.model.js", source: MODEL_JS },
    TemplateFile { path: "src/middlewares/error.middleware.js", source: ERROR_MIDDLEWARE_JS },
    TemplateFile { path: ".env", source: ENV_FILE },
    TemplateFile { path: ".gitignore", source: GITIGNORE },
    TemplateFile { path: "README.md", source: README_MD },
];

/// A rendered template ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Output path relative to the project root
    pub path: PathBuf,
    /// File contents
    pub contents: String,
}

/// Project template renderer
pub struct ProjectTemplate {
    name: ProjectName,
    handlebars: Handlebars<'static>,
}

impl ProjectTemplate {
    /// Create a new project template
    #[must_use]
    pub fn new(name: &ProjectName) -> Self {
        let mut handlebars = Handlebars::new();

        // Generated sources are not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            name: name.clone(),
            handlebars,
        }
    }

    /// Render every entry of [`TEMPLATE_FILES`]
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Template`] if a template fails to render.
    pub fn render(&self) -> Result<Vec<RenderedFile>> {
        let context = json!({
            "project_name": self.name.as_str(),
        });

        TEMPLATE_FILES
            .iter()
            .map(|template| {
                let contents = self
                    .handlebars
                    .render_template(template.source, &context)
                    .map_err(|source| ForgeError::Template {
                        path: template.path,
                        source: Box::new(source),
                    })?;

                Ok(RenderedFile {
                    path: PathBuf::from(template.path),
                    contents,
                })
            })
            .collect()
    }
}
