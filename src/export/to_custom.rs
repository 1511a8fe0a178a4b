use std::fs;
use std::path::Path;
use tracing::debug;

use super::renderer::create_standard_context;
use super::Canvas;
use crate::errors::{ImportExportError, ImportExportResult};
use crate::layout::SolvedGraph;
use crate::plan::CustomExportProfile;

pub fn render(
    solved: &SolvedGraph,
    canvas: Canvas,
    params: &CustomExportProfile,
    base_dir: &Path,
) -> ImportExportResult<String> {
    let mut handlebars = crate::common::get_handlebars();

    if let Some(partials) = &params.partials {
        for (name, partial) in partials {
            let partial_path = base_dir.join(partial);
            let partial_content = fs::read_to_string(&partial_path)
                .map_err(|e| ImportExportError::io(&partial_path, e))?;
            handlebars
                .register_partial(name, partial_content)
                .map_err(|e| ImportExportError::Template(e.to_string()))?;
            debug!("Registered partial '{}' from {}", name, partial_path.display());
        }
    }

    let template_path = base_dir.join(&params.template);
    let template = fs::read_to_string(&template_path)
        .map_err(|e| ImportExportError::io(&template_path, e))?;

    render_template(solved, canvas, &template, &handlebars)
}

pub fn render_template(
    solved: &SolvedGraph,
    canvas: Canvas,
    template: &str,
    handlebars: &handlebars::Handlebars<'_>,
) -> ImportExportResult<String> {
    handlebars
        .render_template(template, &create_standard_context(solved, canvas))
        .map_err(|e| ImportExportError::Template(e.to_string()))
}

/// Built-in SVG template, the starting point for custom exports.
pub fn get_template() -> String {
    include_str!("../../sample/jmu/sankey.hbs").to_string()
}
