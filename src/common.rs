use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;
use tracing::info;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::{ImportExportError, ImportExportResult};

pub fn create_path_if_not_exists(filename: &Path) -> ImportExportResult<()> {
    if let Some(parent) = filename.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating path: {:?}", parent);
            std::fs::create_dir_all(parent).map_err(|e| ImportExportError::io(parent, e))?;
        }
    }
    Ok(())
}

pub fn write_string_to_file(filename: &Path, content: &str) -> ImportExportResult<()> {
    create_path_if_not_exists(filename)?;
    let mut file = File::create(filename).map_err(|e| ImportExportError::io(filename, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ImportExportError::io(filename, e))?;
    Ok(())
}

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(exists: |v: Value| !v.is_null());
    handlebars.register_helper("exists", Box::new(exists));

    handlebars_helper!(isnull: |v: Value| v.is_null());
    handlebars.register_helper("isnull", Box::new(isnull));

    handlebars_helper!(stringeq: |s1: String, s2: String| s1.eq(&s2));
    handlebars.register_helper("stringeq", Box::new(stringeq));

    // Geometry arithmetic for SVG templates
    handlebars_helper!(add: |a: f64, b: f64| a + b);
    handlebars.register_helper("add", Box::new(add));

    handlebars_helper!(sub: |a: f64, b: f64| a - b);
    handlebars.register_helper("sub", Box::new(sub));

    handlebars_helper!(mid: |a: f64, b: f64| (a + b) / 2.0);
    handlebars.register_helper("mid", Box::new(mid));

    handlebars
}
