use include_dir::{include_dir, Dir};
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::errors::{ImportExportError, ImportExportResult};

static SAMPLE_DIR: Dir = include_dir!("sample");

pub fn generate_template(exporter: &str) -> Option<String> {
    info!("Generating exporter template: {}", exporter);
    match exporter {
        "svg" | "custom" => Some(crate::export::to_custom::get_template()),
        _ => {
            error!("Unsupported exporter: {} - use svg", exporter);
            None
        }
    }
}

pub fn generate_sample(dir: &str) -> ImportExportResult<()> {
    info!("Generating sample project: {:?}", dir);
    let target_path = Path::new(dir);
    fs::create_dir_all(target_path).map_err(|e| ImportExportError::io(target_path, e))?;

    fn write_dir_contents(dir: &Dir, target_path: &Path) -> ImportExportResult<()> {
        for file in dir.files() {
            let target_file_path = target_path.join(file.path());

            if let Some(parent) = target_file_path.parent() {
                fs::create_dir_all(parent).map_err(|e| ImportExportError::io(parent, e))?;
            }

            fs::write(&target_file_path, file.contents())
                .map_err(|e| ImportExportError::io(&target_file_path, e))?;
        }

        for sub_dir in dir.dirs() {
            write_dir_contents(sub_dir, target_path)?;
        }
        Ok(())
    }

    write_dir_contents(&SAMPLE_DIR, target_path)?;

    info!("Sample project generated successfully at: {:?}", dir);
    Ok(())
}
