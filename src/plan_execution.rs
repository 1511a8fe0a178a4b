use crate::common::write_string_to_file;
use crate::data_loader;
use crate::export;
use crate::layout::{LayoutAdapter, SolvedGraph};
use crate::pipeline::GraphBuilder;
use crate::plan::Plan;
use tracing::{debug, info};

use anyhow::{Context, Result};
use std::path::Path;

pub fn execute_plan(plan: &str) -> Result<()> {
    info!("Executing plan");

    let plan_file_path = Path::new(plan);
    let path_content = std::fs::read_to_string(plan_file_path)
        .with_context(|| format!("Failed to read plan file {}", plan_file_path.display()))?;
    let plan: Plan = serde_yaml::from_str(&path_content)?;

    debug!("Executing plan: {:?}", plan);

    let base_dir = plan_file_path.parent().unwrap_or_else(|| Path::new(""));
    run_plan(&plan, base_dir)?;

    Ok(())
}

/// Load, build, lay out and export according to `plan`.
///
/// Relative filenames in the plan are resolved against `base_dir`. Stops at
/// the first failing step; a profile whose render fails writes nothing.
pub fn run_plan(plan: &Plan, base_dir: &Path) -> Result<SolvedGraph> {
    let input_path = base_dir.join(&plan.input.filename);
    info!("Importing file: {}", input_path.display());
    let records = data_loader::load_records(&input_path, &plan.input.records_key)?;

    let graph = GraphBuilder::new(plan.build.clone()).build(&records)?;
    debug!(
        "Graph: {}",
        serde_json::to_string(&graph).unwrap_or_else(|e| e.to_string())
    );

    let adapter = LayoutAdapter::new(plan.layout.to_layout_config());
    info!(
        "Laying out into {:?} aligned {:?}",
        adapter.config().extent,
        adapter.config().align
    );
    let solved = adapter.layout(&graph)?;

    let canvas = plan.layout.canvas();
    for profile in &plan.export.profiles {
        info!(
            "Exporting file: {} using exporter {:?}",
            profile.filename, profile.exporter
        );
        let output = export::render(&solved, &profile.exporter, canvas, base_dir)?;
        write_string_to_file(&base_dir.join(&profile.filename), &output)?;
    }

    Ok(solved)
}
