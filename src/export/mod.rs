pub mod to_csv_links;
pub mod to_csv_nodes;
pub mod to_custom;
pub mod to_json;

use serde::Serialize;
use std::path::Path;

use crate::errors::ImportExportResult;
use crate::layout::SolvedGraph;
use crate::plan::ExportFileType;

/// Size of the drawing surface the solved geometry was computed for.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// Render solved geometry with the given exporter.
///
/// `base_dir` anchors relative template paths of custom exporters.
pub fn render(
    solved: &SolvedGraph,
    exporter: &ExportFileType,
    canvas: Canvas,
    base_dir: &Path,
) -> ImportExportResult<String> {
    match exporter {
        ExportFileType::JSON => to_json::render(solved),
        ExportFileType::CSVNodes => to_csv_nodes::render(solved),
        ExportFileType::CSVLinks => to_csv_links::render(solved),
        ExportFileType::Custom(params) => to_custom::render(solved, canvas, params, base_dir),
    }
}

/// Common context used by template-based exports
pub mod renderer {
    use super::Canvas;
    use crate::graph::NodeCategory;
    use crate::layout::SolvedGraph;
    use serde_json::{json, Value};

    pub fn create_standard_context(solved: &SolvedGraph, canvas: Canvas) -> Value {
        let categories: Vec<Value> = NodeCategory::ALL
            .iter()
            .map(|category| {
                json!({
                    "category": category,
                    "nodes": solved
                        .nodes
                        .iter()
                        .filter(|n| n.category == *category)
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        json!({
            "canvas": canvas,
            "nodes": solved.nodes,
            "links": solved.links,
            "categories": categories,
        })
    }
}
