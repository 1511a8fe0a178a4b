use csv::Writer;

use crate::errors::{ImportExportError, ImportExportResult};
use crate::layout::SolvedGraph;

pub fn render(solved: &SolvedGraph) -> ImportExportResult<String> {
    let mut wtr = Writer::from_writer(vec![]);

    // Write the header
    wtr.write_record([
        "name", "title", "category", "value", "layer", "x0", "x1", "y0", "y1", "color",
    ])?;

    for node in &solved.nodes {
        wtr.write_record(&[
            node.name.clone(),
            node.title.clone(),
            node.category.to_string(),
            node.value.to_string(),
            node.layer.to_string(),
            node.x0.to_string(),
            node.x1.to_string(),
            node.y0.to_string(),
            node.y1.to_string(),
            node.color.clone().unwrap_or_default(),
        ])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ImportExportError::ExportFailed(e.to_string()))?;
    String::from_utf8(data).map_err(|e| ImportExportError::ExportFailed(e.to_string()))
}
