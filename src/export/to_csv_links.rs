use csv::Writer;

use crate::errors::{ImportExportError, ImportExportResult};
use crate::layout::SolvedGraph;

pub fn render(solved: &SolvedGraph) -> ImportExportResult<String> {
    let mut wtr = Writer::from_writer(vec![]);

    // Write the header
    wtr.write_record(["index", "source", "target", "value", "width", "y0", "y1", "path"])?;

    for link in &solved.links {
        wtr.write_record(&[
            link.index.to_string(),
            link.source.clone(),
            link.target.clone(),
            link.value.to_string(),
            link.width.to_string(),
            link.y0.to_string(),
            link.y1.to_string(),
            link.path.clone(),
        ])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ImportExportError::ExportFailed(e.to_string()))?;
    String::from_utf8(data).map_err(|e| ImportExportError::ExportFailed(e.to_string()))
}
