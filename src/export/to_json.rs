use crate::errors::ImportExportResult;
use crate::layout::SolvedGraph;

pub fn render(solved: &SolvedGraph) -> ImportExportResult<String> {
    Ok(serde_json::to_string_pretty(solved)?)
}
