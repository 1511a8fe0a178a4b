use serde::{Deserialize, Serialize};

use crate::graph::NodeCategory;

pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Ordinal color scale keyed by node category.
///
/// Categories take palette entries in tier order, wrapping when the palette is
/// shorter than the number of categories.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColorScale {
    pub palette: Vec<String>,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(CATEGORY10.iter().map(|c| c.to_string()).collect())
    }
}

impl ColorScale {
    pub fn new(palette: Vec<String>) -> Self {
        Self { palette }
    }

    pub fn color_for(&self, category: NodeCategory) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        let position = NodeCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0);
        self.palette
            .get(position % self.palette.len())
            .map(String::as_str)
    }
}
