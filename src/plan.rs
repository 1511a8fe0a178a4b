use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::data_loader::DEFAULT_RECORDS_KEY;
use crate::export::Canvas;
use crate::layout::{ColorScale, Extent, LayoutConfig, NodeAlign};
use crate::pipeline::BuildOptions;

/// ## Structure
/// This module contains the data structures for the plan file.
///
/// ```text
/// Plan
///   ├── input: InputConfig
///   │   ├── filename: String
///   │   └── records_key: String
///   ├── build: BuildOptions
///   │   ├── join: JoinStrategy (PositionalFallback | ExactKeyMatch)
///   │   └── buckets: BucketRules
///   ├── layout: LayoutProfile
///   │   ├── width / height / margin
///   │   ├── node_width / node_padding / iterations
///   │   ├── align: NodeAlign
///   │   └── palette: Option<Vec<String>>
///   └── export: ExportProfile
///       └── profiles: Vec<ExportProfileItem>
///           ├── filename: String
///           └── exporter: ExportFileType
///               ├── JSON
///               ├── CSVNodes
///               ├── CSVLinks
///               └── Custom(CustomExportProfile)
/// ```
///

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Plan {
    pub input: InputConfig,
    #[serde(default)]
    pub build: BuildOptions,
    #[serde(default)]
    pub layout: LayoutProfile,
    #[serde(default)]
    pub export: ExportProfile,
}

//
// Input configuration
//

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct InputConfig {
    pub filename: String,
    #[serde(default = "default_records_key")]
    pub records_key: String,
}

fn default_records_key() -> String {
    DEFAULT_RECORDS_KEY.to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            filename: "jmu-revenues.json".to_string(),
            records_key: default_records_key(),
        }
    }
}

//
// Layout configuration
//

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 5.0,
            right: 1.0,
            bottom: 5.0,
            left: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutProfile {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub node_width: f64,
    pub node_padding: f64,
    pub align: NodeAlign,
    pub iterations: usize,
    pub palette: Option<Vec<String>>,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
            margin: Margin::default(),
            node_width: 15.0,
            node_padding: 10.0,
            align: NodeAlign::Justify,
            iterations: 6,
            palette: None,
        }
    }
}

impl LayoutProfile {
    pub fn extent(&self) -> Extent {
        Extent::new(
            self.margin.left,
            self.margin.top,
            self.width - self.margin.right,
            self.height - self.margin.bottom,
        )
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn to_layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            align: self.align,
            node_width: self.node_width,
            node_padding: self.node_padding,
            extent: self.extent(),
            iterations: self.iterations,
            colors: self
                .palette
                .clone()
                .map(ColorScale::new)
                .unwrap_or_default(),
            ..Default::default()
        }
    }
}

//
// Export configuration
//

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportProfile {
    pub profiles: Vec<ExportProfileItem>,
}

impl Default for ExportProfile {
    fn default() -> Self {
        Self {
            profiles: vec![
                ExportProfileItem {
                    filename: "out/sankey.json".to_string(),
                    exporter: ExportFileType::JSON,
                },
                ExportProfileItem {
                    filename: "out/nodes.csv".to_string(),
                    exporter: ExportFileType::CSVNodes,
                },
                ExportProfileItem {
                    filename: "out/links.csv".to_string(),
                    exporter: ExportFileType::CSVLinks,
                },
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportProfileItem {
    pub filename: String,
    pub exporter: ExportFileType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CustomExportProfile {
    pub template: String,
    pub partials: Option<HashMap<String, String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ExportFileType {
    JSON,
    CSVNodes,
    CSVLinks,
    Custom(CustomExportProfile),
}
