//! Sankey layout
//!
//! The [`LayoutAdapter`] hands copies of a [`FlowGraph`](crate::graph::FlowGraph)
//! to a [`LayoutSolver`] and returns the solved geometry for rendering.
//! [`SankeySolver`] is the default solver.
//!
//! ```text
//! FlowGraph ──copies──> LayoutSolver::solve ──> SolvedGraph
//!                              ▲                    ├── nodes: x0,x1,y0,y1, color
//!                        LayoutConfig               └── links: width, y0,y1, path
//! ```

pub mod adapter;
pub mod color;
pub mod sankey;

pub use adapter::LayoutAdapter;
pub use color::ColorScale;
pub use sankey::SankeySolver;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{LayoutError, LayoutResult};
use crate::graph::{Link, Node, NodeCategory};

/// Computes node bands and link paths for a graph inside a drawing area.
pub trait LayoutSolver: Send + Sync {
    fn solve(
        &self,
        nodes: Vec<Node>,
        links: Vec<Link>,
        config: &LayoutConfig,
    ) -> LayoutResult<SolvedGraph>;
}

/// Horizontal placement policy for nodes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeAlign {
    /// Column = depth from the sources.
    Left,
    /// Column = distance from the sinks.
    Right,
    /// Sources are pulled next to their first target.
    Center,
    /// Like `Left`, but sinks are pushed to the last column.
    #[default]
    Justify,
}

/// Drawing rectangle, `[[x0, y0], [x1, y1]]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Extent {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn validate(&self) -> LayoutResult<()> {
        let coords = [self.x0, self.y0, self.x1, self.y1];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(LayoutError::InvalidExtent(format!(
                "coordinates must be finite, got {:?}",
                coords
            )));
        }
        if self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(LayoutError::InvalidExtent(format!(
                "[[{}, {}], [{}, {}]] has no area",
                self.x0, self.y0, self.x1, self.y1
            )));
        }
        Ok(())
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(1.0, 5.0, 959.0, 595.0)
    }
}

/// Node identity used to resolve link endpoints.
pub type NodeIdAccessor = fn(&Node) -> &str;

pub fn node_name(node: &Node) -> &str {
    &node.name
}

/// Everything a layout run depends on. Built once and shared read-only.
#[derive(Clone)]
pub struct LayoutConfig {
    pub node_id: NodeIdAccessor,
    pub align: NodeAlign,
    pub node_width: f64,
    pub node_padding: f64,
    pub extent: Extent,
    pub iterations: usize,
    pub colors: ColorScale,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_id: node_name,
            align: NodeAlign::Justify,
            node_width: 15.0,
            node_padding: 10.0,
            extent: Extent::default(),
            iterations: 6,
            colors: ColorScale::default(),
        }
    }
}

impl fmt::Debug for LayoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutConfig")
            .field("align", &self.align)
            .field("node_width", &self.node_width)
            .field("node_padding", &self.node_padding)
            .field("extent", &self.extent)
            .field("iterations", &self.iterations)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> LayoutResult<()> {
        self.extent.validate()?;
        if !self.node_width.is_finite() || self.node_width < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "node width must be a non-negative number, got {}",
                self.node_width
            )));
        }
        if self.node_width > self.extent.width() {
            return Err(LayoutError::InvalidConfig(format!(
                "node width {} exceeds extent width {}",
                self.node_width,
                self.extent.width()
            )));
        }
        if !self.node_padding.is_finite() || self.node_padding < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "node padding must be a non-negative number, got {}",
                self.node_padding
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SolvedNode {
    pub name: String,
    pub title: String,
    pub category: NodeCategory,
    /// max(total inflow, total outflow)
    pub value: f64,
    pub depth: usize,
    pub height: usize,
    pub layer: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SolvedLink {
    pub index: usize,
    pub source: String,
    pub target: String,
    pub value: f64,
    /// Stroke width, never below 1 so empty flows stay visible.
    pub width: f64,
    /// Thickness of the link's band inside its nodes.
    pub band_width: f64,
    pub y0: f64,
    pub y1: f64,
    /// Start (source right edge) and end (target left edge) of the link.
    pub points: [[f64; 2]; 2],
    pub path: String,
}

/// Solved geometry handed to the presentation layer.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SolvedGraph {
    pub nodes: Vec<SolvedNode>,
    pub links: Vec<SolvedLink>,
}

impl SolvedGraph {
    pub fn get_node(&self, name: &str) -> Option<&SolvedNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn stats(&self) -> String {
        let columns = self.nodes.iter().map(|n| n.layer + 1).max().unwrap_or(0);
        format!(
            "Nodes: {}, Links: {}, Columns: {}",
            self.nodes.len(),
            self.links.len(),
            columns
        )
    }
}

/// SVG path for a horizontal link: a cubic curve with both control points at
/// the horizontal midpoint.
pub fn horizontal_link_path(points: &[[f64; 2]; 2]) -> String {
    let [[x0, y0], [x1, y1]] = *points;
    let mid = (x0 + x1) / 2.0;
    format!("M{},{}C{},{},{},{},{},{}", x0, y0, mid, y0, mid, y1, x1, y1)
}
