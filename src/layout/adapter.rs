use std::sync::Arc;
use tracing::{debug, info};

use super::{LayoutConfig, LayoutSolver, SankeySolver, SolvedGraph};
use crate::errors::LayoutResult;
use crate::graph::FlowGraph;

/// Binds flow graphs to a layout solver under one fixed configuration.
///
/// The adapter never mutates the graph it is given; the solver works on
/// copies, so one graph can be laid out any number of times.
#[derive(Clone)]
pub struct LayoutAdapter {
    config: LayoutConfig,
    solver: Arc<dyn LayoutSolver>,
}

impl Default for LayoutAdapter {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutAdapter {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_solver(config, Arc::new(SankeySolver::new()))
    }

    pub fn with_solver(config: LayoutConfig, solver: Arc<dyn LayoutSolver>) -> Self {
        Self { config, solver }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self, graph: &FlowGraph) -> LayoutResult<SolvedGraph> {
        debug!("Laying out graph ({}) with {:?}", graph.stats(), self.config);
        let (nodes, links) = graph.to_parts();
        let mut solved = self.solver.solve(nodes, links, &self.config)?;

        for node in &mut solved.nodes {
            node.color = self
                .config
                .colors
                .color_for(node.category)
                .map(str::to_string);
        }

        info!("Layout solved: {}", solved.stats());
        Ok(solved)
    }
}
