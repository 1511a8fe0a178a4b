use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

use crate::errors::{GraphError, GraphResult};

/// Id of the single node every flow passes through.
pub const CENTER_NODE_ID: &str = "JMU";
pub const CENTER_NODE_TITLE: &str = "JMU";

/// Tier of a node in the five-tier flow
/// `incomeItem -> incomeCategory -> center -> expenseCategory -> expenseItem`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum NodeCategory {
    IncomeItem,
    IncomeCategory,
    Center,
    ExpenseCategory,
    ExpenseItem,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 5] = [
        NodeCategory::IncomeItem,
        NodeCategory::IncomeCategory,
        NodeCategory::Center,
        NodeCategory::ExpenseCategory,
        NodeCategory::ExpenseItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::IncomeItem => "incomeItem",
            NodeCategory::IncomeCategory => "incomeCategory",
            NodeCategory::Center => "center",
            NodeCategory::ExpenseCategory => "expenseCategory",
            NodeCategory::ExpenseItem => "expenseItem",
        }
    }

    /// Generated node id for the `index`th member of this category's bucket.
    pub fn node_id(&self, index: usize) -> String {
        match self {
            NodeCategory::Center => CENTER_NODE_ID.to_string(),
            _ => format!("{}{}", self.as_str(), index),
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub value: f64,
    pub title: String,
    pub category: NodeCategory,
}

impl Node {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        value: f64,
        category: NodeCategory,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            title: title.into(),
            category,
        }
    }

    pub fn center() -> Self {
        Self::new(CENTER_NODE_ID, CENTER_NODE_TITLE, 0.0, NodeCategory::Center)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub value: f64,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>, value: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value,
        }
    }
}

/// Nodes and links of one dataset load.
///
/// The fields are private: a `FlowGraph` can only be obtained through
/// [`FlowGraph::new`], which checks integrity, and is never changed afterwards.
/// Layout works on copies (see [`FlowGraph::to_parts`]).
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct FlowGraph {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl FlowGraph {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> GraphResult<Self> {
        let graph = Self { nodes, links };
        if let Err(errors) = graph.verify_graph_integrity() {
            return Err(GraphError::InvalidStructure(errors.join("; ")));
        }
        debug!("Graph built: {}", graph.stats());
        Ok(graph)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Owned copies of the node and link lists, leaving this graph untouched.
    pub fn to_parts(&self) -> (Vec<Node>, Vec<Link>) {
        (self.nodes.clone(), self.links.clone())
    }

    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn nodes_in(&self, category: NodeCategory) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.category == category)
            .collect()
    }

    /// Sum of link values entering `name`.
    pub fn inflow(&self, name: &str) -> f64 {
        self.links
            .iter()
            .filter(|l| l.target == name)
            .map(|l| l.value)
            .sum()
    }

    /// Sum of link values leaving `name`.
    pub fn outflow(&self, name: &str) -> f64 {
        self.links
            .iter()
            .filter(|l| l.source == name)
            .map(|l| l.value)
            .sum()
    }

    pub fn stats(&self) -> String {
        let per_category = NodeCategory::ALL
            .iter()
            .map(|c| format!("{}: {}", c, self.nodes_in(*c).len()))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Nodes: {} ({}), Links: {}",
            self.nodes.len(),
            per_category,
            self.links.len()
        )
    }

    pub fn verify_graph_integrity(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let mut node_ids: HashSet<&str> = HashSet::new();

        for node in &self.nodes {
            if !node_ids.insert(node.name.as_str()) {
                errors.push(format!("Node id:[{}] is not unique", node.name));
            }
        }

        for (idx, link) in self.links.iter().enumerate() {
            if !node_ids.contains(link.source.as_str()) {
                errors.push(format!(
                    "Link #{} source {:?} not found in nodes",
                    idx, link.source
                ));
            }
            if !node_ids.contains(link.target.as_str()) {
                errors.push(format!(
                    "Link #{} target {:?} not found in nodes",
                    idx, link.target
                ));
            }
            if link.value.is_nan() || link.value < 0.0 {
                errors.push(format!(
                    "Link #{} {} -> {} has invalid value {}",
                    idx, link.source, link.target, link.value
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            warn!("Graph integrity check found {} problem(s)", errors.len());
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> FlowGraph {
        FlowGraph::new(
            vec![
                Node::new("incomeItem0", "Tuition", 100.0, NodeCategory::IncomeItem),
                Node::new(
                    "incomeCategory0",
                    "Operating revenues",
                    0.0,
                    NodeCategory::IncomeCategory,
                ),
                Node::center(),
            ],
            vec![
                Link::new("incomeItem0", "incomeCategory0", 100.0),
                Link::new("incomeCategory0", CENTER_NODE_ID, 0.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_node_id_generation() {
        assert_eq!(NodeCategory::IncomeItem.node_id(3), "incomeItem3");
        assert_eq!(NodeCategory::ExpenseCategory.node_id(0), "expenseCategory0");
        assert_eq!(NodeCategory::Center.node_id(7), "JMU");
    }

    #[test]
    fn test_category_serializes_camel_case() {
        let json = serde_json::to_string(&NodeCategory::ExpenseItem).unwrap();
        assert_eq!(json, "\"expenseItem\"");
        let parsed: NodeCategory = serde_json::from_str("\"incomeCategory\"").unwrap();
        assert_eq!(parsed, NodeCategory::IncomeCategory);
    }

    #[test]
    fn test_get_node_and_flows() {
        let graph = create_test_graph();
        assert_eq!(graph.get_node("JMU").unwrap().title, "JMU");
        assert!(graph.get_node("expenseItem0").is_none());
        assert_eq!(graph.outflow("incomeItem0"), 100.0);
        assert_eq!(graph.inflow("incomeCategory0"), 100.0);
        assert_eq!(graph.inflow(CENTER_NODE_ID), 0.0);
        assert_eq!(graph.nodes_in(NodeCategory::Center).len(), 1);
    }

    #[test]
    fn test_to_parts_leaves_graph_intact() {
        let graph = create_test_graph();
        let (mut nodes, mut links) = graph.to_parts();
        nodes[0].value = -1.0;
        links.clear();
        assert_eq!(graph.nodes()[0].value, 100.0);
        assert_eq!(graph.links().len(), 2);
    }

    #[test]
    fn test_verify_graph_integrity() {
        let result = FlowGraph::new(
            vec![Node::center(), Node::center()],
            vec![
                Link::new(CENTER_NODE_ID, "expenseCategory0", 5.0),
                Link::new(CENTER_NODE_ID, CENTER_NODE_ID, -1.0),
            ],
        );
        match result {
            Err(GraphError::InvalidStructure(message)) => {
                assert!(message.contains("is not unique"));
                assert!(message.contains("\"expenseCategory0\" not found"));
                assert!(message.contains("invalid value -1"));
            }
            other => panic!("Expected InvalidStructure, got {:?}", other),
        }
    }

    #[test]
    fn test_stats() {
        let graph = create_test_graph();
        assert_eq!(
            graph.stats(),
            "Nodes: 3 (incomeItem: 1, incomeCategory: 1, center: 1, expenseCategory: 0, expenseItem: 0), Links: 2"
        );
    }
}
