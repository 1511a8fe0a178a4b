use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data_loader::Record;
use crate::errors::{GraphError, GraphResult};
use crate::graph::{FlowGraph, Link, Node, NodeCategory, CENTER_NODE_ID};

pub const REVENUE_TYPES: [&str; 3] = [
    "Operating revenues",
    "Nonoperating revenues (expenses)",
    "Other revenues",
];

pub const EXPENSE_TYPES: [&str; 1] = ["Operating expense"];

/// Record types feeding each of the four bucketed node categories.
///
/// Records whose type appears in none of the lists are dropped silently.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BucketRules {
    pub income_items: Vec<String>,
    pub income_categories: Vec<String>,
    pub expense_categories: Vec<String>,
    pub expense_items: Vec<String>,
}

impl Default for BucketRules {
    fn default() -> Self {
        let revenue: Vec<String> = REVENUE_TYPES.iter().map(|t| t.to_string()).collect();
        let expense: Vec<String> = EXPENSE_TYPES.iter().map(|t| t.to_string()).collect();
        Self {
            income_items: revenue.clone(),
            income_categories: revenue,
            expense_categories: expense.clone(),
            expense_items: expense,
        }
    }
}

/// How an item node is paired with a category node.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinStrategy {
    /// Item `i` goes to category `i % category_count`, whatever its own
    /// category is. This is a placeholder relation, not a semantic join.
    #[default]
    PositionalFallback,
    /// Item goes to the category node titled with the item record's category.
    ExactKeyMatch,
}

impl JoinStrategy {
    fn pick<'a>(
        &self,
        index: usize,
        item: &BucketEntry,
        categories: &'a [BucketEntry],
    ) -> Option<&'a BucketEntry> {
        match self {
            JoinStrategy::PositionalFallback => {
                if categories.is_empty() {
                    None
                } else {
                    categories.get(index % categories.len())
                }
            }
            JoinStrategy::ExactKeyMatch => categories.iter().find(|c| c.key == item.key),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BuildOptions {
    pub join: JoinStrategy,
    pub buckets: BucketRules,
}

/// A node together with the record category it was derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketEntry {
    pub node: Node,
    pub key: String,
}

/// The four category-filtered node lists a graph is linked from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Buckets {
    pub income_items: Vec<BucketEntry>,
    pub income_categories: Vec<BucketEntry>,
    pub expense_categories: Vec<BucketEntry>,
    pub expense_items: Vec<BucketEntry>,
}

impl Buckets {
    /// Split records into buckets. Ordering follows the input after filtering.
    pub fn partition(records: &[Record], rules: &BucketRules) -> Self {
        let income_items = matching(records, &rules.income_items)
            .into_iter()
            .enumerate()
            .map(|(i, r)| BucketEntry {
                node: Node::new(
                    NodeCategory::IncomeItem.node_id(i),
                    &r.name,
                    r.value,
                    NodeCategory::IncomeItem,
                ),
                key: r.category.clone(),
            })
            .collect();

        // Revenue records carry no category-level amount, so these stay at 0.
        let income_categories = category_entries(
            matching(records, &rules.income_categories),
            NodeCategory::IncomeCategory,
            |_| 0.0,
        );

        let expense_categories = category_entries(
            matching(records, &rules.expense_categories),
            NodeCategory::ExpenseCategory,
            |r| r.value,
        );

        let expense_items = matching(records, &rules.expense_items)
            .into_iter()
            .enumerate()
            .map(|(i, r)| BucketEntry {
                node: Node::new(
                    NodeCategory::ExpenseItem.node_id(i),
                    &r.name,
                    0.0,
                    NodeCategory::ExpenseItem,
                ),
                key: r.category.clone(),
            })
            .collect();

        Self {
            income_items,
            income_categories,
            expense_categories,
            expense_items,
        }
    }

    pub fn sizes(&self) -> String {
        format!(
            "incomeItem: {}, incomeCategory: {}, expenseCategory: {}, expenseItem: {}",
            self.income_items.len(),
            self.income_categories.len(),
            self.expense_categories.len(),
            self.expense_items.len()
        )
    }
}

fn matching<'a>(records: &'a [Record], types: &[String]) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| types.iter().any(|t| *t == r.kind))
        .collect()
}

/// One node per distinct record category, in first-seen order, valued by
/// summing `amount` over the category's records.
///
/// Expense categories take their value from the records' `value` field. Once
/// records sharing a category collapse into one node, that value is the sum
/// of the merged records; a single-record category keeps its record's value.
fn category_entries(
    records: Vec<&Record>,
    category: NodeCategory,
    amount: impl Fn(&Record) -> f64,
) -> Vec<BucketEntry> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for record in records {
        *totals.entry(record.category.as_str()).or_insert(0.0) += amount(record);
    }

    totals
        .into_iter()
        .enumerate()
        .map(|(i, (title, value))| BucketEntry {
            node: Node::new(category.node_id(i), title, value, category),
            key: title.to_string(),
        })
        .collect()
}

/// Builds the five-tier flow graph from revenue records.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    options: BuildOptions,
}

impl GraphBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn build(&self, records: &[Record]) -> GraphResult<FlowGraph> {
        let buckets = Buckets::partition(records, &self.options.buckets);
        debug!("Partitioned {} records: {}", records.len(), buckets.sizes());
        self.link_buckets(buckets)
    }

    /// Generate links between already partitioned buckets.
    pub fn link_buckets(&self, buckets: Buckets) -> GraphResult<FlowGraph> {
        let join = self.options.join;
        let mut links = Vec::new();

        for (i, item) in buckets.income_items.iter().enumerate() {
            let category = join
                .pick(i, item, &buckets.income_categories)
                .ok_or_else(|| GraphError::LinkTargetUndefined {
                    node: item.node.name.clone(),
                    bucket: NodeCategory::IncomeCategory,
                })?;
            links.push(flow(&item.node.name, &category.node.name, item.node.value)?);
        }

        for category in &buckets.income_categories {
            links.push(flow(&category.node.name, CENTER_NODE_ID, category.node.value)?);
        }

        for category in &buckets.expense_categories {
            links.push(flow(CENTER_NODE_ID, &category.node.name, category.node.value)?);
        }

        for (i, item) in buckets.expense_items.iter().enumerate() {
            let category = join
                .pick(i, item, &buckets.expense_categories)
                .ok_or_else(|| GraphError::LinkTargetUndefined {
                    node: item.node.name.clone(),
                    bucket: NodeCategory::ExpenseCategory,
                })?;
            links.push(flow(&category.node.name, &item.node.name, item.node.value)?);
        }

        let nodes: Vec<Node> = buckets
            .income_items
            .into_iter()
            .chain(buckets.income_categories)
            .map(|e| e.node)
            .chain(std::iter::once(Node::center()))
            .chain(
                buckets
                    .expense_categories
                    .into_iter()
                    .chain(buckets.expense_items)
                    .map(|e| e.node),
            )
            .collect();

        let graph = FlowGraph::new(nodes, links)?;
        info!("Built flow graph: {}", graph.stats());
        Ok(graph)
    }
}

fn flow(source: &str, target: &str, value: f64) -> GraphResult<Link> {
    if value < 0.0 {
        return Err(GraphError::NegativeFlow {
            from: source.to_string(),
            to: target.to_string(),
            value,
        });
    }
    Ok(Link::new(source, target, value))
}

/// Build a graph with the default buckets and positional joins.
pub fn build_graph(records: &[Record]) -> GraphResult<FlowGraph> {
    GraphBuilder::default().build(records)
}
