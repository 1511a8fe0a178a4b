//! Sankey layout solver.
//!
//! Columns come from link depth, vertical positions from flow value, and a
//! few rounds of relaxation pull linked nodes level with each other. Links
//! must form a DAG; a cycle is reported as [`LayoutError::CycleDetected`].

use indexmap::{IndexMap, IndexSet};
use std::cmp::Ordering;
use tracing::{debug, trace};

use super::{
    horizontal_link_path, LayoutConfig, LayoutSolver, NodeAlign, SolvedGraph, SolvedLink,
    SolvedNode,
};
use crate::errors::{LayoutError, LayoutResult};
use crate::graph::{Link, Node};

/// Minimum displacement applied while resolving collisions.
const COLLISION_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, Default)]
pub struct SankeySolver;

impl SankeySolver {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutSolver for SankeySolver {
    fn solve(
        &self,
        nodes: Vec<Node>,
        links: Vec<Link>,
        config: &LayoutConfig,
    ) -> LayoutResult<SolvedGraph> {
        config.validate()?;
        let mut state = SolverState::new(&nodes, &links, config)?;

        state.compute_node_values();
        state.compute_node_depths()?;
        state.compute_node_heights()?;
        state.compute_node_breadths();
        state.compute_link_breadths();

        Ok(state.into_solved(nodes, links))
    }
}

#[derive(Debug)]
struct SolverNode {
    value: f64,
    depth: usize,
    height: usize,
    layer: usize,
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    source_links: Vec<usize>,
    target_links: Vec<usize>,
}

#[derive(Debug)]
struct SolverLink {
    source: usize,
    target: usize,
    value: f64,
    width: f64,
    y0: f64,
    y1: f64,
}

struct SolverState<'c> {
    config: &'c LayoutConfig,
    ids: Vec<String>,
    nodes: Vec<SolverNode>,
    links: Vec<SolverLink>,
    py: f64,
}

impl<'c> SolverState<'c> {
    fn new(nodes: &[Node], links: &[Link], config: &'c LayoutConfig) -> LayoutResult<Self> {
        let mut index: IndexMap<String, usize> = IndexMap::new();
        for (i, node) in nodes.iter().enumerate() {
            let id = (config.node_id)(node).to_string();
            if index.insert(id.clone(), i).is_some() {
                return Err(LayoutError::DuplicateNode(id));
            }
        }

        let mut solver_nodes: Vec<SolverNode> = nodes
            .iter()
            .map(|_| SolverNode {
                value: 0.0,
                depth: 0,
                height: 0,
                layer: 0,
                x0: 0.0,
                x1: 0.0,
                y0: 0.0,
                y1: 0.0,
                source_links: Vec::new(),
                target_links: Vec::new(),
            })
            .collect();

        let mut solver_links = Vec::with_capacity(links.len());
        for (i, link) in links.iter().enumerate() {
            let source = *index
                .get(&link.source)
                .ok_or_else(|| LayoutError::MissingNode(link.source.clone()))?;
            let target = *index
                .get(&link.target)
                .ok_or_else(|| LayoutError::MissingNode(link.target.clone()))?;
            if !link.value.is_finite() || link.value < 0.0 {
                return Err(LayoutError::InvalidValue {
                    from: link.source.clone(),
                    to: link.target.clone(),
                    value: link.value,
                });
            }
            solver_nodes[source].source_links.push(i);
            solver_nodes[target].target_links.push(i);
            solver_links.push(SolverLink {
                source,
                target,
                value: link.value,
                width: 0.0,
                y0: 0.0,
                y1: 0.0,
            });
        }

        Ok(Self {
            config,
            ids: index.into_keys().collect(),
            nodes: solver_nodes,
            links: solver_links,
            py: config.node_padding,
        })
    }

    fn compute_node_values(&mut self) {
        for node in &mut self.nodes {
            let outgoing: f64 = node
                .source_links
                .iter()
                .map(|&l| self.links[l].value)
                .sum();
            let incoming: f64 = node
                .target_links
                .iter()
                .map(|&l| self.links[l].value)
                .sum();
            node.value = outgoing.max(incoming);
        }
    }

    fn compute_node_depths(&mut self) -> LayoutResult<()> {
        let n = self.nodes.len();
        let mut current: IndexSet<usize> = (0..n).collect();
        let mut depth = 0;
        while !current.is_empty() {
            let mut next = IndexSet::new();
            for &i in &current {
                self.nodes[i].depth = depth;
                for &l in &self.nodes[i].source_links {
                    next.insert(self.links[l].target);
                }
            }
            depth += 1;
            if depth > n {
                return Err(self.cycle_error(&next));
            }
            current = next;
        }
        Ok(())
    }

    fn compute_node_heights(&mut self) -> LayoutResult<()> {
        let n = self.nodes.len();
        let mut current: IndexSet<usize> = (0..n).collect();
        let mut height = 0;
        while !current.is_empty() {
            let mut next = IndexSet::new();
            for &i in &current {
                self.nodes[i].height = height;
                for &l in &self.nodes[i].target_links {
                    next.insert(self.links[l].source);
                }
            }
            height += 1;
            if height > n {
                return Err(self.cycle_error(&next));
            }
            current = next;
        }
        Ok(())
    }

    fn cycle_error(&self, involved: &IndexSet<usize>) -> LayoutError {
        let mut names: Vec<&str> = involved.iter().map(|&i| self.ids[i].as_str()).collect();
        names.sort_unstable();
        LayoutError::CycleDetected(format!("circular link among [{}]", names.join(", ")))
    }

    fn compute_node_layers(&mut self) -> Vec<Vec<usize>> {
        let columns_count = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0) + 1;
        let extent = self.config.extent;
        let dx = self.config.node_width;
        let kx = if columns_count > 1 {
            (extent.width() - dx) / (columns_count - 1) as f64
        } else {
            0.0
        };

        let mut columns: Vec<Vec<usize>> = vec![Vec::new(); columns_count];
        for i in 0..self.nodes.len() {
            let layer = self.align(i, columns_count).min(columns_count - 1);
            let node = &mut self.nodes[i];
            node.layer = layer;
            node.x0 = extent.x0 + layer as f64 * kx;
            node.x1 = node.x0 + dx;
            columns[layer].push(i);
        }
        columns
    }

    fn align(&self, i: usize, columns_count: usize) -> usize {
        let node = &self.nodes[i];
        match self.config.align {
            NodeAlign::Left => node.depth,
            NodeAlign::Right => (columns_count - 1).saturating_sub(node.height),
            NodeAlign::Justify => {
                if node.source_links.is_empty() {
                    columns_count - 1
                } else {
                    node.depth
                }
            }
            NodeAlign::Center => {
                if !node.target_links.is_empty() {
                    node.depth
                } else if !node.source_links.is_empty() {
                    node.source_links
                        .iter()
                        .map(|&l| self.nodes[self.links[l].target].depth)
                        .min()
                        .unwrap_or(1)
                        .saturating_sub(1)
                } else {
                    0
                }
            }
        }
    }

    fn compute_node_breadths(&mut self) {
        if self.nodes.is_empty() {
            return;
        }
        let mut columns = self.compute_node_layers();
        let extent = self.config.extent;
        let tallest = columns.iter().map(Vec::len).max().unwrap_or(1);
        if tallest > 1 {
            self.py = self
                .config
                .node_padding
                .min(extent.height() / (tallest - 1) as f64);
        }
        debug!(
            "Sankey columns: {:?}, padding {}",
            columns.iter().map(Vec::len).collect::<Vec<_>>(),
            self.py
        );

        self.initialize_node_breadths(&columns);

        let iterations = self.config.iterations;
        for i in 0..iterations {
            let alpha = 0.99_f64.powi(i as i32);
            let beta = (1.0 - alpha).max((i + 1) as f64 / iterations as f64);
            self.relax_right_to_left(&mut columns, alpha, beta);
            self.relax_left_to_right(&mut columns, alpha, beta);
            trace!("Relaxation {} done (alpha {:.4}, beta {:.4})", i, alpha, beta);
        }
    }

    fn initialize_node_breadths(&mut self, columns: &[Vec<usize>]) {
        let extent = self.config.extent;
        let py = self.py;

        // Columns without flow cannot constrain the scale.
        let ky = columns
            .iter()
            .filter_map(|column| {
                let total: f64 = column.iter().map(|&i| self.nodes[i].value).sum();
                if total > 0.0 {
                    Some((extent.height() - (column.len() as f64 - 1.0) * py) / total)
                } else {
                    None
                }
            })
            .fold(f64::INFINITY, f64::min);
        let ky = if ky.is_finite() { ky.max(0.0) } else { 0.0 };

        for column in columns.iter().filter(|c| !c.is_empty()) {
            let mut y = extent.y0;
            for &i in column {
                let node = &mut self.nodes[i];
                node.y0 = y;
                node.y1 = y + node.value * ky;
                y = node.y1 + py;
                for &l in &self.nodes[i].source_links {
                    self.links[l].width = self.links[l].value * ky;
                }
            }

            let spread = (extent.y1 - y + py) / (column.len() + 1) as f64;
            for (k, &i) in column.iter().enumerate() {
                let shift = spread * (k + 1) as f64;
                self.nodes[i].y0 += shift;
                self.nodes[i].y1 += shift;
            }
            self.reorder_links(column);
        }
    }

    fn relax_left_to_right(&mut self, columns: &mut [Vec<usize>], alpha: f64, beta: f64) {
        for c in 1..columns.len() {
            for &target in &columns[c] {
                let mut y = 0.0;
                let mut w = 0.0;
                for &l in &self.nodes[target].target_links {
                    let source = self.links[l].source;
                    let v = self.links[l].value * self.layer_span(source, target);
                    y += self.target_top(source, target) * v;
                    w += v;
                }
                if w <= 0.0 {
                    continue;
                }
                let dy = (y / w - self.nodes[target].y0) * alpha;
                self.nodes[target].y0 += dy;
                self.nodes[target].y1 += dy;
                self.reorder_node_links(target);
            }
            self.sort_by_breadth(&mut columns[c]);
            self.resolve_collisions(&columns[c], beta);
        }
    }

    fn relax_right_to_left(&mut self, columns: &mut [Vec<usize>], alpha: f64, beta: f64) {
        for c in (0..columns.len().saturating_sub(1)).rev() {
            for &source in &columns[c] {
                let mut y = 0.0;
                let mut w = 0.0;
                for &l in &self.nodes[source].source_links {
                    let target = self.links[l].target;
                    let v = self.links[l].value * self.layer_span(source, target);
                    y += self.source_top(source, target) * v;
                    w += v;
                }
                if w <= 0.0 {
                    continue;
                }
                let dy = (y / w - self.nodes[source].y0) * alpha;
                self.nodes[source].y0 += dy;
                self.nodes[source].y1 += dy;
                self.reorder_node_links(source);
            }
            self.sort_by_breadth(&mut columns[c]);
            self.resolve_collisions(&columns[c], beta);
        }
    }

    fn layer_span(&self, source: usize, target: usize) -> f64 {
        self.nodes[target].layer as f64 - self.nodes[source].layer as f64
    }

    fn resolve_collisions(&mut self, column: &[usize], alpha: f64) {
        if column.is_empty() {
            return;
        }
        let extent = self.config.extent;
        let middle = column.len() >> 1;
        let subject = &self.nodes[column[middle]];
        let (above, below) = (subject.y0 - self.py, subject.y1 + self.py);

        self.resolve_collisions_bottom_to_top(column, above, middle as isize - 1, alpha);
        self.resolve_collisions_top_to_bottom(column, below, middle + 1, alpha);
        self.resolve_collisions_bottom_to_top(column, extent.y1, column.len() as isize - 1, alpha);
        self.resolve_collisions_top_to_bottom(column, extent.y0, 0, alpha);
    }

    /// Push nodes down, starting at `from`, until none overlaps the one above.
    fn resolve_collisions_top_to_bottom(
        &mut self,
        column: &[usize],
        mut y: f64,
        from: usize,
        alpha: f64,
    ) {
        for &i in column.iter().skip(from) {
            let node = &mut self.nodes[i];
            let dy = (y - node.y0) * alpha;
            if dy > COLLISION_EPSILON {
                node.y0 += dy;
                node.y1 += dy;
            }
            y = node.y1 + self.py;
        }
    }

    /// Push nodes up, starting at `from` and moving towards the top.
    fn resolve_collisions_bottom_to_top(
        &mut self,
        column: &[usize],
        mut y: f64,
        from: isize,
        alpha: f64,
    ) {
        let mut k = from;
        while k >= 0 {
            let node = &mut self.nodes[column[k as usize]];
            let dy = (node.y1 - y) * alpha;
            if dy > COLLISION_EPSILON {
                node.y0 -= dy;
                node.y1 -= dy;
            }
            y = node.y0 - self.py;
            k -= 1;
        }
    }

    /// Where a link from `source` should land on `target` for the two to line up.
    fn target_top(&self, source: usize, target: usize) -> f64 {
        let src = &self.nodes[source];
        let mut y = src.y0 - (src.source_links.len() as f64 - 1.0) * self.py / 2.0;
        for &l in &src.source_links {
            if self.links[l].target == target {
                break;
            }
            y += self.links[l].width + self.py;
        }
        for &l in &self.nodes[target].target_links {
            if self.links[l].source == source {
                break;
            }
            y -= self.links[l].width;
        }
        y
    }

    /// Where a link to `target` should leave `source` for the two to line up.
    fn source_top(&self, source: usize, target: usize) -> f64 {
        let tgt = &self.nodes[target];
        let mut y = tgt.y0 - (tgt.target_links.len() as f64 - 1.0) * self.py / 2.0;
        for &l in &tgt.target_links {
            if self.links[l].source == source {
                break;
            }
            y += self.links[l].width + self.py;
        }
        for &l in &self.nodes[source].source_links {
            if self.links[l].target == target {
                break;
            }
            y -= self.links[l].width;
        }
        y
    }

    fn sort_by_breadth(&self, column: &mut [usize]) {
        column.sort_by(|&a, &b| by_y0(self.nodes[a].y0, self.nodes[b].y0));
    }

    fn sort_source_links(&mut self, i: usize) {
        let mut list = std::mem::take(&mut self.nodes[i].source_links);
        list.sort_by(|&a, &b| {
            by_y0(
                self.nodes[self.links[a].target].y0,
                self.nodes[self.links[b].target].y0,
            )
            .then(a.cmp(&b))
        });
        self.nodes[i].source_links = list;
    }

    fn sort_target_links(&mut self, i: usize) {
        let mut list = std::mem::take(&mut self.nodes[i].target_links);
        list.sort_by(|&a, &b| {
            by_y0(
                self.nodes[self.links[a].source].y0,
                self.nodes[self.links[b].source].y0,
            )
            .then(a.cmp(&b))
        });
        self.nodes[i].target_links = list;
    }

    fn reorder_links(&mut self, column: &[usize]) {
        for &i in column {
            self.sort_source_links(i);
            self.sort_target_links(i);
        }
    }

    /// After `i` moved, re-sort the link lists of its neighbours.
    fn reorder_node_links(&mut self, i: usize) {
        let upstream: Vec<usize> = self.nodes[i]
            .target_links
            .iter()
            .map(|&l| self.links[l].source)
            .collect();
        for source in upstream {
            self.sort_source_links(source);
        }
        let downstream: Vec<usize> = self.nodes[i]
            .source_links
            .iter()
            .map(|&l| self.links[l].target)
            .collect();
        for target in downstream {
            self.sort_target_links(target);
        }
    }

    fn compute_link_breadths(&mut self) {
        for node in &self.nodes {
            let mut y0 = node.y0;
            let mut y1 = node.y0;
            for &l in &node.source_links {
                let link = &mut self.links[l];
                link.y0 = y0 + link.width / 2.0;
                y0 += link.width;
            }
            for &l in &node.target_links {
                let link = &mut self.links[l];
                link.y1 = y1 + link.width / 2.0;
                y1 += link.width;
            }
        }
    }

    fn into_solved(self, nodes: Vec<Node>, links: Vec<Link>) -> SolvedGraph {
        let solved_nodes: Vec<SolvedNode> = nodes
            .into_iter()
            .zip(self.ids.iter())
            .zip(&self.nodes)
            .map(|((node, id), solved)| SolvedNode {
                name: id.clone(),
                title: node.title,
                category: node.category,
                value: solved.value,
                depth: solved.depth,
                height: solved.height,
                layer: solved.layer,
                x0: solved.x0,
                x1: solved.x1,
                y0: solved.y0,
                y1: solved.y1,
                color: None,
            })
            .collect();

        let solved_links = links
            .into_iter()
            .zip(&self.links)
            .enumerate()
            .map(|(index, (link, solved))| {
                let points = [
                    [self.nodes[solved.source].x1, solved.y0],
                    [self.nodes[solved.target].x0, solved.y1],
                ];
                SolvedLink {
                    index,
                    source: link.source,
                    target: link.target,
                    value: solved.value,
                    width: solved.width.max(1.0),
                    band_width: solved.width,
                    y0: solved.y0,
                    y1: solved.y1,
                    points,
                    path: horizontal_link_path(&points),
                }
            })
            .collect();

        SolvedGraph {
            nodes: solved_nodes,
            links: solved_links,
        }
    }
}

fn by_y0(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeCategory;
    use crate::layout::Extent;

    fn node(name: &str) -> Node {
        Node::new(name, name, 0.0, NodeCategory::IncomeItem)
    }

    fn config() -> LayoutConfig {
        LayoutConfig {
            extent: Extent::new(0.0, 0.0, 100.0, 100.0),
            node_width: 10.0,
            node_padding: 10.0,
            ..Default::default()
        }
    }

    fn solve(nodes: Vec<Node>, links: Vec<Link>) -> LayoutResult<SolvedGraph> {
        SankeySolver::new().solve(nodes, links, &config())
    }

    #[test]
    fn test_single_link() {
        let solved = solve(vec![node("a"), node("b")], vec![Link::new("a", "b", 10.0)]).unwrap();

        let a = solved.get_node("a").unwrap();
        let b = solved.get_node("b").unwrap();
        assert_eq!((a.layer, b.layer), (0, 1));
        assert_eq!((a.x0, a.x1), (0.0, 10.0));
        assert_eq!((b.x0, b.x1), (90.0, 100.0));
        assert_eq!(a.value, 10.0);
        // A single node per column fills the whole height
        assert!((a.y1 - a.y0 - 100.0).abs() < 1e-9);

        let link = &solved.links[0];
        assert!((link.band_width - 100.0).abs() < 1e-9);
        assert_eq!(link.points[0][0], 10.0);
        assert_eq!(link.points[1][0], 90.0);
        assert!(link.path.starts_with("M10,"));
    }

    #[test]
    fn test_value_is_max_of_in_and_out() {
        let solved = solve(
            vec![node("a"), node("b"), node("c"), node("d")],
            vec![
                Link::new("a", "b", 10.0),
                Link::new("b", "c", 4.0),
                Link::new("b", "d", 2.0),
            ],
        )
        .unwrap();
        assert_eq!(solved.get_node("b").unwrap().value, 10.0);
        assert_eq!(solved.get_node("c").unwrap().value, 4.0);
    }

    #[test]
    fn test_justify_pushes_sinks_right() {
        let solved = solve(
            vec![node("a"), node("b"), node("c"), node("d")],
            vec![
                Link::new("a", "b", 5.0),
                Link::new("b", "c", 5.0),
                Link::new("a", "d", 5.0),
            ],
        )
        .unwrap();
        assert_eq!(solved.get_node("d").unwrap().layer, 2);

        let left = SankeySolver::new()
            .solve(
                vec![node("a"), node("b"), node("c"), node("d")],
                vec![
                    Link::new("a", "b", 5.0),
                    Link::new("b", "c", 5.0),
                    Link::new("a", "d", 5.0),
                ],
                &LayoutConfig {
                    align: NodeAlign::Left,
                    ..config()
                },
            )
            .unwrap();
        assert_eq!(left.get_node("d").unwrap().layer, 1);
    }

    #[test]
    fn test_right_and_center_alignment() {
        let nodes = vec![node("a"), node("b"), node("c"), node("x")];
        let links = vec![
            Link::new("a", "b", 5.0),
            Link::new("b", "c", 5.0),
            Link::new("x", "c", 5.0),
        ];

        let right = SankeySolver::new()
            .solve(
                nodes.clone(),
                links.clone(),
                &LayoutConfig {
                    align: NodeAlign::Right,
                    ..config()
                },
            )
            .unwrap();
        assert_eq!(right.get_node("x").unwrap().layer, 1);

        let center = SankeySolver::new()
            .solve(
                nodes,
                links,
                &LayoutConfig {
                    align: NodeAlign::Center,
                    ..config()
                },
            )
            .unwrap();
        assert_eq!(center.get_node("x").unwrap().layer, 1);
        assert_eq!(center.get_node("a").unwrap().layer, 0);
    }

    #[test]
    fn test_nodes_stay_inside_extent() {
        let nodes: Vec<Node> = ["s", "a", "b", "c", "t"].iter().map(|n| node(n)).collect();
        let links = vec![
            Link::new("s", "a", 30.0),
            Link::new("s", "b", 20.0),
            Link::new("s", "c", 1.0),
            Link::new("a", "t", 30.0),
            Link::new("b", "t", 20.0),
            Link::new("c", "t", 1.0),
        ];
        let solved = solve(nodes, links).unwrap();
        for n in &solved.nodes {
            assert!(n.y0 >= -1e-3 && n.y1 <= 100.0 + 1e-3, "{:?}", n);
            assert!(n.x0 >= 0.0 && n.x1 <= 100.0, "{:?}", n);
        }

        let mut middle: Vec<&SolvedNode> = solved.nodes.iter().filter(|n| n.layer == 1).collect();
        middle.sort_by(|a, b| by_y0(a.y0, b.y0));
        for pair in middle.windows(2) {
            assert!(pair[1].y0 >= pair[0].y1 - 1e-3, "overlap between {:?}", pair);
        }
    }

    #[test]
    fn test_zero_links_get_minimum_width() {
        let solved = solve(
            vec![node("a"), node("b"), node("c")],
            vec![Link::new("a", "b", 10.0), Link::new("b", "c", 0.0)],
        )
        .unwrap();
        let zero = &solved.links[1];
        assert_eq!(zero.band_width, 0.0);
        assert_eq!(zero.width, 1.0);
        assert!(solved.links.iter().all(|l| l.width >= 1.0));
    }

    #[test]
    fn test_all_zero_flow() {
        let solved = solve(vec![node("a"), node("b")], vec![Link::new("a", "b", 0.0)]).unwrap();
        for n in &solved.nodes {
            assert!(n.y0.is_finite() && n.y1.is_finite());
            assert_eq!(n.y1 - n.y0, 0.0);
        }
    }

    #[test]
    fn test_single_column() {
        let solved = solve(vec![node("a"), node("b")], vec![]).unwrap();
        assert!(solved.nodes.iter().all(|n| n.layer == 0 && n.x0 == 0.0));
    }

    #[test]
    fn test_empty_graph() {
        let solved = solve(vec![], vec![]).unwrap();
        assert!(solved.nodes.is_empty());
        assert!(solved.links.is_empty());
    }

    #[test]
    fn test_cycle_detected() {
        let err = solve(
            vec![node("a"), node("b"), node("c")],
            vec![
                Link::new("a", "b", 1.0),
                Link::new("b", "c", 1.0),
                Link::new("c", "b", 1.0),
            ],
        )
        .unwrap_err();
        match err {
            LayoutError::CycleDetected(message) => {
                assert_eq!(message, "circular link among [b, c]")
            }
            other => panic!("Expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let err = solve(vec![node("a")], vec![Link::new("a", "a", 1.0)]).unwrap_err();
        assert_eq!(err.error_code(), "CYCLE_DETECTED");
    }

    #[test]
    fn test_missing_and_duplicate_nodes() {
        let err = solve(vec![node("a")], vec![Link::new("a", "zz", 1.0)]).unwrap_err();
        assert_eq!(err, LayoutError::MissingNode("zz".to_string()));

        let err = solve(vec![node("a"), node("a")], vec![]).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateNode("a".to_string()));
    }

    #[test]
    fn test_negative_link_value() {
        let err = solve(vec![node("a"), node("b")], vec![Link::new("a", "b", -1.0)]).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidValue { .. }));
    }

    #[test]
    fn test_custom_node_id_accessor() {
        fn by_title(node: &Node) -> &str {
            &node.title
        }
        let nodes = vec![
            Node::new("n0", "alpha", 0.0, NodeCategory::IncomeItem),
            Node::new("n1", "beta", 0.0, NodeCategory::IncomeCategory),
        ];
        let solved = SankeySolver::new()
            .solve(
                nodes,
                vec![Link::new("alpha", "beta", 3.0)],
                &LayoutConfig {
                    node_id: by_title,
                    ..config()
                },
            )
            .unwrap();
        assert_eq!(solved.nodes[1].name, "beta");
        assert_eq!(solved.nodes[1].layer, 1);
    }
}
