/*!
# Labelled Nodes

Internally every node is an index in `0..n`. Graphs written by hand or read from a file usually
name their nodes instead (`X`, `K`, `kitchen`). [`NodeLabels`] assigns indices to labels in order
of first appearance and translates in both directions; [`LabeledGraph`] bundles such a mapping with
the graph and its heuristic table.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use log::warn;

use crate::{error::GraphError, heuristic::NodeHeuristics, ops::*, repr::*, *};

/// Bidirectional mapping between string labels and nodes
#[derive(Debug, Clone, Default)]
pub struct NodeLabels {
    to_node: FxHashMap<String, Node>,
    to_label: Vec<String>,
}

impl NodeLabels {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapping where the i-th label is assigned node `i`.
    /// Repeated labels keep their first index.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mapping = Self::new();
        for label in labels {
            mapping.get_or_insert(label.as_ref());
        }
        mapping
    }

    /// Returns the node of `label`, assigning the next free index if it is new
    pub fn get_or_insert(&mut self, label: &str) -> Node {
        if let Some(&u) = self.to_node.get(label) {
            return u;
        }

        let u = self.to_label.len() as Node;
        self.to_node.insert(label.to_string(), u);
        self.to_label.push(label.to_string());
        u
    }

    /// Returns the node of `label`
    pub fn node(&self, label: &str) -> Result<Node, GraphError> {
        self.to_node
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    /// Returns the label of `u`, if `u` was assigned one
    pub fn label_of(&self, u: Node) -> Option<&str> {
        self.to_label.get(u as usize).map(String::as_str)
    }

    /// Number of labelled nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.to_label.len() as NumNodes
    }

    /// Iterates over all labels in node order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.to_label.iter().map(String::as_str)
    }

    /// Formats a path as space separated labels. Unlabelled nodes are printed as their index.
    pub fn format_path(&self, path: &[Node]) -> String {
        path.iter()
            .map(|&u| match self.label_of(u) {
                Some(label) => label.to_string(),
                None => u.to_string(),
            })
            .join(" ")
    }
}

/// A graph whose nodes carry labels and (optionally) heuristic estimates
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    pub graph: AdjArrayUndir,
    pub labels: NodeLabels,
    pub heuristics: NodeHeuristics,
}

impl LabeledGraph {
    /// Builds a graph from labelled undirected edges and labelled estimates.
    /// Labels are numbered in order of first appearance, edges first.
    ///
    /// # Examples
    /// ```
    /// use graph_search::{labels::LabeledGraph, prelude::*};
    ///
    /// let g = LabeledGraph::from_labeled_edges([("X", "K"), ("K", "Y")], [("X", 2), ("K", 1), ("Y", 0)]);
    /// assert_eq!(g.labels.node("Y").unwrap(), 2);
    /// assert!(g.graph.has_edge(1, 0));
    /// ```
    pub fn from_labeled_edges<'a, E, H>(edges: E, heuristics: H) -> Self
    where
        E: IntoIterator<Item = (&'a str, &'a str)>,
        H: IntoIterator<Item = (&'a str, Cost)>,
    {
        let mut labels = NodeLabels::new();
        let edges = edges
            .into_iter()
            .map(|(u, v)| Edge(labels.get_or_insert(u), labels.get_or_insert(v)))
            .collect_vec();
        let estimates = heuristics
            .into_iter()
            .map(|(u, h)| (labels.get_or_insert(u), h))
            .collect_vec();

        Self::from_parts(labels, edges, estimates)
    }

    pub(crate) fn from_parts(labels: NodeLabels, edges: Vec<Edge>, estimates: Vec<(Node, Cost)>) -> Self {
        let n = labels.number_of_nodes();
        let graph = AdjArrayUndir::from_edges(n, edges);
        let mut heuristics = NodeHeuristics::new(n);
        for (u, h) in estimates {
            if let Some(prev) = heuristics.set(u, h) {
                warn!(
                    "heuristic of `{}` set twice ({prev} then {h}), keeping {h}",
                    labels.label_of(u).unwrap_or_default()
                );
            }
        }

        Self {
            graph,
            labels,
            heuristics,
        }
    }

    /// Shorthand for `self.labels.node(label)`
    pub fn node(&self, label: &str) -> Result<Node, GraphError> {
        self.labels.node(label)
    }

    /// Shorthand for `self.labels.format_path(path)`
    pub fn format_path(&self, path: &[Node]) -> String {
        self.labels.format_path(path)
    }

    /// Labelled neighbors of the node labelled `label`
    pub fn neighbor_labels(&self, label: &str) -> Result<Vec<&str>, GraphError> {
        let u = self.node(label)?;
        Ok(self
            .graph
            .neighbors_of(u)
            .filter_map(|v| self.labels.label_of(v))
            .collect_vec())
    }
}
