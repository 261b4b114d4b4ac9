//! Error types.
//!
//! An unreachable goal is *not* an error: it is reported through
//! [`Outcome::NotFound`](crate::search::Outcome). Everything here is recoverable at the call site.

use std::io;

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Invalid references into a graph, rejected before any search starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },
    #[error("unknown node label `{0}`")]
    UnknownLabel(String),
}

/// Errors raised by the search drivers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("no heuristic value set for node {0}")]
    MissingHeuristic(Node),
    #[error("beam width must be at least 1")]
    ZeroBeamWidth,
}

/// Errors raised while loading a graph from text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read graph input: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors raised while writing a search transcript.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("could not write transcript: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl LoadError {
    pub(crate) fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        LoadError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Returns `Err(GraphError::NodeOutOfRange)` unless `node < n`
pub fn check_node(node: Node, n: NumNodes) -> Result<(), GraphError> {
    if node < n {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange { node, n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::NodeOutOfRange { node: 12, n: 10 }.to_string(),
            "node 12 is out of range for a graph with 10 nodes"
        );
        assert_eq!(
            SearchError::from(GraphError::UnknownLabel("Q".into())).to_string(),
            "unknown node label `Q`"
        );
        assert_eq!(
            LoadError::parse(3, "expected two labels").to_string(),
            "line 3: expected two labels"
        );
        assert_eq!(
            ReportError::from(SearchError::ZeroBeamWidth).to_string(),
            "beam width must be at least 1"
        );
    }

    #[test]
    fn node_range() {
        assert!(check_node(0, 1).is_ok());
        assert_eq!(
            check_node(1, 1),
            Err(GraphError::NodeOutOfRange { node: 1, n: 1 })
        );
    }
}
