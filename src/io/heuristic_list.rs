//! # HeuristicList
//!
//! The HeuristicList-Format consists of a line holding the number of edges `m`, followed by `m`
//! non-comment-lines `u v` naming the endpoints of an undirected edge. Then follows a line holding
//! the number of estimates `k` and `k` non-comment-lines `u h` assigning the integer estimate `h`
//! to the node labelled `u`.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use log::{debug, info};

use super::*;
use crate::{labels::*, ops::*, *};

/// Default start of comment lines. Labels starting with it cannot be written.
pub const COMMENT_IDENTIFIER: &str = "#";

/// A GraphReader for the HeuristicList-Format
#[derive(Debug, Clone)]
pub struct HeuristicListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for HeuristicListReader {
    fn default() -> Self {
        Self {
            comment_identifier: COMMENT_IDENTIFIER.to_string(),
        }
    }
}

impl HeuristicListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> HeuristicListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl GraphReader<LabeledGraph> for HeuristicListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<LabeledGraph, LoadError> {
        let mut lines = ContentLines::new(reader, &self.comment_identifier);
        let mut labels = NodeLabels::new();

        let m: usize = lines.parse_count("number of edges")?;
        let mut edges = Vec::new();
        for i in 0..m {
            let (line, content) = lines.expect_line(|| format!("expected {m} edges, found {i}"))?;
            let mut parts = content.split_whitespace();
            let (Some(u), Some(v), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(LoadError::parse(line, "expected two node labels"));
            };
            edges.push(Edge(labels.get_or_insert(u), labels.get_or_insert(v)));
        }

        let k: usize = lines.parse_count("number of heuristic values")?;
        let mut estimates = Vec::new();
        for i in 0..k {
            let (line, content) =
                lines.expect_line(|| format!("expected {k} heuristic values, found {i}"))?;
            let mut parts = content.split_whitespace();
            let Some(label) = parts.next() else {
                return Err(LoadError::parse(line, "expected a node label"));
            };
            let h: Cost = parse_next_value!(parts, line, "heuristic value");
            raise_error_unless!(
                parts.next().is_none(),
                line,
                "expected a node label and a heuristic value"
            );
            estimates.push((labels.get_or_insert(label), h));
        }

        if let Some((line, _)) = lines.next_content()? {
            return Err(LoadError::parse(line, "unexpected content after heuristic values"));
        }

        let graph = LabeledGraph::from_parts(labels, edges, estimates);
        info!(
            "loaded graph with {} nodes, {} edges and {} heuristic values",
            graph.graph.number_of_nodes(),
            graph.graph.number_of_edges(),
            graph.heuristics.iter().count()
        );

        Ok(graph)
    }
}

/// Trait for creating graphs from a HeuristicListReader.
/// Used as shorthand for default HeuristicListReader settings
pub trait HeuristicListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_heuristic_list<R: BufRead>(reader: R) -> Result<Self, LoadError>;

    /// Tries to read the graph from a given file
    fn try_read_heuristic_list_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::try_read_heuristic_list(BufReader::new(File::open(path)?))
    }
}

impl HeuristicListRead for LabeledGraph {
    fn try_read_heuristic_list<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        HeuristicListReader::default().try_read_graph(reader)
    }
}

/// Non-comment-lines of a reader together with their (1-based) line numbers
struct ContentLines<'a, R> {
    lines: Lines<R>,
    line: usize,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> ContentLines<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            comment_identifier,
        }
    }

    /// Returns the next line that is neither blank nor a comment
    fn next_content(&mut self) -> Result<Option<(usize, String)>, LoadError> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line += 1;

            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!self.comment_identifier.is_empty()
                    && trimmed.starts_with(self.comment_identifier))
            {
                continue;
            }
            return Ok(Some((self.line, trimmed.to_string())));
        }
        Ok(None)
    }

    /// Like [`ContentLines::next_content`] but a missing line is a parse error
    fn expect_line<F>(&mut self, missing: F) -> Result<(usize, String), LoadError>
    where
        F: FnOnce() -> String,
    {
        match self.next_content()? {
            Some(content) => Ok(content),
            None => Err(LoadError::parse(self.line + 1, missing())),
        }
    }

    /// Parses a line holding a single count
    fn parse_count(&mut self, name: &str) -> Result<usize, LoadError> {
        let (line, content) = self.expect_line(|| format!("missing {name}"))?;
        let mut parts = content.split_whitespace();
        let count = parse_next_value!(parts, line, name);
        raise_error_unless!(
            parts.next().is_none(),
            line,
            format!("expected only the {name}")
        );
        debug!("line {line}: {name} is {count}");
        Ok(count)
    }
}

/// A writer for the HeuristicList-Format
#[derive(Debug, Clone, Default)]
pub struct HeuristicListWriter {
    /// Written as comment lines in front of the data
    comment: Option<String>,
}

impl HeuristicListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a comment written in front of the data. Every line of it is prefixed with `# `.
    pub fn comment<S: Into<String>>(mut self, comment: S) -> HeuristicListWriter {
        self.comment = Some(comment.into());
        self
    }
}

impl GraphWriter<LabeledGraph> for HeuristicListWriter {
    /// Writes every edge once and every node carrying an estimate.
    /// Nodes with neither are not representable and get lost.
    fn try_write_graph<W: Write>(&self, graph: &LabeledGraph, mut writer: W) -> std::io::Result<()> {
        let label = |u: Node| -> std::io::Result<&str> {
            match graph.labels.label_of(u) {
                Some(l)
                    if !l.is_empty()
                        && !l.contains(char::is_whitespace)
                        && !l.starts_with(COMMENT_IDENTIFIER) =>
                {
                    Ok(l)
                }
                Some(l) => Err(io_error!(
                    ErrorKind::InvalidInput,
                    format!("label `{l}` cannot be written")
                )),
                None => Err(io_error!(
                    ErrorKind::InvalidInput,
                    format!("node {u} has no label")
                )),
            }
        };

        if let Some(comment) = &self.comment {
            for line in comment.lines() {
                writeln!(writer, "{COMMENT_IDENTIFIER} {line}")?;
            }
        }

        writeln!(writer, "{}", graph.graph.number_of_edges())?;
        for Edge(u, v) in graph.graph.edges(true) {
            writeln!(writer, "{} {}", label(u)?, label(v)?)?;
        }

        writeln!(writer, "{}", graph.heuristics.iter().count())?;
        for (u, h) in graph.heuristics.iter() {
            writeln!(writer, "{} {h}", label(u)?)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the HeuristicList-Format.
/// Shorthand for default settings.
pub trait HeuristicListWrite {
    /// Tries to write the graph to a writer
    fn try_write_heuristic_list<W: Write>(&self, writer: W) -> std::io::Result<()>;

    /// Tries to write the graph to a file
    fn try_write_heuristic_list_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_heuristic_list(&mut writer)?;
        writer.flush()
    }
}

impl HeuristicListWrite for LabeledGraph {
    fn try_write_heuristic_list<W: Write>(&self, writer: W) -> std::io::Result<()> {
        HeuristicListWriter::default().try_write_graph(self, writer)
    }
}
