/*!
# IO

Reading and writing labelled search problems.

## Format

The heuristic-list format describes an undirected graph over named nodes followed by a heuristic
estimate per node:

```text
# comment
3          number of edges
X K
X Y
K Y
3          number of estimates
X 2
K 1
Y 0
```

Nodes are numbered in order of first appearance, edge lines first. Blank lines and lines starting
with the comment identifier (default `#`) are skipped. Any other deviation is reported as
[`LoadError::Parse`] with the offending line number.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`HeuristicListRead`] and [`HeuristicListWrite`] are shorthands using default settings.
*/

pub mod heuristic_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::LoadError;

pub use heuristic_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G, LoadError>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns [`LoadError::Io`] if the file cannot be opened and a parse error if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G, LoadError>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails or the graph cannot be expressed in the format.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> std::io::Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> std::io::Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning a parse error early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $line : expr, $info : expr) => {
        if !($cond) {
            return Err(LoadError::parse($line, $info));
        }
    };
}

/// Tries to parse the next token of a line and returns a parse error early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(LoadError::parse(
                $line,
                format!("premature end of line when parsing {}", $name),
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(LoadError::parse(
                    $line,
                    format!("cannot parse {} from `{token}`", $name),
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
