/*!
# Search Reports

Runs the searches on a labelled [`Problem`] and writes a human-readable transcript: the path as
labels, the number of expanded nodes and the asymptotic cost of the algorithm.

```text
==============================
BFS (forward):
Path: X L Y
Nodes expanded: 5
Time: O(V+E), Space: O(V)
```
*/

use std::{
    fmt::{Display, Formatter},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, info};

use super::*;
use crate::{error::ReportError, labels::LabeledGraph};

const SEPARATOR: &str = "==============================";

/// The searches a [`Problem`] can be run with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Bidirectional,
    BritishMuseum,
    HillClimbing,
    Beam,
    BestFirst,
    RandomWalk,
}

impl Algorithm {
    /// All algorithms in transcript order
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bfs,
        Algorithm::Bidirectional,
        Algorithm::Dfs,
        Algorithm::BritishMuseum,
        Algorithm::HillClimbing,
        Algorithm::Beam,
        Algorithm::BestFirst,
        Algorithm::RandomWalk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Bidirectional => "Bidirectional BFS",
            Algorithm::BritishMuseum => "British Museum",
            Algorithm::HillClimbing => "Hill Climbing",
            Algorithm::Beam => "Beam Search",
            Algorithm::BestFirst => "Best First Search",
            Algorithm::RandomWalk => "Random Walk",
        }
    }

    /// Asymptotic time and space, `b` being the branching factor and `d` the depth of the goal
    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::Bfs | Algorithm::Dfs => "Time: O(V+E), Space: O(V)",
            Algorithm::Bidirectional => "Time: O(b^(d/2)), Space: O(b^(d/2))",
            Algorithm::BritishMuseum | Algorithm::BestFirst => "Time: O(b^d), Space: O(b^d)",
            Algorithm::HillClimbing => "Time: O(b*d), Space: O(d)",
            Algorithm::Beam => "Time: O(w*b*d), Space: O(w*d)",
            Algorithm::RandomWalk => "Time: O(V) steps, Space: O(E)",
        }
    }

    /// Returns *true* if the algorithm orders candidates by a heuristic
    pub fn is_informed(&self) -> bool {
        matches!(
            self,
            Algorithm::HillClimbing | Algorithm::Beam | Algorithm::BestFirst
        )
    }

    /// Returns *true* if the transcript runs the algorithm from goal to start as well
    pub fn runs_reversed(&self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::BritishMuseum
        )
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Direction in which a search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// From start to goal
    #[default]
    Forward,
    /// From goal to start
    Reverse,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// A labelled graph together with the endpoints and parameters of the searches
#[derive(Debug, Clone)]
pub struct Problem<'a> {
    pub graph: &'a LabeledGraph,
    pub start: Node,
    pub goal: Node,
    pub beam_width: usize,
    /// Seed of the random walk; the walk is skipped if `None`
    pub walk_seed: Option<u64>,
}

impl<'a> Problem<'a> {
    /// Creates a problem from node labels
    pub fn new(
        graph: &'a LabeledGraph,
        start: &str,
        goal: &str,
        beam_width: usize,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            graph,
            start: graph.node(start)?,
            goal: graph.node(goal)?,
            beam_width,
            walk_seed: None,
        })
    }

    /// Enables the random walk, seeded with `seed`
    pub fn with_walk_seed(mut self, seed: u64) -> Self {
        self.walk_seed = Some(seed);
        self
    }

    /// Runs a single search.
    pub fn run(
        &self,
        algorithm: Algorithm,
        direction: Direction,
    ) -> Result<SearchReport, SearchError> {
        let g = &self.graph.graph;
        let h = &self.graph.heuristics;
        let (start, goal) = match direction {
            Direction::Forward => (self.start, self.goal),
            Direction::Reverse => (self.goal, self.start),
        };
        debug!("run {algorithm} ({direction})");

        let mut loops = Vec::new();
        let results = match algorithm {
            Algorithm::Bfs => vec![g.bfs_search(start, goal)?],
            Algorithm::Dfs => vec![g.dfs_search(start, goal)?],
            Algorithm::Bidirectional => vec![g.bidirectional_search(start, goal)?],
            Algorithm::BritishMuseum => g.british_museum(start, goal)?,
            Algorithm::HillClimbing => vec![g.hill_climbing(start, goal, h)?],
            Algorithm::Beam => vec![g.beam_search(start, goal, h, self.beam_width)?],
            Algorithm::BestFirst => vec![g.best_first_search(start, goal, h)?],
            Algorithm::RandomWalk => {
                g.check_endpoints(start, goal)?;
                let walk = RandomWalk::seeded(self.walk_seed.unwrap_or_default())
                    .run(g, start, goal);
                loops = walk.looped_nodes().collect();
                vec![walk.result]
            }
        };

        Ok(SearchReport {
            algorithm,
            direction,
            results,
            loops,
        })
    }
}

/// Results of one algorithm on a [`Problem`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub direction: Direction,
    /// One result per search; British Museum reports one per path found
    pub results: Vec<SearchResult>,
    /// `(node, count)` of loops met by the random walk
    pub loops: Vec<(Node, usize)>,
}

impl SearchReport {
    /// Returns *true* if any search of the report reached the goal
    pub fn found(&self) -> bool {
        self.results.iter().any(SearchResult::found)
    }

    /// Writes the transcript block of this report, naming nodes by the labels of `graph`
    pub fn write_transcript<W: Write>(
        &self,
        graph: &LabeledGraph,
        mut writer: W,
    ) -> std::io::Result<()> {
        writeln!(writer, "{SEPARATOR}")?;
        writeln!(writer, "{} ({}):", self.algorithm, self.direction)?;

        if self.algorithm == Algorithm::BritishMuseum {
            if self.results.is_empty() {
                writeln!(writer, "No path found.")?;
            }
            for result in &self.results {
                writeln!(writer, "{}", graph.format_path(&result.path))?;
            }
            if let Some(last) = self.results.last() {
                writeln!(writer, "Paths found: {}", self.results.len())?;
                writeln!(writer, "Nodes expanded: {}", last.expansions)?;
            }
        } else {
            for result in &self.results {
                match result.outcome {
                    Outcome::Found => {
                        writeln!(writer, "Path: {}", graph.format_path(&result.path))?
                    }
                    Outcome::LocalOptimum => {
                        writeln!(writer, "Stuck at local optimum. No path found.")?;
                        writeln!(writer, "Path: {}", graph.format_path(&result.path))?;
                    }
                    Outcome::NotFound => writeln!(writer, "No path found.")?,
                    Outcome::LoopDetected => writeln!(writer, "Loop detected. No path found.")?,
                    Outcome::Exhausted => {
                        writeln!(writer, "Expansion limit reached. No path found.")?
                    }
                }
                writeln!(writer, "Nodes expanded: {}", result.expansions)?;
            }
        }

        if !self.loops.is_empty() {
            let loops = self
                .loops
                .iter()
                .map(|&(u, c)| format!("{}: {c}", graph.format_path(&[u])))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(writer, "Loops: {loops}")?;
        }

        writeln!(writer, "{}", self.algorithm.complexity())
    }
}

/// Runs every algorithm on `problem` and writes the transcript to `writer`.
///
/// Uninformed searches run forward and reverse; the random walk only runs if the problem carries
/// a seed. An informed search that cannot run on the problem (e.g. a node without estimate) is
/// noted in the transcript and skipped. Returns the reports of all searches that ran.
pub fn run_all<W: Write>(problem: &Problem, mut writer: W) -> Result<Vec<SearchReport>, ReportError> {
    problem.graph.graph.check_endpoints(problem.start, problem.goal)?;

    let mut reports = Vec::new();
    for algorithm in Algorithm::ALL {
        if algorithm == Algorithm::RandomWalk && problem.walk_seed.is_none() {
            continue;
        }

        let directions: &[Direction] = if algorithm.runs_reversed() {
            &[Direction::Forward, Direction::Reverse]
        } else {
            &[Direction::Forward]
        };

        for &direction in directions {
            match problem.run(algorithm, direction) {
                Ok(report) => {
                    report.write_transcript(problem.graph, &mut writer)?;
                    reports.push(report);
                }
                Err(err) => {
                    writeln!(writer, "{SEPARATOR}")?;
                    writeln!(writer, "{algorithm} ({direction}):")?;
                    writeln!(writer, "Skipped: {err}")?;
                }
            }
        }
    }
    writeln!(writer, "{SEPARATOR}")?;

    info!(
        "transcript of {} searches written, {} reached the goal",
        reports.len(),
        reports.iter().filter(|r| r.found()).count()
    );
    Ok(reports)
}

/// Runs every algorithm on `problem` and saves the transcript to the file at `path`.
pub fn run_all_to_file<P: AsRef<Path>>(
    problem: &Problem,
    path: P,
) -> Result<Vec<SearchReport>, ReportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let reports = run_all(problem, &mut writer)?;
    writer.flush()?;
    Ok(reports)
}
