/*!
# Beam Search

Level-synchronous search that keeps only the `W` most promising partial paths per level:

1. The current level holds at most `W` paths (initially just `[start]`).
2. Every path ending in the goal terminates the search. Otherwise it is extended by each neighbor
   that does not already lie on *this* path.
3. All extensions of the level are stable-sorted by the estimate of their last node and cut to `W`.

The search fails once a level is empty. With `W = 1` it degenerates to a greedy walk and may miss
paths that a wider beam finds. Partial paths are kept in a [`PathArena`], so extending a path does
not copy its prefix.
*/

use itertools::Itertools;
use log::{debug, trace, warn};

use super::{path::PathArena, *};

/// Beam search with a fixed width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamSearch {
    width: usize,
    max_levels: Option<usize>,
    max_expansions: Option<usize>,
}

impl BeamSearch {
    /// Creates a beam search keeping `width` paths per level.
    /// Fails with [`SearchError::ZeroBeamWidth`] if `width == 0`.
    pub fn new(width: usize) -> Result<Self, SearchError> {
        if width == 0 {
            return Err(SearchError::ZeroBeamWidth);
        }

        Ok(Self {
            width,
            max_levels: None,
            max_expansions: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Stops after expanding `levels` levels (the start is level `0`)
    pub fn set_max_levels(&mut self, levels: usize) {
        self.max_levels = Some(levels);
    }

    /// Stops after expanding `levels` levels (the start is level `0`)
    pub fn max_levels(mut self, levels: usize) -> Self {
        self.set_max_levels(levels);
        self
    }

    /// Limits the number of expanded paths
    pub fn set_max_expansions(&mut self, cap: usize) {
        self.max_expansions = Some(cap);
    }

    /// Limits the number of expanded paths
    pub fn max_expansions(mut self, cap: usize) -> Self {
        self.set_max_expansions(cap);
        self
    }

    /// Searches a path from `start` to `goal`.
    /// Nodes without an estimate rank behind every node with one.
    /// ** Panics if `start >= n` **
    pub fn run<G, H>(&self, graph: &G, heuristic: &H, start: Node, goal: Node) -> SearchResult
    where
        G: AdjacencyList,
        H: Heuristic + ?Sized,
    {
        assert!(start < graph.number_of_nodes());

        let mut arena = PathArena::new();
        let mut level = vec![arena.root(start)];
        let mut depth = 0;
        let mut expansions = 0;

        while !level.is_empty() {
            if self.max_levels.is_some_and(|max| depth >= max) {
                warn!("beam search stopped at level {depth}");
                return SearchResult::without_path(Outcome::Exhausted, expansions);
            }

            let mut next_level = Vec::new();
            for &id in &level {
                if self.max_expansions.is_some_and(|cap| expansions >= cap) {
                    warn!("beam search stopped after {expansions} expansions");
                    return SearchResult::without_path(Outcome::Exhausted, expansions);
                }

                let u = arena.last(id);
                expansions += 1;
                trace!("level {depth}: expand {u}");

                if u == goal {
                    let path = arena.path(id);
                    debug!("goal reached at level {depth} after {expansions} expansions");
                    return SearchResult::with_path(Outcome::Found, path, expansions);
                }

                // dedup keeps parallel edges from producing identical candidates
                for v in graph.neighbors_of(u).unique().collect_vec() {
                    if !arena.contains(id, v) {
                        next_level.push(arena.extend(id, v));
                    }
                }
            }

            next_level.sort_by_key(|&id| heuristic.cost_of(arena.last(id)));
            next_level.truncate(self.width);
            trace!(
                "level {} keeps {:?}",
                depth + 1,
                next_level.iter().map(|&id| arena.last(id)).collect_vec()
            );

            level = next_level;
            depth += 1;
        }

        debug!("beam emptied at level {depth}, {expansions} expansions");
        SearchResult::without_path(Outcome::NotFound, expansions)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::fixtures::*, *};
    use crate::repr::*;

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(BeamSearch::new(0), Err(SearchError::ZeroBeamWidth));
        assert_eq!(BeamSearch::new(3).map(|b| b.width()), Ok(3));
    }

    #[test_log::test]
    fn house_with_wide_beam() {
        let house = house();
        let beam = BeamSearch::new(2).unwrap();
        let result = beam.run(&house.graph, &house.heuristics, X, Y);
        assert_eq!(house.format_path(&result.path), "X L Y");
        // X | L, K | Y
        assert_eq!(result.expansions, 4);
    }

    /// `0` has two branches. The one with the better first estimate is a dead end.
    ///
    /// ```text
    /// 0 - 1 - 2
    ///  \
    ///   3 - 4
    /// ```
    fn trap() -> (AdjArrayUndir, Vec<Cost>) {
        let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (0, 3), (3, 4)]);
        (g, vec![5, 1, 1, 2, 0])
    }

    #[test]
    fn narrow_beam_misses_goal() {
        let (g, h) = trap();

        let narrow = BeamSearch::new(1).unwrap().run(&g, &h, 0, 4);
        assert_eq!(narrow.outcome, Outcome::NotFound);
        assert!(narrow.path.is_empty());

        let wide = BeamSearch::new(2).unwrap().run(&g, &h, 0, 4);
        assert_eq!(wide.path, vec![0, 3, 4]);

        let best_first = g.best_first_search(0, 4, &h).unwrap();
        assert!(best_first.found());
    }

    #[test]
    fn candidates_may_share_nodes_across_paths() {
        // both 1 and 2 reach 3; the paths are kept apart
        let g = AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        let h: Vec<Cost> = vec![4, 2, 2, 1, 0];
        let result = BeamSearch::new(4).unwrap().run(&g, &h, 0, 4);
        assert_eq!(result.path, vec![0, 1, 3, 4]);
    }

    #[test]
    fn limits() {
        let (g, h) = trap();
        let result = BeamSearch::new(2).unwrap().max_levels(1).run(&g, &h, 0, 4);
        assert_eq!(result.outcome, Outcome::Exhausted);

        let result = BeamSearch::new(2).unwrap().max_expansions(2).run(&g, &h, 0, 4);
        assert_eq!(result.outcome, Outcome::Exhausted);
        assert_eq!(result.expansions, 2);
    }

    #[test]
    fn parallel_edges_do_not_duplicate_candidates() {
        let g = AdjArrayUndir::from_edges(3, [(0, 1), (0, 1), (1, 2)]);
        let h: Vec<Cost> = vec![2, 1, 0];
        let result = BeamSearch::new(1).unwrap().run(&g, &h, 0, 2);
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.expansions, 3);
    }
}
