/*!
# Hill Climbing

Steepest-descent local search. From the current node the walk moves to the neighbor with the
lowest estimate, provided it is *strictly* lower than the estimate of the current node and the
neighbor was not walked through before. Ties go to the neighbor seen first in adjacency order.

There is no backtracking. If no neighbor improves, the search stops with
[`Outcome::LocalOptimum`] and reports the walk so far. Since every step strictly decreases the
estimate, the walk never revisits a node and terminates after at most `n` steps.
*/

use log::{debug, trace, warn};

use super::*;

/// Steepest-descent hill climbing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HillClimbing {
    max_steps: Option<usize>,
}

impl HillClimbing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the number of moves
    pub fn set_max_steps(&mut self, steps: usize) {
        self.max_steps = Some(steps);
    }

    /// Limits the number of moves
    pub fn max_steps(mut self, steps: usize) -> Self {
        self.set_max_steps(steps);
        self
    }

    /// Returns the best improving neighbor of `u`, if any
    fn best_neighbor<G, H>(
        graph: &G,
        heuristic: &H,
        walked: &NodeBitSet,
        u: Node,
    ) -> Option<(Node, Cost)>
    where
        G: AdjacencyList,
        H: Heuristic + ?Sized,
    {
        let mut best: Option<(Node, Cost)> = None;
        let mut bound = heuristic.cost_of(u);

        for v in graph.neighbors_of(u) {
            let h = heuristic.cost_of(v);
            if h < bound && !walked.get_bit(v) {
                best = Some((v, h));
                bound = h;
            }
        }

        best
    }

    /// Climbs from `start` towards `goal`.
    /// ** Panics if `start >= n` **
    pub fn run<G, H>(&self, graph: &G, heuristic: &H, start: Node, goal: Node) -> SearchResult
    where
        G: AdjacencyList,
        H: Heuristic + ?Sized,
    {
        let mut walked = graph.vertex_bitset_unset();
        let mut path = vec![start];
        let mut u = start;
        walked.set_bit(u);

        while u != goal {
            if self.max_steps.is_some_and(|max| path.len() > max) {
                warn!("hill climbing stopped after {} steps", path.len() - 1);
                return SearchResult::without_path(Outcome::Exhausted, path.len());
            }

            let Some((v, h)) = Self::best_neighbor(graph, heuristic, &walked, u) else {
                debug!("stuck at local optimum {u} after {} steps", path.len() - 1);
                let expansions = path.len();
                return SearchResult::with_path(Outcome::LocalOptimum, path, expansions);
            };

            trace!("climb {u} -> {v} (h = {h})");
            walked.set_bit(v);
            path.push(v);
            u = v;
        }

        debug!("goal reached after {} steps", path.len() - 1);
        let expansions = path.len();
        SearchResult::with_path(Outcome::Found, path, expansions)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::fixtures::*, *};
    use crate::repr::*;

    #[test]
    fn house_climbs_straight_to_goal() {
        let house = house();
        let result = HillClimbing::new().run(&house.graph, &house.heuristics, X, Y);
        assert_eq!(result.outcome, Outcome::Found);
        assert_eq!(house.format_path(&result.path), "X L Y");
        assert_eq!(result.expansions, 3);
    }

    #[test]
    fn local_optimum() {
        // 0 - 1 - 2 - 3 with a dip at 1
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let h: Vec<Cost> = vec![3, 1, 2, 0];
        let result = HillClimbing::new().run(&g, &h, 0, 3);
        assert_eq!(result.outcome, Outcome::LocalOptimum);
        assert_eq!(result.path, vec![0, 1]);
        assert!(!result.found());
    }

    #[test]
    fn equal_estimates_do_not_improve() {
        let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        let h: Vec<Cost> = vec![1, 1, 0];
        let result = HillClimbing::new().run(&g, &h, 0, 2);
        assert_eq!(result.outcome, Outcome::LocalOptimum);
        assert_eq!(result.path, vec![0]);
    }

    #[test]
    fn ties_go_to_first_neighbor() {
        let g = AdjArrayUndir::from_edges(4, [(0, 2), (0, 1), (1, 3), (2, 3)]);
        let h: Vec<Cost> = vec![5, 2, 2, 0];
        let result = HillClimbing::new().run(&g, &h, 0, 3);
        assert_eq!(result.path, vec![0, 2, 3]);
    }

    #[test]
    fn strictly_decreasing_path_is_followed() {
        let n = 10;
        let g = AdjArrayUndir::from_edges(n, (0..n - 1).map(|u| (u, u + 1)));
        let h = (0..n as Cost).rev().collect::<Vec<Cost>>();
        let result = HillClimbing::new().run(&g, &h, 0, n - 1);
        assert_eq!(result.outcome, Outcome::Found);
        assert_eq!(result.path.len(), n as usize);

        let capped = HillClimbing::new().max_steps(3).run(&g, &h, 0, n - 1);
        assert_eq!(capped.outcome, Outcome::Exhausted);
    }

    #[test]
    fn start_is_goal() {
        let g = AdjArrayUndir::new(1);
        let result = HillClimbing::new().run(&g, &vec![0 as Cost], 0, 0);
        assert_eq!(result.path, vec![0]);
        assert!(result.found());
    }
}
