/*!
# Random OPEN-List Walk

A blind search that keeps *every* generated successor in its OPEN list and removes a uniformly
random entry in each step. Unlike [`super::engine::RandomOrder`] there is no CLOSED check when
inserting: running into a node that is already part of the walk is a *loop*, which is counted per
node. The [`LoopPolicy`] decides whether a loop ends the walk.

The random source is injected, so seeded generators make walks reproducible.
*/

use log::{debug, trace, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use super::{
    frontier::{Frontier, RandomFrontier},
    path::ParentTree,
    *,
};

/// What the walk does when it removes a node from OPEN that it already walked through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPolicy {
    /// Count the loop and end the walk with [`Outcome::LoopDetected`].
    Abort,
    /// Count the loop, drop the entry and continue.
    #[default]
    Count,
}

/// Result of a random walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkResult {
    pub result: SearchResult,
    /// Number of times each node was run into again
    pub loop_counts: Vec<usize>,
}

impl WalkResult {
    /// Number of loops at `u`
    pub fn loops_at(&self, u: Node) -> usize {
        self.loop_counts.get(u as usize).copied().unwrap_or(0)
    }

    /// Total number of loops
    pub fn total_loops(&self) -> usize {
        self.loop_counts.iter().sum()
    }

    /// Iterates over `(node, count)` for all nodes with at least one loop
    pub fn looped_nodes(&self) -> impl Iterator<Item = (Node, usize)> + '_ {
        self.loop_counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(u, c)| (u as Node, *c))
    }
}

/// Random OPEN-list walk
#[derive(Debug, Clone)]
pub struct RandomWalk<R> {
    rng: R,
    policy: LoopPolicy,
    max_steps: Option<usize>,
}

impl RandomWalk<Pcg64Mcg> {
    /// Creates a walk drawing from a `Pcg64Mcg` seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64Mcg::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWalk<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            policy: LoopPolicy::default(),
            max_steps: None,
        }
    }

    pub fn set_loop_policy(&mut self, policy: LoopPolicy) {
        self.policy = policy;
    }

    pub fn loop_policy(mut self, policy: LoopPolicy) -> Self {
        self.set_loop_policy(policy);
        self
    }

    /// Limits the number of expanded nodes. Defaults to `10 * n`.
    pub fn set_max_steps(&mut self, steps: usize) {
        self.max_steps = Some(steps);
    }

    /// Limits the number of expanded nodes. Defaults to `10 * n`.
    pub fn max_steps(mut self, steps: usize) -> Self {
        self.set_max_steps(steps);
        self
    }

    /// Walks from `start` until `goal` is removed from OPEN.
    /// The reported path follows the entries through which each node was first reached.
    /// ** Panics if `start >= n` **
    pub fn run<G: AdjacencyList>(&mut self, graph: &G, start: Node, goal: Node) -> WalkResult {
        let n = graph.number_of_nodes();
        assert!(start < n);

        let max_steps = self.max_steps.unwrap_or(10 * graph.len());
        let mut open = RandomFrontier::new(&mut self.rng);
        let mut walked = ParentTree::new(n);
        let mut loop_counts = vec![0; graph.len()];
        let mut steps = 0;

        open.push((start, start));

        let outcome = loop {
            if steps >= max_steps {
                if open.is_empty() {
                    break Outcome::NotFound;
                }
                warn!("random walk stopped after {steps} steps");
                break Outcome::Exhausted;
            }

            let Some((p, u)) = open.pop() else {
                break Outcome::NotFound;
            };

            if walked.is_reached(u) {
                loop_counts[u as usize] += 1;
                trace!("loop at {u}");
                match self.policy {
                    LoopPolicy::Abort => break Outcome::LoopDetected,
                    LoopPolicy::Count => continue,
                }
            }

            walked.set_parent(u, p);
            steps += 1;
            trace!("step {steps}: {u}");

            if u == goal {
                break Outcome::Found;
            }

            for v in graph.neighbors_of(u) {
                if walked.is_reached(v) {
                    loop_counts[v as usize] += 1;
                }
                open.push((u, v));
            }
        };

        debug!(
            "random walk ended: {outcome} after {steps} steps, {} loops",
            loop_counts.iter().sum::<usize>()
        );

        let result = if outcome == Outcome::Found {
            SearchResult::with_path(outcome, walked.path_to(goal), steps)
        } else {
            SearchResult::without_path(outcome, steps)
        };

        WalkResult {
            result,
            loop_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::fixtures::*, *};
    use crate::repr::*;

    /// The ten-node graph `a`..`j` with a single cycle `b - d - i - j - b`
    fn tree_with_cycle() -> AdjArrayUndir {
        AdjArrayUndir::from_edges(
            10,
            [
                (0, 1),
                (0, 2),
                (1, 3),
                (1, 4),
                (2, 5),
                (2, 6),
                (3, 7),
                (3, 8),
                (8, 9),
                (9, 1),
            ],
        )
    }

    #[test_log::test]
    fn counting_walk_reaches_every_reachable_goal() {
        let g = tree_with_cycle();
        for seed in 0..20 {
            for goal in g.vertices() {
                let walk = RandomWalk::seeded(seed).run(&g, 0, goal);
                assert!(walk.result.found());
                assert_eq!(walk.result.path.first(), Some(&0));
                assert_eq!(walk.result.path.last(), Some(&goal));
                assert!(walk.result.is_walk_in(&g));
                assert!(walk.result.expansions <= g.len());
            }
        }
    }

    #[test]
    fn aborting_walk_stops_at_first_loop() {
        let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        for seed in 0..20 {
            let walk = RandomWalk::seeded(seed)
                .loop_policy(LoopPolicy::Abort)
                .run(&g, 0, 2);
            match walk.result.outcome {
                Outcome::Found => assert_eq!(walk.result.path, vec![0, 1, 2]),
                Outcome::LoopDetected => {
                    assert!(walk.result.path.is_empty());
                    assert_eq!(walk.loops_at(0), 2);
                }
                other => panic!("unexpected outcome {other}"),
            }
            // 0 is a neighbor of 1 and already walked through
            assert!(walk.loops_at(0) >= 1);
        }
    }

    #[test]
    fn unreachable_goal() {
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        let walk = RandomWalk::seeded(3).run(&g, 0, 3);
        assert_eq!(walk.result.outcome, Outcome::NotFound);
        assert_eq!(walk.result.expansions, 2);
        assert_eq!(walk.looped_nodes().collect::<Vec<_>>(), vec![(0, 2)]);
    }

    #[test]
    fn step_cap() {
        let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        let walk = RandomWalk::seeded(0).max_steps(1).run(&g, 0, 2);
        assert_eq!(walk.result.outcome, Outcome::Exhausted);
        assert_eq!(walk.result.expansions, 1);
    }

    #[test]
    fn seeded_walks_repeat() {
        let house = house();
        let a = RandomWalk::seeded(42).run(&house.graph, X, Y);
        let b = RandomWalk::seeded(42).run(&house.graph, X, Y);
        assert_eq!(a, b);
        assert_eq!(a.total_loops(), a.loop_counts.iter().sum::<usize>());
    }

    #[test]
    fn start_is_goal() {
        let house = house();
        let walk = RandomWalk::seeded(1).run(&house.graph, K, K);
        assert_eq!(walk.result.path, vec![K]);
        assert_eq!(walk.total_loops(), 0);
    }
}
