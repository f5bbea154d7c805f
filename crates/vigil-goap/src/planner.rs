use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vigil_core::{Descriptor, Mask, State};

/// An ordered, costed action sequence.
///
/// `steps` index into the action list the planner was given, front-to-back
/// execution order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan {
    pub steps: Vec<usize>,
    pub total_cost: f32,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    pub max_expansions: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { max_expansions: 4096 }
    }
}

/// Uniform-cost (Dijkstra) search over the implicit graph whose nodes are
/// states and whose edges are applicable actions.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Find the lowest-cost action sequence from `start` to any state
    /// satisfying `goal`.
    ///
    /// Returns `None` when no finite sequence of the given actions reaches
    /// the goal (or the expansion budget runs out). A start state that
    /// already satisfies the goal yields an empty plan with cost 0 — a
    /// different result than `None`.
    ///
    /// The frontier is kept in discovery order and selection scans it for
    /// the first strictly-lower cost, so equal-cost ties always go to the
    /// earlier entry. Identical inputs therefore reproduce the identical
    /// step sequence and total cost.
    pub fn plan(&self, start: State, goal: Mask, actions: &[Descriptor]) -> Option<Plan> {
        let mut frontier: Vec<State> = vec![start];
        let mut g_score: BTreeMap<State, f32> = BTreeMap::new();
        let mut came_from: BTreeMap<State, (State, usize)> = BTreeMap::new();
        g_score.insert(start, 0.0);

        let mut expansions: usize = 0;

        while !frontier.is_empty() {
            expansions += 1;
            if expansions > self.config.max_expansions {
                return None;
            }

            let mut best_idx = 0;
            let mut best_cost = g_score[&frontier[0]];
            for (idx, state) in frontier.iter().enumerate().skip(1) {
                let cost = g_score[state];
                if cost < best_cost {
                    best_cost = cost;
                    best_idx = idx;
                }
            }
            let current = frontier.remove(best_idx);

            if current.satisfies(goal) {
                return Some(reconstruct(current, best_cost, &came_from));
            }

            for (action_idx, action) in actions.iter().enumerate() {
                if !action.can_apply_to(current) {
                    continue;
                }
                let next = action.apply_to(current);
                let next_cost = best_cost + action.cost;

                let improved = match g_score.get(&next) {
                    None => true,
                    Some(&old) => next_cost < old,
                };
                if !improved {
                    continue;
                }

                g_score.insert(next, next_cost);
                came_from.insert(next, (current, action_idx));
                // A relaxed state already on the frontier keeps its
                // discovery position.
                if !frontier.contains(&next) {
                    frontier.push(next);
                }
            }
        }

        None
    }
}

fn reconstruct(
    goal_state: State,
    total_cost: f32,
    came_from: &BTreeMap<State, (State, usize)>,
) -> Plan {
    let mut steps = Vec::new();
    let mut current = goal_state;
    while let Some(&(prev, action_idx)) = came_from.get(&current) {
        steps.push(action_idx);
        current = prev;
    }
    steps.reverse();
    Plan { steps, total_cost }
}
