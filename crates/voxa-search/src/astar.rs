use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use hashbrown::HashMap;

/// Describes a graph to search. Nodes compare and hash by identity only; any
/// query context lives on the problem itself.
pub trait SearchProblem {
    type Node: Clone + Eq + Hash;

    /// Pushes the nodes reachable from `node` into `out`. `parent` is the node
    /// `node` was reached from, if any.
    fn successors(&self, node: &Self::Node, parent: Option<&Self::Node>, out: &mut Vec<Self::Node>);

    fn cost(&self, from: &Self::Node, to: &Self::Node) -> f32;

    /// Estimated remaining cost to the goal. Must not overestimate.
    fn heuristic(&self, node: &Self::Node) -> f32;

    fn is_goal(&self, node: &Self::Node) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Succeeded,
    Failed,
}

struct OpenEntry<N> {
    f: f32,
    g: f32,
    seq: u64,
    node: N,
}

impl<N> PartialEq for OpenEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for OpenEntry<N> {}

impl<N> PartialOrd for OpenEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Max-heap order: lowest f first, ties go to the earliest insertion.
impl<N> Ord for OpenEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Incremental A* over a [`SearchProblem`].
///
/// Drive it with [`step`](Self::step) or [`run`](Self::run). With a non-zero step
/// budget the search fails once that many nodes have been expanded without
/// reaching a goal.
pub struct AStarSearch<P: SearchProblem> {
    problem: P,
    start: P::Node,
    open: BinaryHeap<OpenEntry<P::Node>>,
    g_scores: HashMap<P::Node, f32>,
    came_from: HashMap<P::Node, P::Node>,
    scratch: Vec<P::Node>,
    state: SearchState,
    goal: Option<P::Node>,
    expanded: usize,
    step_budget: usize,
    budget_exhausted: bool,
    seq: u64,
}

impl<P: SearchProblem> AStarSearch<P> {
    pub fn new(problem: P, start: P::Node) -> Self {
        let mut search = Self {
            problem,
            start: start.clone(),
            open: BinaryHeap::new(),
            g_scores: HashMap::new(),
            came_from: HashMap::new(),
            scratch: Vec::new(),
            state: SearchState::Searching,
            goal: None,
            expanded: 0,
            step_budget: 0,
            budget_exhausted: false,
            seq: 0,
        };
        let h = search.problem.heuristic(&start);
        search.g_scores.insert(start.clone(), 0.0);
        search.push(start, 0.0, h);
        search
    }

    /// Caps the number of expanded nodes. `0` means uncapped.
    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = budget;
        self
    }

    fn push(&mut self, node: P::Node, g: f32, h: f32) {
        self.seq += 1;
        self.open.push(OpenEntry {
            f: g + h,
            g,
            seq: self.seq,
            node,
        });
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of nodes expanded so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// True when the search failed because it ran out of step budget rather
    /// than running out of nodes.
    #[inline]
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    #[inline]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Expands at most one node.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Searching {
            return self.state;
        }
        let Some(entry) = self.open.pop() else {
            self.state = SearchState::Failed;
            return self.state;
        };
        let best = self.g_scores.get(&entry.node).copied().unwrap_or(f32::INFINITY);
        if entry.g > best {
            // Stale entry, a cheaper route was queued later.
            return self.state;
        }
        if self.problem.is_goal(&entry.node) {
            self.goal = Some(entry.node);
            self.state = SearchState::Succeeded;
            return self.state;
        }
        self.expanded += 1;
        if self.step_budget > 0 && self.expanded > self.step_budget {
            self.budget_exhausted = true;
            self.state = SearchState::Failed;
            return self.state;
        }

        let mut next = std::mem::take(&mut self.scratch);
        next.clear();
        self.problem
            .successors(&entry.node, self.came_from.get(&entry.node), &mut next);
        for succ in next.drain(..) {
            let tentative = entry.g + self.problem.cost(&entry.node, &succ);
            let known = self.g_scores.get(&succ).copied().unwrap_or(f32::INFINITY);
            if tentative >= known {
                continue;
            }
            self.came_from.insert(succ.clone(), entry.node.clone());
            self.g_scores.insert(succ.clone(), tentative);
            let h = self.problem.heuristic(&succ);
            self.push(succ, tentative, h);
        }
        self.scratch = next;
        self.state
    }

    /// Steps until the search leaves [`SearchState::Searching`].
    pub fn run(&mut self) -> SearchState {
        while self.step() == SearchState::Searching {}
        self.state
    }

    /// Nodes from start to goal inclusive, once the search has succeeded.
    pub fn solution(&self) -> Option<Vec<P::Node>> {
        let goal = self.goal.as_ref()?;
        let mut path = vec![goal.clone()];
        let mut cursor = goal;
        while *cursor != self.start {
            cursor = self.came_from.get(cursor)?;
            path.push(cursor.clone());
        }
        path.reverse();
        Some(path)
    }
}
