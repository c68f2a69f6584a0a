//! Generic A* search with pluggable successors, cost, and heuristic.
#![forbid(unsafe_code)]

mod astar;

pub use astar::{AStarSearch, SearchProblem, SearchState};
