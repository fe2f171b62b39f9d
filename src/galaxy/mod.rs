//! Galaxy module: star chart and jump-path planning.
//!
//! - [`StarGraph`]: read-only system name to coordinate table with Euclidean distances
//! - [`system_of`]: star system embedded in a station identifier
//! - [`StarGraph::route`]: greedy, range-constrained jump path (a heuristic,
//!   not a shortest-path search)

pub mod star_graph;
pub mod planner;
mod systems;

pub use planner::validate_jump_range;
pub use star_graph::{system_of, Coordinates, StarGraph, StarSystem};
