//! Greedy jump-path planner.
//!
//! ## Heuristic
//!
//! This is NOT a shortest-path search. It produces some path whose hops are
//! all within the jump range, if the following rule discovers one:
//!
//! 1. If the destination is within range of the origin, fly there directly.
//! 2. Otherwise pick a stepping stone S (not the destination) that is no
//!    farther from the origin than the destination is, and within range of
//!    the destination. Among those take the one farthest from the
//!    destination, i.e. the deepest stone back toward the origin.
//! 3. Plan origin -> S the same way and append the destination.
//!
//! The path is built backward from the destination. Nothing in the rule
//! itself guarantees termination when several systems are equidistant from
//! the origin, so the planner stops after a fixed number of stepping stones (by
//! default the number of charted systems) and reports `NoRouteFound`.

use std::ptr;

use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::error::{MarketError, Result};
use crate::galaxy::star_graph::{StarGraph, StarSystem};

/// Reject NaN, zero and negative jump ranges
///
/// `f64::INFINITY` is accepted and means an unlimited range.
pub fn validate_jump_range(jump_range: f64) -> Result<()> {
    if jump_range.is_nan() || jump_range <= 0.0 {
        return Err(MarketError::InvalidJumpRange(jump_range));
    }
    Ok(())
}

impl StarGraph {
    /// Plan a jump path from `from` to `to`
    ///
    /// # Arguments
    ///
    /// * `from` - Origin system name
    /// * `to` - Destination system name
    /// * `jump_range` - Maximum distance of a single hop (light years)
    ///
    /// # Returns
    ///
    /// System names from origin to destination inclusive; consecutive
    /// entries are at most `jump_range` apart.
    ///
    /// # Errors
    ///
    /// * `InvalidJumpRange` - `jump_range` is not positive
    /// * `UnknownSystem` - either system is not charted
    /// * `NoRouteFound` - the heuristic found no next hop
    ///
    /// # Example
    ///
    /// ```
    /// use galaxy_market::galaxy::{Coordinates, StarGraph};
    ///
    /// let graph = StarGraph::from_systems([
    ///     ("A", Coordinates::new(0.0, 0.0, 0.0)),
    ///     ("B", Coordinates::new(4.0, 0.0, 0.0)),
    ///     ("C", Coordinates::new(8.0, 0.0, 0.0)),
    /// ]);
    ///
    /// assert_eq!(graph.route("A", "C", 5.0).unwrap(), vec!["A", "B", "C"]);
    /// assert_eq!(graph.route("A", "C", 10.0).unwrap(), vec!["A", "C"]);
    /// ```
    pub fn route(&self, from: &str, to: &str, jump_range: f64) -> Result<Vec<String>> {
        self.route_with_limit(from, to, jump_range, None)
    }

    /// [`route`](Self::route) with an explicit guard on the number of
    /// stepping stones (`None` = number of charted systems)
    pub fn route_with_limit(
        &self,
        from: &str,
        to: &str,
        jump_range: f64,
        max_steps: Option<usize>,
    ) -> Result<Vec<String>> {
        validate_jump_range(jump_range)?;
        let origin = self.system(from)?;
        let destination = self.system(to)?;
        let max_steps = max_steps.unwrap_or_else(|| self.len());

        let no_route = || MarketError::NoRouteFound {
            from: origin.name.clone(),
            to: destination.name.clone(),
            jump_range,
        };

        // Destination first, origin excluded
        let mut reversed: Vec<&StarSystem> = vec![destination];
        let mut target = destination;

        loop {
            let direct = origin.coordinates.distance_to(&target.coordinates);
            if direct <= jump_range {
                let mut path = Vec::with_capacity(reversed.len() + 1);
                path.push(origin.name.clone());
                path.extend(reversed.iter().rev().map(|system| system.name.clone()));
                return Ok(path);
            }

            if reversed.len() > max_steps {
                warn!(from = %origin.name, to = %destination.name, max_steps, "route planner step guard exhausted");
                return Err(no_route());
            }

            let stone = self
                .stepping_stone(origin, target, direct, jump_range)
                .ok_or_else(no_route)?;
            debug!(target = %target.name, via = %stone.name, "route planner step");

            reversed.push(stone);
            target = stone;
        }
    }

    fn stepping_stone<'a>(
        &'a self,
        origin: &StarSystem,
        target: &StarSystem,
        direct: f64,
        jump_range: f64,
    ) -> Option<&'a StarSystem> {
        self.systems()
            .filter(|candidate| !ptr::eq(*candidate, target))
            .filter_map(|candidate| {
                let from_origin = origin.coordinates.distance_to(&candidate.coordinates);
                let to_target = candidate.coordinates.distance_to(&target.coordinates);
                (from_origin <= direct && to_target <= jump_range).then_some((candidate, to_target))
            })
            .max_by_key(|(_, to_target)| OrderedFloat(*to_target))
            .map(|(candidate, _)| candidate)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
