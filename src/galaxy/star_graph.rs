//! Star-system coordinate table.
//!
//! ## Lookup
//!
//! System names are matched case-insensitively (feeds are not consistent
//! about capitalisation); the charted spelling is kept for display.
//!
//! ## Station identifiers
//!
//! Stations are named "System (Station Label)". [`system_of`] recovers the
//! system part so that station-to-station distances can be computed.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use crate::error::{FeedError, MarketError, Result};
use crate::galaxy::systems::BUILTIN_SYSTEMS;

/// Position of a star system in light years.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinates {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A charted star system.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Deserialize)]
struct StarTableRow {
    name: String,
    x: f64,
    y: f64,
    z: f64,
}

/// Immutable system name to coordinate table.
#[derive(Debug, Clone, Default)]
pub struct StarGraph {
    /// Lowercased name => system
    systems: BTreeMap<String, StarSystem>,
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Star system part of a station identifier.
///
/// ```
/// use galaxy_market::galaxy::system_of;
///
/// assert_eq!(system_of("Asellus Primus (Beagle 2 Landing)"), "Asellus Primus");
/// assert_eq!(system_of("Eranin"), "Eranin");
/// ```
pub fn system_of(station: &str) -> &str {
    match station.find(" (") {
        Some(idx) => station[..idx].trim(),
        None => station.trim(),
    }
}

impl StarGraph {
    /// Build a graph from (name, coordinates) pairs
    ///
    /// A later entry with the same (case-insensitive) name replaces an
    /// earlier one.
    pub fn from_systems<I, S>(systems: I) -> Self
    where
        I: IntoIterator<Item = (S, Coordinates)>,
        S: Into<String>,
    {
        let systems = systems
            .into_iter()
            .map(|(name, coordinates)| {
                let name = name.into();
                (lookup_key(&name), StarSystem { name, coordinates })
            })
            .collect();
        Self { systems }
    }

    /// The charted systems shipped with the crate
    pub fn builtin() -> Self {
        Self::from_systems(
            BUILTIN_SYSTEMS
                .iter()
                .map(|(name, x, y, z)| (*name, Coordinates::new(*x, *y, *z))),
        )
    }

    /// Load a table from JSON: `[{"name": "Sol", "x": 0, "y": 0, "z": 0}, ...]`
    pub fn from_json_reader<R: Read>(reader: R) -> std::result::Result<Self, FeedError> {
        let rows: Vec<StarTableRow> = serde_json::from_reader(reader)?;
        if let Some(row) = rows
            .iter()
            .find(|row| !(row.x.is_finite() && row.y.is_finite() && row.z.is_finite()))
        {
            return Err(FeedError::StarTable(format!(
                "non-finite coordinates for {}",
                row.name
            )));
        }
        if rows.iter().any(|row| row.name.trim().is_empty()) {
            return Err(FeedError::StarTable("empty system name".to_string()));
        }
        Ok(Self::from_systems(
            rows.into_iter()
                .map(|row| (row.name, Coordinates::new(row.x, row.y, row.z))),
        ))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.systems.contains_key(&lookup_key(name))
    }

    pub fn get(&self, name: &str) -> Option<&StarSystem> {
        self.systems.get(&lookup_key(name))
    }

    /// Look up a system, failing with `UnknownSystem`
    pub fn system(&self, name: &str) -> Result<&StarSystem> {
        self.get(name)
            .ok_or_else(|| MarketError::UnknownSystem(name.to_string()))
    }

    /// Charted systems in name order
    pub fn systems(&self) -> impl Iterator<Item = &StarSystem> + '_ {
        self.systems.values()
    }

    /// Distance between two systems in light years
    pub fn distance(&self, from: &str, to: &str) -> Result<f64> {
        let from = self.system(from)?;
        let to = self.system(to)?;
        Ok(from.coordinates.distance_to(&to.coordinates))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> StarGraph {
        StarGraph::from_systems([
            ("P", Coordinates::new(0.0, 0.0, 0.0)),
            ("R", Coordinates::new(12.0, 0.0, 0.0)),
            ("Pyth", Coordinates::new(3.0, 4.0, 0.0)),
        ])
    }

    #[test]
    fn test_distance_euclidean() {
        let graph = line();

        assert_eq!(graph.distance("P", "R").unwrap(), 12.0);
        assert_eq!(graph.distance("P", "Pyth").unwrap(), 5.0);
        assert_eq!(graph.distance("R", "R").unwrap(), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric_3d() {
        let a = Coordinates::new(1.0, 2.0, 3.0);
        let b = Coordinates::new(-1.0, 0.0, 4.0);
        assert_eq!(a.distance_to(&b), 3.0);
        assert_eq!(b.distance_to(&a), 3.0);
    }

    #[test]
    fn test_unknown_system() {
        let graph = line();

        assert_eq!(
            graph.distance("P", "Nowhere"),
            Err(MarketError::UnknownSystem("Nowhere".to_string()))
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        let graph = line();

        assert!(graph.contains("pyth"));
        assert_eq!(graph.get("PYTH").unwrap().name, "Pyth");
    }

    #[test]
    fn test_distance_between_stations() {
        let graph = line();

        let distance = graph
            .distance(system_of("P (Alpha Port)"), system_of("R (Beta Hub)"))
            .unwrap();
        assert_eq!(distance, 12.0);
    }

    #[test]
    fn test_system_of_variants() {
        assert_eq!(system_of("LP 98-132 (Freeport)"), "LP 98-132");
        assert_eq!(system_of("  Styx  "), "Styx");
        assert_eq!(system_of("I Bootis (Chango Dock) (Annex)"), "I Bootis");
    }

    #[test]
    fn test_builtin_table() {
        let graph = StarGraph::builtin();

        assert!(!graph.is_empty());
        assert!(graph.contains("Sol"));
        assert!(graph.contains("Eranin"));
        assert_eq!(graph.distance("Sol", "Sol").unwrap(), 0.0);
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"[{"name": "A", "x": 0, "y": 0, "z": 0}, {"name": "B", "x": 1.5, "y": 2, "z": -6}]"#;
        let graph = StarGraph::from_json_reader(json.as_bytes()).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.distance("A", "B").unwrap(), 6.5);
    }

    #[test]
    fn test_from_json_reader_rejects_bad_rows() {
        assert!(StarGraph::from_json_reader(r#"[{"name": "A"}]"#.as_bytes()).is_err());
        assert!(StarGraph::from_json_reader(r#"[{"name": " ", "x": 0, "y": 0, "z": 0}]"#.as_bytes()).is_err());
    }
}
