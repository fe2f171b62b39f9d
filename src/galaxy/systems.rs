//! Built-in star chart.
//!
//! Coordinates are in light years relative to Sol, for the inhabited
//! systems around the early trading hubs plus Sol's immediate neighbours.

/// (name, x, y, z)
pub(crate) const BUILTIN_SYSTEMS: &[(&str, f64, f64, f64)] = &[
    ("Sol", 0.0, 0.0, 0.0),
    ("Alpha Centauri", 3.03125, -0.09375, 3.15625),
    ("Barnard's Star", -3.03125, 1.375, 4.9375),
    ("Wolf 359", 3.875, 6.46875, -1.90625),
    ("Lalande 21185", -3.4375, 8.125, -2.75),
    ("Sirius", 6.25, -1.28125, -5.75),
    ("Eranin", -22.84375, 36.53125, -1.1875),
    ("Asellus Primus", -23.9375, 40.875, -1.34375),
    ("LP 98-132", -26.78125, 37.03125, -4.59375),
    ("I Bootis", -22.375, 34.84375, 4.0),
    ("Aulin", -19.6875, 32.6875, 4.75),
    ("Dahan", -19.75, 41.78125, -3.1875),
    ("Styx", -24.3125, 37.75, 6.03125),
    ("Rakapila", -14.90625, 33.625, 9.125),
    ("Ochosi", -25.3125, 33.96875, 11.59375),
    ("Chango", -16.875, 33.21875, 12.375),
    ("Magec", -32.875, 36.15625, 15.5),
    ("Hepheastus", -26.9375, 29.65625, 12.09375),
    ("Opala", -25.5, 35.25, 9.28125),
    ("Aganippe", -11.5625, 43.8125, 11.625),
    ("Cemiess", -13.0, 40.34375, 0.875),
    ("Keries", -18.90625, 27.21875, 12.59375),
];
