//! The fixed set of cities the run fetches.

use std::fmt;

/// A named point whose forecast is fetched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.latitude, self.longitude)
    }
}

/// The Baltic capitals, in fetch (and output) order.
pub const BALTIC_CAPITALS: [City; 3] = [
    City::new("Tallinn", 59.4370, 24.7536),
    City::new("Riga", 56.9496, 24.1052),
    City::new("Vilnius", 54.6872, 25.2797),
];
