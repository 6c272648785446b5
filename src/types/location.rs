//! Geographical coordinates shared by the occurrence and weather modules.

use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are in decimal degrees.
///
/// # Examples
///
/// ```
/// use biodiversity_explorer::LatLon;
///
/// let sundarbans = LatLon(21.9497, 89.1833);
/// assert_eq!(sundarbans.0, 21.9497); // Latitude
/// assert_eq!(sundarbans.1, 89.1833); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

/// Formats as `(lat, lon)`, the way coordinates appear in the climate view.
impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
