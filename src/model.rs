//! Transit records consumed by the index.

use std::fmt;

use crate::geometry::Point;
use crate::projection::Projection;

/// Anything with a projected location can be stored in a [`KDTree`][crate::kdtree::KDTree].
pub trait HasLocation {
    fn location(&self) -> Point;
}

impl HasLocation for Point {
    #[inline]
    fn location(&self) -> Point {
        *self
    }
}

/// A stop as handed over by a feed loader, still in geographic coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopRecord {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub wheelchair_accessible: bool,
}

impl StopRecord {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, wheelchair_accessible: bool) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            wheelchair_accessible,
        }
    }
}

/// A transit stop with its projected location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id: String,
    pub location: Point,
    pub wheelchair_boarding: bool,
}

impl Stop {
    pub fn new(id: impl Into<String>, location: Point, wheelchair_boarding: bool) -> Self {
        Self {
            id: id.into(),
            location,
            wheelchair_boarding,
        }
    }

    /// Project a feed record onto the plane of `projection`.
    pub fn from_record(record: &StopRecord, projection: &Projection) -> Self {
        Self {
            id: record.id.clone(),
            location: projection.project(record.lat, record.lon),
            wheelchair_boarding: record.wheelchair_accessible,
        }
    }
}

impl HasLocation for Stop {
    #[inline]
    fn location(&self) -> Point {
        self.location
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stop({}, {}, {})",
            self.id, self.location, self.wheelchair_boarding
        )
    }
}

/// A scheduled trip running on the service day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub trip_id: String,
    /// Short route name, e.g. `"80"`
    pub route_id: String,
    pub bikes_allowed: bool,
}

impl Trip {
    pub fn new(
        trip_id: impl Into<String>,
        route_id: impl Into<String>,
        bikes_allowed: bool,
    ) -> Self {
        Self {
            trip_id: trip_id.into(),
            route_id: route_id.into(),
            bikes_allowed,
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trip({}, {}, {})",
            self.trip_id, self.route_id, self.bikes_allowed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{CAPITOL_LAT, CAPITOL_LON};

    #[test]
    fn record_projection() {
        let record = StopRecord::new("1391", CAPITOL_LAT, CAPITOL_LON, true);
        let stop = Stop::from_record(&record, &Projection::default());
        assert_eq!(stop.id, "1391");
        assert_eq!(stop.location(), Point::new(0., 0.));
        assert!(stop.wheelchair_boarding);
        assert_eq!(stop.to_string(), "Stop(1391, Location(xy=(0.00, 0.00)), true)");
    }

    #[test]
    fn trip_display() {
        assert_eq!(Trip::new("1024", "80", false).to_string(), "Trip(1024, 80, false)");
        assert_eq!(Trip::new("t7", "2", true).to_string(), "Trip(t7, 2, true)");
    }
}
