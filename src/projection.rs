//! Flat-earth projection of latitude/longitude onto a local plane in miles.
//!
//! Each axis is measured independently as a great-circle distance from the origin: `x` along the
//! origin's parallel, `y` along its meridian. West and south of the origin are negative.

use crate::geometry::Point;

/// Earth's radius in miles used by [`haversine_miles`].
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Latitude of the default projection origin (the Wisconsin State Capitol).
pub const CAPITOL_LAT: f64 = 43.074683;

/// Longitude of the default projection origin (the Wisconsin State Capitol).
pub const CAPITOL_LON: f64 = -89.384261;

/// Great-circle distance in miles between two (lat, lon) pairs given in degrees.
///
/// See: <https://en.wikipedia.org/wiki/Haversine_formula>
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_with_radius(EARTH_RADIUS_MILES, lat1, lon1, lat2, lon2)
}

#[inline]
fn haversine_with_radius(radius: f64, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push sqrt(a) just past 1 near antipodes
    let c = 2.0 * a.sqrt().min(1.0).asin();
    radius * c
}

/// Projects geographic coordinates onto a plane centered on a fixed origin.
///
/// Inputs must satisfy `lat` in [-90, 90] and `lon` in [-180, 180]; nothing is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Projection {
    pub origin_lat: f64,
    pub origin_lon: f64,
    /// Earth's radius in miles
    pub earth_radius_miles: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            origin_lat: CAPITOL_LAT,
            origin_lon: CAPITOL_LON,
            earth_radius_miles: EARTH_RADIUS_MILES,
        }
    }
}

impl Projection {
    /// A projection around a custom origin, with the default Earth radius.
    pub fn with_origin(origin_lat: f64, origin_lon: f64) -> Self {
        Self {
            origin_lat,
            origin_lon,
            ..Default::default()
        }
    }

    /// Great-circle distance in miles using this projection's Earth radius.
    pub fn haversine(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        haversine_with_radius(self.earth_radius_miles, lat1, lon1, lat2, lon2)
    }

    /// Project `(lat, lon)` to miles east/north of the origin.
    pub fn project(&self, lat: f64, lon: f64) -> Point {
        let mut x = self.haversine(self.origin_lat, self.origin_lon, self.origin_lat, lon);
        let mut y = self.haversine(self.origin_lat, self.origin_lon, lat, self.origin_lon);

        if lon < self.origin_lon {
            x = -x;
        }
        if lat < self.origin_lat {
            y = -y;
        }

        Point::new(x, y)
    }

    /// The projected origin, always `(0, 0)`.
    pub fn origin(&self) -> Point {
        self.project(self.origin_lat, self.origin_lon)
    }
}

/// Project `(lat, lon)` with the default, capitol-centered [`Projection`].
pub fn project(lat: f64, lon: f64) -> Point {
    Projection::default().project(lat, lon)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn origin_projects_to_zero() {
        let p = project(CAPITOL_LAT, CAPITOL_LON);
        assert_eq!(p, Point::new(0., 0.));
        assert_eq!(Projection::with_origin(40.7128, -74.0060).origin(), Point::new(0., 0.));
    }

    #[test]
    fn one_degree_of_latitude() {
        // 3956 * pi / 180
        let d = haversine_miles(43., -89., 44., -89.);
        assert_abs_diff_eq!(d, 69.0452, epsilon = 1e-3);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = haversine_miles(43.07, -89.38, 43.13, -89.30);
        let b = haversine_miles(43.13, -89.30, 43.07, -89.38);
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn antipodes_do_not_overshoot() {
        let d = haversine_miles(0., 0., 0., 180.);
        assert!(d.is_finite());
        assert_abs_diff_eq!(d, EARTH_RADIUS_MILES * std::f64::consts::PI, epsilon = 1e-3);
    }

    #[test]
    fn signs_follow_quadrant() {
        let ne = project(CAPITOL_LAT + 0.05, CAPITOL_LON + 0.05);
        assert!(ne.x > 0. && ne.y > 0.);

        let sw = project(CAPITOL_LAT - 0.05, CAPITOL_LON - 0.05);
        assert!(sw.x < 0. && sw.y < 0.);

        let n = project(CAPITOL_LAT + 0.1, CAPITOL_LON);
        assert_eq!(n.x, 0.);
        assert_abs_diff_eq!(n.y, 6.90452, epsilon = 1e-4);
    }

    #[test]
    fn custom_radius() {
        let proj = Projection {
            earth_radius_miles: 1.0,
            ..Default::default()
        };
        assert_abs_diff_eq!(
            proj.haversine(0., 0., 0., 90.),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
    }
}
