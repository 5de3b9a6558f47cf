//! Planar geometry shared by the index and the query engine.
//!
//! All coordinates are miles east (`x`) and north (`y`) of the projection origin.

use std::fmt;
use std::str::FromStr;

use geo_traits::{CoordTrait, RectTrait};

use crate::error::StopIndexError;

/// A projected location, in miles from the projection origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn dist(&self, other: &Point) -> f64 {
        sq_dist(self, other).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location(xy=({:.2}, {:.2}))", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl CoordTrait for Point {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// The coordinate a node splits its items on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    #[default]
    X,
    Y,
}

impl Axis {
    /// The axis used one level further down the tree.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// The coordinate of `point` on this axis.
    #[inline]
    pub fn coord(self, point: &Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

impl FromStr for Axis {
    type Err = StopIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            _ => Err(StopIndexError::InvalidAxis(s.to_string())),
        }
    }
}

/// An axis-aligned rectangle with inclusive bounds on every side.
///
/// Nothing forces `min <= max`: an inverted rectangle is valid and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Build from `(xmin, xmax)` and `(ymin, ymax)` ranges.
    pub fn from_ranges(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self::new(x_range.0, y_range.0, x_range.1, y_range.1)
    }

    /// The bounding square of the circle of `radius` around `center`.
    pub fn around(center: &Point, radius: f64) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    /// The tight bounding box of `points`, or `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first.x, first.y, first.x, first.y);
        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Whether the two rectangles share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

impl RectTrait for Bounds {
    type T = f64;
    type CoordType<'a>
        = Point
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.min_x, self.min_y)
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.max_x, self.max_y)
    }
}

#[inline]
pub fn sq_dist(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_parses_case_insensitively() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(" Y ".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!(
            "z".parse::<Axis>(),
            Err(StopIndexError::InvalidAxis("z".to_string()))
        );
    }

    #[test]
    fn axis_alternates() {
        assert_eq!(Axis::X.opposite(), Axis::Y);
        assert_eq!(Axis::Y.opposite().opposite(), Axis::Y);
        assert_eq!(Axis::Y.coord(&Point::new(1., 2.)), 2.);
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::from_ranges((0., 6.), (0., 6.));
        assert!(b.contains(&Point::new(0., 6.)));
        assert!(b.contains(&Point::new(5., 5.)));
        assert!(!b.contains(&Point::new(-2., 3.)));
    }

    #[test]
    fn inverted_bounds_contain_nothing() {
        let b = Bounds::from_ranges((6., 0.), (0., 6.));
        assert!(!b.contains(&Point::new(3., 3.)));
        assert!(!b.contains(&Point::new(6., 3.)));
        assert!(!b.contains(&Point::new(0., 3.)));
    }

    #[test]
    fn bounds_from_points() {
        assert_eq!(Bounds::from_points(Vec::new()), None);
        let points = [Point::new(-2., 3.), Point::new(1., -1.), Point::new(5., 5.)];
        assert_eq!(
            Bounds::from_points(points),
            Some(Bounds::new(-2., -1., 5., 5.))
        );
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0., 0.);
        let b = Point::new(3., 4.);
        assert_eq!(a.dist(&b), 5.);
        assert_eq!(sq_dist(&a, &b), 25.);
        assert_eq!(b.to_string(), "Location(xy=(3.00, 4.00))");
    }
}
