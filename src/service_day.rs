//! The stops and trips running on one service date, with spatial lookups over the stops.

use log::info;

use crate::error::Result;
use crate::geometry::Point;
use crate::kdtree::{KDTree, KDTreeBuilder, KDTreeIndex, TreeConfig};
use crate::model::{Stop, StopRecord, Trip};
use crate::projection::Projection;

/// How a [`ServiceDay`] projects and indexes its stops.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceDayConfig {
    pub tree: TreeConfig,
    pub projection: Projection,
}

/// One snapshot of the network: the stops served on a date and the trips that serve them.
///
/// The spatial index is built once on construction. Loading another date means building another
/// `ServiceDay`.
#[derive(Debug, Clone)]
pub struct ServiceDay {
    /// Sorted by stop id
    stops: Vec<Stop>,
    /// Sorted by trip id
    trips: Vec<Trip>,
    tree: KDTree<Stop>,
}

impl ServiceDay {
    /// Index `records` with the default projection and tree shape.
    pub fn new(records: impl IntoIterator<Item = StopRecord>, trips: Vec<Trip>) -> Self {
        let projection = Projection::default();
        let stops = records
            .into_iter()
            .map(|record| Stop::from_record(&record, &projection))
            .collect();
        Self::from_parts(stops, trips, KDTreeBuilder::new())
    }

    /// Index `records` with a custom projection and tree shape.
    pub fn with_config(
        records: impl IntoIterator<Item = StopRecord>,
        trips: Vec<Trip>,
        config: &ServiceDayConfig,
    ) -> Result<Self> {
        let builder = KDTreeBuilder::from_config(config.tree)?;
        let stops = records
            .into_iter()
            .map(|record| Stop::from_record(&record, &config.projection))
            .collect();
        Ok(Self::from_parts(stops, trips, builder))
    }

    /// Index stops that were already projected.
    pub fn from_stops(stops: Vec<Stop>, trips: Vec<Trip>) -> Self {
        Self::from_parts(stops, trips, KDTreeBuilder::new())
    }

    fn from_parts(
        mut stops: Vec<Stop>,
        mut trips: Vec<Trip>,
        mut builder: KDTreeBuilder<Stop>,
    ) -> Self {
        stops.sort_by(|a, b| a.id.cmp(&b.id));
        trips.sort_by(|a, b| a.trip_id.cmp(&b.trip_id));

        builder.extend_from_slice(&stops);
        let tree = builder.finish();

        info!(
            "[ServiceDay] Indexed {} stops and {} trips ({} leaves)",
            stops.len(),
            trips.len(),
            1usize << tree.max_depth()
        );

        Self { stops, trips, tree }
    }

    /// Every stop, sorted by id.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stops with `x_range.0 <= x <= x_range.1` and `y_range.0 <= y <= y_range.1`, in tree order.
    pub fn stops_in_rect(&self, x_range: (f64, f64), y_range: (f64, f64)) -> Vec<&Stop> {
        self.tree.range(x_range.0, y_range.0, x_range.1, y_range.1)
    }

    /// Stops no farther than `radius` miles from `center`, in tree order.
    pub fn stops_in_circle(&self, center: impl Into<Point>, radius: f64) -> Vec<&Stop> {
        let center = center.into();
        self.tree.within(center.x, center.y, radius)
    }

    /// Trips sorted by id, optionally only those on `route`.
    pub fn trips(&self, route: Option<&str>) -> Vec<&Trip> {
        match route {
            Some(route) => self
                .trips
                .iter()
                .filter(|trip| trip.route_id == route)
                .collect(),
            None => self.trips.iter().collect(),
        }
    }

    /// Stops with wheelchair boarding, sorted by id.
    pub fn accessible_stops(&self) -> Vec<&Stop> {
        self.stops.iter().filter(|s| s.wheelchair_boarding).collect()
    }

    /// Stops without wheelchair boarding, sorted by id.
    pub fn inaccessible_stops(&self) -> Vec<&Stop> {
        self.stops.iter().filter(|s| !s.wheelchair_boarding).collect()
    }

    /// The spatial index over [`stops`][ServiceDay::stops].
    pub fn tree(&self) -> &KDTree<Stop> {
        &self.tree
    }
}
