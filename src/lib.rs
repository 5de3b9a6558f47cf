#![doc = include_str!("../README.md")]

mod error;
pub mod geometry;
pub mod kdtree;
pub mod model;
pub mod projection;
pub mod service_day;

pub use error::{Result, StopIndexError};
pub use geometry::{Axis, Bounds, Point};
pub use model::{HasLocation, Stop, StopRecord, Trip};
pub use projection::{haversine_miles, project, Projection};
pub use service_day::{ServiceDay, ServiceDayConfig};

#[cfg(test)]
pub(crate) mod test;
