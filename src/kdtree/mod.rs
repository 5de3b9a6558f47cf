//! A fixed-depth K-D Tree over projected stops.
//!
//! The tree halves its items at the median, alternating between the x and y axes, until every
//! leaf sits exactly `max_depth` levels below the root. Nodes are kept in a flat pre-order arena
//! and each one owns a contiguous range of a single kd-sorted item buffer, so the leaves
//! partition the input: every item lands in exactly one leaf.
//!
//! Range queries only ever test items stored in leaves. Internal nodes keep the bounding box of
//! their items, which lets a query skip subtrees that cannot contain a match.

#![warn(missing_docs)]

mod builder;
mod index;
mod r#trait;
mod traversal;

pub use builder::KDTreeBuilder;
pub use index::{KDTree, KDTreeMetadata, NodeData};
pub use r#trait::KDTreeIndex;
pub use traversal::{Node, SplitLine};

use crate::error::{Result, StopIndexError};
use crate::geometry::Axis;

/// Depth of the tree when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Deepest tree accepted by [`TreeConfig::validate`]; a tree of depth `d` has `2^(d+1) - 1` nodes.
pub const MAX_DEPTH_LIMIT: usize = 20;

/// Shape of the tree to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConfig {
    /// Number of levels below the root. Every leaf is at exactly this depth.
    pub max_depth: usize,
    /// Axis the root splits on.
    pub start_axis: Axis,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            start_axis: Axis::X,
        }
    }
}

impl TreeConfig {
    /// Check that the configured tree can be allocated.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(StopIndexError::DepthOutOfRange {
                depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }

    /// Total number of nodes in a tree of this shape, or `None` if that does not fit in a
    /// `usize`.
    pub fn num_nodes(&self) -> Option<usize> {
        let levels = u32::try_from(self.max_depth).ok()?.checked_add(1)?;
        // 2^levels - 1 is `levels` one bits
        usize::BITS
            .checked_sub(levels)
            .map(|unused| usize::MAX >> unused)
    }
}
