use crate::geometry::{Axis, Bounds};
use crate::kdtree::KDTreeBuilder;
use crate::model::HasLocation;

/// An immutable K-D Tree owning its items.
///
/// Usually this will be created from scratch via [`KDTreeBuilder`]. To index a new snapshot of
/// items, build a new tree; there is no way to insert into or remove from an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<T> {
    /// Items in kd-sorted order. Each node covers a contiguous range of this buffer.
    pub(crate) items: Vec<T>,
    /// Nodes in pre-order; the root is `nodes[0]`.
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) metadata: KDTreeMetadata,
}

impl<T: HasLocation> KDTree<T> {
    /// Build a tree of the default shape over `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut builder = KDTreeBuilder::new();
        builder.extend(items);
        builder.finish()
    }

    /// Consume the tree, returning its items in kd-sorted order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Common metadata to describe a tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KDTreeMetadata {
    pub(crate) max_depth: usize,
    pub(crate) start_axis: Axis,
    pub(crate) num_items: usize,
}

impl KDTreeMetadata {
    /// The depth of every leaf.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The axis the root splits on.
    pub fn start_axis(&self) -> Axis {
        self.start_axis
    }

    /// The number of items in the tree.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The number of nodes in the tree, leaves included.
    pub fn num_nodes(&self) -> usize {
        (1 << (self.max_depth + 1)) - 1
    }
}

/// The raw record of one node in the arena. Use [`Node`][crate::kdtree::Node] to walk the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeData {
    /// Axis this node's items are split on to form its children.
    pub(crate) axis: Axis,
    pub(crate) depth: usize,
    /// Range of the item buffer owned by this node.
    pub(crate) start: usize,
    pub(crate) end: usize,
    /// Coordinate of the first item of the upper half; `None` for leaves and empty nodes.
    pub(crate) split_value: Option<f64>,
    /// Tight bounds of the owned items; `None` when the node is empty.
    pub(crate) bbox: Option<Bounds>,
    /// Arena ids of the (left, right) children; `None` for leaves.
    pub(crate) children: Option<(usize, usize)>,
}
