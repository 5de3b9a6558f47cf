//! Utilities to traverse the KDTree structure.

use geo_traits::RectTrait;

use crate::geometry::{Axis, Bounds, Point};
use crate::kdtree::{KDTreeIndex, NodeData};
use crate::model::HasLocation;
use std::marker::PhantomData;

/// A node in the KDTree, together with the region of the plane it is responsible for.
///
/// The root's region is the bounding box of all items; each split then narrows one side of the
/// region for each child, on the parent's axis.
#[derive(Debug)]
pub struct Node<'a, T: HasLocation, I: KDTreeIndex<T>> {
    /// The tree that this node is a reference onto
    tree: &'a I,

    /// Index of this node in the tree's arena
    id: usize,

    region: Bounds,

    phantom: PhantomData<T>,
}

impl<T: HasLocation, I: KDTreeIndex<T>> Clone for Node<'_, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: HasLocation, I: KDTreeIndex<T>> Copy for Node<'_, T, I> {}

impl<'a, T: HasLocation, I: KDTreeIndex<T>> Node<'a, T, I> {
    pub(crate) fn from_root(tree: &'a I) -> Self {
        // an empty tree has an empty (inverted) region
        let region = tree.nodes()[0].bbox.unwrap_or(Bounds::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        ));
        Self {
            tree,
            id: 0,
            region,
            phantom: PhantomData,
        }
    }

    #[inline]
    fn data(&self) -> &'a NodeData {
        let tree: &'a I = self.tree;
        &tree.nodes()[self.id]
    }

    /// The axis that the children of this node are split over.
    ///
    /// Leaves carry the axis their children would have been split on, so the axis alternates
    /// along every root-to-leaf path.
    pub fn axis(&self) -> Axis {
        self.data().axis
    }

    /// Distance from the root, which is at depth 0.
    pub fn depth(&self) -> usize {
        self.data().depth
    }

    /// The coordinate on [`axis`][Node::axis] at which this node's items were divided.
    ///
    /// Items in the left child are `<=` this value and items in the right child are `>=` it.
    /// `None` for leaves and for nodes that hold no items.
    pub fn split_value(&self) -> Option<f64> {
        self.data().split_value
    }

    /// The items under this node. For a leaf these are exactly the items it stores.
    pub fn items(&self) -> &'a [T] {
        let tree: &'a I = self.tree;
        let data = self.data();
        &tree.items()[data.start..data.end]
    }

    /// The tight bounding box of [`items`][Node::items], or `None` if there are none.
    pub fn bbox(&self) -> Option<Bounds> {
        self.data().bbox
    }

    /// The region of the plane this node partitions.
    pub fn region(&self) -> Bounds {
        self.region
    }

    /// The child node representing the lower half, or `None` for a leaf.
    pub fn left_child(&self) -> Option<Node<'a, T, I>> {
        let (left, _) = self.data().children?;
        let mut region = self.region;
        match (self.axis(), self.split_value()) {
            (Axis::X, Some(v)) => region.max_x = v,
            (Axis::Y, Some(v)) => region.max_y = v,
            (_, None) => {}
        }
        Some(self.child(left, region))
    }

    /// The child node representing the upper half, or `None` for a leaf.
    pub fn right_child(&self) -> Option<Node<'a, T, I>> {
        let (_, right) = self.data().children?;
        let mut region = self.region;
        match (self.axis(), self.split_value()) {
            (Axis::X, Some(v)) => region.min_x = v,
            (Axis::Y, Some(v)) => region.min_y = v,
            (_, None) => {}
        }
        Some(self.child(right, region))
    }

    fn child(&self, id: usize, region: Bounds) -> Node<'a, T, I> {
        Self {
            tree: self.tree,
            id,
            region,
            phantom: PhantomData,
        }
    }

    /// The line along this node's split, spanning its region.
    pub fn split_line(&self) -> Option<SplitLine> {
        let value = self.split_value()?;
        let (start, end) = match self.axis() {
            Axis::X => (self.region.min_y, self.region.max_y),
            Axis::Y => (self.region.min_x, self.region.max_x),
        };
        Some(SplitLine {
            axis: self.axis(),
            value,
            start,
            end,
            depth: self.depth(),
        })
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.data().children.is_none()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl<T: HasLocation, I: KDTreeIndex<T>> RectTrait for Node<'_, T, I> {
    type T = f64;
    type CoordType<'a>
        = Point
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Point::new(self.region.min_x, self.region.min_y)
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point::new(self.region.max_x, self.region.max_y)
    }
}

/// A partition line: the segment where one node divides its region in two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLine {
    /// [`Axis::X`] for a vertical line at `x = value`, [`Axis::Y`] for a horizontal one.
    pub axis: Axis,
    /// The split coordinate.
    pub value: f64,
    /// Where the line starts on the other axis.
    pub start: f64,
    /// Where the line ends on the other axis.
    pub end: f64,
    /// Depth of the node that made the split; useful for line weights.
    pub depth: usize,
}

impl SplitLine {
    /// Both ends of the line in plane coordinates.
    pub fn endpoints(&self) -> (Point, Point) {
        match self.axis {
            Axis::X => (
                Point::new(self.value, self.start),
                Point::new(self.value, self.end),
            ),
            Axis::Y => (
                Point::new(self.start, self.value),
                Point::new(self.end, self.value),
            ),
        }
    }
}
