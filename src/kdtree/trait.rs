use geo_traits::{CoordTrait, RectTrait};
use tinyvec::TinyVec;

use crate::geometry::{sq_dist, Bounds, Point};
use crate::kdtree::{KDTree, KDTreeMetadata, Node, NodeData, SplitLine};
use crate::model::HasLocation;

/// A trait for searching and accessing data out of a KDTree.
pub trait KDTreeIndex<T: HasLocation>: Sized {
    /// All items of this tree, in kd-sorted order
    fn items(&self) -> &[T];

    /// The node arena of this tree, in pre-order
    fn nodes(&self) -> &[NodeData];

    /// Access the metadata describing this KDTree
    fn metadata(&self) -> &KDTreeMetadata;

    /// The number of items in this KDTree
    fn num_items(&self) -> usize {
        self.metadata().num_items()
    }

    /// The depth of every leaf of this KDTree
    fn max_depth(&self) -> usize {
        self.metadata().max_depth()
    }

    /// Search the index for items within a given bounding box. Bounds are inclusive.
    ///
    /// - min_x: bbox
    /// - min_y: bbox
    /// - max_x: bbox
    /// - max_y: bbox
    ///
    /// Returns found items, leaves visited left to right
    fn range(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<&T> {
        self.range_bounds(&Bounds::new(min_x, min_y, max_x, max_y))
    }

    /// Search the index for items within a given bounding box.
    ///
    /// Returns found items, leaves visited left to right
    fn range_rect(&self, rect: &impl RectTrait<T = f64>) -> Vec<&T> {
        self.range(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// Search the index for items within a given bounding box.
    ///
    /// An inverted box (`min > max` on either axis) matches nothing.
    fn range_bounds(&self, query: &Bounds) -> Vec<&T> {
        let nodes = self.nodes();
        let items = self.items();

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[usize; 32]> = TinyVec::new();
        stack.push(0);

        let mut result: Vec<&T> = vec![];

        while let Some(id) = stack.pop() {
            let node = &nodes[id];

            // an empty node or one whose items all lie outside the query can't match
            match node.bbox {
                Some(bbox) if bbox.intersects(query) => {}
                _ => continue,
            }

            match node.children {
                Some((left, right)) => {
                    // pushed in backwards order to what gets popped
                    stack.push(right);
                    stack.push(left);
                }
                None => {
                    for item in &items[node.start..node.end] {
                        if query.contains(&item.location()) {
                            result.push(item);
                        }
                    }
                }
            }
        }

        result
    }

    /// Search the index for items within a given radius. The circle's edge is inclusive.
    ///
    /// - qx: x value of query point
    /// - qy: y value of query point
    /// - r: radius
    ///
    /// Returns found items, in the same order [`range`][KDTreeIndex::range] yields them
    fn within(&self, qx: f64, qy: f64, r: f64) -> Vec<&T> {
        let center = Point::new(qx, qy);
        let r2 = r * r;

        // candidates from the circle's bounding square, then the exact test
        self.range_bounds(&Bounds::around(&center, r))
            .into_iter()
            .filter(|item| sq_dist(&item.location(), &center) <= r2)
            .collect()
    }

    /// Search the index for items within a given radius.
    ///
    /// - coord: coordinate of query point
    /// - r: radius
    fn within_coord(&self, coord: &impl CoordTrait<T = f64>, r: f64) -> Vec<&T> {
        self.within(coord.x(), coord.y(), r)
    }

    /// Access the root node of the KDTree for manual traversal.
    fn root(&self) -> Node<'_, T, Self> {
        Node::from_root(self)
    }

    /// All leaves, left to right.
    fn leaves(&self) -> Vec<Node<'_, T, Self>> {
        let mut leaves = Vec::with_capacity(1 << self.max_depth());
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            match (node.left_child(), node.right_child()) {
                (Some(left), Some(right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                _ => leaves.push(node),
            }
        }
        leaves
    }

    /// The segment drawn along every split, clipped to the region of the node it divides.
    ///
    /// Lines come out in pre-order, so the root's split is first. Nodes with nothing to split
    /// produce no line.
    fn partition_lines(&self) -> Vec<SplitLine> {
        let mut lines = vec![];
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if let Some(line) = node.split_line() {
                lines.push(line);
            }
            if let (Some(left), Some(right)) = (node.left_child(), node.right_child()) {
                stack.push(right);
                stack.push(left);
            }
        }
        lines
    }
}

impl<T: HasLocation> KDTreeIndex<T> for KDTree<T> {
    fn items(&self) -> &[T] {
        &self.items
    }

    fn nodes(&self) -> &[NodeData] {
        &self.nodes
    }

    fn metadata(&self) -> &KDTreeMetadata {
        &self.metadata
    }
}
