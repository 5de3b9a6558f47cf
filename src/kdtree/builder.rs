use log::debug;

use crate::error::Result;
use crate::geometry::{Axis, Bounds};
use crate::kdtree::index::{KDTree, KDTreeMetadata, NodeData};
use crate::kdtree::TreeConfig;
use crate::model::HasLocation;

/// A builder to create a [`KDTree`].
///
/// Items are buffered in insertion order and only reordered inside the builder's own buffer when
/// [`finish`][KDTreeBuilder::finish] runs, so the caller's collection is never touched.
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<T: HasLocation> {
    items: Vec<T>,
    config: TreeConfig,
}

impl<T: HasLocation> Default for KDTreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HasLocation> KDTreeBuilder<T> {
    /// Create a new builder with the default depth and starting axis.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            config: TreeConfig::default(),
        }
    }

    /// Create a new builder with a custom tree shape.
    pub fn from_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            items: Vec::new(),
            config,
        })
    }

    /// The shape of the tree this builder will produce.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Add an item to the index, returning its insertion index.
    pub fn add(&mut self, item: T) -> usize {
        let index = self.items.len();
        self.items.push(item);
        index
    }

    /// Add a copy of every item in `items`.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.items.extend_from_slice(items);
    }

    /// Consume this builder, performing the k-d sort and generating a tree ready for queries.
    pub fn finish(self) -> KDTree<T> {
        let Self { mut items, config } = self;

        let mut nodes = Vec::with_capacity(config.num_nodes().unwrap_or_default());
        split(
            &mut nodes,
            &mut items,
            0,
            config.start_axis,
            0,
            config.max_depth,
        );
        debug_assert_eq!(Some(nodes.len()), config.num_nodes());

        debug!(
            "[KDTree] Built {} nodes over {} items (depth {}, root axis {})",
            nodes.len(),
            items.len(),
            config.max_depth,
            config.start_axis
        );

        let metadata = KDTreeMetadata {
            max_depth: config.max_depth,
            start_axis: config.start_axis,
            num_items: items.len(),
        };
        KDTree {
            items,
            nodes,
            metadata,
        }
    }
}

impl<T: HasLocation> Extend<T> for KDTreeBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Recursively kd-sort `items`, pushing nodes in pre-order. Returns the id of the node created
/// for `items`.
///
/// `offset` is the position of `items[0]` within the whole buffer.
fn split<T: HasLocation>(
    nodes: &mut Vec<NodeData>,
    items: &mut [T],
    offset: usize,
    axis: Axis,
    depth: usize,
    max_depth: usize,
) -> usize {
    let id = nodes.len();
    nodes.push(NodeData {
        axis,
        depth,
        start: offset,
        end: offset + items.len(),
        split_value: None,
        bbox: Bounds::from_points(items.iter().map(HasLocation::location)),
        children: None,
    });

    if depth == max_depth {
        return id;
    }

    // stable, so equal coordinates keep their relative order
    items.sort_by(|a, b| axis.coord(&a.location()).total_cmp(&axis.coord(&b.location())));

    // the extra item of an odd-sized set goes right
    let m = items.len() / 2;
    let split_value = items.get(m).map(|item| axis.coord(&item.location()));

    let (lower, upper) = items.split_at_mut(m);
    let left = split(nodes, lower, offset, axis.opposite(), depth + 1, max_depth);
    let right = split(nodes, upper, offset + m, axis.opposite(), depth + 1, max_depth);

    let node = &mut nodes[id];
    node.split_value = split_value;
    node.children = Some((left, right));
    id
}
