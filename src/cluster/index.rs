//! Spatial indexes used to find neighbor candidates
//!
//! Every point is indexed by a square of half-side `eps` centered on it. A
//! query square around another point intersects it whenever the two points
//! could be within `eps` of each other, so the index never misses a neighbor.
//! It does return false positives (squares overapproximate disks); those are
//! filtered out by the caller.

use rstar::{AABB, Envelope, RStarInsertionStrategy, RTree, RTreeObject, RTreeParams};

use super::point::Point;

/// Axis-aligned rectangle over `[lat, lon]`
pub type Rect = AABB<[f64; 2]>;

/// Builds the square centered on `point` extending `eps` along each axis
pub fn rect_around(point: &Point, eps: f64) -> Rect {
    let [lat, lon] = point.coords();
    AABB::from_corners([lat - eps, lon - eps], [lat + eps, lon + eps])
}

/// A rectangle tagged with the index of the point it was built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexEntry {
    pub rect: Rect,
    pub index: usize,
}

impl IndexEntry {
    pub fn around(point: &Point, eps: f64, index: usize) -> Self {
        IndexEntry {
            rect: rect_around(point, eps),
            index,
        }
    }
}

impl RTreeObject for IndexEntry {
    type Envelope = Rect;

    fn envelope(&self) -> Self::Envelope {
        self.rect
    }
}

/// Immutable index over rectangles answering intersection queries
pub trait SpatialIndex {
    /// Builds the index from all entries at once
    fn build(entries: Vec<IndexEntry>) -> Self
    where
        Self: Sized;

    /// Returns the point index of every entry whose rectangle intersects `rect`
    ///
    /// Order is unspecified.
    fn search_intersect(&self, rect: &Rect) -> Vec<usize>;
}

/// Node sizing for the bulk-loaded tree
pub struct NodeParams;

impl RTreeParams for NodeParams {
    const MIN_SIZE: usize = 20;
    const MAX_SIZE: usize = 50;
    const REINSERTION_COUNT: usize = 10;
    type DefaultInsertionStrategy = RStarInsertionStrategy;
}

/// Bulk-loaded R-tree
pub struct RTreeIndex {
    tree: RTree<IndexEntry, NodeParams>,
}

impl SpatialIndex for RTreeIndex {
    fn build(entries: Vec<IndexEntry>) -> Self {
        RTreeIndex {
            tree: RTree::bulk_load_with_params(entries),
        }
    }

    fn search_intersect(&self, rect: &Rect) -> Vec<usize> {
        self.tree
            .locate_in_envelope_intersecting(rect)
            .map(|entry| entry.index)
            .collect()
    }
}

/// Simple O(N) index: checks every entry on each query
///
/// Gives the same answers as [`RTreeIndex`] and serves as its reference.
pub struct ScanIndex {
    entries: Vec<IndexEntry>,
}

impl SpatialIndex for ScanIndex {
    fn build(entries: Vec<IndexEntry>) -> Self {
        ScanIndex { entries }
    }

    fn search_intersect(&self, rect: &Rect) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|entry| entry.rect.intersects(rect))
            .map(|entry| entry.index)
            .collect()
    }
}
