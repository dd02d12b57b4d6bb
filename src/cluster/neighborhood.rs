use super::distance::planar_distance;
use super::index::{IndexEntry, SpatialIndex, rect_around};
use super::point::Point;

/// Exact eps-neighborhood lookup over a fixed set of points
///
/// The spatial index narrows the search to candidates, then each candidate is
/// checked against the real distance.
pub struct Neighborhood<'a, I> {
    points: &'a [Point],
    index: I,
    eps: f64,
}

impl<'a, I: SpatialIndex> Neighborhood<'a, I> {
    /// Indexes every point with a square of half-side `eps` around it
    pub fn new(points: &'a [Point], eps: f64) -> Self {
        let entries = points
            .iter()
            .enumerate()
            .map(|(i, p)| IndexEntry::around(p, eps, i))
            .collect();

        Neighborhood {
            points,
            index: I::build(entries),
            eps,
        }
    }

    /// Returns all points within `eps` of point `i`, including `i` itself
    ///
    /// Indices are reported once each, in ascending order. Cluster member order
    /// depends on this order, so it must stay stable.
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        let pt = &self.points[i];
        let mut result: Vec<usize> = self
            .index
            .search_intersect(&rect_around(pt, self.eps))
            .into_iter()
            .filter(|&j| planar_distance(pt, &self.points[j]) <= self.eps)
            .collect();
        result.sort_unstable();
        result
    }
}
