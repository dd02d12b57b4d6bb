use super::index::SpatialIndex;
use super::neighborhood::Neighborhood;
use super::point::{Cluster, Point};
use crate::error::ParamError;
use bitvec::prelude::*;
use tracing::debug;

// DBSCAN algorithm pseudocode (from <http://en.wikipedia.org/wiki/DBSCAN>):
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    for each unvisited point P in dataset D
//       mark P as visited
//       NeighborPts = regionQuery(P, eps)
//       if sizeof(NeighborPts) < MinPts
//          mark P as NOISE
//       else
//          C = next cluster
//          expandCluster(P, NeighborPts, C, eps, MinPts)
//
// expandCluster(P, NeighborPts, C, eps, MinPts)
//    add P to cluster C
//    for each point P' in NeighborPts
//       if P' is not visited
//          mark P' as visited
//          NeighborPts' = regionQuery(P', eps)
//          if sizeof(NeighborPts') >= MinPts
//             NeighborPts = NeighborPts joined with NeighborPts'
//       if P' is not yet member of any cluster
//          add P' to cluster C
//
// regionQuery(P, eps)
//    return all points within P's eps-neighbourhood (including P)

/// Validated DBSCAN parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    eps: f64,
    min_points: usize,
}

impl Params {
    /// Checks that `eps` is a non-negative number and `min_points` is at least 1
    pub fn new(eps: f64, min_points: usize) -> Result<Self, ParamError> {
        if eps.is_nan() || eps < 0.0 {
            return Err(ParamError::NegativeEps(eps));
        }
        if min_points < 1 {
            return Err(ParamError::MinPoints(min_points));
        }
        Ok(Params { eps, min_points })
    }

    /// Neighborhood radius, in coordinate units
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Neighborhood size (counting the point itself) that makes a core point
    pub fn min_points(&self) -> usize {
        self.min_points
    }
}

/// Clusters incoming points using DBSCAN algorithm
///
/// Points are visited in input order. Clusters come out in the order their
/// seed was first reached, members in the order expansion appended them. A
/// point joins at most one cluster: a border point within reach of two
/// clusters stays with the first one that found it.
///
/// # Returns
///
/// A tuple `(clusters, noise)` where:
/// - `clusters` is a vector of found clusters
/// - `noise` is a vector of point indices that are outliers (not in any cluster), ascending
pub fn db_scan<I: SpatialIndex>(points: &[Point], params: &Params) -> (Vec<Cluster>, Vec<usize>) {
    let min_points = params.min_points();
    let oracle = Neighborhood::<I>::new(points, params.eps());

    let mut visited = bitvec![0; points.len()];
    let mut members = bitvec![0; points.len()];
    // Indices already on the current work list. Re-adding them would only
    // produce no-op iterations.
    let mut queued = bitvec![0; points.len()];
    let mut clusters = Vec::new();

    for i in 0..points.len() {
        if visited[i] {
            continue;
        }
        visited.set(i, true);

        let neighbor_pts = oracle.neighbors(i);
        if neighbor_pts.len() < min_points {
            continue;
        }

        let mut cluster = Cluster {
            c: clusters.len(),
            points: vec![i],
        };
        members.set(i, true);

        for &j in &neighbor_pts {
            queued.set(j, true);
        }

        // The work list grows while it is walked, so index it by position
        let mut neighbor_pts = neighbor_pts;
        let mut j = 0;
        while j < neighbor_pts.len() {
            let k = neighbor_pts[j];
            if !visited[k] {
                visited.set(k, true);
                let more_neighbors = oracle.neighbors(k);
                if more_neighbors.len() >= min_points {
                    for p in more_neighbors {
                        if !queued[p] {
                            queued.set(p, true);
                            neighbor_pts.push(p);
                        }
                    }
                }
            }

            if !members[k] {
                cluster.points.push(k);
                members.set(k, true);
            }
            j += 1;
        }

        for &k in &neighbor_pts {
            queued.set(k, false);
        }

        debug!(
            cluster = cluster.c,
            seed = cluster.seed(),
            size = cluster.points.len(),
            "cluster discovered"
        );
        clusters.push(cluster);
    }

    let noise = members.iter_zeros().collect();
    (clusters, noise)
}
