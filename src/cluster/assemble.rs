use super::point::{Cluster, ClusterOutput, Point};

/// Turns clusters of point indices into output records, keeping discovery order
pub fn assemble(points: &[Point], clusters: &[Cluster]) -> Vec<ClusterOutput> {
    clusters
        .iter()
        .map(|cluster| {
            let (centroid_lat, centroid_lon) = cluster.centroid(points);
            ClusterOutput {
                centroid_lat,
                centroid_lon,
                ids: cluster.points.iter().map(|&i| points[i].id.clone()).collect(),
            }
        })
        .collect()
}
