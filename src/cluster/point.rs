//! Package cluster implements DBScan clustering on (lat, lon) using an R-tree

use serde::{Deserialize, Serialize};

/// Point represents an input record: an identifier and a planar (lat, lon) coordinate
///
/// Points are referenced throughout the engine by their position in the input
/// (the point index), never by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Cluster represents a result of DBScan clustering work
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Cluster ID, equal to its position in discovery order
    pub c: usize,
    /// Indices of points belonging to this cluster. The first entry is the seed
    /// core point, the rest follow in the order expansion reached them.
    pub points: Vec<usize>,
}

/// Output record for one cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterOutput {
    pub centroid_lat: f64,
    pub centroid_lon: f64,
    pub ids: Vec<String>,
}

impl Point {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Point {
            id: id.into(),
            lat,
            lon,
        }
    }

    /// Coordinates as `[lat, lon]`, the layout used by the spatial index
    pub fn coords(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl Cluster {
    /// Calculates the centroid of the cluster as `(lat, lon)`
    ///
    /// Plain summation divided by the member count. Clusters always hold at
    /// least one point (the seed), so there is no division by zero.
    pub fn centroid(&self, points: &[Point]) -> (f64, f64) {
        debug_assert!(!self.points.is_empty(), "empty cluster");

        let mut sum_lat = 0.0;
        let mut sum_lon = 0.0;
        for &i in &self.points {
            sum_lat += points[i].lat;
            sum_lon += points[i].lon;
        }

        let n = self.points.len() as f64;
        (sum_lat / n, sum_lon / n)
    }

    /// The seed core point that started this cluster
    pub fn seed(&self) -> usize {
        self.points[0]
    }
}
