//! Package cluster implements DBScan clustering on (lat, lon) using an R-tree
pub mod assemble;
pub mod dbscan;
pub mod distance;
pub mod index;
pub mod neighborhood;
pub mod point;


pub use assemble::assemble;
pub use dbscan::{Params, db_scan};
pub use index::{RTreeIndex, ScanIndex, SpatialIndex};
pub use point::{ClusterOutput, Point, PointList};
