use super::point::Point;

/// Calculates planar Euclidean distance between two points
///
/// Coordinates are taken as plain real numbers: no geodesic correction is
/// applied, so the result is in the same units as the input (usually degrees).
/// Callers who need metric distances must project their points first.
pub fn planar_distance(p1: &Point, p2: &Point) -> f64 {
    (p1.lat - p2.lat).hypot(p1.lon - p2.lon)
}
