use crate::constants::EARTH_RADIUS_KM;
use crate::model::GeoPoint;

/// Great-circle distance in km (haversine).
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Smallest distance from `origin` to any of `points`, or `None` if empty.
pub fn min_distance_km(origin: &GeoPoint, points: &[GeoPoint]) -> Option<f64> {
    points
        .iter()
        .map(|p| distance_km(origin, p))
        .min_by(|a, b| a.total_cmp(b))
}
