//! Projection of galactic coordinates onto the GC-Sol-GAC line.
//!
//! Longitude 0° points from Sol toward the galactic center, so the line
//! through both anchors is the x axis of a Sol-centered frame. A star's
//! position is split into the component along that line and the signed
//! component perpendicular to it (positive = ahead of clockwise rotation).
//!
//! Angles are not range-checked: 370° behaves like 10° and any finite
//! latitude is accepted, through ordinary trigonometric periodicity.

/// A star's position relative to the GC-Sol-GAC line, in light-years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOffset {
    /// Signed distance from the line.
    pub perpendicular: f64,
    /// Signed distance along the line; positive is toward the center.
    pub along: f64,
}

/// Projects `(distance, longitude[, latitude])` onto the galactic plane.
///
/// A missing latitude is treated as `cos(b) = 1`.
pub fn project(distance_ly: f64, longitude_deg: f64, latitude_deg: Option<f64>) -> LineOffset {
    let lon = longitude_deg.to_radians();
    let cos_lat = latitude_deg.map_or(1.0, |b| libm::cos(b.to_radians()));
    let in_plane = distance_ly * cos_lat;
    LineOffset {
        perpendicular: in_plane * libm::sin(lon),
        along: in_plane * libm::cos(lon),
    }
}

/// Perpendicular offset only, for stars given in plane polar form.
pub fn galactic_to_cartesian_x(distance_ly: f64, longitude_deg: f64) -> f64 {
    project(distance_ly, longitude_deg, None).perpendicular
}
