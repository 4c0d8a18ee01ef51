//! Shape builders: disks, buffered segments, and forward wedges.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::polygon::ConvexPolygon;

/// Regular polygon approximating a disk, `4 * quarter_segments` vertices.
pub fn disk(center: DVec2, radius: f64, quarter_segments: usize) -> Option<ConvexPolygon> {
    if radius <= 0.0 || !radius.is_finite() {
        return None;
    }
    let n = 4 * quarter_segments.max(1);
    let step = FRAC_PI_2 / quarter_segments.max(1) as f64;
    ConvexPolygon::from_points((0..n).map(|i| center + DVec2::from_angle(i as f64 * step) * radius))
}

/// The segment `start`–`end` buffered by `radius` (a capsule).
///
/// Built as the hull of the two end disks, which is exact for convex caps.
/// Collapses to a disk when the endpoints coincide.
pub fn buffered_segment(
    start: DVec2,
    end: DVec2,
    radius: f64,
    quarter_segments: usize,
) -> Option<ConvexPolygon> {
    let a = disk(start, radius, quarter_segments)?;
    if start == end {
        return Some(a);
    }
    let b = disk(end, radius, quarter_segments)?;
    ConvexPolygon::from_points(a.vertices().iter().chain(b.vertices()).copied())
}

/// Isosceles triangle with its apex at `apex`, pointing along `heading_deg`.
///
/// `apex_angle_deg` is the full opening angle; `length` is the distance from
/// the apex to the far edge.
pub fn wedge(apex: DVec2, heading_deg: f64, apex_angle_deg: f64, length: f64) -> Option<ConvexPolygon> {
    let dir = DVec2::from_angle(heading_deg.to_radians());
    let half_width = length * (apex_angle_deg.to_radians() * 0.5).tan();
    let far = apex + dir * length;
    let side = dir.perp() * half_width;
    ConvexPolygon::from_points([apex, far + side, far - side])
}
