//! Convex polygons with counter-clockwise winding.
//!
//! Every polygon is normalised through a convex hull on construction, so
//! clipping and containment can assume a strictly convex CCW ring.

use glam::DVec2;

/// Areas below this are treated as empty.
const AREA_EPSILON: f64 = 1e-9;

/// A convex polygon stored as a CCW vertex ring (no repeated closing vertex).
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<DVec2>,
}

/// Twice the signed area of triangle (o, a, b). Positive when counter-clockwise.
fn cross(o: DVec2, a: DVec2, b: DVec2) -> f64 {
    (a - o).perp_dot(b - o)
}

/// Distance from `p` to the segment `a`–`b`.
fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

impl ConvexPolygon {
    /// Convex hull of the given points (Andrew's monotone chain).
    /// Returns None when fewer than three non-collinear points remain.
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut pts: Vec<DVec2> = points.into_iter().filter(|p| p.is_finite()).collect();
        pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        pts.dedup();
        if pts.len() < 3 {
            return None;
        }

        let mut hull: Vec<DVec2> = Vec::with_capacity(pts.len() * 2);
        // Lower hull
        for &p in &pts {
            while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
                hull.pop();
            }
            hull.push(p);
        }
        // Upper hull
        let lower_len = hull.len() + 1;
        for &p in pts.iter().rev().skip(1) {
            while hull.len() >= lower_len
                && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
            {
                hull.pop();
            }
            hull.push(p);
        }
        hull.pop(); // last point repeats the first

        let polygon = Self { vertices: hull };
        if polygon.vertices.len() < 3 || polygon.area() <= AREA_EPSILON {
            return None;
        }
        Some(polygon)
    }

    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Area by the shoelace formula.
    pub fn area(&self) -> f64 {
        let twice: f64 = self.edges().map(|(a, b)| a.perp_dot(b)).sum();
        twice.abs() * 0.5
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains(&self, p: DVec2) -> bool {
        self.edges().all(|(a, b)| cross(a, b, p) >= -AREA_EPSILON)
    }

    /// Distance from `p` to the polygon; 0 when `p` is inside.
    pub fn distance_to(&self, p: DVec2) -> f64 {
        if self.contains(p) {
            return 0.0;
        }
        self.edges()
            .map(|(a, b)| distance_to_segment(p, a, b))
            .fold(f64::INFINITY, f64::min)
    }

    /// Intersection with another convex polygon (Sutherland–Hodgman).
    /// Returns None when the overlap has no area.
    pub fn intersection(&self, clip: &ConvexPolygon) -> Option<ConvexPolygon> {
        let mut output = self.vertices.clone();

        for (a, b) in clip.edges() {
            if output.is_empty() {
                return None;
            }
            let input = std::mem::take(&mut output);
            let len = input.len();
            for j in 0..len {
                let current = input[j];
                let previous = input[(j + len - 1) % len];
                let side_cur = cross(a, b, current);
                let side_prev = cross(a, b, previous);
                let cur_in = side_cur >= 0.0;
                let prev_in = side_prev >= 0.0;

                if cur_in != prev_in {
                    let t = side_prev / (side_prev - side_cur);
                    output.push(previous + (current - previous) * t);
                }
                if cur_in {
                    output.push(current);
                }
            }
        }

        ConvexPolygon::from_points(output)
    }

    pub fn intersects(&self, other: &ConvexPolygon) -> bool {
        self.intersection(other).is_some()
    }
}
