// Planar geometry primitives for the declutter pass. Coordinates are
// whatever planar unit the caller projected into; y grows downward
// (top-left-origin screen convention), which matters for the corner
// naming and the bearing quadrants built on top of these types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Which corner of a [`LabelRect`] a placement routine anchors on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Top-left.
    A,
    /// Top-right.
    B,
    /// Bottom-right.
    C,
    /// Bottom-left.
    D,
}

/// Axis-aligned label box with four named corners: `a` top-left, `b`
/// top-right, `c` bottom-right, `d` bottom-left (y grows downward).
///
/// The corners are kept mutually consistent: every constructor derives
/// three corners from one corner plus width and height, so opposite
/// sides are always equal and parallel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelRect {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl LabelRect {
    /// Build from the top-left origin plus extent.
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corner(Corner::A, Point::new(x, y), width, height)
    }

    /// Build a `width`×`height` box with the given corner pinned at `p`.
    pub fn from_corner(corner: Corner, p: Point, width: f64, height: f64) -> Self {
        let a = match corner {
            Corner::A => p,
            Corner::B => Point::new(p.x - width, p.y),
            Corner::C => Point::new(p.x - width, p.y - height),
            Corner::D => Point::new(p.x, p.y - height),
        };
        Self {
            a,
            b: Point::new(a.x + width, a.y),
            c: Point::new(a.x + width, a.y + height),
            d: Point::new(a.x, a.y + height),
        }
    }

    pub fn width(&self) -> f64 {
        (self.b.x - self.a.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.d.y - self.a.y).abs()
    }

    pub fn diagonal(&self) -> f64 {
        self.a.distance(self.c)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.b.x - self.a.x) / 2.0 + self.a.x,
            (self.d.y - self.a.y) / 2.0 + self.a.y,
        )
    }

    pub fn corners(&self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            a: Point::new(self.a.x + dx, self.a.y + dy),
            b: Point::new(self.b.x + dx, self.b.y + dy),
            c: Point::new(self.c.x + dx, self.c.y + dy),
            d: Point::new(self.d.x + dx, self.d.y + dy),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.a.x && p.x <= self.b.x && p.y >= self.a.y && p.y <= self.d.y
    }

    /// Distance from `p` to the farthest of the four corners.
    pub fn farthest_corner_distance(&self, p: Point) -> f64 {
        self.corners()
            .iter()
            .map(|corner| p.distance(*corner))
            .fold(0.0, f64::max)
    }

    /// Distance from `p` to the nearest of the four corners.
    pub fn nearest_corner_distance(&self, p: Point) -> f64 {
        self.corners()
            .iter()
            .map(|corner| p.distance(*corner))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Intersection of two closed segments `p1..p2` and `p3..p4`, endpoints
/// included. Parallel or degenerate segments yield `None`.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let d1x = p2.x - p1.x;
    let d1y = p2.y - p1.y;
    let d2x = p4.x - p3.x;
    let d2y = p4.y - p3.y;
    let denom = d1x * d2y - d1y * d2x;
    if denom == 0.0 {
        return None;
    }
    let t = ((p3.x - p1.x) * d2y - (p3.y - p1.y) * d2x) / denom;
    let u = ((p3.x - p1.x) * d1y - (p3.y - p1.y) * d1x) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(Point::new(p1.x + t * d1x, p1.y + t * d1y))
}

/// Attachment point for a leader line: cast a segment from `anchor`
/// through the rectangle center and return the nearest edge crossing,
/// falling back to the center when the anchor sits inside the box.
pub fn closest_point_on_edge(anchor: Point, rect: &LabelRect) -> Point {
    let center = rect.center();
    let edges = [
        (rect.a, rect.b),
        (rect.b, rect.c),
        (rect.c, rect.d),
        (rect.d, rect.a),
    ];
    let mut closest = center;
    let mut best = anchor.distance(center);
    for (from, to) in edges {
        if let Some(hit) = segments_intersect(anchor, center, from, to) {
            let dist = anchor.distance(hit);
            if dist <= best {
                best = dist;
                closest = hit;
            }
        }
    }
    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_stay_consistent_from_any_corner() {
        let from_a = LabelRect::from_corner(Corner::A, Point::new(1.0, 2.0), 4.0, 2.0);
        let from_c = LabelRect::from_corner(Corner::C, Point::new(5.0, 4.0), 4.0, 2.0);
        assert_eq!(from_a, from_c);
        assert_eq!(from_a.width(), 4.0);
        assert_eq!(from_a.height(), 2.0);
        assert_eq!(from_a.b, Point::new(5.0, 2.0));
        assert_eq!(from_a.d, Point::new(1.0, 4.0));
    }

    #[test]
    fn center_is_the_midpoint() {
        let rect = LabelRect::from_origin(0.0, 0.0, 4.0, 2.0);
        assert_eq!(rect.center(), Point::new(2.0, 1.0));
    }

    #[test]
    fn corner_distances() {
        let rect = LabelRect::from_origin(3.0, 0.0, 1.0, 1.0);
        let p = Point::new(0.0, 0.0);
        assert_eq!(rect.nearest_corner_distance(p), 3.0);
        let far = (16.0f64 + 1.0).sqrt();
        assert!((rect.farthest_corner_distance(p) - far).abs() < 1e-12);
    }

    #[test]
    fn segments_cross_at_midpoint() {
        let hit = segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
        )
        .expect("segments cross");
        assert!((hit.x - 1.0).abs() < 1e-12 && (hit.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let hit = segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(2.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn leader_attaches_on_the_near_edge() {
        let rect = LabelRect::from_origin(2.0, -1.0, 4.0, 2.0);
        let hit = closest_point_on_edge(Point::new(0.0, 0.0), &rect);
        // Anchor is due left of the box; the cast crosses the left edge.
        assert!((hit.x - 2.0).abs() < 1e-12);
        assert!(hit.y.abs() < 1e-12);
    }

    #[test]
    fn leader_falls_back_to_center_inside() {
        let rect = LabelRect::from_origin(-1.0, -1.0, 2.0, 2.0);
        let hit = closest_point_on_edge(Point::new(0.0, 0.0), &rect);
        assert_eq!(hit, rect.center());
    }
}
