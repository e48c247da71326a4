// Closed-form rectangle placement between two bounding bearing rays.
//
// Every ordered quadrant pair rotates its bearings into a first-quadrant
// frame, solves one of two two-line intersection forms there, and maps
// the resulting corner offset back out. The twelve pairs cover every
// sector the selector can hand over; anything else yields no placement.

use super::geometry::{Corner, LabelRect, Point};

fn slope(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Corner offset when both rays sit inside one 90° frame: the box is
/// wedged between them, far corners tangent to each ray.
///
/// `x = (h + s1·w) / (s2 - s1)`, `y = s2·x` in frame coordinates.
fn solve_wedge(s1: f64, s2: f64, width: f64, height: f64) -> Option<(f64, f64)> {
    let denom = s2 - s1;
    if denom == 0.0 {
        return None;
    }
    let x = (height + s1 * width) / denom;
    let y = s2 * x;
    (x.is_finite() && y.is_finite()).then_some((x, y))
}

/// Corner offset when the rays straddle the frame axis; `extent` is the
/// box dimension lying along that axis.
///
/// `u = s1·extent / (s2 - s1)`, `v = s2·u` in frame coordinates.
fn solve_straddle(s1: f64, s2: f64, extent: f64) -> Option<(f64, f64)> {
    let denom = s2 - s1;
    if denom == 0.0 {
        return None;
    }
    let u = s1 * extent / denom;
    let v = s2 * u;
    (u.is_finite() && v.is_finite()).then_some((u, v))
}

/// Place a `width`×`height` box tangent to the rays at `b1` and `b2`
/// from `anchor`. `b1`/`b2` are the sector's bounding bearings in
/// ascending order; `None` when the pair has no closed form or the
/// algebra degenerates.
pub fn place(anchor: Point, b1: i32, b2: i32, width: f64, height: f64) -> Option<LabelRect> {
    let (f1, f2) = (f64::from(b1), f64::from(b2));
    let at = |corner: Corner, dx: f64, dy: f64| {
        Some(LabelRect::from_corner(
            corner,
            Point::new(anchor.x + dx, anchor.y + dy),
            width,
            height,
        ))
    };

    match (b1, b2) {
        // Both rays in one quadrant: wedge the box between them.
        (0..=90, 0..=90) => {
            let (x, y) = solve_wedge(slope(f1), slope(f2), width, height)?;
            at(Corner::A, x, -y)
        }
        (91..=180, 91..=180) => {
            let (x, y) = solve_wedge(slope(180.0 - f2), slope(180.0 - f1), width, height)?;
            at(Corner::B, -x, -y)
        }
        (181..=270, 181..=270) => {
            let (x, y) = solve_wedge(slope(f1 - 180.0), slope(f2 - 180.0), width, height)?;
            at(Corner::C, -x, y)
        }
        (271..=359, 271..=359) => {
            let (x, y) = solve_wedge(slope(360.0 - f2), slope(360.0 - f1), width, height)?;
            at(Corner::D, x, y)
        }
        // Rays in adjacent quadrants: the box straddles the shared axis.
        (0..=90, 91..=179) => {
            let (x, y) = solve_straddle(slope(f1), slope(f2), width)?;
            at(Corner::D, x, -y)
        }
        (91..=180, 181..=269) => {
            let (y, x) = solve_straddle(slope(f1 - 90.0), slope(f2 - 90.0), height)?;
            at(Corner::C, -x, -y)
        }
        (181..=270, 271..=359) => {
            let (x, y) = solve_straddle(slope(360.0 - f2), slope(360.0 - f1), width)?;
            at(Corner::A, x, y)
        }
        (271..=359, 1..=89) => {
            let (y, x) = solve_straddle(slope(f1 - 270.0), slope(f2 + 90.0), height)?;
            at(Corner::A, x, y)
        }
        // Rays more than a quadrant apart: one corner lands on the anchor.
        (0..=90, 181..=269) => at(Corner::C, 0.0, 0.0),
        (91..=180, 271..=359) => at(Corner::B, 0.0, 0.0),
        (181..=270, 1..=89) => at(Corner::A, 0.0, 0.0),
        (271..=359, 91..=179) => at(Corner::D, 0.0, 0.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::bearing::bearing;
    use super::*;

    const W: f64 = 4.0;
    const H: f64 = 2.0;

    fn origin() -> Point {
        Point::new(0.0, 0.0)
    }

    /// The returned box must have two corners whose bearings from the
    /// anchor reproduce the bounding bearings (±1° for rounding).
    fn assert_tangent(b1: i32, b2: i32) {
        let rect = place(origin(), b1, b2, W, H).unwrap_or_else(|| panic!("({b1},{b2}) placed"));
        let corner_bearings: Vec<i32> =
            rect.corners().iter().map(|c| bearing(origin(), *c)).collect();
        for want in [b1, b2] {
            assert!(
                corner_bearings
                    .iter()
                    .any(|&got| (got - want).abs() <= 1 || (got - want).abs() >= 359),
                "({b1},{b2}): no corner on bearing {want}, corners at {corner_bearings:?}"
            );
        }
    }

    #[test]
    fn wedge_cases_are_tangent() {
        assert_tangent(10, 60); // 1,1
        assert_tangent(100, 170); // 2,2
        assert_tangent(190, 260); // 3,3
        assert_tangent(280, 350); // 4,4
    }

    #[test]
    fn straddle_cases_are_tangent() {
        assert_tangent(45, 135); // 1,2
        assert_tangent(135, 225); // 2,3
        assert_tangent(225, 315); // 3,4
        assert_tangent(315, 45); // 4,1
        assert_tangent(20, 160); // asymmetric 1,2
        assert_tangent(200, 340); // asymmetric 3,4
    }

    #[test]
    fn corner_cases_pin_a_corner_on_the_anchor() {
        for (b1, b2, corner) in [
            (45, 225, Corner::C),
            (135, 315, Corner::B),
            (225, 45, Corner::A),
            (315, 135, Corner::D),
        ] {
            let rect = place(origin(), b1, b2, W, H).expect("placed");
            let pinned = match corner {
                Corner::A => rect.a,
                Corner::B => rect.b,
                Corner::C => rect.c,
                Corner::D => rect.d,
            };
            assert_eq!(pinned, origin(), "({b1},{b2})");
            assert_eq!(rect.width(), W);
            assert_eq!(rect.height(), H);
        }
    }

    #[test]
    fn wedge_1_1_exact_offsets() {
        // Closed-form check against the two-line intersection solution.
        let rect = place(origin(), 10, 60, W, H).expect("placed");
        let s1 = 10f64.to_radians().tan();
        let s2 = 60f64.to_radians().tan();
        let x = (H + s1 * W) / (s2 - s1);
        let y = s2 * x;
        assert!((rect.a.x - x).abs() < 1e-12);
        assert!((rect.a.y + y).abs() < 1e-12);
    }

    #[test]
    fn identical_bearings_degenerate_to_none() {
        assert!(place(origin(), 45, 45, W, H).is_none());
    }

    #[test]
    fn unhandled_pair_yields_none() {
        // Bearings in reverse-adjacent quadrants have no closed form.
        assert!(place(origin(), 100, 50, W, H).is_none());
    }

    #[test]
    fn boundary_bearing_90_uses_the_wedge_form() {
        // tan(90°) is a huge finite number in f64; the wedge solve must
        // stay finite and keep the box in the first quadrant.
        let rect = place(origin(), 0, 90, W, H).expect("placed");
        assert!(rect.c.y <= 1e-9, "box above the anchor, got {:?}", rect.c);
    }
}
