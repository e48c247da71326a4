// Planar bearing math on top-left-origin screen coordinates.

use super::geometry::Point;

// atan results this close to a full turn collapse to zero before the
// quadrant mapping, matching the integer truncation downstream.
const FULL_TURN_CUTOFF: f64 = 359.4999;

/// Integer direction index in `[0, 360)` from `from` to `to`.
///
/// This is *not* a compass bearing: the quadrant mapping assumes an
/// inverted y axis (y grows downward, as in window coordinates), so 0°
/// points along +x, 90° along -y, 180° along -x and 270° along +y.
/// Coincident points return 0.
pub fn bearing(from: Point, to: Point) -> i32 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        return 0;
    }

    // dx == 0 gives an infinite ratio; atan maps it to exactly 90°.
    let mut raw = (dy.abs() / dx.abs()).atan().to_degrees();
    if raw > FULL_TURN_CUTOFF {
        raw = 0.0;
    }
    let base = raw.round() as i32;

    let mapped = if dx >= 0.0 && dy <= 0.0 {
        base
    } else if dx <= 0.0 && dy <= 0.0 {
        180 - base
    } else if dx <= 0.0 && dy > 0.0 {
        180 + base
    } else {
        360 - base
    };
    mapped.rem_euclid(360)
}

/// Endpoint of a ray of length `range` leaving `point` along `bearing`.
///
/// Inverse of [`bearing`] in the same screen-coordinate convention;
/// used by the debug renderer to draw sector rays, not by placement.
pub fn endpoint_from_bearing(point: Point, range: f64, bearing: i32) -> Point {
    let b = f64::from(bearing);
    let (x, y) = match bearing {
        0..=90 => (
            point.x + range * b.to_radians().cos(),
            point.y - range * b.to_radians().sin(),
        ),
        91..=180 => (
            point.x - range * (180.0 - b).to_radians().cos(),
            point.y - range * (180.0 - b).to_radians().sin(),
        ),
        181..=270 => (
            point.x - range * (b - 180.0).to_radians().cos(),
            point.y + range * (b - 180.0).to_radians().sin(),
        ),
        _ => (
            point.x + range * (360.0 - b).to_radians().cos(),
            point.y + range * (360.0 - b).to_radians().sin(),
        ),
    };
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Point {
        Point::new(0.0, 0.0)
    }

    #[test]
    fn cardinal_directions() {
        assert_eq!(bearing(origin(), Point::new(1.0, 0.0)), 0);
        assert_eq!(bearing(origin(), Point::new(0.0, -1.0)), 90);
        assert_eq!(bearing(origin(), Point::new(-1.0, 0.0)), 180);
        assert_eq!(bearing(origin(), Point::new(0.0, 1.0)), 270);
    }

    #[test]
    fn quadrant_mapping_with_inverted_y() {
        // 45° diagonals, one per quadrant.
        assert_eq!(bearing(origin(), Point::new(1.0, -1.0)), 45);
        assert_eq!(bearing(origin(), Point::new(-1.0, -1.0)), 135);
        assert_eq!(bearing(origin(), Point::new(-1.0, 1.0)), 225);
        assert_eq!(bearing(origin(), Point::new(1.0, 1.0)), 315);
    }

    #[test]
    fn coincident_points_are_zero() {
        assert_eq!(bearing(origin(), origin()), 0);
    }

    #[test]
    fn near_full_turn_wraps_to_zero() {
        // A hair below the +x axis would be 360 - 0; it must come back 0.
        assert_eq!(bearing(origin(), Point::new(1.0, 1e-9)), 0);
    }

    #[test]
    fn endpoint_round_trips_through_bearing() {
        for brg in [0, 10, 45, 89, 90, 135, 180, 200, 269, 270, 300, 359] {
            let end = endpoint_from_bearing(origin(), 10.0, brg);
            assert_eq!(bearing(origin(), end), brg, "bearing {brg}");
        }
    }
}
