// Post-placement validation and minimum-clearance adjustment.

use super::geometry::{LabelRect, Point};
use crate::config::DeclutterConfig;

/// A candidate rectangle is acceptable at the current search radius
/// when even its farthest corner stays inside it. Checked before the
/// clearance push-out, so the push can move a corner past the radius.
pub fn within_range(anchor: Point, rect: &LabelRect, radius: f64) -> bool {
    rect.farthest_corner_distance(anchor) <= radius
}

/// Push the box radially outward when its center sits implausibly close
/// to the anchor, so the label clears the anchor symbol.
///
/// The push length is `min_clearance - distance`, scaled down by
/// `scale_threshold / map_scale` once the map scale factor exceeds the
/// threshold. Both constants are empirical tuning values carried over
/// unchanged; see `DeclutterConfig`.
pub fn push_out(
    anchor: Point,
    rect: LabelRect,
    map_scale: f64,
    config: &DeclutterConfig,
) -> LabelRect {
    let center = rect.center();
    let distance = anchor.distance(center);
    if distance >= config.min_clearance {
        return rect;
    }

    let mut length = config.min_clearance - distance;
    if map_scale > config.scale_threshold {
        length = length * config.scale_threshold / map_scale;
    }
    let angle = (center.y - anchor.y).atan2(center.x - anchor.x);
    rect.translate(length * angle.cos(), length * angle.sin())
}
