// The declutter pass: relocate label boxes around their anchors so that
// as many as possible come out non-overlapping.
//
// Anchors are processed nearest-to-map-center first. For each one an
// occupancy mask is built from every other anchor and every box already
// placed in this pass, the widest open sector picks the candidate
// bearing, and a closed-form placement wedges the box between the
// sector's bounding rays. Each anchor gets up to three increasing
// search radii; an anchor with no acceptable sector is dropped outright.

mod adjust;
mod bearing;
mod geometry;
mod mask;
mod placer;
mod sector;

pub use bearing::{bearing, endpoint_from_bearing};
pub use geometry::{Corner, LabelRect, Point, closest_point_on_edge, segments_intersect};
pub use mask::OccupancyMask;
pub use sector::{OpenSector, Selection, find_open_sectors, select_bearing};

use std::cmp::Ordering;
use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::DeclutterConfig;
use crate::scene::LabelCandidate;

/// Why an anchor ended the pass without a placement. Not an error in
/// the operational sense: the caller simply hides that label for the
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unplaceable {
    /// No open sector wider than the minimum swath; retrying at a
    /// larger radius would only see more obstacles, so the anchor is
    /// abandoned at the first occurrence.
    #[error("no open bearing sector wide enough")]
    NoOpenSector,
    /// Every attempted radius produced a box whose farthest corner fell
    /// outside the search range.
    #[error("label box outside the search radius at every attempt")]
    OutOfRange,
}

/// An accepted placement plus how it was found, for diagnostics and the
/// debug renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub rect: LabelRect,
    /// 1-based radius attempt the box was accepted at.
    pub attempt: u32,
    /// Candidate bearing (bisector of the winning sector).
    pub bearing: i32,
    /// Bounding bearings actually handed to the placer.
    pub sector_start: i32,
    pub sector_end: i32,
    /// Search radius of the accepting attempt.
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnchorOutcome {
    pub id: String,
    pub anchor: Point,
    pub result: Result<Placement, Unplaceable>,
}

/// Everything one pass produced: the id → box mapping consumers draw
/// from, plus the per-anchor outcomes in processing order.
#[derive(Debug, Clone, Default)]
pub struct PassReport {
    pub placements: BTreeMap<String, LabelRect>,
    pub outcomes: Vec<AnchorOutcome>,
}

struct Anchor {
    id: String,
    position: Point,
    width: f64,
    height: f64,
    diagonal: f64,
    distance_from_center: f64,
}

/// Run one declutter pass and return the id → relocated-box mapping.
///
/// Ids with no accepted placement are omitted; an empty candidate list
/// yields an empty map. The pass is a pure function of its inputs:
/// identical input order gives identical output.
pub fn declutter(
    candidates: &[LabelCandidate],
    map_center: Point,
    map_scale: f64,
    config: &DeclutterConfig,
) -> BTreeMap<String, LabelRect> {
    run_pass(candidates, map_center, map_scale, config).placements
}

/// Like [`declutter`], but keeps the per-anchor outcomes.
pub fn run_pass(
    candidates: &[LabelCandidate],
    map_center: Point,
    map_scale: f64,
    config: &DeclutterConfig,
) -> PassReport {
    if candidates.is_empty() {
        return PassReport::default();
    }

    let mut anchors: Vec<Anchor> = candidates
        .iter()
        .map(|candidate| {
            let rect = candidate.rect.to_rect();
            Anchor {
                id: candidate.id.clone(),
                position: candidate.anchor,
                width: rect.width(),
                height: rect.height(),
                diagonal: rect.diagonal(),
                distance_from_center: candidate.anchor.distance(map_center),
            }
        })
        .collect();
    // Closest to the map center gets first pick; stable sort keeps
    // input order on ties.
    anchors.sort_by(|a, b| {
        a.distance_from_center
            .partial_cmp(&b.distance_from_center)
            .unwrap_or(Ordering::Equal)
    });

    let mut placed: Vec<LabelRect> = Vec::new();
    let mut report = PassReport::default();
    for anchor in &anchors {
        let result = place_anchor(anchor, &anchors, &placed, map_scale, config);
        if let Ok(placement) = &result {
            placed.push(placement.rect);
            report.placements.insert(anchor.id.clone(), placement.rect);
        }
        report.outcomes.push(AnchorOutcome {
            id: anchor.id.clone(),
            anchor: anchor.position,
            result,
        });
    }
    report
}

fn place_anchor(
    anchor: &Anchor,
    anchors: &[Anchor],
    placed: &[LabelRect],
    map_scale: f64,
    config: &DeclutterConfig,
) -> Result<Placement, Unplaceable> {
    for attempt in 1..=config.max_attempts {
        let radius = anchor.diagonal * config.radius_scale * f64::from(attempt);
        let occupancy = build_mask(anchor.position, anchors, placed, radius, config);
        let Some(selection) = select_bearing(&find_open_sectors(&occupancy), config.min_sector_size)
        else {
            return Err(Unplaceable::NoOpenSector);
        };
        let (start, end) = bounding_bearings(&selection, config.half_width_cap);
        let Some(rect) = placer::place(anchor.position, start, end, anchor.width, anchor.height)
        else {
            // Degenerate algebra or a sector shape with no closed form;
            // a wider radius may pick a different sector.
            continue;
        };
        if adjust::within_range(anchor.position, &rect, radius) {
            let rect = adjust::push_out(anchor.position, rect, map_scale, config);
            return Ok(Placement {
                rect,
                attempt,
                bearing: selection.bearing,
                sector_start: start,
                sector_end: end,
                radius,
            });
        }
    }
    Err(Unplaceable::OutOfRange)
}

/// Bounding bearings handed to the placer: the sector's own ends when
/// it is narrower than 90°, otherwise re-centered around the bisector
/// with the half-width capped so placements stay plausible.
fn bounding_bearings(selection: &Selection, half_width_cap: i32) -> (i32, i32) {
    let sector = selection.sector;
    if sector.size < 90 {
        return (sector.start, sector.end);
    }
    let half = (sector.size / 2).min(half_width_cap);
    let mut start = selection.bearing - half;
    if start < 0 {
        start += 360;
    }
    let mut end = selection.bearing + half;
    if end >= 360 {
        end -= 360;
    }
    (start, end)
}

/// Master occupancy mask for one anchor at one radius: bearings to
/// every other in-range anchor (padded), OR-ed with the shadow of every
/// box already placed in this pass.
fn build_mask(
    anchor: Point,
    anchors: &[Anchor],
    placed: &[LabelRect],
    radius: f64,
    config: &DeclutterConfig,
) -> OccupancyMask {
    let mut occupancy = OccupancyMask::new();
    for other in anchors {
        // Position match, not id match: co-located anchors cast no
        // bearing on each other.
        if other.position == anchor {
            continue;
        }
        if anchor.distance(other.position) < radius {
            occupancy.mark_padded(bearing(anchor, other.position), config.pad_degrees);
        }
    }
    for rect in placed {
        if rect.nearest_corner_distance(anchor) < radius {
            occupancy.merge(&mask::rect_shadow(anchor, rect));
        }
    }
    occupancy
}
