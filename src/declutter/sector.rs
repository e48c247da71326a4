// Free-run scanning over an occupancy mask and selection of the
// placement bearing.

use super::mask::{OccupancyMask, SLOTS};

/// Maximal run of free bearings. `size = (end - start + 360) % 360 + 1`;
/// a sector whose `end` is below its `start` wraps through 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenSector {
    pub start: i32,
    pub end: i32,
    pub size: i32,
}

/// Widest sector together with its bisector bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub bearing: i32,
    pub sector: OpenSector,
}

/// Scan the mask for maximal contiguous free runs.
///
/// A run starting at bearing 0 is held back and merged into a later run
/// ending at 359, so at most one returned sector wraps the 0°/360°
/// boundary.
pub fn find_open_sectors(mask: &OccupancyMask) -> Vec<OpenSector> {
    let mut sectors: Vec<OpenSector> = Vec::new();
    let mut zero_run: Option<usize> = None;
    let mut i = 0usize;

    while i < SLOTS {
        while i < SLOTS && mask.is_occupied(i) {
            i += 1;
        }
        if i >= SLOTS {
            break;
        }
        let start = i as i32;
        while i < SLOTS && !mask.is_occupied(i) {
            i += 1;
        }
        let end = i as i32 - 1;
        let mut run = OpenSector {
            start,
            end,
            size: end - start + 1,
        };

        if run.end == 359 && run.size < SLOTS as i32 {
            if let Some(idx) = zero_run.take() {
                let zero = sectors.remove(idx);
                run.end = zero.end;
                run.size += zero.size;
            }
        }
        if run.start == 0 && run.end != 359 {
            zero_run = Some(sectors.len());
        }
        sectors.push(run);
    }

    sectors
}

/// Pick the widest open sector and derive the candidate bearing (the
/// run's bisector). Fails when no run is wider than `min_size` degrees;
/// the caller treats that anchor as unplaceable outright.
pub fn select_bearing(sectors: &[OpenSector], min_size: i32) -> Option<Selection> {
    let mut best: Option<OpenSector> = None;
    let mut largest = 0;
    for sector in sectors {
        if sector.size > largest {
            largest = sector.size;
            best = Some(*sector);
        }
    }

    let sector = best?;
    if sector.size <= min_size {
        return None;
    }
    let mut bearing = sector.start + sector.size / 2;
    if bearing > 359 {
        bearing -= 360;
    }
    Some(Selection { bearing, sector })
}
