// 360-slot occupancy bookkeeping around one anchor. A slot is a whole
// degree in the screen-coordinate bearing convention of `bearing.rs`.

use super::bearing::bearing;
use super::geometry::{LabelRect, Point};

pub const SLOTS: usize = 360;

/// Blocked bearing slots around an anchor at the current search
/// radius. Freshly built for every anchor/radius attempt.
#[derive(Debug, Clone)]
pub struct OccupancyMask {
    slots: [bool; SLOTS],
}

impl Default for OccupancyMask {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyMask {
    pub fn new() -> Self {
        Self {
            slots: [false; SLOTS],
        }
    }

    pub fn is_occupied(&self, bearing: usize) -> bool {
        self.slots[bearing]
    }

    pub fn mark(&mut self, bearing: i32) {
        self.slots[bearing.rem_euclid(360) as usize] = true;
    }

    /// Mark `center` plus `pad` degrees to each side, every padded
    /// bearing wrapped into `[0, 360)` independently. The pad keeps
    /// labels clear of the obstacle symbol itself.
    pub fn mark_padded(&mut self, center: i32, pad: i32) {
        self.mark(center);
        for i in 1..=pad {
            self.mark(center + i);
            self.mark(center - i);
        }
    }

    /// Logical OR of `other` into `self`.
    pub fn merge(&mut self, other: &OccupancyMask) {
        for i in 0..SLOTS {
            if other.slots[i] {
                self.slots[i] = true;
            }
        }
    }

    /// Close the arcs between the first occupied bearings so that a
    /// mask holding the four corner bearings of an obstacle rectangle
    /// becomes the contiguous shadow the whole box subtends.
    ///
    /// `one..three` are the first three occupied slots in ascending
    /// order, `four` the last. A span over 180° means the shadow wraps
    /// through 0°, so the complement arcs get filled instead; the inner
    /// pairs are resolved the same way.
    pub fn fill_gaps(&mut self) {
        let mut one: i32 = -1;
        let mut two: i32 = -1;
        let mut three: i32 = -1;
        let mut four: i32 = -1;
        for i in 0..SLOTS as i32 {
            if self.slots[i as usize] {
                if one == -1 {
                    one = i;
                } else if two == -1 {
                    two = i;
                } else if three == -1 {
                    three = i;
                }
                four = i;
            }
        }
        if one == -1 {
            return;
        }

        if four - one > 180 {
            self.fill(four + 1, 359);
            self.fill(0, one - 1);
            if two - one > 180 {
                self.fill(two + 1, four - 1);
            } else {
                self.fill(one + 1, two - 1);
                if three - two > 180 {
                    self.fill(three + 1, four - 1);
                } else {
                    self.fill(two + 1, three - 1);
                }
            }
        } else {
            self.fill(one + 1, four - 1);
        }
    }

    fn fill(&mut self, from: i32, to: i32) {
        let mut i = from;
        while i <= to {
            self.slots[i as usize] = true;
            i += 1;
        }
    }
}

/// Contiguous shadow an obstacle rectangle casts over `anchor`: the
/// bearings to the four corners, gap-filled into one arc.
pub fn rect_shadow(anchor: Point, rect: &LabelRect) -> OccupancyMask {
    let mut mask = OccupancyMask::new();
    for corner in rect.corners() {
        mask.mark(bearing(anchor, corner));
    }
    mask.fill_gaps();
    mask
}
