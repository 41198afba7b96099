use crate::{as_signed, OperandGenerator, RandSource};
use bytemuck::{Pod, Zeroable};
use std::ops::RangeInclusive;

/// Number of shift groups in a table.
pub const GROUP_COUNT: usize = 4;

/// Every shift distance exercised; 0 and 64 are left out.
pub const DISTANCES: RangeInclusive<u32> = 1..=63;

const SIGN_BIT: u64 = 1 << 63;

/// The three shifts of one base value by one distance.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct ShiftRecord {
    pub shl: u64,
    pub ushr: u64,
    pub shr: i64,
}

impl ShiftRecord {
    pub fn new(base: u64, distance: u32) -> Self {
        Self {
            shl: base << distance,
            ushr: base >> distance,
            shr: as_signed(base) >> distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTestGroup {
    pub base: u64,
    /// Entry `i` holds the shifts by distance `i + 1`.
    pub shifts: Vec<ShiftRecord>,
}

impl ShiftTestGroup {
    pub fn from_base(base: u64) -> Self {
        let shifts = DISTANCES
            .map(|distance| ShiftRecord::new(base, distance))
            .collect();

        Self { base, shifts }
    }

    /// Returns the record for `distance`, if it lies in `1..=63`.
    pub fn record(&self, distance: u32) -> Option<&ShiftRecord> {
        if !DISTANCES.contains(&distance) {
            return None;
        }

        self.shifts.get(distance as usize - 1)
    }

    pub fn sign_bit_set(&self) -> bool {
        self.base & SIGN_BIT != 0
    }
}

/// Draws a base and forces its sign bit set for odd `index`, clear for even.
pub fn build_group<R: RandSource>(index: usize, gen: &mut OperandGenerator<R>) -> ShiftTestGroup {
    let mut base = gen.next();

    if index & 1 == 1 {
        base |= SIGN_BIT;
    } else {
        base &= !SIGN_BIT;
    }

    ShiftTestGroup::from_base(base)
}

pub fn build_all<R: RandSource>(gen: &mut OperandGenerator<R>) -> Vec<ShiftTestGroup> {
    (0..GROUP_COUNT).map(|index| build_group(index, gen)).collect()
}
