use crate::{as_signed, OperandGenerator, RandSource};
use std::num::Wrapping as W;

/// Fixed shift distance used by every arithmetic record.
pub const SHIFT_BITS: u32 = 13;

/// Number of arithmetic records in a table.
pub const RECORD_COUNT: usize = 20;

/// Reference results for one pair of operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticRecord {
    pub a: u64,
    pub b: u64,

    pub add: u64,
    pub sub: u64,
    pub mul: u64,
    pub and: u64,
    pub or: u64,
    pub xor: u64,
    pub not: u64,
    pub neg: u64,

    pub shl: u64,
    pub shr_signed: i64,
    pub shr_unsigned: u64,

    pub l2i: i32,
    pub l2ui: u32,
    pub i2l: i64,
    pub ui2l: u64,

    pub hex: String,
    pub dec: String,
    pub udec: String,

    pub gt_unsigned: bool,
    pub lt_unsigned: bool,
    pub gt_signed: bool,
    pub lt_signed: bool,
}

impl ArithmeticRecord {
    /// Computes every reference result for the operands `a` and `b`.
    pub fn from_operands(a: u64, b: u64) -> Self {
        let (wa, wb) = (W(a), W(b));

        let l2i = a as i32;
        let l2ui = a as u32;

        Self {
            a,
            b,

            add: (wa + wb).0,
            sub: (wa - wb).0,
            mul: (wa * wb).0,
            and: a & b,
            or: a | b,
            xor: a ^ b,
            not: !a,
            neg: (-wa).0,

            shl: a << SHIFT_BITS,
            shr_signed: as_signed(a) >> SHIFT_BITS,
            shr_unsigned: a >> SHIFT_BITS,

            l2i,
            l2ui,
            i2l: l2i as i64,
            ui2l: l2ui as u64,

            hex: format!("{:016x}", a),
            dec: as_signed(a).to_string(),
            udec: a.to_string(),

            gt_unsigned: a > b,
            lt_unsigned: a < b,
            gt_signed: as_signed(a) > as_signed(b),
            lt_signed: as_signed(a) < as_signed(b),
        }
    }
}

/// Builds record `index`; record 0 pins `a` to zero without drawing it.
pub fn build<R: RandSource>(index: usize, gen: &mut OperandGenerator<R>) -> ArithmeticRecord {
    let a = if index == 0 { 0 } else { gen.next() };
    let b = gen.next();

    ArithmeticRecord::from_operands(a, b)
}

pub fn build_all<R: RandSource>(gen: &mut OperandGenerator<R>) -> Vec<ArithmeticRecord> {
    (0..RECORD_COUNT).map(|index| build(index, gen)).collect()
}
