//! Reference test vectors for 64-bit integer emulation layers.
//!
//! An [`OperandGenerator`] feeds two builders: [`arith`] produces one row of
//! reference results per operand pair and [`shift`] enumerates every shift
//! distance against a few structured base values. The [`render`] module turns
//! both tables into C source or a raw binary blob.

pub mod arith;
pub mod operand;
pub mod render;
pub mod shift;

pub use arith::{ArithmeticRecord, RECORD_COUNT, SHIFT_BITS};
pub use operand::{LibcRand, OperandGenerator, RandSource};
pub use shift::{ShiftRecord, ShiftTestGroup, GROUP_COUNT};

/// Reinterprets the bits of `value` as a two's-complement signed integer.
pub fn as_signed(value: u64) -> i64 {
    value as i64
}

/// Reinterprets the bits of `value` as an unsigned integer.
pub fn as_unsigned(value: i64) -> u64 {
    value as u64
}

/// Both tables from one generation pass.
pub struct Vectors {
    pub records: Vec<ArithmeticRecord>,
    pub shift_groups: Vec<ShiftTestGroup>,
}

impl Vectors {
    /// Builds the arithmetic records, then the shift groups, from one source.
    pub fn generate<R: RandSource>(gen: &mut OperandGenerator<R>) -> Self {
        let records = arith::build_all(gen);
        let shift_groups = shift::build_all(gen);

        Self {
            records,
            shift_groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinterpretation_keeps_bits() {
        assert_eq!(as_signed(0xffff_ffff_ffff_ffff), -1);
        assert_eq!(as_signed(0x8000_0000_0000_0000), i64::MIN);
        assert_eq!(as_unsigned(i64::MIN), 0x8000_0000_0000_0000);
        assert_eq!(as_unsigned(as_signed(0x0123_4567_89ab_cdef)), 0x0123_4567_89ab_cdef);
    }

    #[test]
    fn generate_produces_full_tables() {
        let mut gen = OperandGenerator::new(LibcRand::default());
        let vectors = Vectors::generate(&mut gen);

        assert_eq!(vectors.records.len(), RECORD_COUNT);
        assert_eq!(vectors.shift_groups.len(), GROUP_COUNT);
    }
}
