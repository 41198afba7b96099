//! Serializers for the generated tables.
//!
//! The C rendering is the format the 64-bit emulation test harness includes
//! directly; every 64-bit value goes through its `JSLL_INIT(hi, lo)` macro.

use crate::{ArithmeticRecord, ShiftTestGroup, Vectors, SHIFT_BITS};
use bytemuck::{bytes_of, cast_slice};
use itertools::Itertools;
use std::fmt;
use std::io::{Result, Write};

/// Displays a 64-bit value as `JSLL_INIT( 0xHI, 0xLO )`.
struct JsllInit(u64);

impl fmt::Display for JsllInit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "JSLL_INIT( 0x{:08x}, 0x{:08x} )",
            (self.0 >> 32) as u32,
            self.0 as u32
        )
    }
}

fn truth(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

const TESTREC_HEADER: &str = "\
typedef struct testrec_t {
   JSInt64 a, b, add, sub, mul, and, or, xor, not, neg;
   JSInt64 shl, shr, ushr;
   int32_t l2i;
   uint32_t l2ui;
   JSInt64 i2l;
   JSUint64 ui2l;
   const char *hexstr, *decstr, *udecstr;
   bool_t gtu, ltu, gt, lt;
} testrec_t;

const testrec_t tests[] = {
";

const SHIFTREC_HEADER: &str = "\
typedef struct shiftrec_t {
   JSUint64 shl, ushr;
   JSInt64 shr;
} shiftrec_t;
typedef struct shifttest_t {
   JSUint64 base;
   shiftrec_t shift[63];
} shifttest_t;
const shifttest_t shift_tests[] = {
";

/// Writes both tables as C source.
pub fn write_c_source<W: Write>(out: &mut W, vectors: &Vectors) -> Result<()> {
    write_arithmetic_table(out, &vectors.records)?;
    write_shift_table(out, &vectors.shift_groups)
}

pub fn write_arithmetic_table<W: Write>(out: &mut W, records: &[ArithmeticRecord]) -> Result<()> {
    writeln!(out, "// file generated by gen-vectors on a system with 64-bit integers")?;
    writeln!(out)?;
    writeln!(out, "#define SHIFT_BITS {}", SHIFT_BITS)?;
    write!(out, "{}", TESTREC_HEADER)?;

    for (index, record) in records.iter().enumerate() {
        write_arithmetic_record(out, index, record)?;
    }

    writeln!(out, "}};")
}

fn write_arithmetic_record<W: Write>(
    out: &mut W,
    index: usize,
    record: &ArithmeticRecord,
) -> Result<()> {
    let n = SHIFT_BITS;

    write!(out, "{{ // record {}\n\t", index)?;

    let values = [
        (record.a, "a".to_string()),
        (record.b, "b".to_string()),
        (record.add, "a + b".to_string()),
        (record.sub, "a - b".to_string()),
        (record.mul, "a * b".to_string()),
        (record.and, "a & b".to_string()),
        (record.or, "a | b".to_string()),
        (record.xor, "a ^ b".to_string()),
        (record.not, "~a".to_string()),
        (record.neg, "-a".to_string()),
        (record.shl, format!("a << {}", n)),
        (record.shr_signed as u64, format!("a >> {} (signed)", n)),
        (record.shr_unsigned, format!("a >> {} (unsigned)", n)),
    ];

    for (value, comment) in &values {
        write!(out, "{},\t// {}\n\t", JsllInit(*value), comment)?;
    }

    write!(
        out,
        "{}, UINT32_C({}),\t// (int32_t) a, (uint32_t) a\n\t",
        record.l2i, record.l2ui
    )?;

    write!(out, "{},\t// (int64_t)(int32_t)a\n\t", JsllInit(record.i2l as u64))?;
    write!(out, "{},\t// (uint64_t)(uint32_t)a\n\t", JsllInit(record.ui2l))?;

    write!(out, "\"{}\",\t// a (hexadecimal)\n\t", record.hex)?;
    write!(out, "\"{}\",\t// a (signed decimal)\n\t", record.dec)?;
    write!(out, "\"{}\",\t// a (unsigned decimal)\n\t", record.udec)?;

    let unsigned = [record.gt_unsigned, record.lt_unsigned];
    let signed = [record.gt_signed, record.lt_signed];

    writeln!(
        out,
        "{},\t// a > b, a < b (unsigned)",
        unsigned.iter().map(|&held| truth(held)).join(", ")
    )?;
    writeln!(
        out,
        "\t{},\t// a > b, a < b (signed)",
        signed.iter().map(|&held| truth(held)).join(", ")
    )?;

    writeln!(out, "}},")
}

pub fn write_shift_table<W: Write>(out: &mut W, groups: &[ShiftTestGroup]) -> Result<()> {
    write!(out, "{}", SHIFTREC_HEADER)?;

    for (index, group) in groups.iter().enumerate() {
        writeln!(out, "\t{{ {},\t// record {}", JsllInit(group.base), index)?;
        writeln!(out, "\t {{")?;

        for (distance, record) in (1..).zip(&group.shifts) {
            write!(out, "\t\t{{ {},\t// shift left {}\n\t\t  ", JsllInit(record.shl), distance)?;
            write!(out, "{},\t// shift right (logical/unsigned)\n\t\t  ", JsllInit(record.ushr))?;
            write!(out, "{}\t// shift right (arithmetic/signed)\n\t\t}},\n", JsllInit(record.shr as u64))?;
        }

        writeln!(out, "\t }},\n\t}},")?;
    }

    writeln!(out, "}};")
}

/// Flag bits packed into the last word of a binary arithmetic record.
pub const FLAG_GT_UNSIGNED: u64 = 1 << 0;
pub const FLAG_LT_UNSIGNED: u64 = 1 << 1;
pub const FLAG_GT_SIGNED: u64 = 1 << 2;
pub const FLAG_LT_SIGNED: u64 = 1 << 3;

/// Words per arithmetic record in the binary table.
pub const RECORD_WORDS: usize = 18;

fn record_words(record: &ArithmeticRecord) -> [u64; RECORD_WORDS] {
    let mut flags = 0;

    for &(held, bit) in &[
        (record.gt_unsigned, FLAG_GT_UNSIGNED),
        (record.lt_unsigned, FLAG_LT_UNSIGNED),
        (record.gt_signed, FLAG_GT_SIGNED),
        (record.lt_signed, FLAG_LT_SIGNED),
    ] {
        if held {
            flags |= bit;
        }
    }

    [
        record.a,
        record.b,
        record.add,
        record.sub,
        record.mul,
        record.and,
        record.or,
        record.xor,
        record.not,
        record.neg,
        record.shl,
        record.shr_signed as u64,
        record.shr_unsigned,
        record.l2i as i64 as u64,
        record.l2ui as u64,
        record.i2l as u64,
        record.ui2l,
        flags,
    ]
}

/// Writes both tables as native-endian 64-bit words.
///
/// Each arithmetic record is [`RECORD_WORDS`] words; each shift group is its
/// base followed by 63 `(shl, ushr, shr)` triples.
pub fn write_binary<W: Write>(out: &mut W, vectors: &Vectors) -> Result<()> {
    let words: Vec<u64> = vectors.records.iter().flat_map(record_words).collect();
    out.write_all(cast_slice(&words))?;

    for group in &vectors.shift_groups {
        out.write_all(bytes_of(&group.base))?;
        out.write_all(cast_slice(&group.shifts))?;
    }

    Ok(())
}
