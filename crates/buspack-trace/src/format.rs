// crates/buspack-trace/src/format.rs

//! Line-level encoding of the `.mem` cycle-record format.
//!
//! A record line decodes positionally after separator stripping: bit 0 is
//! the start marker, bit 1 the end marker, bit 2 the valid strobe, and
//! bits 3..35 the payload word, MSB first. `'_'` and `' '` are cosmetic
//! separators. Lines that do not begin with `'0'` or `'1'` are comments;
//! a 0/1-leading line with a non-bit character or fewer than three bits is
//! malformed and also skipped.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

use buspack_core::{CycleRecord, PAYLOAD_WIDTH};

/// Decode one trace line. `None` means the line carries no record
/// (comment, blank, or malformed) and is skipped without error.
///
/// A record shorter than the nominal 35 bits yields a correspondingly
/// short payload; extra bits past the payload field are ignored.
#[must_use]
pub fn parse_record_line(line: &str) -> Option<CycleRecord> {
    if !line.starts_with(['0', '1']) {
        return None;
    }

    let mut bits = Vec::with_capacity(3 + PAYLOAD_WIDTH);
    for ch in line.trim_end().chars() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            '_' | ' ' => {}
            _ => return None,
        }
    }
    if bits.len() < 3 {
        return None;
    }

    let data = bits[3..].iter().copied().take(PAYLOAD_WIDTH).collect();
    Some(CycleRecord::new(bits[0], bits[1], bits[2], data))
}

/// Encode one record as a trace line: the three marker bits `_`-separated,
/// then the payload in `_`-separated clusters of eight bits.
#[must_use]
pub fn render_record_line(rec: &CycleRecord) -> String {
    let mut line = String::with_capacity(6 + rec.data.len() + rec.data.len() / 8);
    line.push(bit_char(rec.sop));
    line.push('_');
    line.push(bit_char(rec.eop));
    line.push('_');
    line.push(bit_char(rec.valid));
    for (i, bit) in rec.data.iter().enumerate() {
        if i % 8 == 0 {
            line.push('_');
        }
        line.push(bit_char(*bit));
    }
    line
}

#[inline]
const fn bit_char(bit: bool) -> char {
    if bit {
        '1'
    } else {
        '0'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_separated_record() {
        let rec = parse_record_line("1_0_1_10000000 00000000_00000000_00000001")
            .expect("record");
        assert!(rec.sop && !rec.eop && rec.valid);
        assert_eq!(rec.data.len(), 32);
        assert!(rec.data[0]);
        assert!(rec.data[31]);
        assert!(!rec.data[1]);
    }

    #[test]
    fn skips_comments_and_blanks() {
        assert!(parse_record_line("//sop | eop | valid | data").is_none());
        assert!(parse_record_line("").is_none());
        assert!(parse_record_line("   1_0_1_0000").is_none()); // leading spaces
    }

    #[test]
    fn skips_malformed_records() {
        assert!(parse_record_line("1_0_x_00000000").is_none()); // stray character
        assert!(parse_record_line("10").is_none()); // fewer than three bits
    }

    #[test]
    fn tolerates_short_and_long_payloads() {
        let short = parse_record_line("1_1_1_0110").expect("record");
        assert_eq!(short.data, vec![false, true, true, false]);

        let long = parse_record_line(&format!("0_0_1_{}", "1".repeat(40))).expect("record");
        assert_eq!(long.data.len(), 32);
    }

    #[test]
    fn encode_decode_round_trip() {
        let rec = CycleRecord::new(true, false, true, (0..32).map(|i| i % 3 == 0).collect());
        let line = render_record_line(&rec);
        assert_eq!(parse_record_line(&line), Some(rec));
    }
}
