//! Rendering of framed packets into the output trace text.
//!
//! The output begins with a header comment naming the three fields, then
//! carries one group per transaction: a blank separator line, a
//! `//Packet #<label>` line, and one `<sop>_<eop>_<data bits>` line per
//! chunk in transport order.

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

use buspack_core::{Chunk, Packet};

/// Header comment naming the three output fields.
pub const OUTPUT_HEADER: &str = "//sop_out | eop_out | data_out";

/// Render one chunk line: framing-bit pair plus the padded data bits.
#[must_use]
pub fn render_chunk_line(chunk: &Chunk) -> String {
    let mut line = String::with_capacity(4 + chunk.data.len());
    line.push(bit_char(chunk.sop));
    line.push('_');
    line.push(bit_char(chunk.eop));
    line.push('_');
    for bit in &chunk.data {
        line.push(bit_char(*bit));
    }
    line
}

/// Render the full output text for a packet list.
#[must_use]
pub fn render_packets(packets: &[Packet]) -> String {
    let mut out = String::new();
    out.push_str(OUTPUT_HEADER);
    out.push('\n');
    for packet in packets {
        out.push('\n');
        out.push_str(&format!("//Packet #{}\n", packet.label));
        for chunk in &packet.chunks {
            out.push_str(&render_chunk_line(chunk));
            out.push('\n');
        }
    }
    out
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
    use buspack_core::{transcode, CycleRecord};

    #[test]
    fn renders_the_32bit_single_cycle_scenario() {
        // One transaction, 32-bit payload 0x00000001, start+end on one cycle.
        let data: Vec<bool> = (0..32).map(|i| i == 31).collect();
        let records = vec![CycleRecord::new(true, true, true, data)];
        let packets = transcode(&records, 7).expect("transcode");

        let expect = "\
//sop_out | eop_out | data_out

//Packet #0
1_0_0000001
0_0_0000000
0_0_0000000
0_0_0000000
0_1_0000000
";
        assert_eq!(render_packets(&packets), expect);
    }

    #[test]
    fn single_chunk_packet_carries_both_flags_on_one_line() {
        let data: Vec<bool> = vec![true; 7];
        let records = vec![CycleRecord::new(true, true, true, data)];
        let packets = transcode(&records, 7).expect("transcode");
        assert_eq!(render_chunk_line(&packets[0].chunks[0]), "1_1_1111111");
    }

    #[test]
    fn labels_accumulate_across_packets() {
        let word: Vec<bool> = vec![false; 8]; // two chunks per transaction
        let records = vec![
            CycleRecord::new(true, true, true, word.clone()),
            CycleRecord::new(true, true, true, word),
        ];
        let packets = transcode(&records, 7).expect("transcode");
        let text = render_packets(&packets);
        assert!(text.contains("//Packet #0\n"));
        assert!(text.contains("//Packet #2\n"));
    }
}
