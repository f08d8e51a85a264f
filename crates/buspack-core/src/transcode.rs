//! End-to-end transcode pipeline: cycle records in, framed packets out.
//!
//! Reconstruction runs to completion over the whole trace before any
//! re-chunking starts (the re-chunker needs complete, closed payloads).
//! Chunks leave in transport order — least-significant group first, the
//! reverse of the logical order produced by [`crate::chunk::rechunk`] — and
//! each packet is labeled with the running count of chunks emitted before
//! it. The whole transformation is a pure function of its inputs.

use tracing::warn;

use crate::chunk::rechunk;
use crate::error::TranscodeError;
use crate::reconstruct::Reconstructor;
use crate::types::{CycleRecord, Packet};

/// Transform a full trace into framed packets.
///
/// # Errors
/// [`TranscodeError::EmptyTransaction`] if any transaction closed with zero
/// payload bits.
///
/// # Panics
/// Panics if `width == 0` (invalid chunk width).
pub fn transcode(records: &[CycleRecord], width: usize) -> Result<Vec<Packet>, TranscodeError> {
    let mut machine = Reconstructor::new();
    let mut transactions = Vec::new();

    for rec in records {
        if let Some(tx) = machine.step(rec) {
            transactions.push(tx);
        }
    }
    if machine.is_open() {
        warn!("trace ended inside an open transaction; closing it implicitly");
    }
    if let Some(tx) = machine.finish() {
        transactions.push(tx);
    }
    if machine.restarts() > 0 {
        warn!(
            count = machine.restarts(),
            "start marker arrived while a transaction was open; stale payload discarded"
        );
    }

    let mut packets = Vec::with_capacity(transactions.len());
    let mut emitted = 0usize;
    for (index, tx) in transactions.iter().enumerate() {
        let mut chunks = rechunk(tx, width, index)?;
        chunks.reverse(); // transport order: least-significant group first
        let label = emitted;
        emitted += chunks.len();
        packets.push(Packet { label, chunks });
    }

    Ok(packets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CycleRecord;

    fn valid(sop: bool, eop: bool, data: Vec<bool>) -> CycleRecord {
        CycleRecord::new(sop, eop, true, data)
    }

    #[test]
    fn labels_count_previously_emitted_chunks() {
        // Two transactions of one 8-bit word each: 2 chunks per packet.
        let w: Vec<bool> = vec![true; 8];
        let records = vec![
            valid(true, true, w.clone()),
            valid(true, true, w),
        ];
        let packets = transcode(&records, 7).unwrap();
        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0].label, 0);
        assert_eq!(packets[1].label, 2);
    }

    #[test]
    fn emission_order_is_reversed_logical_order() {
        // 14 bits: two full groups, no boundary padding.
        let bits: Vec<bool> = (0..14).map(|i| i < 7).collect();
        let records = vec![valid(true, true, bits.clone())];
        let packets = transcode(&records, 7).unwrap();
        let chunks = &packets[0].chunks;
        assert_eq!(chunks.len(), 2);
        // Logical tail (low-order half) leaves first and carries sop.
        assert!(chunks[0].sop && !chunks[0].eop);
        assert_eq!(chunks[0].data, &bits[7..]);
        assert!(chunks[1].eop && !chunks[1].sop);
        assert_eq!(chunks[1].data, &bits[..7]);
    }

    #[test]
    fn empty_transaction_aborts() {
        // Marker-only cycles with no payload bits.
        let records = vec![
            valid(true, false, Vec::new()),
            valid(false, true, Vec::new()),
        ];
        let err = transcode(&records, 7).unwrap_err();
        assert_eq!(err, TranscodeError::EmptyTransaction { index: 0 });
    }
}
