//! Split a transaction payload into fixed-width framed groups.
//!
//! Groups are produced in **logical** order: when the payload length is not
//! a multiple of the width, the first group is the short boundary group,
//! left-padded with zeros up to full width; every following group is a full
//! contiguous slice. The boundary group carries the end-of-packet bit, the
//! last logical group the start-of-packet bit, and a single-group payload
//! carries both. Callers that need the transport (emission) order reverse
//! the list; see [`crate::transcode`].

use crate::error::TranscodeError;
use crate::types::{Chunk, Transaction};

/// Re-chunk one transaction payload into `width`-bit framed groups in
/// logical order.
///
/// `index` is the transaction's ordinal in the trace, used only for error
/// reporting.
///
/// # Errors
/// [`TranscodeError::EmptyTransaction`] if the payload has no bits.
///
/// # Panics
/// Panics if `width == 0` (invalid chunk width).
pub fn rechunk(
    tx: &Transaction,
    width: usize,
    index: usize,
) -> Result<Vec<Chunk>, TranscodeError> {
    assert!(width > 0, "rechunk: chunk width must be > 0");

    let bits = &tx.bits;
    if bits.is_empty() {
        return Err(TranscodeError::EmptyTransaction { index });
    }

    let extra = bits.len() % width;
    let mut chunks = Vec::with_capacity(bits.len() / width + usize::from(extra != 0));

    // Short boundary group first, zero-padded at the front.
    if extra != 0 {
        let pad = width - extra;
        let mut data = vec![false; pad];
        data.extend_from_slice(&bits[..extra]);
        chunks.push(Chunk { sop: false, eop: false, data, pad });
    }

    for group in bits[extra..].chunks(width) {
        chunks.push(Chunk { sop: false, eop: false, data: group.to_vec(), pad: 0 });
    }

    // eop rides the boundary group, sop the last logical group; a
    // single-group payload gets both flags on its one chunk.
    if let Some(first) = chunks.first_mut() {
        first.eop = true;
    }
    if let Some(last) = chunks.last_mut() {
        last.sop = true;
    }

    Ok(chunks)
}
