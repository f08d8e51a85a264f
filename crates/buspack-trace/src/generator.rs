// crates/buspack-trace/src/generator.rs

//! Tiny toy trace generator used by the CLI `generate` subcommand.
//! Produces a well-formed cycle-record trace with `transactions` logical
//! transactions of 1..=`max_words` payload words each.

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

use rand::{rngs::StdRng, Rng as _, SeedableRng};

use buspack_core::{CycleRecord, PAYLOAD_WIDTH};

/// Generate a synthetic bus trace:
/// - each transaction carries 1..=`max_words` valid data words,
/// - the start marker rides the first word, the end marker the last,
/// - non-valid idle cycles appear inside and between transactions.
///
/// Deterministic for a given `seed`.
#[must_use]
pub fn generate_trace(transactions: u32, max_words: u32, seed: u64) -> Vec<CycleRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();

    for _ in 0..transactions {
        let words = rng.random_range(1..=max_words.max(1));
        for w in 0..words {
            // Occasional non-valid gap mid-transaction.
            if w > 0 && rng.random_bool(0.3) {
                records.push(idle_cycle(&mut rng));
            }
            records.push(CycleRecord::new(
                w == 0,
                w == words - 1,
                true,
                random_word(&mut rng),
            ));
        }
        if rng.random_bool(0.5) {
            records.push(idle_cycle(&mut rng));
        }
    }

    records
}

/// A non-valid cycle; its data is junk the reconstructor must ignore.
fn idle_cycle(rng: &mut StdRng) -> CycleRecord {
    CycleRecord::new(false, false, false, random_word(rng))
}

fn random_word(rng: &mut StdRng) -> Vec<bool> {
    (0..PAYLOAD_WIDTH).map(|_| rng.random_bool(0.5)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use buspack_core::reconstruct;

    #[test]
    fn generated_traces_are_well_formed() {
        let records = generate_trace(5, 4, 42);
        let starts = records.iter().filter(|r| r.sop && r.valid).count();
        let ends = records.iter().filter(|r| r.eop && r.valid).count();
        assert_eq!(starts, 5);
        assert_eq!(ends, 5);

        let txs = reconstruct(&records);
        assert_eq!(txs.len(), 5);
        for tx in &txs {
            assert!(!tx.is_empty());
            assert_eq!(tx.len() % PAYLOAD_WIDTH, 0);
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        assert_eq!(generate_trace(3, 6, 7), generate_trace(3, 6, 7));
        assert_ne!(generate_trace(3, 6, 7), generate_trace(3, 6, 8));
    }
}
