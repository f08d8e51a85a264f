//! Reassemble logical transactions from a cycle-level bus trace.
//!
//! A transaction opens on a `sop ∧ valid` cycle, accumulates the data word
//! of every valid cycle while open, and closes on an `eop ∧ valid` cycle.
//! Within one cycle the start marker is handled before the end marker, so a
//! cycle carrying both opens, accumulates, and closes a one-word
//! transaction.
//!
//! Accumulation order: the finalized payload holds the **newest** word's
//! bits first — the oldest word carries the least-significant end of the
//! payload. Words are therefore flattened in reverse arrival order; bit
//! order inside each word is preserved.

use crate::types::{CycleClass, CycleRecord, Transaction};

/// Reconstruction state: either between transactions or accumulating the
/// open one's words in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Accumulating { words: Vec<Vec<bool>> },
}

/// Explicit state machine over cycle records.
///
/// `step` is a pure function of `(state, record)`; the machine keeps no
/// other mutable context beyond a restart counter for diagnostics.
#[derive(Clone, Debug)]
pub struct Reconstructor {
    state: State,
    restarts: usize,
}

impl Reconstructor {
    /// A machine in the idle state.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { state: State::Idle, restarts: 0 }
    }

    /// Whether a transaction is currently open.
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, State::Accumulating { .. })
    }

    /// Count of start markers observed while a transaction was already
    /// open; each discarded the stale accumulation.
    #[inline]
    #[must_use]
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Advance by one cycle record, yielding a finalized transaction when
    /// this cycle closes one.
    pub fn step(&mut self, rec: &CycleRecord) -> Option<Transaction> {
        let class = CycleClass::of(rec);

        if matches!(class, CycleClass::Start | CycleClass::StartEnd) {
            if self.is_open() {
                self.restarts += 1;
            }
            self.state = State::Accumulating { words: Vec::new() };
        }

        if let State::Accumulating { words } = &mut self.state {
            if rec.valid {
                words.push(rec.data.clone());
            }
        }

        if matches!(class, CycleClass::End | CycleClass::StartEnd) {
            if let State::Accumulating { words } =
                std::mem::replace(&mut self.state, State::Idle)
            {
                return Some(finalize(words));
            }
        }

        None
    }

    /// Close out end-of-input. A still-open transaction is finalized
    /// implicitly; callers should treat that as a data-integrity warning.
    pub fn finish(&mut self) -> Option<Transaction> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Accumulating { words } => Some(finalize(words)),
            State::Idle => None,
        }
    }
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten accumulated words, newest first, into the canonical payload.
fn finalize(words: Vec<Vec<bool>>) -> Transaction {
    let mut bits = Vec::with_capacity(words.iter().map(Vec::len).sum());
    for word in words.iter().rev() {
        bits.extend_from_slice(word);
    }
    Transaction::new(bits)
}

/// Drive a machine over a whole trace, including the implicit close at
/// end-of-input, and return the transactions in start-marker order.
#[must_use]
pub fn reconstruct(records: &[CycleRecord]) -> Vec<Transaction> {
    let mut machine = Reconstructor::new();
    let mut out = Vec::new();
    for rec in records {
        if let Some(tx) = machine.step(rec) {
            out.push(tx);
        }
    }
    if let Some(tx) = machine.finish() {
        out.push(tx);
    }
    out
}
