//! buspack-core — canonical types, transaction reconstruction, and packet
//! re-chunking for the buspack test-vector transcoder.
//!
//! This crate defines the **stable boundary** used across buspack crates:
//! - canonical data types (`CycleRecord`, `Transaction`, `Chunk`, `Packet`),
//! - the transaction reconstructor (an explicit `Idle`/`Accumulating` state
//!   machine over cycle records),
//! - the packet re-chunker (fixed-width groups with framing bits and
//!   boundary padding), and
//! - the end-to-end `transcode` pipeline gluing the two together.
//!
//! No I/O happens here; the textual trace format lives in `buspack-trace`.
//!
//! ```no_run
//! use buspack_core::{transcode, CycleRecord, CHUNK_WIDTH};
//! # let records: Vec<CycleRecord> = vec![];
//! let packets = transcode(&records, CHUNK_WIDTH)?;
//! # Ok::<(), buspack_core::TranscodeError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Small, explicit allowlist to keep docs readable and APIs ergonomic.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// Fixed-width re-chunking of a transaction payload with framing bits.
pub mod chunk;
/// Typed errors for the transcode pipeline.
pub mod error;
/// Transaction reconstruction state machine over cycle records.
pub mod reconstruct;
/// End-to-end pipeline: cycle records in, framed packets out.
pub mod transcode;
/// Canonical core data types shared across the workspace.
pub mod types;

// ---- Re-exports for workspace compatibility ----
pub use chunk::*;
pub use error::*;
pub use reconstruct::*;
pub use transcode::*;
pub use types::*;
