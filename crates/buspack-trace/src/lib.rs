//! Textual `.mem` trace format for the buspack transcoder.
//!
//! This crate provides the I/O skin around `buspack-core`, deliberately
//! free of any re-framing logic:
//!
//! - `format`: line-level decode/encode of cycle records.
//! - `emit`: rendering of framed packets into the output text.
//! - `io`: buffered file read/write helpers.
//! - `generator`: a deterministic toy trace generator for tests and the
//!   CLI `generate` subcommand.
//!
//! The intent is to keep the format pipeline simple, testable, and easy to
//! replace with production sources later (a real simulator dump or
//! waveform importer).
//!
//! We intentionally avoid broad re-exports so callers use stable paths like
//! `buspack_trace::io::read_trace`.

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

/// Rendering of framed packets into the output text.
pub mod emit;
/// Line-level decode/encode of cycle records.
pub mod format;
/// Deterministic toy trace generator (for sims/tests).
pub mod generator;
/// Buffered file read/write helpers.
pub mod io;

// (Intentionally no broad re-exports so downstream callers import
// stable module paths like `buspack_trace::format::parse_record_line`.)
