//! File-level read/write helpers for bus traces and framed packet output.
//!
//! These routines only move text across the process boundary; decoding and
//! rendering live in `format` and `emit`. Reads skip non-record lines, and
//! writes land only after the caller's transformation fully succeeded —
//! there is no partial-output mode.

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

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use buspack_core::{CycleRecord, Packet};

use crate::emit::render_packets;
use crate::format::{parse_record_line, render_record_line};

/// Read a cycle-record trace from a text file, one record per line.
///
/// Comment, blank, and malformed lines are skipped (counted at debug
/// level); open and read failures carry the path as context.
pub fn read_trace<P: AsRef<Path>>(path: P) -> Result<Vec<CycleRecord>> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let rdr = BufReader::new(f);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in rdr.lines() {
        let line = line.with_context(|| format!("read {}", display(path_ref)))?;
        match parse_record_line(&line) {
            Some(rec) => records.push(rec),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "ignored non-record lines");
    }
    Ok(records)
}

/// Write a cycle-record trace (generator output), one record per line.
pub fn write_trace<P: AsRef<Path>>(path: P, records: &[CycleRecord]) -> Result<()> {
    let path_ref = path.as_ref();
    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    for rec in records {
        w.write_all(render_record_line(rec).as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush().with_context(|| "flush trace writer")?;
    Ok(())
}

/// Write the framed packet output text.
pub fn write_packets<P: AsRef<Path>>(path: P, packets: &[Packet]) -> Result<()> {
    let path_ref = path.as_ref();
    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    w.write_all(render_packets(packets).as_bytes())?;
    w.flush().with_context(|| "flush packet writer")?;
    Ok(())
}

/* ---------------- Small helpers ---------------- */

/// Ensure the parent directory for a file exists (no-op if none).
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

#[inline]
fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
