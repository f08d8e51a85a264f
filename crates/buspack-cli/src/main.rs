// crates/buspack-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use buspack_core::transcode;
use buspack_trace::generator::generate_trace;
use buspack_trace::io::{read_trace, write_packets, write_trace};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default input path, matching the testbench's fixed file name.
const DEFAULT_INPUTS: &str = "data_unpack_test_inputs.mem";
/// Default output path, matching the testbench's fixed file name.
const DEFAULT_OUTPUTS: &str = "data_unpack_test_outputs.mem";

#[derive(Parser, Debug)]
#[command(
    name = "buspack",
    about = "Bus-trace re-framing transcoder",
    long_about = "Bus-trace re-framing transcoder.\n\nUse this tool to turn a wide-bus simulation trace (sop/eop/valid/data) into the fixed-width framed packet trace produced by the data-unpacker under test, and to generate synthetic input traces.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Re-frame a wide-bus trace into fixed-width transport packets.
    Transcode {
        /// Input trace path (one cycle record per line)
        #[arg(long, default_value = DEFAULT_INPUTS)]
        input: PathBuf,

        /// Output path for the framed packet trace
        #[arg(long, default_value = DEFAULT_OUTPUTS)]
        output: PathBuf,

        /// Transport chunk width in bits (>0)
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..))]
        chunk_width: u32,
    },

    /// Generate a synthetic well-formed input trace.
    Generate {
        /// Number of transactions (>0)
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
        transactions: u32,

        /// Maximum payload words per transaction (>0)
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..))]
        max_words: u32,

        /// RNG seed for reproducible traces
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output path for the generated trace
        #[arg(long, default_value = DEFAULT_INPUTS)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Transcode {
            input,
            output,
            chunk_width,
        } => run_transcode(input, output, chunk_width as usize),

        Cmd::Generate {
            transactions,
            max_words,
            seed,
            out,
        } => run_generate(transactions, max_words, seed, out),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn run_transcode(input: PathBuf, output: PathBuf, chunk_width: usize) -> Result<()> {
    info!(input=%input.display(), output=%output.display(), chunk_width, "transcoding trace");

    let records = read_trace(&input)
        .with_context(|| format!("reading trace {}", input.display()))?;
    let packets = transcode(&records, chunk_width).context("re-framing trace")?;

    let chunks: usize = packets.iter().map(|p| p.chunks.len()).sum();
    write_packets(&output, &packets)
        .with_context(|| format!("writing packets to {}", output.display()))?;

    println!(
        "Transcoded {} records → {} packets ({} chunks) → {}",
        records.len(),
        packets.len(),
        chunks,
        output.display()
    );
    Ok(())
}

fn run_generate(transactions: u32, max_words: u32, seed: u64, out: PathBuf) -> Result<()> {
    info!(transactions, max_words, seed, out=%out.display(), "generating synthetic trace");

    let records = generate_trace(transactions, max_words, seed);
    write_trace(&out, &records)
        .with_context(|| format!("writing trace to {}", out.display()))?;

    println!(
        "Generated {} transactions ({} records) → {}",
        transactions,
        records.len(),
        out.display()
    );
    Ok(())
}
