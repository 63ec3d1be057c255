use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use zsweep_cli::report::{format_failure, format_row, human_bytes};
use zsweep_codecs::codec_for;
use zsweep_core::{run_sweep, Outcome, ResultWriter, SweepError, SweepPlan};

// ── CLI definition ─────────────────────────────────────────────────────────

/// Benchmark zstd parameter deltas against a baseline level on one payload
#[derive(Parser)]
#[command(name = "zsweep-bench", version)]
struct Cli {
    /// File to compress
    payload: PathBuf,
    /// Where to write the result rows
    #[arg(long, default_value = "results.csv")]
    csv: PathBuf,
    /// Baseline level; all deltas are applied to it
    #[arg(long, default_value_t = 3)]
    base_level: i32,
    /// Stock levels benchmarked as-is
    #[arg(long, value_delimiter = ',', default_values_t = [2, 3, 4, 5])]
    levels: Vec<i32>,
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [1, 2, 3])]
    window_deltas: Vec<i32>,
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [0, 1])]
    chain_deltas: Vec<i32>,
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [1, 2, 3])]
    hash_deltas: Vec<i32>,
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [0, 1])]
    min_match_deltas: Vec<i32>,
    /// Also benchmark lz4 and gzip as reference points
    #[arg(long)]
    references: bool,
}

impl Cli {
    fn plan(&self) -> SweepPlan {
        SweepPlan {
            base_level: self.base_level,
            levels: self.levels.clone(),
            window_deltas: self.window_deltas.clone(),
            chain_deltas: self.chain_deltas.clone(),
            hash_deltas: self.hash_deltas.clone(),
            min_match_deltas: self.min_match_deltas.clone(),
            include_references: self.references,
        }
    }
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    zsweep_cli::logging::init();
    let cli = Cli::parse();

    let payload = std::fs::read(&cli.payload)
        .with_context(|| format!("reading payload {:?}", cli.payload))?;

    let plan = cli.plan();
    let entries = plan.build();
    log::info!(
        "payload {:?}: {}, {} configurations ({} tuned)",
        cli.payload,
        human_bytes(payload.len() as u64),
        entries.len(),
        entries.iter().filter(|e| e.config.is_tuned()).count()
    );

    // The results file is only opened once the baseline has been measured,
    // so a failed run leaves the previous file intact.
    let mut writer: Option<ResultWriter<File>> = None;
    let mut write_error: Option<SweepError> = None;

    let t0 = Instant::now();
    let baseline = codec_for(&plan.baseline())?;
    let report = run_sweep(&payload, baseline.as_ref(), &entries, codec_for, |outcome| {
        if writer.is_none() && write_error.is_none() {
            match ResultWriter::create(&cli.csv) {
                Ok(w) => writer = Some(w),
                Err(e) => write_error = Some(e),
            }
        }
        match outcome {
            Outcome::Row(row) => {
                println!("{}", format_row(row));
                if write_error.is_none() {
                    if let Some(w) = writer.as_mut() {
                        write_error = w.write(row).err();
                    }
                }
            }
            Outcome::Failed(failure) => println!("{}", format_failure(failure)),
        }
    })
    .with_context(|| format!("sweeping {:?}", cli.payload))?;

    if let Some(e) = write_error {
        return Err(e).with_context(|| format!("writing results file {:?}", cli.csv));
    }
    let writer = match writer {
        Some(w) => w,
        None => ResultWriter::create(&cli.csv)
            .with_context(|| format!("creating results file {:?}", cli.csv))?,
    };
    let written = writer.finish()?;

    log::info!(
        "{} rows written to {:?}, {} failed, {:.1}s total",
        written,
        cli.csv,
        report.failures.len(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
