use crate::codec::Codec;
use crate::config::Configuration;
use crate::error::SweepError;
use crate::measure::{measure, Deltas, Measurement};
use crate::record::ResultRow;
use crate::sweep::SweepEntry;

/// Reported once per sweep entry, in entry order.
#[derive(Debug)]
pub enum Outcome<'a> {
    Row(&'a ResultRow),
    Failed(&'a Failure),
}

/// A configuration that produced no result row.
#[derive(Debug)]
pub struct Failure {
    pub label: String,
    pub error: SweepError,
}

#[derive(Debug)]
pub struct SweepReport {
    pub baseline: Measurement,
    pub rows: Vec<ResultRow>,
    pub failures: Vec<Failure>,
}

/// Measure the baseline, then every entry in order.
///
/// `resolve` turns a configuration into an engine. A failure to resolve,
/// compress, decompress or verify one entry is logged and recorded, and the
/// sweep moves on; only a failing baseline aborts the run.
pub fn run_sweep<R, O>(
    payload: &[u8],
    baseline_codec: &dyn Codec,
    entries: &[SweepEntry],
    mut resolve: R,
    mut on_outcome: O,
) -> Result<SweepReport, SweepError>
where
    R: FnMut(&Configuration) -> Result<Box<dyn Codec>, SweepError>,
    O: FnMut(Outcome<'_>),
{
    if payload.is_empty() {
        return Err(SweepError::EmptyPayload);
    }

    let baseline = measure(baseline_codec, payload)?;
    log::info!(
        "baseline {}: ratio {:.3}, {:.1} MB/s",
        baseline_codec.name(),
        baseline.ratio(),
        baseline.speed() / (1u64 << 20) as f64
    );

    let mut rows = Vec::with_capacity(entries.len());
    let mut failures = Vec::new();

    for entry in entries {
        let result = resolve(&entry.config).and_then(|codec| measure(codec.as_ref(), payload));
        match result {
            Ok(m) => {
                let row = ResultRow::new(&entry.label, &m, &Deltas::between(&baseline, &m));
                on_outcome(Outcome::Row(&row));
                rows.push(row);
            }
            Err(error) => {
                log::error!("{}: {}", entry.label, error);
                let failure = Failure {
                    label: entry.label.clone(),
                    error,
                };
                on_outcome(Outcome::Failed(&failure));
                failures.push(failure);
            }
        }
    }

    Ok(SweepReport {
        baseline,
        rows,
        failures,
    })
}
