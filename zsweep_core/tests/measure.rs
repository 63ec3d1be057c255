/// Single-configuration measurement, delta arithmetic and the sweep driver.
use std::time::Duration;

use zsweep_codecs::{codec_for, ZstdCodec};
use zsweep_core::{
    measure, run_sweep, Codec, Configuration, Deltas, Measurement, Outcome, SweepEntry,
    SweepError, SweepPlan, MIN_ELAPSED,
};

/// Generate `len` highly compressible bytes (repeating pattern).
fn compressible_bytes(len: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog. ";
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}

/// Compresses nothing and flips one byte on the way back.
struct CorruptingCodec;

impl Codec for CorruptingCodec {
    fn name(&self) -> &'static str {
        "corrupting"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut out = compressed.to_vec();
        if let Some(b) = out.first_mut() {
            *b ^= 0xff;
        }
        Ok(out)
    }
}

struct FailingCodec;

impl Codec for FailingCodec {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn compress(&self, _raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        anyhow::bail!("engine exploded")
    }

    fn decompress(&self, _compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        unreachable!()
    }
}

// ── deltas ─────────────────────────────────────────────────────────────────

#[test]
fn test_delta_scenario() {
    let d = Deltas::from_values(2.0, 100.0, 2.2, 90.0);
    assert!((d.ratio_pct - 10.0).abs() < 1e-9, "{}", d.ratio_pct);
    assert!((d.speed_pct + 10.0).abs() < 1e-9, "{}", d.speed_pct);
}

#[test]
fn test_deltas_between_measurements() {
    let baseline = Measurement {
        original_len: 1000,
        compressed_len: 500,
        elapsed: Duration::from_millis(10),
    };
    let m = Measurement {
        original_len: 1000,
        compressed_len: 400,
        elapsed: Duration::from_millis(20),
    };
    let d = Deltas::between(&baseline, &m);
    assert!((d.ratio_pct - 25.0).abs() < 1e-9);
    assert!((d.speed_pct + 50.0).abs() < 1e-9);
    assert_eq!(Deltas::between(&baseline, &baseline), Deltas { ratio_pct: 0.0, speed_pct: 0.0 });
}

// ── measurement ────────────────────────────────────────────────────────────

#[test]
fn test_derived_quantities() {
    let m = Measurement {
        original_len: 4 << 20,
        compressed_len: 1 << 20,
        elapsed: Duration::from_millis(500),
    };
    assert_eq!(m.ratio(), 4.0);
    assert_eq!(m.speed(), (8u64 << 20) as f64);
    assert_eq!(m.size_mb(), 1.0);
}

#[test]
fn test_zero_elapsed_is_floored() {
    let m = Measurement {
        original_len: 10,
        compressed_len: 5,
        elapsed: Duration::ZERO,
    };
    assert!(m.speed().is_finite());
    assert_eq!(m.speed(), 10.0 / MIN_ELAPSED.as_secs_f64());
}

#[test]
fn test_measure_zstd() {
    let data = compressible_bytes(256 * 1024);
    let m = measure(&ZstdCodec::default(), &data).unwrap();
    assert_eq!(m.original_len, data.len() as u64);
    assert!(m.compressed_len < m.original_len);
    assert!(m.ratio() > 1.0);
    assert!(m.speed() > 0.0);
}

#[test]
fn test_measure_detects_mismatch() {
    let data = compressible_bytes(1000);
    let err = measure(&CorruptingCodec, &data).unwrap_err();
    match err {
        SweepError::IntegrityMismatch {
            original_len,
            decoded_len,
            original_digest,
            decoded_digest,
        } => {
            assert_eq!(original_len, 1000);
            assert_eq!(decoded_len, 1000);
            assert_ne!(original_digest, decoded_digest);
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
}

#[test]
fn test_measure_reports_engine_error() {
    let err = measure(&FailingCodec, b"data").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failing compress failed"), "{msg}");
    assert!(msg.contains("engine exploded"), "{msg}");
}

// ── sweep driver ───────────────────────────────────────────────────────────

/// A corrupting configuration yields no row and one failure, and the sweep
/// still measures the configurations after it.
#[test]
fn test_sweep_continues_after_mismatch() {
    let data = compressible_bytes(64 * 1024);
    let entries = vec![
        SweepEntry::new(Configuration::Level(1)),
        SweepEntry::new("L9|w+0|c+0|h+0|m+0".parse().unwrap()),
        SweepEntry::new(Configuration::Level(5)),
    ];
    let bad = entries[1].config;

    let mut seen = Vec::new();
    let report = run_sweep(
        &data,
        &ZstdCodec::default(),
        &entries,
        |config| {
            if *config == bad {
                Ok(Box::new(CorruptingCodec) as Box<dyn Codec>)
            } else {
                codec_for(config)
            }
        },
        |outcome| match outcome {
            Outcome::Row(row) => seen.push(format!("row {}", row.desc)),
            Outcome::Failed(f) => seen.push(format!("failed {}", f.label)),
        },
    )
    .unwrap();

    assert_eq!(seen, vec!["row L1", "failed L9|w+0|c+0|h+0|m+0", "row L5"]);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].label, "L9|w+0|c+0|h+0|m+0");
    assert!(matches!(report.failures[0].error, SweepError::IntegrityMismatch { .. }));
    assert!(report.rows.iter().all(|r| r.desc != "L9|w+0|c+0|h+0|m+0"));
}

#[test]
fn test_sweep_rows_are_relative_to_baseline() {
    let data = compressible_bytes(128 * 1024);
    let entries = vec![SweepEntry::new(Configuration::Level(3))];
    let report = run_sweep(&data, &ZstdCodec::default(), &entries, codec_for, |_| {}).unwrap();

    let row = &report.rows[0];
    // Same engine and level as the baseline, so the size is identical.
    assert_eq!(row.ratio, report.baseline.ratio());
    assert!(row.ratio_imp.abs() < 1e-9);
    assert!(row.size_mb > 0.0);
}

#[test]
fn test_sweep_unresolvable_configuration_fails_alone() {
    let data = compressible_bytes(32 * 1024);
    let entries = vec![
        SweepEntry::new("L3|w+0|c+0|h+0|m-9".parse().unwrap()),
        SweepEntry::new("L42|w+1|c+0|h+0|m+0".parse().unwrap()),
        SweepEntry::new(Configuration::Level(2)),
    ];
    let report = run_sweep(&data, &ZstdCodec::default(), &entries, codec_for, |_| {}).unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].desc, "L2");
    assert!(matches!(report.failures[0].error, SweepError::ParamOutOfRange { .. }));
    assert!(matches!(report.failures[1].error, SweepError::UnknownLevel(42)));
}

#[test]
fn test_failing_baseline_aborts() {
    let entries = SweepPlan::default().build();
    let result = run_sweep(b"payload", &FailingCodec, &entries, codec_for, |_| {});
    assert!(matches!(result, Err(SweepError::Codec { .. })));
}

#[test]
fn test_empty_payload_rejected() {
    let result = run_sweep(&[], &ZstdCodec::default(), &[], codec_for, |_| {});
    assert!(matches!(result, Err(SweepError::EmptyPayload)));
}

#[test]
fn test_default_plan_runs_clean() {
    let data = compressible_bytes(512 * 1024);
    let entries = SweepPlan::default().build();
    let report = run_sweep(&data, &ZstdCodec::default(), &entries, codec_for, |_| {}).unwrap();
    assert!(report.failures.is_empty(), "{:?}", report.failures);
    assert_eq!(report.rows.len(), entries.len());
}
