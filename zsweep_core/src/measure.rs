use std::time::{Duration, Instant};

use xxhash_rust::xxh3::xxh3_64;

use crate::codec::Codec;
use crate::error::SweepError;

/// Floor applied to the compression time before computing speed.
///
/// Tiny payloads can compress faster than the clock resolution; without the
/// floor their speed would be infinite.
pub const MIN_ELAPSED: Duration = Duration::from_nanos(1);

const MB: f64 = (1u64 << 20) as f64;

/// Outcome of one single-shot compression of one payload.
///
/// Timing is not repeated or averaged, so results carry run-to-run noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub original_len: u64,
    pub compressed_len: u64,
    /// Wall-clock compression time only; decompression is not timed.
    pub elapsed: Duration,
}

impl Measurement {
    /// original size / compressed size.
    pub fn ratio(&self) -> f64 {
        self.original_len as f64 / self.compressed_len as f64
    }

    /// Compression speed in bytes per second.
    pub fn speed(&self) -> f64 {
        self.original_len as f64 / self.elapsed.max(MIN_ELAPSED).as_secs_f64()
    }

    /// Compressed size in MiB.
    pub fn size_mb(&self) -> f64 {
        self.compressed_len as f64 / MB
    }
}

/// Compress `payload` once, verify it decompresses to the same bytes, and
/// report size and compression time.
pub fn measure(codec: &dyn Codec, payload: &[u8]) -> Result<Measurement, SweepError> {
    let start = Instant::now();
    let compressed = codec
        .compress(payload)
        .map_err(|e| SweepError::codec(codec.name(), "compress", e))?;
    let elapsed = start.elapsed();

    let decoded = codec
        .decompress(&compressed)
        .map_err(|e| SweepError::codec(codec.name(), "decompress", e))?;
    if decoded != payload {
        return Err(SweepError::IntegrityMismatch {
            original_len: payload.len(),
            original_digest: xxh3_64(payload),
            decoded_len: decoded.len(),
            decoded_digest: xxh3_64(&decoded),
        });
    }

    Ok(Measurement {
        original_len: payload.len() as u64,
        compressed_len: compressed.len() as u64,
        elapsed,
    })
}

/// Percentage change of a measurement relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deltas {
    pub ratio_pct: f64,
    pub speed_pct: f64,
}

impl Deltas {
    pub fn between(baseline: &Measurement, measurement: &Measurement) -> Self {
        Self::from_values(
            baseline.ratio(),
            baseline.speed(),
            measurement.ratio(),
            measurement.speed(),
        )
    }

    pub fn from_values(baseline_ratio: f64, baseline_speed: f64, ratio: f64, speed: f64) -> Self {
        Self {
            ratio_pct: (ratio / baseline_ratio - 1.0) * 100.0,
            speed_pct: (speed / baseline_speed - 1.0) * 100.0,
        }
    }
}
