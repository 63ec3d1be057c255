use std::fmt;
use std::str::FromStr;

use crate::error::SweepError;

/// Separator between the base level and each parameter delta in a tuned label.
pub const LABEL_DELIMITER: char = '|';

// ── zstd parameters ────────────────────────────────────────────────────────

/// The four integer zstd parameters the sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZstdParams {
    pub window_log: u32,
    pub chain_log: u32,
    pub hash_log: u32,
    pub min_match: u32,
}

/// zstd's default parameter table for large or unknown source sizes,
/// levels 1..=9: (window_log, chain_log, hash_log, min_match).
const LEVEL_TABLE: [(u32, u32, u32, u32); 9] = [
    (19, 13, 14, 7),
    (20, 15, 16, 6),
    (21, 16, 17, 5),
    (21, 18, 18, 5),
    (21, 18, 19, 5),
    (21, 18, 19, 5),
    (21, 19, 20, 5),
    (21, 19, 20, 5),
    (22, 20, 21, 5),
];

impl ZstdParams {
    /// Parameters zstd itself selects for `level` when the source size is unknown.
    pub fn for_level(level: i32) -> Result<Self, SweepError> {
        let &(window_log, chain_log, hash_log, min_match) = usize::try_from(level)
            .ok()
            .and_then(|l| l.checked_sub(1))
            .and_then(|idx| LEVEL_TABLE.get(idx))
            .ok_or(SweepError::UnknownLevel(level))?;
        Ok(Self {
            window_log,
            chain_log,
            hash_log,
            min_match,
        })
    }

    /// Offset every parameter by the matching delta.
    ///
    /// Only negative results are rejected here; upper bounds are left to the
    /// engine, which reports them per configuration.
    pub fn apply(&self, deltas: &ParamDeltas) -> Result<Self, SweepError> {
        Ok(Self {
            window_log: offset("window_log", self.window_log, deltas.window)?,
            chain_log: offset("chain_log", self.chain_log, deltas.chain)?,
            hash_log: offset("hash_log", self.hash_log, deltas.hash)?,
            min_match: offset("min_match", self.min_match, deltas.min_match)?,
        })
    }
}

fn offset(name: &'static str, base: u32, delta: i32) -> Result<u32, SweepError> {
    let value = i64::from(base) + i64::from(delta);
    u32::try_from(value).map_err(|_| SweepError::ParamOutOfRange {
        name,
        base,
        delta,
        value,
    })
}

/// Signed offsets from a base level's parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamDeltas {
    pub window: i32,
    pub chain: i32,
    pub hash: i32,
    pub min_match: i32,
}

// ── Configurations ─────────────────────────────────────────────────────────

/// Non-zstd engines that can be added to a sweep as fixed reference points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceCodec {
    Lz4,
    Gzip,
}

impl ReferenceCodec {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceCodec::Lz4 => "lz4",
            ReferenceCodec::Gzip => "gzip",
        }
    }
}

/// One point in the parameter space being benchmarked.
///
/// The label printed for a configuration (its `Display` form) is also its
/// serialized form in result files; `FromStr` is the exact inverse.
///
/// ```text
/// Level(3)                              ⇄  L3
/// Tuned { base_level: 3, +1 +0 +2 +1 }  ⇄  L3|w+1|c+0|h+2|m+1
/// Reference(Lz4)                        ⇄  lz4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configuration {
    /// A stock zstd level.
    Level(i32),
    /// A base level with explicit parameter deltas.
    Tuned { base_level: i32, deltas: ParamDeltas },
    /// A non-zstd engine at its default setting.
    Reference(ReferenceCodec),
}

impl Configuration {
    pub fn is_tuned(&self) -> bool {
        matches!(self, Configuration::Tuned { .. })
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Configuration::Level(level) => write!(f, "L{level}"),
            Configuration::Tuned { base_level, deltas } => write!(
                f,
                "L{base_level}{d}w{:+}{d}c{:+}{d}h{:+}{d}m{:+}",
                deltas.window,
                deltas.chain,
                deltas.hash,
                deltas.min_match,
                d = LABEL_DELIMITER,
            ),
            Configuration::Reference(codec) => f.write_str(codec.as_str()),
        }
    }
}

impl FromStr for Configuration {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lz4" => return Ok(Configuration::Reference(ReferenceCodec::Lz4)),
            "gzip" => return Ok(Configuration::Reference(ReferenceCodec::Gzip)),
            _ => {}
        }

        let mut parts = s.split(LABEL_DELIMITER);
        let base_level = parse_level(s, parts.next().unwrap_or_default())?;

        let fields: Vec<&str> = parts.collect();
        if fields.is_empty() {
            return Ok(Configuration::Level(base_level));
        }
        if fields.len() != 4 {
            return Err(SweepError::label(
                s,
                format!("expected 4 parameter deltas, found {}", fields.len()),
            ));
        }

        let deltas = ParamDeltas {
            window: parse_delta(s, fields[0], 'w')?,
            chain: parse_delta(s, fields[1], 'c')?,
            hash: parse_delta(s, fields[2], 'h')?,
            min_match: parse_delta(s, fields[3], 'm')?,
        };
        Ok(Configuration::Tuned { base_level, deltas })
    }
}

fn parse_level(label: &str, field: &str) -> Result<i32, SweepError> {
    field
        .strip_prefix('L')
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| SweepError::label(label, format!("bad level field {field:?}")))
}

fn parse_delta(label: &str, field: &str, key: char) -> Result<i32, SweepError> {
    let value = field
        .strip_prefix(key)
        .ok_or_else(|| SweepError::label(label, format!("expected '{key}' field, got {field:?}")))?;
    // Deltas are always written with an explicit sign.
    if !value.starts_with(['+', '-']) {
        return Err(SweepError::label(label, format!("unsigned delta {field:?}")));
    }
    value
        .parse()
        .map_err(|_| SweepError::label(label, format!("bad delta {field:?}")))
}
