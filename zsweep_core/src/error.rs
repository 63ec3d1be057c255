use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    /// A configuration label that cannot be parsed back into a configuration.
    #[error("invalid label {label:?}: {reason}")]
    Label { label: String, reason: String },

    /// No built-in parameter table for this zstd level.
    #[error("no default zstd parameters for level {0}")]
    UnknownLevel(i32),

    /// Applying a delta pushed a parameter below zero.
    #[error("{name} out of range: {base} {delta:+} = {value}")]
    ParamOutOfRange {
        name: &'static str,
        base: u32,
        delta: i32,
        value: i64,
    },

    /// The engine itself reported a failure.
    #[error("{codec} {stage} failed: {message}")]
    Codec {
        codec: &'static str,
        stage: &'static str,
        message: String,
    },

    /// Decompressed output differs from the input payload.
    #[error(
        "round-trip mismatch: original {original_len} bytes (xxh3 {original_digest:016x}), \
         decoded {decoded_len} bytes (xxh3 {decoded_digest:016x})"
    )]
    IntegrityMismatch {
        original_len: usize,
        original_digest: u64,
        decoded_len: usize,
        decoded_digest: u64,
    },

    #[error("payload is empty")]
    EmptyPayload,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SweepError {
    pub(crate) fn codec(codec: &'static str, stage: &'static str, err: anyhow::Error) -> Self {
        SweepError::Codec {
            codec,
            stage,
            message: format!("{err:#}"),
        }
    }

    pub(crate) fn label(label: &str, reason: impl Into<String>) -> Self {
        SweepError::Label {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}
