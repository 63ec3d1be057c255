use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::measure::{Deltas, Measurement};

/// One measured configuration as stored in a results file.
///
/// Header: `desc,ratio,ratio_imp,comp_speed,speed_change,size_mb`.
/// `comp_speed` is in bytes per second. Files written for older tooling that
/// name the ratio and speed columns `cr` and `cspeed` are read as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub desc: String,
    #[serde(alias = "cr")]
    pub ratio: f64,
    /// Ratio change vs. baseline, percent.
    #[serde(default)]
    pub ratio_imp: f64,
    #[serde(alias = "cspeed")]
    pub comp_speed: f64,
    /// Speed change vs. baseline, percent.
    #[serde(default)]
    pub speed_change: f64,
    #[serde(default)]
    pub size_mb: f64,
}

impl ResultRow {
    pub fn new(desc: impl Into<String>, measurement: &Measurement, deltas: &Deltas) -> Self {
        Self {
            desc: desc.into(),
            ratio: measurement.ratio(),
            ratio_imp: deltas.ratio_pct,
            comp_speed: measurement.speed(),
            speed_change: deltas.speed_pct,
            size_mb: measurement.size_mb(),
        }
    }
}

/// Column order of a results file.
pub const HEADER: [&str; 6] = [
    "desc",
    "ratio",
    "ratio_imp",
    "comp_speed",
    "speed_change",
    "size_mb",
];

/// Streaming CSV writer for result rows.
///
/// The header is written up front, so a sweep with no successful rows still
/// produces a readable file. Each row is flushed as soon as it is written.
pub struct ResultWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: u64,
}

impl ResultWriter<File> {
    /// Create (or truncate) a results file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SweepError> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> ResultWriter<W> {
    pub fn from_writer(writer: W) -> Result<Self, SweepError> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        inner.write_record(HEADER)?;
        inner.flush()?;
        Ok(Self { inner, rows: 0 })
    }

    pub fn write(&mut self, row: &ResultRow) -> Result<(), SweepError> {
        self.inner.serialize(row)?;
        self.inner.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Flush and return the number of rows written.
    pub fn finish(mut self) -> Result<u64, SweepError> {
        self.inner.flush()?;
        Ok(self.rows)
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W, SweepError> {
        self.inner
            .into_inner()
            .map_err(|e| SweepError::Io(e.into_error()))
    }
}

/// Read every row from a results CSV. Any malformed record is an error.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<ResultRow>, SweepError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

pub fn read_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<ResultRow>, SweepError> {
    read_rows(File::open(path)?)
}
