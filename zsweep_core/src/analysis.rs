use crate::config::{Configuration, LABEL_DELIMITER};
use crate::pareto::pareto_frontier;
use crate::record::ResultRow;

const MB: f64 = (1u64 << 20) as f64;

/// How a stored row takes part in the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    /// A standalone configuration, plotted with its own legend entry.
    Default,
    /// A sweep point, pooled with the other tuned rows. Carries the parsed
    /// configuration when the label follows this tool's delta grammar.
    Tuned(Option<Configuration>),
}

impl RowClass {
    /// Only the delimiter decides the class. Labels written by other tools
    /// (`zlib|6`, extra delta fields) are still tuned, just without a parsed
    /// configuration.
    pub fn classify(desc: &str) -> Self {
        if !desc.contains(LABEL_DELIMITER) {
            return RowClass::Default;
        }
        match desc.parse::<Configuration>() {
            Ok(config) => RowClass::Tuned(Some(config)),
            Err(e) => {
                log::warn!("pooling unrecognised tuned label: {e}");
                RowClass::Tuned(None)
            }
        }
    }
}

/// A row projected onto the two plotted objectives.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub desc: String,
    pub ratio: f64,
    /// Compression speed in MiB/s.
    pub speed_mbps: f64,
}

impl From<&ResultRow> for Point {
    fn from(row: &ResultRow) -> Self {
        Self {
            desc: row.desc.clone(),
            ratio: row.ratio,
            speed_mbps: row.comp_speed / MB,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub defaults: Vec<Point>,
    pub tuned: Vec<Point>,
    /// Tuned points on the (ratio, speed) frontier, in selection order.
    pub frontier: Vec<Point>,
}

/// Split rows into defaults and tuned points and compute the frontier of the
/// tuned population over (ratio, speed).
pub fn analyze(rows: &[ResultRow]) -> Analysis {
    let mut analysis = Analysis::default();
    for row in rows {
        match RowClass::classify(&row.desc) {
            RowClass::Default => analysis.defaults.push(Point::from(row)),
            RowClass::Tuned(_) => analysis.tuned.push(Point::from(row)),
        }
    }
    analysis.frontier = pareto_frontier(&analysis.tuned, |p| p.ratio, |p| p.speed_mbps);

    log::debug!(
        "classified {} defaults, {} tuned, {} on frontier",
        analysis.defaults.len(),
        analysis.tuned.len(),
        analysis.frontier.len()
    );
    analysis
}
