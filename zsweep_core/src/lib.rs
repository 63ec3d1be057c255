pub mod analysis;
pub mod codec;
pub mod config;
pub mod error;
pub mod measure;
pub mod pareto;
pub mod record;
pub mod runner;
pub mod sweep;

pub use analysis::{analyze, Analysis, Point, RowClass};
pub use codec::Codec;
pub use config::{Configuration, ParamDeltas, ReferenceCodec, ZstdParams};
pub use error::SweepError;
pub use measure::{measure, Deltas, Measurement, MIN_ELAPSED};
pub use pareto::pareto_frontier;
pub use record::{read_rows, read_rows_from_path, ResultRow, ResultWriter, HEADER};
pub use runner::{run_sweep, Failure, Outcome, SweepReport};
pub use sweep::{SweepEntry, SweepPlan};
