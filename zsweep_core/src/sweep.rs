use crate::config::{Configuration, ParamDeltas, ReferenceCodec};

/// A configuration paired with the label it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepEntry {
    pub label: String,
    pub config: Configuration,
}

impl SweepEntry {
    pub fn new(config: Configuration) -> Self {
        Self {
            label: config.to_string(),
            config,
        }
    }
}

/// Describes which configurations a benchmark run covers.
///
/// The default plan is the stock zstd levels 2 through 5 plus a
/// 3 × 2 × 3 × 2 grid of deltas around level 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    /// Level every delta is applied to, and the baseline of the run.
    pub base_level: i32,
    /// Stock levels benchmarked as-is.
    pub levels: Vec<i32>,
    pub window_deltas: Vec<i32>,
    pub chain_deltas: Vec<i32>,
    pub hash_deltas: Vec<i32>,
    pub min_match_deltas: Vec<i32>,
    /// Append lz4 and gzip as reference points.
    pub include_references: bool,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            base_level: 3,
            levels: vec![2, 3, 4, 5],
            window_deltas: vec![1, 2, 3],
            chain_deltas: vec![0, 1],
            hash_deltas: vec![1, 2, 3],
            min_match_deltas: vec![0, 1],
            include_references: false,
        }
    }
}

impl SweepPlan {
    /// The configuration every other result is compared against.
    pub fn baseline(&self) -> Configuration {
        Configuration::Level(self.base_level)
    }

    /// Enumerate the plan in a fixed order: stock levels, references, then
    /// the delta grid nested window → chain → hash → min-match.
    pub fn build(&self) -> Vec<SweepEntry> {
        let mut entries: Vec<SweepEntry> = self
            .levels
            .iter()
            .map(|&level| SweepEntry::new(Configuration::Level(level)))
            .collect();

        if self.include_references {
            for codec in [ReferenceCodec::Lz4, ReferenceCodec::Gzip] {
                entries.push(SweepEntry::new(Configuration::Reference(codec)));
            }
        }

        for &window in &self.window_deltas {
            for &chain in &self.chain_deltas {
                for &hash in &self.hash_deltas {
                    for &min_match in &self.min_match_deltas {
                        entries.push(SweepEntry::new(Configuration::Tuned {
                            base_level: self.base_level,
                            deltas: ParamDeltas {
                                window,
                                chain,
                                hash,
                                min_match,
                            },
                        }));
                    }
                }
            }
        }
        entries
    }
}
