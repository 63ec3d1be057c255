use zstd::stream::raw::CParameter;
use zsweep_core::{Codec, ZstdParams};

/// Zstandard codec at a stock level, optionally with explicit parameters.
///
/// When `params` is set the level is applied first and the four parameters
/// override it, which matches how zstd builds parameters "from level" with
/// overrides. Strategy, search log and target length stay whatever libzstd
/// derives for the level and the actual source size.
pub struct ZstdCodec {
    /// Compression level (1 = fast / larger, 22 = slow / smallest).
    pub level: i32,
    pub params: Option<ZstdParams>,
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self {
            level,
            params: None,
        }
    }

    pub fn with_params(level: i32, params: ZstdParams) -> Self {
        Self {
            level,
            params: Some(params),
        }
    }
}

impl Codec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut compressor = zstd::bulk::Compressor::new(self.level)?;
        if let Some(p) = &self.params {
            compressor.set_parameter(CParameter::WindowLog(p.window_log))?;
            compressor.set_parameter(CParameter::ChainLog(p.chain_log))?;
            compressor.set_parameter(CParameter::HashLog(p.hash_log))?;
            compressor.set_parameter(CParameter::MinMatch(p.min_match))?;
        }
        Ok(compressor.compress(raw)?)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        // The frame carries its own content size and window descriptor.
        Ok(zstd::decode_all(compressed)?)
    }
}
