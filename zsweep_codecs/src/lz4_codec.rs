use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use zsweep_core::Codec;

/// LZ4 block codec, a fast low-ratio reference point.
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(compress_prepend_size(raw))
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        decompress_size_prepended(compressed)
            .map_err(|e| anyhow::anyhow!("lz4 decompress error: {}", e))
    }
}
