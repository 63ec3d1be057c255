use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use zsweep_core::Codec;

/// gzip (DEFLATE) codec, the common slow/mid-ratio reference point.
pub struct GzipCodec {
    pub level: Compression,
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl Codec for GzipCodec {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::with_capacity(raw.len() / 2), self.level);
        encoder.write_all(raw)?;
        Ok(encoder.finish()?)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut raw = Vec::new();
        GzDecoder::new(compressed).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
