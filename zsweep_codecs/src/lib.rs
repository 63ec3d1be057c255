mod gzip_codec;
mod lz4_codec;
mod zstd_codec;

pub use gzip_codec::GzipCodec;
pub use lz4_codec::Lz4Codec;
pub use zstd_codec::ZstdCodec;

use zsweep_core::{Codec, Configuration, ReferenceCodec, SweepError, ZstdParams};

/// Build the engine that benchmarks `config`.
///
/// Tuned configurations are resolved to explicit parameters here, so a delta
/// that cannot be applied fails this one configuration before any timing.
pub fn codec_for(config: &Configuration) -> Result<Box<dyn Codec>, SweepError> {
    let codec: Box<dyn Codec> = match config {
        Configuration::Level(level) => Box::new(ZstdCodec::new(*level)),
        Configuration::Tuned { base_level, deltas } => {
            let params = ZstdParams::for_level(*base_level)?.apply(deltas)?;
            Box::new(ZstdCodec::with_params(*base_level, params))
        }
        Configuration::Reference(ReferenceCodec::Lz4) => Box::new(Lz4Codec),
        Configuration::Reference(ReferenceCodec::Gzip) => Box::new(GzipCodec::default()),
    };
    Ok(codec)
}
