/// The compression engine under test, treated as an opaque black box.
///
/// A `Codec` is built once per configuration by the caller and then asked to
/// compress the whole payload in one call. The sweep never inspects the
/// compressed bytes other than to measure their length and to feed them back
/// through [`Codec::decompress`] for the integrity check.
pub trait Codec: Send + Sync {
    /// Human-readable engine name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Compress `raw` in a single shot.
    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>>;

    /// Reverse [`Codec::compress`]. Must return the original bytes exactly.
    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>>;
}
