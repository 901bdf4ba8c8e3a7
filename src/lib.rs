//! Zyphrax — block-structured lossless compression.
//!
//! An LZ77 hash-chain match finder feeds a tokenized sequence stream that
//! is entropy-coded with canonical prefix codes, one self-describing frame
//! per call. The API is synchronous and holds no process-wide state;
//! distinct calls are fully independent and may run in parallel.

pub mod bitio;
pub mod block;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod huffman;
pub mod lorem;
pub mod lz77;
pub mod seq;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the primary API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size for a given input size.
pub use frame::compress::compress_bound;
/// One-shot frame compression into a caller-provided buffer.
pub use frame::compress::compress;
/// One-shot frame compression into a freshly allocated `Vec`.
pub use frame::compress::compress_to_vec;
/// One-shot frame decompression into a caller-provided buffer.
pub use frame::decompress::decompress;
/// One-shot frame decompression into a freshly allocated `Vec`.
pub use frame::decompress::decompress_to_vec;
/// Frame configuration: level, block size, reserved checksum flag.
pub use frame::types::FrameParams;
/// Error type shared by every compression and decompression entry point.
pub use error::ZyphraxError;

// ─────────────────────────────────────────────────────────────────────────────
// Version API
// ─────────────────────────────────────────────────────────────────────────────

pub const ZYPHRAX_VERSION_MAJOR: u32 = 0;
pub const ZYPHRAX_VERSION_MINOR: u32 = 1;
pub const ZYPHRAX_VERSION_RELEASE: u32 = 0;
pub const ZYPHRAX_VERSION_STRING: &str = "0.1.0";

/// Returns the library version number (e.g. 100 for v0.1.0).
pub fn version_number() -> u32 {
    ZYPHRAX_VERSION_MAJOR * 100 * 100 + ZYPHRAX_VERSION_MINOR * 100 + ZYPHRAX_VERSION_RELEASE
}

/// Returns the library version string (e.g. `"0.1.0"`).
pub fn version_string() -> &'static str {
    ZYPHRAX_VERSION_STRING
}
