//! Frame format — the self-describing compressed artifact.
//!
//! A frame is a 12-byte header followed by independently compressed
//! blocks. Frame parameters apply to every block; blocks appear in input
//! order and the stream is strictly sequential.

pub mod compress;
pub mod decompress;
pub mod header;
pub mod types;

pub use compress::{compress, compress_bound, compress_to_vec};
pub use decompress::{decompress, decompress_to_vec};
pub use header::{FRAME_MAGIC, HEADER_SIZE};
pub use types::FrameParams;
