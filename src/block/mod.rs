//! Block-level compression and decompression.
//!
//! A block is the unit of independent compression: either a raw block
//! (type 0) or an entropy-coded block (type 1). Both carry their original
//! size so the decoder never has to infer a raw block's length from frame
//! arithmetic.

pub mod compress;
pub mod decompress;

pub use compress::{compress_block, BLOCK_COMPRESSED, BLOCK_HEADER_SIZE, BLOCK_RAW, TABLES_SIZE};
pub use decompress::decompress_block;
