//! Canonical Huffman entropy coding over fixed 256-symbol alphabets.
//!
//! Three independent tables serve each compressed block (tokens, literals,
//! offset high bytes). The encoder derives length-limited code lengths with
//! package-merge, assigns canonical codes, and serializes the table as 128
//! bytes of packed 4-bit lengths; the decoder rebuilds a direct 2¹⁵-entry
//! lookup table from those lengths alone.

pub mod decode;
pub mod encode;

pub use decode::{parse_lengths, HuffmanDecoder, DECODE_TABLE_BITS};
pub use encode::{HuffmanEncoder, ALPHABET_SIZE, MAX_CODE_LEN, TABLE_BYTES};
