//! Error surface of the compression engine.
//!
//! Every failure is fatal for the current call: no partial output is
//! returned, and the decompressor never writes past the caller's buffer.

use core::fmt;

/// Errors surfaced by `compress` / `decompress` and the block layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZyphraxError {
    /// The frame does not begin with the expected 4-byte magic constant.
    InvalidMagic,
    /// A block type byte is neither 0 (raw) nor 1 (compressed).
    InvalidBlockType,
    /// A code-length table is malformed (over-subscribed lengths), or a
    /// decoded bit pattern maps to a symbol with length 0.
    InvalidCodeTable,
    /// A match offset is zero or reaches back before the start of the block.
    InvalidReference,
    /// Decompressed output would exceed the caller-provided capacity, or a
    /// block's sequences produce more bytes than its declared original size.
    OutputOverflow,
    /// The compressed stream ends mid-header, mid-table, or mid-sequence.
    InputExhausted,
    /// On compression, the destination buffer cannot hold even the raw
    /// fallback encoding.
    CapacityExhausted,
}

impl ZyphraxError {
    /// Stable identifier string for each error kind.
    pub fn name(&self) -> &'static str {
        match self {
            ZyphraxError::InvalidMagic => "invalid_magic",
            ZyphraxError::InvalidBlockType => "invalid_block_type",
            ZyphraxError::InvalidCodeTable => "invalid_code_table",
            ZyphraxError::InvalidReference => "invalid_reference",
            ZyphraxError::OutputOverflow => "output_overflow",
            ZyphraxError::InputExhausted => "input_exhausted",
            ZyphraxError::CapacityExhausted => "capacity_exhausted",
        }
    }
}

impl fmt::Display for ZyphraxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ZyphraxError::InvalidMagic => "frame magic mismatch",
            ZyphraxError::InvalidBlockType => "unknown block type byte",
            ZyphraxError::InvalidCodeTable => "malformed Huffman code-length table",
            ZyphraxError::InvalidReference => "match offset outside emitted window",
            ZyphraxError::OutputOverflow => "output exceeds destination capacity",
            ZyphraxError::InputExhausted => "compressed stream truncated",
            ZyphraxError::CapacityExhausted => "destination too small for raw fallback",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ZyphraxError {}
