//! Frame decompression: header validation and block iteration.

use crate::block::{decompress_block, BLOCK_COMPRESSED, BLOCK_HEADER_SIZE, BLOCK_RAW};
use crate::error::ZyphraxError;
use crate::frame::header::{read_header, read_le32, HEADER_SIZE};

/// Decompress a complete frame from `src` into `dst`.
///
/// Returns the number of bytes produced. Any format violation is fatal
/// for the whole call and nothing past `dst`'s length is ever written,
/// regardless of how malformed the input is.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, ZyphraxError> {
    // Header parameters are carried for writers; the decoder itself needs
    // only the magic check since every block declares its own size.
    read_header(src)?;

    let mut pos = HEADER_SIZE;
    let mut written = 0;
    while pos < src.len() {
        let (consumed, produced) = decompress_block(&src[pos..], &mut dst[written..])?;
        pos += consumed;
        written += produced;
    }
    Ok(written)
}

/// Convenience wrapper that sizes the output from the per-block declared
/// sizes as it walks the frame.
pub fn decompress_to_vec(src: &[u8]) -> Result<Vec<u8>, ZyphraxError> {
    let params = read_header(src)?;

    let mut out = Vec::new();
    let mut pos = HEADER_SIZE;
    while pos < src.len() {
        if src.len() - pos < BLOCK_HEADER_SIZE {
            return Err(ZyphraxError::InputExhausted);
        }
        // Reject unknown types before trusting their size field; a garbage
        // declared size must not drive the allocation below.
        if src[pos] != BLOCK_RAW && src[pos] != BLOCK_COMPRESSED {
            return Err(ZyphraxError::InvalidBlockType);
        }
        let orig_size = read_le32(src, pos + 1) as usize;
        // Bound the declared size before allocating: a raw block cannot
        // claim more bytes than the stream still holds, and no block may
        // exceed the frame's own block size.
        if src[pos] == BLOCK_RAW && orig_size > src.len() - pos - BLOCK_HEADER_SIZE {
            return Err(ZyphraxError::InputExhausted);
        }
        if orig_size > params.block_size as usize {
            return Err(ZyphraxError::OutputOverflow);
        }
        let written = out.len();
        out.resize(written + orig_size, 0);
        let (consumed, produced) = decompress_block(&src[pos..], &mut out[written..])?;
        out.truncate(written + produced);
        pos += consumed;
    }
    Ok(out)
}
