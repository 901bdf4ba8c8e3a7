//! Frame compression: header emission and block iteration.

use crate::block::compress_block;
use crate::error::ZyphraxError;
use crate::frame::header::{write_header, HEADER_SIZE};
use crate::frame::types::FrameParams;
use crate::lz77::MatchFinder;

/// Worst-case compressed frame size for a `src_size`-byte input.
///
/// Covers the frame header, per-block raw-fallback framing at the default
/// block size, and rounding slack. Block sizes below ~1 KiB can exceed
/// this bound through framing overhead alone; `compress` then reports
/// `CapacityExhausted` instead of writing past the destination.
#[inline]
pub fn compress_bound(src_size: usize) -> usize {
    src_size + src_size / 255 + 256
}

/// Compress `src` into `dst` as one complete frame.
///
/// Parameters are normalized (level and block size clamped into their
/// header ranges) before use. Returns the number of bytes written; the
/// empty input produces the bare 12-byte header.
pub fn compress(src: &[u8], dst: &mut [u8], params: &FrameParams) -> Result<usize, ZyphraxError> {
    let params = params.normalized();
    if dst.len() < HEADER_SIZE {
        return Err(ZyphraxError::CapacityExhausted);
    }
    write_header(dst, &params);
    let mut written = HEADER_SIZE;

    let mut mf = MatchFinder::new(params.level);
    for chunk in src.chunks(params.block_size as usize) {
        written += compress_block(&mut mf, chunk, &mut dst[written..])?;
    }
    Ok(written)
}

/// Convenience wrapper that allocates the bound and trims to fit.
pub fn compress_to_vec(src: &[u8], params: &FrameParams) -> Result<Vec<u8>, ZyphraxError> {
    let mut dst = vec![0u8; compress_bound(src.len())];
    let n = compress(src, &mut dst, params)?;
    dst.truncate(n);
    Ok(dst)
}
