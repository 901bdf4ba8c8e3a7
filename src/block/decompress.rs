//! Block decoding: table rebuild, sequence decoding, match expansion.

use crate::bitio::BitReader;
use crate::error::ZyphraxError;
use crate::huffman::{parse_lengths, HuffmanDecoder, TABLE_BYTES};
use crate::seq::{read_extra, MATCH_LEN_BIAS, TOKEN_NIBBLE_MAX};

use super::compress::{BLOCK_COMPRESSED, BLOCK_HEADER_SIZE, BLOCK_RAW, TABLES_SIZE};

/// Decode one block from the front of `src` into the front of `dst`.
///
/// Returns `(consumed, produced)` byte counts so the frame driver can
/// advance both cursors. All validation is performed here: block type,
/// declared size against destination capacity, table well-formedness, and
/// per-match reference bounds.
pub fn decompress_block(src: &[u8], dst: &mut [u8]) -> Result<(usize, usize), ZyphraxError> {
    let Some(&block_type) = src.first() else {
        return Err(ZyphraxError::InputExhausted);
    };
    match block_type {
        BLOCK_RAW => decode_raw(src, dst),
        BLOCK_COMPRESSED => decode_compressed(src, dst),
        _ => Err(ZyphraxError::InvalidBlockType),
    }
}

fn decode_raw(src: &[u8], dst: &mut [u8]) -> Result<(usize, usize), ZyphraxError> {
    if src.len() < BLOCK_HEADER_SIZE {
        return Err(ZyphraxError::InputExhausted);
    }
    let n = read_le32(&src[1..5]) as usize;
    if src.len() < BLOCK_HEADER_SIZE + n {
        return Err(ZyphraxError::InputExhausted);
    }
    if dst.len() < n {
        return Err(ZyphraxError::OutputOverflow);
    }
    dst[..n].copy_from_slice(&src[BLOCK_HEADER_SIZE..BLOCK_HEADER_SIZE + n]);
    Ok((BLOCK_HEADER_SIZE + n, n))
}

fn decode_compressed(src: &[u8], dst: &mut [u8]) -> Result<(usize, usize), ZyphraxError> {
    let stream_start = BLOCK_HEADER_SIZE + TABLES_SIZE;
    if src.len() < stream_start {
        return Err(ZyphraxError::InputExhausted);
    }
    let orig_size = read_le32(&src[1..5]) as usize;
    if dst.len() < orig_size {
        return Err(ZyphraxError::OutputOverflow);
    }

    let tok = HuffmanDecoder::from_lengths(&parse_lengths(&src[5..5 + TABLE_BYTES]))?;
    let lit = HuffmanDecoder::from_lengths(&parse_lengths(
        &src[5 + TABLE_BYTES..5 + 2 * TABLE_BYTES],
    ))?;
    let off = HuffmanDecoder::from_lengths(&parse_lengths(
        &src[5 + 2 * TABLE_BYTES..stream_start],
    ))?;

    let mut br = BitReader::new(&src[stream_start..]);
    let mut emitted = 0usize;
    while emitted < orig_size {
        let token = tok.decode(&mut br)?;
        let t_ll = (token >> 4) as usize;
        let t_ml = (token & 0x0F) as usize;

        let mut lit_len = t_ll;
        if t_ll == TOKEN_NIBBLE_MAX {
            lit_len += read_extra(&mut br);
        }
        if emitted + lit_len > orig_size {
            return Err(ZyphraxError::OutputOverflow);
        }
        for _ in 0..lit_len {
            dst[emitted] = lit.decode(&mut br)?;
            emitted += 1;
        }
        if emitted == orig_size {
            break;
        }

        if t_ml == 0 {
            // A matchless sequence anywhere but block end means the stream
            // ran dry (the zero-filled tail decodes as empty sequences).
            return Err(ZyphraxError::InputExhausted);
        }

        let mut match_len = t_ml + MATCH_LEN_BIAS;
        let hi = off.decode(&mut br)? as usize;
        let lo = br.read_raw(8) as usize;
        if t_ml == TOKEN_NIBBLE_MAX {
            match_len += read_extra(&mut br);
        }
        let offset = (hi << 8) | lo;
        if offset == 0 || offset > emitted {
            return Err(ZyphraxError::InvalidReference);
        }
        if emitted + match_len > orig_size {
            return Err(ZyphraxError::OutputOverflow);
        }
        // Byte-by-byte forward copy: overlapping references (offset 1
        // repeating a single byte) must see their own freshly written
        // output.
        for _ in 0..match_len {
            dst[emitted] = dst[emitted - offset];
            emitted += 1;
        }
    }

    Ok((stream_start + br.consumed_bytes(), orig_size))
}

#[inline]
fn read_le32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}
