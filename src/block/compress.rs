//! Block compression: greedy parse → sequence list → entropy coding.
//!
//! Per block the compressor runs the match finder over the input, packs the
//! resulting sequences through three canonical Huffman tables (tokens,
//! literals, offset high bytes), and keeps whichever of the compressed and
//! raw encodings is smaller. The raw fallback caps every block at
//! `src_size + 5` output bytes.
//!
//! Compressed block layout:
//!
//! ```text
//! [type = 1][orig_size: u32 LE][token lens: 128 B][literal lens: 128 B]
//! [offset-high lens: 128 B][bit-packed sequence stream, byte-aligned end]
//! ```
//!
//! Per sequence the bit stream holds: token code, literal-length extras,
//! one literal code per literal byte, then for matches the offset-high
//! code, eight raw low-offset bits, and match-length extras. The stream is
//! flushed to a byte boundary once per block, never between sequences.

use crate::bitio::BitWriter;
use crate::error::ZyphraxError;
use crate::huffman::{HuffmanEncoder, ALPHABET_SIZE, TABLE_BYTES};
use crate::lz77::MatchFinder;
use crate::seq::{write_extra, Sequence, MATCH_LEN_BIAS, TOKEN_NIBBLE_MAX};

/// Type byte of a raw (stored) block.
pub const BLOCK_RAW: u8 = 0;

/// Type byte of an entropy-coded block.
pub const BLOCK_COMPRESSED: u8 = 1;

/// Block framing: type byte plus 32-bit little-endian original size.
pub const BLOCK_HEADER_SIZE: usize = 5;

/// Serialized size of the three code-length tables.
pub const TABLES_SIZE: usize = 3 * TABLE_BYTES;

/// Compress one block of at most 2²⁴−1 bytes into `dst`.
///
/// Returns the number of bytes written. The match-finder state is reset on
/// entry, so a caller may reuse one allocation across blocks.
pub fn compress_block(
    mf: &mut MatchFinder,
    src: &[u8],
    dst: &mut [u8],
) -> Result<usize, ZyphraxError> {
    debug_assert!(!src.is_empty());
    debug_assert!(src.len() <= 0x00FF_FFFF);
    mf.reset();

    // Conservative sequence bound: one match per four input bytes plus
    // slack for the literal tail. Exceeding it abandons the parse.
    let max_seqs = src.len() / 4 + 256;
    let mut seqs: Vec<Sequence> = Vec::new();

    let mut pos = 0;
    let mut lit_start = 0;
    while pos < src.len() {
        match mf.find_best_match(src, pos) {
            Some(m) => {
                if seqs.len() == max_seqs {
                    return store_raw(src, dst);
                }
                seqs.push(Sequence {
                    lit_start,
                    lit_len: pos - lit_start,
                    offset: m.offset,
                    match_len: m.length,
                });
                pos += m.length as usize;
                lit_start = pos;
            }
            None => pos += 1,
        }
    }
    // Terminal literal-only sequence for the unmatched tail. A block that
    // ends exactly on a match has no terminal sequence; the decoder's
    // output count stops it at the same point.
    if lit_start < src.len() {
        if seqs.len() == max_seqs {
            return store_raw(src, dst);
        }
        seqs.push(Sequence {
            lit_start,
            lit_len: src.len() - lit_start,
            offset: 0,
            match_len: 0,
        });
    }

    // Frequency pass over the three alphabets.
    let mut tok_freq = [0u32; ALPHABET_SIZE];
    let mut lit_freq = [0u32; ALPHABET_SIZE];
    let mut off_freq = [0u32; ALPHABET_SIZE];
    for s in &seqs {
        tok_freq[s.token() as usize] += 1;
        for &b in &src[s.lit_start..s.lit_start + s.lit_len] {
            lit_freq[b as usize] += 1;
        }
        if s.match_len > 0 {
            off_freq[(s.offset >> 8) as usize] += 1;
        }
    }

    let tok = HuffmanEncoder::from_freqs(&tok_freq);
    let lit = HuffmanEncoder::from_freqs(&lit_freq);
    let off = HuffmanEncoder::from_freqs(&off_freq);

    // Not enough room to even attempt the compressed form.
    let stream_start = BLOCK_HEADER_SIZE + TABLES_SIZE;
    if dst.len() < stream_start {
        return store_raw(src, dst);
    }

    dst[0] = BLOCK_COMPRESSED;
    dst[1..5].copy_from_slice(&(src.len() as u32).to_le_bytes());
    tok.serialize_lengths(&mut dst[5..5 + TABLE_BYTES]);
    lit.serialize_lengths(&mut dst[5 + TABLE_BYTES..5 + 2 * TABLE_BYTES]);
    off.serialize_lengths(&mut dst[5 + 2 * TABLE_BYTES..stream_start]);

    let mut bw = BitWriter::new(&mut dst[stream_start..]);
    for s in &seqs {
        let t = s.token() as usize;
        bw.put_code(tok.codes[t], tok.lens[t] as u32);
        if s.lit_len >= TOKEN_NIBBLE_MAX {
            write_extra(&mut bw, s.lit_len - TOKEN_NIBBLE_MAX);
        }
        for &b in &src[s.lit_start..s.lit_start + s.lit_len] {
            bw.put_code(lit.codes[b as usize], lit.lens[b as usize] as u32);
        }
        if s.match_len > 0 {
            let hi = (s.offset >> 8) as usize;
            bw.put_code(off.codes[hi], off.lens[hi] as u32);
            bw.put_raw((s.offset & 0xFF) as u32, 8);
            let biased = s.match_len as usize - MATCH_LEN_BIAS;
            if biased >= TOKEN_NIBBLE_MAX {
                write_extra(&mut bw, biased - TOKEN_NIBBLE_MAX);
            }
        }
    }
    bw.flush();
    let overflowed = bw.overflowed();
    let total = stream_start + bw.written();

    // Keep the compressed form only when strictly smaller than raw storage.
    if overflowed || total >= BLOCK_HEADER_SIZE + src.len() {
        return store_raw(src, dst);
    }
    Ok(total)
}

/// Emit the raw encoding: `[type = 0][orig_size: u32 LE][bytes]`.
fn store_raw(src: &[u8], dst: &mut [u8]) -> Result<usize, ZyphraxError> {
    let need = BLOCK_HEADER_SIZE + src.len();
    if dst.len() < need {
        return Err(ZyphraxError::CapacityExhausted);
    }
    dst[0] = BLOCK_RAW;
    dst[1..5].copy_from_slice(&(src.len() as u32).to_le_bytes());
    dst[5..need].copy_from_slice(src);
    Ok(need)
}
