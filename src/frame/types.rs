//! Frame parameter types.

use crate::config::{BLOCK_SIZE_DEFAULT, BLOCK_SIZE_MAX, BLOCK_SIZE_MIN, CLEVEL_DEFAULT, CLEVEL_MAX};

/// User-facing frame configuration.
///
/// `level` is a parser-quality hint only: it scales the match finder's
/// chain budget and never changes the on-disk format. `checksum` is a
/// reserved flag: it is carried in the header but alters no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameParams {
    /// Compression level, 0–7.
    pub level: u32,
    /// Target uncompressed bytes per block, 24-bit range.
    pub block_size: u32,
    /// Reserved checksum flag; parsed and preserved, never acted on.
    pub checksum: bool,
}

impl Default for FrameParams {
    fn default() -> Self {
        FrameParams {
            level: CLEVEL_DEFAULT,
            block_size: BLOCK_SIZE_DEFAULT,
            checksum: false,
        }
    }
}

impl FrameParams {
    /// Clamp all fields into their representable ranges. Out-of-range
    /// requests are normalized rather than rejected, matching the header's
    /// storage widths (3-bit level, 24-bit block size).
    pub fn normalized(&self) -> FrameParams {
        FrameParams {
            level: self.level.min(CLEVEL_MAX),
            block_size: self.block_size.clamp(BLOCK_SIZE_MIN, BLOCK_SIZE_MAX),
            checksum: self.checksum,
        }
    }
}
