// config.rs — Compile-time configuration constants.
//
// Default knobs for the frame writer and the CLI. Format-level constants
// (magic, header layout, match limits) live next to the code that owns them:
// see frame/header.rs and lz77.rs.

/// Default compression level.
/// Levels steer the match finder's chain-walk budget only; the on-disk
/// format is identical at every level.
/// Can be overridden with the `-l` command-line flag.
pub const CLEVEL_DEFAULT: u32 = 3;

/// Maximum compression level. The frame header stores the level in 3 bits.
pub const CLEVEL_MAX: u32 = 7;

/// Default uncompressed block size (64 KiB).
/// Can be overridden with the `-B` command-line flag.
pub const BLOCK_SIZE_DEFAULT: u32 = 64 << 10;

/// Largest representable block size: the frame header stores the block size
/// as a 24-bit little-endian integer.
pub const BLOCK_SIZE_MAX: u32 = 0x00FF_FFFF;

/// Smallest accepted block size. Requests below this are clamped up.
pub const BLOCK_SIZE_MIN: u32 = 1;
