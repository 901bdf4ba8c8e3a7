//! Command-line front end: `zyphrax [-d] [-l LEVEL] [-B SIZE] <input> <output>`.
//!
//! Exit status is 0 on success and non-zero on any I/O or format error.
//! A one-line summary goes to stderr so stdout stays clean for pipelines.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{BLOCK_SIZE_DEFAULT, CLEVEL_DEFAULT};
use crate::frame::{compress_to_vec, decompress_to_vec, FrameParams};

#[derive(Debug, Parser)]
#[command(name = "zyphrax", version, about = "Block-structured lossless compressor")]
pub struct Args {
    /// Decompress instead of compress.
    #[arg(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Compression level (0-7).
    #[arg(short = 'l', long = "level", default_value_t = CLEVEL_DEFAULT)]
    pub level: u32,

    /// Uncompressed block size in bytes.
    #[arg(short = 'B', long = "block-size", default_value_t = BLOCK_SIZE_DEFAULT)]
    pub block_size: u32,

    /// Input file.
    pub input: PathBuf,

    /// Output file.
    pub output: PathBuf,
}

/// Run the tool; returns the process exit code.
pub fn run(args: Args) -> i32 {
    match execute(&args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("zyphrax: {err:#}");
            1
        }
    }
}

fn execute(args: &Args) -> Result<()> {
    let input = fs::read(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let output = if args.decompress {
        decompress_to_vec(&input)
            .with_context(|| format!("cannot decompress {}", args.input.display()))?
    } else {
        let params = FrameParams {
            level: args.level,
            block_size: args.block_size,
            checksum: false,
        };
        compress_to_vec(&input, &params)
            .with_context(|| format!("cannot compress {}", args.input.display()))?
    };

    fs::write(&args.output, &output)
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    if args.decompress {
        eprintln!(
            "{} : decoded {} bytes from {} compressed",
            args.input.display(),
            output.len(),
            input.len()
        );
    } else {
        let ratio = if input.is_empty() {
            100.0
        } else {
            output.len() as f64 * 100.0 / input.len() as f64
        };
        eprintln!(
            "{} : {:.2}% ({} => {} bytes)",
            args.input.display(),
            ratio,
            input.len(),
            output.len()
        );
    }
    Ok(())
}
