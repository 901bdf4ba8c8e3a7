//! Binary entry point for the `zyphrax` command-line tool.

use clap::Parser;
use zyphrax::cli::{run, Args};

fn main() {
    let args = Args::parse();
    std::process::exit(run(args));
}
