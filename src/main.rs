//! Pipe Scaffold CLI
//!
//! Reads lines from standard input (or `--input FILE`) and writes them
//! unchanged to standard output (or `--output FILE`).
//!
//! # Usage
//!
//! ```bash
//! pipe-scaffold < in.txt > out.txt
//! pipe-scaffold --input in.txt --output out.txt --key feature_type --value exon
//! pipe-scaffold --help
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success, or `--help`
//! - 1: Option errors, unopenable file, or I/O error

use pipe_scaffold::cli;
use std::ffi::OsString;
use std::io;
use std::process;

fn main() {
    // File names need not be UTF-8, so arguments stay OS strings
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    // Streams are dropped inside run, so exiting here leaks nothing
    let status = cli::run(&args, stdin, stdout, &mut stderr);
    process::exit(status.code());
}
