//! Pipe Scaffold Library
//! # Overview
//!
//! A starting point for Unix-pipeline tools: a declared vocabulary of long
//! options, fail-together validation, optional file redirection of
//! stdin/stdout, and a line-by-line passthrough to put real processing into.
//!
//! # Architecture
//!
//! - [`types`] - Option values, the parsed configuration, error types
//! - [`cli`] - Option table, argument processing, invocation driver:
//!   - [`cli::definitions`] - Static option definitions and usage text
//!   - [`cli::process`] - Scan and validate arguments
//!   - [`cli::run`] - Drive one invocation to an exit status
//! - [`io`] - Stream handles and the line relay
//!
//! # Invocation lifecycle
//!
//! 1. Scan the arguments; `--help` prints usage and ends successfully
//! 2. Validate; all errors are reported together, then the invocation fails
//! 3. Open redirection files; an unopenable file fails immediately
//! 4. Relay lines from input to output

pub mod cli;
pub mod io;
pub mod types;

pub use cli::{process, run, Outcome, Status};
pub use io::{relay, Streams};
pub use types::{CliError, OptionError, OptionValue, ParsedOptions, ValidationErrors};
