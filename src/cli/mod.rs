// CLI module
// Option definitions, argument processing and the invocation driver

pub mod definitions;
mod parser;
pub mod runner;

pub use definitions::{OptionDefinition, OptionKind, OptionTable, TEMPLATE_OPTIONS, TEMPLATE_TABLE};
pub use parser::{process_with, Outcome};
pub use runner::{run, Status};

use crate::types::ValidationErrors;
use std::ffi::OsStr;

/// Process arguments against the template's option table
///
/// Pure: prints nothing and never exits. The caller (normally [`run`]) decides
/// what to do with help text or errors.
///
/// # Returns
///
/// * `Ok(Outcome::Help(usage))` if `--help` was scanned
/// * `Ok(Outcome::Ready(options))` if every check passed
/// * `Err(errors)` with every problem found
pub fn process<S: AsRef<OsStr>>(args: &[S]) -> Result<Outcome, ValidationErrors> {
    process_with(&TEMPLATE_TABLE, args)
}
