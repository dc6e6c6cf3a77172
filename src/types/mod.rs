//! Types module
//!
//! Contains the data structures shared by option processing and the relay:
//! - `option`: resolved option values and the parsed configuration snapshot
//! - `error`: option errors, the accumulated error set, invocation errors

pub mod error;
pub mod option;

pub use error::{CliError, OptionError, ValidationErrors};
pub use option::{names, OptionValue, ParsedOptions};
