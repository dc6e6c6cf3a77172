//! Error types for option processing and stream handling
//!
//! # Error Categories
//!
//! - **Option errors** ([`OptionError`]): unknown options, missing or needless
//!   arguments, values outside an allowed set, values that look like another
//!   option, arguments that are not UTF-8 where text is required, trailing
//!   positional arguments. These are accumulated into
//!   [`ValidationErrors`] and reported together.
//! - **Resource errors**: a redirection file cannot be opened. Fatal and
//!   immediate, never accumulated.
//! - **I/O errors**: reading or writing a stream failed during the relay.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single problem found while scanning or validating the arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// A `--` token that names no declared option
    #[error("invalid option: {token}")]
    UnknownOption { token: String },

    /// A value option was the last token, leaving nothing to consume
    #[error("missing argument: --{option}")]
    MissingArgument { option: String },

    /// A value was attached (`--name=value`) to an option that takes none
    #[error("needless argument: {token}")]
    NeedlessArgument { token: String },

    /// The supplied value is not a member of the option's allowed set
    #[error("value '{value}' not permitted for option --{option}, must be one of '{}'", allowed.join(", "))]
    NotPermitted {
        option: String,
        value: String,
        /// Allowed values, sorted
        allowed: Vec<String>,
    },

    /// The consumed value is itself an option token, so the real value was
    /// most likely left out
    #[error("option '--{option}' is missing its value")]
    MissingValue { option: String },

    /// A token that is not valid UTF-8 where only text is accepted
    #[error("argument is not valid UTF-8: {token}")]
    NotUnicode {
        /// Lossy rendering of the token
        token: String,
    },

    /// The value of a text option is not valid UTF-8
    #[error("value of option --{option} is not valid UTF-8: {value}")]
    NotUnicodeValue {
        option: String,
        /// Lossy rendering of the value
        value: String,
    },

    /// A positional token; the template accepts none
    #[error("unexpected extra argument: {token}")]
    TrailingArgument { token: String },
}

impl OptionError {
    pub fn unknown_option(token: &str) -> Self {
        OptionError::UnknownOption {
            token: token.to_string(),
        }
    }

    pub fn missing_argument(option: &str) -> Self {
        OptionError::MissingArgument {
            option: option.to_string(),
        }
    }

    pub fn needless_argument(token: &str) -> Self {
        OptionError::NeedlessArgument {
            token: token.to_string(),
        }
    }

    /// Create a NotPermitted error, sorting the allowed set for display
    pub fn not_permitted(option: &str, value: &str, allowed: &[&str]) -> Self {
        let mut allowed: Vec<String> = allowed.iter().map(|v| v.to_string()).collect();
        allowed.sort();
        OptionError::NotPermitted {
            option: option.to_string(),
            value: value.to_string(),
            allowed,
        }
    }

    pub fn missing_value(option: &str) -> Self {
        OptionError::MissingValue {
            option: option.to_string(),
        }
    }

    pub fn not_unicode(token: &OsStr) -> Self {
        OptionError::NotUnicode {
            token: token.to_string_lossy().into_owned(),
        }
    }

    pub fn not_unicode_value(option: &str, value: &OsStr) -> Self {
        OptionError::NotUnicodeValue {
            option: option.to_string(),
            value: value.to_string_lossy().into_owned(),
        }
    }

    pub fn trailing_argument(token: &str) -> Self {
        OptionError::TrailingArgument {
            token: token.to_string(),
        }
    }
}

/// Every option error found in one invocation, in the order they were found
///
/// Never empty when returned from `cli::process`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<OptionError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: OptionError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<OptionError> {
        self.0
    }

    /// `Ok(())` when nothing was collected, the whole set otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a OptionError;
    type IntoIter = std::slice::Iter<'a, OptionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Top-level error of one invocation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// One or more option errors; the invocation never reaches the relay
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The `--input` file could not be opened for reading
    #[error("cannot open input file '{}': {message}", path.display())]
    OpenInput { path: PathBuf, message: String },

    /// The `--output` file could not be created or truncated
    #[error("cannot open output file '{}': {message}", path.display())]
    OpenOutput { path: PathBuf, message: String },

    /// Reading or writing a stream failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io {
            message: error.to_string(),
        }
    }
}

impl From<ValidationErrors> for CliError {
    fn from(errors: ValidationErrors) -> Self {
        CliError::Validation(errors)
    }
}

impl CliError {
    pub fn open_input(path: &Path, error: &std::io::Error) -> Self {
        CliError::OpenInput {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    pub fn open_output(path: &Path, error: &std::io::Error) -> Self {
        CliError::OpenOutput {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    /// One human-readable line per underlying error
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            CliError::Validation(errors) => errors.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}
