//! Argument scanner and validator
//!
//! Turns raw arguments into a [`ParsedOptions`] snapshot without touching any
//! stream or exiting the process. All problems are collected into one
//! [`ValidationErrors`] set instead of stopping at the first.
//!
//! # Phases
//!
//! 1. **Scan**: walk the tokens left to right, resolving `--name`,
//!    `--name=value` and `--no-name` against the table. `--help` ends the scan
//!    immediately with [`Outcome::Help`], whatever came before it.
//! 2. **Validate**: always runs, even after scan errors, in this order:
//!    allowed-value sets, values that look like options, trailing tokens.
//!    Errors within each check follow the order options were first given.

use crate::cli::definitions::{OptionDefinition, OptionKind, OptionTable, LONG_PREFIX};
use crate::types::{OptionError, OptionValue, ParsedOptions, ValidationErrors};
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::debug;

/// Result of a successful processing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--help` was seen; carries the usage text to print
    Help(String),
    /// Every check passed
    Ready(ParsedOptions),
}

/// Process arguments (program name excluded) against a table
///
/// Arguments are OS strings, so path options accept file names that are not
/// valid UTF-8. Anywhere else such a token is reported as an error.
///
/// # Returns
///
/// * `Ok(Outcome::Help(usage))` as soon as the help option is scanned
/// * `Ok(Outcome::Ready(options))` when no error was found
/// * `Err(errors)` with every error found, in order
pub fn process_with<S: AsRef<OsStr>>(
    table: &OptionTable,
    args: &[S],
) -> Result<Outcome, ValidationErrors> {
    let mut scan = Scan::new();

    let mut tokens = args.iter().map(AsRef::<OsStr>::as_ref);
    while let Some(raw) = tokens.next() {
        let Some(token) = raw.to_str() else {
            scan.errors.push(OptionError::not_unicode(raw));
            continue;
        };

        if token == LONG_PREFIX {
            // `--` ends option scanning
            for rest in tokens.by_ref() {
                match rest.to_str() {
                    Some(rest) => scan.positional.push(rest.to_string()),
                    None => scan.errors.push(OptionError::not_unicode(rest)),
                }
            }
            break;
        }

        let Some(body) = token.strip_prefix(LONG_PREFIX) else {
            scan.positional.push(token.to_string());
            continue;
        };

        let (name, attached) = match body.split_once('=') {
            Some((name, value)) => (name, Some(OsStr::new(value))),
            None => (body, None),
        };

        if let Some(definition) = table.find(name) {
            match definition.kind {
                OptionKind::Help if attached.is_none() => {
                    debug!("help requested, skipping remaining arguments");
                    return Ok(Outcome::Help(table.render_usage()));
                }
                OptionKind::Value { .. } | OptionKind::Path { .. } => {
                    match attached.or_else(|| tokens.next()) {
                        Some(value) => scan.record_value(definition, value),
                        None => scan
                            .errors
                            .push(OptionError::missing_argument(definition.name)),
                    }
                }
                OptionKind::Flag | OptionKind::Toggle if attached.is_none() => {
                    scan.options.set(definition.name, OptionValue::Bool(true));
                }
                _ => scan.errors.push(OptionError::needless_argument(token)),
            }
        } else if let Some(definition) = table.find_negated(name) {
            if attached.is_none() {
                scan.options.set(definition.name, OptionValue::Bool(false));
            } else {
                scan.errors.push(OptionError::needless_argument(token));
            }
        } else {
            scan.errors.push(OptionError::unknown_option(token));
        }
    }

    debug!(
        options = scan.options.len(),
        positional = scan.positional.len(),
        errors = scan.errors.len(),
        "scan finished"
    );

    scan.validate(table)
}

/// Mutable state of one scan; never escapes `process_with`
struct Scan {
    options: ParsedOptions,
    positional: Vec<String>,
    errors: ValidationErrors,
}

impl Scan {
    fn new() -> Self {
        Scan {
            options: ParsedOptions::new(),
            positional: Vec::new(),
            errors: ValidationErrors::new(),
        }
    }

    fn record_value(&mut self, definition: &OptionDefinition, value: &OsStr) {
        let resolved = match definition.kind {
            OptionKind::Path { .. } => OptionValue::Path(PathBuf::from(value)),
            _ => match value.to_str() {
                Some(text) => OptionValue::Text(text.to_string()),
                None => {
                    self.errors
                        .push(OptionError::not_unicode_value(definition.name, value));
                    return;
                }
            },
        };
        self.options.set(definition.name, resolved);
    }

    fn validate(mut self, table: &OptionTable) -> Result<Outcome, ValidationErrors> {
        // Values that look like an option are left to the missing-value check
        for definition in table.options {
            let (Some(allowed), Some(value)) =
                (definition.allowed, self.options.text(definition.name))
            else {
                continue;
            };
            if value.starts_with(LONG_PREFIX) {
                continue;
            }
            if !allowed.iter().any(|candidate| *candidate == value) {
                self.errors
                    .push(OptionError::not_permitted(definition.name, value, allowed));
            }
        }

        // A value starting with the prefix almost always means the real value
        // was left out and the next option got consumed in its place
        for (name, value) in self.options.iter() {
            let missing = match value {
                OptionValue::Text(text) => text.starts_with(LONG_PREFIX),
                OptionValue::Path(path) => path
                    .as_os_str()
                    .as_encoded_bytes()
                    .starts_with(LONG_PREFIX.as_bytes()),
                OptionValue::Bool(_) => false,
                OptionValue::Absent => true,
            };
            if missing {
                self.errors.push(OptionError::missing_value(name));
            }
        }

        for token in &self.positional {
            self.errors.push(OptionError::trailing_argument(token));
        }

        self.errors.into_result()?;
        Ok(Outcome::Ready(self.options))
    }
}
