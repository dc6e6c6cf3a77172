//! Option value types
//!
//! This module defines the resolved value of a single option and the
//! finalized configuration snapshot produced by option processing.

use std::fmt;
use std::path::{Path, PathBuf};

/// Option names of the template table
///
/// Using these constants instead of string literals keeps the typed
/// accessors on [`ParsedOptions`] and the table in `cli::definitions` in sync.
pub mod names {
    pub const INPUT: &str = "input";
    pub const OUTPUT: &str = "output";
    pub const VERBOSE: &str = "verbose";
    pub const KEY: &str = "key";
    pub const VALUE: &str = "value";
    pub const HELP: &str = "help";
}

/// Resolved value of a single option
///
/// Value options resolve to `Text`, path options to `Path` (which may hold
/// bytes that are not UTF-8), flags and toggles to `Bool`.
/// Options that were never supplied are `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionValue {
    Text(String),
    Path(PathBuf),
    Bool(bool),
    #[default]
    Absent,
}

impl OptionValue {
    /// Borrow the text of a value option
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            OptionValue::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Get the state of a flag or toggle
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, OptionValue::Absent)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(text) => f.write_str(text),
            OptionValue::Path(path) => write!(f, "{}", path.display()),
            OptionValue::Bool(flag) => write!(f, "{}", flag),
            OptionValue::Absent => f.write_str("<absent>"),
        }
    }
}

/// Finalized configuration of one invocation
///
/// Holds exactly the options that were supplied on the command line, in the
/// order each was first supplied. Once handed out by `cli::process` it is
/// read-only: there are no public mutators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedOptions {
    values: Vec<(&'static str, OptionValue)>,
}

impl ParsedOptions {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a value; a repeated option keeps its first position but takes
    /// the new value
    pub(crate) fn set(&mut self, name: &'static str, value: OptionValue) {
        match self.values.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    /// Get the value of an option, `Absent` if it was not supplied
    pub fn get(&self, name: &str) -> &OptionValue {
        static ABSENT: OptionValue = OptionValue::Absent;
        self.values
            .iter()
            .find(|(existing, _)| *existing == name)
            .map_or(&ABSENT, |(_, value)| value)
    }

    /// Get the text of a value option
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).as_text()
    }

    /// Get the state of a flag or toggle, `false` if it was not supplied
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).as_bool().unwrap_or(false)
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.get(name).is_absent()
    }

    /// Iterate over the supplied options in the order they were first given
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &OptionValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Input file path, standard input when `None`
    pub fn input(&self) -> Option<&Path> {
        self.get(names::INPUT).as_path()
    }

    /// Output file path, standard output when `None`
    pub fn output(&self) -> Option<&Path> {
        self.get(names::OUTPUT).as_path()
    }

    pub fn verbose(&self) -> bool {
        self.flag(names::VERBOSE)
    }

    pub fn key(&self) -> Option<&str> {
        self.text(names::KEY)
    }

    pub fn value(&self) -> Option<&str> {
        self.text(names::VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> ParsedOptions {
        let mut options = ParsedOptions::new();
        options.set(names::INPUT, OptionValue::Path(PathBuf::from("in.txt")));
        options.set(names::VERBOSE, OptionValue::Bool(true));
        options.set(names::KEY, OptionValue::Text("sub_type".to_string()));
        options
    }

    #[test]
    fn test_unsupplied_option_is_absent() {
        let options = sample();
        assert!(options.get(names::OUTPUT).is_absent());
        assert_eq!(options.output(), None);
        assert_eq!(options.value(), None);
        assert!(!options.contains(names::OUTPUT));
    }

    #[test]
    fn test_typed_accessors() {
        let options = sample();
        assert_eq!(options.input(), Some(Path::new("in.txt")));
        assert!(options.verbose());
        assert_eq!(options.key(), Some("sub_type"));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_later_value_replaces_earlier() {
        let mut options = sample();
        options.set(names::VERBOSE, OptionValue::Bool(false));
        assert!(!options.verbose());
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_iter_keeps_first_seen_order() {
        let mut options = sample();
        options.set(names::INPUT, OptionValue::Path(PathBuf::from("other.txt")));
        options.set(names::VALUE, OptionValue::Text("exon".to_string()));

        let order: Vec<_> = options.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["input", "verbose", "key", "value"]);
        assert_eq!(options.input(), Some(Path::new("other.txt")));
    }

    #[rstest]
    #[case::text(OptionValue::Text("feature_type".to_string()), "feature_type")]
    #[case::path(OptionValue::Path(PathBuf::from("dir/in.txt")), "dir/in.txt")]
    #[case::enabled(OptionValue::Bool(true), "true")]
    #[case::disabled(OptionValue::Bool(false), "false")]
    #[case::absent(OptionValue::Absent, "<absent>")]
    fn test_value_display(#[case] value: OptionValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case::text_as_bool(OptionValue::Text("true".to_string()), None)]
    #[case::bool_as_bool(OptionValue::Bool(true), Some(true))]
    #[case::absent_as_bool(OptionValue::Absent, None)]
    fn test_as_bool(#[case] value: OptionValue, #[case] expected: Option<bool>) {
        assert_eq!(value.as_bool(), expected);
    }
}
