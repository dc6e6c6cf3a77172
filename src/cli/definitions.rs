//! Option definition table
//!
//! Every option the tool recognizes is declared once, statically, as an
//! [`OptionDefinition`]. The scanner, the validator and the usage text are
//! all derived from the same [`OptionTable`].
//!
//! To build a new tool from this template, add entries to
//! [`TEMPLATE_OPTIONS`] (and a typed accessor on `ParsedOptions` if needed).

use crate::types::names;
use clap::{Arg, ArgAction, Command};

/// Long-option prefix; the only prefix the scanner recognizes
pub const LONG_PREFIX: &str = "--";

/// Prefix of the disabling spelling of a toggle (`--no-verbose`)
pub const NEGATION_PREFIX: &str = "no-";

/// How an option consumes arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Consumes the next token (or the text after `=`) as its value
    Value {
        /// Placeholder shown in the usage text, e.g. `KEY`
        placeholder: &'static str,
    },
    /// Like `Value`, but the token is kept as a path and need not be UTF-8
    Path {
        /// Placeholder shown in the usage text, e.g. `FILENAME`
        placeholder: &'static str,
    },
    /// `--name` sets true
    Flag,
    /// `--name` sets true, `--no-name` sets false
    Toggle,
    /// Prints usage and ends the invocation successfully
    Help,
}

/// Static description of one recognized option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefinition {
    /// Long name without the prefix
    pub name: &'static str,
    pub kind: OptionKind,
    /// One-line description for the usage text
    pub help: &'static str,
    /// Closed set of permitted values, checked after parsing
    pub allowed: Option<&'static [&'static str]>,
}

impl OptionDefinition {
    pub const fn value(name: &'static str, placeholder: &'static str, help: &'static str) -> Self {
        OptionDefinition {
            name,
            kind: OptionKind::Value { placeholder },
            help,
            allowed: None,
        }
    }

    pub const fn path(name: &'static str, placeholder: &'static str, help: &'static str) -> Self {
        OptionDefinition {
            name,
            kind: OptionKind::Path { placeholder },
            help,
            allowed: None,
        }
    }

    pub const fn flag(name: &'static str, help: &'static str) -> Self {
        OptionDefinition {
            name,
            kind: OptionKind::Flag,
            help,
            allowed: None,
        }
    }

    pub const fn toggle(name: &'static str, help: &'static str) -> Self {
        OptionDefinition {
            name,
            kind: OptionKind::Toggle,
            help,
            allowed: None,
        }
    }

    pub const fn help(name: &'static str, help: &'static str) -> Self {
        OptionDefinition {
            name,
            kind: OptionKind::Help,
            help,
            allowed: None,
        }
    }

    /// Restrict the option to a closed set of values
    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    pub fn takes_value(&self) -> bool {
        matches!(
            self.kind,
            OptionKind::Value { .. } | OptionKind::Path { .. }
        )
    }

    /// Build the clap argument used to render this option in the usage text
    fn to_arg(self) -> Arg {
        let arg = Arg::new(self.name).long(self.name);
        match self.kind {
            OptionKind::Value { placeholder } | OptionKind::Path { placeholder } => {
                let help = match self.allowed {
                    Some(allowed) => {
                        let mut sorted = allowed.to_vec();
                        sorted.sort_unstable();
                        format!("{} [{}]", self.help, sorted.join(", "))
                    }
                    None => self.help.to_string(),
                };
                arg.value_name(placeholder).action(ArgAction::Set).help(help)
            }
            OptionKind::Toggle => arg.action(ArgAction::SetTrue).help(format!(
                "{} (disable with {}{}{})",
                self.help, LONG_PREFIX, NEGATION_PREFIX, self.name
            )),
            OptionKind::Flag | OptionKind::Help => arg.action(ArgAction::SetTrue).help(self.help),
        }
    }
}

/// The full vocabulary of one tool
#[derive(Debug, Clone, Copy)]
pub struct OptionTable {
    /// Program name shown in the usage line
    pub program: &'static str,
    pub options: &'static [OptionDefinition],
}

impl OptionTable {
    /// Look up an option by its exact long name
    pub fn find(&self, name: &str) -> Option<&'static OptionDefinition> {
        self.options.iter().find(|definition| definition.name == name)
    }

    /// Look up the toggle disabled by a `no-<name>` spelling
    pub fn find_negated(&self, name: &str) -> Option<&'static OptionDefinition> {
        let target = name.strip_prefix(NEGATION_PREFIX)?;
        self.find(target)
            .filter(|definition| definition.kind == OptionKind::Toggle)
    }

    /// Render the usage synopsis: a usage line followed by one line per option
    pub fn render_usage(&self) -> String {
        let mut command = Command::new(self.program)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .disable_help_subcommand(true);
        for definition in self.options {
            command = command.arg(definition.to_arg());
        }
        command.render_help().to_string()
    }
}

const KEY_VALUES: &[&str] = &["feature_type", "sub_type"];

/// Options of the pipeline template
pub const TEMPLATE_OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::path(
        names::INPUT,
        "FILENAME",
        "Input file name - default is standard input",
    ),
    OptionDefinition::path(
        names::OUTPUT,
        "FILENAME",
        "Output file name - default is standard output",
    ),
    OptionDefinition::toggle(names::VERBOSE, "Log progress to standard error"),
    OptionDefinition::value(names::KEY, "KEY", "Search key").one_of(KEY_VALUES),
    OptionDefinition::value(names::VALUE, "VALUE", "Search value"),
    OptionDefinition::help(names::HELP, "Output help message and exit"),
];

/// The template's table, named after the package
pub const TEMPLATE_TABLE: OptionTable = OptionTable {
    program: env!("CARGO_PKG_NAME"),
    options: TEMPLATE_OPTIONS,
};
