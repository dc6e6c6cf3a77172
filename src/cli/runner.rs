//! Invocation driver
//!
//! The only place that decides how an invocation ends: it runs option
//! processing, prints help or diagnostics, applies redirection, starts the
//! relay, and maps the result to an exit [`Status`]. Everything below it
//! returns `Result` values and never exits the process.

use crate::cli::{process, Outcome};
use crate::io::{relay, Streams};
use crate::types::{CliError, ParsedOptions};
use is_terminal::IsTerminal;
use std::ffi::OsStr;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Prefix of every diagnostic line
pub const ERROR_PREFIX: &str = "ERROR: ";

/// How an invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Data relayed, or help printed
    Success,
    /// Option errors, an unopenable file, or an I/O failure
    Failure,
}

impl Status {
    /// Process exit code
    pub fn code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
        }
    }
}

/// Run one invocation
///
/// `args` excludes the program name. `stdin` and `stdout` are the default
/// streams, used unless `--input`/`--output` redirect them. Help text and
/// diagnostics go to `stderr`, so `stdout` only ever carries relayed data.
///
/// Redirected files are owned by this call and closed before it returns, on
/// every path.
pub fn run<S, R, W, E>(args: &[S], stdin: R, stdout: W, stderr: &mut E) -> Status
where
    S: AsRef<OsStr>,
    R: BufRead,
    W: Write,
    E: Write,
{
    match invoke(args, stdin, stdout, stderr) {
        Ok(()) => Status::Success,
        Err(error) => {
            report(&error, stderr);
            Status::Failure
        }
    }
}

fn invoke<S, R, W, E>(args: &[S], stdin: R, stdout: W, stderr: &mut E) -> Result<(), CliError>
where
    S: AsRef<OsStr>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let options = match process(args)? {
        Outcome::Help(usage) => {
            stderr.write_all(usage.as_bytes())?;
            stderr.flush()?;
            return Ok(());
        }
        Outcome::Ready(options) => options,
    };

    if options.verbose() {
        init_logging();
    }
    log_options(&options);

    let mut streams = Streams::open(&options, stdin, stdout)?;
    let lines = relay(&mut streams.input, &mut streams.output)?;
    debug!(lines, "invocation finished");
    Ok(())
}

/// Install a stderr logger at DEBUG level
///
/// Colors only when stderr is a terminal, so redirected logs stay plain text.
/// A second call in the same process (tests run many invocations) keeps the
/// first subscriber.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(use_color(&std::io::stderr()))
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn use_color<T: IsTerminal>(stream: &T) -> bool {
    stream.is_terminal()
}

fn log_options(options: &ParsedOptions) {
    for (name, value) in options.iter() {
        info!("option {} {}", name, value);
    }
}

/// Write one prefixed line per error; a failing stderr has nowhere to report
fn report<E: Write>(error: &CliError, stderr: &mut E) {
    for line in error.diagnostics() {
        let _ = writeln!(stderr, "{}{}", ERROR_PREFIX, line);
    }
    let _ = stderr.flush();
}
