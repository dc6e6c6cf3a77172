//! Stream handles of one invocation
//!
//! The input and output handles default to whatever the caller passes in
//! (normally locked stdin/stdout) and are replaced by files when `--input` or
//! `--output` is given. They are plain values owned by [`Streams`]; nothing
//! process-wide is rebound, and files are closed when the handles drop.

use crate::types::{CliError, ParsedOptions};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use tracing::debug;

/// Input handle: the caller's default reader or a redirected file
#[derive(Debug)]
pub enum InputStream<R> {
    Default(R),
    File(BufReader<File>),
}

impl<R: BufRead> Read for InputStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputStream::Default(reader) => reader.read(buf),
            InputStream::File(reader) => reader.read(buf),
        }
    }
}

impl<R: BufRead> BufRead for InputStream<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputStream::Default(reader) => reader.fill_buf(),
            InputStream::File(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputStream::Default(reader) => reader.consume(amt),
            InputStream::File(reader) => reader.consume(amt),
        }
    }
}

/// Output handle: the caller's default writer or a redirected file
#[derive(Debug)]
pub enum OutputStream<W> {
    Default(W),
    File(BufWriter<File>),
}

impl<W: Write> Write for OutputStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputStream::Default(writer) => writer.write(buf),
            OutputStream::File(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputStream::Default(writer) => writer.flush(),
            OutputStream::File(writer) => writer.flush(),
        }
    }
}

/// The finalized pair of handles handed to the relay
#[derive(Debug)]
pub struct Streams<R, W> {
    pub input: InputStream<R>,
    pub output: OutputStream<W>,
}

impl<R: BufRead, W: Write> Streams<R, W> {
    /// Apply the redirections requested in `options`
    ///
    /// The input file is opened first, so a missing input never truncates an
    /// existing output file.
    ///
    /// # Errors
    ///
    /// * `CliError::OpenInput` if the input file cannot be opened for reading
    /// * `CliError::OpenOutput` if the output file cannot be created
    pub fn open(options: &ParsedOptions, stdin: R, stdout: W) -> Result<Self, CliError> {
        let input = match options.input() {
            Some(path) => {
                let file = File::open(path).map_err(|e| CliError::open_input(path, &e))?;
                debug!(path = %path.display(), "reading input from file");
                InputStream::File(BufReader::new(file))
            }
            None => InputStream::Default(stdin),
        };

        let output = match options.output() {
            Some(path) => {
                let file = File::create(path).map_err(|e| CliError::open_output(path, &e))?;
                debug!(path = %path.display(), "writing output to file");
                OutputStream::File(BufWriter::new(file))
            }
            None => OutputStream::Default(stdout),
        };

        Ok(Streams { input, output })
    }
}
