//! Line relay
//!
//! Copies the input stream to the output stream one line at a time.
//!
//! # Design
//!
//! [`LineReader`] wraps any `BufRead` and yields raw byte lines, terminator
//! included, so the relay never alters the data: `\r\n` endings, invalid
//! UTF-8 and a final line without a newline all pass through unchanged.
//!
//! # Memory Efficiency
//!
//! - Reads one line at a time
//! - Does not load the whole input into memory
//! - Memory usage is O(longest line), not O(input size)

use crate::types::CliError;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Iterator over the raw lines of a reader
///
/// # Examples
///
/// ```
/// use pipe_scaffold::io::LineReader;
///
/// let input: &[u8] = b"alpha\nbeta";
/// let lines: Vec<_> = LineReader::new(input).collect::<Result<_, _>>().unwrap();
/// assert_eq!(lines, vec![b"alpha\n".to_vec(), b"beta".to_vec()]);
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line_num: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
        }
    }

    /// Number of lines yielded so far
    pub fn line_num(&self) -> u64 {
        self.line_num
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Vec<u8>>;

    /// Read the next line, `None` at end of input
    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_num += 1;
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Relay every line of `input` to `output` unchanged
///
/// Each line is written as soon as it is read. The output is flushed at the
/// end so buffered write errors are reported rather than lost on drop.
///
/// # Returns
///
/// * `Ok(lines)` - number of lines relayed
/// * `Err(CliError::Io)` - reading or writing failed; nothing is retried
pub fn relay<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<u64, CliError> {
    let mut lines = LineReader::new(input);
    for line in lines.by_ref() {
        output.write_all(&line?)?;
    }
    output.flush()?;

    debug!(lines = lines.line_num(), "relay finished");
    Ok(lines.line_num())
}
