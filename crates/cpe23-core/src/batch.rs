use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::{CpeRecord, DecodeError, decode};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of decoding one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based line number in the input.
    pub line: usize,
    /// The line with surrounding whitespace trimmed.
    pub input: String,
    pub result: Result<CpeRecord, DecodeError>,
}

/// Decode every non-blank line of a text file.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use cpe23_core::decode_file;
///
/// for entry in decode_file(Path::new("candidates.txt"))? {
///     match entry.result {
///         Ok(record) => println!("{}\n{}", entry.input, record),
///         Err(err) => println!("{}: {}", entry.input, err),
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode_file(path: &Path) -> Result<Vec<BatchEntry>, BatchError> {
    let file = File::open(path)?;
    decode_lines(BufReader::new(file))
}

/// Decode every non-blank line read from `reader`, in order.
///
/// A line that fails to decode is reported in its entry and never stops the
/// batch; only read failures abort. Invalid UTF-8 is replaced lossily and the
/// line is decoded like any other.
///
/// Blank lines produce no entry at all rather than an invalid-format entry,
/// so a trailing newline or spacing between candidates is not reported as a
/// failure. Line numbers still count them.
pub fn decode_lines<R: BufRead>(reader: R) -> Result<Vec<BatchEntry>, BatchError> {
    let mut entries = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let result = decode(input);
        if let Err(err) = &result {
            debug!(line = index + 1, error = %err, "batch line failed to decode");
        }
        entries.push(BatchEntry {
            line: index + 1,
            input: input.to_string(),
            result,
        });
    }
    Ok(entries)
}
