//! Streaming JSON line reader with iterator interface
//!
//! Provides a streaming iterator over load events from a line-oriented
//! input source. Delegates wire format concerns to the json_format module.
//!
//! # Design
//!
//! The reader pulls one line at a time from any [`BufRead`] source, skips
//! blank lines, and decodes each remaining line into a
//! [`LoadEvent`](crate::types::LoadEvent). Memory usage is O(1) per line,
//! not O(file size).
//!
//! # Error handling
//!
//! - Failure to open the input file is returned from [`JsonLineReader::open`]
//! - An I/O failure mid-stream is yielded as `Err(VelocityError::IoError)`;
//!   the pipeline treats it as fatal
//! - A decode failure is yielded as `Err(VelocityError::ParseError)` with
//!   the 1-based line number attached; the pipeline skips the line

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::io::json_format::decode_event;
use crate::types::{LoadEvent, VelocityError};

/// Streaming reader over JSON-encoded load events
///
/// Implements [`Iterator`], yielding `Result<LoadEvent, VelocityError>`
/// per non-blank input line.
///
/// # Examples
///
/// ```
/// use fund_loads_engine::io::JsonLineReader;
///
/// let input = r#"{"id":"1","customer_id":"100","load_amount":"$1.00","time":"2000-01-01T00:00:00Z"}"#;
/// let events: Vec<_> = JsonLineReader::new(input.as_bytes())
///     .filter_map(Result::ok)
///     .collect();
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug)]
pub struct JsonLineReader<R: BufRead> {
    lines: std::io::Lines<R>,
    line_num: u64,
}

impl JsonLineReader<BufReader<File>> {
    /// Open a file and prepare it for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns [`VelocityError::IoError`] with the path in the message if
    /// the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, VelocityError> {
        let file = File::open(path).map_err(|e| VelocityError::IoError {
            message: format!("failed to open '{}': {}", path.display(), e),
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonLineReader<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R) -> Self {
        JsonLineReader {
            lines: reader.lines(),
            line_num: 0,
        }
    }
}

impl<R: BufRead> Iterator for JsonLineReader<R> {
    type Item = Result<LoadEvent, VelocityError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_num += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(decode_event(&line).map_err(|e| e.at_line(self.line_num)));
        }
    }
}
