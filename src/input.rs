//! Player input: parsing raw responses into commands, and the line-based
//! provider used by the console game.

use std::io::{self, BufRead};

use crate::game::{Command, InputError};

/// Parse one response line.
///
/// Matching is case-insensitive and ignores surrounding whitespace. A column
/// label must be written exactly as the integer prints (`"3"`, `"8"`, `"-1"`),
/// so `"03"` and `"+3"` are malformed. Labels no column carries are still
/// returned and rejected later as out of range.
pub fn parse_response(raw: &str, quit_token: &str) -> Result<Command, InputError> {
    let response = raw.trim();

    if response.eq_ignore_ascii_case(quit_token.trim()) {
        return Ok(Command::Quit);
    }

    match response.parse::<i64>() {
        Ok(label) if label.to_string() == response => Ok(Command::Drop { label }),
        _ => Err(InputError::Malformed(response.to_string())),
    }
}

/// Source of raw player responses, one per request.
pub trait InputProvider {
    /// Block until the next response is available. `None` means input ended.
    fn next_response(&mut self) -> io::Result<Option<String>>;
}

/// Reads one response per line from any buffered reader.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl<R: BufRead> InputProvider for LineInput<R> {
    fn next_response(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
