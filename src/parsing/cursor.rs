//! Forward cursor over the lines of an export.
//!
//! The cursor has two states: scanning for the next header, and collecting
//! the continuation lines of the message that header started. Collection
//! stops *before* the next header, so that line is still available to the
//! following scan.

use std::iter::Peekable;
use std::str::Lines;

use tracing::trace;

use super::header::{HeaderLine, is_header, match_header};
use super::sanitize::strip_leading_invisible;

/// A message header together with its assembled body.
///
/// The body still contains any invisible characters that appeared after the
/// leading run of each line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage<'a> {
    /// Parsed header fields.
    pub header: HeaderLine<'a>,
    /// Inline body plus continuation lines, joined with `\n`.
    pub body: String,
    /// 1-based line number of the header.
    pub start_line: usize,
    /// Physical lines consumed, header included.
    pub line_count: usize,
}

/// Restartable forward cursor over export lines.
///
/// Lines are split on `\n`; a trailing `\r` is dropped and a newline at the
/// very end of the text does not produce an extra empty line.
///
/// ```rust
/// use wa_export::parsing::LineCursor;
///
/// let text = "[01/02/2024, 09:00:00] Alice: first\nsecond\n[01/02/2024, 09:01:00] Bob: hi";
/// let raws: Vec<_> = LineCursor::new(text).collect();
///
/// assert_eq!(raws.len(), 2);
/// assert_eq!(raws[0].body, "first\nsecond");
/// assert_eq!(raws[0].line_count, 2);
/// assert_eq!(raws[1].start_line, 3);
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Peekable<Lines<'a>>,
    consumed: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor positioned before the first line.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().peekable(),
            consumed: 0,
        }
    }

    /// Number of physical lines consumed so far.
    pub fn lines_consumed(&self) -> usize {
        self.consumed
    }

    /// Returns `true` once every line has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.lines.peek().is_none()
    }

    /// Returns the header on the next line without consuming it.
    pub fn peek_header(&mut self) -> Option<HeaderLine<'a>> {
        let line = self.lines.peek().copied()?;
        match_header(strip_leading_invisible(line))
    }

    /// Consumes and returns the next line with its leading invisible run removed.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.consumed += 1;
        Some(strip_leading_invisible(line))
    }

    /// Appends continuation lines to `body` until the next header or the end
    /// of input, returning how many lines were taken.
    ///
    /// Each taken line is appended as `"\n" + line`; whitespace-only lines
    /// are appended as a bare `"\n"`.
    pub fn take_continuation(&mut self, body: &mut String) -> usize {
        let mut taken = 0;

        while let Some(&line) = self.lines.peek() {
            let line = strip_leading_invisible(line);
            if is_header(line) {
                break;
            }

            body.push('\n');
            if !line.trim().is_empty() {
                body.push_str(line);
            }

            self.lines.next();
            self.consumed += 1;
            taken += 1;
        }

        taken
    }

    /// Scans to the next header and collects its message.
    ///
    /// Lines before the first header are noise and are skipped.
    pub fn next_message(&mut self) -> Option<RawMessage<'a>> {
        loop {
            let line = self.next_line()?;
            let start_line = self.consumed;

            let Some(header) = match_header(line) else {
                if !line.trim().is_empty() {
                    trace!(line = start_line, "skipping line outside any message");
                }
                continue;
            };

            let mut body = header.body.to_string();
            let continuation = self.take_continuation(&mut body);

            return Some(RawMessage {
                header,
                body,
                start_line,
                line_count: continuation + 1,
            });
        }
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = RawMessage<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_message()
    }
}
