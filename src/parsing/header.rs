//! Recognizes the line that starts a message.
//!
//! Format: `[DD/MM/YYYY, HH:MM:SS] Sender: Body`. The colon after the sender
//! may be followed by spaces and invisible marks before the body starts.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use super::sanitize::INVISIBLE_CLASS;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^\[(\d{{2}})/(\d{{2}})/(\d{{4}}), (\d{{2}}):(\d{{2}}):(\d{{2}})\] ([^:]+):[{INVISIBLE_CLASS}\s]*(.*)$"
    );
    Regex::new(&pattern).expect("header pattern is valid")
});

/// Fields extracted from a message header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    /// Day of month as written (two digits).
    pub day: &'a str,
    /// Month as written (two digits).
    pub month: &'a str,
    /// Four-digit year.
    pub year: &'a str,
    /// `HH:MM:SS` as written.
    pub time: &'a str,
    /// Sender exactly as captured, untrimmed.
    pub sender: &'a str,
    /// Text after the colon and any following whitespace/invisible run.
    pub body: &'a str,
}

impl HeaderLine<'_> {
    /// Builds the local timestamp, or `None` for impossible dates/times.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            self.year.parse().ok()?,
            self.month.parse().ok()?,
            self.day.parse().ok()?,
        )?;
        let time = NaiveTime::parse_from_str(self.time, "%H:%M:%S").ok()?;
        Some(date.and_time(time))
    }
}

/// Matches a sanitized line against the header pattern.
///
/// Returns `None` for continuation lines and noise.
///
/// ```rust
/// use wa_export::parsing::header::match_header;
///
/// let header = match_header("[26/06/2024, 10:30:00] You: Hello").unwrap();
/// assert_eq!(header.sender, "You");
/// assert_eq!(header.body, "Hello");
/// assert!(match_header("just some text").is_none());
/// ```
pub fn match_header(line: &str) -> Option<HeaderLine<'_>> {
    let caps = HEADER_RE.captures(line)?;
    let get = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let time_start = caps.get(4)?.start();
    let time_end = caps.get(6)?.end();

    Some(HeaderLine {
        day: get(1),
        month: get(2),
        year: get(3),
        time: &line[time_start..time_end],
        sender: get(7),
        body: get(8),
    })
}

/// Returns `true` if the line starts a new message.
pub fn is_header(line: &str) -> bool {
    HEADER_RE.is_match(line)
}
