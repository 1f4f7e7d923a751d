//! Header-line transcripts and the normalized header map.
//!
//! A transcript is the ordered list of raw lines seen while fetching a
//! resource: a status line (`HTTP/1.1 200 OK`) followed by `Name: value`
//! lines, possibly repeated once per hop when redirects were followed.
//!
//! [`parse_header_lines`] walks such a transcript **backwards** and stops at
//! the first status line it meets, so only the final response block ends up
//! in the resulting [`Headers`] map. Within a header name, values are kept in
//! the order the backward walk found them (last line first).
use std::collections::BTreeMap;

use http::{HeaderMap, StatusCode, Version};

/// Lowercase header name to the list of values seen for it.
pub type Headers = BTreeMap<String, Vec<String>>;

/// Parses a raw header-line transcript into a [`Headers`] map.
///
/// Lines that are neither headers nor status lines are skipped.
pub fn parse_header_lines<S: AsRef<str>>(lines: &[S]) -> Headers {
    let mut values = Headers::new();

    for line in lines.iter().rev() {
        let line = line.as_ref();
        if let Some((name, value)) = split_header_line(line) {
            values
                .entry(name.to_ascii_lowercase())
                .or_default()
                .push(value.to_string());
        } else if is_status_line(line) {
            log::trace!("Stopping header scan at status line {:?}", line);
            break;
        } else {
            log::trace!("Skipping malformed header line {:?}", line);
        }
    }

    values
}

/// Builds a transcript for a single response head, as a client would have
/// recorded it: the status line first, then one `name: value` line per value.
///
/// Values that are not valid UTF-8 are converted lossily.
pub fn transcript(version: Version, status: StatusCode, headers: &HeaderMap) -> Vec<String> {
    let mut lines = Vec::with_capacity(headers.len() + 1);
    lines.push(format!("{:?} {}", version, status));

    for (name, value) in headers.iter() {
        lines.push(format!(
            "{}: {}",
            name.as_str(),
            String::from_utf8_lossy(value.as_bytes())
        ));
    }

    lines
}

/// Splits `Name: value` into its name and trimmed value.
///
/// The name is everything up to the first colon and must not be empty. The
/// value needs at least one character after the colon; surrounding whitespace
/// is trimmed, but an all-whitespace value keeps its last non-newline
/// character. Values spanning a line feed are rejected.
fn split_header_line(line: &str) -> Option<(&str, &str)> {
    let (name, rest) = line.split_once(':')?;
    if name.is_empty() {
        return None;
    }

    let value = rest
        .trim_start_matches(is_space)
        .trim_end_matches(is_space);

    if value.is_empty() {
        let (idx, c) = rest.char_indices().rev().find(|&(_, c)| c != '\n')?;
        return Some((name, &rest[idx..idx + c.len_utf8()]));
    }

    if value.contains('\n') {
        return None;
    }

    Some((name, value))
}

fn is_status_line(line: &str) -> bool {
    line.get(..5)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("HTTP/"))
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}
