//! Author and committer lines.
//!
//! A person line looks like `author Jane Doe <jane@example.com> 1609459200 +0300`. Names and
//! emails may contain spaces, so every field is located on its own rather than by splitting on
//! whitespace.
use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};

/// Which header line a [`PersonInfo`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Author,
    Committer,
}

impl Role {
    /// Word used in front of `timestamp:` when rendering.
    pub fn label(self) -> &'static str {
        match self {
            Role::Author => "original",
            Role::Committer => "commit",
        }
    }
}

/// A decoded author or committer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInfo {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Seconds since the Unix epoch, in UTC.
    pub epoch_seconds: i64,
    /// Zone offset as written, e.g. `300` for `+0300` and `-700` for `-0700`.
    pub zone_offset: i32,
    /// `epoch_seconds` shifted into the recorded zone.
    pub time: DateTime<FixedOffset>,
}

impl PersonInfo {
    /// Parse a full `author ...` or `committer ...` line.
    pub fn parse(line: &str) -> Result<Self> {
        let malformed = || Error::MalformedPersonLine(line.to_owned());

        let (role, rest) = match line.split_once(' ') {
            Some(("author", rest)) => (Role::Author, rest),
            Some(("committer", rest)) => (Role::Committer, rest),
            _ => return Err(malformed()),
        };

        let name = rest.find(" <").map(|i| &rest[..i]).ok_or_else(malformed)?;
        let email = email(rest).ok_or_else(malformed)?;
        let (epoch_seconds, epoch_end) = epoch_seconds(rest).ok_or_else(malformed)?;
        let (zone_offset, offset) = zone_offset(&rest[epoch_end..]).ok_or_else(malformed)?;
        let time = DateTime::from_timestamp(epoch_seconds, 0)
            .ok_or_else(malformed)?
            .with_timezone(&offset);

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            epoch_seconds,
            zone_offset,
            time,
        })
    }

    /// `YYYY-MM-DD HH:MM:SS+HH:MM` in the recorded zone.
    pub fn timestamp(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M:%S%:z").to_string()
    }
}

impl fmt::Display for PersonInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} timestamp: {}",
            self.name,
            self.email,
            self.role.label(),
            self.timestamp()
        )
    }
}

fn email(text: &str) -> Option<&str> {
    let open = text.find('<')? + 1;
    let close = open + text[open..].find('>')?;
    Some(&text[open..close])
}

/// The first digit run preceded by `"> "` and followed by whitespace, with the index just past it.
fn epoch_seconds(text: &str) -> Option<(i64, usize)> {
    text.match_indices("> ").find_map(|(i, marker)| {
        let start = i + marker.len();
        let end = start + text[start..].bytes().take_while(u8::is_ascii_digit).count();
        let followed_by_space = text[end..].starts_with(char::is_whitespace);
        if end == start || !followed_by_space {
            return None;
        }
        text[start..end].parse().ok().map(|secs| (secs, end))
    })
}

/// A sign followed by exactly four digits, as both the written HHMM value and a chrono offset.
fn zone_offset(text: &str) -> Option<(i32, FixedOffset)> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| matches!(b, b'+' | b'-'))?;
    let sign = if bytes[start] == b'-' { -1 } else { 1 };
    let digits = bytes.get(start + 1..start + 5)?;
    if !digits.iter().all(u8::is_ascii_digit) || bytes.get(start + 5).is_some_and(u8::is_ascii_digit)
    {
        return None;
    }
    let hhmm: i32 = std::str::from_utf8(digits).ok()?.parse().ok()?;
    let (hours, minutes) = (hhmm / 100, hhmm % 100);
    if hours > 23 || minutes > 59 {
        return None;
    }
    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
    Some((sign * hhmm, offset))
}
