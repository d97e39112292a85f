//! Commit object bodies.
use std::fmt;

use crate::error::{Error, Result};
use crate::hash::ObjectHash;
use crate::person::PersonInfo;

/// A decoded commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub tree: ObjectHash,
    /// Parents in the order they are listed; the first one is the mainline.
    pub parents: Vec<ObjectHash>,
    pub author: PersonInfo,
    pub committer: PersonInfo,
    pub message: String,
}

impl Commit {
    /// Parse the text body of a commit object.
    ///
    /// Header lines run up to the first empty line. The message is the last run of non-blank
    /// lines after that, so only the final paragraph of a multi-paragraph message is kept.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(body);
        let lines: Vec<&str> = text.trim().lines().collect();
        let header_len = lines
            .iter()
            .position(|line| line.is_empty())
            .unwrap_or(lines.len());
        let (header, rest) = lines.split_at(header_len);

        let tree = header
            .first()
            .and_then(|line| line.strip_prefix("tree "))
            .ok_or(Error::MissingField("tree"))?
            .parse()?;
        let parents = header
            .iter()
            .filter_map(|line| line.strip_prefix("parent "))
            .map(str::parse)
            .collect::<Result<Vec<ObjectHash>>>()?;
        let author = person_line(header, "author ")?;
        let committer = person_line(header, "committer ")?;

        let blank_from_end = rest
            .iter()
            .rev()
            .position(|line| line.trim().is_empty())
            .unwrap_or(rest.len());
        let message = rest[rest.len() - blank_from_end..].join("\n");

        Ok(Self {
            tree,
            parents,
            author,
            committer,
            message,
        })
    }
}

fn person_line(header: &[&str], prefix: &'static str) -> Result<PersonInfo> {
    let line = header
        .iter()
        .find(|line| line.starts_with(prefix))
        .ok_or(Error::MissingField(prefix.trim_end()))?;
    PersonInfo::parse(line)
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tree: {}", self.tree)?;
        let parents: Vec<String> = self.parents.iter().map(ObjectHash::to_hex).collect();
        writeln!(f, "parents: {}", parents.join(" "))?;
        writeln!(f, "author: {}", self.author)?;
        writeln!(f, "committer: {}", self.committer)?;
        writeln!(f, "commit message:")?;
        write!(f, "{}", self.message)
    }
}
