use crate::error::Result;
use regex::{NoExpand, Regex};

/// Locates and rewrites the `version:` line of a pubspec.
///
/// Only the first match is ever read or replaced; everything outside the
/// matched text is left untouched, including a trailing `\r` on CRLF files.
pub struct VersionLine {
    regex: Regex,
}

impl VersionLine {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"version:\s*([^\r\n]+)")?;
        Ok(Self { regex })
    }

    /// Raw value of the first version line, untrimmed.
    pub fn current_value<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.regex
            .captures(content)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }

    /// Returns `content` with the first version line set to `version: <full_version>`.
    pub fn replace(&self, content: &str, full_version: &str) -> String {
        let line = format!("version: {}", full_version);
        self.regex
            .replacen(content, 1, NoExpand(&line))
            .into_owned()
    }
}
