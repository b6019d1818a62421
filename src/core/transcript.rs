//! Ordered record of the lines a demonstration prints.
//!
//! Pattern operations never write to stdout themselves. They append lines to a
//! `Transcript`, which the demo programs print and the tests compare.

use std::fmt;

/// Ordered, append-only list of output lines.
///
/// # Example
///
/// ```rust
/// use patterns::core::Transcript;
///
/// let mut out = Transcript::new();
/// out.line("Woof!");
/// out.blank();
/// out.line(format!("Observer {} notified. New state: {}", 1, 10));
///
/// assert_eq!(out.len(), 3);
/// assert_eq!(out.to_string(), "Woof!\n\nObserver 1 notified. New state: 10\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append one line. The line must not contain a trailing newline.
    pub fn line(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::trace!(target: "patterns::transcript", %line);
        self.lines.push(line);
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.line(String::new());
    }

    /// Append every line of another transcript, preserving order.
    pub fn extend(&mut self, other: Transcript) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The most recently appended line, if any.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Whether any line equals `line` exactly.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Transcript {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transcript_is_empty() {
        let out = Transcript::new();
        assert!(out.is_empty());
        assert_eq!(out.last(), None);
        assert_eq!(out.to_string(), "");
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut out = Transcript::new();
        out.line("first");
        out.line(String::from("second"));
        out.blank();

        assert_eq!(out.lines(), &["first", "second", ""]);
        assert_eq!(out.last(), Some(""));
    }

    #[test]
    fn display_terminates_every_line() {
        let out: Transcript = ["a", "", "b"].into_iter().collect();
        assert_eq!(out.to_string(), "a\n\nb\n");
    }

    #[test]
    fn extend_appends_after_existing_lines() {
        let mut out: Transcript = ["header"].into_iter().collect();
        out.extend(["one", "two"].into_iter().collect());

        assert_eq!(out.into_lines(), vec!["header", "one", "two"]);
    }

    #[test]
    fn contains_matches_whole_lines_only() {
        let out: Transcript = ["Light is ON"].into_iter().collect();
        assert!(out.contains("Light is ON"));
        assert!(!out.contains("Light"));
    }
}
