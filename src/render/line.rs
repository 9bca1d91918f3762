//! Classification of rendered output lines.
//!
//! Downstream formatters (word-processor or paged-canvas exporters) style
//! each line of the canonical text by kind. Keeping the classification next
//! to the renderer keeps it in sync with the bullet-glyph contract in
//! [`super::text`].

use std::sync::OnceLock;

use regex::Regex;

use super::text::BULLET_PREFIX;

fn cycle_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Cycle [0-9]+:$").expect("valid regex"))
}

/// Kind of one line of rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLine {
    /// A `Cycle <n>:` line
    CycleHeader,

    /// A point line starting with the normalized bullet prefix
    Bullet,

    /// Any other non-blank line (a heading)
    Heading,

    /// An empty or whitespace-only line
    Blank,
}

impl OutputLine {
    /// Classify one line of canonical rendered text.
    pub fn classify(line: &str) -> Self {
        if line.trim().is_empty() {
            OutputLine::Blank
        } else if cycle_header_regex().is_match(line) {
            OutputLine::CycleHeader
        } else if line.starts_with(BULLET_PREFIX) || line == "\u{2022}" {
            OutputLine::Bullet
        } else {
            OutputLine::Heading
        }
    }
}
