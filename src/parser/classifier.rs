//! Line classification.
//!
//! Classifies a trimmed, non-empty line as a bullet point, a heading, or a
//! plain continuation. Bullet detection is a fixed-priority table of marker
//! matchers rather than a single pattern, so each marker can be tested on
//! its own.

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A bullet line; carries the content after the marker (possibly empty).
    Bullet(String),

    /// A heading line; carries the full line text.
    Heading(String),

    /// Neither bullet nor heading; treated like bullet content downstream
    /// so slightly malformed markers do not lose data.
    Continuation(String),
}

/// A bullet marker recognized at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletMarker {
    /// A literal marker glyph (`•`, `-`, `*`, `+`).
    Glyph(char),

    /// A decimal integer followed by a dot, e.g. `1.` or `42.`.
    Numbered,

    /// A parenthesized single lowercase-alphanumeric label, e.g. `(a)` or `(3)`.
    Labeled,
}

/// Bullet markers in match priority order.
pub const BULLET_MARKERS: &[BulletMarker] = &[
    BulletMarker::Glyph('\u{2022}'),
    BulletMarker::Glyph('-'),
    BulletMarker::Glyph('*'),
    BulletMarker::Glyph('+'),
    BulletMarker::Numbered,
    BulletMarker::Labeled,
];

impl BulletMarker {
    /// Strip this marker from the start of `line`, returning the remainder.
    ///
    /// Returns `None` when the line does not start with this marker.
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self {
            BulletMarker::Glyph(g) => line.strip_prefix(*g),
            BulletMarker::Numbered => {
                let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
                if digits == 0 {
                    return None;
                }
                line[digits..].strip_prefix('.')
            }
            BulletMarker::Labeled => {
                let rest = line.strip_prefix('(')?;
                let label = rest.chars().next()?;
                if !label.is_ascii_lowercase() && !label.is_ascii_digit() {
                    return None;
                }
                rest[label.len_utf8()..].strip_prefix(')')
            }
        }
    }
}

/// Extract bullet content from a line, if it starts with a bullet marker.
///
/// Whitespace between the marker and the content is discarded; the content
/// itself may be empty (a bare marker).
pub fn extract_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| marker.strip(line))
        .map(|rest| rest.trim_start())
}

/// Classify a trimmed, non-empty line.
///
/// A line is a bullet iff it starts with a marker from [`BULLET_MARKERS`];
/// a non-bullet line starting with an alphanumeric character is a heading;
/// anything else is a continuation.
pub fn classify(line: &str) -> LineClass {
    if let Some(content) = extract_bullet(line) {
        return LineClass::Bullet(content.to_string());
    }
    match line.chars().next() {
        Some(c) if c.is_alphanumeric() => LineClass::Heading(line.to_string()),
        _ => LineClass::Continuation(line.to_string()),
    }
}
