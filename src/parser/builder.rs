//! Structure builder: classified lines to a structured document.

use crate::error::{Error, Result};
use crate::model::{Section, StructuredDocument};

use super::classifier::{classify, LineClass};
use super::options::{DuplicateHeadings, ParseOptions};

/// Builds a [`StructuredDocument`] from raw text.
///
/// The builder owns all intermediate state for one `build` call; nothing is
/// reused across calls.
pub struct DocumentBuilder {
    options: ParseOptions,
}

impl DocumentBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a builder with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Build a structured document from raw text.
    ///
    /// Blank lines are structural separators only and are discarded before
    /// classification. Returns [`Error::EmptyInput`] when no non-blank line
    /// remains, and [`Error::EmptyStructure`] when no heading is ever
    /// established.
    pub fn build(&self, text: &str) -> Result<StructuredDocument> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(Error::EmptyInput);
        }

        log::debug!("building structure from {} lines", lines.len());

        let classified: Vec<LineClass> = lines.iter().map(|l| classify(l)).collect();

        // The fallback only fires when the whole input has no heading line;
        // otherwise lines before the first heading are dropped.
        let has_heading = classified.iter().any(|c| matches!(c, LineClass::Heading(_)));
        if !has_heading && self.options.implicit_first_heading {
            log::warn!(
                "no headings found, treating first line as heading: {:?}",
                lines[0]
            );
        }

        let mut doc = StructuredDocument::new();
        let mut current: Option<usize> = None;

        for (i, class) in classified.iter().enumerate() {
            if i == 0 && !has_heading && self.options.implicit_first_heading {
                current = Some(self.open_section(&mut doc, lines[0]));
                continue;
            }

            match class {
                LineClass::Heading(text) => {
                    current = Some(self.open_section(&mut doc, text));
                }
                LineClass::Bullet(content) | LineClass::Continuation(content) => {
                    match current {
                        Some(idx) => {
                            if !content.is_empty() {
                                doc.sections[idx].add_point(content.clone());
                            }
                        }
                        None => {
                            log::warn!("line ignored, no current heading: {:?}", content);
                        }
                    }
                }
            }
        }

        if doc.is_empty() {
            return Err(Error::EmptyStructure);
        }

        log::debug!(
            "built {} sections, {} points",
            doc.section_count(),
            doc.total_points()
        );

        Ok(doc)
    }

    /// Open (or reopen) the section for `heading`, returning its index.
    fn open_section(&self, doc: &mut StructuredDocument, heading: &str) -> usize {
        if let Some(idx) = doc.position(heading) {
            match self.options.duplicate_headings {
                DuplicateHeadings::Reset => doc.sections[idx].points.clear(),
                DuplicateHeadings::Append => {}
            }
            return idx;
        }
        doc.add_section(Section::new(heading));
        doc.section_count() - 1
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_basic() {
        let doc = DocumentBuilder::new()
            .build("H1\n\u{2022} a\n\u{2022} b\n\nH2\n- x\n- y")
            .unwrap();

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[0].heading, "H1");
        assert_eq!(doc.sections[0].points, vec!["a", "b"]);
        assert_eq!(doc.sections[1].points, vec!["x", "y"]);
    }

    #[test]
    fn test_build_empty_input() {
        let err = DocumentBuilder::new().build("").unwrap_err();
        assert!(matches!(err, Error::EmptyInput));

        let err = DocumentBuilder::new().build("  \n\n \t ").unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_continuation_appended_verbatim() {
        let doc = DocumentBuilder::new()
            .build("H1\n~ malformed marker")
            .unwrap();
        assert_eq!(doc.sections[0].points, vec!["~ malformed marker"]);
    }

    #[test]
    fn test_empty_bullet_content_ignored() {
        let doc = DocumentBuilder::new().build("H1\n\u{2022}\n- a").unwrap();
        assert_eq!(doc.sections[0].points, vec!["a"]);
    }

    #[test]
    fn test_implicit_first_heading() {
        // No heading-classified line anywhere: first line becomes the heading
        let doc = DocumentBuilder::new().build("- a\n- b").unwrap();
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].heading, "- a");
        assert_eq!(doc.sections[0].points, vec!["b"]);
    }

    #[test]
    fn test_strict_headings_drops_unheaded_lines() {
        let options = ParseOptions::new().strict_headings();
        let err = DocumentBuilder::with_options(options.clone())
            .build("- a\n- b")
            .unwrap_err();
        assert!(matches!(err, Error::EmptyStructure));

        // Heading later in the input: earlier bullets are dropped
        let doc = DocumentBuilder::with_options(options)
            .build("- a\nH1\n- b")
            .unwrap();
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].points, vec!["b"]);
    }

    #[test]
    fn test_duplicate_heading_reset() {
        let doc = DocumentBuilder::new()
            .build("H1\n- a\nH2\n- x\nH1\n- b")
            .unwrap();

        // Re-declared heading keeps its first position but loses prior points
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[0].heading, "H1");
        assert_eq!(doc.sections[0].points, vec!["b"]);
        assert_eq!(doc.sections[1].points, vec!["x"]);
    }

    #[test]
    fn test_duplicate_heading_append() {
        let options = ParseOptions::new().append_duplicates();
        let doc = DocumentBuilder::with_options(options)
            .build("H1\n- a\nH2\n- x\nH1\n- b")
            .unwrap();

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[0].points, vec!["a", "b"]);
    }

    #[test]
    fn test_headings_without_points() {
        // Valid structure; the regrouper is the one to reject it
        let doc = DocumentBuilder::new().build("H1\nH2").unwrap();
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.max_points(), 0);
    }
}
