//! # textcycle
//!
//! Extracts "heading + bullet list" structures from free-form text and
//! regroups the points into fixed-size, round-robin cycles.
//!
//! The pipeline classifies each line, builds an ordered heading-to-points
//! document, slices every heading's points into chunks of N, and renders the
//! chunks as numbered cycles. Heading order is preserved in every cycle.
//!
//! ## Quick Start
//!
//! ```
//! use textcycle::process_text;
//!
//! fn main() -> textcycle::Result<()> {
//!     let text = "Tasks\n\u{2022} write draft\n\u{2022} review draft\nErrands\n\u{2022} groceries";
//!     let output = process_text(text, 1)?;
//!     assert!(output.starts_with("Cycle 1:"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Liberal bullet markers**: `\u{2022}`, `-`, `*`, `+`, `1.`, `(a)` on input,
//!   normalized to `\u{2022}` on output
//! - **Malformed-input tolerance**: unmarked lines under a heading become
//!   points instead of being lost
//! - **Multiple output formats**: canonical text, Markdown, JSON
//! - **Batch processing**: independent per-document runs over a rayon pool,
//!   index-stable output order

pub mod batch;
pub mod error;
pub mod model;
pub mod parser;
pub mod regroup;
pub mod render;

// Re-export commonly used types
pub use batch::{process_batch, BatchInput, BatchItem, BatchOptions, OutputFormat};
pub use error::{Error, Result};
pub use model::{Cycle, CycleGroup, CycleSequence, Section, StructuredDocument};
pub use parser::{DocumentBuilder, DuplicateHeadings, LineClass, ParseOptions};
pub use regroup::regroup;
pub use render::{JsonFormat, OutputLine};

/// Parse raw text into a structured document with default options.
pub fn parse_text(text: &str) -> Result<StructuredDocument> {
    DocumentBuilder::new().build(text)
}

/// Parse raw text into a structured document with custom options.
pub fn parse_text_with_options(text: &str, options: ParseOptions) -> Result<StructuredDocument> {
    DocumentBuilder::with_options(options).build(text)
}

/// Process one document end to end: parse, regroup, render as canonical text.
///
/// # Example
///
/// ```
/// let output = textcycle::process_text("H1\n\u{2022} a\n\u{2022} b\n\u{2022} c", 2).unwrap();
/// assert_eq!(output, "Cycle 1:\n\nH1\n\u{2022} a\n\u{2022} b\nCycle 2:\n\nH1\n\u{2022} c");
/// ```
pub fn process_text(text: &str, points_per_cycle: usize) -> Result<String> {
    process_text_with_options(text, points_per_cycle, ParseOptions::default())
}

/// Process one document end to end with custom parse options.
pub fn process_text_with_options(
    text: &str,
    points_per_cycle: usize,
    options: ParseOptions,
) -> Result<String> {
    let doc = DocumentBuilder::with_options(options).build(text)?;
    let cycles = regroup(&doc, points_per_cycle)?;
    Ok(render::to_text(&cycles))
}

/// Builder for configuring and running the processing pipeline.
///
/// # Example
///
/// ```
/// use textcycle::Textcycle;
///
/// let processed = Textcycle::new()
///     .points_per_cycle(2)
///     .append_duplicates()
///     .process("H1\n- a\n- b\n- c")?;
/// let markdown = processed.to_markdown();
/// assert!(markdown.starts_with("# Cycle 1:"));
/// # Ok::<(), textcycle::Error>(())
/// ```
pub struct Textcycle {
    points_per_cycle: usize,
    parse_options: ParseOptions,
}

impl Textcycle {
    /// Create a new builder with defaults (2 points per cycle).
    pub fn new() -> Self {
        Self {
            points_per_cycle: 2,
            parse_options: ParseOptions::default(),
        }
    }

    /// Set the number of points each heading contributes per cycle.
    pub fn points_per_cycle(mut self, n: usize) -> Self {
        self.points_per_cycle = n;
        self
    }

    /// Set the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Accumulate repeated headings instead of resetting them.
    pub fn append_duplicates(mut self) -> Self {
        self.parse_options = self.parse_options.append_duplicates();
        self
    }

    /// Drop unheaded lines instead of promoting the first line to a heading.
    pub fn strict_headings(mut self) -> Self {
        self.parse_options = self.parse_options.strict_headings();
        self
    }

    /// Run the pipeline on one document.
    pub fn process(&self, text: &str) -> Result<Processed> {
        let doc = DocumentBuilder::with_options(self.parse_options.clone()).build(text)?;
        let cycles = regroup(&doc, self.points_per_cycle)?;
        Ok(Processed {
            document: doc,
            cycles,
        })
    }
}

impl Default for Textcycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one pipeline run, ready for rendering.
pub struct Processed {
    document: StructuredDocument,
    cycles: CycleSequence,
}

impl Processed {
    /// Render as canonical text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.cycles)
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.cycles)
    }

    /// Render as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.cycles, format)
    }

    /// The parsed document.
    pub fn document(&self) -> &StructuredDocument {
        &self.document
    }

    /// The regrouped cycles.
    pub fn cycles(&self) -> &CycleSequence {
        &self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textcycle_builder() {
        let tc = Textcycle::new().points_per_cycle(3).append_duplicates();

        assert_eq!(tc.points_per_cycle, 3);
        assert_eq!(
            tc.parse_options.duplicate_headings,
            DuplicateHeadings::Append
        );
    }

    #[test]
    fn test_process_text_round_trip_shape() {
        // Single heading, exactly C points, chunk C: one cycle with everything
        let output = process_text("H\n- a\n- b\n- c", 3).unwrap();
        assert_eq!(output, "Cycle 1:\n\nH\n\u{2022} a\n\u{2022} b\n\u{2022} c");
    }

    #[test]
    fn test_process_text_empty_input() {
        assert!(matches!(process_text("", 2), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_process_text_zero_chunk() {
        assert!(matches!(
            process_text("H\n- a", 0),
            Err(Error::InvalidChunkSize(0))
        ));
    }

    #[test]
    fn test_process_text_no_points() {
        assert!(matches!(process_text("H1\nH2", 2), Err(Error::NoPoints)));
    }

    #[test]
    fn test_processed_accessors() {
        let processed = Textcycle::new().process("H1\n- a\n- b\n- c").unwrap();

        assert_eq!(processed.document().section_count(), 1);
        assert_eq!(processed.cycles().cycle_count(), 2);
        assert!(processed.to_json(JsonFormat::Compact).unwrap().contains("H1"));
    }
}
