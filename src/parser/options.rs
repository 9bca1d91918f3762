//! Parsing options and configuration.

/// Options for building a structured document from text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// What to do when a heading text repeats in the input
    pub duplicate_headings: DuplicateHeadings,

    /// When the input contains no heading at all, treat the first line as
    /// an implicit heading instead of dropping everything
    pub implicit_first_heading: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-heading policy.
    pub fn with_duplicate_headings(mut self, policy: DuplicateHeadings) -> Self {
        self.duplicate_headings = policy;
        self
    }

    /// Keep appending to an existing entry when its heading repeats.
    pub fn append_duplicates(mut self) -> Self {
        self.duplicate_headings = DuplicateHeadings::Append;
        self
    }

    /// Enable or disable the implicit first-line heading fallback.
    pub fn with_implicit_first_heading(mut self, enabled: bool) -> Self {
        self.implicit_first_heading = enabled;
        self
    }

    /// Drop unheaded lines instead of promoting the first line to a heading.
    pub fn strict_headings(mut self) -> Self {
        self.implicit_first_heading = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            duplicate_headings: DuplicateHeadings::Reset,
            implicit_first_heading: true,
        }
    }
}

/// Policy for a heading text that occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateHeadings {
    /// Clear the existing entry's points; the heading keeps its
    /// first-occurrence position (plain-mapping insertion semantics)
    #[default]
    Reset,
    /// Continue accumulating points into the existing entry
    Append,
}
