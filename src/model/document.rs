//! Document-level types.

use serde::{Deserialize, Serialize};

/// A parsed structured document: headings with their bullet points, in
/// first-occurrence order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredDocument {
    /// Sections in input order
    pub sections: Vec<Section>,
}

impl StructuredDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Get the number of sections in the document.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Append a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Look up a section by heading text.
    pub fn get(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    /// Position of a section by heading text, if present.
    pub fn position(&self, heading: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.heading == heading)
    }

    /// The largest point count across all sections.
    pub fn max_points(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.points.len())
            .max()
            .unwrap_or(0)
    }

    /// Total number of points across all sections.
    pub fn total_points(&self) -> usize {
        self.sections.iter().map(|s| s.points.len()).sum()
    }
}

/// One heading and its ordered bullet points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Heading text (trimmed, non-empty)
    pub heading: String,

    /// Extracted point strings in input order (trimmed, non-empty)
    pub points: Vec<String>,
}

impl Section {
    /// Create a new section with no points.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            points: Vec::new(),
        }
    }

    /// Append a point to the section.
    pub fn add_point(&mut self, point: impl Into<String>) {
        self.points.push(point.into());
    }

    /// Check if the section has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = StructuredDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert_eq!(doc.max_points(), 0);
    }

    #[test]
    fn test_document_accessors() {
        let mut doc = StructuredDocument::new();
        let mut a = Section::new("Alpha");
        a.add_point("one");
        a.add_point("two");
        doc.add_section(a);
        doc.add_section(Section::new("Beta"));

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.max_points(), 2);
        assert_eq!(doc.total_points(), 2);
        assert_eq!(doc.position("Beta"), Some(1));
        assert!(doc.get("Alpha").is_some());
        assert!(doc.get("Gamma").is_none());
        assert!(doc.get("Beta").unwrap().is_empty());
    }
}
