//! Cycle-level types produced by regrouping.

use serde::{Deserialize, Serialize};

/// An ordered sequence of cycles produced from one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleSequence {
    /// Cycles numbered 1..=n
    pub cycles: Vec<Cycle>,
}

impl CycleSequence {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Get the number of cycles.
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Check if the sequence contains no cycles.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Append a cycle to the sequence.
    pub fn add_cycle(&mut self, cycle: Cycle) {
        self.cycles.push(cycle);
    }

    /// Iterate over cycles in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cycle> {
        self.cycles.iter()
    }
}

impl<'a> IntoIterator for &'a CycleSequence {
    type Item = &'a Cycle;
    type IntoIter = std::slice::Iter<'a, Cycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}

/// One round-robin chunk: up to N points per heading.
///
/// Every cycle lists every heading of the source document in document
/// order, including headings that contribute no points to this cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cycle {
    /// 1-based cycle number, contiguous from 1
    pub number: u32,

    /// Per-heading point slices, in document order
    pub groups: Vec<CycleGroup>,
}

impl Cycle {
    /// Create a new cycle with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            groups: Vec::new(),
        }
    }

    /// Append a heading group to the cycle.
    pub fn add_group(&mut self, group: CycleGroup) {
        self.groups.push(group);
    }

    /// Total number of points in this cycle across all headings.
    pub fn point_count(&self) -> usize {
        self.groups.iter().map(|g| g.points.len()).sum()
    }
}

/// The slice of one heading's points that falls into one cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleGroup {
    /// Heading text
    pub heading: String,

    /// 0..=chunk points drawn from the heading's list
    pub points: Vec<String>,
}

impl CycleGroup {
    /// Create a new group for a heading.
    pub fn new(heading: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            points,
        }
    }

    /// Check if the group carries no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
