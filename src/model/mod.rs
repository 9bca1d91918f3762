//! Model types for structured text content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! text parsing and cycle rendering. A [`StructuredDocument`] holds the
//! headings and their points in input order; a [`CycleSequence`] holds the
//! round-robin regrouping of those points.

mod cycle;
mod document;

pub use cycle::{Cycle, CycleGroup, CycleSequence};
pub use document::{Section, StructuredDocument};
