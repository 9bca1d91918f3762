//! Round-robin regrouping of a structured document into cycles.

use crate::error::{Error, Result};
use crate::model::{Cycle, CycleGroup, CycleSequence, StructuredDocument};

/// Regroup a document's points into cycles of up to `points_per_cycle`
/// points per heading.
///
/// The number of cycles is `ceil(max_points / points_per_cycle)` where
/// `max_points` is the largest point count across all sections. Every cycle
/// lists every heading in document order, including headings whose slice for
/// that cycle is empty.
///
/// Returns [`Error::InvalidChunkSize`] when `points_per_cycle` is zero and
/// [`Error::NoPoints`] when no section has any points.
pub fn regroup(doc: &StructuredDocument, points_per_cycle: usize) -> Result<CycleSequence> {
    if points_per_cycle < 1 {
        return Err(Error::InvalidChunkSize(points_per_cycle));
    }

    let max_points = doc.max_points();
    if max_points == 0 {
        return Err(Error::NoPoints);
    }

    let mut sequence = CycleSequence::new();
    let mut index = 0usize;

    while index * points_per_cycle < max_points {
        let start = index * points_per_cycle;
        let end = start + points_per_cycle;

        let mut cycle = Cycle::new(index as u32 + 1);
        for section in &doc.sections {
            let upper = end.min(section.points.len());
            let slice = if start < section.points.len() {
                section.points[start..upper].to_vec()
            } else {
                Vec::new()
            };
            cycle.add_group(CycleGroup::new(section.heading.clone(), slice));
        }

        sequence.add_cycle(cycle);
        index += 1;
    }

    log::debug!(
        "regrouped {} points into {} cycles of {}",
        doc.total_points(),
        sequence.cycle_count(),
        points_per_cycle
    );

    Ok(sequence)
}
