//! Canonical plain-text rendering of a cycle sequence.

use crate::model::CycleSequence;

/// Marker emitted before every rendered point, regardless of the marker
/// used on input. Downstream formatters key on this exact prefix.
pub const BULLET_PREFIX: &str = "\u{2022} ";

/// Render a cycle sequence as canonical text.
///
/// Per cycle: a `Cycle <n>:` line, one blank line, then each heading on its
/// own line immediately followed by its `\u{2022} `-prefixed points. Cycles are
/// concatenated with no extra separator; lines are joined by `\n` with no
/// trailing newline.
pub fn to_text(cycles: &CycleSequence) -> String {
    let mut lines: Vec<String> = Vec::new();

    for cycle in cycles {
        lines.push(format!("Cycle {}:", cycle.number));
        lines.push(String::new());
        for group in &cycle.groups {
            lines.push(group.heading.clone());
            for point in &group.points {
                lines.push(format!("{}{}", BULLET_PREFIX, point));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cycle, CycleGroup};

    #[test]
    fn test_to_text_shape() {
        let mut seq = CycleSequence::new();
        let mut c1 = Cycle::new(1);
        c1.add_group(CycleGroup::new("H1", vec!["a".into(), "b".into()]));
        c1.add_group(CycleGroup::new("H2", vec!["x".into()]));
        seq.add_cycle(c1);
        let mut c2 = Cycle::new(2);
        c2.add_group(CycleGroup::new("H1", vec!["c".into()]));
        c2.add_group(CycleGroup::new("H2", vec![]));
        seq.add_cycle(c2);

        assert_eq!(
            to_text(&seq),
            "Cycle 1:\n\nH1\n\u{2022} a\n\u{2022} b\nH2\n\u{2022} x\nCycle 2:\n\nH1\n\u{2022} c\nH2"
        );
    }

    #[test]
    fn test_to_text_empty_sequence() {
        assert_eq!(to_text(&CycleSequence::new()), "");
    }

    #[test]
    fn test_marker_normalized() {
        let mut seq = CycleSequence::new();
        let mut cycle = Cycle::new(1);
        cycle.add_group(CycleGroup::new("H", vec!["from dash input".into()]));
        seq.add_cycle(cycle);

        let out = to_text(&seq);
        assert!(out.contains("\u{2022} from dash input"));
        assert!(!out.contains("- from dash input"));
    }
}
