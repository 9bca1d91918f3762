//! Markdown rendering of a cycle sequence.
//!
//! Applies the same line styling the original exporters used: cycle headers
//! become top-level headings, section headings second-level headings, and
//! points list items.

use crate::model::CycleSequence;

use super::line::OutputLine;
use super::text::to_text;

/// Render a cycle sequence as Markdown.
pub fn to_markdown(cycles: &CycleSequence) -> String {
    let canonical = to_text(cycles);
    let mut output = String::new();

    for line in canonical.lines() {
        match OutputLine::classify(line) {
            OutputLine::CycleHeader => {
                if !output.is_empty() && !output.ends_with("\n\n") {
                    output.push('\n');
                }
                output.push_str("# ");
                output.push_str(line);
                output.push_str("\n\n");
            }
            OutputLine::Heading => {
                if !output.is_empty() && !output.ends_with("\n\n") {
                    output.push('\n');
                }
                output.push_str("## ");
                output.push_str(line);
                output.push_str("\n\n");
            }
            OutputLine::Bullet => {
                let content = line.trim_start_matches('\u{2022}').trim_start();
                output.push_str("- ");
                output.push_str(content);
                output.push('\n');
            }
            OutputLine::Blank => {}
        }
    }

    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cycle, CycleGroup};

    fn sample() -> CycleSequence {
        let mut seq = CycleSequence::new();
        let mut cycle = Cycle::new(1);
        cycle.add_group(CycleGroup::new("H1", vec!["a".into(), "b".into()]));
        cycle.add_group(CycleGroup::new("H2", vec![]));
        seq.add_cycle(cycle);
        seq
    }

    #[test]
    fn test_to_markdown() {
        let md = to_markdown(&sample());
        assert_eq!(md, "# Cycle 1:\n\n## H1\n\n- a\n- b\n\n## H2");
    }

    #[test]
    fn test_blank_line_between_list_and_next_heading() {
        let md = to_markdown(&sample());
        assert!(md.contains("- b\n\n## H2"));
    }

    #[test]
    fn test_cycles_separated() {
        let mut seq = sample();
        let mut c2 = Cycle::new(2);
        c2.add_group(CycleGroup::new("H1", vec!["c".into()]));
        seq.add_cycle(c2);

        let md = to_markdown(&seq);
        assert!(md.contains("\n\n# Cycle 2:\n\n"));
    }
}
