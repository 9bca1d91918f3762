//! Integration tests for the output formats and line classification contract.

use textcycle::{render, JsonFormat, OutputLine, Textcycle};

const INPUT: &str = "Heading 1\n\
\u{2022} Point 1\n\
\u{2022} Point 2\n\
\u{2022} Point 3\n\
Heading 2\n\
\u{2022} Item A\n\
\u{2022} Item B";

#[test]
fn test_every_output_line_classifies() {
    let processed = Textcycle::new().points_per_cycle(2).process(INPUT).unwrap();
    let text = processed.to_text();

    let mut cycle_headers = 0;
    let mut bullets = 0;
    let mut headings = 0;
    for line in text.lines() {
        match OutputLine::classify(line) {
            OutputLine::CycleHeader => cycle_headers += 1,
            OutputLine::Bullet => bullets += 1,
            OutputLine::Heading => headings += 1,
            OutputLine::Blank => {}
        }
    }

    assert_eq!(cycle_headers, 2);
    assert_eq!(bullets, 5);
    // Both headings appear in both cycles, points or not
    assert_eq!(headings, 4);
}

#[test]
fn test_markdown_output() {
    let processed = Textcycle::new().points_per_cycle(2).process(INPUT).unwrap();
    let md = processed.to_markdown();

    assert!(md.starts_with("# Cycle 1:\n\n## Heading 1\n\n- Point 1\n- Point 2\n"));
    assert!(md.contains("# Cycle 2:\n\n## Heading 1\n\n- Point 3\n\n## Heading 2"));
    // Input bullets never leak through as literal glyphs
    assert!(!md.contains('\u{2022}'));
}

#[test]
fn test_json_output_structure() {
    let processed = Textcycle::new().points_per_cycle(2).process(INPUT).unwrap();
    let json = processed.to_json(JsonFormat::Pretty).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let cycles = value["cycles"].as_array().unwrap();
    assert_eq!(cycles.len(), 2);
    assert_eq!(cycles[1]["groups"][0]["points"][0], "Point 3");
    assert_eq!(cycles[1]["groups"][1]["points"], serde_json::json!([]));
}

#[test]
fn test_render_functions_match_processed_methods() {
    let processed = Textcycle::new().points_per_cycle(2).process(INPUT).unwrap();

    assert_eq!(render::to_text(processed.cycles()), processed.to_text());
    assert_eq!(render::to_markdown(processed.cycles()), processed.to_markdown());
}
