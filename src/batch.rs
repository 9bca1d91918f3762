//! Batch driver: run the pipeline over many documents independently.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::parser::{DocumentBuilder, ParseOptions};
use crate::regroup::regroup;
use crate::render::{self, JsonFormat};

/// One named input document for batch processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInput {
    /// Document name (typically the source file name)
    pub name: String,

    /// Raw document text
    pub text: String,
}

impl BatchInput {
    /// Create a new batch input.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Per-document batch outcome.
///
/// Errors are carried as their display message so items stay serializable
/// and a failed document never contaminates its siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    /// Document name, copied from the input
    pub name: String,

    /// Rendered output, or the processing error's message
    pub result: Result<String, String>,
}

impl BatchItem {
    /// Check if this document processed successfully.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// The rendered output, if processing succeeded.
    pub fn output(&self) -> Option<&str> {
        self.result.as_ref().ok().map(String::as_str)
    }

    /// The error message, if processing failed.
    pub fn error(&self) -> Option<&str> {
        self.result.as_ref().err().map(String::as_str)
    }
}

/// Output format for batch results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Canonical cycle text
    #[default]
    Text,

    /// Markdown with cycle and section headings
    Markdown,

    /// Pretty-printed JSON cycle structure
    Json,
}

/// Options for batch processing.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Parse options applied to every document
    pub parse: ParseOptions,

    /// Output format for successful documents
    pub format: OutputFormat,

    /// Process documents on the rayon pool
    pub parallel: bool,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse options applied to every document.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Process documents one at a time.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            format: OutputFormat::Text,
            parallel: true,
        }
    }
}

/// Process each input independently; one failure never aborts siblings.
///
/// Output order equals input order regardless of scheduling: results are
/// collected through rayon's indexed iterators, not in completion order.
pub fn process_batch(
    inputs: &[BatchInput],
    points_per_cycle: usize,
    options: &BatchOptions,
) -> Vec<BatchItem> {
    log::debug!(
        "batch of {} documents, chunk {}, parallel={}",
        inputs.len(),
        points_per_cycle,
        options.parallel
    );

    let run = |input: &BatchInput| -> BatchItem {
        let result = run_one(&input.text, points_per_cycle, options).map_err(|e| e.to_string());
        if let Err(ref msg) = result {
            log::warn!("document {:?} failed: {}", input.name, msg);
        }
        BatchItem {
            name: input.name.clone(),
            result,
        }
    };

    if options.parallel {
        inputs.par_iter().map(run).collect()
    } else {
        inputs.iter().map(run).collect()
    }
}

fn run_one(text: &str, points_per_cycle: usize, options: &BatchOptions) -> Result<String, Error> {
    let doc = DocumentBuilder::with_options(options.parse.clone()).build(text)?;
    let cycles = regroup(&doc, points_per_cycle)?;
    match options.format {
        OutputFormat::Text => Ok(render::to_text(&cycles)),
        OutputFormat::Markdown => Ok(render::to_markdown(&cycles)),
        OutputFormat::Json => render::to_json(&cycles, JsonFormat::Pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let inputs = vec![
            BatchInput::new("one.txt", "H1\n- a\n- b"),
            BatchInput::new("two.txt", ""),
            BatchInput::new("three.txt", "H2\n- x"),
        ];

        let items = process_batch(&inputs, 2, &BatchOptions::default());

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "one.txt");
        assert!(items[0].is_ok());
        assert!(items[1].error().unwrap().contains("empty"));
        assert!(items[2].output().unwrap().starts_with("Cycle 1:"));
    }

    #[test]
    fn test_batch_sequential_matches_parallel() {
        let inputs = vec![
            BatchInput::new("a", "H\n- 1\n- 2\n- 3"),
            BatchInput::new("b", "H\n- x"),
        ];

        let par = process_batch(&inputs, 1, &BatchOptions::default());
        let seq = process_batch(&inputs, 1, &BatchOptions::new().sequential());

        for (p, s) in par.iter().zip(&seq) {
            assert_eq!(p.name, s.name);
            assert_eq!(p.result, s.result);
        }
    }

    #[test]
    fn test_batch_format_markdown() {
        let inputs = vec![BatchInput::new("a", "H\n- 1")];
        let options = BatchOptions::new().with_format(OutputFormat::Markdown);
        let items = process_batch(&inputs, 2, &options);
        assert!(items[0].output().unwrap().starts_with("# Cycle 1:"));
    }

    #[test]
    fn test_batch_empty_input_list() {
        let items = process_batch(&[], 2, &BatchOptions::default());
        assert!(items.is_empty());
    }
}
