//! Error types for the textcycle library.

use std::io;
use thiserror::Error;

/// Result type alias for textcycle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during text processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text is empty or contains only whitespace.
    #[error("Input text is empty: expected headings followed by bullet points")]
    EmptyInput,

    /// The requested number of points per cycle is below the minimum of 1.
    #[error("Points per cycle must be at least 1 (got {0})")]
    InvalidChunkSize(usize),

    /// No heading captured any content while building the document.
    #[error("No headings found in the input text")]
    EmptyStructure,

    /// Headings exist but none of them has any bullet points.
    #[error("No bullet points found under any heading (markers: \u{2022} - * + 1. (a))")]
    NoPoints,

    /// Error during rendering (text, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
