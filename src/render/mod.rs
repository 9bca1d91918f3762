//! Rendering module for converting cycle sequences to output formats.

mod json;
mod line;
mod markdown;
mod text;

pub use json::{to_json, JsonFormat};
pub use line::OutputLine;
pub use markdown::to_markdown;
pub use text::{to_text, BULLET_PREFIX};
