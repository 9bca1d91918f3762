//! Text parsing module.

mod builder;
mod classifier;
mod options;

pub use builder::DocumentBuilder;
pub use classifier::{classify, BulletMarker, LineClass, BULLET_MARKERS};
pub use options::{DuplicateHeadings, ParseOptions};
