//! Utility helpers for the core extraction pipeline.
//!
//! ## Module Structure
//!
//! - `escape`: C-style string escapes
//! - `line_index`: Byte offset to line/column lookups
//! - `paths`: Display paths relative to the source root

pub mod escape;
pub mod line_index;
pub mod paths;

pub use escape::{escape, unescape};
pub use line_index::LineIndex;
pub use paths::relative_display_path;
