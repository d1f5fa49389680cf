//! Core data types shared by the extractor, the catalog and the reporters.
//!
//! ## Module Structure
//!
//! - `record`: Extraction output (ExtractionRecord, FileExtraction)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod record;
pub mod source;

pub use record::{ExtractionRecord, FileExtraction};
pub use source::{SourceContext, SourceLocation};
