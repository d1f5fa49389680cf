//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog building plus PO/POT reading, writing and merging
//! - `context`: Extraction context with lazily computed results
//! - `data`: Shared data types (records, source locations)
//! - `extract`: Marker-based literal extraction
//! - `file_scanner`: Source file discovery
//! - `utils`: Small helpers (line index, escaping, display paths)

pub mod catalog;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod utils;

pub use context::ExtractContext;
pub use data::{ExtractionRecord, FileExtraction, SourceContext, SourceLocation};
