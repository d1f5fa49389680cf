//! Glean - gettext string harvester for C and C++ sources
//!
//! Glean scans source files for calls to a marker function such as `_("...")`,
//! collects the wrapped string literals with their positions, and writes
//! gettext `.pot` templates and `.po` catalogs from them.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine and catalog handling
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
