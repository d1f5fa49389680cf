use serde::Serialize;

use crate::issues::MalformedLiteralIssue;

/// One harvested literal and where it was found.
///
/// Records are created by the extractor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    /// Path of the scanned file, relative to the source root.
    pub source_file: String,
    /// 1-based line of the marker.
    pub line: usize,
    /// 1-based character column of the marker.
    pub col: usize,
    /// Unescaped literal content.
    pub literal: String,
    /// Translator comments attached to this occurrence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl ExtractionRecord {
    /// `path:line` reference as written in `#:` catalog lines.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.source_file, self.line)
    }
}

/// Output of scanning a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileExtraction {
    /// Records in first-seen order.
    pub records: Vec<ExtractionRecord>,
    /// Unterminated literals met during the scan.
    pub malformed: Vec<MalformedLiteralIssue>,
}

impl FileExtraction {
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }

    /// Literals only, in order.
    pub fn literals(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.literal.as_str()).collect()
    }
}
