use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    core::ExtractionRecord,
    issues::{Issue, Report},
};

/// Default page size for paginated tools.
pub const DEFAULT_LIMIT: usize = 50;

/// Largest page size a caller may ask for.
pub const MAX_LIMIT: usize = 200;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanStringsParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
    /// Maximum number of items to return (default 50, max 200)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub keywords: Vec<String>,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub extensions: Vec<String>,
    pub domain: String,
    pub output_dir: String,
    pub languages: Vec<String>,
    pub package_name: String,
    pub package_version: String,
    pub comment_tag: Option<String>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            keywords: c.keywords,
            includes: c.includes,
            ignores: c.ignores,
            extensions: c.extensions,
            domain: c.domain,
            output_dir: c.output_dir,
            languages: c.languages,
            package_name: c.package_name,
            package_version: c.package_version,
            comment_tag: c.comment_tag,
        }
    }
}

// ============================================================
// Scan Types (scan_strings, scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// One harvested literal.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StringItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub literal: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl From<&ExtractionRecord> for StringItem {
    fn from(r: &ExtractionRecord) -> Self {
        Self {
            file_path: r.source_file.clone(),
            line: r.line,
            col: r.col,
            literal: r.literal.clone(),
            comments: r.comments.clone(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StringsScanResult {
    /// Marker calls found, duplicates included.
    pub total_count: usize,
    /// Distinct msgids that would go into the template.
    pub unique_count: usize,
    pub total_file_count: usize,
    pub items: Vec<StringItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub message: String,
    pub file_path: String,
    /// 0 for file-level issues.
    pub line: usize,
    pub col: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (file_path, line, col) = issue.location().position();
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            message: issue.message(),
            file_path: file_path.to_string(),
            line,
            col,
            details: issue.details(),
            hint: issue.hint().map(String::from),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub error_count: usize,
    pub warning_count: usize,
    pub files_scanned: usize,
    pub items: Vec<IssueItem>,
}
