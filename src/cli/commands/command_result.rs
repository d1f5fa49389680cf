use crate::{cli::ExitStatus, core::catalog::MergeStats, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Check,
    Update(UpdateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Where the template was written.
    pub output_path: String,
    /// Unique msgids in the template.
    pub message_count: usize,
    /// Marker calls harvested, duplicates included.
    pub record_count: usize,
}

#[derive(Debug)]
pub struct UpdateSummary {
    pub is_apply: bool,
    /// Extraction reported errors, so no file is written even with `--apply`.
    pub blocked: bool,
    pub languages: Vec<LanguageUpdate>,
}

/// Outcome of merging the template into one language's `.po` file.
#[derive(Debug)]
pub struct LanguageUpdate {
    pub language: String,
    pub path: String,
    /// The file did not exist before.
    pub created: bool,
    /// The merged text differs from what is on disk.
    pub changed: bool,
    pub stats: MergeStats,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: String,
}

/// Result of running glean commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issues found while extracting, sorted by location.
    /// Empty for `init`.
    pub issues: Vec<Issue>,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_error_count(self.error_count)
    }
}
