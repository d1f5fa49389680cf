use std::{
    cell::OnceCell,
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        ExtractionRecord, SourceLocation,
        catalog::{Catalog, CatalogHeader},
        extract::LiteralExtractor,
        file_scanner::scan_files,
        utils::relative_display_path,
    },
    issues::{EmptyMsgidIssue, Issue, UnreadableSourceIssue},
};

/// Records and issues from one pass over all files.
struct ExtractedData {
    records: Vec<ExtractionRecord>,
    issues: Vec<Issue>,
}

/// Shared state for the extract, check and update commands and the MCP tools.
///
/// Configuration is resolved and files are discovered up front. Reading and
/// scanning happen on first access to [`records`](Self::records) or
/// [`issues`](Self::issues); the catalog is built from the records after that.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--keyword N_`)
/// 2. `.gleanrc.json` config file
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory files are discovered under; record paths are relative to it.
    pub root_dir: PathBuf,

    /// Files to scan, in the order they are processed.
    pub files: BTreeSet<PathBuf>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    extracted: OnceCell<ExtractedData>,
    catalog: OnceCell<Catalog>,
}

impl ExtractContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        if !root_dir.is_dir() {
            bail!("Source root is not a directory: {}", root_dir.display());
        }

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if !common_args.keyword.is_empty() {
            config.keywords = common_args.keyword.clone();
            config.validate()?;
        }

        Ok(Self::with_config(root_dir, config, verbose))
    }

    /// Build a context for an already loaded configuration.
    pub fn with_config(root_dir: PathBuf, config: Config, verbose: bool) -> Self {
        let scan = scan_files(
            &root_dir,
            &config.includes,
            &config.ignores,
            &config.extensions,
            verbose,
        );

        if verbose && scan.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) could not be accessed",
                "warning:".bold().yellow(),
                scan.skipped_count
            );
        }

        Self {
            config,
            root_dir,
            files: scan.files,
            verbose,
            extracted: OnceCell::new(),
            catalog: OnceCell::new(),
        }
    }

    /// Every harvested literal, grouped by file in scan order.
    pub fn records(&self) -> &[ExtractionRecord] {
        &self.extracted().records
    }

    /// Problems met while extracting, sorted by location.
    pub fn issues(&self) -> &[Issue] {
        &self.extracted().issues
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
            .get_or_init(|| Catalog::from_records(self.records()))
    }

    pub fn header(&self) -> CatalogHeader {
        CatalogHeader::from_config(&self.config)
    }

    pub fn pot_path(&self) -> PathBuf {
        self.config.pot_path(&self.root_dir)
    }

    pub fn po_path(&self, language: &str) -> PathBuf {
        self.config.po_path(&self.root_dir, language)
    }

    /// Path as shown to the user, relative to the source root.
    pub fn display_path(&self, path: &Path) -> String {
        relative_display_path(&self.root_dir, path)
    }

    fn extracted(&self) -> &ExtractedData {
        self.extracted.get_or_init(|| {
            let extractor = LiteralExtractor::new(self.config.marker_config())
                .with_comment_tag(self.config.comment_tag.clone());
            let root_dir = &self.root_dir;

            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|path| {
                    let display = relative_display_path(root_dir, path);
                    let result = fs::read_to_string(path)
                        .map(|source| extractor.extract(&display, &source));
                    (display, result)
                })
                .collect();

            let mut records = Vec::new();
            let mut issues = Vec::new();

            for (file_path, result) in results {
                match result {
                    Ok(extraction) => {
                        issues.extend(extraction.malformed.into_iter().map(Issue::MalformedLiteral));
                        records.extend(extraction.records);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!(
                                "{} {}: {}",
                                "warning:".bold().yellow(),
                                file_path,
                                e
                            );
                        }
                        issues.push(Issue::UnreadableSource(UnreadableSourceIssue {
                            file_path,
                            error: format!("Failed to read file: {}", e),
                        }));
                    }
                }
            }

            issues.extend(
                records
                    .iter()
                    .filter(|r| r.literal.is_empty())
                    .map(|r| {
                        Issue::EmptyMsgid(EmptyMsgidIssue {
                            location: SourceLocation::new(r.source_file.clone(), r.line, r.col),
                        })
                    }),
            );
            issues.sort();

            ExtractedData { records, issues }
        })
    }
}
