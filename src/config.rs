use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::extract::{DEFAULT_MARKER, MarkerConfig};

pub const CONFIG_FILE_NAME: &str = ".gleanrc.json";

/// Extensions scanned when the config names none (C and C++ sources).
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "h", "cc", "cpp", "cxx", "hpp", "hh"];

static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("keyword regex is valid"));

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Marker symbols wrapping translatable literals.
    #[serde(
        default = "default_keywords",
        alias = "keyword",
        deserialize_with = "string_or_list"
    )]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Catalog name: `<domain>.pot`, `<lang>/<domain>.po`.
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_output_dir", alias = "generatedDir")]
    pub output_dir: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_package_name")]
    pub package_name: String,
    #[serde(default = "default_package_version")]
    pub package_version: String,
    #[serde(default)]
    pub copyright_holder: String,
    #[serde(default)]
    pub bugs_address: String,
    /// Comments starting with this tag are copied into the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_tag: Option<String>,
}

/// Accept `"_"` as well as `["_", "N_"]`, matching `KEYWORD=_` in `.env` files.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    OneOrMany::deserialize(deserializer).map(|keywords| match keywords {
        OneOrMany::One(keyword) => vec![keyword],
        OneOrMany::Many(keywords) => keywords,
    })
}

fn default_keywords() -> Vec<String> {
    vec![DEFAULT_MARKER.to_string()]
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_domain() -> String {
    "messages".to_string()
}

fn default_output_dir() -> String {
    "locales".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_package_name() -> String {
    "PACKAGE".to_string()
}

fn default_package_version() -> String {
    "0.0.0".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            includes: Vec::new(),
            ignores: Vec::new(),
            extensions: default_extensions(),
            domain: default_domain(),
            output_dir: default_output_dir(),
            languages: default_languages(),
            package_name: default_package_name(),
            package_version: default_package_version(),
            copyright_holder: String::new(),
            bugs_address: String::new(),
            comment_tag: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob pattern does not compile, a keyword is not an
    /// identifier, or a catalog name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.keywords.is_empty() {
            bail!("'keywords' must name at least one marker symbol");
        }
        for keyword in &self.keywords {
            if !KEYWORD_RE.is_match(keyword) {
                bail!("Invalid keyword in 'keywords': \"{}\" is not an identifier", keyword);
            }
        }

        if self.domain.is_empty() || self.domain.contains(['/', '\\']) {
            bail!("Invalid 'domain': \"{}\"", self.domain);
        }

        if let Some(lang) = self.languages.iter().find(|l| l.trim().is_empty()) {
            bail!("Invalid language in 'languages': \"{}\"", lang);
        }

        Ok(())
    }

    pub fn marker_config(&self) -> MarkerConfig {
        MarkerConfig::with_symbols(self.keywords.iter().cloned())
    }

    /// `<outputDir>/<domain>.pot`, relative to `root`.
    pub fn pot_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
            .join(format!("{}.pot", self.domain))
    }

    /// `<outputDir>/po/<lang>/<domain>.po`, relative to `root`.
    pub fn po_path(&self, root: &Path, lang: &str) -> PathBuf {
        root.join(&self.output_dir)
            .join("po")
            .join(lang)
            .join(format!("{}.po", self.domain))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
