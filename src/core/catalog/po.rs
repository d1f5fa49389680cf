//! Reading and writing gettext PO/POT files.
//!
//! Only the subset `glean` produces and merges is modelled: singular entries
//! with optional context, live or obsolete (`#~`). Plural entries are dropped
//! on parse.

use anyhow::{Result, anyhow, bail};

use crate::{
    config::Config,
    core::utils::{escape, unescape},
};

/// Width `#:` reference lines are packed to.
const REFERENCE_LINE_WIDTH: usize = 79;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoEntry {
    /// `# ` lines, written by translators.
    pub translator_comments: Vec<String>,
    /// `#.` lines, copied from source comments.
    pub extracted_comments: Vec<String>,
    /// `#:` references, `path:line`.
    pub references: Vec<String>,
    /// `#,` flags such as `fuzzy`.
    pub flags: Vec<String>,
    pub msgctxt: Option<String>,
    pub msgid: String,
    pub msgstr: String,
}

impl PoEntry {
    pub fn new(msgid: impl Into<String>) -> Self {
        Self {
            msgid: msgid.into(),
            ..Default::default()
        }
    }

    pub fn is_fuzzy(&self) -> bool {
        self.flags.iter().any(|f| f == "fuzzy")
    }

    pub fn is_translated(&self) -> bool {
        !self.msgstr.is_empty() && !self.is_fuzzy()
    }
}

/// A parsed or generated catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoFile {
    /// The `msgid ""` entry.
    pub header: Option<PoEntry>,
    pub entries: Vec<PoEntry>,
    /// `#~` entries, kept so their translations survive until the msgid returns.
    pub obsolete: Vec<PoEntry>,
}

impl PoFile {
    pub fn get(&self, msgid: &str) -> Option<&PoEntry> {
        self.entries
            .iter()
            .find(|e| e.msgctxt.is_none() && e.msgid == msgid)
    }

    pub fn translated_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_translated()).count()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let live = self.header.iter().chain(&self.entries).map(|e| (e, false));
        let obsolete = self.obsolete.iter().map(|e| (e, true));
        for (i, (entry, is_obsolete)) in live.chain(obsolete).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            render_entry(&mut out, entry, is_obsolete);
        }
        out
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut file = PoFile::default();
        let mut pending = Pending::default();

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();

            if line.is_empty() {
                pending.flush_into(&mut file);
                continue;
            }
            if let Some(rest) = line.strip_prefix("#~") {
                let rest = rest.trim();
                // `#~|` holds the previous msgid of a fuzzy match.
                if rest.is_empty() || rest.starts_with('|') {
                    continue;
                }
                pending.body_line(rest, line_no, &mut file)?;
                pending.obsolete = true;
                continue;
            }
            if let Some(rest) = line.strip_prefix('#') {
                if pending.has_msgstr {
                    pending.flush_into(&mut file);
                }
                pending.comment(rest);
                continue;
            }
            pending.body_line(line, line_no, &mut file)?;
        }

        pending.flush_into(&mut file);
        Ok(file)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Field {
    #[default]
    None,
    Msgctxt,
    Msgid,
    Msgstr,
    Skip,
}

/// Entry being assembled by the parser.
#[derive(Debug, Default)]
struct Pending {
    entry: PoEntry,
    field: Field,
    has_msgid: bool,
    has_msgstr: bool,
    plural: bool,
    obsolete: bool,
}

impl Pending {
    /// A keyword or continuation line, with any `#~` prefix removed.
    fn body_line(&mut self, line: &str, line_no: usize, file: &mut PoFile) -> Result<()> {
        if line.starts_with('"') {
            let text = parse_quoted(line, line_no)?;
            return self.append(&text, line_no);
        }

        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| anyhow!("line {}: unexpected content `{}`", line_no, line))?;
        let value = parse_quoted(rest.trim(), line_no)?;
        self.keyword(keyword, value, line_no, file)
    }

    fn comment(&mut self, rest: &str) {
        match rest.chars().next() {
            Some(',') => self.entry.flags.extend(
                rest[1..]
                    .split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(String::from),
            ),
            Some('.') => self
                .entry
                .extracted_comments
                .push(rest[1..].trim().to_string()),
            Some(':') => self
                .entry
                .references
                .extend(rest[1..].split_whitespace().map(String::from)),
            // Previous msgid of a fuzzy match.
            Some('|') => {}
            _ => self
                .entry
                .translator_comments
                .push(rest.strip_prefix(' ').unwrap_or(rest).to_string()),
        }
    }

    fn keyword(
        &mut self,
        keyword: &str,
        value: String,
        line_no: usize,
        file: &mut PoFile,
    ) -> Result<()> {
        match keyword {
            "msgctxt" => {
                if self.has_msgid {
                    self.flush_into(file);
                }
                self.entry.msgctxt = Some(value);
                self.field = Field::Msgctxt;
            }
            "msgid" => {
                if self.has_msgid {
                    self.flush_into(file);
                }
                self.entry.msgid = value;
                self.has_msgid = true;
                self.field = Field::Msgid;
            }
            "msgid_plural" => {
                self.plural = true;
                self.field = Field::Skip;
            }
            "msgstr" => {
                if !self.has_msgid {
                    bail!("line {}: msgstr without msgid", line_no);
                }
                self.entry.msgstr = value;
                self.has_msgstr = true;
                self.field = Field::Msgstr;
            }
            k if k.starts_with("msgstr[") => {
                self.plural = true;
                self.has_msgstr = true;
                self.field = Field::Skip;
            }
            _ => bail!("line {}: unknown keyword `{}`", line_no, keyword),
        }
        Ok(())
    }

    fn append(&mut self, text: &str, line_no: usize) -> Result<()> {
        match self.field {
            Field::Msgctxt => self
                .entry
                .msgctxt
                .get_or_insert_with(String::new)
                .push_str(text),
            Field::Msgid => self.entry.msgid.push_str(text),
            Field::Msgstr => self.entry.msgstr.push_str(text),
            Field::Skip => {}
            Field::None => bail!("line {}: string without a keyword", line_no),
        }
        Ok(())
    }

    fn flush_into(&mut self, file: &mut PoFile) {
        if !self.has_msgid {
            // Comments stay attached to the next entry.
            return;
        }
        let pending = std::mem::take(self);
        if pending.plural {
            return;
        }
        let entry = pending.entry;
        if pending.obsolete {
            file.obsolete.push(entry);
        } else if entry.msgid.is_empty() && entry.msgctxt.is_none() && file.header.is_none() {
            file.header = Some(entry);
        } else {
            file.entries.push(entry);
        }
    }
}

fn parse_quoted(text: &str, line_no: usize) -> Result<String> {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .map(unescape)
        .ok_or_else(|| anyhow!("line {}: expected a quoted string", line_no))
}

/// Obsolete entries keep translator comments and flags; their fields are
/// written behind `#~ `.
fn render_entry(out: &mut String, entry: &PoEntry, obsolete: bool) {
    for comment in &entry.translator_comments {
        if comment.is_empty() {
            out.push_str("#\n");
        } else {
            out.push_str(&format!("# {}\n", comment));
        }
    }
    if !obsolete {
        for comment in &entry.extracted_comments {
            out.push_str(&format!("#. {}\n", comment));
        }
        push_references(out, &entry.references);
    }
    if !entry.flags.is_empty() {
        out.push_str(&format!("#, {}\n", entry.flags.join(", ")));
    }
    let prefix = if obsolete { "#~ " } else { "" };
    if let Some(ctx) = &entry.msgctxt {
        push_field(out, prefix, "msgctxt", ctx);
    }
    push_field(out, prefix, "msgid", &entry.msgid);
    push_field(out, prefix, "msgstr", &entry.msgstr);
}

fn push_references(out: &mut String, references: &[String]) {
    let mut line = String::from("#:");
    for reference in references {
        if line.len() > 2 && line.len() + 1 + reference.len() > REFERENCE_LINE_WIDTH {
            out.push_str(&line);
            out.push('\n');
            line.truncate(2);
        }
        line.push(' ');
        line.push_str(reference);
    }
    if line.len() > 2 {
        out.push_str(&line);
        out.push('\n');
    }
}

/// Strings with inner newlines are split after each `\n`, gettext style.
fn push_field(out: &mut String, prefix: &str, keyword: &str, value: &str) {
    let segments: Vec<&str> = value.split_inclusive('\n').collect();
    if segments.len() > 1 {
        out.push_str(&format!("{}{} \"\"\n", prefix, keyword));
        for segment in segments {
            out.push_str(&format!("{}\"{}\"\n", prefix, escape(segment)));
        }
    } else {
        out.push_str(&format!("{}{} \"{}\"\n", prefix, keyword, escape(value)));
    }
}

/// Metadata written into the `msgid ""` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogHeader {
    pub package_name: String,
    pub package_version: String,
    pub copyright_holder: String,
    pub bugs_address: String,
    /// `None` for the template, the language code for a `.po` file.
    pub language: Option<String>,
}

impl CatalogHeader {
    pub fn from_config(config: &Config) -> Self {
        Self {
            package_name: config.package_name.clone(),
            package_version: config.package_version.clone(),
            copyright_holder: config.copyright_holder.clone(),
            bugs_address: config.bugs_address.clone(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn to_entry(&self) -> PoEntry {
        let mut comments = vec![match &self.language {
            None => format!("Translation template for {}.", self.package_name),
            Some(lang) => format!("{} translations for {}.", lang, self.package_name),
        }];
        if !self.copyright_holder.is_empty() {
            comments.push(format!("Copyright (C) {}", self.copyright_holder));
        }
        comments.push(format!(
            "This file is distributed under the same license as the {} package.",
            self.package_name
        ));

        let mut msgstr = format!(
            "Project-Id-Version: {} {}\nReport-Msgid-Bugs-To: {}\n",
            self.package_name, self.package_version, self.bugs_address
        );
        if let Some(lang) = &self.language {
            msgstr.push_str(&format!("Language: {}\n", lang));
        }
        msgstr.push_str(
            "MIME-Version: 1.0\nContent-Type: text/plain; charset=UTF-8\nContent-Transfer-Encoding: 8bit\n",
        );

        PoEntry {
            translator_comments: comments,
            flags: if self.language.is_none() {
                vec!["fuzzy".to_string()]
            } else {
                Vec::new()
            },
            msgstr,
            ..Default::default()
        }
    }
}
