use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::po::{PoEntry, PoFile};

/// Counts from bringing one `.po` file up to date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStats {
    pub total: usize,
    pub translated: usize,
    /// Template msgids the file had no translation for, live or obsolete.
    pub added: usize,
    /// Live entries moved to `#~` because their msgid left the template.
    pub obsolete: usize,
}

/// Merge `template` into an existing translation file.
///
/// The result follows the template's entry order and references. Translations,
/// translator comments and flags are carried over for msgids the file already
/// had, including `#~` entries, which come back to life. Entries that leave the
/// template are kept as `#~`. `header` is used only when `existing` has none.
pub fn merge(existing: Option<&PoFile>, template: &PoFile, header: PoEntry) -> (PoFile, MergeStats) {
    let (live, old_obsolete): (&[PoEntry], &[PoEntry]) = existing
        .map(|file| (file.entries.as_slice(), file.obsolete.as_slice()))
        .unwrap_or_default();

    // Live entries win over `#~` entries with the same msgid.
    let mut known: HashMap<&str, &PoEntry> = HashMap::new();
    for entry in live.iter().chain(old_obsolete) {
        if entry.msgctxt.is_none() {
            known.entry(entry.msgid.as_str()).or_insert(entry);
        }
    }

    let mut stats = MergeStats::default();
    let mut entries = Vec::with_capacity(template.entries.len());

    for entry in &template.entries {
        let mut merged = entry.clone();
        match known.get(entry.msgid.as_str()) {
            Some(old) => {
                merged.msgstr = old.msgstr.clone();
                merged.translator_comments = old.translator_comments.clone();
                merged.flags = old.flags.clone();
            }
            None => stats.added += 1,
        }
        entries.push(merged);
    }

    let is_current = |e: &PoEntry| e.msgctxt.is_none() && template.get(&e.msgid).is_some();
    let mut seen: HashSet<(Option<&str>, &str)> = HashSet::new();
    let mut obsolete = Vec::new();
    for (entry, was_live) in live
        .iter()
        .map(|e| (e, true))
        .chain(old_obsolete.iter().map(|e| (e, false)))
    {
        if is_current(entry) || !seen.insert((entry.msgctxt.as_deref(), entry.msgid.as_str())) {
            continue;
        }
        if was_live {
            stats.obsolete += 1;
        }
        obsolete.push(PoEntry {
            extracted_comments: Vec::new(),
            references: Vec::new(),
            ..entry.clone()
        });
    }

    let file = PoFile {
        header: existing
            .and_then(|f| f.header.clone())
            .or(Some(header)),
        entries,
        obsolete,
    };
    stats.total = file.entries.len();
    stats.translated = file.translated_count();

    (file, stats)
}
