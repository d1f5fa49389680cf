use std::fs;

use anyhow::{Context, Ok, Result};

use super::super::args::UpdateCommand;
use super::{
    CommandResult, CommandSummary, LanguageUpdate, UpdateSummary,
    helper::{finish, write_output},
};
use crate::{
    core::{
        ExtractContext,
        catalog::{PoFile, merge},
    },
    issues::Severity,
};

/// Merge the current template into `<outputDir>/po/<lang>/<domain>.po` for
/// every configured language. Nothing is written unless `--apply` is given.
///
/// A template built from a failed extraction misses msgids, and merging it
/// would turn their translations obsolete, so error-severity issues block
/// every write.
pub fn update(cmd: UpdateCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.common)?;
    let template = ctx.catalog().to_template(&ctx.header());
    let blocked = ctx
        .issues()
        .iter()
        .any(|issue| issue.severity() == Severity::Error);

    let mut languages = Vec::with_capacity(ctx.config.languages.len());
    for language in &ctx.config.languages {
        let path = ctx.po_path(language);

        let current = if path.exists() {
            Some(
                fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            )
        } else {
            None
        };
        let existing = current
            .as_deref()
            .map(|text| {
                PoFile::parse(text).with_context(|| format!("Failed to parse {}", path.display()))
            })
            .transpose()?;

        let header = ctx.header().with_language(language.as_str()).to_entry();
        let (merged, stats) = merge(existing.as_ref(), &template, header);
        let rendered = merged.render();
        let changed = current.as_deref() != Some(rendered.as_str());

        if cmd.apply && changed && !blocked {
            write_output(&path, &rendered)?;
        }

        languages.push(LanguageUpdate {
            language: language.clone(),
            path: ctx.display_path(&path),
            created: current.is_none(),
            changed,
            stats,
        });
    }

    Ok(finish(
        CommandSummary::Update(UpdateSummary {
            is_apply: cmd.apply,
            blocked,
            languages,
        }),
        ctx.issues().to_vec(),
        ctx.files.len(),
    ))
}
