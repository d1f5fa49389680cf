use anyhow::{Ok, Result};

use super::super::args::ExtractCommand;
use super::{
    CommandResult, CommandSummary, ExtractSummary,
    helper::{finish, write_output},
};
use crate::core::ExtractContext;

/// Write the template. Malformed calls are reported but do not stop the
/// write; the template carries every well-formed literal.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.common)?;
    let catalog = ctx.catalog();

    let (output, output_path) = match cmd.output {
        Some(path) => {
            let shown = path.display().to_string();
            (path, shown)
        }
        None => {
            let path = ctx.pot_path();
            let shown = ctx.display_path(&path);
            (path, shown)
        }
    };

    write_output(&output, &catalog.render_pot(&ctx.header()))?;

    Ok(finish(
        CommandSummary::Extract(ExtractSummary {
            output_path,
            message_count: catalog.len(),
            record_count: ctx.records().len(),
        }),
        ctx.issues().to_vec(),
        ctx.files.len(),
    ))
}
