use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::core::ExtractContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.common)?;

    Ok(finish(
        CommandSummary::Check,
        ctx.issues().to_vec(),
        ctx.files.len(),
    ))
}
