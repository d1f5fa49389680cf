use std::{fs, path::Path};

use anyhow::{Context, Ok, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()? + "\n")
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(finish(
        CommandSummary::Init(InitSummary {
            path: CONFIG_FILE_NAME.to_string(),
        }),
        Vec::new(),
        0,
    ))
}
