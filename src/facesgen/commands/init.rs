use crate::commands::{CmdMessage, CmdResult, ProjectPaths};
use crate::config::{GenConfig, CONFIG_FILENAME};
use crate::error::Result;

pub fn run(paths: &ProjectPaths) -> Result<CmdResult> {
    let config_path = paths.root.join(CONFIG_FILENAME);
    let mut result = CmdResult::default();

    if config_path.exists() {
        result.add_message(CmdMessage::info(format!(
            "Config already exists at {}",
            config_path.display()
        )));
        return Ok(result.with_config(GenConfig::load(&paths.root)?));
    }

    let config = GenConfig::default();
    config.save(&paths.root)?;
    result.add_message(CmdMessage::success(format!(
        "Wrote default config to {}",
        config_path.display()
    )));
    Ok(result.with_config(config))
}
