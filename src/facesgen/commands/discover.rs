use crate::commands::{CmdMessage, CmdResult, ProjectPaths};
use crate::config::GenConfig;
use crate::discovery::discover_types;
use crate::error::Result;

pub fn run(paths: &ProjectPaths, config: &GenConfig) -> Result<CmdResult> {
    let classes_dir = paths.resolve(&config.classes_dir);
    let types = discover_types(&classes_dir, &config.descriptor_ext, config.scan_depth)?;

    let mut result = CmdResult::default();
    if !classes_dir.is_dir() {
        result.add_message(CmdMessage::warning(format!(
            "Classes directory not found: {}",
            classes_dir.display()
        )));
    } else if types.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No descriptors found in {}",
            classes_dir.display()
        )));
    }
    Ok(result.with_types(types))
}
