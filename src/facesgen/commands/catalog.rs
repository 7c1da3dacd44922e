use crate::catalog::build_catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TypeId;
use crate::provider::DeclarationProvider;

pub fn run<P: DeclarationProvider + ?Sized>(
    provider: &P,
    types: &[TypeId],
    max_depth: usize,
) -> Result<CmdResult> {
    let catalog = build_catalog(provider, types, max_depth)?;

    let mut result = CmdResult::default();
    for duplicate in catalog.duplicates() {
        result.add_message(CmdMessage::warning(format!(
            "Component name '{}' is used by {} and {}; keeping {}",
            duplicate.name, duplicate.replaced, duplicate.winner, duplicate.winner
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "{} component(s) from {} type(s)",
        catalog.len(),
        types.len()
    )));

    Ok(result.with_types(types.to_vec()).with_catalog(catalog))
}
