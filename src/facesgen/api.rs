//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! facesgen operation, whatever the client.
//!
//! The facade dispatches to `commands/*.rs`, owns the descriptor provider and
//! the loaded configuration, and returns structured `CmdResult` values. It does
//! no business logic and no terminal I/O.
//!
//! ## Generic Over DeclarationProvider
//!
//! `FacesgenApi<P: DeclarationProvider>` runs against any source of type
//! declarations:
//! - Production: `FacesgenApi<FileProvider>`
//! - Testing: `FacesgenApi<InMemoryProvider>`
//!
//! Discovery always walks `classes_dir` on disk; the provider only answers
//! questions about individual types. Tests that skip the filesystem pass their
//! type list straight to [`FacesgenApi::catalog_types`].

use crate::catalog::CatalogBuilder;
use crate::commands;
use crate::config::GenConfig;
use crate::error::Result;
use crate::model::TypeId;
use crate::provider::DeclarationProvider;

pub struct FacesgenApi<P: DeclarationProvider> {
    provider: P,
    paths: commands::ProjectPaths,
    config: GenConfig,
}

impl<P: DeclarationProvider> FacesgenApi<P> {
    pub fn new(provider: P, paths: commands::ProjectPaths, config: GenConfig) -> Self {
        Self {
            provider,
            paths,
            config,
        }
    }

    pub fn discover(&self) -> Result<commands::CmdResult> {
        commands::discover::run(&self.paths, &self.config)
    }

    /// Discovers types, then builds the catalog from them.
    pub fn catalog(&self) -> Result<commands::CmdResult> {
        let discovered = self.discover()?;
        let result = self.catalog_types(&discovered.types)?;
        Ok(prepend_messages(discovered, result))
    }

    pub fn catalog_types(&self, types: &[TypeId]) -> Result<commands::CmdResult> {
        commands::catalog::run(&self.provider, types, self.config.max_hierarchy_depth)
    }

    /// One full run: discover, build the catalog once, render every output.
    pub fn generate(&self) -> Result<commands::CmdResult> {
        let discovered = self.discover()?;
        let result = self.generate_types(&discovered.types)?;
        Ok(prepend_messages(discovered, result))
    }

    pub fn generate_types(&self, types: &[TypeId]) -> Result<commands::CmdResult> {
        let mut built = self.catalog_types(types)?;
        let catalog = built.catalog.take().unwrap_or_else(|| CatalogBuilder::new().finalize());

        let result = commands::generate::run(&self.paths, &self.config, &catalog)?;
        Ok(prepend_messages(built, result)
            .with_types(types.to_vec())
            .with_catalog(catalog))
    }

    /// Looks a single component up by name.
    pub fn show(&self, name: &str) -> Result<commands::CmdResult> {
        let mut result = self.catalog()?;
        let found = result.catalog.as_ref().and_then(|c| c.get(name)).is_some();
        if !found {
            result.add_message(commands::CmdMessage::error(format!(
                "No component named '{}'",
                name
            )));
        }
        Ok(result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::ProjectPaths {
        &self.paths
    }
}

// Earlier steps report first.
fn prepend_messages(
    mut earlier: commands::CmdResult,
    mut later: commands::CmdResult,
) -> commands::CmdResult {
    earlier.messages.append(&mut later.messages);
    later.messages = earlier.messages;
    later
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ProjectPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeDecl;
    use crate::provider::memory::fixtures::ProviderFixture;
    use crate::provider::memory::InMemoryProvider;
    use std::fs;
    use tempfile::TempDir;

    fn api_with(provider: InMemoryProvider, dir: &TempDir) -> FacesgenApi<InMemoryProvider> {
        let mut config = GenConfig::default();
        config.namespace = Some("http://example.org/ui".into());
        FacesgenApi::new(provider, ProjectPaths::new(dir.path()), config)
    }

    fn ids(names: &[&str]) -> Vec<TypeId> {
        names.iter().map(|n| TypeId::from(*n)).collect()
    }

    #[test]
    fn catalog_types_dispatches_to_catalog_command() {
        let dir = TempDir::new().unwrap();
        let provider = ProviderFixture::new()
            .with_component("ui.Button", None, "", &[])
            .provider;
        let api = api_with(provider, &dir);

        let result = api.catalog_types(&ids(&["ui.Button"])).unwrap();
        let catalog = result.catalog.as_ref().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("button").is_some());
    }

    #[test]
    fn discover_on_missing_classes_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let api = api_with(InMemoryProvider::new(), &dir);
        let result = api.discover().unwrap();
        assert!(result.types.is_empty());
    }

    #[test]
    fn catalog_keeps_discovery_warnings_first() {
        let dir = TempDir::new().unwrap();
        let api = api_with(InMemoryProvider::new(), &dir);
        let result = api.catalog().unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.catalog.unwrap().is_empty());
    }

    #[test]
    fn generate_types_writes_outputs_and_keeps_catalog() {
        let dir = TempDir::new().unwrap();
        let provider = ProviderFixture::new()
            .with_base("ui.Base", &[("id", AttributeDecl::default())])
            .with_component("ui.Button", Some("ui.Base"), "", &[])
            .provider;
        let api = api_with(provider, &dir);

        let result = api.generate_types(&ids(&["ui.Base", "ui.Button"])).unwrap();
        assert_eq!(result.types.len(), 2);
        assert_eq!(result.written_paths.len(), 1);
        assert_eq!(result.catalog.as_ref().unwrap().len(), 1);
        assert!(result.has_level(MessageLevel::Success));

        let xml = fs::read_to_string(&result.written_paths[0]).unwrap();
        assert!(xml.contains("<tag-name>button</tag-name>"));
        assert!(xml.contains("<name>id</name>"));
    }

    #[test]
    fn show_reports_unknown_component() {
        let dir = TempDir::new().unwrap();
        let api = api_with(InMemoryProvider::new(), &dir);
        let result = api.show("nothing").unwrap();
        assert!(result.has_level(MessageLevel::Error));
    }

    #[test]
    fn init_then_config_show_all() {
        let dir = TempDir::new().unwrap();
        let api = api_with(InMemoryProvider::new(), &dir);

        api.init().unwrap();
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert!(result.config.is_some());
    }
}
