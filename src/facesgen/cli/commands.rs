use super::logging;
use super::render::{render_component, render_component_list, render_text_list};
use super::setup::{Cli, Commands, GenerateArgs, SourceArgs};
use clap::Parser;
use colored::*;
use facesgen::api::{CmdMessage, ConfigAction, FacesgenApi, MessageLevel, ProjectPaths};
use facesgen::config::GenConfig;
use facesgen::error::{FacesgenError, Result};
use facesgen::provider::fs::FileProvider;
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let root = project_root(cli.project)?;
    tracing::debug!(project = %root.display(), "project directory");

    match cli.command {
        Some(Commands::Generate(args)) => handle_generate(&root, &args),
        Some(Commands::List { source, attributes }) => handle_list(&root, &source, attributes),
        Some(Commands::Show { name, source }) => handle_show(&root, &source, &name),
        Some(Commands::Discover { source }) => handle_discover(&root, &source),
        Some(Commands::Init) => handle_init(&root),
        Some(Commands::Config { key, value }) => handle_config(&root, key, value),
        None => handle_generate(&root, &GenerateArgs::default()),
    }
}

fn project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(dir) if dir.is_dir() => Ok(dir),
        Some(dir) => Err(FacesgenError::Config(format!(
            "Project directory not found: {}",
            dir.display()
        ))),
        None => std::env::current_dir().map_err(FacesgenError::Io),
    }
}

/// Loads `facesgen.json` and wires a file-backed API for it.
fn init_api(root: &Path, apply: impl FnOnce(&mut GenConfig)) -> Result<FacesgenApi<FileProvider>> {
    let mut config = GenConfig::load(root)?;
    apply(&mut config);

    let provider = FileProvider::new(config.descriptor_roots(root))
        .with_descriptor_ext(&config.descriptor_ext);
    Ok(FacesgenApi::new(provider, ProjectPaths::new(root), config))
}

fn handle_generate(root: &Path, args: &GenerateArgs) -> Result<()> {
    let api = init_api(root, |config| args.apply(config))?;
    let result = api.generate()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(root: &Path, source: &SourceArgs, attributes: bool) -> Result<()> {
    let api = init_api(root, |config| source.apply(config))?;
    let result = api.catalog()?;
    if let Some(catalog) = &result.catalog {
        print!("{}", render_component_list(catalog.components(), attributes));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(root: &Path, source: &SourceArgs, name: &str) -> Result<()> {
    let api = init_api(root, |config| source.apply(config))?;
    let result = api.show(name)?;
    if let Some(component) = result.catalog.as_ref().and_then(|c| c.get(name)) {
        print!("{}", render_component(component));
    }
    print_messages(
        &result
            .messages
            .into_iter()
            .filter(|m| m.level != MessageLevel::Info)
            .collect::<Vec<_>>(),
    );
    Ok(())
}

fn handle_discover(root: &Path, source: &SourceArgs) -> Result<()> {
    let api = init_api(root, |config| source.apply(config))?;
    let result = api.discover()?;
    let lines: Vec<String> = result.types.iter().map(|t| t.to_string()).collect();
    print!("{}", render_text_list(&lines, "No types found."));
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(root: &Path) -> Result<()> {
    let api = init_api(root, |_| {})?;
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(root: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let api = init_api(root, |_| {})?;
    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in GenConfig::keys() {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
