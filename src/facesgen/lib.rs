//! # Facesgen Architecture
//!
//! Facesgen turns component type declarations into the descriptor files a
//! Faces runtime needs to expose those components as tags. It is a library
//! that happens to have a CLI client, not the other way around.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the provider and the loaded configuration           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - discover, catalog, generate, config, init                │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (discovery, merge, component, catalog)                │
//! │  - Walks type hierarchies through a DeclarationProvider     │
//! │  - FileProvider (production), InMemoryProvider (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Run
//!
//! 1. [`discovery`] lists the types found under the build output directory.
//! 2. For each type declared as a component, [`component`] resolves its tag
//!    name and asks [`merge`] for the attributes of the whole ancestor chain.
//!    Nearer declarations win.
//! 3. [`catalog`] collects the components, resolves name collisions, and
//!    freezes them in name order.
//! 4. `commands::generate` renders every configured output template from the
//!    frozen catalog.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never calls
//! `std::process::exit`. Diagnostics go through `tracing`; the binary decides
//! where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: thorough unit tests against `InMemoryProvider`
//!    and temporary directories. This is where most tests live.
//! 2. **API**: dispatch tests.
//! 3. **CLI**: argument parsing, rendering of canned results, and end-to-end
//!    runs of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`provider`]: Declaration lookup abstraction and implementations
//! - [`model`]: Core data types (`TypeId`, `Component`, `Attribute`)
//! - [`naming`]: Tag names and type names derived from paths
//! - [`config`]: Configuration management
//! - [`templates`]: Builtin descriptor templates
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod component;
pub mod config;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod model;
pub mod naming;
pub mod provider;
pub mod templates;
