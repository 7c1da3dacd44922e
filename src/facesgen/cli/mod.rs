//! # CLI Behavior
//!
//! This is **one possible client** for facesgen. It is the only place that knows
//! about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of `facesgen`.
//!
//! ## Naked Execution (`facesgen`)
//!
//! Running `facesgen` with no subcommand is the same as `facesgen generate`.
//! Build scripts call it after compilation, so the common case needs no arguments.
//!
//! ## Project Directory
//!
//! Every path in `facesgen.json` is relative to the project directory: the current
//! directory, or the one given with `-C/--project`. Flags such as `--classes-dir`
//! override the file for a single run and are never written back.
//!
//! ## Output Streams
//!
//! Results and messages go to stdout. Log events go to stderr, filtered by
//! `FACESGEN_LOG` or the `-v` count.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting through taglet templates
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal theme
//! - `templates`: Output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
