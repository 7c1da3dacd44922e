use clap::{ArgAction, Args, Parser, Subcommand};
use facesgen::config::GenConfig;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.2"
/// Format for dev builds: "v0.3.2\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "facesgen",
    bin_name = "facesgen",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Generates faces component descriptors from component declarations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "project", value_name = "DIR", global = true, help_heading = "Options")]
    pub project: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,
}

/// Where declarations are read from. Overrides `facesgen.json` for one run.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Directory scanned for type descriptors
    #[arg(long, value_name = "DIR")]
    pub classes_dir: Option<PathBuf>,

    /// Extra descriptor root for ancestor types (repeatable)
    #[arg(long = "classpath", value_name = "DIR")]
    pub classpath: Vec<PathBuf>,
}

impl SourceArgs {
    pub fn apply(&self, config: &mut GenConfig) {
        if let Some(dir) = &self.classes_dir {
            config.classes_dir = dir.clone();
        }
        config.classpath.extend(self.classpath.iter().cloned());
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Base directory for generated files
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Taglib namespace URI
    #[arg(long, value_name = "URI")]
    pub namespace: Option<String>,
}

impl GenerateArgs {
    pub fn apply(&self, config: &mut GenConfig) {
        self.source.apply(config);
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = Some(namespace.clone());
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the catalog and write every configured output
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// List components
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Show each component's attributes
        #[arg(short, long)]
        attributes: bool,
    },

    /// Show one component and its attributes
    Show {
        /// Component (tag) name
        name: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List the types found in the classes directory
    Discover {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write a default facesgen.json to the project directory
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (classes-dir, output-dir, namespace, descriptor-ext, scan-depth, max-hierarchy-depth)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
