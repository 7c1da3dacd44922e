use crate::discovery::DEFAULT_SCAN_DEPTH;
use crate::error::{FacesgenError, Result};
use crate::merge::DEFAULT_MAX_HIERARCHY_DEPTH;
use crate::provider::fs::DEFAULT_DESCRIPTOR_EXT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "facesgen.json";
const DEFAULT_CLASSES_DIR: &str = "target/classes";
const DEFAULT_TAGLIB_PATH: &str = "META-INF/components.taglib.xml";

/// One rendered file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Builtin template name (`taglib.xml`, `faces-config.xml`) or a template file
    /// path relative to the project root.
    pub template: String,
    /// Destination, relative to `output_dir`.
    pub path: PathBuf,
}

/// Configuration for facesgen, stored in `facesgen.json` at the project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenConfig {
    /// Directory scanned for type descriptors
    #[serde(default = "default_classes_dir")]
    pub classes_dir: PathBuf,

    /// Extra descriptor roots, searched after `classes_dir` for ancestor types
    #[serde(default)]
    pub classpath: Vec<PathBuf>,

    /// Descriptor file extension (e.g. ".json")
    #[serde(default = "default_descriptor_ext")]
    pub descriptor_ext: String,

    #[serde(default = "default_scan_depth")]
    pub scan_depth: usize,

    #[serde(default = "default_max_hierarchy_depth")]
    pub max_hierarchy_depth: usize,

    /// Base directory for generated files
    #[serde(default = "default_classes_dir")]
    pub output_dir: PathBuf,

    /// Taglib namespace URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default = "default_outputs")]
    pub outputs: Vec<OutputConfig>,
}

fn default_classes_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CLASSES_DIR)
}

fn default_descriptor_ext() -> String {
    DEFAULT_DESCRIPTOR_EXT.to_string()
}

fn default_scan_depth() -> usize {
    DEFAULT_SCAN_DEPTH
}

fn default_max_hierarchy_depth() -> usize {
    DEFAULT_MAX_HIERARCHY_DEPTH
}

fn default_outputs() -> Vec<OutputConfig> {
    vec![OutputConfig {
        template: "taglib.xml".to_string(),
        path: PathBuf::from(DEFAULT_TAGLIB_PATH),
    }]
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            classes_dir: default_classes_dir(),
            classpath: Vec::new(),
            descriptor_ext: default_descriptor_ext(),
            scan_depth: default_scan_depth(),
            max_hierarchy_depth: default_max_hierarchy_depth(),
            output_dir: default_classes_dir(),
            namespace: None,
            outputs: default_outputs(),
        }
    }
}

impl GenConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FacesgenError::Io)?;
        let config: GenConfig =
            serde_json::from_str(&content).map_err(FacesgenError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FacesgenError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FacesgenError::Serialization)?;
        fs::write(config_path, content).map_err(FacesgenError::Io)?;
        Ok(())
    }

    /// Set the descriptor extension (normalizes to start with a dot)
    pub fn set_descriptor_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.descriptor_ext = ext.to_string();
        } else {
            self.descriptor_ext = format!(".{}", ext);
        }
    }

    /// Every descriptor root, build output first.
    pub fn descriptor_roots(&self, project_root: &Path) -> Vec<PathBuf> {
        std::iter::once(&self.classes_dir)
            .chain(self.classpath.iter())
            .map(|dir| project_root.join(dir))
            .collect()
    }

    /// Value of a settable key, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "classes-dir" => Some(self.classes_dir.display().to_string()),
            "output-dir" => Some(self.output_dir.display().to_string()),
            "namespace" => Some(self.namespace.clone().unwrap_or_default()),
            "descriptor-ext" => Some(self.descriptor_ext.clone()),
            "scan-depth" => Some(self.scan_depth.to_string()),
            "max-hierarchy-depth" => Some(self.max_hierarchy_depth.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "classes-dir" => self.classes_dir = PathBuf::from(value),
            "output-dir" => self.output_dir = PathBuf::from(value),
            "namespace" => {
                self.namespace = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "descriptor-ext" => self.set_descriptor_ext(value),
            "scan-depth" => self.scan_depth = parse_depth(key, value)?,
            "max-hierarchy-depth" => self.max_hierarchy_depth = parse_depth(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "classes-dir",
            "output-dir",
            "namespace",
            "descriptor-ext",
            "scan-depth",
            "max-hierarchy-depth",
        ]
    }
}

fn parse_depth(key: &str, value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive number, got '{}'", key, value)),
    }
}
