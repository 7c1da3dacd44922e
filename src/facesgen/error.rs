use crate::model::TypeId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacesgenError {
    #[error("Unresolvable type: {0}")]
    UnresolvableType(TypeId),

    #[error("Malformed declaration on {type_name}: {reason}")]
    MalformedDeclaration { type_name: TypeId, reason: String },

    #[error("Type hierarchy of {type_name} is deeper than {max_depth} levels (cyclic parent?)")]
    HierarchyTooDeep { type_name: TypeId, max_depth: usize },

    #[error("Invalid descriptor {}: {source}", path.display())]
    Descriptor {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Template error: {0}")]
    Template(#[from] taglet::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FacesgenError>;
