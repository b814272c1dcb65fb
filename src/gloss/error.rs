use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the gloss transformer.
///
/// The pipeline itself never fails once it is built: every error here comes
/// from the one-time resource load or from opening an asset catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlossError {
    #[error("failed to initialize language resource '{resource}': {reason}")]
    ResourceInit { resource: String, reason: String },

    #[error("malformed {resource} entry on line {line}: {reason}")]
    MalformedResource {
        resource: String,
        line: usize,
        reason: String,
    },

    #[error("cannot open asset catalog at {path}: {reason}")]
    Catalog { path: PathBuf, reason: String },
}

impl GlossError {
    pub(crate) fn resource_init(resource: &str, reason: impl ToString) -> Self {
        GlossError::ResourceInit {
            resource: resource.to_string(),
            reason: reason.to_string(),
        }
    }
}
