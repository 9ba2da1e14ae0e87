//! Reference file path resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::RegistryError;
use crate::registry::ReferenceRegistry;

/// Environment variable naming a reference file to load instead of the
/// built-in tables.
pub const REGISTRY_ENV_VAR: &str = "DEVSIM_REGISTRY";

/// Pick the reference file to load.
///
/// Resolution order:
/// 1. explicit path
/// 2. `DEVSIM_REGISTRY` environment variable (ignored when empty)
/// 3. none, meaning the built-in tables
pub fn resolve_registry_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(REGISTRY_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load the registry following [`resolve_registry_path`].
pub fn load_registry(explicit: Option<&Path>) -> Result<ReferenceRegistry, RegistryError> {
    match resolve_registry_path(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading reference file");
            ReferenceRegistry::from_path(&path)
        }
        None => {
            debug!("using built-in reference tables");
            ReferenceRegistry::builtin()
        }
    }
}
