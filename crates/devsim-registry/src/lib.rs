#![deny(unsafe_code)]

mod builtin;
pub mod error;
pub mod file;
pub mod paths;
pub mod registry;

pub use crate::error::RegistryError;
pub use crate::file::{ReferenceFile, RegionEntry};
pub use crate::paths::{REGISTRY_ENV_VAR, load_registry, resolve_registry_path};
pub use crate::registry::ReferenceRegistry;
