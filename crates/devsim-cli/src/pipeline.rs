//! Generation run: identities, directive scripts and their output files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use devsim_core::{
    GENERATOR_STREAM, IdentityGenerator, IdentityHints, MAPPER_STREAM, SeedPolicy, SeededRandom,
};
use devsim_directive::{Directive, DirectiveMapper, render_script};
use devsim_model::DeviceIdentity;
use devsim_registry::ReferenceRegistry;

/// Parameters of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub count: usize,
    pub hints: IdentityHints,
    pub seed: SeedPolicy,
}

/// Identities and their directive lists, plus the seed that reproduces them.
#[derive(Debug, Clone)]
pub struct Generation {
    pub seed: u64,
    pub identities: Vec<DeviceIdentity>,
    pub scripts: Vec<Vec<Directive>>,
}

impl Generation {
    pub fn script_text(&self) -> String {
        render_script(&self.scripts)
    }
}

/// Generate identities and map them to directives.
///
/// The generator and the mapper draw from separate streams of the same seed,
/// so identities for a seed do not change when directive rendering changes.
pub fn generate(registry: &ReferenceRegistry, config: &GenerateConfig) -> Generation {
    let seed = config.seed.resolve();
    info!(seed, count = config.count, "generating identities");

    let identities = info_span!("generate", count = config.count).in_scope(|| {
        IdentityGenerator::new(registry, SeededRandom::new(seed, GENERATOR_STREAM))
            .generate_batch(config.count, &config.hints)
    });
    let scripts = info_span!("map").in_scope(|| {
        DirectiveMapper::new(registry, SeededRandom::new(seed, MAPPER_STREAM))
            .to_directives_batch(&identities)
    });
    debug!(
        directives = scripts.iter().map(Vec::len).sum::<usize>(),
        "mapped identities to directives"
    );

    Generation {
        seed,
        identities,
        scripts,
    }
}

/// Write identities as a pretty-printed JSON array.
pub fn write_identities(path: &Path, identities: &[DeviceIdentity]) -> Result<()> {
    let json = serde_json::to_string_pretty(identities).context("serialize identities")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("write identities to {}", path.display()))?;
    info!(path = %path.display(), count = identities.len(), "wrote identities");
    Ok(())
}

/// Read identities written by [`write_identities`].
pub fn read_identities(path: &Path) -> Result<Vec<DeviceIdentity>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

pub fn write_script(path: &Path, generation: &Generation) -> Result<()> {
    fs::write(path, generation.script_text())
        .with_context(|| format!("write directive script to {}", path.display()))?;
    info!(path = %path.display(), "wrote directive script");
    Ok(())
}

/// Write the registry's tables as JSON or TOML, chosen by extension.
pub fn export_registry(registry: &ReferenceRegistry, path: &Path) -> Result<PathBuf> {
    let file = registry.to_reference_file();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let contents = match extension.as_deref() {
        Some("json") => file.to_json_pretty().context("serialize reference tables")? + "\n",
        Some("toml") => toml::to_string_pretty(&file).context("serialize reference tables")?,
        _ => bail!(
            "unsupported export format for {} (expected .json or .toml)",
            path.display()
        ),
    };
    fs::write(path, contents)
        .with_context(|| format!("write reference tables to {}", path.display()))?;
    info!(path = %path.display(), "exported reference tables");
    Ok(path.to_path_buf())
}
