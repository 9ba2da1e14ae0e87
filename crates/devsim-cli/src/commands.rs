use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use devsim_cli::pipeline::{
    GenerateConfig, Generation, export_registry, generate, write_identities, write_script,
};
use devsim_core::{IdentityHints, SeedPolicy};
use devsim_registry::{ReferenceRegistry, load_registry};

use crate::cli::{ExportArgs, GenerateArgs};
use crate::summary::{apply_table_style, header_cell};

/// Where a generation run put its output.
pub struct GenerateOutcome {
    pub generation: Generation,
    pub identities_path: Option<PathBuf>,
    pub commands_path: Option<PathBuf>,
}

fn load(registry_path: Option<&Path>) -> Result<ReferenceRegistry> {
    load_registry(registry_path).context("load reference tables")
}

pub fn run_generate(args: &GenerateArgs, registry_path: Option<&Path>) -> Result<GenerateOutcome> {
    let registry = load(registry_path)?;
    if args.count == 0 {
        warn!("identity count is zero, output files will be empty");
    }
    let hints = IdentityHints {
        model: args.model.clone(),
        region: args.region.clone(),
        carrier: args.carrier.clone(),
    };
    let config = GenerateConfig {
        count: args.count,
        hints,
        seed: SeedPolicy::from_option(args.seed),
    };

    let generation = generate(&registry, &config);

    let output_span = info_span!("output");
    let _output_guard = output_span.enter();
    write_identities(&args.output, &generation.identities)?;
    let commands_path = if args.stdout {
        print!("{}", generation.script_text());
        None
    } else {
        write_script(&args.commands_file, &generation)?;
        Some(args.commands_file.clone())
    };
    info!(seed = generation.seed, "generation complete");

    Ok(GenerateOutcome {
        generation,
        identities_path: Some(args.output.clone()),
        commands_path,
    })
}

pub fn run_regions(registry_path: Option<&Path>) -> Result<()> {
    let registry = load(registry_path)?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("MCC"),
        header_cell("Carrier"),
        header_cell("MNC"),
        header_cell("Phone prefixes"),
    ]);
    apply_table_style(&mut table);
    for region in registry.regions() {
        let prefixes = region.phone_prefixes.join(" ");
        if region.carriers.is_empty() {
            table.add_row(vec![
                region.name.as_str(),
                region.mobile_country_code.as_str(),
                "-",
                "-",
                prefixes.as_str(),
            ]);
            continue;
        }
        for (carrier, codes) in &region.carriers {
            table.add_row(vec![
                region.name.clone(),
                region.mobile_country_code.clone(),
                carrier.clone(),
                codes.join(", "),
                prefixes.clone(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_models(registry_path: Option<&Path>) -> Result<()> {
    let registry = load(registry_path)?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Brand"),
        header_cell("Model"),
        header_cell("TAC"),
    ]);
    apply_table_style(&mut table);
    for catalog in registry.brand_catalogs() {
        for (model, tac) in &catalog.models {
            table.add_row(vec![catalog.brand.as_str(), model.as_str(), tac.as_str()]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_export_registry(args: &ExportArgs, registry_path: Option<&Path>) -> Result<PathBuf> {
    let registry = load(registry_path)?;
    export_registry(&registry, &args.output)
}
