// Run the boot-time override policy against a build.prop snapshot
//
// Mirrors what init does on device: the snapshot stands in for the property
// area and vendor_load_properties runs against it unchanged.

use anyhow::{Context, Result};
use ks01lte_init::{LoadReport, constants::PROP_BOOTLOADER, vendor_load_properties};
use ks01lte_sysprop::{Change, MemoryStore, changes, prop_file, property_override};
use std::path::{Path, PathBuf};

use crate::config::PropsConfig;
use crate::report;
use crate::utils::{success, warning};

/// Options for the `apply` command
#[derive(Debug)]
pub struct ApplyOptions<'a> {
    /// Snapshot to start from
    pub props: &'a Path,
    /// Replaces `ro.bootloader` from the snapshot
    pub bootloader: Option<&'a str>,
    /// Apply the radio block from the configuration
    pub radio: bool,
    /// Where to write the resulting snapshot
    pub output: Option<PathBuf>,
    /// Print JSON instead of the coloured summary
    pub json: bool,
}

/// Snapshot after the policy ran, with what it changed
#[derive(Debug)]
pub struct ApplyResult {
    pub store: MemoryStore,
    pub report: LoadReport,
    pub changes: Vec<Change>,
}

impl ApplyResult {
    /// Neither the variant nor the radio block changed anything
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Run the policy on `store` and collect the differences
pub fn simulate(
    mut store: MemoryStore,
    bootloader: Option<&str>,
    config: Option<&PropsConfig>,
) -> Result<ApplyResult> {
    if let Some(bootloader) = bootloader {
        property_override(&mut store, PROP_BOOTLOADER, bootloader, true);
    }
    let before = store.clone();

    let report = vendor_load_properties(&mut store);

    if let Some(config) = config {
        let radio = config
            .radio
            .as_ref()
            .context("No radio profile configured (see `config show`)")?;
        log::debug!("Applying radio profile {radio:?}");
        radio.apply(&mut store);
    }

    let changes = changes(&before, &store);
    Ok(ApplyResult {
        store,
        report,
        changes,
    })
}

/// Handle the `apply` command
pub fn run_apply(opts: &ApplyOptions<'_>, config_path: Option<&Path>) -> Result<()> {
    let store = prop_file::load(opts.props)
        .with_context(|| format!("Failed to load properties: {}", opts.props.display()))?;

    let config = if opts.radio {
        Some(PropsConfig::load(config_path)?)
    } else {
        None
    };

    let result = simulate(store, opts.bootloader, config.as_ref())?;

    if opts.json {
        println!("{}", report::apply_json(&result.report, &result.changes)?);
    } else {
        report::print_apply(&result.report, &result.changes);
    }

    if let Some(output) = &opts.output {
        let text = prop_file::render(&result.store)
            .with_context(|| format!("Failed to render properties for {}", output.display()))?;
        std::fs::write(output, text)
            .with_context(|| format!("Failed to write properties: {}", output.display()))?;
        if !opts.json {
            success(&format!("Wrote {}", output.display()));
        }
    } else if !opts.json && result.is_noop() {
        warning("Nothing to write");
    }

    Ok(())
}
