// Rendering of override results for the terminal and for scripts

use anyhow::Result;
use colored::Colorize;
use ks01lte_init::{LoadReport, VARIANTS, Variant};
use ks01lte_sysprop::Change;
use serde::Serialize;

use crate::utils::{info, print_title_bar, success, warning};

#[derive(Debug, Serialize)]
struct ChangeEntry<'a> {
    key: &'a str,
    before: Option<&'a str>,
    after: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ApplyOutput<'a> {
    bootloader: &'a str,
    variant: Option<&'a Variant>,
    device: &'a str,
    changes: Vec<ChangeEntry<'a>>,
}

/// Machine-readable form of an `apply` run
pub fn apply_json(report: &LoadReport, changes: &[Change]) -> Result<String> {
    let output = ApplyOutput {
        bootloader: &report.bootloader,
        variant: report.variant,
        device: &report.device,
        changes: changes
            .iter()
            .map(|c| ChangeEntry {
                key: &c.key,
                before: c.before.as_deref(),
                after: c.after.as_deref(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// One line per change: `key: old -> new`, with `+` for created properties
pub fn format_change(change: &Change) -> String {
    match (&change.before, &change.after) {
        (None, Some(after)) => format!("+ {} = {after}", change.key),
        (Some(before), None) => format!("- {} (was {before})", change.key),
        (Some(before), Some(after)) => format!("~ {}: {before} -> {after}", change.key),
        (None, None) => format!("  {}", change.key),
    }
}

/// Human-readable summary of an `apply` run
pub fn print_apply(report: &LoadReport, changes: &[Change]) {
    print_title_bar("Property overrides");

    let bootloader = if report.bootloader.is_empty() {
        "(unset)".dimmed().to_string()
    } else {
        report.bootloader.clone()
    };
    info(&format!("Bootloader: {bootloader}"));

    match report.variant {
        Some(variant) => success(&format!(
            "Detected {} ({}, prefix {})",
            variant.device.bold(),
            variant.model,
            variant.bootloader_prefix
        )),
        None => warning("Unrecognised bootloader, build identity left unchanged"),
    }

    println!();
    if changes.is_empty() {
        info("No properties changed");
        return;
    }

    for change in changes {
        let line = format_change(change);
        if change.before.is_none() {
            println!("  {}", line.green());
        } else {
            println!("  {}", line.yellow());
        }
    }
    println!();
    info(&format!("{} properties changed", changes.len()));
}

/// Table of known variants
pub fn print_variants() {
    print_title_bar("Known variants");
    for variant in VARIANTS {
        println!(
            "  {:<7} {:<12} {:<10} {}",
            variant.bootloader_prefix.bold(),
            variant.device,
            variant.model,
            variant.fingerprint.dimmed()
        );
    }
}

/// Machine-readable variant table
pub fn variants_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(VARIANTS)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(key: &str, before: Option<&str>, after: Option<&str>) -> Change {
        Change {
            key: key.into(),
            before: before.map(Into::into),
            after: after.map(Into::into),
        }
    }

    #[test]
    fn test_format_change() {
        assert_eq!(
            format_change(&change("ro.build.product", None, Some("ks01ltexx"))),
            "+ ro.build.product = ks01ltexx"
        );
        assert_eq!(
            format_change(&change("ro.product.device", Some("old"), Some("ks01ltexx"))),
            "~ ro.product.device: old -> ks01ltexx"
        );
    }

    #[test]
    fn test_apply_json() {
        let report = LoadReport {
            bootloader: "E330SKSUDPI2".into(),
            variant: Variant::detect("E330SKSUDPI2"),
            device: "ks01lteskt".into(),
        };
        let changes = [change("ro.product.device", Some("old"), Some("ks01lteskt"))];

        let json: serde_json::Value =
            serde_json::from_str(&apply_json(&report, &changes).unwrap()).unwrap();

        assert_eq!(json["variant"]["model"], "SHV-E330S");
        assert_eq!(json["changes"][0]["key"], "ro.product.device");
        assert_eq!(json["changes"][0]["before"], "old");
    }

    #[test]
    fn test_apply_json_unrecognised() {
        let report = LoadReport {
            bootloader: "UNKNOWN123".into(),
            variant: None,
            device: String::new(),
        };

        let json: serde_json::Value =
            serde_json::from_str(&apply_json(&report, &[]).unwrap()).unwrap();

        assert!(json["variant"].is_null());
        assert_eq!(json["changes"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_variants_json_lists_all() {
        let json: serde_json::Value = serde_json::from_str(&variants_json().unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(VARIANTS.len()));
        assert_eq!(json[0]["bootloader_prefix"], "I9506");
    }
}
