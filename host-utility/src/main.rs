use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use ks01lte_init::Variant;
use std::path::PathBuf;

mod apply;
mod config;
mod report;
mod utils;

/// Preview ks01lte variant property overrides against a build.prop snapshot
#[derive(Parser, Debug)]
#[command(name = "ks01lte-props")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Use this configuration file instead of the XDG default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the boot-time overrides on a build.prop snapshot and show the result
    Apply {
        /// build.prop snapshot to start from
        #[arg(long, short)]
        props: PathBuf,

        /// Replace ro.bootloader from the snapshot
        #[arg(long, short)]
        bootloader: Option<String>,

        /// Also apply the radio profile from the configuration
        #[arg(long)]
        radio: bool,

        /// Write the resulting snapshot to this file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Display each property write
        #[arg(long, short)]
        verbose: bool,
    },
    /// List the hardware variants recognised by bootloader prefix
    Variants {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show which variant a bootloader identifier selects
    Detect {
        /// Bootloader identifier, e.g. I9506XXUDRB1
        bootloader: String,
    },
    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Display current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Reset configuration to defaults
    Reset,
}

fn init_logging(verbose: bool) {
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        None => {
            // No subcommand provided, print help
            Cli::command().print_help()?;
            std::process::exit(0);
        }
        Some(Commands::Apply {
            props,
            bootloader,
            radio,
            output,
            json,
            verbose,
        }) => {
            init_logging(verbose);
            apply::run_apply(
                &apply::ApplyOptions {
                    props: &props,
                    bootloader: bootloader.as_deref(),
                    radio,
                    output,
                    json,
                },
                config_path,
            )?;
        }
        Some(Commands::Variants { json }) => {
            if json {
                println!("{}", report::variants_json()?);
            } else {
                report::print_variants();
            }
        }
        Some(Commands::Detect { bootloader }) => match Variant::detect(&bootloader) {
            Some(variant) => println!(
                "{} {} ({})",
                "✓".green(),
                variant.device.bold(),
                variant.model
            ),
            None => {
                println!("{} {bootloader} is not a recognised variant", "✗".red());
                std::process::exit(1);
            }
        },
        Some(Commands::Config { command }) => {
            init_logging(false);
            config::run_config_command(&command, config_path)?;
        }
    }

    Ok(())
}
