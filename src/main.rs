//! mid-props: machine ID properties builder
//!
//! A CLI tool that resolves string-keyed configuration into the typed
//! properties used to enrich audit events with a machine ID.

use anyhow::Result;
use clap::Parser;

use mid_props::cli::{property_input, Cli, Commands};
use mid_props::config::{LogConfig, SourceService};
use mid_props::domain::{logger, schema};
use mid_props::service::BuildService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(&LogConfig {
        debug: cli.debug,
        quiet: cli.quiet,
        log_path: cli.log_dir.clone(),
    })?;

    match cli.command {
        Commands::Build {
            file,
            define,
            format,
        } => {
            let service = BuildService::new(format);
            service.run(&property_input(file, define))?;
        }
        Commands::Init { path } => {
            let path = if let Some(p) = path {
                SourceService::generate_at(&p)?;
                p
            } else {
                SourceService::generate_default()?;
                SourceService::default_path()
            };
            if !cli.quiet {
                eprintln!("Property file created at: {}", path.display());
            }
        }
        Commands::Keys => {
            for setting in &schema::SETTINGS {
                println!(
                    "{}\t{}\t{}",
                    setting.key,
                    setting.type_name(),
                    setting.default.unwrap_or("<absent>")
                );
            }
        }
        Commands::Version => {
            println!("mid-props {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
