#![deny(missing_docs)]

//! # Interfacery CLI
//!
//! Command Line Interface for inferring REST handlers from interface signatures.
//!
//! Supported Commands:
//! - `generate`: Sources/manifest -> endpoints -> handler skeleton files.
//! - `inspect`: Prints the inferred endpoints as JSON or YAML.
//! - `template`: Prints the bundled handler template for customisation.

use clap::{Parser, Subcommand};
use interfacery_core::render::DEFAULT_TEMPLATE;
use interfacery_core::AppResult;
use tracing_subscriber::EnvFilter;

mod generate;
mod inspect;
mod source;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Interface to REST handler generator")]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset (e.g. `debug`).
    #[clap(long, global = true, env = "INTERFACERY_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate handler skeletons for every discovered interface.
    Generate(generate::GenerateArgs),
    /// Print inferred endpoint descriptors without rendering.
    Inspect(inspect::InspectArgs),
    /// Print the bundled default template.
    Template,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Inspect(args) => inspect::execute(args)?,
        Commands::Template => print!("{}", DEFAULT_TEMPLATE),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "interfacery",
            "generate",
            "--src-dir",
            "services",
            "--route-prefix",
            "/api/v1",
            "--fallback-verb",
            "post",
            "--ignore",
            "services/legacy",
            "--dry-run",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.source.src_dir, std::path::PathBuf::from("services"));
                assert_eq!(
                    args.source.fallback_verb,
                    interfacery_core::HttpMethod::Post
                );
                assert_eq!(args.source.ignore.len(), 1);
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
