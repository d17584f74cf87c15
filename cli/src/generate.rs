#![deny(missing_docs)]

//! # Generate Command
//!
//! Renders one handler skeleton file per interface.
//!
//! 1. **Discover**: read signatures from sources or a manifest.
//! 2. **Infer + Render**: run the core generator for each interface.
//! 3. **Write**: save `<interface_snake>.rs` into the destination (or print with `--dry-run`).

use crate::source::SourceArgs;
use interfacery_core::{AppResult, Generator, TemplateSource};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Signature source and inference options.
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Output directory for the generated handler files.
    #[clap(long, env = "INTERFACERY_DEST_DIR", default_value = "src/handlers")]
    pub dest_dir: PathBuf,

    /// Custom template file (defaults to the bundled handler template).
    #[clap(long, env = "INTERFACERY_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Print the output instead of writing files.
    #[clap(long)]
    pub dry_run: bool,
}

/// Executes the generate command.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    let template = match &args.template {
        Some(path) => TemplateSource::from_file(path)?,
        None => TemplateSource::bundled(),
    };
    let generator = Generator::new(args.source.inference_config()).with_template(template);

    let interfaces = args.source.load(Some(&args.dest_dir))?;
    if interfaces.is_empty() {
        println!("No interfaces found.");
        return Ok(());
    }

    let output_dir_name = args
        .dest_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !args.dry_run {
        fs::create_dir_all(&args.dest_dir)?;
    }

    for signatures in &interfaces {
        let generated = generator.generate(signatures, &output_dir_name)?;
        for failure in &generated.failures {
            eprintln!("Warning: {}", failure);
        }

        let target = args.dest_dir.join(format!("{}.rs", generated.file_stem));
        if args.dry_run {
            println!("// ---- {:?} ----", target);
            println!("{}", generated.rendered);
        } else {
            fs::write(&target, &generated.rendered)?;
            println!(
                "Wrote {} endpoint(s) for {} to {:?}",
                generated.endpoints.len(),
                generated.interface_name,
                target
            );
        }
    }

    Ok(())
}
