#![deny(missing_docs)]

//! # Signature Source Arguments
//!
//! Options shared by every command that reads interface signatures: where they come from
//! and how endpoints are inferred from them.

use interfacery_core::signature::InterfaceSignatures;
use interfacery_core::{
    AppResult, HttpMethod, InferenceConfig, ManifestProvider, RustTraitProvider,
    SignatureProvider,
};
use std::path::{Path, PathBuf};

/// Where to read signatures from and how to infer endpoints.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Root of the Rust sources scanned for traits.
    #[clap(long, env = "INTERFACERY_SRC_DIR", default_value = "src")]
    pub src_dir: PathBuf,

    /// Only process the trait (or manifest interface) with this name.
    #[clap(long, env = "INTERFACERY_INTERFACE")]
    pub interface: Option<String>,

    /// Read signatures from a JSON/YAML manifest instead of scanning sources.
    #[clap(long, env = "INTERFACERY_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Directories to skip while scanning (repeatable).
    #[clap(long)]
    pub ignore: Vec<PathBuf>,

    /// Prefix prepended to every URL path (e.g. `/api/v1`).
    #[clap(long, env = "INTERFACERY_ROUTE_PREFIX")]
    pub route_prefix: Option<String>,

    /// HTTP verb for method names without a known verb prefix.
    #[clap(long, env = "INTERFACERY_FALLBACK_VERB", default_value = "GET")]
    pub fallback_verb: HttpMethod,
}

impl SourceArgs {
    /// Builds the inference configuration from the arguments.
    pub fn inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            route_prefix: self.route_prefix.clone(),
            fallback_verb: self.fallback_verb,
            ..InferenceConfig::default()
        }
    }

    /// Loads the interfaces, also skipping `extra_ignore` when scanning sources.
    pub fn load(&self, extra_ignore: Option<&Path>) -> AppResult<Vec<InterfaceSignatures>> {
        let interfaces = match &self.manifest {
            Some(path) => {
                tracing::info!("Reading manifest {:?}", path);
                ManifestProvider::new(path).interfaces()?
            }
            None => {
                tracing::info!("Scanning {:?} for traits", self.src_dir);
                let mut provider = RustTraitProvider::new(&self.src_dir);
                for path in self.ignore.iter().map(PathBuf::as_path).chain(extra_ignore) {
                    provider = provider.ignoring(path);
                }
                provider.interfaces()?
            }
        };

        Ok(match &self.interface {
            Some(name) => interfaces
                .into_iter()
                .filter(|i| &i.interface_name == name)
                .collect(),
            None => interfaces,
        })
    }
}
