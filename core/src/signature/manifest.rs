//! # Manifest Provider
//!
//! Reads pre-extracted signatures from a JSON or YAML file so that extractors written
//! for other languages can feed the pipeline.

use crate::error::{AppError, AppResult};
use crate::signature::models::InterfaceSignatures;
use crate::signature::traits::SignatureProvider;
use std::fs;
use std::path::PathBuf;

/// Loads interface signatures from a manifest file.
///
/// The format is chosen by extension: `.json` is JSON, `.yaml`/`.yml` is YAML.
#[derive(Debug, Clone)]
pub struct ManifestProvider {
    path: PathBuf,
}

impl ManifestProvider {
    /// Creates a provider reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SignatureProvider for ManifestProvider {
    fn interfaces(&self) -> AppResult<Vec<InterfaceSignatures>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Provider(format!("Failed to read manifest {:?}: {}", self.path, e))
        })?;

        match self.path.extension().and_then(|e| e.to_str()) {
            Some("json") => parse_json_manifest(&content),
            Some("yaml") | Some("yml") => parse_yaml_manifest(&content),
            other => Err(AppError::Provider(format!(
                "Unsupported manifest extension {:?} for {:?}",
                other, self.path
            ))),
        }
    }
}

/// Parses a JSON list of interface records.
pub fn parse_json_manifest(content: &str) -> AppResult<Vec<InterfaceSignatures>> {
    Ok(serde_json::from_str(content)?)
}

/// Parses a YAML list of interface records.
pub fn parse_yaml_manifest(content: &str) -> AppResult<Vec<InterfaceSignatures>> {
    Ok(serde_yaml::from_str(content)?)
}
