//! # Signature Provider Trait
//!
//! Decouples the inference pipeline from how interface signatures are discovered.

use crate::error::AppResult;
use crate::signature::models::InterfaceSignatures;

/// A source of interface method signatures.
///
/// Implementors may parse source code, read manifests produced by other tools,
/// or return fixtures. Order of the returned interfaces and of their methods is
/// preserved by every downstream stage.
pub trait SignatureProvider {
    /// Returns every interface this provider can see.
    fn interfaces(&self) -> AppResult<Vec<InterfaceSignatures>>;
}

/// In-memory signatures act as their own provider.
impl SignatureProvider for Vec<InterfaceSignatures> {
    fn interfaces(&self) -> AppResult<Vec<InterfaceSignatures>> {
        Ok(self.clone())
    }
}
