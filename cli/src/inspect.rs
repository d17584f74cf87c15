#![deny(missing_docs)]

//! # Inspect Command
//!
//! Prints the inferred endpoint descriptors without rendering anything.

use crate::source::SourceArgs;
use interfacery_core::{AppResult, EndpointDescriptor, Generator, InterfaceSignatures};
use serde::Serialize;

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Signature source and inference options.
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Print YAML instead of JSON.
    #[clap(long)]
    pub yaml: bool,
}

/// Inferred endpoints of one interface.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InterfaceReport {
    /// Interface name.
    pub interface: String,
    /// Module path of the interface.
    pub import: String,
    /// Endpoints in declaration order.
    pub endpoints: Vec<EndpointDescriptor>,
    /// Human-readable reasons for skipped members and methods.
    pub skipped: Vec<String>,
}

/// Builds the report for every interface.
pub fn build_reports(
    generator: &Generator,
    interfaces: &[InterfaceSignatures],
) -> Vec<InterfaceReport> {
    interfaces
        .iter()
        .map(|signatures| {
            let inferred = generator.infer(signatures);
            InterfaceReport {
                interface: signatures.interface_name.clone(),
                import: signatures.import_identity.clone(),
                endpoints: inferred.methods.into_iter().map(|m| m.endpoint).collect(),
                skipped: inferred.failures.iter().map(ToString::to_string).collect(),
            }
        })
        .collect()
}

/// Executes the inspect command.
pub fn execute(args: &InspectArgs) -> AppResult<()> {
    let generator = Generator::new(args.source.inference_config());
    let reports = build_reports(&generator, &args.source.load(None)?);

    let output = if args.yaml {
        serde_yaml::to_string(&reports)?
    } else {
        serde_json::to_string_pretty(&reports)?
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use interfacery_core::signature::{MethodSignature, Parameter};
    use interfacery_core::{HttpMethod, InferenceConfig};

    #[test]
    fn test_reports_keep_declaration_order() {
        let interfaces = vec![InterfaceSignatures {
            package_name: "billing".into(),
            interface_name: "Billing".into(),
            import_identity: "crate::billing".into(),
            methods: vec![
                MethodSignature::new("ListInvoices", vec![], vec![]),
                MethodSignature::new(
                    "DeleteInvoice",
                    vec![Parameter::new("invoiceID", "u64")],
                    vec![],
                ),
                MethodSignature::new("Bad", vec![Parameter::new("p", "*const u8")], vec![]),
            ],
            skipped_members: vec![],
        }];

        let reports = build_reports(&Generator::new(InferenceConfig::default()), &interfaces);
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.endpoints.len(), 2);
        assert_eq!(report.endpoints[0].url_path, "/invoices");
        assert_eq!(report.endpoints[1].url_path, "/invoice/{invoiceid}");
        assert_eq!(report.endpoints[1].http_method, HttpMethod::Delete);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].contains("Billing::Bad"));

        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["Endpoints"][1]["PathParams"][0], "invoiceid");
    }
}
