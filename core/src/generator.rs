//! # Generator
//!
//! Drives the pipeline for whole interfaces: infer every method, collect per-method
//! failures, then render the surviving methods once.

use crate::error::{AppError, AppResult};
use crate::inference::{infer_endpoint, EndpointDescriptor, InferenceConfig};
use crate::render::{render, MethodView, TemplateContext, TemplateHelpers, TemplateSource};
use crate::signature::{InterfaceSignatures, SignatureProvider};
use heck::ToSnakeCase;

/// Inference results for one interface, before rendering.
#[derive(Debug)]
pub struct InferredInterface {
    /// Methods that inferred cleanly, in declaration order.
    pub methods: Vec<MethodView>,
    /// Members and methods that were skipped.
    pub failures: Vec<AppError>,
}

/// The output for one interface.
#[derive(Debug)]
pub struct GeneratedInterface {
    /// Interface name.
    pub interface_name: String,
    /// snake_case file stem for the rendered output.
    pub file_stem: String,
    /// Inferred endpoints in declaration order.
    pub endpoints: Vec<EndpointDescriptor>,
    /// Rendered handler skeleton.
    pub rendered: String,
    /// Recoverable failures, one per skipped member or method.
    pub failures: Vec<AppError>,
}

/// Runs inference and rendering with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: InferenceConfig,
    helpers: TemplateHelpers,
    template: TemplateSource,
}

impl Generator {
    /// Creates a generator using the bundled template and all helpers.
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the template.
    pub fn with_template(mut self, template: TemplateSource) -> Self {
        self.template = template;
        self
    }

    /// Replaces the helper set.
    pub fn with_helpers(mut self, helpers: TemplateHelpers) -> Self {
        self.helpers = helpers;
        self
    }

    /// The inference configuration in use.
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infers every method of `signatures`, recording failures instead of stopping.
    pub fn infer(&self, signatures: &InterfaceSignatures) -> InferredInterface {
        let interface = &signatures.interface_name;
        let mut failures: Vec<AppError> = signatures
            .skipped_members
            .iter()
            .map(|member| {
                tracing::warn!("Skipping member '{}' of '{}'", member, interface);
                AppError::MalformedMember {
                    interface: interface.clone(),
                    member: member.clone(),
                }
            })
            .collect();

        let mut methods = Vec::with_capacity(signatures.methods.len());
        for method in &signatures.methods {
            match infer_endpoint(method, &self.config) {
                Ok(inference) => {
                    if !inference.unresolved.is_empty() {
                        tracing::warn!(
                            "{}::{}: no parameter matches {:?}; kept as literal segments",
                            interface,
                            method.name,
                            inference.unresolved
                        );
                    }
                    tracing::debug!(
                        "{}::{} -> {} {}",
                        interface,
                        method.name,
                        inference.descriptor.http_method,
                        inference.descriptor.url_path
                    );
                    methods.push(MethodView::new(method, inference, &self.config.reserved_names));
                }
                Err(unsupported) => {
                    let err = AppError::UnsupportedTypeExpression {
                        interface: interface.clone(),
                        method: method.name.clone(),
                        expr: unsupported.expr,
                        reason: unsupported.reason,
                    };
                    tracing::warn!("{}", err);
                    failures.push(err);
                }
            }
        }

        InferredInterface { methods, failures }
    }

    /// Infers and renders one interface.
    ///
    /// Per-method failures are returned in [`GeneratedInterface::failures`];
    /// only template errors are returned as `Err`.
    #[tracing::instrument(skip_all, fields(interface = %signatures.interface_name))]
    pub fn generate(
        &self,
        signatures: &InterfaceSignatures,
        output_dir_name: &str,
    ) -> AppResult<GeneratedInterface> {
        let InferredInterface { methods, failures } = self.infer(signatures);
        let endpoints = methods.iter().map(|m| m.endpoint.clone()).collect();

        let ctx = TemplateContext {
            package_name: signatures.package_name.clone(),
            interface_name: signatures.interface_name.clone(),
            methods,
            import_name: signatures.import_identity.clone(),
            output_dir_name: output_dir_name.to_string(),
        };
        let rendered = render(&self.template, &ctx, &self.helpers)?;

        tracing::info!(
            "Generated {} endpoint(s) for '{}' ({} skipped)",
            ctx.methods.len(),
            signatures.interface_name,
            failures.len()
        );

        Ok(GeneratedInterface {
            interface_name: signatures.interface_name.clone(),
            file_stem: signatures.interface_name.to_snake_case(),
            endpoints,
            rendered,
            failures,
        })
    }

    /// Generates every interface `provider` yields. Stops at the first fatal error.
    #[tracing::instrument(skip_all, fields(output = output_dir_name))]
    pub fn generate_all(
        &self,
        provider: &dyn SignatureProvider,
        output_dir_name: &str,
    ) -> AppResult<Vec<GeneratedInterface>> {
        provider
            .interfaces()?
            .iter()
            .map(|signatures| self.generate(signatures, output_dir_name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::HttpMethod;
    use crate::signature::{MethodSignature, Parameter, ReturnValue};

    fn order_service() -> InterfaceSignatures {
        InterfaceSignatures {
            package_name: "orders".into(),
            interface_name: "OrderService".into(),
            import_identity: "crate::orders".into(),
            methods: vec![
                MethodSignature::new(
                    "GetOrderByUserIDAndOrderID",
                    vec![
                        Parameter::new("ctx", "&Context"),
                        Parameter::new("userID", "Uuid"),
                        Parameter::new("orderID", "Uuid"),
                    ],
                    vec![ReturnValue::new("Order"), ReturnValue::new("Error")],
                ),
                MethodSignature::new(
                    "Subscribe",
                    vec![Parameter::new("callback", "fn(Order)")],
                    vec![],
                ),
                MethodSignature::new("ListOrders", vec![], vec![ReturnValue::new("Vec<Order>")]),
            ],
            skipped_members: vec!["type Id".into()],
        }
    }

    #[test]
    fn test_failures_do_not_stop_siblings() {
        let generated = Generator::default()
            .generate(&order_service(), "handlers")
            .unwrap();

        assert_eq!(generated.file_stem, "order_service");
        let paths: Vec<&str> = generated.endpoints.iter().map(|e| e.url_path.as_str()).collect();
        assert_eq!(paths, vec!["/order/{userid}/{orderid}", "/orders"]);
        assert_eq!(generated.endpoints[1].http_method, HttpMethod::Get);

        assert_eq!(generated.failures.len(), 2);
        assert!(generated.failures.iter().all(AppError::is_recoverable));
        assert!(matches!(
            &generated.failures[1],
            AppError::UnsupportedTypeExpression { method, .. } if method == "Subscribe"
        ));
        assert!(generated.rendered.contains("get_order_by_user_id_and_order_id"));
        assert!(!generated.rendered.contains("subscribe"));
    }

    #[test]
    fn test_unsupported_return_type_fails_only_that_method() {
        let mut signatures = order_service();
        signatures.skipped_members.clear();
        signatures.methods.push(MethodSignature::new(
            "GetRawBuffer",
            vec![],
            vec![ReturnValue::new("*const u8")],
        ));
        let generated = Generator::default().generate(&signatures, "handlers").unwrap();

        assert_eq!(generated.endpoints.len(), 2);
        assert!(matches!(
            generated.failures.last(),
            Some(AppError::UnsupportedTypeExpression { method, expr, .. })
                if method == "GetRawBuffer" && expr == "*const u8"
        ));
    }

    #[test]
    fn test_template_errors_are_fatal() {
        let generator = Generator::default()
            .with_template(TemplateSource::custom("broken.jinja", "{{ Nope }}"));
        let err = generator.generate(&order_service(), "handlers").unwrap_err();
        assert!(matches!(err, AppError::TemplateRender { .. }));
    }

    #[test]
    fn test_generate_all_preserves_order() {
        let mut second = order_service();
        second.interface_name = "AuditLog".into();
        let provider = vec![order_service(), second];
        let generator = Generator::default()
            .with_template(TemplateSource::custom("names", "{{ InterfaceName }}"));

        let generated = generator.generate_all(&provider, "out").unwrap();
        let rendered: Vec<&str> = generated.iter().map(|g| g.rendered.as_str()).collect();
        assert_eq!(rendered, vec!["OrderService", "AuditLog"]);
    }
}
