use interfacery_core::signature::parse_yaml_manifest;
use interfacery_core::{
    AppError, Generator, HttpMethod, InferenceConfig, RustTraitProvider, SignatureProvider,
    TemplateSource,
};
use pretty_assertions::assert_eq;
use std::fs;

const ORDERS: &str = r#"
use crate::context::Context;

pub trait OrderService {
    type Id;

    fn get_order_by_user_id_and_order_id(
        &self,
        ctx: &Context,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<Order, Error>;
    fn list_orders(&self, ctx: &Context) -> Result<Vec<Order>, Error>;
    fn create_order(&self, ctx: &Context, order: NewOrder) -> Result<Order, Error>;
    fn delete_order(&self, id: Uuid) -> Result<(), Error>;
    fn search_orders(&self, query: String, limit: u32) -> Vec<Order>;
}
"#;

const SUMMARY: &str = "{{ ImportName }}\n{% for m in Methods %}\
{{ m.HttpMethod }} {{ m.UrlPath }} -> {{ m.HandlerName }}({{ m.RequestType | or_else(\"()\") }}) \
{{ m.ResponseType | or_else(\"()\") }}\
{{ \" ?\" ~ m.QueryParams | join(\",\") if m.QueryParams else \"\" }}\n{% endfor %}";

#[test]
fn test_rust_sources_to_rendered_summary() {
    let dir = tempfile::tempdir().unwrap();
    let services = dir.path().join("src").join("services");
    fs::create_dir_all(&services).unwrap();
    fs::write(services.join("orders.rs"), ORDERS).unwrap();

    let interfaces = RustTraitProvider::new(dir.path()).interfaces().unwrap();
    assert_eq!(interfaces.len(), 1);
    assert_eq!(interfaces[0].package_name, "orders");

    let generator = Generator::new(InferenceConfig::default())
        .with_template(TemplateSource::custom("summary.jinja", SUMMARY));
    let generated = generator.generate(&interfaces[0], "handlers").unwrap();

    let expected = "crate::services::orders
GET /order/{userid}/{orderid} -> get_order_by_user_id_and_order_id(GetOrderByUserIdAndOrderIdRequest) Order
GET /orders -> list_orders(()) Vec<Order>
POST /orders -> create_order(NewOrder) Order
DELETE /order/{id} -> delete_order(Uuid) ()
GET /search/orders -> search_orders(SearchOrdersRequest) Vec<Order> ?query,limit
";
    assert_eq!(generated.rendered, expected);
    assert_eq!(generated.file_stem, "order_service");

    assert_eq!(generated.failures.len(), 1);
    assert!(matches!(
        &generated.failures[0],
        AppError::MalformedMember { member, .. } if member == "type Id"
    ));
}

#[test]
fn test_manifest_with_go_style_names() {
    let manifest = r#"
- packageName: users
  interfaceName: UserService
  importIdentity: example.com/app/users
  methods:
    - name: GetUserByID
      parameters:
        - { name: ctx, typeExpr: Context }
        - { name: id, typeExpr: String }
      returns:
        - { typeExpr: User }
        - { typeExpr: Error }
    - name: GetOrderByUserIDAndOrderID
      parameters:
        - { name: userID, typeExpr: String }
        - { name: orderID, typeExpr: String }
      returns:
        - { typeExpr: Order }
        - { typeExpr: Error }
    - name: DoSomethingRandom
"#;
    let interfaces = parse_yaml_manifest(manifest).unwrap();
    let config = InferenceConfig {
        route_prefix: Some("/api/v1".into()),
        ..InferenceConfig::default()
    };
    let generated = Generator::new(config)
        .generate(&interfaces[0], "handlers")
        .unwrap();

    let endpoints: Vec<(HttpMethod, &str)> = generated
        .endpoints
        .iter()
        .map(|e| (e.http_method, e.url_path.as_str()))
        .collect();
    assert_eq!(
        endpoints,
        vec![
            (HttpMethod::Get, "/api/v1/user/{id}"),
            (HttpMethod::Get, "/api/v1/order/{userid}/{orderid}"),
            (HttpMethod::Get, "/api/v1/do/something/random"),
        ]
    );
    assert!(generated.failures.is_empty());
    assert!(!generated.rendered.contains("use example.com"));
    assert!(generated
        .rendered
        .contains("// `UserService` is declared in `example.com/app/users`;"));
}

#[test]
fn test_bundled_template_output_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("lib.rs"), ORDERS).unwrap();

    let interfaces = RustTraitProvider::new(dir.path()).interfaces().unwrap();
    let generator = Generator::default();
    let first = generator.generate(&interfaces[0], "handlers").unwrap();
    let second = generator.generate(&interfaces[0], "handlers").unwrap();

    assert_eq!(first.rendered, second.rendered);
    assert!(first
        .rendered
        .contains("path: web::Path<(Uuid, Uuid)>,"));
    assert!(first.rendered.contains("query: web::Query<Value>,"));
    assert!(first.rendered.contains("body: web::Json<NewOrder>,"));
    assert!(first
        .rendered
        .contains("cfg.route(\"/order/{id}\", web::delete().to(delete_order::<S>));"));
}
