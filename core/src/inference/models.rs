//! # Endpoint Models
//!
//! The inferred REST shape of a single interface method.

use derive_more::Display;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)}").expect("Invalid regex constant"));

/// HTTP verbs the inference engine can produce.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    #[display("GET")]
    Get,
    /// `POST`
    #[display("POST")]
    Post,
    /// `PUT`
    #[display("PUT")]
    Put,
    /// `DELETE`
    #[display("DELETE")]
    Delete,
}

impl HttpMethod {
    /// Whether requests with this verb conventionally carry no body.
    pub fn is_bodiless(self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("unknown HTTP method: {}", other)),
        }
    }
}

/// Canonical CRUD-style action read from the leading name token.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// `Get...`
    Get,
    /// `Create...`
    Create,
    /// `Update...`
    Update,
    /// `Delete...`
    Delete,
    /// `List...`
    List,
    /// `Add...`
    Add,
    /// `Remove...`
    Remove,
}

impl Action {
    /// Every action, in vocabulary order.
    pub const ALL: [Action; 7] = [
        Action::Get,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::List,
        Action::Add,
        Action::Remove,
    ];

    /// Matches a token exactly against the action vocabulary.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.to_string() == token)
    }

    /// Actions producing collections pluralize their resource segments.
    pub fn pluralizes(self) -> bool {
        matches!(self, Action::List | Action::Create)
    }

    /// Actions addressing a single existing resource may bind `...id` parameters implicitly.
    pub fn targets_single(self) -> bool {
        matches!(self, Action::Get | Action::Update | Action::Delete)
    }
}

/// The REST endpoint inferred for one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointDescriptor {
    /// HTTP verb.
    pub http_method: HttpMethod,
    /// URL path, always starting with `/`.
    pub url_path: String,
    /// Path placeholders in the order they occur in `url_path`.
    pub path_params: Vec<String>,
    /// Parameters bound through the query string.
    pub query_params: Vec<String>,
    /// Request payload type, empty when there is none.
    pub request_type: String,
    /// Response payload type, empty when there is none.
    pub response_type: String,
    /// snake_case handler function name.
    pub handler_name: String,
}

impl EndpointDescriptor {
    /// Placeholder names found in `url_path`, left to right.
    pub fn placeholders(&self) -> Vec<String> {
        placeholders(&self.url_path)
    }
}

/// Placeholder names of a URL path, left to right.
pub fn placeholders(url_path: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(url_path)
        .map(|c| c[1].to_string())
        .collect()
}
