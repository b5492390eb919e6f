//! Core types for tool submission and registration.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why a candidate command was rejected.
///
/// The variants form a closed taxonomy; `Display` renders the exact
/// user-facing guidance for each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The trimmed command does not begin with `curl`.
    MissingCurlPrefix,
    /// No URL-shaped or domain-shaped token was found.
    MissingUrl,
    /// No catalogued option was found and the command is not a simple GET.
    MissingOption,
}

impl RejectReason {
    /// Returns the user-facing guidance for this rejection.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            RejectReason::MissingCurlPrefix => "Command must start with 'curl'",
            RejectReason::MissingUrl => "Command must contain a valid URL or domain",
            RejectReason::MissingOption => {
                "Command should include at least one curl option or be a simple GET request"
            }
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating a candidate command.
///
/// A verdict either accepts the command or carries exactly one
/// [`RejectReason`]; there is no third state. Verdicts are plain values
/// computed fresh on every call and are safe to discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    reason: Option<RejectReason>,
}

impl Verdict {
    /// Creates an accepting verdict.
    #[must_use]
    pub const fn valid() -> Self {
        Self { reason: None }
    }

    /// Creates a rejecting verdict with the given reason.
    #[must_use]
    pub const fn invalid(reason: RejectReason) -> Self {
        Self {
            reason: Some(reason),
        }
    }

    /// Whether the command was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.reason.is_none()
    }

    /// The rejection reason, present exactly when the verdict is invalid.
    #[must_use]
    pub const fn reason(&self) -> Option<RejectReason> {
        self.reason
    }

    /// User-facing guidance text, present exactly when the verdict is invalid.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.reason.map(RejectReason::message)
    }
}

/// HTTP methods the platform can proxy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Retrieve a resource.
    #[default]
    Get,
    /// Create a resource.
    Post,
    /// Replace a resource.
    Put,
    /// Delete a resource.
    Delete,
    /// Partially update a resource.
    Patch,
    /// Retrieve headers only.
    Head,
}

impl HttpMethod {
    /// Returns the uppercase wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            "HEAD" => Ok(HttpMethod::Head),
            _ => Err(ParseError::UnsupportedMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// One field of a multipart form body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: FormValue,
}

/// Value of a multipart form field.
///
/// File-backed fields carry the path only; the file is never opened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormValue {
    /// Inline text value.
    Text(String),
    /// Path of a file to upload, taken from an `@path` value.
    File(String),
}

/// Request body extracted from a command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestBody {
    /// Raw body text.
    Raw(String),
    /// Body parsed as JSON because the command declared a JSON content type.
    Json(serde_json::Value),
    /// Multipart form fields.
    Form(Vec<FormField>),
}

/// Structured HTTP request template extracted from a command.
///
/// This is the shape handed to the (external) invocation layer; nothing in
/// this crate ever executes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestTemplate {
    /// HTTP method, `GET` when the command does not specify one.
    pub method: HttpMethod,
    /// Target URL.
    pub url: String,
    /// Request headers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Request body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

/// A user-supplied tool submission.
///
/// Field renames keep the serialized shape compatible with the
/// `{ curl, tool_name, description }` wire contract of the submission form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSubmission {
    /// Candidate cURL command.
    #[serde(rename = "curl")]
    pub command: String,
    /// Unique tool name.
    #[serde(rename = "tool_name")]
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
}

impl ToolSubmission {
    /// Creates a new submission.
    pub fn new(
        command: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A tool accepted by the registry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisteredTool {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Request template parsed from the submitted command.
    pub template: RequestTemplate,
    /// The command as originally submitted.
    pub command: String,
}

impl RegisteredTool {
    /// Derives the connector config a client needs to invoke this tool.
    #[must_use]
    pub fn client_config(&self, endpoint: impl Into<String>) -> ClientConfig {
        ClientConfig {
            tool_name: self.name.clone(),
            description: self.description.clone(),
            endpoint: endpoint.into(),
            transport: ClientConfig::DEFAULT_TRANSPORT.to_string(),
        }
    }
}

/// Per-tool connector configuration for MCP-style clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Name the client invokes the tool by.
    pub tool_name: String,
    /// Description surfaced to the client.
    pub description: String,
    /// Endpoint the client connects to.
    pub endpoint: String,
    /// Transport the endpoint speaks.
    pub transport: String,
}

impl ClientConfig {
    /// Transport used by generated configs.
    pub const DEFAULT_TRANSPORT: &'static str = "sse";
}
