//! Tool SDK - shared library for the Toolsmith tool platform.
//!
//! This crate provides the submission-side core of a Tools-as-a-Service
//! platform: deciding whether a user-supplied cURL command is acceptable,
//! converting accepted commands into structured request templates, and
//! holding accepted tools in a session-scoped registry.
//!
//! # Features
//!
//! - **Command Validation**: total, pure pass/fail verdicts with fixed
//!   user-facing reasons, suitable for per-keystroke feedback
//! - **Command Parsing**: strict shell-style tokenization into a typed
//!   request template
//! - **Tool Registry**: caller-owned, in-memory store with duplicate-name
//!   rejection and client config derivation
//! - **Submission Policy**: environment-based field-length thresholds with
//!   validation
//!
//! # Example
//!
//! ```rust
//! use tool_sdk::{ToolRegistry, ToolSubmission, validate};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Live feedback while the user types
//! let verdict = validate("curl -s https://api.example.com/status");
//! assert!(verdict.is_valid());
//!
//! // Registration once the form is submitted
//! let mut registry = ToolRegistry::new();
//! let tool = registry.register(ToolSubmission::new(
//!     "curl -X GET https://api.example.com/weather -H 'Accept: application/json'",
//!     "weather_api",
//!     "Gets current weather information",
//! ))?;
//! assert_eq!(tool.template.url, "https://api.example.com/weather");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use command::{catalogue, parse, validate};
pub use config::{SubmissionPolicy, SubmissionPolicyBuilder};
pub use error::{ConfigError, ParseError, RegistryError};
pub use registry::ToolRegistry;
pub use types::{
    ClientConfig, FormField, FormValue, HttpMethod, RegisteredTool, RejectReason, RequestBody,
    RequestTemplate, ToolSubmission, Verdict,
};

/// Version of the tool SDK.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes logging for the SDK.
///
/// This should be called once at the start of the application.
///
/// # Errors
///
/// Returns an error if the tracing subscriber has already been set.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(tracing_subscriber::FmtSubscriber::builder().finish())
}
