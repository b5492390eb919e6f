//! Session-scoped registry of accepted tools.
//!
//! The registry is a plain owned value: callers construct one per session
//! (or per request) and pass it where it is needed. There is no global
//! instance and no interior locking; concurrent sessions hold independent
//! registries.

use crate::command::{parser, validation};
use crate::config::SubmissionPolicy;
use crate::error::RegistryError;
use crate::types::{RegisteredTool, ToolSubmission};
use std::collections::HashMap;
use tracing::info;

/// In-memory store of accepted tools, keyed by name.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, RegisteredTool>,
    policy: SubmissionPolicy,
}

impl ToolRegistry {
    /// Creates an empty registry with the default submission policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(SubmissionPolicy::default())
    }

    /// Creates an empty registry with the given submission policy.
    #[must_use]
    pub fn with_policy(policy: SubmissionPolicy) -> Self {
        Self {
            tools: HashMap::new(),
            policy,
        }
    }

    /// Returns the registry's submission policy.
    #[must_use]
    pub fn policy(&self) -> &SubmissionPolicy {
        &self.policy
    }

    /// Registers a tool from a submission.
    ///
    /// Checks run in submission-form order: field lengths, then the command
    /// verdict, then strict parsing, then name uniqueness.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first check that failed; the submission
    /// is not stored in that case.
    pub fn register(
        &mut self,
        submission: ToolSubmission,
    ) -> Result<&RegisteredTool, RegistryError> {
        self.policy.check_fields(&submission)?;

        let verdict = validation::validate(&submission.command);
        if let Some(reason) = verdict.reason() {
            return Err(RegistryError::RejectedCommand { reason });
        }

        let template = parser::parse(&submission.command)?;

        if self.tools.contains_key(&submission.name) {
            return Err(RegistryError::DuplicateName {
                name: submission.name,
            });
        }

        let ToolSubmission {
            command,
            name,
            description,
        } = submission;
        let tool = RegisteredTool {
            name: name.clone(),
            description,
            template,
            command,
        };
        info!(name = %tool.name, url = %tool.template.url, "registered tool");

        Ok(self.tools.entry(name).or_insert(tool))
    }

    /// Looks up a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    /// Whether a tool with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Removes a tool by name, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if no tool with this name is registered.
    pub fn remove(&mut self, name: &str) -> Result<RegisteredTool, RegistryError> {
        let tool = self
            .tools
            .remove(name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })?;
        info!(name = %tool.name, "removed tool");
        Ok(tool)
    }

    /// Iterates over registered tools in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.tools.values()
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
