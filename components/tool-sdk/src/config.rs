//! Submission policy configuration.
//!
//! The thresholds a submission form applies before and during registration.
//! They are caller-owned policy, kept out of the validator itself.

use crate::error::{ConfigError, RegistryError};
use crate::types::ToolSubmission;
use serde::{Deserialize, Serialize};

/// Field-length thresholds for tool submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPolicy {
    /// Minimum command length before a submission may be registered. Live
    /// feedback only starts once a candidate exceeds this length.
    #[serde(default = "default_min_command_len")]
    pub min_command_len: usize,

    /// Minimum tool name length.
    #[serde(default = "default_min_name_len")]
    pub min_name_len: usize,

    /// Minimum description length.
    #[serde(default = "default_min_description_len")]
    pub min_description_len: usize,
}

impl SubmissionPolicy {
    /// Creates a policy with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the policy from environment variables.
    ///
    /// Variables are prefixed with `TOOLSMITH_`, for example
    /// `TOOLSMITH_MIN_NAME_LEN=5`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but not a valid length.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut policy = Self::default();

        if let Ok(val) = std::env::var("TOOLSMITH_MIN_COMMAND_LEN") {
            policy.min_command_len = parse_len("min_command_len", &val)?;
        }
        if let Ok(val) = std::env::var("TOOLSMITH_MIN_NAME_LEN") {
            policy.min_name_len = parse_len("min_name_len", &val)?;
        }
        if let Ok(val) = std::env::var("TOOLSMITH_MIN_DESCRIPTION_LEN") {
            policy.min_description_len = parse_len("min_description_len", &val)?;
        }

        policy.validate()?;
        Ok(policy)
    }

    /// Validates the policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or description threshold is zero; a
    /// zero threshold would admit empty required fields.
    pub fn validate(&self) -> Result<&Self, ConfigError> {
        if self.min_name_len == 0 {
            return Err(ConfigError::InvalidValue {
                key: "min_name_len".to_string(),
                value: "0".to_string(),
            });
        }
        if self.min_description_len == 0 {
            return Err(ConfigError::InvalidValue {
                key: "min_description_len".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(self)
    }

    /// Whether a candidate is long enough for live validation feedback.
    ///
    /// Very short partial input produces noisy feedback on every keystroke,
    /// so callers gate on this before invoking the validator mid-edit. On
    /// blur the validator is called unconditionally regardless of length.
    #[must_use]
    pub fn should_validate(&self, candidate: &str) -> bool {
        candidate.chars().count() > self.min_command_len
    }

    /// Checks a submission's field lengths against the policy.
    ///
    /// # Errors
    ///
    /// Returns the first field that falls short of its minimum.
    pub fn check_fields(&self, submission: &ToolSubmission) -> Result<(), RegistryError> {
        if submission.command.chars().count() < self.min_command_len {
            return Err(RegistryError::FieldTooShort {
                field: "curl",
                min: self.min_command_len,
            });
        }
        if submission.name.chars().count() < self.min_name_len {
            return Err(RegistryError::FieldTooShort {
                field: "tool_name",
                min: self.min_name_len,
            });
        }
        if submission.description.chars().count() < self.min_description_len {
            return Err(RegistryError::FieldTooShort {
                field: "description",
                min: self.min_description_len,
            });
        }
        Ok(())
    }

    /// Returns a builder for constructing a policy.
    #[must_use]
    pub fn builder() -> SubmissionPolicyBuilder {
        SubmissionPolicyBuilder::default()
    }
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            min_command_len: default_min_command_len(),
            min_name_len: default_min_name_len(),
            min_description_len: default_min_description_len(),
        }
    }
}

/// Builder for constructing a [`SubmissionPolicy`].
#[derive(Debug, Default)]
pub struct SubmissionPolicyBuilder {
    min_command_len: Option<usize>,
    min_name_len: Option<usize>,
    min_description_len: Option<usize>,
}

impl SubmissionPolicyBuilder {
    /// Sets the minimum command length.
    #[must_use]
    pub fn min_command_len(mut self, len: usize) -> Self {
        self.min_command_len = Some(len);
        self
    }

    /// Sets the minimum tool name length.
    #[must_use]
    pub fn min_name_len(mut self, len: usize) -> Self {
        self.min_name_len = Some(len);
        self
    }

    /// Sets the minimum description length.
    #[must_use]
    pub fn min_description_len(mut self, len: usize) -> Self {
        self.min_description_len = Some(len);
        self
    }

    /// Builds the policy, validating all values.
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold fails [`SubmissionPolicy::validate`].
    pub fn build(self) -> Result<SubmissionPolicy, ConfigError> {
        let mut policy = SubmissionPolicy::default();

        if let Some(v) = self.min_command_len {
            policy.min_command_len = v;
        }
        if let Some(v) = self.min_name_len {
            policy.min_name_len = v;
        }
        if let Some(v) = self.min_description_len {
            policy.min_description_len = v;
        }

        policy.validate()?;
        Ok(policy)
    }
}

fn parse_len(key: &str, val: &str) -> Result<usize, ConfigError> {
    val.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: val.to_string(),
    })
}

// Default value functions
fn default_min_command_len() -> usize {
    10
}

fn default_min_name_len() -> usize {
    3
}

fn default_min_description_len() -> usize {
    10
}
