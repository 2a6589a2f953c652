//! Policy kind descriptor as published by the server-info endpoint.

use serde::{Deserialize, Serialize};

/// One password-policy kind the server supports (e.g. `length`, `digits`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PolicyDefinition {
    /// Stable key used in the policy string.
    pub id: String,
    /// Human readable name shown in the "add policy" list.
    pub display_name: String,
    /// Value used when the policy is added without an explicit value.
    #[serde(default)]
    pub default_value: String,
    /// Value kind: `"int"`, `"String"`, or absent for flag-like policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_type: Option<String>,
    /// Whether the same kind may appear more than once in a policy.
    #[serde(default)]
    pub multiple_supported: bool,
}

impl PolicyDefinition {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            default_value: String::new(),
            config_type: None,
            multiple_supported: false,
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    pub fn with_config_type(mut self, config_type: impl Into<String>) -> Self {
        self.config_type = Some(config_type.into());
        self
    }

    pub fn with_multiple(mut self, multiple_supported: bool) -> Self {
        self.multiple_supported = multiple_supported;
        self
    }

    /// True when values of this kind must be non-negative integers.
    pub fn is_int(&self) -> bool {
        self.config_type.as_deref() == Some("int")
    }
}
