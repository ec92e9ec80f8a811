//! Employee attributes consumed by salary-based pricing

use serde::{Deserialize, Serialize};

/// Employee being priced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Display name, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Annual salary in dollars
    #[serde(default)]
    pub salary: f64,
}

impl Employee {
    /// Creates an employee with the given annual salary
    pub fn new(salary: f64) -> Self {
        Self { name: None, salary }
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
