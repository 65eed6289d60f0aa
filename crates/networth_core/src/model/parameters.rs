//! Role-tagged scalars shared by functions and events

use serde::{Deserialize, Serialize};

use super::ids::{FunctionId, ParameterId};

/// Semantic role of a parameter (the `type` field in the document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterRole {
    Time,
    Money,
    Amount,
    Rate,
    ExpectedReturn,
    Interval,
    EndTime,
    FromKey,
    ToKey,
}

/// A set of roles that are treated as interchangeable when resolving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleGroup {
    /// `time`
    Time,
    /// `money` or `amount`
    Amount,
    /// `rate` or `expected_return`
    Rate,
    /// `interval`
    Interval,
    /// `end_time`
    EndTime,
}

impl RoleGroup {
    pub fn contains(self, role: ParameterRole) -> bool {
        role.group() == Some(self)
    }
}

impl ParameterRole {
    /// The resolution group this role belongs to, if it is numeric
    pub fn group(self) -> Option<RoleGroup> {
        match self {
            ParameterRole::Time => Some(RoleGroup::Time),
            ParameterRole::Money | ParameterRole::Amount => Some(RoleGroup::Amount),
            ParameterRole::Rate | ParameterRole::ExpectedReturn => Some(RoleGroup::Rate),
            ParameterRole::Interval => Some(RoleGroup::Interval),
            ParameterRole::EndTime => Some(RoleGroup::EndTime),
            ParameterRole::FromKey | ParameterRole::ToKey => None,
        }
    }
}

/// A parameter inside a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParameterId,
    #[serde(rename = "type")]
    pub role: ParameterRole,
    pub value: f64,
}

impl Parameter {
    pub fn new(id: u32, role: ParameterRole, value: f64) -> Self {
        Self {
            id: ParameterId(id),
            role,
            value,
        }
    }
}

/// Value carried by an event parameter.
///
/// `from_key` / `to_key` parameters carry text, everything else is numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    Text(String),
}

impl ParameterValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(n) => Some(*n),
            ParameterValue::Text(_) => None,
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

/// Back-reference from an event parameter to the function parameter it drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterLink {
    pub function_id: FunctionId,
    pub parameter_id: ParameterId,
}

/// A parameter inside an event, optionally linked to a function parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventParameter {
    pub id: ParameterId,
    #[serde(rename = "type")]
    pub role: ParameterRole,
    pub value: ParameterValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_parameter: Option<ParameterId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_function: Option<FunctionId>,
}

impl EventParameter {
    pub fn new(id: u32, role: ParameterRole, value: f64) -> Self {
        Self {
            id: ParameterId(id),
            role,
            value: ParameterValue::Number(value),
            id_parameter: None,
            id_function: None,
        }
    }

    /// Link this parameter to `parameter` of `function`
    pub fn linked(mut self, function: u32, parameter: u32) -> Self {
        self.id_function = Some(FunctionId(function));
        self.id_parameter = Some(ParameterId(parameter));
        self
    }

    /// The function parameter this one drives, when both halves of the
    /// back-reference are present
    pub fn link(&self) -> Option<ParameterLink> {
        match (self.id_function, self.id_parameter) {
            (Some(function_id), Some(parameter_id)) => Some(ParameterLink {
                function_id,
                parameter_id,
            }),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        self.value.as_number()
    }
}

/// Anything carrying a parameter role
pub trait RoleTagged {
    fn role(&self) -> ParameterRole;
}

impl RoleTagged for Parameter {
    fn role(&self) -> ParameterRole {
        self.role
    }
}

impl RoleTagged for EventParameter {
    fn role(&self) -> ParameterRole {
        self.role
    }
}
