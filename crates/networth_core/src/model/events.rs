//! User-facing events and the envelopes that group functions

use serde::{Deserialize, Serialize};

use super::ids::{EnvelopeId, EventId, FunctionId};
use super::parameters::{EventParameter, RoleGroup};
use crate::resolve::find_in_group;

/// A draggable financial occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Free-form descriptive tag (`purchase`, `pay_check`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<EventParameter>,
}

impl Event {
    pub fn new(id: u32, kind: impl Into<String>, parameters: Vec<EventParameter>) -> Self {
        Self {
            id: EventId(id),
            kind: kind.into(),
            description: String::new(),
            parameters,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Numeric value of the first parameter in `group`
    pub fn value(&self, group: RoleGroup) -> Option<f64> {
        find_in_group(&self.parameters, group).and_then(EventParameter::number)
    }

    /// Time coordinate of the event; events without one sit at zero
    pub fn time(&self) -> f64 {
        self.value(RoleGroup::Time).unwrap_or(0.0)
    }
}

/// An accounting bucket aggregating a set of functions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: EnvelopeId,
    pub name: String,
    #[serde(default)]
    pub function_ids: Vec<FunctionId>,
}

impl Envelope {
    pub fn new(id: u32, name: impl Into<String>, function_ids: &[u32]) -> Self {
        Self {
            id: EnvelopeId(id),
            name: name.into(),
            function_ids: function_ids.iter().copied().map(FunctionId).collect(),
        }
    }
}
