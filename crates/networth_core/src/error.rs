use std::fmt;

use crate::model::{EnvelopeId, EventId, FunctionId, ParameterId};

/// Errors raised when building simulation inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A horizon must cover at least one step
    ZeroHorizon,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::ZeroHorizon => write!(f, "horizon must be at least one step"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Owner of a parameter list, used to locate validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterOwner {
    Function(FunctionId),
    Event(EventId),
}

impl fmt::Display for ParameterOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterOwner::Function(id) => write!(f, "function {}", id.0),
            ParameterOwner::Event(id) => write!(f, "event {}", id.0),
        }
    }
}

/// A single structural problem found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    DuplicateEnvelopeId(EnvelopeId),
    DuplicateFunctionId(FunctionId),
    DuplicateEventId(EventId),
    DuplicateParameterId {
        owner: ParameterOwner,
        parameter: ParameterId,
    },
    /// An evaluable function without a `time` parameter
    FunctionMissingTime(FunctionId),
    EventMissingTime(EventId),
    EventMissingAmount(EventId),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateEnvelopeId(id) => write!(f, "duplicate envelope id {}", id.0),
            ValidationIssue::DuplicateFunctionId(id) => write!(f, "duplicate function id {}", id.0),
            ValidationIssue::DuplicateEventId(id) => write!(f, "duplicate event id {}", id.0),
            ValidationIssue::DuplicateParameterId { owner, parameter } => {
                write!(f, "duplicate parameter id {} in {owner}", parameter.0)
            }
            ValidationIssue::FunctionMissingTime(id) => {
                write!(f, "function {} has no time parameter", id.0)
            }
            ValidationIssue::EventMissingTime(id) => {
                write!(f, "event {} has no time parameter", id.0)
            }
            ValidationIssue::EventMissingAmount(id) => {
                write!(f, "event {} has no money or amount parameter", id.0)
            }
        }
    }
}

/// A document that parsed but failed structural checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issues.as_slice() {
            [] => write!(f, "invalid document"),
            [only] => write!(f, "invalid document: {only}"),
            [first, rest @ ..] => write!(
                f,
                "invalid document: {first} (and {} more issue(s))",
                rest.len()
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
