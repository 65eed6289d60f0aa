//! Structural validation of a loaded document
//!
//! Only shape is checked. References that point nowhere are tolerated by
//! the engine and are not reported here.

use rustc_hash::FxHashSet;

use crate::error::{ParameterOwner, ValidationError, ValidationIssue};
use crate::model::{FinancialProblem, ParameterId, RoleGroup};
use crate::resolve::find_in_group;

pub fn validate(problem: &FinancialProblem) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    let mut envelope_ids = FxHashSet::default();
    for envelope in &problem.envelopes {
        if !envelope_ids.insert(envelope.id) {
            issues.push(ValidationIssue::DuplicateEnvelopeId(envelope.id));
        }
    }

    let mut function_ids = FxHashSet::default();
    for function in &problem.functions {
        if !function_ids.insert(function.id) {
            issues.push(ValidationIssue::DuplicateFunctionId(function.id));
        }
        check_parameter_ids(
            ParameterOwner::Function(function.id),
            function.parameters.iter().map(|p| p.id),
            &mut issues,
        );
        if function.kind.is_evaluable()
            && find_in_group(&function.parameters, RoleGroup::Time).is_none()
        {
            issues.push(ValidationIssue::FunctionMissingTime(function.id));
        }
    }

    let mut event_ids = FxHashSet::default();
    for event in &problem.events {
        if !event_ids.insert(event.id) {
            issues.push(ValidationIssue::DuplicateEventId(event.id));
        }
        check_parameter_ids(
            ParameterOwner::Event(event.id),
            event.parameters.iter().map(|p| p.id),
            &mut issues,
        );
        if find_in_group(&event.parameters, RoleGroup::Time).is_none() {
            issues.push(ValidationIssue::EventMissingTime(event.id));
        }
        if find_in_group(&event.parameters, RoleGroup::Amount).is_none() {
            issues.push(ValidationIssue::EventMissingAmount(event.id));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

fn check_parameter_ids(
    owner: ParameterOwner,
    ids: impl Iterator<Item = ParameterId>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = FxHashSet::default();
    for parameter in ids {
        if !seen.insert(parameter) {
            issues.push(ValidationIssue::DuplicateParameterId { owner, parameter });
        }
    }
}
