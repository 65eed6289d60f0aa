//! Edit controller: pure, copy-on-write edits of event parameters
//!
//! Every edit returns a new [`FinancialProblem`]. Events that are not the
//! target stay pointer-equal to the input; an unknown event id is a no-op.
//! Function values follow through the projection in [`crate::project`], so
//! no mirroring into functions happens here.

use std::sync::Arc;

use crate::model::{EventId, FinancialProblem, ParameterValue, RoleGroup};

/// Which family of event parameters an edit rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditField {
    /// Every `time` parameter
    Time,
    /// Every `money` / `amount` parameter
    Amount,
    /// Every `rate` / `expected_return` parameter
    Rate,
}

impl EditField {
    pub fn group(self) -> RoleGroup {
        match self {
            EditField::Time => RoleGroup::Time,
            EditField::Amount => RoleGroup::Amount,
            EditField::Rate => RoleGroup::Rate,
        }
    }
}

/// A single requested change to one event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edit {
    pub event: EventId,
    pub field: EditField,
    pub value: f64,
}

impl Edit {
    pub fn apply(&self, problem: &FinancialProblem) -> FinancialProblem {
        edit_event(problem, self.event, self.field, self.value)
    }
}

/// Set every parameter of `field` on the matching event(s) to `value`
pub fn edit_event(
    problem: &FinancialProblem,
    event_id: EventId,
    field: EditField,
    value: f64,
) -> FinancialProblem {
    let group = field.group();

    let events = problem
        .events
        .iter()
        .map(|event| {
            if event.id != event_id {
                return Arc::clone(event);
            }
            let mut updated = event.as_ref().clone();
            for param in updated
                .parameters
                .iter_mut()
                .filter(|p| group.contains(p.role))
            {
                param.value = ParameterValue::Number(value);
            }
            Arc::new(updated)
        })
        .collect();

    FinancialProblem {
        envelopes: problem.envelopes.clone(),
        functions: problem.functions.clone(),
        events,
    }
}

/// Move an event to `new_time`
pub fn retime_event(problem: &FinancialProblem, event_id: EventId, new_time: f64) -> FinancialProblem {
    edit_event(problem, event_id, EditField::Time, new_time)
}

/// Change the amount of an event
pub fn rescale_event_amount(
    problem: &FinancialProblem,
    event_id: EventId,
    new_amount: f64,
) -> FinancialProblem {
    edit_event(problem, event_id, EditField::Amount, new_amount)
}

/// Change the rate (or expected return) of an event
pub fn rescale_event_rate(
    problem: &FinancialProblem,
    event_id: EventId,
    new_rate: f64,
) -> FinancialProblem {
    edit_event(problem, event_id, EditField::Rate, new_rate)
}
