//! Integration tests for the networth simulation core
//!
//! Tests are organized by topic:
//! - `simulation` - Engine output, scenarios and envelope breakdown
//! - `edits` - Copy-on-write edits and their effect through the projection
//! - `documents` - JSON document shape and structural validation
//! - `interaction` - Editor sessions driven by pointer input

mod documents;
mod edits;
mod simulation;

use crate::model::{
    Envelope, Event, EventParameter, FinancialProblem, Function, FunctionKind, Parameter,
    ParameterRole,
};

/// One envelope holding one inflow of `amount` starting at `start`
pub(crate) fn single_inflow(start: f64, amount: f64) -> FinancialProblem {
    FinancialProblem::new(
        vec![Envelope::new(1, "Cash", &[1])],
        vec![Function::new(
            1,
            FunctionKind::Inflow,
            vec![
                Parameter::new(1, ParameterRole::Time, start),
                Parameter::new(2, ParameterRole::Money, amount),
            ],
        )],
        vec![],
    )
}

/// A salary inflow from step 0 and a purchase outflow at step 10, the
/// purchase driven by a linked event
pub(crate) fn salary_and_purchase() -> FinancialProblem {
    FinancialProblem::new(
        vec![Envelope::new(1, "Checking", &[1, 2])],
        vec![
            Function::new(
                1,
                FunctionKind::Inflow,
                vec![
                    Parameter::new(1, ParameterRole::Time, 0.0),
                    Parameter::new(2, ParameterRole::Money, 1000.0),
                ],
            ),
            Function::new(
                2,
                FunctionKind::Outflow,
                vec![
                    Parameter::new(1, ParameterRole::Time, 10.0),
                    Parameter::new(2, ParameterRole::Money, 400.0),
                ],
            ),
        ],
        vec![
            Event::new(
                1,
                "purchase",
                vec![
                    EventParameter::new(1, ParameterRole::Time, 10.0).linked(2, 1),
                    EventParameter::new(2, ParameterRole::Money, 400.0).linked(2, 2),
                ],
            )
            .with_description("New laptop"),
        ],
    )
}
