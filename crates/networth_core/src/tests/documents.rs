//! Tests for the JSON document shape and structural validation

use crate::error::{ParameterOwner, ValidationIssue};
use crate::model::{
    EventId, FinancialProblem, FunctionId, FunctionKind, ParameterId, ParameterRole,
    ParameterValue,
};
use crate::simulation::{Horizon, simulate};
use crate::validate::validate;

const DOCUMENT: &str = r#"{
    "envelopes": [
        { "id": 1, "name": "Checking", "function_ids": [1, 2, 3] }
    ],
    "functions": [
        {
            "id": 1,
            "type": "inflow",
            "parameters": [
                { "id": 1, "type": "time", "value": 0 },
                { "id": 2, "type": "money", "value": 1000 }
            ]
        },
        { "id": 2, "type": "", "parameters": [] },
        { "id": 3, "type": "lottery_win", "parameters": [] }
    ],
    "events": [
        {
            "id": 1,
            "type": "pay_check",
            "description": "Salary",
            "parameters": [
                { "id": 1, "type": "time", "value": 2, "id_parameter": 1, "id_function": 1 },
                { "id": 2, "type": "money", "value": 1000, "id_parameter": 2, "id_function": 1 },
                { "id": 3, "type": "to_key", "value": "W1" }
            ]
        }
    ]
}"#;

#[test]
fn test_parse_document_shape() {
    let problem = FinancialProblem::from_json(DOCUMENT).unwrap();

    assert_eq!(problem.envelopes[0].name, "Checking");
    assert_eq!(problem.functions[0].kind, FunctionKind::Inflow);
    assert_eq!(problem.functions[1].kind, FunctionKind::None);
    assert_eq!(problem.functions[2].kind, FunctionKind::Unknown);

    let event = problem.event(EventId(1)).unwrap();
    assert_eq!(event.kind, "pay_check");
    assert_eq!(event.description, "Salary");
    assert_eq!(event.parameters[0].id_function, Some(FunctionId(1)));
    assert_eq!(event.parameters[0].id_parameter, Some(ParameterId(1)));
    assert_eq!(event.parameters[2].role, ParameterRole::ToKey);
    assert_eq!(
        event.parameters[2].value,
        ParameterValue::Text("W1".to_string())
    );
    assert_eq!(event.parameters[2].link(), None);
}

#[test]
fn test_parsed_document_simulates_through_links() {
    let problem = FinancialProblem::from_json(DOCUMENT).unwrap();
    let ys: Vec<f64> = simulate(&problem, Horizon::new(4).unwrap())
        .iter()
        .map(|d| d.y)
        .collect();
    assert_eq!(ys, vec![0.0, 0.0, 1000.0, 1000.0]);
}

#[test]
fn test_missing_lists_default_to_empty() {
    let problem = FinancialProblem::from_json(r#"{ "events": [] }"#).unwrap();
    assert!(problem.is_empty());
}

#[test]
fn test_events_must_be_a_list() {
    assert!(FinancialProblem::from_json(r#"{ "events": {} }"#).is_err());
}

#[test]
fn test_json_round_trip_keeps_shape() {
    let problem = FinancialProblem::from_json(DOCUMENT).unwrap();
    let json = problem.to_json().unwrap();
    assert!(json.contains(r#""type": "inflow""#));
    assert!(json.contains(r#""type": """#));
    assert_eq!(FinancialProblem::from_json(&json).unwrap(), problem);
}

#[test]
fn test_valid_document_passes() {
    let problem = FinancialProblem::from_json(DOCUMENT).unwrap();
    assert_eq!(validate(&problem), Ok(()));
    assert_eq!(validate(&FinancialProblem::empty()), Ok(()));
}

#[test]
fn test_validation_collects_every_issue() {
    let json = r#"{
        "envelopes": [
            { "id": 1, "name": "A", "function_ids": [1] },
            { "id": 1, "name": "B", "function_ids": [99] }
        ],
        "functions": [
            { "id": 1, "type": "outflow", "parameters": [{ "id": 1, "type": "money", "value": 5 }] },
            { "id": 1, "type": "", "parameters": [] }
        ],
        "events": [
            {
                "id": 4,
                "type": "purchase",
                "description": "",
                "parameters": [
                    { "id": 1, "type": "money", "value": 5 },
                    { "id": 1, "type": "rate", "value": 0.1 }
                ]
            },
            { "id": 5, "type": "note", "description": "", "parameters": [{ "id": 1, "type": "time", "value": 0 }] }
        ]
    }"#;
    let problem = FinancialProblem::from_json(json).unwrap();
    let err = validate(&problem).unwrap_err();

    assert_eq!(
        err.issues,
        vec![
            ValidationIssue::DuplicateEnvelopeId(crate::model::EnvelopeId(1)),
            ValidationIssue::FunctionMissingTime(FunctionId(1)),
            ValidationIssue::DuplicateFunctionId(FunctionId(1)),
            ValidationIssue::DuplicateParameterId {
                owner: ParameterOwner::Event(EventId(4)),
                parameter: ParameterId(1),
            },
            ValidationIssue::EventMissingTime(EventId(4)),
            ValidationIssue::EventMissingAmount(EventId(5)),
        ]
    );
    assert!(err.to_string().contains("and 5 more"));
}
