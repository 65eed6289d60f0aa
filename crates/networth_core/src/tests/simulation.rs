//! Tests for the simulation engine

use std::sync::Arc;

use super::{salary_and_purchase, single_inflow};
use crate::model::{
    Datum, Envelope, EnvelopeId, Event, EventParameter, FinancialProblem, Function, FunctionKind,
    Parameter, ParameterRole,
};
use crate::simulation::{
    Horizon, InflationAdjustment, SimulationOptions, simulate, simulate_envelopes, simulate_with,
    sorted_events,
};

fn horizon(steps: u32) -> Horizon {
    Horizon::new(steps).unwrap()
}

#[test]
fn test_single_inflow_scenario() {
    let data = simulate(&single_inflow(0.0, 1000.0), horizon(3));
    assert_eq!(
        data,
        vec![
            Datum::new(0, 1000.0),
            Datum::new(1, 1000.0),
            Datum::new(2, 1000.0),
        ]
    );
}

#[test]
fn test_compounding_scenario() {
    let problem = FinancialProblem::new(
        vec![Envelope::new(1, "Brokerage", &[1])],
        vec![Function::new(
            1,
            FunctionKind::CompoundInvestInflow,
            vec![
                Parameter::new(1, ParameterRole::Time, 0.0),
                Parameter::new(2, ParameterRole::Money, 100.0),
                Parameter::new(3, ParameterRole::Rate, 0.1),
            ],
        )],
        vec![],
    );

    let ys: Vec<f64> = simulate(&problem, horizon(3)).iter().map(|d| d.y).collect();
    for (actual, expected) in ys.iter().zip([100.0, 110.0, 121.0]) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {expected}, got {actual}"
        );
    }
}

#[test]
fn test_output_covers_horizon_in_order() {
    let data = simulate(&salary_and_purchase(), Horizon::default());
    assert_eq!(data.len(), 60);
    assert!(data.iter().enumerate().all(|(i, d)| d.x == i as u32));
}

#[test]
fn test_simulation_is_deterministic() {
    let problem = salary_and_purchase();
    assert_eq!(
        simulate(&problem, horizon(24)),
        simulate(&problem, horizon(24))
    );
}

#[test]
fn test_step_before_start_is_zero() {
    let data = simulate(&single_inflow(5.0, 250.0), horizon(8));
    assert!(data[..5].iter().all(|d| d.y == 0.0));
    assert!(data[5..].iter().all(|d| d.y == 250.0));
}

#[test]
fn test_empty_envelope_contributes_nothing() {
    let mut problem = single_inflow(0.0, 1000.0);
    problem
        .envelopes
        .push(Arc::new(Envelope::new(2, "Unused", &[])));

    let data = simulate(&problem, horizon(4));
    assert!(data.iter().all(|d| d.y == 1000.0));
}

#[test]
fn test_broken_references_contribute_nothing() {
    let mut problem = single_inflow(0.0, 1000.0);
    problem.envelopes = vec![Arc::new(Envelope::new(1, "Cash", &[1, 42]))];

    let data = simulate(&problem, horizon(2));
    assert!(data.iter().all(|d| d.y == 1000.0));
}

#[test]
fn test_unreferenced_function_has_no_effect() {
    let mut problem = single_inflow(0.0, 1000.0);
    problem.functions.push(Arc::new(Function::new(
        2,
        FunctionKind::Outflow,
        vec![
            Parameter::new(1, ParameterRole::Time, 0.0),
            Parameter::new(2, ParameterRole::Money, 999.0),
        ],
    )));

    assert_eq!(
        simulate(&problem, horizon(3)),
        simulate(&single_inflow(0.0, 1000.0), horizon(3))
    );
}

#[test]
fn test_empty_problem_is_flat_zero() {
    let data = simulate(&FinancialProblem::empty(), horizon(5));
    assert_eq!(data.len(), 5);
    assert!(data.iter().all(|d| d.y == 0.0));
}

#[test]
fn test_function_shared_by_two_envelopes_counts_twice() {
    let mut problem = single_inflow(0.0, 100.0);
    problem
        .envelopes
        .push(Arc::new(Envelope::new(2, "Mirror", &[1])));

    assert_eq!(simulate(&problem, horizon(1))[0].y, 200.0);
}

#[test]
fn test_linked_event_drives_series() {
    let mut problem = salary_and_purchase();
    // Move the purchase through the event only; the function still says 10
    problem.events = vec![Arc::new(Event::new(
        1,
        "purchase",
        vec![EventParameter::new(1, ParameterRole::Time, 3.0).linked(2, 1)],
    ))];

    let data = simulate(&problem, horizon(12));
    assert_eq!(data[2].y, 1000.0);
    assert_eq!(data[3].y, 600.0);
    assert_eq!(data[11].y, 600.0);
}

#[test]
fn test_envelope_breakdown_sums_to_aggregate() {
    let mut problem = salary_and_purchase();
    problem.functions.push(Arc::new(Function::new(
        3,
        FunctionKind::RecurringInflow,
        vec![
            Parameter::new(1, ParameterRole::Time, 0.0),
            Parameter::new(2, ParameterRole::Money, 50.0),
            Parameter::new(3, ParameterRole::Interval, 1.0),
        ],
    )));
    problem
        .envelopes
        .push(Arc::new(Envelope::new(2, "Savings", &[3])));

    let result = simulate_envelopes(&problem, horizon(12), &SimulationOptions::default());
    assert_eq!(result.envelopes.len(), 2);
    assert_eq!(result.envelope(EnvelopeId(2)).unwrap().name, "Savings");
    assert_eq!(result.envelope(EnvelopeId(2)).unwrap().values[11], 600.0);

    for (i, datum) in result.data.iter().enumerate() {
        let sum: f64 = result.envelopes.iter().map(|e| e.values[i]).sum();
        assert!((datum.y - sum).abs() < 1e-9);
    }
    assert_eq!(result.data, simulate(&problem, horizon(12)));
    assert_eq!(result.final_value(), Some(1000.0 - 400.0 + 600.0));
}

#[test]
fn test_inflation_adjustment() {
    let problem = single_inflow(0.0, 1000.0);
    let options = SimulationOptions {
        inflation: Some(InflationAdjustment {
            annual_rate: 0.03,
            reference_step: 12,
        }),
    };

    let data = simulate_with(&problem, horizon(25), &options);
    assert!((data[12].y - 1000.0).abs() < 1e-9);
    assert!((data[24].y - 1000.0 / 1.03).abs() < 1e-9);
    assert!((data[0].y - 1000.0 * 1.03).abs() < 1e-9);
    // Past values are worth more, future values less
    assert!(data[0].y > data[12].y && data[12].y > data[24].y);
}

#[test]
fn test_zero_inflation_is_identity() {
    let problem = salary_and_purchase();
    let options = SimulationOptions {
        inflation: Some(InflationAdjustment {
            annual_rate: 0.0,
            reference_step: 0,
        }),
    };
    assert_eq!(
        simulate_with(&problem, horizon(20), &options),
        simulate(&problem, horizon(20))
    );
}

#[test]
fn test_horizon_rejects_zero() {
    assert!(Horizon::new(0).is_err());
    assert_eq!(Horizon::default().steps(), 60);
    assert!(serde_json::from_str::<Horizon>("0").is_err());
    assert_eq!(serde_json::from_str::<Horizon>("12").unwrap().steps(), 12);
}

#[test]
fn test_sorted_events_are_stable() {
    let at = |id: u32, t: f64| Event::new(id, "e", vec![EventParameter::new(1, ParameterRole::Time, t)]);
    let problem = FinancialProblem::new(
        vec![],
        vec![],
        vec![
            at(1, 5.0),
            at(2, 1.0),
            at(3, 5.0),
            Event::new(4, "timeless", vec![]),
        ],
    );

    let order: Vec<u32> = sorted_events(&problem).iter().map(|e| e.id.0).collect();
    assert_eq!(order, vec![4, 2, 1, 3]);
}
