//! Tests for copy-on-write event edits

use std::sync::Arc;

use super::salary_and_purchase;
use crate::edit::{Edit, EditField, rescale_event_amount, rescale_event_rate, retime_event};
use crate::model::{
    Event, EventId, EventParameter, FinancialProblem, ParameterRole, ParameterValue, RoleGroup,
};
use crate::simulation::{Horizon, simulate};

fn two_events() -> FinancialProblem {
    let mut problem = salary_and_purchase();
    problem.events.push(Arc::new(Event::new(
        2,
        "compound_investment",
        vec![
            EventParameter::new(1, ParameterRole::Time, 4.0),
            EventParameter::new(2, ParameterRole::Amount, 250.0),
            EventParameter::new(3, ParameterRole::ExpectedReturn, 0.05),
            EventParameter::new(4, ParameterRole::Time, 4.0),
        ],
    )));
    problem
}

#[test]
fn test_retime_sets_every_time_parameter() {
    let problem = two_events();
    let edited = retime_event(&problem, EventId(2), 9.0);

    let event = edited.event(EventId(2)).unwrap();
    let times: Vec<f64> = event
        .parameters
        .iter()
        .filter(|p| p.role == ParameterRole::Time)
        .filter_map(EventParameter::number)
        .collect();
    assert_eq!(times, vec![9.0, 9.0]);
    // Other roles are untouched
    assert_eq!(event.value(RoleGroup::Amount), Some(250.0));
}

#[test]
fn test_retime_shares_untouched_entries() {
    let problem = two_events();
    let edited = retime_event(&problem, EventId(2), 9.0);

    assert!(Arc::ptr_eq(&edited.events[0], &problem.events[0]));
    assert!(!Arc::ptr_eq(&edited.events[1], &problem.events[1]));
    assert!(Arc::ptr_eq(&edited.functions[0], &problem.functions[0]));
    assert!(Arc::ptr_eq(&edited.envelopes[0], &problem.envelopes[0]));
    // The input snapshot is still intact
    assert_eq!(problem.event(EventId(2)).unwrap().time(), 4.0);
}

#[test]
fn test_round_trip_reads_back_new_time() {
    let edited = retime_event(&two_events(), EventId(1), 17.0);
    assert_eq!(edited.event(EventId(1)).unwrap().time(), 17.0);
}

#[test]
fn test_unknown_event_is_noop() {
    let problem = two_events();
    assert_eq!(retime_event(&problem, EventId(99), 3.0), problem);
    assert_eq!(rescale_event_amount(&problem, EventId(99), 3.0), problem);
    assert_eq!(rescale_event_rate(&problem, EventId(99), 3.0), problem);
}

#[test]
fn test_amount_edit_covers_money_and_amount_roles() {
    let problem = two_events();

    let edited = rescale_event_amount(&problem, EventId(1), 900.0);
    assert_eq!(edited.event(EventId(1)).unwrap().value(RoleGroup::Amount), Some(900.0));

    let edited = rescale_event_amount(&problem, EventId(2), 75.0);
    assert_eq!(edited.event(EventId(2)).unwrap().value(RoleGroup::Amount), Some(75.0));
}

#[test]
fn test_rate_edit_covers_expected_return() {
    let edited = rescale_event_rate(&two_events(), EventId(2), 0.08);
    let event = edited.event(EventId(2)).unwrap();
    assert_eq!(event.parameters[2].value, ParameterValue::Number(0.08));
    assert_eq!(event.time(), 4.0);
}

#[test]
fn test_edit_without_matching_role_changes_nothing_but_identity() {
    // The purchase has no rate; the event is rebuilt but equal
    let problem = two_events();
    let edited = rescale_event_rate(&problem, EventId(1), 0.5);
    assert_eq!(edited, problem);
}

#[test]
fn test_retime_moves_linked_function_in_series() {
    let problem = salary_and_purchase();
    let horizon = Horizon::new(12).unwrap();
    let before = simulate(&problem, horizon);
    assert_eq!(before[5].y, 1000.0);

    let after = simulate(&retime_event(&problem, EventId(1), 5.0), horizon);
    assert_eq!(after[4].y, 1000.0);
    assert_eq!(after[5].y, 600.0);

    let cheaper = simulate(&rescale_event_amount(&problem, EventId(1), 100.0), horizon);
    assert_eq!(cheaper[11].y, 900.0);
}

#[test]
fn test_unlinked_event_edit_leaves_series_alone() {
    let mut problem = salary_and_purchase();
    problem.events = vec![Arc::new(Event::new(
        1,
        "purchase",
        vec![
            EventParameter::new(1, ParameterRole::Time, 10.0),
            EventParameter::new(2, ParameterRole::Money, 400.0),
        ],
    ))];
    let horizon = Horizon::new(12).unwrap();

    let edited = retime_event(&problem, EventId(1), 2.0);
    assert_eq!(edited.event(EventId(1)).unwrap().time(), 2.0);
    assert_eq!(simulate(&edited, horizon), simulate(&problem, horizon));
}

#[test]
fn test_edit_value_applies_like_free_function() {
    let problem = two_events();
    let edit = Edit {
        event: EventId(2),
        field: EditField::Time,
        value: 1.0,
    };
    assert_eq!(edit.apply(&problem), retime_event(&problem, EventId(2), 1.0));
}
