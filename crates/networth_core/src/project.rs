//! Event → function projection
//!
//! Events are the editable copy of a value; functions are what the engine
//! evaluates. Rather than mirroring every edit by hand, the function table
//! seen by the engine is derived on read: each numeric event parameter that
//! links to a function parameter overrides that parameter's value. Later
//! events in document order win when two link the same parameter.

use std::borrow::Cow;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::model::{FinancialProblem, Function, FunctionId, ParameterLink};

/// Functions keyed by id, with event overrides applied
#[derive(Debug, Clone)]
pub struct FunctionTable<'a> {
    functions: FxHashMap<FunctionId, Cow<'a, Function>>,
}

impl<'a> FunctionTable<'a> {
    pub fn get(&self, id: FunctionId) -> Option<&Function> {
        self.functions.get(&id).map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Ids of functions whose values differ from the document because an
    /// event overrides them
    pub fn overridden(&self) -> impl Iterator<Item = FunctionId> + '_ {
        self.functions
            .iter()
            .filter(|(_, f)| matches!(f, Cow::Owned(_)))
            .map(|(id, _)| *id)
    }

    fn apply(&mut self, link: ParameterLink, value: f64) {
        let Some(function) = self.functions.get_mut(&link.function_id) else {
            return;
        };
        let Some(index) = function
            .parameters
            .iter()
            .position(|p| p.id == link.parameter_id)
        else {
            return;
        };
        if function.parameters[index].value != value {
            function.to_mut().parameters[index].value = value;
        }
    }
}

/// Build the function table the engine evaluates.
///
/// Duplicate function ids resolve to the first definition. Links that point
/// at a missing function or parameter are ignored.
pub fn project(problem: &FinancialProblem) -> FunctionTable<'_> {
    let mut functions: FxHashMap<FunctionId, Cow<'_, Function>> = FxHashMap::default();
    for function in &problem.functions {
        functions
            .entry(function.id)
            .or_insert(Cow::Borrowed(function.as_ref()));
    }
    let mut table = FunctionTable { functions };

    for event in &problem.events {
        for param in &event.parameters {
            if let (Some(link), Some(value)) = (param.link(), param.number()) {
                table.apply(link, value);
            }
        }
    }

    table
}

/// Bake the projection into a new snapshot whose functions carry the event
/// values. Functions without overrides are shared with `problem`.
pub fn materialize(problem: &FinancialProblem) -> FinancialProblem {
    let table = project(problem);
    let mut seen = rustc_hash::FxHashSet::default();

    let functions = problem
        .functions
        .iter()
        .map(|function| {
            // Only the first definition of an id is what the engine sees
            if !seen.insert(function.id) {
                return Arc::clone(function);
            }
            match table.functions.get(&function.id) {
                Some(Cow::Owned(updated)) => Arc::new(updated.clone()),
                _ => Arc::clone(function),
            }
        })
        .collect();

    FinancialProblem {
        envelopes: problem.envelopes.clone(),
        functions,
        events: problem.events.clone(),
    }
}
