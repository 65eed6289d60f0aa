//! The complete financial-problem document and its simulated samples

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::events::{Envelope, Event};
use super::functions::Function;
use super::ids::{EventId, FunctionId};

/// An immutable snapshot of the whole document.
///
/// Entries are shared behind `Arc` so an edit can copy the lists cheaply and
/// replace only the entries it touches; every other entry stays pointer-equal
/// to the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialProblem {
    #[serde(default)]
    pub envelopes: Vec<Arc<Envelope>>,
    #[serde(default)]
    pub functions: Vec<Arc<Function>>,
    #[serde(default)]
    pub events: Vec<Arc<Event>>,
}

impl FinancialProblem {
    /// The problem with no envelopes, functions or events
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(envelopes: Vec<Envelope>, functions: Vec<Function>, events: Vec<Event>) -> Self {
        Self {
            envelopes: envelopes.into_iter().map(Arc::new).collect(),
            functions: functions.into_iter().map(Arc::new).collect(),
            events: events.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.envelopes.is_empty() && self.functions.is_empty() && self.events.is_empty()
    }

    /// First function with the given id
    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.functions.iter().find(|f| f.id == id).map(Arc::as_ref)
    }

    /// First event with the given id
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id).map(Arc::as_ref)
    }

    /// Parse a problem from its JSON document form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One sample of the simulated series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    /// Time step (months from the start)
    pub x: u32,
    /// Aggregate net worth at `x`
    pub y: f64,
}

impl Datum {
    pub fn new(x: u32, y: f64) -> Self {
        Self { x, y }
    }
}
