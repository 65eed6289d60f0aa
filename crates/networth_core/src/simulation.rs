use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::evaluate::Formula;
use crate::model::{Datum, EnvelopeId, Event, FinancialProblem};
use crate::project::project;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Number of monthly steps simulated when nothing else is configured
pub const DEFAULT_HORIZON: u32 = 60;

/// Number of discrete steps to simulate; always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Horizon(NonZeroU32);

impl Horizon {
    pub fn new(steps: u32) -> Result<Self, SimulationError> {
        NonZeroU32::new(steps)
            .map(Horizon)
            .ok_or(SimulationError::ZeroHorizon)
    }

    pub fn steps(self) -> u32 {
        self.0.get()
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(NonZeroU32::MIN.saturating_add(DEFAULT_HORIZON - 1))
    }
}

impl TryFrom<u32> for Horizon {
    type Error = SimulationError;

    fn try_from(steps: u32) -> Result<Self, Self::Error> {
        Horizon::new(steps)
    }
}

impl From<Horizon> for u32 {
    fn from(horizon: Horizon) -> Self {
        horizon.steps()
    }
}

/// Express every sample in the money of a reference step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationAdjustment {
    /// Annual inflation rate, e.g. 0.03
    pub annual_rate: f64,
    /// Step whose money the series is expressed in
    #[serde(default)]
    pub reference_step: u32,
}

impl InflationAdjustment {
    /// Factor applied to a sample at step `x`
    pub fn factor(&self, x: u32) -> f64 {
        let monthly = (1.0 + self.annual_rate).powf(1.0 / 12.0) - 1.0;
        (1.0 + monthly).powf(self.reference_step as f64 - x as f64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation: Option<InflationAdjustment>,
}

impl SimulationOptions {
    fn adjust(&self, x: u32, y: f64) -> f64 {
        match &self.inflation {
            Some(inflation) => y * inflation.factor(x),
            None => y,
        }
    }
}

/// Value of one envelope at every step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSeries {
    pub id: EnvelopeId,
    pub name: String,
    pub values: Vec<f64>,
}

/// Aggregate series plus its per-envelope breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub data: Vec<Datum>,
    pub envelopes: Vec<EnvelopeSeries>,
}

impl SimulationResult {
    pub fn final_value(&self) -> Option<f64> {
        self.data.last().map(|d| d.y)
    }

    pub fn envelope(&self, id: EnvelopeId) -> Option<&EnvelopeSeries> {
        self.envelopes.iter().find(|e| e.id == id)
    }
}

/// Formulas bound once per envelope; unresolved or malformed functions are
/// dropped because they contribute zero anyway
struct Plan {
    envelopes: Vec<Vec<Formula>>,
}

impl Plan {
    fn new(problem: &FinancialProblem) -> Self {
        let table = project(problem);
        let envelopes = problem
            .envelopes
            .iter()
            .map(|envelope| {
                envelope
                    .function_ids
                    .iter()
                    .filter_map(|id| table.get(*id))
                    .filter_map(Formula::bind)
                    .collect()
            })
            .collect();
        Self { envelopes }
    }

    fn envelope_value(formulas: &[Formula], t: f64) -> f64 {
        formulas.iter().map(|f| f.at(t)).sum()
    }

    fn aggregate(&self, t: u32) -> f64 {
        let t = t as f64;
        self.envelopes
            .iter()
            .map(|formulas| Self::envelope_value(formulas, t))
            .sum()
    }
}

/// Net worth at every step in `[0, horizon)`
pub fn simulate(problem: &FinancialProblem, horizon: Horizon) -> Vec<Datum> {
    simulate_with(problem, horizon, &SimulationOptions::default())
}

pub fn simulate_with(
    problem: &FinancialProblem,
    horizon: Horizon,
    options: &SimulationOptions,
) -> Vec<Datum> {
    let plan = Plan::new(problem);
    let step = |x: u32| Datum::new(x, options.adjust(x, plan.aggregate(x)));

    #[cfg(feature = "parallel")]
    {
        (0..horizon.steps()).into_par_iter().map(step).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..horizon.steps()).map(step).collect()
    }
}

/// Like [`simulate_with`], also keeping each envelope's own series
pub fn simulate_envelopes(
    problem: &FinancialProblem,
    horizon: Horizon,
    options: &SimulationOptions,
) -> SimulationResult {
    let plan = Plan::new(problem);
    let steps = horizon.steps();

    let envelopes: Vec<EnvelopeSeries> = problem
        .envelopes
        .iter()
        .zip(&plan.envelopes)
        .map(|(envelope, formulas)| EnvelopeSeries {
            id: envelope.id,
            name: envelope.name.clone(),
            values: (0..steps)
                .map(|x| options.adjust(x, Plan::envelope_value(formulas, x as f64)))
                .collect(),
        })
        .collect();

    let data = (0..steps)
        .map(|x| {
            let raw: f64 = plan
                .envelopes
                .iter()
                .map(|formulas| Plan::envelope_value(formulas, x as f64))
                .sum();
            Datum::new(x, options.adjust(x, raw))
        })
        .collect();

    SimulationResult { data, envelopes }
}

/// Events ordered by their time parameter, ties kept in document order
pub fn sorted_events(problem: &FinancialProblem) -> Vec<&Event> {
    let mut events: Vec<&Event> = problem.events.iter().map(|e| e.as_ref()).collect();
    events.sort_by(|a, b| a.time().total_cmp(&b.time()));
    events
}
