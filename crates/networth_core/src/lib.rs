//! Net-worth simulation and interactive editing
//!
//! A [`FinancialProblem`](model::FinancialProblem) groups evaluable functions
//! into envelopes and exposes user-facing events that drive function
//! parameters. This crate provides:
//! - parameter resolution by role and per-kind function evaluation
//! - the simulation engine producing a monthly net-worth series
//! - pure copy-on-write edits of event time, amount and rate
//! - the event → function projection the engine reads through
//! - structural validation of loaded documents
//! - viewport mapping and the pointer interaction state machine
//!
//! ```ignore
//! use networth_core::{FinancialProblem, Horizon, simulate};
//!
//! let problem = FinancialProblem::from_json(&json)?;
//! let series = simulate(&problem, Horizon::default());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod edit;
pub mod editor;
pub mod error;
pub mod evaluate;
pub mod interaction;
pub mod project;
pub mod resolve;
pub mod simulation;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use edit::{Edit, EditField, rescale_event_amount, rescale_event_rate, retime_event};
pub use editor::{Editor, Outcome};
pub use error::{SimulationError, ValidationError, ValidationIssue};
pub use model::{Datum, FinancialProblem};
pub use simulation::{
    DEFAULT_HORIZON, Horizon, SimulationOptions, SimulationResult, simulate, simulate_envelopes,
    simulate_with, sorted_events,
};
pub use validate::validate;
