//! Problem source: loading the financial-problem document from disk
//!
//! The simulation path never sees a load failure. [`load_problem`] logs the
//! failure and hands back the empty problem instead.

use std::fmt;
use std::fs;
use std::path::Path;

use networth_core::{FinancialProblem, ValidationError, validate};

/// Why a document could not be loaded
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(ValidationError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {e}"),
            LoadError::Parse(e) => write!(f, "Parse error: {e}"),
            LoadError::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

impl From<ValidationError> for LoadError {
    fn from(e: ValidationError) -> Self {
        LoadError::Invalid(e)
    }
}

/// Read, parse and validate a document
pub fn try_load_problem(path: &Path) -> Result<FinancialProblem, LoadError> {
    let content = fs::read_to_string(path)?;
    let problem = FinancialProblem::from_json(&content)?;
    validate(&problem)?;

    tracing::info!(
        path = %path.display(),
        envelopes = problem.envelopes.len(),
        functions = problem.functions.len(),
        events = problem.events.len(),
        "Loaded financial problem"
    );
    Ok(problem)
}

/// Like [`try_load_problem`], substituting the empty problem on failure.
///
/// For library callers that only need a problem to simulate. The binary
/// calls [`try_load_problem`] instead so the failure can also be shown on
/// the status bar.
pub fn load_problem(path: &Path) -> FinancialProblem {
    match try_load_problem(path) {
        Ok(problem) => problem,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load financial problem, using empty problem");
            FinancialProblem::empty()
        }
    }
}
