//! Evaluable formulas referenced by envelopes

use serde::{Deserialize, Serialize};

use super::ids::FunctionId;
use super::parameters::{Parameter, RoleGroup};

/// Kind of a function (the `type` field in the document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Inflow,
    Outflow,
    CompoundInvestInflow,
    CompoundInvestOutflow,
    RecurringInflow,
    RecurringOutflow,
    #[serde(rename = "", alias = "none")]
    None,
    /// Any `type` string this crate does not know about
    #[serde(other)]
    Unknown,
}

impl FunctionKind {
    /// Parameter groups that must be present for the kind to contribute
    pub fn required(self) -> &'static [RoleGroup] {
        match self {
            FunctionKind::Inflow | FunctionKind::Outflow => &[RoleGroup::Time, RoleGroup::Amount],
            FunctionKind::CompoundInvestInflow | FunctionKind::CompoundInvestOutflow => {
                &[RoleGroup::Time, RoleGroup::Amount, RoleGroup::Rate]
            }
            FunctionKind::RecurringInflow | FunctionKind::RecurringOutflow => {
                &[RoleGroup::Time, RoleGroup::Amount, RoleGroup::Interval]
            }
            FunctionKind::None | FunctionKind::Unknown => &[],
        }
    }

    /// Whether the engine evaluates this kind at all
    pub fn is_evaluable(self) -> bool {
        !matches!(self, FunctionKind::None | FunctionKind::Unknown)
    }
}

/// A function definition: a kind plus its ordered parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub id: FunctionId,
    #[serde(rename = "type")]
    pub kind: FunctionKind,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Function {
    pub fn new(id: u32, kind: FunctionKind, parameters: Vec<Parameter>) -> Self {
        Self {
            id: FunctionId(id),
            kind,
            parameters,
        }
    }
}
