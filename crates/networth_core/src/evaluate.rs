//! Function evaluation
//!
//! A [`Function`] is bound to a [`Formula`] once: the kind selects the
//! variant and the variant's required parameter groups are resolved from the
//! parameter list. A function that fails to bind contributes zero at every
//! time.

use crate::model::{Function, FunctionKind, RoleGroup};
use crate::resolve::find_in_group;

/// Sign applied to a formula's magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::In => 1.0,
            Direction::Out => -1.0,
        }
    }
}

/// A function kind together with its resolved parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    /// Constant `amount` from `start` onwards
    Step {
        direction: Direction,
        start: f64,
        amount: f64,
    },
    /// `amount * (1 + rate)^(t - start)` from `start` onwards
    Compound {
        direction: Direction,
        start: f64,
        amount: f64,
        rate: f64,
    },
    /// A step of `amount` repeated every `interval` from `start` until `end`
    Recurring {
        direction: Direction,
        start: f64,
        amount: f64,
        interval: f64,
        end: Option<f64>,
    },
}

impl Formula {
    /// Resolve the parameters required by the function's kind.
    ///
    /// Returns `None` for kinds the engine does not evaluate and for
    /// functions missing a required parameter.
    pub fn bind(function: &Function) -> Option<Formula> {
        let value = |group| find_in_group(&function.parameters, group).map(|p| p.value);

        let direction = match function.kind {
            FunctionKind::Inflow
            | FunctionKind::CompoundInvestInflow
            | FunctionKind::RecurringInflow => Direction::In,
            FunctionKind::Outflow
            | FunctionKind::CompoundInvestOutflow
            | FunctionKind::RecurringOutflow => Direction::Out,
            FunctionKind::None | FunctionKind::Unknown => return None,
        };

        let start = value(RoleGroup::Time)?;
        let amount = value(RoleGroup::Amount)?;

        match function.kind {
            FunctionKind::Inflow | FunctionKind::Outflow => Some(Formula::Step {
                direction,
                start,
                amount,
            }),
            FunctionKind::CompoundInvestInflow | FunctionKind::CompoundInvestOutflow => {
                Some(Formula::Compound {
                    direction,
                    start,
                    amount,
                    rate: value(RoleGroup::Rate)?,
                })
            }
            FunctionKind::RecurringInflow | FunctionKind::RecurringOutflow => {
                let interval = value(RoleGroup::Interval)?;
                if interval.is_nan() || interval <= 0.0 {
                    return None;
                }
                Some(Formula::Recurring {
                    direction,
                    start,
                    amount,
                    interval,
                    end: value(RoleGroup::EndTime),
                })
            }
            FunctionKind::None | FunctionKind::Unknown => None,
        }
    }

    /// Contribution at time `t`
    pub fn at(&self, t: f64) -> f64 {
        match *self {
            Formula::Step {
                direction,
                start,
                amount,
            } => direction.sign() * amount * unit_step(start, t),
            Formula::Compound {
                direction,
                start,
                amount,
                rate,
            } => {
                if t < start {
                    return 0.0;
                }
                direction.sign() * amount * (1.0 + rate).powf(t - start)
            }
            Formula::Recurring {
                direction,
                start,
                amount,
                interval,
                end,
            } => {
                let last = end.map_or(t, |end| t.min(end));
                if last < start {
                    return 0.0;
                }
                let occurrences = ((last - start) / interval).floor() + 1.0;
                direction.sign() * amount * occurrences
            }
        }
    }
}

/// 1 from `start` onwards, 0 before it
fn unit_step(start: f64, t: f64) -> f64 {
    if t >= start { 1.0 } else { 0.0 }
}

/// Contribution of `function` at time `t`; malformed functions give zero
pub fn evaluate(function: &Function, t: f64) -> f64 {
    Formula::bind(function).map_or(0.0, |formula| formula.at(t))
}
