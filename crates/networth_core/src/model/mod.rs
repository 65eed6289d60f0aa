mod events;
mod functions;
mod ids;
mod parameters;
mod problem;

pub use events::{Envelope, Event};
pub use functions::{Function, FunctionKind};
pub use ids::{EnvelopeId, EventId, FunctionId, ParameterId};
pub use parameters::{
    EventParameter, Parameter, ParameterLink, ParameterRole, ParameterValue, RoleGroup, RoleTagged,
};
pub use problem::{Datum, FinancialProblem};
