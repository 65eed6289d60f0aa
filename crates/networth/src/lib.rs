//! Terminal front end for the net-worth engine: chart, event list, and
//! mouse-driven event editing

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod source;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use logging::init_logging;
pub use source::{LoadError, load_problem, try_load_problem};
pub use state::AppState;
