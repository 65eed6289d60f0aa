mod cache;

pub use cache::CachedValue;

use std::path::PathBuf;

use networth_core::interaction::Viewport;
use networth_core::simulation::SimulationResult;
use networth_core::{Editor, FinancialProblem, Horizon, simulate_envelopes};
use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::source::try_load_problem;

/// Months added or removed by one horizon key press
pub const HORIZON_STEP: u32 = 12;

pub struct AppState {
    pub editor: Editor,
    pub config: AppConfig,
    /// Document the problem was loaded from, if any
    pub document: Option<PathBuf>,
    pub error_message: Option<String>,
    pub exit: bool,
    /// Plot area of the chart in terminal cells, updated on every draw
    pub chart_area: Rect,
    /// Whether the last mouse event landed inside `chart_area`
    pub pointer_inside: bool,
    breakdown: CachedValue<SimulationResult>,
}

impl AppState {
    pub fn new(problem: FinancialProblem, config: AppConfig, document: Option<PathBuf>) -> Self {
        let editor = Editor::new(
            problem,
            config.horizon,
            config.simulation_options(),
            config.interaction(),
            Viewport::new(1.0, 1.0),
        );
        Self {
            editor,
            config,
            document,
            error_message: None,
            exit: false,
            chart_area: Rect::default(),
            pointer_inside: false,
            breakdown: CachedValue::new(),
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "Status error");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Resize the editor's viewport to the chart's plot area
    pub fn set_chart_area(&mut self, area: Rect) {
        if area != self.chart_area {
            self.chart_area = area;
            self.editor.resize(Viewport::new(
                f64::from(area.width.max(1)),
                f64::from(area.height.max(1)),
            ));
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let area = self.chart_area;
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    }

    /// Device coordinates of a terminal cell's centre, relative to the plot
    /// area. Cells outside the area give coordinates outside the viewport.
    pub fn to_device(&self, column: u16, row: u16) -> (f64, f64) {
        (
            f64::from(column) - f64::from(self.chart_area.x) + 0.5,
            f64::from(row) - f64::from(self.chart_area.y) + 0.5,
        )
    }

    /// Grow or shrink the horizon by whole years; never below one year
    pub fn change_horizon(&mut self, grow: bool) {
        let steps = self.editor.horizon().steps();
        let next = if grow {
            steps.saturating_add(HORIZON_STEP)
        } else {
            steps.saturating_sub(HORIZON_STEP).max(HORIZON_STEP)
        };
        if next == steps {
            return;
        }
        match Horizon::new(next) {
            Ok(horizon) => {
                tracing::debug!(steps = next, "Horizon changed");
                self.editor.set_horizon(horizon);
                self.breakdown.invalidate();
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Re-read the document. A failed reload keeps the current problem.
    pub fn reload(&mut self) {
        let Some(path) = self.document.clone() else {
            self.set_error("No document to reload");
            return;
        };
        match try_load_problem(&path) {
            Ok(problem) => {
                self.editor.set_problem(problem);
                self.clear_error();
            }
            Err(e) => self.set_error(format!("Reload failed: {e}")),
        }
    }

    /// Recompute the per-envelope breakdown if the snapshot changed
    pub fn refresh_breakdown(&mut self) {
        let editor = &self.editor;
        let options = self.config.simulation_options();
        self.breakdown.get_or_insert_with(editor.revision(), || {
            simulate_envelopes(editor.problem(), editor.horizon(), &options)
        });
    }

    pub fn breakdown(&self) -> Option<&SimulationResult> {
        self.breakdown.get(self.editor.revision())
    }
}
