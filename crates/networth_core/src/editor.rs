//! An editing session: the current snapshot, its series and the pointer
//! state, kept consistent with each other.
//!
//! Every confirmed edit swaps in a new snapshot and re-simulates from
//! scratch before control returns to the caller.

use crate::edit::Edit;
use crate::interaction::{
    ChartGeometry, Command, InteractionConfig, InteractionState, PointerInput, Scene, Viewport,
    ZoomTransform,
};
use crate::model::{Datum, Event, FinancialProblem};
use crate::simulation::{Horizon, SimulationOptions, simulate_with, sorted_events};

/// What changed while handling an input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// A new snapshot was produced and the series recomputed
    pub problem_changed: bool,
    /// Pointer state or pan/zoom changed
    pub view_changed: bool,
}

impl Outcome {
    pub fn needs_redraw(&self) -> bool {
        self.problem_changed || self.view_changed
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    problem: FinancialProblem,
    horizon: Horizon,
    options: SimulationOptions,
    config: InteractionConfig,
    data: Vec<Datum>,
    viewport: Viewport,
    transform: ZoomTransform,
    state: InteractionState,
    revision: u64,
}

impl Editor {
    pub fn new(
        problem: FinancialProblem,
        horizon: Horizon,
        options: SimulationOptions,
        config: InteractionConfig,
        viewport: Viewport,
    ) -> Self {
        let data = simulate_with(&problem, horizon, &options);
        Self {
            problem,
            horizon,
            options,
            config,
            data,
            viewport,
            transform: ZoomTransform::identity(),
            state: InteractionState::Idle,
            revision: 0,
        }
    }

    pub fn problem(&self) -> &FinancialProblem {
        &self.problem
    }

    pub fn data(&self) -> &[Datum] {
        &self.data
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn transform(&self) -> &ZoomTransform {
        &self.transform
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Incremented on every snapshot swap
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn geometry(&self) -> ChartGeometry {
        ChartGeometry::fit(&self.data, self.viewport)
    }

    pub fn sorted_events(&self) -> Vec<&Event> {
        sorted_events(&self.problem)
    }

    /// Feed one pointer input through the state machine
    pub fn handle(&mut self, input: PointerInput) -> Outcome {
        let geometry = self.geometry();
        let (next, command) = {
            let events = sorted_events(&self.problem);
            let scene = Scene {
                data: &self.data,
                events: &events,
                geometry: &geometry,
                transform: &self.transform,
                config: &self.config,
            };
            self.state.handle(input, &scene)
        };

        let mut outcome = Outcome {
            view_changed: next != self.state,
            ..Outcome::default()
        };
        self.state = next;

        match command {
            Some(Command::Edit(edit)) => outcome.problem_changed = self.apply(edit),
            Some(Command::Pan { dx, dy }) => {
                self.transform.translate(dx, dy);
                outcome.view_changed = true;
            }
            Some(Command::Zoom { factor, x, y }) => {
                let before = self.transform;
                self.transform.zoom_at(factor, x, y, &self.config.zoom);
                outcome.view_changed |= before != self.transform;
            }
            None => {}
        }

        outcome
    }

    /// Apply an edit. Returns false when it would not change anything: an
    /// unknown event, an event with no parameter for the field, or every
    /// such parameter already holding the value.
    pub fn apply(&mut self, edit: Edit) -> bool {
        let Some(event) = self.problem.event(edit.event) else {
            return false;
        };
        let group = edit.field.group();
        let mut targets = event
            .parameters
            .iter()
            .filter(|p| group.contains(p.role))
            .peekable();
        if targets.peek().is_none() || targets.all(|p| p.number() == Some(edit.value)) {
            return false;
        }
        let next = edit.apply(&self.problem);
        self.replace(next);
        true
    }

    /// Swap in a different snapshot, e.g. after loading a document
    pub fn set_problem(&mut self, problem: FinancialProblem) {
        self.state = InteractionState::Idle;
        self.replace(problem);
    }

    pub fn set_horizon(&mut self, horizon: Horizon) {
        self.horizon = horizon;
        self.resimulate();
    }

    pub fn set_options(&mut self, options: SimulationOptions) {
        self.options = options;
        self.resimulate();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn reset_view(&mut self) {
        self.transform = ZoomTransform::identity();
    }

    /// Zoom about the viewport centre, as a wheel notch would
    pub fn zoom(&mut self, zoom_in: bool) {
        let factor = if zoom_in {
            self.config.zoom.step
        } else {
            1.0 / self.config.zoom.step
        };
        let (x, y) = (self.viewport.width / 2.0, self.viewport.height / 2.0);
        self.transform.zoom_at(factor, x, y, &self.config.zoom);
    }

    fn replace(&mut self, problem: FinancialProblem) {
        self.problem = problem;
        self.revision += 1;
        self.resimulate();
    }

    fn resimulate(&mut self) {
        self.data = simulate_with(&self.problem, self.horizon, &self.options);
    }
}
