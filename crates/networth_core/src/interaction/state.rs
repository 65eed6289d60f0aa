//! Pointer interaction state machine
//!
//! One value describes what the pointer is doing. Transitions are pure: they
//! take the current state, an input and a read-only [`Scene`], and return
//! the next state plus at most one [`Command`] for the caller to carry out.

use serde::{Deserialize, Serialize};

use crate::edit::{Edit, EditField};
use crate::model::{Datum, Event, EventId};

use super::probe::{hit_event, nearest_datum};
use super::viewport::{ChartGeometry, ZoomLimits, ZoomTransform};

/// Which value of an event a drag rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragAxis {
    /// Horizontal: the event's time, snapped to whole steps
    Time,
    /// Vertical: the event's amount, moved by the money distance dragged
    Amount,
    /// Vertical: the event's rate, moved by device distance × sensitivity
    Rate,
}

impl DragAxis {
    pub fn field(self) -> EditField {
        match self {
            DragAxis::Time => EditField::Time,
            DragAxis::Amount => EditField::Amount,
            DragAxis::Rate => EditField::Rate,
        }
    }
}

/// Tunables for hit-testing, zooming and rate dragging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Max device distance between pointer and marker for a hit
    pub hit_tolerance: f64,
    pub zoom: ZoomLimits,
    /// Rate change per device unit of vertical drag
    pub rate_sensitivity: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: 10.0,
            zoom: ZoomLimits::default(),
            rate_sensitivity: 0.001,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    pub datum: Datum,
    pub event: Option<EventId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub event: EventId,
    pub axis: DragAxis,
    /// Device y where the drag started
    anchor_y: f64,
    /// Value of the dragged field when the drag started
    initial: f64,
    /// Scales at press time; edits re-fit the live series, so distances
    /// are measured against these
    geometry: ChartGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pan {
    last_x: f64,
    last_y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering(Hover),
    DraggingEvent(Drag),
    PanningZooming(Pan),
}

/// Pointer input in device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Move { x: f64, y: f64 },
    /// `axis` is what a drag would edit if the press lands on a marker
    Press { x: f64, y: f64, axis: DragAxis },
    Release,
    Leave,
    /// Positive `delta` zooms out, negative zooms in
    Wheel { x: f64, y: f64, delta: f64 },
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Edit(Edit),
    Pan { dx: f64, dy: f64 },
    Zoom { factor: f64, x: f64, y: f64 },
}

/// Everything a transition may read
pub struct Scene<'a> {
    pub data: &'a [Datum],
    /// Events sorted by time
    pub events: &'a [&'a Event],
    pub geometry: &'a ChartGeometry,
    pub transform: &'a ZoomTransform,
    pub config: &'a InteractionConfig,
}

impl Scene<'_> {
    fn hover(&self, x: f64) -> InteractionState {
        let domain_x = self.geometry.domain_x(self.transform, x);
        match nearest_datum(self.data, domain_x) {
            Some(datum) => InteractionState::Hovering(Hover {
                datum,
                event: self.hit(x).map(|e| e.id),
            }),
            None => InteractionState::Idle,
        }
    }

    fn hit(&self, x: f64) -> Option<&Event> {
        hit_event(
            self.events,
            self.geometry,
            self.transform,
            x,
            self.config.hit_tolerance,
        )
    }
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::DraggingEvent(_))
    }

    pub fn hover(&self) -> Option<&Hover> {
        match self {
            InteractionState::Hovering(hover) => Some(hover),
            _ => None,
        }
    }

    /// Event under the pointer or being dragged
    pub fn active_event(&self) -> Option<EventId> {
        match self {
            InteractionState::Hovering(hover) => hover.event,
            InteractionState::DraggingEvent(drag) => Some(drag.event),
            _ => None,
        }
    }

    pub fn handle(&self, input: PointerInput, scene: &Scene<'_>) -> (InteractionState, Option<Command>) {
        use InteractionState::*;

        match (*self, input) {
            (DraggingEvent(drag), PointerInput::Move { x, y }) => {
                let value = drag_value(&drag, x, y, scene);
                let edit = Edit {
                    event: drag.event,
                    field: drag.axis.field(),
                    value,
                };
                (*self, Some(Command::Edit(edit)))
            }
            (PanningZooming(pan), PointerInput::Move { x, y }) => {
                let command = Command::Pan {
                    dx: x - pan.last_x,
                    dy: y - pan.last_y,
                };
                (
                    PanningZooming(Pan {
                        last_x: x,
                        last_y: y,
                    }),
                    Some(command),
                )
            }
            (Idle | Hovering(_), PointerInput::Move { x, .. }) => (scene.hover(x), None),

            (Idle | Hovering(_), PointerInput::Press { x, y, axis }) => match scene.hit(x) {
                Some(event) => {
                    let drag = Drag {
                        event: event.id,
                        axis,
                        anchor_y: y,
                        initial: event.value(axis.field().group()).unwrap_or(0.0),
                        geometry: *scene.geometry,
                    };
                    (DraggingEvent(drag), None)
                }
                None => (
                    PanningZooming(Pan {
                        last_x: x,
                        last_y: y,
                    }),
                    None,
                ),
            },
            (DraggingEvent(_) | PanningZooming(_), PointerInput::Press { .. }) => (*self, None),

            (DraggingEvent(_) | PanningZooming(_), PointerInput::Release) => (Idle, None),
            (Idle | Hovering(_), PointerInput::Release) => (*self, None),

            (_, PointerInput::Leave) => (Idle, None),

            // Dragging takes precedence over zooming
            (DraggingEvent(_), PointerInput::Wheel { .. }) => (*self, None),
            (_, PointerInput::Wheel { x, y, delta }) => {
                if delta == 0.0 {
                    return (*self, None);
                }
                let factor = if delta > 0.0 {
                    1.0 / scene.config.zoom.step
                } else {
                    scene.config.zoom.step
                };
                (*self, Some(Command::Zoom { factor, x, y }))
            }
        }
    }
}

fn drag_value(drag: &Drag, x: f64, y: f64, scene: &Scene<'_>) -> f64 {
    match drag.axis {
        DragAxis::Time => drag.geometry.domain_x(scene.transform, x).round().max(0.0),
        DragAxis::Amount => {
            let moved = drag.geometry.domain_y(scene.transform, y)
                - drag.geometry.domain_y(scene.transform, drag.anchor_y);
            drag.initial + moved
        }
        DragAxis::Rate => drag.initial + (drag.anchor_y - y) * scene.config.rate_sensitivity,
    }
}
