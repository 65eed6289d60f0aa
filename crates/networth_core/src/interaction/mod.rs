//! Pointer-driven probing and editing of the chart

mod probe;
mod state;
mod viewport;

pub use probe::{hit_event, nearest_datum};
pub use state::{
    Command, Drag, DragAxis, Hover, InteractionConfig, InteractionState, Pan, PointerInput, Scene,
};
pub use viewport::{
    ChartGeometry, DomainRect, Insets, LinearScale, Viewport, ZoomLimits, ZoomTransform,
};
