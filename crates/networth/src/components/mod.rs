pub mod chart;
pub mod event_list;
pub mod status_bar;

use ratatui::{Frame, layout::Rect};

use crate::state::AppState;

/// A panel drawn from the shared state. Input is routed by the app loop.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
