use networth_core::interaction::{DragAxis, InteractionState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::state::AppState;
use crate::util::format::{format_compact_currency, format_step};

const HELP: &str = "drag marker: time | shift: amount | ctrl: rate | wheel/+/-: zoom | \
                    r: reset | [/]: horizon | l: reload | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn mode(state: &InteractionState) -> (&'static str, Color) {
        match state {
            InteractionState::Idle => ("IDLE", Color::DarkGray),
            InteractionState::Hovering(_) => ("HOVER", Color::Cyan),
            InteractionState::DraggingEvent(drag) => match drag.axis {
                DragAxis::Time => ("DRAG TIME", Color::Yellow),
                DragAxis::Amount => ("DRAG AMOUNT", Color::Yellow),
                DragAxis::Rate => ("DRAG RATE", Color::Yellow),
            },
            InteractionState::PanningZooming(_) => ("PAN", Color::Green),
        }
    }

    /// `1y 2m: $12K`, naming the event under the pointer if any
    fn readout(state: &AppState) -> Option<String> {
        let editor = &state.editor;
        let hover = editor.state().hover()?;
        let mut text = format!(
            "{}: {}",
            format_step(hover.datum.x, state.config.start_date),
            format_compact_currency(hover.datum.y)
        );
        if let Some(event) = hover.event.and_then(|id| editor.problem().event(id)) {
            text.push_str(&format!(" | {} {}", event.kind, event.description));
        }
        Some(text)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let (mode, color) = Self::mode(state.editor.state());
        let mut spans = vec![
            Span::styled(
                format!(" {mode} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        if let Some(readout) = Self::readout(state) {
            spans.push(Span::raw(readout));
            spans.push(Span::raw("  "));
        }

        match &state.error_message {
            Some(error) => {
                spans.push(Span::styled("Error: ", Style::default().fg(Color::Red)));
                spans.push(Span::raw(error.clone()));
            }
            None => spans.push(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
