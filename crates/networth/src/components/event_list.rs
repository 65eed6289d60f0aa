use networth_core::model::{Event, RoleGroup};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
};

use super::Component;
use crate::state::AppState;
use crate::util::format::{format_compact_currency, format_percentage, format_step};

/// Events in time order above the per-envelope final values
pub struct EventList;

impl EventList {
    pub fn new() -> Self {
        Self
    }

    fn event_line(event: &Event, state: &AppState, active: bool) -> Line<'static> {
        let step = event.time().round().max(0.0) as u32;
        let amount = event
            .value(RoleGroup::Amount)
            .map(format_compact_currency)
            .unwrap_or_default();
        let rate = event
            .value(RoleGroup::Rate)
            .map(|r| format!(" @{}", format_percentage(r)))
            .unwrap_or_default();

        let style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(
                format!("{:>8} ", format_step(step, state.config.start_date)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("{} {amount}{rate}", event.kind), style),
            Span::styled(
                format!("  {}", event.description),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }

    fn render_events(frame: &mut Frame, area: Rect, state: &AppState) {
        let editor = &state.editor;
        let active = editor.state().active_event();
        let events = editor.sorted_events();
        let title = format!(" Events ({}) ", events.len());

        let items: Vec<ListItem> = if events.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No events in this document.",
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            events
                .into_iter()
                .map(|event| {
                    ListItem::new(Self::event_line(event, state, active == Some(event.id)))
                })
                .collect()
        };

        frame.render_widget(List::new(items).block(Block::bordered().title(title)), area);
    }

    fn render_envelopes(frame: &mut Frame, area: Rect, state: &AppState) {
        let lines: Vec<Line> = match state.breakdown() {
            Some(result) => result
                .envelopes
                .iter()
                .map(|envelope| {
                    let last = envelope.values.last().copied().unwrap_or(0.0);
                    Line::from(vec![
                        Span::raw(format!("{:<16}", envelope.name)),
                        Span::styled(
                            format_compact_currency(last),
                            Style::default().fg(Color::Cyan),
                        ),
                    ])
                })
                .collect(),
            None => Vec::new(),
        };

        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title(" Envelopes at horizon ")),
            area,
        );
    }
}

impl Default for EventList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EventList {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let envelope_rows = state.editor.problem().envelopes.len() as u16;
        let [events_area, envelopes_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(envelope_rows.saturating_add(2).min(area.height / 2)),
        ])
        .areas(area);

        Self::render_events(frame, events_area, state);
        Self::render_envelopes(frame, envelopes_area, state);
    }
}
