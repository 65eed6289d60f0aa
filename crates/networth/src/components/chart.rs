use networth_core::interaction::{DomainRect, InteractionState, nearest_datum};
use networth_core::model::RoleGroup;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block,
        canvas::{Canvas, Context, Line},
    },
};

use super::Component;
use crate::state::AppState;
use crate::util::format::format_compact_currency;

/// Height of an event marker as a share of the visible money range
const MARKER_HEIGHT: f64 = 0.06;

const SERIES_COLOR: Color = Color::Cyan;
const AXIS_COLOR: Color = Color::DarkGray;
const MARKER_COLOR: Color = Color::Magenta;
const ACTIVE_COLOR: Color = Color::Yellow;

/// Net worth over time with event markers and the hover crosshair
pub struct Chart;

impl Chart {
    pub fn new() -> Self {
        Self
    }

    fn title(state: &AppState) -> String {
        let data = state.editor.data();
        match data.last() {
            Some(last) => format!(
                " Net worth: {} after {} months ",
                format_compact_currency(last.y),
                data.len()
            ),
            None => " Net worth ".to_string(),
        }
    }

    fn paint(ctx: &mut Context<'_>, state: &AppState, visible: &DomainRect) {
        let editor = &state.editor;
        let data = editor.data();
        let (x0, x1) = visible.x;
        let (y0, y1) = visible.y;

        if y0 <= 0.0 && 0.0 <= y1 {
            ctx.draw(&Line::new(x0, 0.0, x1, 0.0, AXIS_COLOR));
        }

        for pair in data.windows(2) {
            ctx.draw(&Line::new(
                f64::from(pair[0].x),
                pair[0].y,
                f64::from(pair[1].x),
                pair[1].y,
                SERIES_COLOR,
            ));
        }
        ctx.layer();

        let active = editor.state().active_event();
        let height = (y1 - y0) * MARKER_HEIGHT;
        for event in editor.sorted_events() {
            let t = event.time();
            let Some(datum) = nearest_datum(data, t) else {
                continue;
            };
            let color = if active == Some(event.id) {
                ACTIVE_COLOR
            } else {
                MARKER_COLOR
            };
            ctx.draw(&Line::new(t, datum.y, t, datum.y + height, color));
            let glyph = match event.value(RoleGroup::Amount) {
                Some(amount) if amount < 0.0 => "▼",
                _ => "▲",
            };
            ctx.print(t, datum.y + height, Span::styled(glyph, Style::default().fg(color)));
        }

        if let InteractionState::Hovering(hover) = editor.state() {
            let x = f64::from(hover.datum.x);
            ctx.draw(&Line::new(x, y0, x, y1, AXIS_COLOR));
            ctx.print(
                x,
                hover.datum.y,
                Span::styled("●", Style::default().fg(ACTIVE_COLOR)),
            );
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Chart {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let editor = &state.editor;
        let visible = editor.geometry().visible_domain(editor.transform());

        let canvas = Canvas::default()
            .block(Block::bordered().title(Self::title(state)))
            .marker(Marker::Braille)
            .x_bounds([visible.x.0, visible.x.1])
            .y_bounds([visible.y.0, visible.y.1])
            .paint(|ctx| Self::paint(ctx, state, &visible));

        frame.render_widget(canvas, area);
    }
}
