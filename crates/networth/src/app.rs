use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use networth_core::interaction::{DragAxis, InteractionState, PointerInput};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};

use crate::components::{Component, chart::Chart, event_list::EventList, status_bar::StatusBar};
use crate::state::AppState;

pub struct App {
    state: AppState,
    chart: Chart,
    event_list: EventList,
    status_bar: StatusBar,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            chart: Chart::new(),
            event_list: EventList::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs the main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        execute!(io::stdout(), EnableMouseCapture)?;

        let result = self.event_loop(terminal);

        if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
            tracing::error!(error = %e, "Failed to disable mouse capture");
        }
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(frame.area());
        let [chart, sidebar] =
            Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
                .areas(main);

        // The chart's viewport is its area inside the border
        self.state.set_chart_area(Block::bordered().inner(chart));
        self.state.refresh_breakdown();

        self.chart.render(frame, chart, &self.state);
        self.event_list.render(frame, sidebar, &self.state);
        self.status_bar.render(frame, status, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let state = &mut self.state;
        match key_event.code {
            KeyCode::Char('q') => state.exit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                state.exit = true
            }
            KeyCode::Char('r') => state.editor.reset_view(),
            KeyCode::Char('+') | KeyCode::Char('=') => state.editor.zoom(true),
            KeyCode::Char('-') => state.editor.zoom(false),
            KeyCode::Char('[') => state.change_horizon(false),
            KeyCode::Char(']') => state.change_horizon(true),
            KeyCode::Char('l') => state.reload(),
            KeyCode::Esc => state.clear_error(),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        let Some(input) = pointer_input(&self.state, mouse_event) else {
            return;
        };
        self.state.pointer_inside = self.state.contains(mouse_event.column, mouse_event.row);

        let outcome = self.state.editor.handle(input);
        if outcome.problem_changed {
            tracing::debug!(
                revision = self.state.editor.revision(),
                "Event edited by drag"
            );
        }
    }
}

/// Which field a press on a marker edits, chosen by held modifiers
fn drag_axis(modifiers: KeyModifiers) -> DragAxis {
    if modifiers.contains(KeyModifiers::CONTROL) {
        DragAxis::Rate
    } else if modifiers.contains(KeyModifiers::SHIFT) {
        DragAxis::Amount
    } else {
        DragAxis::Time
    }
}

/// Translate a terminal mouse event into chart input.
///
/// Presses and wheel notches only count inside the plot area. Motion outside
/// it still reaches an active drag or pan, and otherwise ends the hover.
fn pointer_input(state: &AppState, mouse_event: MouseEvent) -> Option<PointerInput> {
    let inside = state.contains(mouse_event.column, mouse_event.row);
    let (x, y) = state.to_device(mouse_event.column, mouse_event.row);
    let engaged = matches!(
        state.editor.state(),
        InteractionState::DraggingEvent(_) | InteractionState::PanningZooming(_)
    );

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => Some(PointerInput::Press {
            x,
            y,
            axis: drag_axis(mouse_event.modifiers),
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerInput::Release),
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            if inside || engaged {
                Some(PointerInput::Move { x, y })
            } else if state.pointer_inside {
                Some(PointerInput::Leave)
            } else {
                None
            }
        }
        MouseEventKind::ScrollUp if inside => Some(PointerInput::Wheel { x, y, delta: -1.0 }),
        MouseEventKind::ScrollDown if inside => Some(PointerInput::Wheel { x, y, delta: 1.0 }),
        _ => None,
    }
}
