//! Main TUI application state and logic

use crate::dataset::Timeline;
use crate::playback::{frame_count, FrameView, Transport, FRAME_INTERVAL};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Chart,
    Events,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Chart => FocusedPane::Events,
            FocusedPane::Events => FocusedPane::Chart,
        }
    }
}

/// The main application state
pub struct App {
    /// The loaded telemetry run
    pub timeline: Timeline,

    /// Frame position state machine
    pub transport: Transport,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Event log scroll offset (`usize::MAX` sticks to the bottom)
    pub events_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time the transport ticked in play mode
    pub last_frame_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over the given timeline. Playback starts rolling
    /// immediately, matching the original animation.
    pub fn new(timeline: Timeline) -> Self {
        App {
            timeline,
            transport: Transport::new(frame_count()),
            focused_pane: FocusedPane::Chart,
            events_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Playing..."),
            is_playing: true,
            last_frame_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode; the transport wraps, so playback loops
            // until the user quits.
            if self.is_playing && self.last_frame_time.elapsed() >= FRAME_INTERVAL {
                self.transport.tick();
                self.events_scroll = usize::MAX;
                self.last_frame_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(10))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Chart on the left, readout and events on the right, status bar at
        // the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[1]);

        let view = FrameView::at(&self.timeline, self.transport.position());
        let events = super::panes::collect_events(&self.timeline, view.index);

        super::panes::render_chart_pane(
            frame,
            columns[0],
            &view,
            self.focused_pane == FocusedPane::Chart,
        );

        super::panes::render_readout_pane(frame, right_rows[0], &view);

        super::panes::render_events_pane(
            frame,
            right_rows[1],
            &events,
            self.focused_pane == FocusedPane::Events,
            &mut self.events_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.transport.position(),
            self.transport.frame_count(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N frames directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap() as usize;
                let stepped = self.transport.step_forward(n);
                self.status_message = format!("Stepped forward {} frame(s)", stepped);
                self.events_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let stepped = self.transport.step_back(1);
                self.status_message = if stepped > 0 {
                    "Stepped back".to_string()
                } else {
                    "At first frame".to_string()
                };
                self.events_scroll = usize::MAX;
            }
            KeyCode::Right => {
                self.is_playing = false;
                let stepped = self.transport.step_forward(1);
                self.status_message = if stepped > 0 {
                    "Stepped forward".to_string()
                } else {
                    "At last frame".to_string()
                };
                self.events_scroll = usize::MAX;
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Events && self.events_scroll > 0 {
                    self.events_scroll = self.events_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Events {
                    self.events_scroll = self.events_scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_frame_time = Instant::now()
                            .checked_sub(FRAME_INTERVAL)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the last frame
                self.is_playing = false;
                self.transport.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.events_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                // Jump back to the first frame
                self.is_playing = false;
                self.transport.jump_to_start();
                self.status_message = "Jumped to start".to_string();
                self.events_scroll = usize::MAX;
            }
            _ => {}
        }
    }
}
