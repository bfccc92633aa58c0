//! Pi TUI application state and logic.
//!
//! The app owns one [`Simulation`]. Each run clears the canvas, then the
//! per-sample observer plots every point as it is drawn.

use crossterm::event::KeyCode;

use crate::config::PiConfig;
use crate::error::PiResult;
use crate::estimator::{BatchResult, BatchSize, History, Region, Sample, Simulation};

/// Longest batch-size text the input line accepts.
const MAX_INPUT_LEN: usize = 9;

/// Application state for the pi TUI.
#[derive(Debug)]
pub struct PiApp {
    simulation: Simulation,
    /// Batch size text being edited.
    pub input: String,
    /// Message from the last rejected run, if any.
    pub error: Option<String>,
    /// Plotted points inside or on the circle, in canvas coordinates.
    pub inside_points: Vec<(f64, f64)>,
    /// Plotted points outside the circle, in canvas coordinates.
    pub outside_points: Vec<(f64, f64)>,
    /// First row shown in the points table.
    pub table_offset: usize,
    /// Side length of the drawing surface.
    pub canvas_size: i64,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl PiApp {
    /// Create the app from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured region or batch size is invalid.
    pub fn new(config: &PiConfig) -> PiResult<Self> {
        let size = config.batch_size()?;
        Ok(Self {
            simulation: Simulation::from_config(config)?,
            input: size.to_string(),
            error: None,
            inside_points: Vec::new(),
            outside_points: Vec::new(),
            table_offset: 0,
            canvas_size: config.display.canvas_size,
            should_quit: false,
        })
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.run(),
            KeyCode::Char('c') => self.clear_canvas(),
            KeyCode::Up => self.table_offset = self.table_offset.saturating_sub(1),
            KeyCode::Down => {
                let last = self.samples().len().saturating_sub(1);
                self.table_offset = (self.table_offset + 1).min(last);
            }
            _ => {}
        }
    }

    /// Parse the input line and run one batch.
    ///
    /// Rejected input leaves the canvas, table and history as they were
    /// and sets [`PiApp::error`].
    pub fn run(&mut self) {
        let size = match BatchSize::parse(&self.input) {
            Ok(size) => size,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        self.clear_canvas();
        let canvas = self.canvas_size as f64;
        let mut inside = Vec::new();
        let mut outside = Vec::new();
        let outcome = self.simulation.run_observed(size.get(), &mut |s: &Sample| {
            // Screen y grows downward; canvas y grows upward.
            let point = (s.x as f64, canvas - s.y as f64);
            if s.inside {
                inside.push(point);
            } else {
                outside.push(point);
            }
        });

        match outcome {
            Ok(_) => {
                self.inside_points = inside;
                self.outside_points = outside;
                self.table_offset = 0;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Remove every plotted point.
    ///
    /// The points table and history are kept.
    pub fn clear_canvas(&mut self) {
        self.inside_points.clear();
        self.outside_points.clear();
    }

    /// Result of the most recent run.
    #[must_use]
    pub fn last_result(&self) -> Option<&BatchResult> {
        self.simulation.last_result()
    }

    /// Samples of the most recent run, in draw order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        self.last_result().map_or(&[], |r| r.samples.as_slice())
    }

    /// Up to `rows` samples starting at the scroll offset, with their
    /// indices.
    pub fn visible_samples(&self, rows: usize) -> impl Iterator<Item = (usize, &Sample)> + '_ {
        self.samples()
            .iter()
            .enumerate()
            .skip(self.table_offset)
            .take(rows)
    }

    /// Estimates recorded so far.
    #[must_use]
    pub fn history(&self) -> &History {
        self.simulation.history()
    }

    /// Sampling region.
    #[must_use]
    pub fn region(&self) -> &Region {
        self.simulation.region()
    }
}
