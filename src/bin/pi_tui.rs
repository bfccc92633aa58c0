//! montepi TUI - Monte Carlo estimation of pi in the terminal
//!
//! Plots every sample on a canvas as it is drawn. App logic lives in
//! `montepi::tui::pi_app`.
//!
//! Usage: `pi-tui [config.yaml]`

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use montepi::config::PiConfig;
    use montepi::tui::PiApp;
    use std::io;

    let config = match std::env::args().nth(1) {
        Some(path) => PiConfig::load(path).map_err(|e| io::Error::other(e.to_string()))?,
        None => PiConfig::default(),
    };
    let app = PiApp::new(&config).map_err(|e| io::Error::other(e.to_string()))?;
    tui::run(app)
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Circle, Points, Rectangle},
            Block, Borders, Paragraph, Row, Table,
        },
        Frame, Terminal,
    };
    use montepi::tui::PiApp;
    use std::io;
    use std::time::Duration;

    const ORANGE: Color = Color::Rgb(255, 165, 0);

    /// Run the TUI application.
    pub fn run(mut app: PiApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(50);

        loop {
            terminal.draw(|f| ui(f, &app))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, app: &PiApp) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(3)])
            .split(f.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(7),
                Constraint::Min(5),
            ])
            .split(columns[1]);

        render_canvas(f, columns[0], app);
        render_points_table(f, side[0], app);
        render_stats(f, side[1], app);
        render_history(f, side[2], app);
        render_input(f, rows[1], app);
    }

    fn render_canvas(f: &mut Frame, area: Rect, app: &PiApp) {
        let size = app.canvas_size as f64;
        let region = app.region();
        let left = region.left() as f64;
        let width = region.width() as f64;
        // Canvas y grows upward, so the region's top edge maps to `size - top`.
        let bottom = size - region.bottom() as f64;

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Samples"))
            .x_bounds([0.0, size])
            .y_bounds([0.0, size])
            .paint(|ctx| {
                ctx.draw(&Rectangle {
                    x: left,
                    y: bottom,
                    width,
                    height: width,
                    color: Color::DarkGray,
                });
                ctx.draw(&Circle {
                    x: left + width / 2.0,
                    y: bottom + width / 2.0,
                    radius: width / 2.0,
                    color: Color::Gray,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &app.outside_points,
                    color: Color::Blue,
                });
                ctx.draw(&Points {
                    coords: &app.inside_points,
                    color: ORANGE,
                });
            });

        f.render_widget(canvas, area);
    }

    fn render_points_table(f: &mut Frame, area: Rect, app: &PiApp) {
        let visible = usize::from(area.height.saturating_sub(3));
        let rows: Vec<Row> = app
            .visible_samples(visible)
            .map(|(i, s)| {
                let style = Style::default().fg(if s.inside { ORANGE } else { Color::Blue });
                Row::new(vec![
                    i.to_string(),
                    s.x.to_string(),
                    s.y.to_string(),
                    s.inside.to_string(),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(7),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Min(8),
            ],
        )
        .header(
            Row::new(vec!["#", "X", "Y", "In Inner Circle"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Points [Up/Down] Scroll"),
        );
        f.render_widget(table, area);
    }

    fn render_stats(f: &mut Frame, area: Rect, app: &PiApp) {
        let lines = app.last_result().map_or_else(
            || vec![Line::from("Press [Enter] to run a batch")],
            |r| {
                vec![
                    stat_line("Total # Points:", r.total().to_string(), Color::White),
                    stat_line("# Points in circle:", r.inside_count.to_string(), ORANGE),
                    stat_line(
                        "# Points out of circle:",
                        r.outside_count.to_string(),
                        Color::Blue,
                    ),
                    stat_line("Pi Estimate:", r.estimate.to_string(), Color::Cyan),
                    stat_line(
                        "Absolute Error:",
                        format!("{:.6}", r.absolute_error()),
                        Color::Gray,
                    ),
                ]
            },
        );

        let stats = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Stats"));
        f.render_widget(stats, area);
    }

    fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<24}"), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(color)),
        ])
    }

    fn render_history(f: &mut Frame, area: Rect, app: &PiApp) {
        let history = app.history();
        let visible = usize::from(area.height.saturating_sub(3));
        // Newest runs stay in view.
        let skip = history.len().saturating_sub(visible);
        let rows: Vec<Row> = history
            .iter()
            .skip(skip)
            .map(|e| {
                Row::new(vec![
                    e.index.to_string(),
                    e.batch_size.to_string(),
                    e.estimate.to_string(),
                ])
            })
            .collect();

        let title = history.mean().map_or_else(
            || "Pi History".to_string(),
            |mean| format!("Pi History (mean {mean:.6})"),
        );
        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Min(8),
            ],
        )
        .header(
            Row::new(vec!["Run", "Points", "Estimate"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(table, area);
    }

    fn render_input(f: &mut Frame, area: Rect, app: &PiApp) {
        let mut spans = vec![
            Span::styled("Points: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}_", app.input),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(message) = &app.error {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(message.clone(), Style::default().fg(Color::Red)));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("[0-9] Edit  [Enter] Run  [C] Clear  [Q] Quit"),
        );
        f.render_widget(input, area);
    }

}
