// Frame layout and the terminal event loop
use crate::application::submission::SubmissionOutcome;
use crate::presentation::app::{App, DisplayedResult, Field, Phase};
use crate::presentation::renderers;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::Duration;
use tokio::sync::mpsc;

pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut outcomes: mpsc::UnboundedReceiver<SubmissionOutcome>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    loop {
        while let Ok(outcome) = outcomes.try_recv() {
            app.handle_outcome(outcome);
        }

        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

pub fn draw(frame: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // hex payload field
            Constraint::Length(3), // tank height field
            Constraint::Length(1), // error banner
            Constraint::Min(0),    // result panel
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

    draw_input(
        frame,
        outer[0],
        " Hex Payload ",
        &app.hex_input,
        app.focus == Field::Hex,
    );
    draw_input(
        frame,
        outer[1],
        " Tank Height (m) ",
        &app.height_input,
        app.focus == Field::Height,
    );
    draw_banner(frame, outer[2], app.error());
    if let Some(displayed) = app.result() {
        draw_result(frame, outer[3], displayed, app);
    }
    draw_status(frame, outer[4], app.phase());
}

fn draw_input(frame: &mut Frame, area: Rect, title: &'static str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let field = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, error: Option<&str>) {
    let Some(message) = error else { return };
    let banner = Paragraph::new(Line::from(Span::styled(
        format!(" {message} "),
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(banner, area);
}

fn draw_result(frame: &mut Frame, area: Rect, displayed: &DisplayedResult, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
        .split(area);

    renderers::render_gauge(frame, columns[0], &displayed.telemetry);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(10),
        ])
        .split(columns[1]);

    renderers::render_metrics(frame, right[0], &displayed.telemetry);
    renderers::render_details(frame, right[1], &displayed.telemetry, displayed.tank_height);
    renderers::render_peaks(frame, right[2], &displayed.telemetry, app.chart());
}

fn draw_status(frame: &mut Frame, area: Rect, phase: Phase) {
    let label = match phase {
        Phase::Idle => "Idle",
        Phase::Submitting => "Decoding...",
        Phase::Displaying => "Result",
        Phase::ErrorShown => "Error",
    };
    let help = format!(
        " {label}  |  Tab switch field  Enter submit  F1-F4 examples  Esc close/quit  Ctrl+C quit"
    );
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::Gray)),
        area,
    );
}
