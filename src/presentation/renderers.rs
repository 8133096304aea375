// Result renderers - each writes one slice of a decoded result into its
// display slot, fully re-rendering from the given result on every call
use crate::domain::telemetry::{AdvertisementPeak, TelemetryResult};
use crate::domain::view_model::{
    battery_status, clamped_fill_percent, fill_severity, temperature_icon,
};
use crate::presentation::chart::ChartAdapter;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Row, Table, Wrap};

/// Applied once per decoded result: feeds the chart adapter unless the peak
/// sequence is empty, in which case the chart is left untouched.
pub fn apply_peaks(result: &TelemetryResult, chart: &mut ChartAdapter) {
    if !result.advertisement_peaks.is_empty() {
        chart.update(&result.advertisement_peaks);
    }
}

pub fn render_gauge(frame: &mut Frame, area: Rect, result: &TelemetryResult) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Tank Level "))
        .gauge_style(Style::default().fg(gauge_color(result)))
        .ratio(gauge_ratio(result))
        .label(gauge_label(result));
    frame.render_widget(gauge, area);
}

fn gauge_ratio(result: &TelemetryResult) -> f64 {
    if result.is_empty {
        0.0
    } else {
        // Gauge rejects ratios outside [0, 1]
        (clamped_fill_percent(result.percentage) / 100.0).max(0.0)
    }
}

fn gauge_label(result: &TelemetryResult) -> String {
    if result.is_empty {
        "Empty".to_string()
    } else {
        format!("{:.2} cm", result.level_cm)
    }
}

fn gauge_color(result: &TelemetryResult) -> Color {
    if result.is_empty {
        Color::Gray
    } else {
        fill_severity(result.percentage).color()
    }
}

pub fn render_metrics(frame: &mut Frame, area: Rect, result: &TelemetryResult) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_metric_card(frame, slots[0], " Battery ", battery_line(result));
    render_metric_card(frame, slots[1], " Temperature ", temperature_line(result));
    render_metric_card(frame, slots[2], " Hardware ", hardware_line(result));
    render_metric_card(frame, slots[3], " Fill ", fill_line(result));
}

fn render_metric_card(frame: &mut Frame, area: Rect, title: &'static str, line: Line<'static>) {
    let card = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(card, area);
}

fn battery_line(result: &TelemetryResult) -> Line<'static> {
    let status = battery_status(result.battery_voltage);
    Line::from(vec![
        Span::raw(format!("{} ", status.icon.battery_glyph())),
        Span::styled(
            format!("{:.2} V", result.battery_voltage),
            Style::default()
                .fg(status.severity.color())
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn temperature_line(result: &TelemetryResult) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(
            "{} ",
            temperature_icon(result.temperature_c).thermometer_glyph()
        )),
        Span::raw(format!("{:.1}°C", result.temperature_c)),
    ])
}

fn hardware_line(result: &TelemetryResult) -> Line<'static> {
    Line::from(result.hardware_family.clone())
}

fn fill_line(result: &TelemetryResult) -> Line<'static> {
    if result.is_empty {
        return Line::from("Empty");
    }
    Line::from(Span::styled(
        format!("{:.0}%", result.percentage),
        Style::default()
            .fg(fill_severity(result.percentage).color())
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn render_details(frame: &mut Frame, area: Rect, result: &TelemetryResult, tank_height: f64) {
    let rows: Vec<Row> = detail_rows(result, tank_height)
        .into_iter()
        .map(|(label, value)| Row::new(vec![label.to_string(), value]))
        .collect();

    let table = Table::new(rows, [Constraint::Length(22), Constraint::Min(10)])
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    frame.render_widget(table, area);
}

/// Labeled detail text for every result field, in fixed display formats.
fn detail_rows(result: &TelemetryResult, tank_height: f64) -> Vec<(&'static str, String)> {
    let level_inches = if result.is_empty {
        "Empty".to_string()
    } else {
        format!("{:.2}", result.level_inches)
    };
    let level_cm = if result.is_empty {
        "Empty".to_string()
    } else {
        format!("{:.2}", result.level_cm)
    };

    vec![
        ("Header", result.header.clone()),
        ("Manufacturer header", result.manufacturer_header.clone()),
        ("Hardware ID", result.hardware_id.clone()),
        ("Hardware version", result.hardware_version.clone()),
        ("Hardware family", result.hardware_family.clone()),
        ("Accelerometer X", format!("{}", result.accelerometer.x)),
        ("Accelerometer Y", format!("{}", result.accelerometer.y)),
        ("Battery raw", format!("{}", result.battery_raw)),
        ("Temperature raw", format!("{}", result.temperature_raw)),
        ("Temperature", format!("{:.1}°C", result.temperature_c)),
        ("Time of flight", format!("{:.8} seconds", result.tof)),
        ("Level (inches)", level_inches),
        ("Level (cm)", level_cm),
        ("Fill percentage", format!("{}%", result.percentage)),
        ("Tank height", format!("{:.3} m", tank_height)),
        ("Slow update", yes_no(result.slow_update).to_string()),
        ("Sync pressed", yes_no(result.sync_pressed).to_string()),
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn render_peaks(
    frame: &mut Frame,
    area: Rect,
    result: &TelemetryResult,
    chart: &ChartAdapter,
) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title(" Peaks ");
    if result.advertisement_peaks.is_empty() {
        let placeholder = Paragraph::new("No advertisement peak data available")
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(placeholder, slots[0]);
    } else {
        let lines: Vec<Line> = peak_lines(&result.advertisement_peaks)
            .into_iter()
            .map(Line::from)
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), slots[0]);
    }

    chart.render(frame, slots[1]);
}

fn peak_lines(peaks: &[AdvertisementPeak]) -> Vec<String> {
    peaks
        .iter()
        .map(|p| format!("i={:<4} a={}", p.i, p.a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::sample_result;
    use crate::presentation::chart::ChartAdapter;

    #[test]
    fn test_gauge_empty_overrides_level_fields() {
        let mut result = sample_result();
        result.is_empty = true;
        // numeric levels are still present but must not show
        assert_eq!(gauge_ratio(&result), 0.0);
        assert_eq!(gauge_label(&result), "Empty");
        assert_eq!(gauge_color(&result), Color::Gray);
    }

    #[test]
    fn test_gauge_clamps_visual_fill_only() {
        let mut result = sample_result();
        result.percentage = 150.0;
        assert_eq!(gauge_ratio(&result), 1.0);

        let rows = detail_rows(&result, 2.5);
        let (_, fill) = rows
            .iter()
            .find(|(label, _)| *label == "Fill percentage")
            .unwrap();
        assert_eq!(fill, "150%");
    }

    #[test]
    fn test_gauge_values_for_sample_result() {
        let result = sample_result();
        assert_eq!(gauge_ratio(&result), 0.6);
        assert_eq!(gauge_label(&result), "45.67 cm");
        assert_eq!(gauge_color(&result), Color::Green);
    }

    #[test]
    fn test_detail_formats() {
        let result = sample_result();
        let rows = detail_rows(&result, 2.5);
        let get = |label: &str| {
            rows.iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("Time of flight"), "0.00001234 seconds");
        assert_eq!(get("Level (cm)"), "45.67");
        assert_eq!(get("Tank height"), "2.500 m");
        assert_eq!(get("Temperature"), "22.4°C");
        assert_eq!(get("Sync pressed"), "Yes");
        assert_eq!(get("Slow update"), "No");
    }

    #[test]
    fn test_detail_levels_show_empty_for_empty_tank() {
        let mut result = sample_result();
        result.is_empty = true;
        let rows = detail_rows(&result, 0.254);
        let levels: Vec<&String> = rows
            .iter()
            .filter(|(label, _)| label.starts_with("Level"))
            .map(|(_, v)| v)
            .collect();
        assert_eq!(levels, vec!["Empty", "Empty"]);
    }

    #[test]
    fn test_apply_peaks_skips_empty_sequence() {
        let mut result = sample_result();
        result.advertisement_peaks.clear();
        let mut chart = ChartAdapter::new();

        apply_peaks(&result, &mut chart);
        assert!(chart.points().is_none());
    }

    #[test]
    fn test_apply_peaks_forwards_every_pair() {
        let result = sample_result();
        let mut chart = ChartAdapter::new();

        apply_peaks(&result, &mut chart);
        assert_eq!(chart.points().unwrap(), &[(0.0, 5.0), (1.0, 9.0)]);
    }

    #[test]
    fn test_battery_line_text() {
        let result = sample_result();
        let line = battery_line(&result);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[####] 3.10 V");
    }

    #[test]
    fn test_fill_line_shows_empty() {
        let mut result = sample_result();
        result.is_empty = true;
        let line = fill_line(&result);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Empty");
    }
}
