// Chart adapter - owns at most one live advertisement-peak series
use crate::domain::telemetry::AdvertisementPeak;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap};

#[derive(Debug)]
struct PeakSeries {
    points: Vec<(f64, f64)>,
    x_max: f64,
    y_max: f64,
}

/// The one component with a managed resource lifetime: the previous series
/// is dropped before a replacement is built, so there is never more than one
/// live series.
#[derive(Debug, Default)]
pub struct ChartAdapter {
    series: Option<PeakSeries>,
}

impl ChartAdapter {
    pub fn new() -> Self {
        Self { series: None }
    }

    /// Replace the live series with one built from the given peaks.
    /// x is `i / 2` (time units), y is the amplitude; order is preserved.
    pub fn update(&mut self, peaks: &[AdvertisementPeak]) {
        self.series = None;

        let points: Vec<(f64, f64)> = peaks.iter().map(|p| (p.i / 2.0, p.a)).collect();
        let x_max = points
            .iter()
            .map(|&(x, _)| x)
            .fold(0.0_f64, f64::max)
            .max(1.0);
        let y_max = points
            .iter()
            .map(|&(_, y)| y)
            .fold(0.0_f64, f64::max)
            .max(1.0);

        self.series = Some(PeakSeries {
            points,
            x_max,
            y_max,
        });
    }

    /// Tear the live series down; the chart slot falls back to its
    /// placeholder until the next update.
    pub fn clear(&mut self) {
        self.series = None;
    }

    pub fn points(&self) -> Option<&[(f64, f64)]> {
        self.series.as_ref().map(|s| s.points.as_slice())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(series) = &self.series else {
            let placeholder = Paragraph::new("no data")
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Advertisement Peaks "),
                );
            frame.render_widget(placeholder, area);
            return;
        };

        let dataset = Dataset::default()
            .name("peaks")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&series.points);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Advertisement Peaks "),
            )
            .x_axis(
                Axis::default()
                    .title("Time")
                    .bounds([0.0, series.x_max])
                    .labels(vec![
                        Line::from("0"),
                        Line::from(format!("{:.0}", series.x_max)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("Amplitude")
                    .bounds([0.0, series.y_max])
                    .labels(vec![
                        Line::from("0"),
                        Line::from(format!("{:.0}", series.y_max)),
                    ]),
            );

        frame.render_widget(chart, area);
    }
}
