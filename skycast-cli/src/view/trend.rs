//! Forecast trend chart with its companion per-day row.

use std::fmt;

use chrono::{Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use skycast_core::ForecastSeries;

/// The upstream forecast arrives at a fixed 3-hour cadence, so every 8th
/// entry lands at the same time of day one day later. If that cadence ever
/// changes upstream, this stride stops meaning "daily".
pub const DAILY_STRIDE: usize = 8;

/// At most five daily points, matching the 5-day forecast window.
pub const MAX_DAYS: usize = 5;

/// One downsampled forecast reading, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoint {
    /// Weekday, month, and day, e.g. "Tue Nov 14".
    pub label: String,
    /// Abbreviated weekday for the companion row, e.g. "Tue".
    pub weekday: String,
    /// Rounded to the nearest whole degree Celsius; ties round away from
    /// zero (-2.5 becomes -3).
    pub temperature_c: i32,
}

/// Selects one point per day from the series, in local time.
///
/// Short series yield fewer points; an empty series yields none. Never fails.
pub fn daily_points(series: &ForecastSeries) -> Vec<DailyPoint> {
    daily_points_in(series, &Local)
}

/// Timezone-injectable variant of [`daily_points`], so tests can pin UTC.
pub fn daily_points_in<Tz>(series: &ForecastSeries, tz: &Tz) -> Vec<DailyPoint>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    series
        .entries
        .iter()
        .step_by(DAILY_STRIDE)
        .take(MAX_DAYS)
        .map(|entry| {
            let temperature_c = entry.temperature_c.round() as i32;
            match entry.timestamp() {
                Some(utc) => {
                    let local = utc.with_timezone(tz);
                    DailyPoint {
                        label: local.format("%a %b %-d").to_string(),
                        weekday: local.format("%a").to_string(),
                        temperature_c,
                    }
                }
                // Out-of-range timestamp: fall back to the upstream text.
                None => DailyPoint {
                    label: entry.dt_txt.clone(),
                    weekday: entry.dt_txt.clone(),
                    temperature_c,
                },
            }
        })
        .collect()
}

/// Line chart of the daily temperatures plus a text row repeating each
/// day's value. Both are driven by the same point list, so they can never
/// fall out of sync.
#[derive(Debug, Clone)]
pub struct TrendView {
    points: Vec<DailyPoint>,
}

impl TrendView {
    pub fn new(series: &ForecastSeries) -> Self {
        Self {
            points: daily_points(series),
        }
    }

    #[cfg(test)]
    fn from_points(points: Vec<DailyPoint>) -> Self {
        Self { points }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.points.is_empty() {
            let paragraph = Paragraph::new("No forecast data available")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(paragraph, area);
            return;
        }

        let [chart_area, row_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);

        self.render_chart(frame, chart_area);
        self.render_day_row(frame, row_area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let data: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, f64::from(p.temperature_c)))
            .collect();

        let (y_min, y_max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
                let t = f64::from(p.temperature_c);
                (min.min(t), max.max(t))
            });

        // Auto-fit the range with a little headroom; no zero baseline.
        let y_bounds = [y_min - 1.0, y_max + 1.0];
        let x_max = (self.points.len().saturating_sub(1)).max(1) as f64;

        let x_labels: Vec<Line> = self
            .points
            .iter()
            .map(|p| Line::from(p.label.clone()))
            .collect();

        let y_labels: Vec<Line> = [y_bounds[0], (y_bounds[0] + y_bounds[1]) / 2.0, y_bounds[1]]
            .iter()
            .map(|t| Line::from(format!("{t:.0}°C")))
            .collect();

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("5-Day Temperature Forecast"),
            )
            .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
            .y_axis(Axis::default().bounds(y_bounds).labels(y_labels));

        frame.render_widget(chart, area);
    }

    fn render_day_row(&self, frame: &mut Frame, area: Rect) {
        let constraints = vec![Constraint::Ratio(1, self.points.len() as u32); self.points.len()];
        let columns = Layout::horizontal(constraints).split(area);

        for (point, column) in self.points.iter().zip(columns.iter()) {
            let cell = Paragraph::new(vec![
                Line::from(format!("{}°", point.temperature_c)),
                Line::from(point.weekday.clone()),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(cell, *column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::buffer_text;
    use chrono::Utc;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use skycast_core::ForecastEntry;

    const THREE_HOURS: i64 = 3 * 3600;

    /// 2023-11-14 22:13:20 UTC, a Tuesday.
    const START: i64 = 1_700_000_000;

    fn series_of(len: usize) -> ForecastSeries {
        let entries = (0..len)
            .map(|i| ForecastEntry {
                dt: START + i as i64 * THREE_HOURS,
                temperature_c: 10.0 + i as f64,
                dt_txt: String::new(),
            })
            .collect();
        ForecastSeries { entries }
    }

    #[test]
    fn full_series_yields_five_points_from_every_eighth_entry() {
        let points = daily_points_in(&series_of(40), &Utc);

        assert_eq!(points.len(), 5);
        // Indices 0, 8, 16, 24, 32 with temps 10 + index.
        let temps: Vec<i32> = points.iter().map(|p| p.temperature_c).collect();
        assert_eq!(temps, vec![10, 18, 26, 34, 42]);
    }

    #[test]
    fn oversized_series_is_capped_at_five_points() {
        let points = daily_points_in(&series_of(56), &Utc);
        assert_eq!(points.len(), 5);
    }

    #[test]
    fn short_series_yields_fewer_points_without_error() {
        assert_eq!(daily_points_in(&series_of(20), &Utc).len(), 3);
        assert_eq!(daily_points_in(&series_of(9), &Utc).len(), 2);
        assert_eq!(daily_points_in(&series_of(3), &Utc).len(), 1);
        assert_eq!(daily_points_in(&series_of(0), &Utc).len(), 0);
    }

    #[test]
    fn labels_derive_weekday_month_and_day_from_the_timestamp() {
        let points = daily_points_in(&series_of(40), &Utc);

        assert_eq!(points[0].label, "Tue Nov 14");
        assert_eq!(points[0].weekday, "Tue");
        // Each point is exactly one day after the previous.
        assert_eq!(points[1].label, "Wed Nov 15");
        assert_eq!(points[4].label, "Sat Nov 18");
    }

    #[test]
    fn rounding_applies_per_point_with_ties_away_from_zero() {
        let mut series = series_of(9);
        series.entries[0].temperature_c = 10.6;
        series.entries[8].temperature_c = -2.5;

        let points = daily_points_in(&series, &Utc);
        assert_eq!(points[0].temperature_c, 11);
        assert_eq!(points[1].temperature_c, -3);
    }

    fn draw(view: &TrendView) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).expect("terminal must build");
        terminal
            .draw(|frame| view.render(frame, frame.area()))
            .expect("draw must succeed");
        buffer_text(terminal.backend())
    }

    #[test]
    fn companion_row_repeats_the_chart_points() {
        let view = TrendView::from_points(daily_points_in(&series_of(40), &Utc));
        let text = draw(&view);

        assert!(text.contains("5-Day Temperature Forecast"));
        for (temp, day) in [(10, "Tue"), (18, "Wed"), (26, "Thu"), (34, "Fri"), (42, "Sat")] {
            assert!(text.contains(&format!("{temp}°")), "missing {temp}°");
            assert!(text.contains(day), "missing {day}");
        }
    }

    #[test]
    fn empty_series_renders_a_placeholder_instead_of_failing() {
        let view = TrendView::from_points(Vec::new());
        let text = draw(&view);
        assert!(text.contains("No forecast data available"));
    }
}
