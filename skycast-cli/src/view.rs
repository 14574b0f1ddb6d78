//! Dashboard views.
//!
//! Views are stateless: each render is a pure function of the session state
//! passed in, with no memory between frames.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use skycast_core::SessionState;

pub mod summary;
pub mod trend;

use summary::SummaryCard;
use trend::TrendView;

/// Renders the whole dashboard for the given session state.
pub fn render_dashboard(frame: &mut Frame, state: &SessionState) {
    match state {
        SessionState::Loading => render_loading(frame, frame.area()),
        SessionState::Error(message) => render_error(frame, frame.area(), message),
        SessionState::Ready { current, forecast } => {
            let [title_area, body] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

            let title = Paragraph::new("Weather Dashboard")
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(title, title_area);

            let [left, right] =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .areas(body);

            SummaryCard::new(current).render(frame, left);
            TrendView::new(forecast).render(frame, right);
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Loading weather data...")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical_center(area, 1));
}

/// Full-area error screen; replaces the dashboard entirely. Rerunning the
/// program is the only recovery path.
fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("Error: {message}")),
    ])
    .style(Style::default().fg(Color::Red))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(paragraph, area);
}

fn vertical_center(area: Rect, height: u16) -> Rect {
    let [_, centered, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    centered
}


#[cfg(test)]
mod tests {
    use super::test_support::buffer_text;
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use skycast_core::{CurrentConditions, ForecastEntry, ForecastSeries};

    fn draw(state: &SessionState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).expect("terminal must build");
        terminal
            .draw(|frame| render_dashboard(frame, state))
            .expect("draw must succeed");
        buffer_text(terminal.backend())
    }

    fn sample_conditions() -> CurrentConditions {
        CurrentConditions {
            location_name: "Test City".to_string(),
            temperature_c: 21.4,
            humidity_pct: 55,
            wind_speed_mps: 3.0,
            condition_main: "Clouds".to_string(),
            condition_description: "overcast clouds".to_string(),
        }
    }

    fn sample_forecast() -> ForecastSeries {
        // 40 entries at 3-hour steps, temperatures 10, 11, 12, ...
        let start = 1_700_000_000_i64;
        let entries = (0..40)
            .map(|i| ForecastEntry {
                dt: start + i as i64 * 3 * 3600,
                temperature_c: 10.0 + i as f64,
                dt_txt: String::new(),
            })
            .collect();
        ForecastSeries { entries }
    }

    #[test]
    fn loading_screen_shows_progress_message() {
        let text = draw(&SessionState::Loading);
        assert!(text.contains("Loading weather data..."));
    }

    #[test]
    fn error_screen_replaces_the_dashboard() {
        let text = draw(&SessionState::Error(
            "Failed to fetch forecast: HTTP status 500 Internal Server Error".to_string(),
        ));
        assert!(text.contains("Error: Failed to fetch forecast"));
        assert!(!text.contains("Weather Dashboard"));
    }

    #[test]
    fn ready_screen_renders_card_and_trend_side_by_side() {
        let state = SessionState::Ready {
            current: sample_conditions(),
            forecast: sample_forecast(),
        };

        let text = draw(&state);

        assert!(text.contains("Weather Dashboard"));
        // Summary card values: 21.4 -> 21°C, 3.0 m/s * 3.6 -> 11 km/h.
        assert!(text.contains("Test City"));
        assert!(text.contains("21°C"));
        assert!(text.contains("overcast clouds"));
        assert!(text.contains("55%"));
        assert!(text.contains("11 km/h"));
        assert!(text.contains("☁"));
        // Trend view with its companion row.
        assert!(text.contains("5-Day Temperature Forecast"));
        assert!(text.contains("10°"));
        assert!(text.contains("42°"));
    }
}
