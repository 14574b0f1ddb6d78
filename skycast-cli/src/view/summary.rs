//! Current-conditions card.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use skycast_core::CurrentConditions;

/// Display model for the summary card: all rounding and unit conversion
/// happens here, once, and nothing downstream re-reads the raw floats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub location_name: String,
    /// Rounded to the nearest whole degree Celsius; ties round away from
    /// zero (-2.5 becomes -3).
    pub temperature_c: i32,
    pub description: String,
    pub humidity_pct: u8,
    /// Converted from m/s and rounded to the nearest whole km/h.
    pub wind_kmh: i32,
    pub icon: &'static str,
}

impl SummaryCard {
    pub fn new(current: &CurrentConditions) -> Self {
        Self {
            location_name: current.location_name.clone(),
            temperature_c: current.temperature_c.round() as i32,
            description: current.condition_description.clone(),
            humidity_pct: current.humidity_pct,
            wind_kmh: (current.wind_speed_mps * 3.6).round() as i32,
            icon: weather_icon(&current.condition_main),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Current Conditions");

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.location_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("{}°C", self.temperature_c)),
            Line::from(self.description.clone()),
            Line::from(""),
            Line::from(format!(
                "Humidity: {}%    Wind: {} km/h",
                self.humidity_pct, self.wind_kmh
            )),
            Line::from(""),
            Line::from(self.icon),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(paragraph, area);
    }
}

/// Maps an OpenWeather condition category to a glyph.
///
/// The table is a closed enumeration matched exactly (case included); any
/// other value falls back to the default glyph. Total function, never fails.
pub fn weather_icon(condition_main: &str) -> &'static str {
    match condition_main {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Fog" | "Haze" => "🌫️",
        _ => "🌤️",
    }
}
