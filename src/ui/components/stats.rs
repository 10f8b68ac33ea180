use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{http::model::Stats, util::colors};

/// Today's approval counters. Shows dashes until the first successful
/// stats fetch.
pub struct StatsPanel {
    stats: Option<Stats>,
}

impl StatsPanel {
    pub fn new(stats: Option<Stats>) -> Self {
        Self { stats }
    }

    fn counter(&self, pick: fn(&Stats) -> u32) -> String {
        match &self.stats {
            Some(stats) => pick(stats).to_string(),
            None => "–".to_string(),
        }
    }
}

impl Widget for StatsPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let cells: [(&str, String, Color); 3] = [
            (
                "✅ Zaakceptowane dziś",
                self.counter(|s| s.today_approved),
                colors::SUCCESS,
            ),
            (
                "❌ Odrzucone dziś",
                self.counter(|s| s.today_rejected),
                colors::ERROR,
            ),
            (
                "📊 Łącznie dziś",
                self.counter(|s| s.today_total),
                colors::PRIMARY,
            ),
        ];

        for ((title, value, color), chunk) in cells.into_iter().zip(chunks.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(colors::NEUTRAL));
            Paragraph::new(value)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block)
                .render(*chunk, buf);
        }
    }
}
