use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{
        app::App,
        components::{message_box::MessageBoxWidget, stats::StatsPanel},
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("Radiowęzeł — zgłoś piosenkę")
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(15),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        f.render_widget(StatsPanel::new(self.app.state.ui.stats), chunks[0]);
        self.app.form.render(f, chunks[1], &self.app.state);
        f.render_widget(MessageBoxWidget::new(&self.app.state.message), chunks[2]);

        let footer = Paragraph::new("Tab: następne pole  Enter: zatwierdź  Ctrl+C: wyjście")
            .style(Style::default().fg(colors::NEUTRAL))
            .alignment(Alignment::Center);
        f.render_widget(footer, chunks[3]);
    }
}
