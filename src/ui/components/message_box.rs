use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    ui::message::{MessageBox, MessageKind},
    util::colors,
};

pub struct MessageBoxWidget<'a> {
    message: &'a MessageBox,
}

impl<'a> MessageBoxWidget<'a> {
    pub fn new(message: &'a MessageBox) -> Self {
        Self { message }
    }
}

impl<'a> Widget for MessageBoxWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((text, kind)) = self.message.current() else {
            return;
        };

        let color = match kind {
            MessageKind::Success => colors::SUCCESS,
            MessageKind::Error => colors::ERROR,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
