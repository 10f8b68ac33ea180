use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    event::events::Event,
    http::model::Submission,
    ui::{context::AppContext, state::AppState},
    util::colors,
};

pub const REQUEST_CODE_LABEL: &str = "Wyślij kod 📧";
pub const SUBMIT_LABEL: &str = "Zgłoś piosenkę 🚀";
pub const PENDING_LABEL: &str = "Wysyłanie... ⏳";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    RequestCodeBtn,
    Code,
    Artist,
    Title,
    SubmitBtn,
}

impl Field {
    fn next(self, code_enabled: bool) -> Self {
        let next = match self {
            Field::Email => Field::RequestCodeBtn,
            Field::RequestCodeBtn => Field::Code,
            Field::Code => Field::Artist,
            Field::Artist => Field::Title,
            Field::Title => Field::SubmitBtn,
            Field::SubmitBtn => Field::Email,
        };
        if next == Field::Code && !code_enabled {
            Field::Artist
        } else {
            next
        }
    }

    fn prev(self, code_enabled: bool) -> Self {
        let prev = match self {
            Field::Email => Field::SubmitBtn,
            Field::RequestCodeBtn => Field::Email,
            Field::Code => Field::RequestCodeBtn,
            Field::Artist => Field::Code,
            Field::Title => Field::Artist,
            Field::SubmitBtn => Field::Title,
        };
        if prev == Field::Code && !code_enabled {
            Field::RequestCodeBtn
        } else {
            prev
        }
    }
}

/// The song-request form: four fields and two buttons. The code field stays
/// disabled until the server confirms a verification code was issued.
pub struct FormView {
    pub email: String,
    pub code: String,
    pub artist: String,
    pub title: String,
    pub code_enabled: bool,
    pub focus: Field,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            email: String::new(),
            code: String::new(),
            artist: String::new(),
            title: String::new(),
            code_enabled: false,
            focus: Field::Email,
        }
    }
}

impl FormView {
    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Email => Some(&mut self.email),
            Field::Code if self.code_enabled => Some(&mut self.code),
            Field::Artist => Some(&mut self.artist),
            Field::Title => Some(&mut self.title),
            _ => None,
        }
    }

    /// Email and code are trimmed on the way out; artist and title are sent
    /// as typed.
    pub fn submission(&self) -> Submission {
        Submission {
            email: self.email.trim().to_string(),
            code: self.code.trim().to_string(),
            artist: self.artist.clone(),
            title: self.title.clone(),
        }
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.code.clear();
        self.artist.clear();
        self.title.clear();
        self.code_enabled = false;
        self.focus = Field::Email;
    }

    pub fn handle_input(&mut self, key: KeyEvent, state: &AppState, ctx: &AppContext) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next(self.code_enabled);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev(self.code_enabled);
            }
            KeyCode::Enter => match self.focus {
                Field::RequestCodeBtn => {
                    if !state.ui.pending_code {
                        let _ = ctx.event_tx.send(Event::RequestCode(self.email.clone()));
                    }
                }
                Field::SubmitBtn => {
                    if !state.ui.pending_submit {
                        let _ = ctx.event_tx.send(Event::SubmitSong(self.submission()));
                    }
                }
                _ => self.focus = self.focus.next(self.code_enabled),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.focused_field_mut() {
                    field.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Some(field) = self.focused_field_mut() {
            field.push_str(text);
        }
    }

    pub fn on_event(&mut self, event: &Event) {
        match event {
            Event::CodeRequestFinished(Ok(response)) if response.success => {
                self.code_enabled = true;
                self.focus = Field::Code;
            }
            Event::SubmitFinished(Ok(response)) if response.success => {
                self.reset();
            }
            _ => {}
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_field(f, chunks[0], "Email", &self.email, Field::Email, true);
        self.render_field(
            f,
            chunks[1],
            if self.code_enabled {
                "Kod weryfikacyjny"
            } else {
                "Kod weryfikacyjny (najpierw poproś o kod)"
            },
            &self.code,
            Field::Code,
            self.code_enabled,
        );
        self.render_field(f, chunks[2], "Wykonawca", &self.artist, Field::Artist, true);
        self.render_field(f, chunks[3], "Tytuł", &self.title, Field::Title, true);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[4]);

        self.render_button(
            f,
            buttons[0],
            REQUEST_CODE_LABEL,
            Field::RequestCodeBtn,
            state.ui.pending_code,
        );
        self.render_button(
            f,
            buttons[1],
            SUBMIT_LABEL,
            Field::SubmitBtn,
            state.ui.pending_submit,
        );
    }

    fn render_field(
        &self,
        f: &mut Frame,
        area: Rect,
        label: &str,
        content: &str,
        field: Field,
        enabled: bool,
    ) {
        let style = if !enabled {
            Style::default().fg(colors::NEUTRAL).add_modifier(Modifier::DIM)
        } else if self.focus == field {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(style);

        f.render_widget(Paragraph::new(content).block(block), area);

        if enabled && self.focus == field {
            f.set_cursor_position((area.x + 1 + content.width() as u16, area.y + 1));
        }
    }

    fn render_button(&self, f: &mut Frame, area: Rect, label: &str, field: Field, pending: bool) {
        let label = if pending { PENDING_LABEL } else { label };

        let style = if pending {
            Style::default().fg(colors::NEUTRAL)
        } else if self.focus == field {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::ACCENT)
        };

        let block = Block::default().borders(Borders::ALL).border_style(style);
        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(button, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::model::ApiResponse;

    fn response(success: bool, message: &str) -> ApiResponse {
        ApiResponse {
            success,
            message: message.to_string(),
            track: None,
        }
    }

    #[test]
    fn focus_skips_disabled_code_field() {
        let form = FormView::default();
        assert_eq!(Field::RequestCodeBtn.next(false), Field::Artist);
        assert_eq!(Field::Artist.prev(false), Field::RequestCodeBtn);
        assert!(!form.code_enabled);
    }

    #[test]
    fn focus_reaches_code_field_once_enabled() {
        assert_eq!(Field::RequestCodeBtn.next(true), Field::Code);
        assert_eq!(Field::Artist.prev(true), Field::Code);
    }

    #[test]
    fn code_success_enables_and_focuses_the_code_field() {
        let mut form = FormView::default();
        form.on_event(&Event::CodeRequestFinished(Ok(response(true, "Code sent"))));
        assert!(form.code_enabled);
        assert_eq!(form.focus, Field::Code);
    }

    #[test]
    fn code_failure_leaves_the_code_field_disabled() {
        let mut form = FormView::default();
        form.on_event(&Event::CodeRequestFinished(Ok(response(
            false,
            "Tylko emaile @zspbytow.pl są akceptowane",
        ))));
        assert!(!form.code_enabled);
        assert_eq!(form.focus, Field::Email);
    }

    #[test]
    fn submit_success_resets_fields_and_disables_code() {
        let mut form = FormView {
            email: "a@b.com".to_string(),
            code: "123456".to_string(),
            artist: "Daft Punk".to_string(),
            title: "One More Time".to_string(),
            code_enabled: true,
            focus: Field::SubmitBtn,
        };

        form.on_event(&Event::SubmitFinished(Ok(response(true, "ok"))));

        assert!(form.email.is_empty());
        assert!(form.code.is_empty());
        assert!(form.artist.is_empty());
        assert!(form.title.is_empty());
        assert!(!form.code_enabled);
        assert_eq!(form.focus, Field::Email);
    }

    #[test]
    fn submit_failure_keeps_the_form() {
        let mut form = FormView {
            email: "a@b.com".to_string(),
            code: "000000".to_string(),
            artist: "Daft Punk".to_string(),
            title: "One More Time".to_string(),
            code_enabled: true,
            focus: Field::SubmitBtn,
        };

        form.on_event(&Event::SubmitFinished(Ok(response(false, "Invalid code"))));

        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.artist, "Daft Punk");
        assert!(form.code_enabled);
    }

    #[test]
    fn submission_trims_email_and_code_only() {
        let form = FormView {
            email: "  a@b.com ".to_string(),
            code: " 123456 ".to_string(),
            artist: " Daft Punk ".to_string(),
            title: " One More Time ".to_string(),
            code_enabled: true,
            focus: Field::SubmitBtn,
        };

        let submission = form.submission();
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.code, "123456");
        assert_eq!(submission.artist, " Daft Punk ");
        assert_eq!(submission.title, " One More Time ");
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut form = FormView::default();
        let state = AppState::default();
        let (tx, _rx) = flume::unbounded();
        let ctx = AppContext {
            api: std::sync::Arc::new(crate::ui::util::handler::tests::FakeApi::default()),
            event_tx: tx,
        };

        for c in "a@b.com".chars() {
            form.handle_input(KeyEvent::from(KeyCode::Char(c)), &state, &ctx);
        }
        assert_eq!(form.email, "a@b.com");

        form.handle_input(KeyEvent::from(KeyCode::Backspace), &state, &ctx);
        assert_eq!(form.email, "a@b.co");

        form.handle_paste("m");
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn enter_on_request_button_sends_the_command() {
        let mut form = FormView {
            email: "a@b.com".to_string(),
            focus: Field::RequestCodeBtn,
            ..FormView::default()
        };
        let state = AppState::default();
        let (tx, rx) = flume::unbounded();
        let ctx = AppContext {
            api: std::sync::Arc::new(crate::ui::util::handler::tests::FakeApi::default()),
            event_tx: tx,
        };

        form.handle_input(KeyEvent::from(KeyCode::Enter), &state, &ctx);

        match rx.try_recv() {
            Ok(Event::RequestCode(email)) => assert_eq!(email, "a@b.com"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn pending_button_ignores_activation() {
        let mut form = FormView {
            email: "a@b.com".to_string(),
            focus: Field::RequestCodeBtn,
            ..FormView::default()
        };
        let mut state = AppState::default();
        state.ui.pending_code = true;
        let (tx, rx) = flume::unbounded();
        let ctx = AppContext {
            api: std::sync::Arc::new(crate::ui::util::handler::tests::FakeApi::default()),
            event_tx: tx,
        };

        form.handle_input(KeyEvent::from(KeyCode::Enter), &state, &ctx);
        assert!(rx.try_recv().is_err());
    }
}
