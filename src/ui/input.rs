use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    /// Keys handled before the form sees them. Plain characters stay with
    /// the form since every printable key may belong to a field.
    pub fn handle_key(key: KeyEvent) -> Option<GlobalAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(GlobalAction::Quit),
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(GlobalAction::Quit),
            _ => None,
        }
    }
}
