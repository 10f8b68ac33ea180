use crate::{http::model::Stats, ui::message::MessageBox};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub message: MessageBox,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// A request-code call is in flight; the button is disabled.
    pub pending_code: bool,
    /// A submission is in flight; the submit button is disabled.
    pub pending_submit: bool,
    pub stats: Option<Stats>,
}
