use std::time::{Duration, Instant};

use crate::http::model::ApiResponse;

pub const MESSAGE_TTL: Duration = Duration::from_secs(15);

pub const EMPTY_EMAIL: &str = "❌ Wprowadź adres email";
pub const CONNECTION_ERROR: &str = "❌ Błąd połączenia z serwerem";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The feedback area under the form. Owns a single expiry deadline that
/// every `show` replaces, so an older message can never hide a newer one.
#[derive(Debug, Clone, Default)]
pub struct MessageBox {
    current: Option<(String, MessageKind)>,
    hide_at: Option<Instant>,
}

impl MessageBox {
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.show_at(text, kind, Instant::now());
    }

    pub fn show_at(&mut self, text: impl Into<String>, kind: MessageKind, now: Instant) {
        self.current = Some((text.into(), kind));
        self.hide_at = Some(now + MESSAGE_TTL);
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(hide_at) = self.hide_at {
            if now >= hide_at {
                self.current = None;
                self.hide_at = None;
            }
        }
    }

    pub fn current(&self) -> Option<(&str, MessageKind)> {
        self.current
            .as_ref()
            .map(|(text, kind)| (text.as_str(), *kind))
    }
}

/// Confirmation text for a successful submission: the server message plus
/// the matched track and an optional listen link.
pub fn compose_submit_success(response: &ApiResponse) -> String {
    let mut message = response.message.clone();

    if let Some(track) = &response.track {
        message.push_str(&format!("\n\n🎤 {}\n🎵 {}", track.artist, track.title));
        if let Some(url) = &track.url {
            message.push_str(&format!("\n\n🔗 Posłuchaj: {}", url));
        }
    }

    message
}
