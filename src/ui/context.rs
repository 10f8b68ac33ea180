use crate::{event::events::Event, http::SongApi};
use flume::Sender;
use std::sync::Arc;

pub struct AppContext {
    pub api: Arc<dyn SongApi>,
    pub event_tx: Sender<Event>,
}
