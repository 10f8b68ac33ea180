use std::sync::Arc;

use flume::{Receiver, Sender};

use ratatui::Frame;

use crate::{
    config::Config,
    event::events::Event,
    http::{ApiService, SongApi},
    util::task::TaskManager,
};

use super::{
    context::AppContext,
    layout::AppLayout,
    state::AppState,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
    views::FormView,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub form: FormView,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let config = Config::from_env();
        Ok(Self::with_api(Arc::new(ApiService::new(&config))))
    }

    pub fn with_api(api: Arc<dyn SongApi>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            ctx: AppContext {
                api,
                event_tx: event_tx.clone(),
            },
            event_rx,
            event_tx,
            state: AppState::default(),
            form: FormView::default(),
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            AppLayout::new(self).render(frame, frame.area());
        }
    }
}
