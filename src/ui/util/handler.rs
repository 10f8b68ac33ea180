use std::time::Instant;

use tracing::{debug, error, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::{GlobalAction, InputHandler},
        message::{self, MessageKind},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
        }

        Ok(())
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => {
                let _ = app.ctx.event_tx.send(Event::Initialize);
            }
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => match InputHandler::handle_key(key) {
                Some(GlobalAction::Quit) => app.should_quit = true,
                None => app.form.handle_input(key, &app.state, &app.ctx),
            },
            TerminalEvent::Paste(text) => app.form.handle_paste(&text),
            TerminalEvent::Tick => app.state.message.tick(Instant::now()),
            TerminalEvent::Resize(_, _) => {}
        }

        Ok(())
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        app.form.on_event(&evt);

        match evt {
            Event::Initialize | Event::FetchStats => Self::spawn_stats_fetch(app),
            Event::RequestCode(email) => {
                let email = email.trim().to_string();
                if email.is_empty() {
                    app.state
                        .message
                        .show(message::EMPTY_EMAIL, MessageKind::Error);
                    return;
                }

                app.state.ui.pending_code = true;
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    "request_code",
                    tokio::spawn(async move {
                        let result = api.request_code(&email).await;
                        let _ = tx.send(Event::CodeRequestFinished(result));
                    }),
                );
            }
            // The single exit path of a request-code call: the button is
            // re-enabled before the outcome is inspected.
            Event::CodeRequestFinished(result) => {
                app.state.ui.pending_code = false;

                match result {
                    Ok(response) if response.success => {
                        app.state.message.show(
                            format!("✅ {} (sprawdź konsolę serwera)", response.message),
                            MessageKind::Success,
                        );
                    }
                    Ok(response) => {
                        app.state
                            .message
                            .show(format!("❌ {}", response.message), MessageKind::Error);
                    }
                    Err(e) => {
                        warn!("Request-code call failed: {e}");
                        app.state
                            .message
                            .show(message::CONNECTION_ERROR, MessageKind::Error);
                    }
                }
            }
            Event::SubmitSong(submission) => {
                app.state.ui.pending_submit = true;
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    "submit",
                    tokio::spawn(async move {
                        let result = api.submit_song(&submission).await;
                        let _ = tx.send(Event::SubmitFinished(result));
                    }),
                );
            }
            Event::SubmitFinished(result) => {
                app.state.ui.pending_submit = false;

                match result {
                    Ok(response) if response.success => {
                        app.state
                            .message
                            .show(message::compose_submit_success(&response), MessageKind::Success);
                        Self::spawn_stats_fetch(app);
                    }
                    Ok(response) => {
                        app.state
                            .message
                            .show(format!("❌ {}", response.message), MessageKind::Error);
                    }
                    Err(e) => {
                        warn!("Submit call failed: {e}");
                        app.state
                            .message
                            .show(message::CONNECTION_ERROR, MessageKind::Error);
                    }
                }
            }
            Event::StatsFetched(stats) => {
                app.state.ui.stats = Some(stats);
            }
        }
    }

    /// Stats failures are logged and never surfaced in the UI.
    fn spawn_stats_fetch(app: &mut App) {
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();

        app.task_manager.spawn(
            "stats",
            tokio::spawn(async move {
                match api.fetch_stats().await {
                    Ok(stats) if stats.success => {
                        let _ = tx.send(Event::StatsFetched(stats));
                    }
                    Ok(_) => debug!("Stats endpoint reported failure"),
                    Err(e) => error!("Failed to load stats: {e}"),
                }
            }),
        );
    }
}
