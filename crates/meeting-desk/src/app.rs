use crate::{
    AppCommand, AppError, AppResult, ConsoleNotifier, Route, SimulatedGateway, config::Config,
    view,
};

use meeting_desk_core::{
    CreateMeetingDialog, DeskError, MeetingCatalog, MeetingId, MeetingTab, RecorderSession,
    SessionStatus,
};

use std::{ops::ControlFlow, panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout},
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, error, info, instrument, warn};

pub(crate) type Notifier = Arc<ConsoleNotifier>;
pub(crate) type Gateway = Arc<SimulatedGateway>;

/// Main application state.
///
/// Owns the catalog, the create dialog, and at most one recorder session.
/// Terminal input and the session clock are multiplexed on a single task.
pub struct App {
    pub(crate) config: Config,
    pub(crate) catalog: MeetingCatalog,
    pub(crate) tab: MeetingTab,
    pub(crate) route: Route,
    pub(crate) dialog: CreateMeetingDialog<Notifier, Gateway>,
    pub(crate) session: Option<RecorderSession<Notifier, Gateway>>,
    pub(crate) notifier: Notifier,
    pub(crate) gateway: Gateway,
}

impl App {
    /// Application on the dashboard with `catalog` loaded.
    pub(crate) fn new(config: Config, catalog: MeetingCatalog) -> Self {
        let notifier = Arc::new(ConsoleNotifier::new());
        let gateway = Arc::new(SimulatedGateway::new(
            config.gateway.latency(),
            catalog.next_id(),
        ));
        let dialog = CreateMeetingDialog::new(Arc::clone(&notifier), Arc::clone(&gateway));

        Self {
            config,
            catalog,
            tab: MeetingTab::default(),
            route: Route::Dashboard,
            dialog,
            session: None,
            notifier,
            gateway,
        }
    }

    /// Run the main application event loop until `quit` or end of input.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Meeting-Desk starting");

        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let period = self.config.recorder.driver_interval();
        let mut driver = tokio::time::interval_at(Instant::now() + period, period);
        driver.set_missed_tick_behavior(MissedTickBehavior::Burst);

        write_out(&mut stdout, &format!("{}\n\n{}", view::HELP, self.render())).await?;

        loop {
            tokio::select! {
                _ = driver.tick() => {
                    if let Some(session) = self.session.as_mut() {
                        session.advance(period).await;
                    }
                }

                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("Input closed, shutting down");
                        break;
                    };

                    match AppCommand::parse(&line) {
                        Ok(None) => {}
                        Ok(Some(AppCommand::Quit)) => {
                            info!("Quit requested");
                            break;
                        }
                        Ok(Some(AppCommand::Help)) => write_out(&mut stdout, view::HELP).await?,
                        Ok(Some(command)) => match self.handle(command).await {
                            Ok(ControlFlow::Continue(())) => {
                                write_out(&mut stdout, &self.render()).await?;
                            }
                            Ok(ControlFlow::Break(())) => break,
                            Err(e) => {
                                warn!(error = %e, "Command failed");
                                write_out(&mut stdout, &user_message(&e)).await?;
                            }
                        },
                        Err(e) => {
                            debug!(error = %e, "Unparsed input");
                            write_out(&mut stdout, &user_message(&e)).await?;
                        }
                    }
                }
            }

            let toasts = self.notifier.drain();
            if !toasts.is_empty() {
                let text: Vec<String> = toasts.iter().map(view::toast).collect();
                write_out(&mut stdout, &text.join("\n")).await?;
            }
        }

        self.leave_recorder();
        info!(
            saves = self.gateway.save_count(),
            "Meeting-Desk shut down successfully"
        );

        Ok(())
    }

    /// Apply one command to the current view.
    #[instrument(skip(self))]
    pub(crate) async fn handle(&mut self, command: AppCommand) -> AppResult<ControlFlow<()>> {
        match command {
            AppCommand::Quit => return Ok(ControlFlow::Break(())),
            AppCommand::Help | AppCommand::Show => {}
            AppCommand::Open { path } => self.navigate(&path)?,
            AppCommand::Record { meeting_id } => {
                self.navigate(&Route::recorder_path(meeting_id))?
            }
            AppCommand::Back => self.navigate("/")?,
            command if matches!(self.route, Route::Recorder(_)) => {
                self.handle_recorder(command).await?
            }
            command if self.route == Route::Dashboard => self.handle_dashboard(command).await?,
            _ => {
                return Err(AppError::invalid_command(
                    "nothing to do on this page, type `open /` to return home",
                ));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Switch views. Leaving the recorder tears its session down.
    #[track_caller]
    pub(crate) fn navigate(&mut self, path: &str) -> AppResult<()> {
        let route = match Route::parse(path) {
            Route::Recorder(id) if self.catalog.get(id).is_none() => {
                Route::NotFound(path.trim().to_string())
            }
            route => route,
        };

        if route == self.route && !matches!(route, Route::NotFound(_)) {
            return Ok(());
        }

        self.leave_recorder();

        if let Route::Recorder(id) = route {
            self.enter_recorder(id);
        }

        debug!(from = %self.route, to = %route, "Navigated");
        self.route = route;

        if let Route::NotFound(path) = &self.route {
            error!(
                path = %path,
                "404 Error: User attempted to access non-existent route"
            );
            return Err(AppError::RouteNotFound {
                path: path.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Current view as text.
    pub(crate) fn render(&self) -> String {
        match (&self.route, &self.session) {
            (Route::Dashboard, _) => view::dashboard(&self.catalog, self.tab, &self.dialog),
            (Route::Recorder(id), Some(session)) => match self.catalog.get(*id) {
                Some(meeting) => view::recorder(meeting, session),
                None => view::not_found(&self.route.to_string()),
            },
            (route, _) => view::not_found(&route.to_string()),
        }
    }

    async fn handle_dashboard(&mut self, command: AppCommand) -> AppResult<()> {
        match command {
            AppCommand::ShowTab(tab) => self.tab = tab,
            AppCommand::NewMeeting => self.dialog.open(),
            AppCommand::SetField { field, value } => {
                self.require_dialog()?;
                self.dialog.set_field(field, value);
            }
            AppCommand::Cancel => {
                self.require_dialog()?;
                self.dialog.close()?;
            }
            AppCommand::Submit => {
                self.require_dialog()?;
                let meeting = self.dialog.submit().await?;
                self.tab = MeetingTab::Upcoming;
                self.catalog.insert(meeting);
            }
            other => {
                return Err(AppError::invalid_command(format!(
                    "{:?} is only available while recording",
                    other
                )));
            }
        }
        Ok(())
    }

    async fn handle_recorder(&mut self, command: AppCommand) -> AppResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Err(AppError::invalid_command("no recorder session is open"));
        };

        match command {
            AppCommand::Start => session.start()?,
            AppCommand::Pause => {
                session.toggle_pause()?;
            }
            AppCommand::Stop => {
                let meeting_id = session.meeting_id();
                let saved = session.stop().await;
                // Stop is terminal even when the final save fails.
                if session.status() == SessionStatus::Stopped {
                    self.catalog.complete(meeting_id);
                }
                saved?;
            }
            AppCommand::Note { text } => {
                let notes = match session.notes().text() {
                    "" => text,
                    existing => format!("{}\n{}", existing, text),
                };
                session.edit_notes(notes);
            }
            AppCommand::ClearNotes => session.edit_notes(String::new()),
            AppCommand::Save => session.save_notes().await?,
            AppCommand::Action(mut draft) => {
                session.add_action_item(&mut draft)?;
            }
            AppCommand::Toggle { position } => {
                let id = session
                    .action_items()
                    .items()
                    .get(position.saturating_sub(1))
                    .filter(|_| position > 0)
                    .map(|item| item.id)
                    .ok_or_else(|| {
                        AppError::invalid_command(format!("there is no action item {}", position))
                    })?;
                session.toggle_action_item(id);
            }
            other => {
                return Err(AppError::invalid_command(format!(
                    "{:?} is only available on the dashboard",
                    other
                )));
            }
        }
        Ok(())
    }

    #[track_caller]
    fn require_dialog(&self) -> AppResult<()> {
        if self.dialog.is_open() {
            Ok(())
        } else {
            Err(AppError::invalid_command(
                "open the create meeting dialog with `new` first",
            ))
        }
    }

    fn enter_recorder(&mut self, meeting_id: MeetingId) {
        let session = RecorderSession::new(
            meeting_id,
            self.config.recorder.settings(),
            Arc::clone(&self.notifier),
            Arc::clone(&self.gateway),
        );
        info!(
            meeting_id = %meeting_id,
            session_id = %session.session_id(),
            "Recorder opened"
        );
        self.session = Some(session);
    }

    fn leave_recorder(&mut self) {
        if let Some(session) = self.session.take() {
            if session.status().is_active() || session.notes().is_dirty() {
                warn!(
                    session_id = %session.session_id(),
                    status = %session.status(),
                    unsaved_notes = session.notes().is_dirty(),
                    "Recorder closed without stopping"
                );
            }
        }
    }
}

fn user_message(error: &AppError) -> String {
    match error {
        AppError::Core { source, .. } => match source {
            DeskError::InvalidTransition { from, action, .. } => {
                format!("! Cannot {} while the meeting is {}", action, from)
            }
            DeskError::Validation { errors, .. } => format!("! {}", errors),
            DeskError::SubmissionInFlight { .. } => {
                "! A meeting is already being created".to_string()
            }
            DeskError::SaveFailed { .. } | DeskError::CreateFailed { .. } => {
                "! The last action did not complete.".to_string()
            }
        },
        AppError::RouteNotFound { path, .. } => view::not_found(path),
        AppError::InvalidCommand { reason, .. } => format!("? {}", reason),
        other => format!("! {}", other),
    }
}

async fn write_out(stdout: &mut Stdout, text: &str) -> AppResult<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n\n").await?;
    stdout.flush().await?;
    Ok(())
}
