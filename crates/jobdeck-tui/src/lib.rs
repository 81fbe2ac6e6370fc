// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use jobdeck_app::{
    AppCommand, AppEvent, AppState, AttritionFormInput, CompetitionFormInput,
    CsvUploadFormInput, DemandForecastFormInput, EMBED_PAGES, EmployeeClusteringFormInput,
    FeatureWeight, FinancialFormInput, MarketSegmentationFormInput, PanelForm, PanelKind,
    PanelResources, PanelResult, PostingFormInput, RequestOutcome, SalaryFormInput,
    SkillAnalysisFormInput, StrategicSegmentationFormInput, ViewMode,
    WorkforceClusteringFormInput, clamp_float, clamp_int, master_list,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};
use std::fs;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const EMBED_LOADING_MILLIS: u64 = 300;
const STATUS_CLEAR_SECS: u64 = 4;

/// A validated form snapshot on its way to the prediction service. Upload
/// panels carry file bytes because the worker thread must not touch the
/// session.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelSubmission {
    Salary(SalaryFormInput),
    Attrition(AttritionFormInput),
    WorkforceClustering(WorkforceClusteringFormInput),
    MarketSegmentation(MarketSegmentationFormInput),
    Financial(FinancialFormInput),
    Competition(CompetitionFormInput),
    DemandForecast(DemandForecastFormInput),
    StrategicSegmentation(StrategicSegmentationFormInput),
    RemotePrediction(PostingFormInput),
    PostingClustering(PostingFormInput),
    SentimentUpload { file_name: String, bytes: Vec<u8> },
    EmployeeClustering(EmployeeClusteringFormInput),
    SkillAnalysis(SkillAnalysisFormInput),
    HrUpload { file_name: String, bytes: Vec<u8> },
}

impl PanelSubmission {
    pub const fn kind(&self) -> PanelKind {
        match self {
            Self::Salary(_) => PanelKind::Salary,
            Self::Attrition(_) => PanelKind::Attrition,
            Self::WorkforceClustering(_) => PanelKind::WorkforceClustering,
            Self::MarketSegmentation(_) => PanelKind::MarketSegmentation,
            Self::Financial(_) => PanelKind::FinancialPrediction,
            Self::Competition(_) => PanelKind::Competition,
            Self::DemandForecast(_) => PanelKind::DemandForecast,
            Self::StrategicSegmentation(_) => PanelKind::StrategicSegmentation,
            Self::RemotePrediction(_) => PanelKind::RemotePrediction,
            Self::PostingClustering(_) => PanelKind::PostingClustering,
            Self::SentimentUpload { .. } => PanelKind::SentimentAnalysis,
            Self::EmployeeClustering(_) => PanelKind::EmployeeClustering,
            Self::SkillAnalysis(_) => PanelKind::SkillAnalysis,
            Self::HrUpload { .. } => PanelKind::HrDashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelResolution {
    Success(PanelResult),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InternalEvent {
    ClearStatus {
        token: u64,
    },
    EmbedLoadingDone {
        token: u64,
    },
    PanelResolved {
        kind: PanelKind,
        resolution: PanelResolution,
    },
    ResourcesLoaded {
        kind: PanelKind,
        result: std::result::Result<PanelResources, String>,
    },
    DownloadFinished {
        kind: PanelKind,
        result: std::result::Result<String, String>,
    },
}

/// Boundary between the UI and everything behind it: the prediction
/// service and the preference store. The `spawn_*` defaults run inline and
/// send the completion event themselves, which is what tests stub; the
/// real runtime overrides them with worker threads.
pub trait AppRuntime {
    fn submit(&mut self, submission: PanelSubmission) -> Result<PanelResult>;
    fn load_panel_resources(&mut self, kind: PanelKind) -> Result<Option<PanelResources>>;
    fn download_sentiment_csv(&mut self, request_id: &str) -> Result<String>;
    fn persist_view_mode(&mut self, mode: ViewMode) -> Result<()>;

    fn spawn_submit(
        &mut self,
        submission: PanelSubmission,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let kind = submission.kind();
        let resolution = match self.submit(submission) {
            Ok(result) => PanelResolution::Success(result),
            Err(error) => PanelResolution::Failure(error.to_string()),
        };
        tx.send(InternalEvent::PanelResolved { kind, resolution })
            .map_err(|_| anyhow::anyhow!("panel event channel closed"))?;
        Ok(())
    }

    fn spawn_resource_load(&mut self, kind: PanelKind, tx: Sender<InternalEvent>) -> Result<()> {
        match self.load_panel_resources(kind) {
            Ok(Some(resources)) => tx
                .send(InternalEvent::ResourcesLoaded {
                    kind,
                    result: Ok(resources),
                })
                .map_err(|_| anyhow::anyhow!("panel event channel closed"))?,
            Ok(None) => {}
            Err(error) => tx
                .send(InternalEvent::ResourcesLoaded {
                    kind,
                    result: Err(error.to_string()),
                })
                .map_err(|_| anyhow::anyhow!("panel event channel closed"))?,
        }
        Ok(())
    }

    fn spawn_download(
        &mut self,
        kind: PanelKind,
        request_id: String,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let result = self
            .download_sentiment_csv(&request_id)
            .map_err(|error| error.to_string());
        tx.send(InternalEvent::DownloadFinished { kind, result })
            .map_err(|_| anyhow::anyhow!("panel event channel closed"))?;
        Ok(())
    }
}

/// Pre-submit data a panel fetches at mount.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState {
    NotNeeded,
    Loading,
    Ready(PanelResources),
    Failed(String),
}

/// Everything one activation of a panel owns. Dropped whole when the
/// switcher moves away; a fresh activation starts from the default record.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSession {
    pub kind: PanelKind,
    pub form: Option<PanelForm>,
    pub outcome: RequestOutcome<PanelResult>,
    pub validation: Option<String>,
    pub resources: ResourceState,
    pub field_cursor: usize,
    pub download_note: Option<String>,
}

impl PanelSession {
    pub fn mount(kind: PanelKind) -> Self {
        Self {
            kind,
            form: PanelForm::default_for(kind),
            outcome: RequestOutcome::Idle,
            validation: None,
            resources: if panel_needs_resources(kind) {
                ResourceState::Loading
            } else {
                ResourceState::NotNeeded
            },
            field_cursor: 0,
            download_note: None,
        }
    }
}

const fn panel_needs_resources(kind: PanelKind) -> bool {
    matches!(
        kind,
        PanelKind::WorkforceClustering | PanelKind::SkillAnalysis
    )
}

#[derive(Debug, Clone, PartialEq)]
struct EditUiState {
    field_index: usize,
    buffer: String,
}

#[derive(Debug, Default)]
struct ViewData {
    session: Option<PanelSession>,
    edit: Option<EditUiState>,
    help_visible: bool,
    status_token: u64,
    embed_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let (internal_tx, internal_rx) = mpsc::channel();
    let mut view_data = ViewData::default();
    mount_active_panel(state, runtime, &mut view_data, &internal_tx);

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(state: &mut AppState, view_data: &mut ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        apply_internal_event(state, view_data, event);
    }
}

fn apply_internal_event(state: &mut AppState, view_data: &mut ViewData, event: InternalEvent) {
    match event {
        InternalEvent::ClearStatus { token } if token == view_data.status_token => {
            state.dispatch(AppCommand::ClearStatus);
        }
        InternalEvent::ClearStatus { .. } => {}
        InternalEvent::EmbedLoadingDone { token } if token == view_data.embed_token => {
            state.dispatch(AppCommand::EmbedLoadingCleared);
        }
        InternalEvent::EmbedLoadingDone { .. } => {}
        InternalEvent::PanelResolved { kind, resolution } => {
            // The session for a switched-away panel is gone; a late
            // response for it has nowhere to land. Within the live
            // session, whichever resolution arrives last wins.
            let Some(session) = view_data.session.as_mut() else {
                return;
            };
            if session.kind != kind {
                return;
            }
            match resolution {
                PanelResolution::Success(result) => session.outcome.resolve_success(result),
                PanelResolution::Failure(raw) => {
                    session.outcome.resolve_failure(failure_display(kind, &raw));
                }
            }
        }
        InternalEvent::ResourcesLoaded { kind, result } => {
            let Some(session) = view_data.session.as_mut() else {
                return;
            };
            if session.kind != kind {
                return;
            }
            match result {
                Ok(resources) => {
                    if let (
                        PanelKind::WorkforceClustering,
                        PanelResources::ClusterFeatures(features),
                    ) = (kind, &resources)
                    {
                        session.form = Some(PanelForm::WorkforceClustering(
                            WorkforceClusteringFormInput::seeded(features),
                        ));
                    }
                    session.resources = ResourceState::Ready(resources);
                }
                Err(message) => {
                    session.resources = ResourceState::Failed(resource_failure_display(kind, &message));
                }
            }
        }
        InternalEvent::DownloadFinished { kind, result } => {
            let Some(session) = view_data.session.as_mut() else {
                return;
            };
            if session.kind != kind {
                return;
            }
            session.download_note = Some(match result {
                Ok(note) => note,
                Err(error) => format!("download failed: {error}"),
            });
        }
    }
}

/// Per-panel error presentation: a few panels collapse everything into a
/// fixed message, the rest surface whatever the transport layer extracted.
fn failure_display(kind: PanelKind, raw: &str) -> String {
    match kind {
        PanelKind::Attrition | PanelKind::Competition => "Backend error".to_owned(),
        PanelKind::DemandForecast => "Could not connect to the analysis server.".to_owned(),
        PanelKind::StrategicSegmentation => {
            "Analysis failed. Please check your backend connection.".to_owned()
        }
        PanelKind::MarketSegmentation | PanelKind::FinancialPrediction => {
            format!("Server error: {raw}")
        }
        _ => raw.to_owned(),
    }
}

fn resource_failure_display(kind: PanelKind, raw: &str) -> String {
    match kind {
        PanelKind::WorkforceClustering => "Failed to load feature list".to_owned(),
        _ => raw.to_owned(),
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(STATUS_CLEAR_SECS));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

// Fixed-delay cosmetic spinner for the embed frame; nothing about the
// remote page's actual load feeds back into this.
fn schedule_embed_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(EMBED_LOADING_MILLIS));
        let _ = sender.send(InternalEvent::EmbedLoadingDone { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.wrapping_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn select_embed_page(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    index: usize,
) {
    let events = state.dispatch(AppCommand::SelectEmbedPage(index));
    if events
        .iter()
        .any(|event| *event == AppEvent::EmbedLoadingStarted)
    {
        view_data.embed_token = view_data.embed_token.wrapping_add(1);
        schedule_embed_clear(internal_tx, view_data.embed_token);
    }
}

fn mount_active_panel<R: AppRuntime>(
    state: &AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let list = master_list();
    let Some(descriptor) = list.get(state.panels.active) else {
        view_data.session = None;
        return;
    };
    let session = PanelSession::mount(descriptor.kind);
    let needs_resources = matches!(session.resources, ResourceState::Loading);
    let kind = session.kind;
    view_data.session = Some(session);
    view_data.edit = None;

    if needs_resources && let Err(error) = runtime.spawn_resource_load(kind, internal_tx.clone()) {
        if let Some(session) = view_data.session.as_mut() {
            session.resources = ResourceState::Failed(resource_failure_display(kind, &error.to_string()));
        }
    }
}

fn apply_app_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    events: &[AppEvent],
) {
    for event in events {
        match event {
            AppEvent::PanelChanged(_) => {
                mount_active_panel(state, runtime, view_data, internal_tx);
            }
            AppEvent::ViewModeChanged(mode) => {
                if let Err(error) = runtime.persist_view_mode(*mode) {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("could not save view mode: {error}"),
                    );
                }
            }
            _ => {}
        }
    }
}

fn dispatch_and_apply<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    apply_app_events(state, runtime, view_data, internal_tx, &events);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if let Some(edit) = view_data.edit.as_mut() {
        match key.code {
            KeyCode::Esc => {
                view_data.edit = None;
            }
            KeyCode::Enter => {
                let edit = view_data.edit.take().expect("edit state present");
                let status = view_data
                    .session
                    .as_mut()
                    .map(|session| commit_field_text(session, edit.field_index, &edit.buffer));
                if let Some(status) = status {
                    emit_status(state, view_data, internal_tx, status);
                }
            }
            KeyCode::Backspace => {
                edit.buffer.pop();
            }
            KeyCode::Char(ch) => {
                edit.buffer.push(ch);
            }
            _ => {}
        }
        return false;
    }

    if state.panels.menu_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => {
                state.dispatch(AppCommand::ClosePanelMenu);
            }
            KeyCode::Up => {
                state.dispatch(AppCommand::MoveMenuCursor(-1));
            }
            KeyCode::Down => {
                state.dispatch(AppCommand::MoveMenuCursor(1));
            }
            KeyCode::Enter => {
                let target = state.panels.menu_cursor;
                let before = state.panels.active;
                dispatch_and_apply(
                    state,
                    runtime,
                    view_data,
                    internal_tx,
                    AppCommand::SelectPanel(target),
                );
                if state.panels.active == before && target != before {
                    emit_status(state, view_data, internal_tx, "panel not available yet");
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('?') => {
            view_data.help_visible = true;
        }
        KeyCode::Char('v') => {
            dispatch_and_apply(
                state,
                runtime,
                view_data,
                internal_tx,
                AppCommand::CycleViewMode,
            );
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("view: {}", state.view_mode.label()),
            );
        }
        KeyCode::Char('[') => {
            if state.view_mode.shows_reports() && state.embed.active > 0 {
                select_embed_page(state, view_data, internal_tx, state.embed.active - 1);
            }
        }
        KeyCode::Char(']') => {
            if state.view_mode.shows_reports() {
                select_embed_page(state, view_data, internal_tx, state.embed.active + 1);
            }
        }
        KeyCode::Char(digit @ '1'..='6') if state.view_mode.shows_reports() => {
            let index = digit as usize - '1' as usize;
            select_embed_page(state, view_data, internal_tx, index);
        }
        KeyCode::Char('p') if state.view_mode.shows_analysis() => {
            dispatch_and_apply(state, runtime, view_data, internal_tx, AppCommand::PrevPanel);
        }
        KeyCode::Char('n') if state.view_mode.shows_analysis() => {
            dispatch_and_apply(state, runtime, view_data, internal_tx, AppCommand::NextPanel);
        }
        KeyCode::Char('m') if state.view_mode.shows_analysis() => {
            state.dispatch(AppCommand::OpenPanelMenu);
        }
        KeyCode::Up if state.view_mode.shows_analysis() => {
            move_field_cursor(view_data, -1);
        }
        KeyCode::Down if state.view_mode.shows_analysis() => {
            move_field_cursor(view_data, 1);
        }
        KeyCode::Left if state.view_mode.shows_analysis() => {
            let status = view_data
                .session
                .as_mut()
                .and_then(|session| cycle_field(session, -1));
            if let Some(status) = status {
                emit_status(state, view_data, internal_tx, status);
            }
        }
        KeyCode::Right if state.view_mode.shows_analysis() => {
            let status = view_data
                .session
                .as_mut()
                .and_then(|session| cycle_field(session, 1));
            if let Some(status) = status {
                emit_status(state, view_data, internal_tx, status);
            }
        }
        KeyCode::Backspace if state.view_mode.shows_analysis() => {
            let status = view_data.session.as_mut().and_then(remove_at_cursor);
            if let Some(status) = status {
                emit_status(state, view_data, internal_tx, status);
            }
        }
        KeyCode::Enter if state.view_mode.shows_analysis() => {
            activate_field(state, view_data, internal_tx);
        }
        KeyCode::Char('s') if state.view_mode.shows_analysis() => {
            submit_active_panel(state, runtime, view_data, internal_tx);
        }
        KeyCode::Char('r') if state.view_mode.shows_analysis() => {
            reset_active_panel(state, view_data, internal_tx);
        }
        KeyCode::Char('d') if state.view_mode.shows_analysis() => {
            download_scored_csv(state, runtime, view_data, internal_tx);
        }
        _ => {}
    }
    false
}

fn move_field_cursor(view_data: &mut ViewData, delta: isize) {
    let Some(session) = view_data.session.as_mut() else {
        return;
    };
    let count = field_specs(session).len();
    if count == 0 {
        return;
    }
    let next = (session.field_cursor as isize + delta).rem_euclid(count as isize);
    session.field_cursor = next as usize;
}

fn activate_field(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    enum Activation {
        OpenEdit(usize, String),
        Status(String),
        Nothing,
    }

    let activation = match view_data.session.as_mut() {
        Some(session) => {
            let specs = field_specs(session);
            match specs.get(session.field_cursor).map(|spec| spec.control) {
                Some(
                    FieldControl::Text
                    | FieldControl::Path
                    | FieldControl::Integer { .. }
                    | FieldControl::Decimal { .. },
                ) => Activation::OpenEdit(
                    session.field_cursor,
                    field_edit_seed(session, session.field_cursor),
                ),
                Some(FieldControl::Choice | FieldControl::Toggle) => cycle_field(session, 1)
                    .map_or(Activation::Nothing, Activation::Status),
                Some(FieldControl::Action) => {
                    field_action(session).map_or(Activation::Nothing, Activation::Status)
                }
                None => Activation::Nothing,
            }
        }
        None => Activation::Nothing,
    };

    match activation {
        Activation::OpenEdit(field_index, buffer) => {
            view_data.edit = Some(EditUiState {
                field_index,
                buffer,
            });
        }
        Activation::Status(status) => emit_status(state, view_data, internal_tx, status),
        Activation::Nothing => {}
    }
}

fn submit_active_panel<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    // Every panel locks its submit control while a request is in flight;
    // resolution ordering is still last-write-wins with no gating.
    let pending = view_data
        .session
        .as_ref()
        .is_some_and(|session| session.outcome.is_pending());
    if pending {
        emit_status(state, view_data, internal_tx, "analysis already running");
        return;
    }

    let Some(session) = view_data.session.as_mut() else {
        return;
    };
    let Some(form) = session.form.as_ref() else {
        return;
    };

    if let Err(error) = form.validate() {
        session.validation = Some(error.to_string());
        return;
    }
    session.validation = None;

    let submission = match build_submission(form) {
        Ok(submission) => submission,
        Err(message) => {
            session.outcome.resolve_failure(message);
            return;
        }
    };

    session.outcome.begin();
    if let Err(error) = runtime.spawn_submit(submission, internal_tx.clone()) {
        session
            .outcome
            .resolve_failure(failure_display(session.kind, &error.to_string()));
    }
}

/// Upload panels read their file here so a bad path fails before any
/// request is issued; everything else is a plain snapshot of the form.
fn build_submission(form: &PanelForm) -> std::result::Result<PanelSubmission, String> {
    Ok(match form {
        PanelForm::Salary(form) => PanelSubmission::Salary(form.clone()),
        PanelForm::Attrition(form) => PanelSubmission::Attrition(form.clone()),
        PanelForm::WorkforceClustering(form) => PanelSubmission::WorkforceClustering(form.clone()),
        PanelForm::MarketSegmentation(form) => PanelSubmission::MarketSegmentation(form.clone()),
        PanelForm::Financial(form) => PanelSubmission::Financial(form.clone()),
        PanelForm::Competition(form) => PanelSubmission::Competition(form.clone()),
        PanelForm::DemandForecast(form) => PanelSubmission::DemandForecast(*form),
        PanelForm::StrategicSegmentation(form) => {
            PanelSubmission::StrategicSegmentation(form.clone())
        }
        PanelForm::RemotePrediction(form) => PanelSubmission::RemotePrediction(form.clone()),
        PanelForm::PostingClustering(form) => PanelSubmission::PostingClustering(form.clone()),
        PanelForm::SentimentUpload(form) => PanelSubmission::SentimentUpload {
            file_name: form.file_name().to_owned(),
            bytes: read_upload(form)?,
        },
        PanelForm::EmployeeClustering(form) => PanelSubmission::EmployeeClustering(form.clone()),
        PanelForm::SkillAnalysis(form) => PanelSubmission::SkillAnalysis(form.clone()),
        PanelForm::HrUpload(form) => PanelSubmission::HrUpload {
            file_name: form.file_name().to_owned(),
            bytes: read_upload(form)?,
        },
    })
}

fn read_upload(form: &CsvUploadFormInput) -> std::result::Result<Vec<u8>, String> {
    fs::read(&form.file_path).map_err(|error| format!("could not read {}: {error}", form.file_path))
}

fn reset_active_panel(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(session) = view_data.session.as_mut() else {
        return;
    };
    let kind = session.kind;
    session.form = match &session.resources {
        // Reset re-seeds from the already-loaded feature list; it never
        // refetches.
        ResourceState::Ready(PanelResources::ClusterFeatures(features))
            if kind == PanelKind::WorkforceClustering =>
        {
            Some(PanelForm::WorkforceClustering(
                WorkforceClusteringFormInput::seeded(features),
            ))
        }
        _ => PanelForm::default_for(kind),
    };
    session.outcome.reset();
    session.validation = None;
    session.download_note = None;
    session.field_cursor = 0;
    view_data.edit = None;
    emit_status(state, view_data, internal_tx, "form reset");
}

fn download_scored_csv<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(session) = view_data.session.as_mut() else {
        return;
    };
    if session.kind != PanelKind::SentimentAnalysis {
        return;
    }
    let request_id = match session.outcome.success() {
        Some(PanelResult::Sentiment(report)) => report.request_id.clone(),
        _ => None,
    };
    let Some(request_id) = request_id else {
        emit_status(
            state,
            view_data,
            internal_tx,
            "no scored results to download",
        );
        return;
    };
    if let Err(error) =
        runtime.spawn_download(PanelKind::SentimentAnalysis, request_id, internal_tx.clone())
    {
        if let Some(session) = view_data.session.as_mut() {
            session.download_note = Some(format!("download failed: {error}"));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldControl {
    Text,
    Path,
    Integer { min: i64, max: i64 },
    Decimal { min: f64, max: f64, step: f64 },
    Choice,
    Toggle,
    Action,
}

#[derive(Debug, Clone, PartialEq)]
struct FieldSpec {
    label: String,
    control: FieldControl,
    required: bool,
}

impl FieldSpec {
    fn new(label: impl Into<String>, control: FieldControl, required: bool) -> Self {
        Self {
            label: label.into(),
            control,
            required,
        }
    }
}

fn text(label: &str, required: bool) -> FieldSpec {
    FieldSpec::new(label, FieldControl::Text, required)
}

fn choice(label: &str, required: bool) -> FieldSpec {
    FieldSpec::new(label, FieldControl::Choice, required)
}

fn integer(label: &str, min: i64, max: i64) -> FieldSpec {
    FieldSpec::new(label, FieldControl::Integer { min, max }, false)
}

fn decimal(label: &str, min: f64, max: f64, step: f64) -> FieldSpec {
    FieldSpec::new(label, FieldControl::Decimal { min, max, step }, false)
}

const MONEY_MAX: f64 = 1_000_000.0;

fn field_specs(session: &PanelSession) -> Vec<FieldSpec> {
    let Some(form) = session.form.as_ref() else {
        return Vec::new();
    };
    match form {
        PanelForm::Salary(_) => vec![
            FieldSpec::new("age", FieldControl::Integer { min: 18, max: 70 }, true),
            choice("gender", true),
            choice("education level", true),
            choice("job title", true),
            FieldSpec::new(
                "years of experience",
                FieldControl::Integer { min: 0, max: 40 },
                true,
            ),
        ],
        PanelForm::Attrition(_) => vec![
            integer("age", 0, 100),
            integer("monthly income", 0, 1_000_000),
            integer("years at company", 0, 60),
            integer("distance from home", 0, 500),
            integer("number of promotions", 0, 20),
            integer("number of dependents", 0, 20),
            choice("company reputation", false),
            choice("job role", false),
            choice("job level", false),
            choice("company size", false),
            choice("education level", false),
            choice("gender", false),
            choice("marital status", false),
            choice("work-life balance", false),
            choice("job satisfaction", false),
            choice("performance rating", false),
            choice("employee recognition", false),
            choice("overtime", false),
            choice("remote work", false),
            choice("leadership opportunities", false),
            choice("innovation opportunities", false),
        ],
        PanelForm::WorkforceClustering(form) => {
            let mut specs = Vec::new();
            for feature in &form.guided {
                specs.push(decimal(&guided_feature_label(&feature.name), 0.0, 5.0, 0.1));
            }
            for index in 0..form.extra.len() {
                specs.push(choice(&format!("extra feature {}", index + 1), false));
                specs.push(decimal(&format!("extra weight {}", index + 1), 0.0, 5.0, 0.1));
            }
            specs.push(FieldSpec::new(
                "add feature row",
                FieldControl::Action,
                false,
            ));
            specs
        }
        PanelForm::MarketSegmentation(_) => vec![
            text("job title", true),
            text("description", true),
            choice("category", false),
            integer("connects", 0, 1_000_000),
            integer("new connects", 0, 1_000_000),
            decimal("spent (USD)", 0.0, MONEY_MAX, 10.0),
            decimal("start rate", 0.0, MONEY_MAX, 1.0),
            decimal("end rate", 0.0, MONEY_MAX, 1.0),
            text("duration", false),
            choice("workload", false),
            choice("payment type", false),
        ],
        PanelForm::Financial(_) => vec![
            text("job title", true),
            text("description", true),
            text("search keyword", false),
            choice("category", false),
            decimal("start rate", 0.0, MONEY_MAX, 1.0),
            integer("connects", 0, 1_000_000),
            integer("applicants min", 0, 1_000_000),
            integer("applicants max", 0, 1_000_000),
            integer("duration min (days)", 0, 3_650),
            integer("duration max (days)", 0, 3_650),
            choice("workload", false),
            choice("experience level", false),
            text("country", false),
            choice("payment type", false),
        ],
        PanelForm::Competition(_) => vec![
            text("job title", true),
            text("description", true),
            text("search keyword", false),
            choice("category", false),
            decimal("budget (USD)", 0.0, MONEY_MAX, 10.0),
        ],
        PanelForm::DemandForecast(_) => vec![
            FieldSpec::new("python", FieldControl::Toggle, false),
            FieldSpec::new("sql", FieldControl::Toggle, false),
            FieldSpec::new("r", FieldControl::Toggle, false),
        ],
        PanelForm::StrategicSegmentation(_) => vec![
            integer("job volume", 0, 1_000_000),
            decimal("skill richness", 0.0, 1_000_000.0, 0.1),
        ],
        PanelForm::RemotePrediction(_) | PanelForm::PostingClustering(_) => vec![
            text("job title", false),
            text("company", false),
            text("skills", false),
            text("country", false),
        ],
        PanelForm::SentimentUpload(_) | PanelForm::HrUpload(_) => {
            vec![FieldSpec::new("csv file path", FieldControl::Path, true)]
        }
        PanelForm::EmployeeClustering(_) => vec![
            FieldSpec::new(
                "monthly income",
                FieldControl::Integer {
                    min: 0,
                    max: 1_000_000,
                },
                true,
            ),
            FieldSpec::new("age", FieldControl::Integer { min: 0, max: 100 }, true),
            FieldSpec::new(
                "years at company",
                FieldControl::Integer { min: 0, max: 60 },
                true,
            ),
            choice("work-life balance (1-5)", true),
            choice("job satisfaction (1-5)", true),
            choice("employee recognition (1-5)", true),
            choice("overtime", true),
            choice("leadership opportunities", true),
            choice("innovation opportunities", true),
            choice("remote work", true),
            integer("number of dependents", 0, 20),
            integer("distance from home", 0, 500),
        ],
        PanelForm::SkillAnalysis(_) => vec![
            text("name", false),
            text("email", false),
            text("add skill", false),
            FieldSpec::new("skills", FieldControl::Action, true),
            text("location", false),
            choice("desired role", false),
        ],
    }
}

fn guided_feature_label(key: &str) -> String {
    jobdeck_app::GUIDED_CLUSTER_FEATURES
        .iter()
        .find(|(feature_key, _)| *feature_key == key)
        .map_or_else(|| key.to_owned(), |(_, label)| (*label).to_owned())
}

fn optional_i64(value: Option<i64>) -> String {
    value.map_or_else(|| "--".to_owned(), |value| value.to_string())
}

fn optional_label(value: Option<&str>) -> String {
    value.map_or_else(|| "--".to_owned(), str::to_owned)
}

fn checkbox(value: bool) -> String {
    if value { "[x]".to_owned() } else { "[ ]".to_owned() }
}

fn field_display(session: &PanelSession, index: usize) -> String {
    let Some(form) = session.form.as_ref() else {
        return String::new();
    };
    match form {
        PanelForm::Salary(form) => match index {
            0 => form.age.to_string(),
            1 => placeholder_or(&form.gender, "select gender..."),
            2 => placeholder_or(&form.education_level, "select education..."),
            3 => placeholder_or(&form.job_title, "select job title..."),
            4 => format!("{} years", form.years_of_experience),
            _ => String::new(),
        },
        PanelForm::Attrition(form) => match index {
            0 => form.age.to_string(),
            1 => form.monthly_income.to_string(),
            2 => form.years_at_company.to_string(),
            3 => form.distance_from_home.to_string(),
            4 => form.number_of_promotions.to_string(),
            5 => form.number_of_dependents.to_string(),
            6 => form.company_reputation.as_str().to_owned(),
            7 => form.job_role.as_str().to_owned(),
            8 => form.job_level.as_str().to_owned(),
            9 => form.company_size.as_str().to_owned(),
            10 => form.education_level.as_str().to_owned(),
            11 => form.gender.as_str().to_owned(),
            12 => form.marital_status.as_str().to_owned(),
            13 => form.work_life_balance.as_str().to_owned(),
            14 => form.job_satisfaction.as_str().to_owned(),
            15 => form.performance_rating.as_str().to_owned(),
            16 => form.employee_recognition.as_str().to_owned(),
            17 => form.overtime.as_str().to_owned(),
            18 => form.remote_work.as_str().to_owned(),
            19 => form.leadership_opportunities.as_str().to_owned(),
            20 => form.innovation_opportunities.as_str().to_owned(),
            _ => String::new(),
        },
        PanelForm::WorkforceClustering(form) => {
            if index < form.guided.len() {
                return format!("{:.1}", form.guided[index].value);
            }
            let offset = index - form.guided.len();
            let row = offset / 2;
            match form.extra.get(row) {
                Some(feature) if offset % 2 == 0 => feature.name.clone(),
                Some(feature) => format!("{:.1}", feature.value),
                None => "press enter".to_owned(),
            }
        }
        PanelForm::MarketSegmentation(form) => match index {
            0 => form.job_title.clone(),
            1 => form.description.clone(),
            2 => form.category_name.clone(),
            3 => form.connects_num.to_string(),
            4 => form.new_connects_num.to_string(),
            5 => format!("{:.0}", form.spent_usd),
            6 => format!("{:.0}", form.start_rate),
            7 => format!("{:.0}", form.end_rate),
            8 => form.duration.clone(),
            9 => form.workload.label().to_owned(),
            10 => form.payment_type.as_str().to_owned(),
            _ => String::new(),
        },
        PanelForm::Financial(form) => match index {
            0 => form.job_title.clone(),
            1 => form.description.clone(),
            2 => form.search_keyword.clone(),
            3 => short_category_label(&form.category_name),
            4 => format!("{:.0}", form.start_rate),
            5 => form.connects_num.to_string(),
            6 => form.applicants_num_min.to_string(),
            7 => form.applicants_num_max.to_string(),
            8 => form.duration_min.to_string(),
            9 => form.duration_max.to_string(),
            10 => form.workload.label().to_owned(),
            11 => form.ex_level_demand.as_str().to_owned(),
            12 => form.country_name.clone(),
            13 => form.payment_type.as_str().to_owned(),
            _ => String::new(),
        },
        PanelForm::Competition(form) => match index {
            0 => form.job_title.clone(),
            1 => form.description.clone(),
            2 => form.search_keyword.clone(),
            3 => short_category_label(&form.category_name),
            4 => format!("{:.0}", form.spent_usd),
            _ => String::new(),
        },
        PanelForm::DemandForecast(form) => match index {
            0 => checkbox(form.python),
            1 => checkbox(form.sql),
            2 => checkbox(form.r),
            _ => String::new(),
        },
        PanelForm::StrategicSegmentation(form) => match index {
            0 => form.num_jobs.to_string(),
            1 => format!("{:.1}", form.skill_richness),
            _ => String::new(),
        },
        PanelForm::RemotePrediction(form) | PanelForm::PostingClustering(form) => match index {
            0 => form.job_title.clone(),
            1 => form.company.clone(),
            2 => form.skills.clone(),
            3 => form.country.clone(),
            _ => String::new(),
        },
        PanelForm::SentimentUpload(form) | PanelForm::HrUpload(form) => match index {
            0 => placeholder_or(&form.file_path, "enter a .csv path"),
            _ => String::new(),
        },
        PanelForm::EmployeeClustering(form) => match index {
            0 => optional_i64(form.monthly_income),
            1 => optional_i64(form.age),
            2 => optional_i64(form.years_at_company),
            3 => optional_i64(form.work_life_balance),
            4 => optional_i64(form.job_satisfaction),
            5 => optional_i64(form.employee_recognition),
            6 => optional_label(form.overtime.map(jobdeck_app::YesNo::as_str)),
            7 => optional_label(form.leadership.map(jobdeck_app::YesNo::as_str)),
            8 => optional_label(form.innovation.map(jobdeck_app::YesNo::as_str)),
            9 => optional_label(form.remote_work.map(jobdeck_app::YesNo::as_str)),
            10 => form.dependents.to_string(),
            11 => form.distance.to_string(),
            _ => String::new(),
        },
        PanelForm::SkillAnalysis(form) => match index {
            0 => form.name.clone(),
            1 => form.email.clone(),
            2 => form.current_skill.clone(),
            3 => {
                if form.skills.is_empty() {
                    "none yet".to_owned()
                } else {
                    form.skills.join(", ")
                }
            }
            4 => form.location.clone(),
            5 => form.desired_role.clone(),
            _ => String::new(),
        },
    }
}

fn placeholder_or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("({placeholder})")
    } else {
        value.to_owned()
    }
}

fn short_category_label(value: &str) -> String {
    jobdeck_app::SHORT_CATEGORY_OPTIONS
        .iter()
        .find(|(_, wire)| *wire == value)
        .map_or_else(|| value.to_owned(), |(label, _)| (*label).to_owned())
}

/// Seed for the inline editor: the raw current value, never a placeholder.
fn field_edit_seed(session: &PanelSession, index: usize) -> String {
    let Some(form) = session.form.as_ref() else {
        return String::new();
    };
    match form {
        PanelForm::Salary(form) => match index {
            0 => form.age.to_string(),
            4 => form.years_of_experience.to_string(),
            _ => field_display(session, index),
        },
        PanelForm::SentimentUpload(form) | PanelForm::HrUpload(form) => form.file_path.clone(),
        PanelForm::EmployeeClustering(form) => match index {
            0 => form.monthly_income.map_or_else(String::new, |v| v.to_string()),
            1 => form.age.map_or_else(String::new, |v| v.to_string()),
            2 => form
                .years_at_company
                .map_or_else(String::new, |v| v.to_string()),
            10 => form.dependents.to_string(),
            11 => form.distance.to_string(),
            _ => field_display(session, index),
        },
        PanelForm::SkillAnalysis(form) => match index {
            2 => form.current_skill.clone(),
            _ => field_display(session, index),
        },
        _ => field_display(session, index),
    }
}

fn note_field_edited(session: &mut PanelSession) {
    // Editing clears a shown error; a prior success stays visible until
    // the next submission resolves.
    session.validation = None;
    session.outcome.clear_failure();
}

fn parse_int_input(input: &str, min: i64, max: i64) -> i64 {
    clamp_int(input.trim().parse::<i64>().unwrap_or(min), min, max)
}

fn parse_float_input(input: &str, min: f64, max: f64) -> f64 {
    clamp_float(input.trim().parse::<f64>().unwrap_or(min), min, max)
}

fn commit_field_text(session: &mut PanelSession, index: usize, input: &str) -> String {
    let specs = field_specs(session);
    let Some(spec) = specs.get(index).cloned() else {
        return "field unavailable".to_owned();
    };
    let Some(form) = session.form.as_mut() else {
        return "field unavailable".to_owned();
    };

    match form {
        PanelForm::Salary(form) => match index {
            0 => form.age = parse_int_input(input, 18, 70),
            4 => form.years_of_experience = parse_int_input(input, 0, 40),
            _ => return format!("use left/right to pick {}", spec.label),
        },
        PanelForm::Attrition(form) => match index {
            0 => form.age = parse_int_input(input, 0, 100),
            1 => form.monthly_income = parse_int_input(input, 0, 1_000_000),
            2 => form.years_at_company = parse_int_input(input, 0, 60),
            3 => form.distance_from_home = parse_int_input(input, 0, 500),
            4 => form.number_of_promotions = parse_int_input(input, 0, 20),
            5 => form.number_of_dependents = parse_int_input(input, 0, 20),
            _ => return format!("use left/right to pick {}", spec.label),
        },
        PanelForm::WorkforceClustering(form) => {
            let guided_len = form.guided.len();
            if index < guided_len {
                form.guided[index].value = parse_float_input(input, 0.0, 5.0);
            } else {
                let offset = index - guided_len;
                let row = offset / 2;
                match form.extra.get_mut(row) {
                    Some(feature) if offset % 2 == 1 => {
                        feature.value = parse_float_input(input, 0.0, 5.0);
                    }
                    _ => return format!("use left/right to pick {}", spec.label),
                }
            }
        }
        PanelForm::MarketSegmentation(form) => match index {
            0 => form.job_title = input.to_owned(),
            1 => form.description = input.to_owned(),
            3 => form.connects_num = parse_int_input(input, 0, 1_000_000),
            4 => form.new_connects_num = parse_int_input(input, 0, 1_000_000),
            5 => form.spent_usd = parse_float_input(input, 0.0, MONEY_MAX),
            6 => form.start_rate = parse_float_input(input, 0.0, MONEY_MAX),
            7 => form.end_rate = parse_float_input(input, 0.0, MONEY_MAX),
            8 => form.duration = input.to_owned(),
            _ => return format!("use left/right to pick {}", spec.label),
        },
        PanelForm::Financial(form) => match index {
            0 => form.job_title = input.to_owned(),
            1 => form.description = input.to_owned(),
            2 => form.search_keyword = input.to_owned(),
            4 => form.start_rate = parse_float_input(input, 0.0, MONEY_MAX),
            5 => form.connects_num = parse_int_input(input, 0, 1_000_000),
            6 => form.applicants_num_min = parse_int_input(input, 0, 1_000_000),
            7 => form.applicants_num_max = parse_int_input(input, 0, 1_000_000),
            8 => form.duration_min = parse_int_input(input, 0, 3_650),
            9 => form.duration_max = parse_int_input(input, 0, 3_650),
            12 => form.country_name = input.to_owned(),
            _ => return format!("use left/right to pick {}", spec.label),
        },
        PanelForm::Competition(form) => match index {
            0 => form.job_title = input.to_owned(),
            1 => form.description = input.to_owned(),
            2 => form.search_keyword = input.to_owned(),
            4 => form.spent_usd = parse_float_input(input, 0.0, MONEY_MAX),
            _ => return format!("use left/right to pick {}", spec.label),
        },
        PanelForm::DemandForecast(_) => {
            return format!("use enter to toggle {}", spec.label);
        }
        PanelForm::StrategicSegmentation(form) => match index {
            0 => form.num_jobs = parse_int_input(input, 0, 1_000_000),
            1 => form.skill_richness = parse_float_input(input, 0.0, 1_000_000.0),
            _ => return "field unavailable".to_owned(),
        },
        PanelForm::RemotePrediction(form) | PanelForm::PostingClustering(form) => match index {
            0 => form.job_title = input.to_owned(),
            1 => form.company = input.to_owned(),
            2 => form.skills = input.to_owned(),
            3 => form.country = input.to_owned(),
            _ => return "field unavailable".to_owned(),
        },
        PanelForm::SentimentUpload(form) | PanelForm::HrUpload(form) => {
            form.file_path = input.trim().to_owned();
        }
        PanelForm::EmployeeClustering(form) => match index {
            0 => form.monthly_income = Some(parse_int_input(input, 0, 1_000_000)),
            1 => form.age = Some(parse_int_input(input, 0, 100)),
            2 => form.years_at_company = Some(parse_int_input(input, 0, 60)),
            10 => form.dependents = parse_int_input(input, 0, 20),
            11 => form.distance = parse_int_input(input, 0, 500),
            _ => return format!("use left/right to pick {}", spec.label),
        },
        PanelForm::SkillAnalysis(form) => match index {
            0 => form.name = input.to_owned(),
            1 => form.email = input.to_owned(),
            2 => {
                form.current_skill = input.to_owned();
                form.add_current_skill();
                note_field_edited(session);
                return "skill added".to_owned();
            }
            4 => form.location = input.to_owned(),
            5 => form.desired_role = input.to_owned(),
            _ => return format!("use enter on {}", spec.label),
        },
    }

    note_field_edited(session);
    format!("{} updated", spec.label)
}

fn cycle_index(position: Option<usize>, len: usize, delta: i64) -> usize {
    let current = position.map_or(-1, |index| index as i64);
    (current + delta).rem_euclid(len as i64) as usize
}

fn cycle_str_option(current: &str, options: &[&str], delta: i64) -> String {
    let position = options.iter().position(|option| *option == current);
    options[cycle_index(position, options.len(), delta)].to_owned()
}

fn cycle_enum<T: Copy + PartialEq>(current: T, all: &[T], delta: i64) -> T {
    let position = all.iter().position(|option| *option == current);
    all[cycle_index(position, all.len(), delta)]
}

fn cycle_optional_enum<T: Copy + PartialEq>(current: Option<T>, all: &[T], delta: i64) -> T {
    match current {
        Some(value) => cycle_enum(value, all, delta),
        None => all[0],
    }
}

const RATING_CHOICES: [i64; 5] = [1, 2, 3, 4, 5];

/// Left/right handling for the field under the cursor: choices and
/// toggles cycle, numerics step. Returns a status line when something
/// changed.
fn cycle_field(session: &mut PanelSession, delta: i64) -> Option<String> {
    use jobdeck_app::{
        BinaryGender, CompanySize, EducationTier, EngagementLevel, ExperienceLevel, JobLevel,
        JobRole, MaritalStatus, PaymentType, PerformanceRating, ReputationLevel,
        WorkLifeBalance, Workload, YesNo,
    };

    let index = session.field_cursor;
    let specs = field_specs(session);
    let spec = specs.get(index)?.clone();
    let resources = session.resources.clone();
    let form = session.form.as_mut()?;

    match form {
        PanelForm::Salary(form) => match index {
            0 => form.age = clamp_int(form.age + delta, 18, 70),
            1 => form.gender = cycle_str_option(&form.gender, &jobdeck_app::GENDER_OPTIONS, delta),
            2 => {
                form.education_level =
                    cycle_str_option(&form.education_level, &jobdeck_app::EDUCATION_OPTIONS, delta);
            }
            3 => {
                form.job_title =
                    cycle_str_option(&form.job_title, &jobdeck_app::JOB_TITLE_OPTIONS, delta);
            }
            4 => form.years_of_experience = clamp_int(form.years_of_experience + delta, 0, 40),
            _ => return None,
        },
        PanelForm::Attrition(form) => match index {
            0 => form.age = clamp_int(form.age + delta, 0, 100),
            1 => form.monthly_income = clamp_int(form.monthly_income + delta * 100, 0, 1_000_000),
            2 => form.years_at_company = clamp_int(form.years_at_company + delta, 0, 60),
            3 => form.distance_from_home = clamp_int(form.distance_from_home + delta, 0, 500),
            4 => form.number_of_promotions = clamp_int(form.number_of_promotions + delta, 0, 20),
            5 => form.number_of_dependents = clamp_int(form.number_of_dependents + delta, 0, 20),
            6 => {
                form.company_reputation =
                    cycle_enum(form.company_reputation, &ReputationLevel::ALL, delta);
            }
            7 => form.job_role = cycle_enum(form.job_role, &JobRole::ALL, delta),
            8 => form.job_level = cycle_enum(form.job_level, &JobLevel::ALL, delta),
            9 => form.company_size = cycle_enum(form.company_size, &CompanySize::ALL, delta),
            10 => {
                form.education_level = cycle_enum(form.education_level, &EducationTier::ALL, delta);
            }
            11 => form.gender = cycle_enum(form.gender, &BinaryGender::ALL, delta),
            12 => form.marital_status = cycle_enum(form.marital_status, &MaritalStatus::ALL, delta),
            13 => {
                form.work_life_balance =
                    cycle_enum(form.work_life_balance, &WorkLifeBalance::ALL, delta);
            }
            14 => {
                form.job_satisfaction =
                    cycle_enum(form.job_satisfaction, &EngagementLevel::ALL, delta);
            }
            15 => {
                form.performance_rating =
                    cycle_enum(form.performance_rating, &PerformanceRating::ALL, delta);
            }
            16 => {
                form.employee_recognition =
                    cycle_enum(form.employee_recognition, &EngagementLevel::ALL, delta);
            }
            17 => form.overtime = cycle_enum(form.overtime, &YesNo::ALL, delta),
            18 => form.remote_work = cycle_enum(form.remote_work, &YesNo::ALL, delta),
            19 => {
                form.leadership_opportunities =
                    cycle_enum(form.leadership_opportunities, &YesNo::ALL, delta);
            }
            20 => {
                form.innovation_opportunities =
                    cycle_enum(form.innovation_opportunities, &YesNo::ALL, delta);
            }
            _ => return None,
        },
        PanelForm::WorkforceClustering(form) => {
            let guided_len = form.guided.len();
            if index < guided_len {
                let value = form.guided[index].value;
                form.guided[index].value = clamp_float(value + delta as f64 * 0.1, 0.0, 5.0);
            } else {
                let offset = index - guided_len;
                let row = offset / 2;
                if offset % 2 == 0 {
                    let ResourceState::Ready(PanelResources::ClusterFeatures(available)) =
                        &resources
                    else {
                        return Some("feature list not loaded".to_owned());
                    };
                    let names: Vec<&str> = available.iter().map(String::as_str).collect();
                    let feature = form.extra.get_mut(row)?;
                    feature.name = cycle_str_option(&feature.name, &names, delta);
                } else {
                    let feature = form.extra.get_mut(row)?;
                    feature.value = clamp_float(feature.value + delta as f64 * 0.1, 0.0, 5.0);
                }
            }
        }
        PanelForm::MarketSegmentation(form) => match index {
            2 => {
                form.category_name = cycle_str_option(
                    &form.category_name,
                    &jobdeck_app::SEGMENTATION_CATEGORY_OPTIONS,
                    delta,
                );
            }
            3 => form.connects_num = clamp_int(form.connects_num + delta, 0, 1_000_000),
            4 => form.new_connects_num = clamp_int(form.new_connects_num + delta, 0, 1_000_000),
            5 => form.spent_usd = clamp_float(form.spent_usd + delta as f64 * 10.0, 0.0, MONEY_MAX),
            6 => form.start_rate = clamp_float(form.start_rate + delta as f64, 0.0, MONEY_MAX),
            7 => form.end_rate = clamp_float(form.end_rate + delta as f64, 0.0, MONEY_MAX),
            9 => form.workload = cycle_enum(form.workload, &Workload::ALL, delta),
            10 => form.payment_type = cycle_enum(form.payment_type, &PaymentType::ALL, delta),
            _ => return None,
        },
        PanelForm::Financial(form) => match index {
            3 => form.category_name = cycle_short_category(&form.category_name, delta),
            4 => form.start_rate = clamp_float(form.start_rate + delta as f64, 0.0, MONEY_MAX),
            5 => form.connects_num = clamp_int(form.connects_num + delta, 0, 1_000_000),
            6 => {
                form.applicants_num_min = clamp_int(form.applicants_num_min + delta, 0, 1_000_000);
            }
            7 => {
                form.applicants_num_max = clamp_int(form.applicants_num_max + delta, 0, 1_000_000);
            }
            8 => form.duration_min = clamp_int(form.duration_min + delta, 0, 3_650),
            9 => form.duration_max = clamp_int(form.duration_max + delta, 0, 3_650),
            10 => form.workload = cycle_enum(form.workload, &Workload::KNOWN, delta),
            11 => {
                form.ex_level_demand =
                    cycle_enum(form.ex_level_demand, &ExperienceLevel::ALL, delta);
            }
            13 => form.payment_type = cycle_enum(form.payment_type, &PaymentType::KNOWN, delta),
            _ => return None,
        },
        PanelForm::Competition(form) => match index {
            3 => form.category_name = cycle_short_category(&form.category_name, delta),
            4 => form.spent_usd = clamp_float(form.spent_usd + delta as f64 * 10.0, 0.0, MONEY_MAX),
            _ => return None,
        },
        PanelForm::DemandForecast(form) => match index {
            0 => form.python = !form.python,
            1 => form.sql = !form.sql,
            2 => form.r = !form.r,
            _ => return None,
        },
        PanelForm::StrategicSegmentation(form) => match index {
            0 => form.num_jobs = clamp_int(form.num_jobs + delta, 0, 1_000_000),
            1 => {
                form.skill_richness =
                    clamp_float(form.skill_richness + delta as f64 * 0.1, 0.0, 1_000_000.0);
            }
            _ => return None,
        },
        PanelForm::RemotePrediction(_) | PanelForm::PostingClustering(_) => return None,
        PanelForm::SentimentUpload(_) | PanelForm::HrUpload(_) => return None,
        PanelForm::EmployeeClustering(form) => match index {
            0 => {
                form.monthly_income =
                    Some(clamp_int(form.monthly_income.unwrap_or(0) + delta * 100, 0, 1_000_000));
            }
            1 => form.age = Some(clamp_int(form.age.unwrap_or(0) + delta, 0, 100)),
            2 => {
                form.years_at_company =
                    Some(clamp_int(form.years_at_company.unwrap_or(0) + delta, 0, 60));
            }
            3 => {
                form.work_life_balance =
                    Some(cycle_optional_enum(form.work_life_balance, &RATING_CHOICES, delta));
            }
            4 => {
                form.job_satisfaction =
                    Some(cycle_optional_enum(form.job_satisfaction, &RATING_CHOICES, delta));
            }
            5 => {
                form.employee_recognition = Some(cycle_optional_enum(
                    form.employee_recognition,
                    &RATING_CHOICES,
                    delta,
                ));
            }
            6 => form.overtime = Some(cycle_optional_enum(form.overtime, &YesNo::ALL, delta)),
            7 => form.leadership = Some(cycle_optional_enum(form.leadership, &YesNo::ALL, delta)),
            8 => form.innovation = Some(cycle_optional_enum(form.innovation, &YesNo::ALL, delta)),
            9 => {
                form.remote_work = Some(cycle_optional_enum(form.remote_work, &YesNo::ALL, delta));
            }
            10 => form.dependents = clamp_int(form.dependents + delta, 0, 20),
            11 => form.distance = clamp_int(form.distance + delta, 0, 500),
            _ => return None,
        },
        PanelForm::SkillAnalysis(form) => match index {
            5 => {
                let ResourceState::Ready(PanelResources::SkillLists { job_titles, .. }) =
                    &resources
                else {
                    return Some("role suggestions not loaded".to_owned());
                };
                if job_titles.is_empty() {
                    return Some("role suggestions not loaded".to_owned());
                }
                let titles: Vec<&str> = job_titles.iter().map(String::as_str).collect();
                form.desired_role = cycle_str_option(&form.desired_role, &titles, delta);
            }
            _ => return None,
        },
    }

    note_field_edited(session);
    let value = field_display(session, index);
    Some(format!("{}: {value}", spec.label))
}

fn cycle_short_category(current: &str, delta: i64) -> String {
    let values: Vec<&str> = jobdeck_app::SHORT_CATEGORY_OPTIONS
        .iter()
        .map(|(_, wire)| *wire)
        .collect();
    cycle_str_option(current, &values, delta)
}

/// Enter on an action field: add a clustering feature row, or (on the
/// skill list) remove the most recently added skill.
fn field_action(session: &mut PanelSession) -> Option<String> {
    let index = session.field_cursor;
    let resources = session.resources.clone();
    let form = session.form.as_mut()?;

    match form {
        PanelForm::WorkforceClustering(form) => {
            let action_index = form.guided.len() + form.extra.len() * 2;
            if index != action_index {
                return None;
            }
            let ResourceState::Ready(PanelResources::ClusterFeatures(available)) = &resources
            else {
                return Some("feature list not loaded".to_owned());
            };
            let first = available.first()?;
            form.extra.push(FeatureWeight::new(first.clone(), 3.0));
            note_field_edited(session);
            Some("feature row added".to_owned())
        }
        PanelForm::SkillAnalysis(form) => {
            if index != 3 {
                return None;
            }
            let removed = form.skills.last().cloned()?;
            form.remove_skill(&removed);
            note_field_edited(session);
            Some(format!("removed {removed}"))
        }
        _ => None,
    }
}

/// Backspace outside edit mode: delete the extra feature row under the
/// cursor, or pop the last skill.
fn remove_at_cursor(session: &mut PanelSession) -> Option<String> {
    let index = session.field_cursor;
    let form = session.form.as_mut()?;

    match form {
        PanelForm::WorkforceClustering(form) => {
            let guided_len = form.guided.len();
            if index < guided_len {
                return None;
            }
            let offset = index - guided_len;
            let row = offset / 2;
            if row >= form.extra.len() {
                return None;
            }
            let removed = form.extra.remove(row);
            session.field_cursor = session.field_cursor.min(guided_len);
            note_field_edited(session);
            Some(format!("removed {}", removed.name))
        }
        PanelForm::SkillAnalysis(form) => {
            if index != 3 {
                return None;
            }
            let removed = form.skills.pop()?;
            note_field_edited(session);
            Some(format!("removed {removed}"))
        }
        _ => None,
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);

    match state.view_mode {
        ViewMode::Reports => render_reports_pane(frame, chunks[1], state),
        ViewMode::Analysis => render_analysis_pane(frame, chunks[1], state, view_data),
        ViewMode::Split => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[1]);
            render_reports_pane(frame, panes[0], state);
            render_analysis_pane(frame, panes[1], state, view_data);
        }
    }

    render_status_bar(frame, chunks[2], state, view_data);

    if state.panels.menu_open {
        render_menu_overlay(frame, state);
    }
    if let Some(edit) = &view_data.edit {
        render_edit_overlay(frame, view_data, edit);
    }
    if view_data.help_visible {
        render_help_overlay(frame);
    }
}

fn render_header(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let selected = ViewMode::ALL
        .iter()
        .position(|mode| *mode == state.view_mode)
        .unwrap_or(0);
    let tabs = Tabs::new(ViewMode::ALL.map(ViewMode::label).to_vec())
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" jobdeck -- job market & HR analytics "),
        );
    frame.render_widget(tabs, area);
}

fn render_reports_pane(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" business intelligence ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(EMBED_PAGES.len() as u16), Constraint::Min(0)])
        .split(inner);

    let mut page_lines = Vec::new();
    for (index, page) in EMBED_PAGES.iter().enumerate() {
        let marker = if index == state.embed.active { ">" } else { " " };
        let style = if index == state.embed.active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        page_lines.push(Line::styled(
            format!("{marker} {}. {}", index + 1, page.title),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(page_lines), chunks[0]);

    let page = &EMBED_PAGES[state.embed.active];
    let frame_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", page.title));
    if state.embed.loading {
        frame.render_widget(
            Paragraph::new("\n  loading report...")
                .block(frame_block)
                .style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
        return;
    }

    let body = vec![
        Line::raw(""),
        Line::raw(format!("  {}", page.description)),
        Line::raw(""),
        Line::styled(
            format!("  source: {}", page.embed_url),
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::raw("  (embedded viewer renders here; the source URL is used verbatim)"),
    ];
    frame.render_widget(
        Paragraph::new(body).block(frame_block).wrap(Wrap { trim: false }),
        chunks[1],
    );
}

fn render_analysis_pane(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let list = master_list();
    let position = format!(" analysis [{}/{}] ", state.panels.active + 1, list.len());
    let block = Block::default().borders(Borders::ALL).title(position);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    if let Some(descriptor) = list.get(state.panels.active) {
        let header = vec![
            Line::styled(
                format!("{} {}", descriptor.icon, descriptor.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                descriptor.description.to_owned(),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(header), chunks[0]);
    }

    let Some(session) = view_data.session.as_ref() else {
        return;
    };

    let mut lines: Vec<Line<'_>> = Vec::new();

    if session.form.is_none() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "coming soon",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(lines), chunks[1]);
        return;
    }

    match &session.resources {
        ResourceState::Loading => {
            lines.push(Line::styled(
                "loading panel data...",
                Style::default().fg(Color::DarkGray),
            ));
        }
        ResourceState::Failed(message) => {
            lines.push(Line::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ));
        }
        _ => {}
    }

    let specs = field_specs(session);
    for (index, spec) in specs.iter().enumerate() {
        let marker = if index == session.field_cursor { ">" } else { " " };
        let required = if spec.required { "*" } else { " " };
        let value = field_display(session, index);
        let style = if index == session.field_cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!("{marker}{required}{:<26} {value}", spec.label),
            style,
        ));
    }

    lines.push(Line::raw(""));

    if let Some(message) = &session.validation {
        lines.push(Line::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    match &session.outcome {
        RequestOutcome::Idle => {
            if session.validation.is_none() {
                lines.push(Line::styled(
                    "run analysis to see results",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        RequestOutcome::Pending => {
            lines.push(Line::styled(
                "analyzing...",
                Style::default().fg(Color::Cyan),
            ));
        }
        RequestOutcome::Failure(message) => {
            for part in message.lines() {
                lines.push(Line::styled(
                    part.to_owned(),
                    Style::default().fg(Color::Red),
                ));
            }
        }
        RequestOutcome::Success(result) => {
            for line in result_lines(result) {
                lines.push(Line::raw(line));
            }
        }
    }

    if let Some(note) = &session.download_note {
        lines.push(Line::styled(
            note.clone(),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[1],
    );
}

fn result_lines(result: &PanelResult) -> Vec<String> {
    match result {
        PanelResult::Salary(prediction) => {
            let mut lines = vec![
                format!("predicted salary: {}", prediction.salary),
                format!("confidence: {}", prediction.confidence),
                "key drivers:".to_owned(),
            ];
            lines.extend(
                prediction
                    .key_drivers
                    .iter()
                    .map(|driver| format!("  - {driver}")),
            );
            lines.push(format!("insight: {}", prediction.business_insight));
            lines
        }
        PanelResult::Attrition(prediction) => {
            vec![format!("attrition risk: {}", prediction.risk_label())]
        }
        PanelResult::WorkforceCluster(cluster) => {
            let mut lines = vec![
                format!("cluster {}: {}", cluster.cluster_id, cluster.name),
                format!("archetype: {}  cohesion: {}", cluster.archetype, cluster.cohesion),
                format!(
                    "size: {}  silhouette: {:.3}",
                    cluster.size, cluster.mean_silhouette
                ),
                cluster.interpretation.clone(),
                "top features:".to_owned(),
            ];
            lines.extend(
                cluster
                    .top_features
                    .iter()
                    .take(10)
                    .map(|feature| format!("  - {feature}")),
            );
            lines
        }
        PanelResult::MarketSegment(segment) => {
            let mut lines = vec![format!("cluster profile: {}", segment.cluster_profile)];
            if let Some(summary) = &segment.summary {
                lines.push(summary.clone());
            }
            if let Some(confidence) = &segment.confidence {
                lines.push(format!("confidence: {confidence}"));
            }
            if !segment.recommendations.is_empty() {
                lines.push("recommendations:".to_owned());
                lines.extend(
                    segment
                        .recommendations
                        .iter()
                        .map(|entry| format!("  - {entry}")),
                );
            }
            lines
        }
        PanelResult::Financial(forecast) => {
            let mut lines = Vec::new();
            if let Some(ratio) = forecast.predicted_ratio {
                lines.push(format!("predicted ratio: {ratio:.2}"));
            }
            if let Some(spent) = forecast.predicted_spent_usd {
                lines.push(format!("predicted spend: ${spent:.0}"));
            }
            if let Some(revenue) = forecast.predicted_revenue_per_hour {
                lines.push(format!("predicted revenue/hour: ${revenue:.2}"));
            }
            if let Some(label) = forecast.effective_label() {
                lines.push(format!("level: {label}"));
            }
            if lines.is_empty() {
                lines.push("no forecast returned".to_owned());
            }
            lines
        }
        PanelResult::Competition(level) => {
            vec![format!("competition level: {}", level.label)]
        }
        PanelResult::DemandForecast(forecast) => {
            vec![format!(
                "estimated job openings: {}",
                forecast.estimated_job_openings
            )]
        }
        PanelResult::RoleSegment(segment) => vec![
            format!("market segment: {}", segment.market_segment),
            format!("cluster id: {}", segment.cluster_id),
        ],
        PanelResult::Remote(verdict) => {
            vec![format!("this job is likely: {}", verdict.label())]
        }
        PanelResult::PostingCluster(cluster) => match cluster.profile() {
            Some((name, skills)) => vec![
                format!("cluster: {name}"),
                format!("top associated skills: {skills}"),
            ],
            None => vec![format!("cluster: Unknown ({})", cluster.cluster)],
        },
        PanelResult::Sentiment(report) => {
            let mut lines = vec![
                format!("reviews analyzed: {}", report.total_reviews),
                format!(
                    "positive {:.0} / neutral {:.0} / negative {:.0}",
                    report.sentiment_counts.positive,
                    report.sentiment_counts.neutral,
                    report.sentiment_counts.negative
                ),
                format!(
                    "percentages: {:.1}% / {:.1}% / {:.1}%",
                    report.sentiment_percentages.positive,
                    report.sentiment_percentages.neutral,
                    report.sentiment_percentages.negative
                ),
                format!("satisfaction score: {:.1}", report.satisfaction_score),
                format!("average confidence: {:.2}", report.average_confidence),
            ];
            if !report.common_words.positive.is_empty() {
                lines.push(format!(
                    "frequent positive words: {}",
                    join_word_counts(&report.common_words.positive)
                ));
            }
            if !report.common_words.negative.is_empty() {
                lines.push(format!(
                    "frequent negative words: {}",
                    join_word_counts(&report.common_words.negative)
                ));
            }
            if report.request_id.is_some() {
                lines.push("press d to download the scored CSV".to_owned());
            }
            lines
        }
        PanelResult::EmployeeCluster(cluster) => vec![
            format!("cluster {}: {}", cluster.cluster_id, cluster.name),
            cluster.interpretation.clone(),
        ],
        PanelResult::SkillAnalysis(report) => {
            let mut lines = Vec::new();
            if report.user_skills_analysis.is_empty() {
                lines.push("no demand data for the given skills".to_owned());
            } else {
                lines.push("your skills:".to_owned());
                for stat in &report.user_skills_analysis {
                    let trend = if stat.is_rising { "rising" } else { "steady" };
                    lines.push(format!(
                        "  {}: {} postings ({:.1}%), demand {} ({trend}, {:+.1}%)",
                        stat.skill,
                        stat.frequency,
                        stat.percentage,
                        stat.predicted_demand,
                        stat.growth_rate
                    ));
                }
            }
            if !report.complementary_skills.is_empty() {
                lines.push(format!(
                    "complementary skills: {}",
                    report.complementary_skills.join(", ")
                ));
            }
            if !report.rising_skills.is_empty() {
                lines.push("rising skills:".to_owned());
                for skill in report.rising_skills.iter().take(5) {
                    lines.push(format!("  {} ({:+.1}%)", skill.skill, skill.growth_rate));
                }
            }
            if !report.top_demand_skills.is_empty() {
                lines.push("top demand:".to_owned());
                for skill in report.top_demand_skills.iter().take(5) {
                    lines.push(format!("  {} ({} postings)", skill.skill, skill.count));
                }
            }
            lines
        }
        PanelResult::HrAnalytics(report) => {
            let dashboard = &report.dashboard;
            let mut lines = vec![
                format!("employees: {}", dashboard.total_employees),
                format!(
                    "avg salary: ${:.0} (model: ${:.0})",
                    dashboard.avg_salary, dashboard.avg_predicted_salary
                ),
                format!(
                    "underpaid: {}  overpaid: {}",
                    dashboard.total_underpaid, dashboard.total_overpaid
                ),
                format!(
                    "retention risk: {} high / {} medium / {} low",
                    dashboard.high_risk_count,
                    dashboard.medium_risk_count,
                    dashboard.low_risk_count
                ),
            ];
            if !dashboard.by_department.is_empty() {
                lines.push("by department:".to_owned());
                for group in &dashboard.by_department {
                    lines.push(format!(
                        "  {}: {} people, avg ${:.0}, gap ${:.0}",
                        group.department, group.count, group.avg_salary, group.avg_gap
                    ));
                }
            }
            if !dashboard.by_location.is_empty() {
                lines.push("by location:".to_owned());
                for group in &dashboard.by_location {
                    lines.push(format!(
                        "  {}: {} people, avg ${:.0}",
                        group.location, group.count, group.avg_salary
                    ));
                }
            }
            let shown = report.employees.len().min(8);
            if shown > 0 {
                lines.push("employees:".to_owned());
                for record in report.employees.iter().take(shown) {
                    lines.push(format!(
                        "  {} -- {} ({})",
                        record.name.as_deref().unwrap_or("?"),
                        record.job_title.as_deref().unwrap_or("?"),
                        record.retention_risk.as_deref().unwrap_or("unknown risk")
                    ));
                }
                if report.employees.len() > shown {
                    lines.push(format!("  ... and {} more", report.employees.len() - shown));
                }
            }
            lines
        }
    }
}

fn join_word_counts(words: &[(String, i64)]) -> String {
    words
        .iter()
        .take(3)
        .map(|(word, count)| format!("{word} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_status_bar(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let text = match &state.status_line {
        Some(message) => message.clone(),
        None if view_data.edit.is_some() => {
            "editing: type, enter to apply, esc to cancel".to_owned()
        }
        None if state.panels.menu_open => {
            "menu: up/down move, enter select, esc close".to_owned()
        }
        None => {
            "v view  1-6/[ ] report pages  p/n panel  m menu  s submit  r reset  ? help  ctrl-q quit"
                .to_owned()
        }
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_menu_overlay(frame: &mut ratatui::Frame<'_>, state: &AppState) {
    let list = master_list();
    let area = centered_rect(frame.area(), 70, (list.len() + 4).min(24) as u16);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem<'_>> = list
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let cursor = if index == state.panels.menu_cursor {
                ">"
            } else {
                " "
            };
            let active = if index == state.panels.active { "*" } else { " " };
            let tag = descriptor.availability.tag();
            let suffix = if tag.is_empty() {
                String::new()
            } else {
                format!("  [{tag}]")
            };
            let text = format!(
                "{cursor}{active} {} {} -- {}{suffix}",
                descriptor.icon, descriptor.title, descriptor.description
            );
            let mut style = if index == state.panels.menu_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if !descriptor.is_selectable() {
                style = style.fg(Color::DarkGray);
            }
            ListItem::new(text).style(style)
        })
        .collect();

    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(" panels ")),
        area,
    );
}

fn render_edit_overlay(frame: &mut ratatui::Frame<'_>, view_data: &ViewData, edit: &EditUiState) {
    let label = view_data
        .session
        .as_ref()
        .and_then(|session| field_specs(session).get(edit.field_index).cloned())
        .map_or_else(|| "value".to_owned(), |spec| spec.label);

    let area = centered_rect(frame.area(), 60, 3);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!("{}_", edit.buffer)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {label} ")),
        ),
        area,
    );
}

fn render_help_overlay(frame: &mut ratatui::Frame<'_>) {
    let area = centered_rect(frame.area(), 64, 18);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(HELP_TEXT).block(Block::default().borders(Borders::ALL).title(" keys ")),
        area,
    );
}

const HELP_TEXT: &str = "\
 v        cycle view (reports / split / analysis)
 1-6      jump to a report page
 [ ]      previous / next report page
 p / n    previous / next analysis panel
 m        panel menu (up/down + enter)
 up/down  move between form fields
 enter    edit field / cycle choice / run row action
 left/rt  cycle choices, nudge numbers
 bksp     remove feature row / last skill
 s        submit the active panel
 r        reset the active panel to defaults
 d        download scored CSV (sentiment panel)
 ?        toggle this help
 ctrl-q   quit";

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
