use crate::config::{Config, SourceConfig};
use crate::questions::{AnswerRecord, HttpQuestionSource};
use crate::shutdown::{spawn_signal_listener, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::countdown::CountdownSpawner;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::quiz::QuizTiming;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::runtime::Handle;

const TICK_RATE: Duration = Duration::from_millis(250);
const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Runs the quiz until the user quits. Returns the answer ledger.
pub fn run(config: &Config, runtime: &Handle) -> io::Result<Vec<AnswerRecord>> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    spawn_signal_listener(runtime, shutdown.clone(), events.sender());

    let spawner = CountdownSpawner::new(runtime.clone(), events.sender(), COUNTDOWN_PERIOD);
    let mut app = App::new(QuizTiming::from(&config.quiz)).with_countdown(spawner);
    spawn_fetch(runtime, &config.source, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    let ledger = app.ledger().to_vec();
    drop(app);
    drop(guard);
    Ok(ledger)
}

/// Routes one event to the app. All state changes go through here.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::QuestionsLoaded(questions) => app.on_questions_loaded(questions),
        AppEvent::LoadFailed(message) => app.on_load_failed(message),
        AppEvent::CountdownTick { generation } => app.on_countdown_tick(generation),
        AppEvent::Shutdown => app.request_quit(),
    }
}

/// Fetches the question list once, in the background.
fn spawn_fetch(runtime: &Handle, config: &SourceConfig, events: Sender<AppEvent>) {
    let source = HttpQuestionSource::new(config);
    runtime.spawn(async move {
        let result = match source {
            Ok(source) => {
                tracing::info!(url = source.url(), "Fetching questions");
                source.fetch().await
            }
            Err(err) => Err(err),
        };
        let event = match result {
            Ok(questions) => AppEvent::QuestionsLoaded(questions),
            Err(err) => AppEvent::LoadFailed(err.to_string()),
        };
        let _ = events.send(event);
    });
}
