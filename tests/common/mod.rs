//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_source;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quizbox::questions::Question;
use quizbox::ui::app::App;
use quizbox::ui::mvi::Reducer;
use quizbox::ui::quiz::{QuizIntent, QuizReducer, QuizState, QuizTiming};

/// `count` questions with ids 1..=count and bodies long enough for four labels.
pub fn questions(count: u64) -> Vec<Question> {
    (1..=count)
        .map(|id| {
            Question::new(
                id,
                format!("Question title {id}"),
                "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu",
            )
        })
        .collect()
}

/// Quiz state with `count` questions loaded, not yet started.
pub fn loaded(count: u64) -> QuizState {
    QuizReducer::reduce(
        QuizState::new(QuizTiming::default()),
        QuizIntent::QuestionsLoaded {
            questions: questions(count),
        },
    )
}

/// Quiz state on the first question of `count`.
pub fn started(count: u64) -> QuizState {
    QuizReducer::reduce(loaded(count), QuizIntent::Start)
}

pub fn tick_n(mut state: QuizState, n: u32) -> QuizState {
    for _ in 0..n {
        state = QuizReducer::reduce(state, QuizIntent::Tick);
    }
    state
}

/// App without a countdown runtime; tests feed ticks by hand.
pub fn make_app() -> App {
    App::new(QuizTiming::default())
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: crossterm::event::KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: crossterm::event::KeyEventState::NONE,
    }
}

/// Deliver `n` ticks tagged with the app's live generation.
pub fn app_ticks(app: &mut App, n: u32) {
    for _ in 0..n {
        let generation = app.countdown_generation();
        app.on_countdown_tick(generation);
    }
}
