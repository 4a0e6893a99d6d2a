//! Reducer for the quiz session.

use crate::questions::{AnswerRecord, NO_ANSWER};
use crate::ui::mvi::Reducer;

use super::intent::QuizIntent;
use super::state::{QuizPhase, QuizState};

/// Reducer for quiz session transitions.
///
/// Pure function. The countdown that produces `Tick` lives with the caller,
/// which restarts it whenever `current` or `phase` changes.
pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::QuestionsLoaded { questions } => match state.phase {
                QuizPhase::Loading => QuizState {
                    phase: QuizPhase::NotStarted,
                    questions,
                    ..state
                },
                _ => state,
            },

            QuizIntent::LoadFailed { message } => match state.phase {
                QuizPhase::Loading => QuizState {
                    phase: QuizPhase::NotStarted,
                    questions: Vec::new(),
                    load_error: Some(message),
                    ..state
                },
                _ => state,
            },

            QuizIntent::Start => match state.phase {
                // Nothing to ask: go straight to an empty result.
                QuizPhase::NotStarted if state.questions.is_empty() => QuizState {
                    phase: QuizPhase::Finished,
                    ..state
                },
                QuizPhase::NotStarted => begin_question(QuizState {
                    phase: QuizPhase::InProgress,
                    current: 0,
                    ..state
                }),
                _ => state,
            },

            QuizIntent::Tick => match state.phase {
                QuizPhase::InProgress => tick(state),
                _ => state,
            },

            QuizIntent::Select { option } => {
                if state.is_running() && state.answer_enabled {
                    QuizState {
                        selected: Some(option),
                        ..state
                    }
                } else {
                    state
                }
            }

            QuizIntent::Next => {
                if state.can_advance() {
                    advance(state)
                } else {
                    state
                }
            }
        }
    }
}

fn tick(mut state: QuizState) -> QuizState {
    state.remaining = state.remaining.saturating_sub(1);
    if state.remaining <= state.timing.unlock_at() {
        state.answer_enabled = true;
    }
    if state.remaining == 0 {
        return advance(state);
    }
    state
}

/// Records the current question and moves on, or finishes after the last one.
fn advance(mut state: QuizState) -> QuizState {
    let Some(question) = state.questions.get(state.current) else {
        state.phase = QuizPhase::Finished;
        return state;
    };

    let answer = state
        .selected
        .map(|option| option.letter().to_string())
        .unwrap_or_else(|| NO_ANSWER.to_string());
    let record = AnswerRecord {
        question_number: state.current + 1,
        question: question.title.clone(),
        answer,
    };
    state.ledger.push(record);

    let mut state = begin_question(state);
    if state.is_last_question() {
        state.phase = QuizPhase::Finished;
    } else {
        state.current += 1;
    }
    state
}

/// Resets the per-question fields. Selection is always cleared with the timer.
fn begin_question(state: QuizState) -> QuizState {
    QuizState {
        remaining: state.timing.question_seconds,
        answer_enabled: false,
        selected: None,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{AnswerOption, Question};
    use crate::ui::quiz::QuizTiming;

    fn running(count: u64) -> QuizState {
        let state = QuizState::new(QuizTiming::default());
        let questions = (1..=count)
            .map(|id| Question::new(id, format!("q{id}"), "w1 w2 w3 w4 w5"))
            .collect();
        let state = QuizReducer::reduce(state, QuizIntent::QuestionsLoaded { questions });
        QuizReducer::reduce(state, QuizIntent::Start)
    }

    fn ticks(mut state: QuizState, n: u32) -> QuizState {
        for _ in 0..n {
            state = QuizReducer::reduce(state, QuizIntent::Tick);
        }
        state
    }

    #[test]
    fn start_resets_timer_and_latch() {
        let state = running(2);
        assert_eq!(state.phase, QuizPhase::InProgress);
        assert_eq!(state.current, 0);
        assert_eq!(state.remaining, 30);
        assert!(!state.answer_enabled);
        assert!(state.selected.is_none());
    }

    #[test]
    fn latch_turns_on_at_twenty() {
        let state = ticks(running(1), 9);
        assert_eq!(state.remaining, 21);
        assert!(!state.answer_enabled);
        let state = ticks(state, 1);
        assert_eq!(state.remaining, 20);
        assert!(state.answer_enabled);
    }

    #[test]
    fn expiry_advances_without_selection() {
        let state = ticks(running(2), 30);
        assert_eq!(state.current, 1);
        assert_eq!(state.remaining, 30);
        assert_eq!(state.ledger.len(), 1);
        assert_eq!(state.ledger[0].answer, NO_ANSWER);
    }

    #[test]
    fn next_requires_selection() {
        let state = running(2);
        let state = QuizReducer::reduce(state, QuizIntent::Next);
        assert_eq!(state.current, 0);
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn next_after_selection_records_letter() {
        let state = ticks(running(2), 10);
        let state = QuizReducer::reduce(
            state,
            QuizIntent::Select {
                option: AnswerOption::B,
            },
        );
        let state = QuizReducer::reduce(state, QuizIntent::Next);
        assert_eq!(state.current, 1);
        assert_eq!(state.ledger[0].answer, "B");
        assert!(!state.answer_enabled);
        assert!(state.selected.is_none());
    }
}
