//! Intents for the quiz session.

use crate::questions::{AnswerOption, Question};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the quiz reducer.
#[derive(Debug, Clone)]
pub enum QuizIntent {
    /// Question source returned a list (possibly empty).
    QuestionsLoaded { questions: Vec<Question> },

    /// Question source failed. The quiz proceeds with no questions.
    LoadFailed { message: String },

    /// User asked to begin the quiz.
    Start,

    /// One second of the current question elapsed.
    Tick,

    /// User picked an option. Ignored until answering unlocks.
    Select { option: AnswerOption },

    /// User pressed next/finish. Ignored without a selection.
    Next,
}

impl Intent for QuizIntent {}
