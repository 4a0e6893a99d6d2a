//! State for the quiz session.

use crate::config::QuizConfig;
use crate::questions::{AnswerOption, AnswerRecord, Question};
use crate::ui::mvi::UiState;

/// Coarse stage of the session. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Waiting for the question source.
    #[default]
    Loading,
    /// Questions (possibly none) are known, waiting for the user to start.
    NotStarted,
    /// A question is on screen and the countdown is running.
    InProgress,
    /// Every question has a ledger entry.
    Finished,
}

/// Countdown parameters shared by every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizTiming {
    pub question_seconds: u32,
    pub answer_delay_seconds: u32,
}

impl QuizTiming {
    /// Remaining-seconds value at which answering unlocks.
    pub fn unlock_at(&self) -> u32 {
        self.question_seconds
            .saturating_sub(self.answer_delay_seconds)
    }
}

impl Default for QuizTiming {
    fn default() -> Self {
        Self::from(&QuizConfig::default())
    }
}

impl From<&QuizConfig> for QuizTiming {
    fn from(config: &QuizConfig) -> Self {
        Self {
            question_seconds: config.question_seconds,
            answer_delay_seconds: config.answer_delay_seconds,
        }
    }
}

/// Everything the quiz screens need, owned in one place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizState {
    pub phase: QuizPhase,
    pub questions: Vec<Question>,
    /// Index of the question on screen. Only meaningful while in progress.
    pub current: usize,
    /// Seconds left for the current question.
    pub remaining: u32,
    /// One-way latch per question, set once `remaining <= timing.unlock_at()`.
    pub answer_enabled: bool,
    pub selected: Option<AnswerOption>,
    /// One record per question already advanced past, in question order.
    pub ledger: Vec<AnswerRecord>,
    pub timing: QuizTiming,
    /// Set when the question source failed; the quiz continues with no questions.
    pub load_error: Option<String>,
}

impl UiState for QuizState {}

impl QuizState {
    pub fn new(timing: QuizTiming) -> Self {
        Self {
            remaining: timing.question_seconds,
            timing,
            ..Self::default()
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress => self.questions.get(self.current),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn is_running(&self) -> bool {
        self.phase == QuizPhase::InProgress
    }

    /// Mirrors the next/finish button: enabled only once an answer is picked.
    pub fn can_advance(&self) -> bool {
        self.is_running() && self.selected.is_some()
    }
}
