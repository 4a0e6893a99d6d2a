use crate::questions::{AnswerOption, AnswerRecord, Question};
use crate::ui::countdown::{Countdown, CountdownSpawner};
use crate::ui::mvi::Reducer;
use crate::ui::quiz::{QuizIntent, QuizPhase, QuizReducer, QuizState, QuizTiming};
use std::time::{Duration, Instant};

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Shown when the question source fails, whatever the cause.
pub const LOAD_FAILED_NOTICE: &str = "Failed to fetch quiz data";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast shown in the footer.
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    shown_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Quiz session state (MVI pattern).
    pub quiz: QuizState,
    /// Live countdown (resource, managed outside MVI).
    countdown: Option<Countdown>,
    spawner: Option<CountdownSpawner>,
    /// Generation of the countdown that may tick the current question.
    generation: u64,
    /// `(phase, ledger length)` the countdown was last synced for.
    synced_for: (QuizPhase, usize),
    notice: Option<Notice>,
}

impl App {
    pub fn new(timing: QuizTiming) -> Self {
        let quiz = QuizState::new(timing);
        let synced_for = (quiz.phase, quiz.ledger.len());
        Self {
            should_quit: false,
            quiz,
            countdown: None,
            spawner: None,
            generation: 0,
            synced_for,
            notice: None,
        }
    }

    /// Attach the runtime used to drive per-question countdowns.
    pub fn with_countdown(mut self, spawner: CountdownSpawner) -> Self {
        self.spawner = Some(spawner);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.countdown = None;
    }

    pub fn ledger(&self) -> &[AnswerRecord] {
        &self.quiz.ledger
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Generation that countdown ticks must carry to be accepted.
    pub fn countdown_generation(&self) -> u64 {
        self.generation
    }

    pub fn has_live_countdown(&self) -> bool {
        self.countdown.is_some()
    }

    /// Run the quiz reducer, then restart or stop the countdown if the
    /// question changed.
    pub fn dispatch_quiz(&mut self, intent: QuizIntent) {
        let before = self.quiz.phase;
        dispatch_mvi!(self, quiz, QuizReducer, intent);
        if before != self.quiz.phase {
            tracing::info!(from = ?before, to = ?self.quiz.phase, "Quiz phase changed");
        }
        self.sync_countdown();
    }

    fn sync_countdown(&mut self) {
        let key = (self.quiz.phase, self.quiz.ledger.len());
        if key == self.synced_for {
            return;
        }
        self.synced_for = key;

        // Drop first so the old task is aborted before a new one exists.
        self.countdown = None;
        if self.quiz.is_running() {
            self.generation += 1;
            self.countdown = self
                .spawner
                .as_ref()
                .map(|spawner| spawner.spawn(self.generation));
        }
    }

    pub fn on_questions_loaded(&mut self, questions: Vec<Question>) {
        self.dispatch_quiz(QuizIntent::QuestionsLoaded { questions });
    }

    pub fn on_load_failed(&mut self, message: String) {
        tracing::warn!(error = %message, "Question source failed");
        self.dispatch_quiz(QuizIntent::LoadFailed { message });
        self.show_notice(NoticeKind::Error, LOAD_FAILED_NOTICE.to_string());
    }

    pub fn on_countdown_tick(&mut self, generation: u64) {
        if !self.quiz.is_running() || generation != self.generation {
            tracing::debug!(generation, live = self.generation, "Dropped stale countdown tick");
            return;
        }
        self.dispatch_quiz(QuizIntent::Tick);
    }

    /// Redraw tick: expires notices.
    pub fn on_tick(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.shown_at.elapsed() >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    pub fn start(&mut self) {
        self.dispatch_quiz(QuizIntent::Start);
    }

    pub fn select(&mut self, option: AnswerOption) {
        let accepted = self.quiz.is_running() && self.quiz.answer_enabled;
        self.dispatch_quiz(QuizIntent::Select { option });
        if accepted {
            tracing::debug!(%option, question = self.quiz.current + 1, "Answer selected");
            self.show_notice(NoticeKind::Success, format!("You selected: {option}"));
        }
    }

    pub fn next(&mut self) {
        self.dispatch_quiz(QuizIntent::Next);
    }

    fn show_notice(&mut self, kind: NoticeKind, text: String) {
        self.notice = Some(Notice {
            kind,
            text,
            shown_at: Instant::now(),
        });
    }
}
