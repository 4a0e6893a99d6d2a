use crate::ui::app::{Notice, NoticeKind};
use crate::ui::quiz::{QuizPhase, QuizState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(quiz: &QuizState) -> String {
        match quiz.phase {
            QuizPhase::Loading | QuizPhase::Finished => " q: Quit".to_string(),
            QuizPhase::NotStarted if quiz.questions.is_empty() => {
                " Enter: Show Results │ q: Quit".to_string()
            }
            QuizPhase::NotStarted => " Enter: Start Quiz │ q: Quit".to_string(),
            QuizPhase::InProgress => {
                let next = if quiz.is_last_question() {
                    "Finish Quiz"
                } else {
                    "Next Question"
                };
                if quiz.can_advance() {
                    format!(" A-D: Answer │ Enter: {next} │ q: Quit")
                } else {
                    format!(" A-D: Answer │ ({next} after answering) │ q: Quit")
                }
            }
        }
    }

    pub fn widget(&self, area: Rect, quiz: &QuizState, notice: Option<&Notice>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match notice {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Success => STATUS_OK,
                    NoticeKind::Error => STATUS_ERROR,
                };
                (format!(" {}", notice.text), Style::default().fg(color))
            }
            None => (Self::hints(quiz), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
