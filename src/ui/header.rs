use crate::ui::quiz::{QuizPhase, QuizState};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Seconds left at which the timer turns red.
const LOW_TIME_SECONDS: u32 = 5;

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, quiz: &QuizState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Quiz App", title_style),
            Span::styled("  │  ", separator_style),
        ];

        match quiz.phase {
            QuizPhase::Loading => spans.push(Span::styled("Loading questions...", text_style)),
            QuizPhase::NotStarted => {
                let text = match quiz.questions.len() {
                    0 => "No questions available".to_string(),
                    1 => "1 question".to_string(),
                    n => format!("{n} questions"),
                };
                spans.push(Span::styled(text, text_style));
            }
            QuizPhase::InProgress => {
                spans.push(Span::styled(
                    format!("Question {} of {}", quiz.current + 1, quiz.questions.len()),
                    text_style,
                ));
                spans.push(Span::styled("  │  ", separator_style));
                let timer_color = if quiz.remaining <= LOW_TIME_SECONDS {
                    STATUS_ERROR
                } else {
                    HEADER_TEXT
                };
                spans.push(Span::styled(
                    format!("Time left: {} seconds", quiz.remaining),
                    Style::default().fg(timer_color),
                ));
                spans.push(Span::styled("  │  ", separator_style));
                if quiz.answer_enabled {
                    spans.push(Span::styled("Answering open", Style::default().fg(STATUS_OK)));
                } else {
                    let wait = quiz.remaining.saturating_sub(quiz.timing.unlock_at());
                    spans.push(Span::styled(
                        format!("Answers unlock in {wait}s"),
                        Style::default().fg(STATUS_WARN),
                    ));
                }
            }
            QuizPhase::Finished => spans.push(Span::styled("Quiz Results", text_style)),
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
