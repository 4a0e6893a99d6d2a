use crate::questions::AnswerOption;
use crate::ui::app::App;
use crate::ui::quiz::QuizPhase;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match app.quiz.phase {
        QuizPhase::Loading | QuizPhase::Finished => {}
        QuizPhase::NotStarted => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('s')) {
                app.start();
            }
        }
        QuizPhase::InProgress => match key.code {
            KeyCode::Enter | KeyCode::Char('n') => app.next(),
            KeyCode::Char(ch) => {
                if let Some(option) = AnswerOption::from_key(ch) {
                    app.select(option);
                }
            }
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
