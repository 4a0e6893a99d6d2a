use crate::questions::{AnswerOption, Question};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_column, centered_rect, layout_regions};
use crate::ui::quiz::{QuizPhase, QuizState, QuizTiming};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

const CONTENT_WIDTH: u16 = 96;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let quiz = &app.quiz;

    frame.render_widget(Header::new().widget(quiz), header);
    frame.render_widget(Clear, body);

    let content = centered_column(body, CONTENT_WIDTH);
    match quiz.phase {
        QuizPhase::Loading => draw_loading(frame, body),
        QuizPhase::NotStarted => draw_start(frame, content, quiz),
        QuizPhase::InProgress => {
            if let Some(question) = quiz.current_question() {
                draw_question(frame, content, quiz, question);
            }
        }
        QuizPhase::Finished => draw_results(frame, content, quiz),
    }

    frame.render_widget(Footer::new().widget(footer, quiz, app.notice()), footer);
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect) {
    let area = centered_rect(50, 30, body);
    let widget = Paragraph::new(Line::from(Span::styled(
        "Loading questions...",
        Style::default().fg(MUTED_TEXT),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

pub fn rules(timing: &QuizTiming) -> Vec<String> {
    vec![
        format!(
            "Each question will stay on screen for {} seconds.",
            timing.question_seconds
        ),
        format!(
            "You can only select an answer after {} seconds.",
            timing.answer_delay_seconds
        ),
        format!(
            "Once you select an answer, you can change it until the {}-second timer ends.",
            timing.question_seconds
        ),
        "No going back to previous questions.".to_string(),
        "Your results will be shown at the end of the quiz.".to_string(),
    ]
}

fn draw_start(frame: &mut Frame<'_>, area: Rect, quiz: &QuizState) {
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Welcome to the Quiz", heading)).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled("Quiz Rules", text.add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    lines.extend(
        rules(&quiz.timing)
            .into_iter()
            .map(|rule| Line::from(Span::styled(format!("  • {rule}"), text))),
    );
    lines.push(Line::from(""));

    if let Some(error) = &quiz.load_error {
        lines.push(Line::from(Span::styled(
            format!("Could not load questions: {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let prompt = if quiz.questions.is_empty() {
        "No questions available. Press Enter to see the (empty) results."
    } else {
        "Press Enter to Start Quiz"
    };
    lines.push(Line::from(Span::styled(prompt, heading)).alignment(Alignment::Center));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(bordered());
    frame.render_widget(widget, area);
}

fn draw_question(frame: &mut Frame<'_>, area: Rect, quiz: &QuizState, question: &Question) {
    let [prompt_area, options_area] =
        Layout::vertical([Constraint::Min(4), Constraint::Length(6)]).areas(area);

    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(
            question.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.body.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(bordered().title(format!(
        " Question {} of {} ",
        quiz.current + 1,
        quiz.questions.len()
    )));
    frame.render_widget(prompt, prompt_area);

    let lines: Vec<Line> = AnswerOption::ALL
        .iter()
        .map(|&option| {
            let label = format!(" {}. {}", option, question.option_label(option));
            let style = if quiz.selected == Some(option) {
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else if quiz.answer_enabled {
                Style::default().fg(HEADER_TEXT)
            } else {
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
            };
            Line::from(Span::styled(label, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(bordered()), options_area);
}

fn draw_results(frame: &mut Frame<'_>, area: Rect, quiz: &QuizState) {
    let header_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Question Number"),
        Cell::from("Question"),
        Cell::from("Your Answer"),
    ])
    .style(header_style);

    let rows: Vec<Row> = quiz
        .ledger
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.question_number.to_string()),
                Cell::from(record.question.clone()),
                Cell::from(record.answer.clone()),
            ])
            .style(Style::default().fg(HEADER_TEXT))
        })
        .collect();

    let block = bordered().title(" Quiz Results ");
    if rows.is_empty() {
        let widget = Paragraph::new(Line::from(Span::styled(
            "No answers recorded.",
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let widths = [
        Constraint::Length(16),
        Constraint::Fill(1),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block);
    frame.render_widget(table, area);
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
