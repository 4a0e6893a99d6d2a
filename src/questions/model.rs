use serde::{Deserialize, Serialize};
use std::fmt;

/// Recorded in place of an option letter when a question times out unanswered.
pub const NO_ANSWER: &str = "No Answer";

/// Placeholder label when the body has too few words for an option.
const FALLBACK_LABEL: &str = "Option";

/// Words skipped between consecutive option labels.
const LABEL_STRIDE: usize = 4;

/// A single quiz question as delivered by the question source.
///
/// Extra fields in the payload (e.g. `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Question {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Display label for an option: the body word at `index * 4`.
    ///
    /// The body is split on single spaces, so newlines stay inside words.
    pub fn option_label(&self, option: AnswerOption) -> &str {
        self.body
            .split(' ')
            .nth(option.index() * LABEL_STRIDE)
            .filter(|word| !word.is_empty())
            .unwrap_or(FALLBACK_LABEL)
    }
}

/// One of the four mutually exclusive choices shown per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl AnswerOption {
    pub const ALL: [AnswerOption; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Maps `a`-`d` (any case) and `1`-`4` to an option.
    pub fn from_key(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'a' | '1' => Some(Self::A),
            'b' | '2' => Some(Self::B),
            'c' | '3' => Some(Self::C),
            'd' | '4' => Some(Self::D),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Ledger entry written when the quiz advances past a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// 1-based position of the question.
    pub question_number: usize,
    /// Question title at the time it was answered.
    pub question: String,
    /// Selected option letter or [`NO_ANSWER`].
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_labels_take_every_fourth_word() {
        let q = Question::new(1, "t", "one two three four five six seven eight nine ten eleven twelve thirteen");
        assert_eq!(q.option_label(AnswerOption::A), "one");
        assert_eq!(q.option_label(AnswerOption::B), "five");
        assert_eq!(q.option_label(AnswerOption::C), "nine");
        assert_eq!(q.option_label(AnswerOption::D), "thirteen");
    }

    #[test]
    fn short_body_falls_back_to_placeholder() {
        let q = Question::new(1, "t", "only three words");
        assert_eq!(q.option_label(AnswerOption::A), "only");
        assert_eq!(q.option_label(AnswerOption::B), "Option");
        assert_eq!(q.option_label(AnswerOption::D), "Option");
    }

    #[test]
    fn empty_body_uses_placeholder_everywhere() {
        let q = Question::new(1, "t", "");
        for option in AnswerOption::ALL {
            assert_eq!(q.option_label(option), "Option");
        }
    }

    #[test]
    fn from_key_accepts_letters_and_digits() {
        assert_eq!(AnswerOption::from_key('a'), Some(AnswerOption::A));
        assert_eq!(AnswerOption::from_key('C'), Some(AnswerOption::C));
        assert_eq!(AnswerOption::from_key('4'), Some(AnswerOption::D));
        assert_eq!(AnswerOption::from_key('e'), None);
        assert_eq!(AnswerOption::from_key('0'), None);
    }

    #[test]
    fn answer_record_serializes_camel_case() {
        let record = AnswerRecord {
            question_number: 1,
            question: "title".to_string(),
            answer: NO_ANSWER.to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["questionNumber"], 1);
        assert_eq!(json["answer"], "No Answer");
    }

    #[test]
    fn question_ignores_unknown_fields() {
        let q: Question = serde_json::from_str(
            r#"{"userId": 1, "id": 7, "title": "t", "body": "b"}"#,
        )
        .unwrap();
        assert_eq!(q, Question::new(7, "t", "b"));
    }
}
