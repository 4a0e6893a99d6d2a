//! Question records and the remote source they are fetched from.

mod model;
mod source;

pub use model::{AnswerOption, AnswerRecord, Question, NO_ANSWER};
pub use source::{HttpQuestionSource, SourceError};
