use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("answer {value} for question {index} is outside the 0-3 scale")]
    AnswerOutOfRange { index: usize, value: u8 },

    #[error("question index {index} out of bounds ({count} questions)")]
    QuestionOutOfBounds { index: usize, count: usize },
}
