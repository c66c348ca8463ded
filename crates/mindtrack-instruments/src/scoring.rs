use serde::Serialize;
use ts_rs::TS;

use crate::error::InstrumentError;

/// Highest selectable value on the shared 4-point response scale.
pub const MAX_ANSWER: u8 = 3;

/// One selectable option on the response scale.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
}

/// The shared 4-point frequency scale used by both instruments ("over the
/// last two weeks, how often have you been bothered by...").
pub const ANSWER_OPTIONS: [AnswerOption; 4] = [
    AnswerOption {
        value: 0,
        label: "Not at all",
    },
    AnswerOption {
        value: 1,
        label: "Several days",
    },
    AnswerOption {
        value: 2,
        label: "More than half the days",
    },
    AnswerOption {
        value: 3,
        label: "Nearly every day",
    },
];

/// A contiguous score band and the severity label it carries.
///
/// `upper` is inclusive. Bands are ascending and non-overlapping, and the
/// last band's upper bound equals the instrument's maximum score.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub upper: u32,
    pub label: &'static str,
}

/// Walk ascending bands and return the first label whose upper bound admits
/// the score. Scores are bounded by the instrument, so the walk always lands
/// inside the table.
pub fn severity_in<'a>(bands: &'a [SeverityBand], score: u32) -> &'a str {
    bands
        .iter()
        .find(|band| score <= band.upper)
        .or_else(|| bands.last())
        .map(|band| band.label)
        .unwrap_or_default()
}

/// The scored outcome of a completed sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub score: u32,
    pub severity: String,
}

/// The response collector for one quiz screen: one slot per question, `None`
/// until the user picks an option. Owned by the caller as plain view state
/// and passed into core operations by argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSheet {
    answers: Vec<Option<u8>>,
}

impl ResponseSheet {
    pub fn new(question_count: usize) -> Self {
        Self {
            answers: vec![None; question_count],
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Record the answer for one question. Values outside the 0-3 scale and
    /// out-of-bounds indices are rejected; the quiz screen's radio buttons
    /// normally make both impossible.
    pub fn record(&mut self, index: usize, value: u8) -> Result<(), InstrumentError> {
        if value > MAX_ANSWER {
            return Err(InstrumentError::AnswerOutOfRange { index, value });
        }
        let count = self.answers.len();
        match self.answers.get_mut(index) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(InstrumentError::QuestionOutOfBounds { index, count }),
        }
    }

    pub fn answer(&self, index: usize) -> Option<u8> {
        self.answers.get(index).copied().flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_some())
    }

    /// Sum of all answers, or `None` while any question is unanswered.
    /// A partial sheet never produces a score.
    pub fn total(&self) -> Option<u32> {
        self.answers.iter().map(|a| a.map(u32::from)).sum()
    }

    /// Reset every answer to unanswered.
    pub fn reset(&mut self) {
        self.answers.fill(None);
    }
}
