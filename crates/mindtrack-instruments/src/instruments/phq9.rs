use mindtrack_core::models::instrument::InstrumentKind;

use crate::Instrument;
use crate::scoring::SeverityBand;

/// PHQ-9: Patient Health Questionnaire depression module.
/// 9 items, each rated 0-3. Total 0-27.
pub struct Phq9;

const QUESTIONS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
    "Trouble concentrating on things, such as reading the newspaper or watching television",
    "Moving or speaking so slowly that other people could have noticed, or the opposite, being so fidgety or restless that you have been moving around a lot more than usual",
    "Thoughts that you would be better off dead, or of hurting yourself in some way",
];

const BANDS: [SeverityBand; 5] = [
    SeverityBand {
        upper: 4,
        label: "Minimal Depression",
    },
    SeverityBand {
        upper: 9,
        label: "Mild Depression",
    },
    SeverityBand {
        upper: 14,
        label: "Moderate Depression",
    },
    SeverityBand {
        upper: 19,
        label: "Moderately Severe Depression",
    },
    SeverityBand {
        upper: 27,
        label: "Severe Depression",
    },
];

impl Instrument for Phq9 {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Phq9
    }

    fn questions(&self) -> &[&str] {
        &QUESTIONS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        &BANDS
    }
}
