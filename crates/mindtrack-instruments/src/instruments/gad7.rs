use mindtrack_core::models::instrument::InstrumentKind;

use crate::Instrument;
use crate::scoring::SeverityBand;

/// GAD-7: Generalized Anxiety Disorder 7-item scale.
/// 7 items, each rated 0-3. Total 0-21.
pub struct Gad7;

const QUESTIONS: [&str; 7] = [
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it is hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid, as if something awful might happen",
];

const BANDS: [SeverityBand; 4] = [
    SeverityBand {
        upper: 4,
        label: "Minimal Anxiety",
    },
    SeverityBand {
        upper: 9,
        label: "Mild Anxiety",
    },
    SeverityBand {
        upper: 14,
        label: "Moderate Anxiety",
    },
    SeverityBand {
        upper: 21,
        label: "Severe Anxiety",
    },
];

impl Instrument for Gad7 {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Gad7
    }

    fn questions(&self) -> &[&str] {
        &QUESTIONS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        &BANDS
    }
}
