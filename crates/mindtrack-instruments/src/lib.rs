//! mindtrack-instruments
//!
//! Questionnaire definitions. Pure data — no storage dependency. Defines the
//! question sets, answer scale, and severity thresholds for each supported
//! instrument.

pub mod error;
pub mod instruments;
pub mod scoring;

use mindtrack_core::models::instrument::InstrumentKind;

use scoring::{Evaluation, ResponseSheet, SeverityBand, severity_in};

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    /// Which pipeline this instrument belongs to.
    fn kind(&self) -> InstrumentKind;

    /// Unique identifier (e.g., "gad7").
    fn id(&self) -> &str {
        self.kind().id()
    }

    /// Human-readable name (e.g., "GAD-7").
    fn name(&self) -> &str {
        self.kind().name()
    }

    /// The ordered question prompts.
    fn questions(&self) -> &[&str];

    /// Highest achievable total score.
    fn max_score(&self) -> u32 {
        self.questions().len() as u32 * u32::from(scoring::MAX_ANSWER)
    }

    /// Ascending, non-overlapping severity bands covering `0..=max_score`.
    fn severity_bands(&self) -> &[SeverityBand];

    /// Map a total score to its severity label. Pure: the same score always
    /// yields the same label.
    fn severity_of(&self, score: u32) -> &str {
        severity_in(self.severity_bands(), score)
    }

    /// Score a completed sheet. `None` if the sheet is partial or does not
    /// belong to this instrument (wrong length).
    fn evaluate(&self, sheet: &ResponseSheet) -> Option<Evaluation> {
        if sheet.len() != self.questions().len() {
            return None;
        }
        let score = sheet.total()?;
        Some(Evaluation {
            score,
            severity: self.severity_of(score).to_string(),
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::phq9::Phq9),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// The instrument backing a given kind.
pub fn instrument_for(kind: InstrumentKind) -> Box<dyn Instrument> {
    match kind {
        InstrumentKind::Gad7 => Box::new(instruments::gad7::Gad7),
        InstrumentKind::Phq9 => Box::new(instruments::phq9::Phq9),
    }
}
