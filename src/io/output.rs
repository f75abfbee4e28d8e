use std::io::Write;

use crate::core::{Error, Person, Result, StreamRole};
use crate::risk::{RiskTier, TierClassifier, TierDistribution};

pub const MEDICAL_SUPERVISION_MSG: &str = "Immediate medical supervision required:";
pub const REGULAR_QUARANTINE_MSG: &str = "Regular quarantine required:";
pub const CLEAN_MSG: &str = "Clean:";

pub trait ReportWriter {
    /// Write one line per person, in the order given.
    fn write_report(&mut self, people: &[Person]) -> Result<TierDistribution>;
}

pub struct TextReportWriter<W: Write> {
    writer: W,
    classifier: TierClassifier,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(writer: W, classifier: TierClassifier) -> Self {
        Self { writer, classifier }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, tier: RiskTier, person: &Person) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "{} {} {}",
            tier_message(tier),
            person.name,
            person.id
        )
    }
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_report(&mut self, people: &[Person]) -> Result<TierDistribution> {
        let mut distribution = TierDistribution::default();
        for person in people {
            let tier = self.classifier.classify(person.probability);
            self.write_line(tier, person)
                .map_err(|e| Error::io(StreamRole::Output, None, e))?;
            distribution.record(tier);
        }
        self.writer
            .flush()
            .map_err(|e| Error::io(StreamRole::Output, None, e))?;
        Ok(distribution)
    }
}

pub fn tier_message(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::MedicalSupervision => MEDICAL_SUPERVISION_MSG,
        RiskTier::RegularQuarantine => REGULAR_QUARANTINE_MSG,
        RiskTier::Clean => CLEAN_MSG,
    }
}
