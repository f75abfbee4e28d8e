//! End-to-end run: roster -> registry -> propagation -> sort -> report.
//!
//! Streams are owned by the run and dropped on every exit path. The report is
//! only written after propagation has succeeded, so a fatal error never leaves
//! a partial report behind.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::SpreaderConfig;
use crate::core::{Error, Result, StreamRole};
use crate::io::{ContactStream, ReportWriter, TextReportWriter};
use crate::registry::PersonRegistry;
use crate::risk::{propagate, sort_descending, ExposureModel, TierClassifier, TierDistribution};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub people: usize,
    pub seeded: bool,
    pub contacts_applied: usize,
    pub skipped_contacts: usize,
    pub distribution: TierDistribution,
}

/// Run the whole pipeline over already-open streams.
pub fn run_streams<P, M, W>(
    roster: P,
    contacts: M,
    report: W,
    config: &SpreaderConfig,
) -> Result<RunSummary>
where
    P: BufRead,
    M: BufRead,
    W: Write,
{
    let mut registry = PersonRegistry::load(roster)?;
    if registry.is_empty() {
        log::info!("Roster is empty; writing an empty report");
        return Ok(RunSummary::default());
    }

    let model = ExposureModel::from(&config.exposure);
    let mut contacts = ContactStream::new(contacts);
    let stats = propagate(&mut registry, &mut contacts, &model)?;

    let mut people = registry.into_people();
    sort_descending(&mut people);

    let mut writer = TextReportWriter::new(report, TierClassifier::from(&config.thresholds));
    let distribution = writer.write_report(&people)?;

    Ok(RunSummary {
        people: people.len(),
        seeded: stats.seeded,
        contacts_applied: stats.contacts_applied,
        skipped_contacts: stats.skipped_contacts,
        distribution,
    })
}

/// Open the roster, the contact log and the report file, in that order, and run.
pub fn run_files(
    people_path: &Path,
    meetings_path: &Path,
    output_path: &Path,
    config: &SpreaderConfig,
) -> Result<RunSummary> {
    let people = open_input(people_path, StreamRole::People)?;
    let meetings = open_input(meetings_path, StreamRole::Meetings)?;
    let output = File::create(output_path)
        .map_err(|e| Error::io(StreamRole::Output, Some(output_path.to_path_buf()), e))?;

    log::info!(
        "Analyzing {} with contacts from {}",
        people_path.display(),
        meetings_path.display()
    );

    run_streams(people, meetings, BufWriter::new(output), config)
}

fn open_input(path: &Path, role: StreamRole) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::io(role, Some(path.to_path_buf()), e))
}
