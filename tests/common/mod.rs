// Test utility module for spreader-detector integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A scratch directory holding a roster and a contact log.
pub struct RunFixture {
    pub dir: TempDir,
    pub people: PathBuf,
    pub meetings: PathBuf,
}

impl RunFixture {
    pub fn new(people: &str, meetings: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let people_path = dir.path().join("People.in");
        let meetings_path = dir.path().join("Meetings.in");
        fs::write(&people_path, people).expect("Failed to write roster");
        fs::write(&meetings_path, meetings).expect("Failed to write contact log");
        Self {
            dir,
            people: people_path,
            meetings: meetings_path,
        }
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join(spreader_detector::OUTPUT_FILE)
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output()).expect("Failed to read report")
    }
}

/// Roster text with one `<name> <id> <age>` line per entry.
pub fn roster(entries: &[(&str, i64)]) -> String {
    entries
        .iter()
        .map(|(name, id)| format!("{} {} 30\n", name, id))
        .collect()
}
