pub mod errors;

use serde::{Deserialize, Serialize};

pub use errors::{Error, ErrorCode, Result, StreamRole};

/// Roster identifier. Unique within a run, not necessarily dense or sorted.
pub type PersonId = i64;

/// One individual from the roster.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Parsed for report compatibility; not used by the exposure model.
    pub age: f64,
    pub probability: f64,
    /// Set once the propagation pass has written `probability`.
    #[serde(skip)]
    pub assigned: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, id: PersonId, age: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            probability: 0.0,
            assigned: false,
        }
    }

    pub fn assign(&mut self, probability: f64) {
        self.probability = probability;
        self.assigned = true;
    }
}

/// A single transmission-risk event read from the contact log.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactRecord {
    pub infector_id: PersonId,
    pub infected_id: PersonId,
    pub distance: f64,
    pub duration: f64,
}
