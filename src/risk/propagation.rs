//! Single forward replay of the contact log over the registry.
//!
//! Records are applied strictly in stream order. The infected party's
//! probability is overwritten, so the last record naming a person decides
//! their final value. An infector without an assigned probability aborts the
//! run; an infected id missing from the roster is skipped.

use std::io::BufRead;

use serde::Serialize;

use super::exposure::ExposureModel;
use crate::core::{Error, PersonId, Result};
use crate::io::contacts::ContactStream;
use crate::registry::PersonRegistry;

/// Certainty assigned to the index case.
pub const SEED_PROBABILITY: f64 = 1.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropagationStats {
    /// Whether the log named an index case at all.
    pub seeded: bool,
    pub contacts_applied: usize,
    /// Records whose infected id is absent from the roster.
    pub skipped_contacts: usize,
}

pub struct PropagationEngine<'a> {
    registry: &'a mut PersonRegistry,
    model: &'a ExposureModel,
    stats: PropagationStats,
}

impl<'a> PropagationEngine<'a> {
    pub fn new(registry: &'a mut PersonRegistry, model: &'a ExposureModel) -> Self {
        Self {
            registry,
            model,
            stats: PropagationStats::default(),
        }
    }

    /// Seed the index case, then apply every complete record until the log
    /// runs out. An empty log leaves every probability at zero.
    pub fn run<R: BufRead>(mut self, contacts: &mut ContactStream<R>) -> Result<PropagationStats> {
        let Some(seed_id) = contacts.read_seed()? else {
            log::info!("Contact log is empty; no propagation performed");
            return Ok(self.stats);
        };

        self.seed(seed_id)?;

        while let Some(record) = contacts.next_record()? {
            let record_number = contacts.records_read();

            let infector_probability = match self.registry.find(record.infector_id) {
                Some(infector) if infector.assigned => infector.probability,
                _ => {
                    return Err(Error::DataIntegrity {
                        infector_id: record.infector_id,
                        record: record_number,
                    })
                }
            };

            let probability =
                self.model
                    .transmit(infector_probability, record.distance, record.duration);

            match self.registry.find_mut(record.infected_id) {
                Some(infected) => {
                    infected.assign(probability);
                    self.stats.contacts_applied += 1;
                }
                None => {
                    log::debug!(
                        "Contact record {}: infected id {} not in roster, skipping",
                        record_number,
                        record.infected_id
                    );
                    self.stats.skipped_contacts += 1;
                }
            }
        }

        log::info!(
            "Propagation finished: {} contacts applied, {} skipped",
            self.stats.contacts_applied,
            self.stats.skipped_contacts
        );
        Ok(self.stats)
    }

    fn seed(&mut self, seed_id: PersonId) -> Result<()> {
        let seed = self
            .registry
            .find_mut(seed_id)
            .ok_or(Error::SeedNotFound { id: seed_id })?;
        seed.assign(SEED_PROBABILITY);
        self.stats.seeded = true;
        log::debug!("Index case {} ({}) seeded", seed.id, seed.name);
        Ok(())
    }
}

/// Replay `contacts` over `registry` with the given exposure model.
pub fn propagate<R: BufRead>(
    registry: &mut PersonRegistry,
    contacts: &mut ContactStream<R>,
    model: &ExposureModel,
) -> Result<PropagationStats> {
    PropagationEngine::new(registry, model).run(contacts)
}
