//! Person registry: the growable, id-indexed roster owned by a single run.

use std::collections::HashMap;
use std::io::BufRead;

use crate::core::{Error, Person, PersonId, Result, StreamRole};
use crate::io::parser::parse_person;

#[derive(Debug, Default)]
pub struct PersonRegistry {
    people: Vec<Person>,
    index: HashMap<PersonId, usize>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the roster until exhaustion, one person per non-blank line,
    /// in encounter order. Bytes that are not valid UTF-8 are decoded lossily.
    pub fn load<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut registry = Self::new();
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(StreamRole::People, None, e))?;
            if read == 0 {
                break;
            }
            line_number += 1;
            // Names are opaque bytes; invalid UTF-8 is replaced, not rejected.
            let line = String::from_utf8_lossy(&buf);

            if line.trim().is_empty() {
                log::trace!("Skipping blank roster line {}", line_number);
                continue;
            }
            registry.push(parse_person(&line))?;
        }

        log::info!("Loaded {} people into the registry", registry.len());
        Ok(registry)
    }

    /// Append a person. Growth is fallible so allocation failure surfaces as
    /// a resource error instead of an abort.
    pub fn push(&mut self, person: Person) -> Result<()> {
        self.people
            .try_reserve(1)
            .map_err(|e| Error::Resource(format!("cannot grow person registry: {}", e)))?;
        self.index
            .try_reserve(1)
            .map_err(|e| Error::Resource(format!("cannot grow person index: {}", e)))?;

        let position = self.people.len();
        if self.index.contains_key(&person.id) {
            log::warn!(
                "Duplicate person id {} ({}); lookups resolve to the first entry",
                person.id,
                person.name
            );
        } else {
            self.index.insert(person.id, position);
        }
        self.people.push(person);
        Ok(())
    }

    pub fn find(&self, id: PersonId) -> Option<&Person> {
        self.index.get(&id).map(|&position| &self.people[position])
    }

    /// Mutable lookup; `None` is an ordinary outcome the caller decides about.
    pub fn find_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        match self.index.get(&id) {
            Some(&position) => self.people.get_mut(position),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    pub fn into_people(self) -> Vec<Person> {
        self.people
    }
}
