//! Whitespace-token reader for the contact log.
//!
//! The log is a seed id followed by groups of four tokens
//! `<infector> <infected> <distance> <duration>`. Groups may span line
//! breaks; a trailing group with fewer than four tokens ends the stream.

use std::collections::VecDeque;
use std::io::BufRead;

use super::parser::{parse_float, parse_id};
use crate::core::{ContactRecord, Error, PersonId, Result, StreamRole};

const FIELDS_PER_RECORD: usize = 4;

pub struct ContactStream<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
    exhausted: bool,
    records_read: usize,
}

impl<R: BufRead> ContactStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            exhausted: false,
            records_read: 0,
        }
    }

    /// Read the leading index-case id. `None` means the log holds no tokens at all.
    pub fn read_seed(&mut self) -> Result<Option<PersonId>> {
        if !self.fill(1)? {
            return Ok(None);
        }
        Ok(self.pending.pop_front().map(|token| parse_id(&token)))
    }

    /// Next complete record, or `None` once fewer than four tokens remain.
    pub fn next_record(&mut self) -> Result<Option<ContactRecord>> {
        if !self.fill(FIELDS_PER_RECORD)? {
            return Ok(None);
        }

        let fields: Vec<String> = self.pending.drain(..FIELDS_PER_RECORD).collect();
        self.records_read += 1;
        Ok(Some(ContactRecord {
            infector_id: parse_id(&fields[0]),
            infected_id: parse_id(&fields[1]),
            distance: parse_float(&fields[2]),
            duration: parse_float(&fields[3]),
        }))
    }

    /// Number of complete records handed out so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Buffer at least `wanted` tokens; false when the stream runs dry first.
    fn fill(&mut self, wanted: usize) -> Result<bool> {
        let mut buf = Vec::new();
        while self.pending.len() < wanted && !self.exhausted {
            buf.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(StreamRole::Meetings, None, e))?;
            if read == 0 {
                self.exhausted = true;
            } else {
                let line = String::from_utf8_lossy(&buf);
                self.pending
                    .extend(line.split_whitespace().map(str::to_string));
            }
        }
        Ok(self.pending.len() >= wanted)
    }
}

impl<R: BufRead> Iterator for ContactStream<R> {
    type Item = Result<ContactRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
