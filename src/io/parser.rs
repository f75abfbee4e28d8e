//! Roster and contact-field parsing.
//!
//! Numeric fields are parsed permissively: the longest numeric prefix wins
//! and anything unparsable becomes zero. Input is assumed well formed, so no
//! field ever produces an error.

use crate::core::{Person, PersonId};

const NAME_PLACE: usize = 0;
const ID_PLACE: usize = 1;
const AGE_PLACE: usize = 2;

/// Build a [`Person`] from one roster line `<name> <id> <age>`.
///
/// Extra fields are ignored; missing trailing fields stay at their zero value.
pub fn parse_person(line: &str) -> Person {
    let mut person = Person::new(String::new(), 0, 0.0);

    for (place, token) in line.split_whitespace().enumerate() {
        match place {
            NAME_PLACE => person.name = token.to_string(),
            ID_PLACE => person.id = parse_id(token),
            AGE_PLACE => person.age = parse_float(token),
            _ => break,
        }
    }

    person
}

/// Integer prefix of `token` in base 10, or 0.
pub fn parse_id(token: &str) -> PersonId {
    let trimmed = token.trim_start();
    let end = signed_digits_end(trimmed, 0);
    if end == 0 {
        return 0;
    }
    match trimmed[..end].parse::<i128>() {
        Ok(value) => value.clamp(PersonId::MIN as i128, PersonId::MAX as i128) as PersonId,
        // The digit run is too long even for i128; saturate like strtol.
        Err(_) if trimmed.starts_with('-') => PersonId::MIN,
        Err(_) => PersonId::MAX,
    }
}

/// Floating point prefix of `token` (`[sign] digits [. digits] [e [sign] digits]`), or 0.
pub fn parse_float(token: &str) -> f64 {
    let trimmed = token.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = sign_len(bytes, 0);
    let int_end = digits_end(bytes, end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_end(bytes, end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_start = end + 1;
        let exp_digits_start = exp_start + sign_len(bytes, exp_start);
        let exp_end = digits_end(bytes, exp_digits_start);
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

fn sign_len(bytes: &[u8], at: usize) -> usize {
    match bytes.get(at) {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    }
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    start
        + bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// End of `[sign] digits` starting at `start`, or 0 when there are no digits.
fn signed_digits_end(s: &str, start: usize) -> usize {
    let bytes = s.as_bytes();
    let digits_start = start + sign_len(bytes, start);
    let end = digits_end(bytes, digits_start);
    if end == digits_start {
        0
    } else {
        end
    }
}
