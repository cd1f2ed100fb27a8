use crate::error::*;
use crate::index::{Prefix, Table};
use bstr::BString;
use rand::Rng;
use slog::Logger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Start {
    Random,
    /// The first prefix of the source text
    First,
    Prefix(Prefix),
}

impl Default for Start {
    fn default() -> Self {
        Start::Random
    }
}

/// Appends at most `max_words` continuations to the start prefix, stopping
/// early at a prefix with nothing recorded after it.
pub fn generate<R: Rng + ?Sized>(
    log: &Logger,
    table: &Table,
    max_words: usize,
    start: &Start,
    rng: &mut R,
) -> Result<Vec<BString>> {
    if table.is_empty() {
        return Err(Error::new(
            ErrorKind::InsufficientData,
            format!(
                "text is too short to build any prefix of length {}",
                table.prefix_len()
            ),
        ));
    }

    let mut current = match start {
        Start::Prefix(prefix) if table.contains(prefix) => prefix.clone(),
        Start::Prefix(prefix) => {
            return Err(Error::new(
                ErrorKind::Seed,
                format!("start prefix `{}` was not found in the text", prefix),
            ));
        }
        Start::First => table.first_prefix().cloned().ok_or_else(|| {
            Error::new(ErrorKind::InsufficientData, "table has no first prefix")
        })?,
        Start::Random => table.random_prefix(rng).cloned().ok_or_else(|| {
            Error::new(ErrorKind::InsufficientData, "table has no prefixes")
        })?,
    };

    slog::debug!(log, "Starting generation"; "prefix" => %current, "max_words" => max_words);

    let mut output = current.tokens().to_vec();
    output.reserve(max_words);

    let mut generated = 0;
    while generated < max_words {
        let candidates = match table.get(&current) {
            Some(candidates) if !candidates.is_empty() => candidates,
            _ => {
                slog::debug!(log, "Reached a dead end"; "prefix" => %current, "generated" => generated);
                break;
            }
        };

        let next = candidates[rng.gen_range(0, candidates.len())].clone();
        output.push(next.clone());
        current.shift(next);
        generated += 1;
    }

    Ok(output)
}
