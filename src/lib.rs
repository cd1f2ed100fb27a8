pub mod error;
pub mod generate;
pub mod index;
pub mod input;
pub mod opts;

use error::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use slog::Logger;
use std::io::Write;

pub use generate::{generate, Start};
pub use index::{build, Prefix, Table};
pub use input::{read_tokens, tokenize};

/// Reads the source text, builds the table and writes one line of generated
/// text to `output`.
pub fn run(log: &Logger, opts: &opts::Opts, output: &mut impl Write) -> Result<()> {
    let tokens = input::load(log, opts.input.as_ref().map(|p| p.as_path()))?;

    let table = build(&tokens, opts.prefix_len);
    slog::info!(
        log, "Built prefix table";
        "prefix_len" => table.prefix_len(),
        "prefixes" => table.len(),
        "continuations" => table.continuation_count()
    );

    let mut rng: Box<dyn RngCore> = match opts.seed {
        Some(seed) => {
            slog::debug!(log, "Using seeded random generator"; "seed" => seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    let generated = generate(log, &table, opts.words, &opts.start(), &mut *rng)?;
    slog::debug!(log, "Generated text"; "words" => generated.len());

    write_tokens(&generated, output).context(ErrorKind::Io, "failed to write generated text")
}

fn write_tokens<T: AsRef<[u8]>>(tokens: &[T], output: &mut impl Write) -> std::io::Result<()> {
    let mut iter = tokens.iter();
    if let Some(first) = iter.next() {
        output.write_all(first.as_ref())?;
        for token in iter {
            output.write_all(b" ")?;
            output.write_all(token.as_ref())?;
        }
    }

    output.write_all(b"\n")?;
    output.flush()
}
