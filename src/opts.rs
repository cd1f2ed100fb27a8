use crate::error::*;
use crate::generate::Start;
use crate::index::Prefix;
use std::path::PathBuf;
use structopt::StructOpt;

pub const MAX_WORDS: usize = 10_000;
pub const MIN_PREFIX_LEN: usize = 1;
pub const MAX_PREFIX_LEN: usize = 5;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "markov-text",
    about = "Generates random text from a Markov chain built over the words of a source text"
)]
pub struct Opts {
    #[structopt(
        parse(from_os_str),
        help = "Source text file. If unspecified, text is read from standard input."
    )]
    pub input: Option<PathBuf>,

    #[structopt(
        short = "n",
        long = "words",
        default_value = "100",
        parse(try_from_str = "parse_word_count"),
        help = "Maximum number of words to generate after the starting prefix (1-10000)"
    )]
    pub words: usize,

    #[structopt(
        short = "p",
        long = "prefix-len",
        default_value = "2",
        parse(try_from_str = "parse_prefix_len"),
        help = "Number of words in each prefix (1-5). Higher values cause the generated \
                text to more closely resemble the source."
    )]
    pub prefix_len: usize,

    #[structopt(
        short = "s",
        long = "start",
        help = "Start generating from this prefix, given as space-separated words. \
                It must appear in the source text followed by at least one word."
    )]
    pub start: Option<String>,

    #[structopt(
        long = "from-first",
        conflicts_with = "start",
        help = "Start generating from the first words of the source text \
                instead of a random prefix"
    )]
    pub from_first: bool,

    #[structopt(
        long = "seed",
        help = "Seed for the random number generator, for reproducible output"
    )]
    pub seed: Option<u64>,

    #[structopt(short = "v", long = "verbose", help = "Log debug information")]
    pub verbose: bool,
}

impl Opts {
    pub fn start(&self) -> Start {
        match (&self.start, self.from_first) {
            (Some(prefix), _) => Start::Prefix(Prefix::from(prefix.as_str())),
            (None, true) => Start::First,
            (None, false) => Start::Random,
        }
    }
}

fn parse_ranged(s: &str, name: &str, min: usize, max: usize) -> Result<usize> {
    let value = s.trim().parse::<usize>().context(
        ErrorKind::Config,
        format!("{} must be a whole number between {} and {}", name, min, max),
    )?;

    if value < min || value > max {
        return Err(Error::new(
            ErrorKind::Config,
            format!(
                "{} must be between {} and {}, got {}",
                name, min, max, value
            ),
        ));
    }

    Ok(value)
}

fn parse_word_count(s: &str) -> Result<usize> {
    parse_ranged(s, "word count", 1, MAX_WORDS)
}

fn parse_prefix_len(s: &str) -> Result<usize> {
    parse_ranged(s, "prefix length", MIN_PREFIX_LEN, MAX_PREFIX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Opts, structopt::clap::Error> {
        Opts::from_iter_safe(std::iter::once("markov-text").chain(args.iter().cloned()))
    }

    #[test]
    fn defaults() {
        let opts = parse(&[]).unwrap();

        assert_eq!(opts.input, None);
        assert_eq!(opts.words, 100);
        assert_eq!(opts.prefix_len, 2);
        assert_eq!(opts.start(), Start::Random);
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn word_count_range() {
        assert_eq!(parse_word_count("1").unwrap(), 1);
        assert_eq!(parse_word_count("10000").unwrap(), 10_000);

        for bad in &["0", "10001", "-3", "lots"] {
            let err = parse_word_count(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Config);
        }
    }

    #[test]
    fn prefix_len_range() {
        for ok in 1..=5 {
            assert_eq!(parse_prefix_len(&ok.to_string()).unwrap(), ok);
        }

        for bad in &["0", "6", ""] {
            assert_eq!(parse_prefix_len(bad).unwrap_err().kind(), ErrorKind::Config);
        }
    }

    #[test]
    fn rejects_out_of_range_options() {
        assert!(parse(&["--prefix-len", "6"]).is_err());
        assert!(parse(&["-n", "0"]).is_err());
        assert!(parse(&["--words", "20000"]).is_err());
    }

    #[test]
    fn start_modes() {
        let opts = parse(&["--start", "old sport", "-p", "2", "book.txt"]).unwrap();
        assert_eq!(opts.start(), Start::Prefix(Prefix::from("old sport")));
        assert_eq!(opts.input, Some(PathBuf::from("book.txt")));

        // The start text is taken literally, not re-tokenized
        let opts = parse(&["--start", "old  sport"]).unwrap();
        assert_ne!(opts.start(), Start::Prefix(Prefix::from("old sport")));

        let opts = parse(&["--from-first"]).unwrap();
        assert_eq!(opts.start(), Start::First);

        assert!(parse(&["--from-first", "--start", "old sport"]).is_err());
    }
}
