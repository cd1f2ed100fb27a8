use bstr::BString;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

/// An ordered run of consecutive tokens used as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(Vec<BString>);

impl Prefix {
    pub fn tokens(&self) -> &[BString] {
        &self.0
    }

    /// Drops the oldest token and appends `next`, keeping the length fixed.
    pub fn shift(&mut self, next: BString) {
        self.0.remove(0);
        self.0.push(next);
    }
}

impl<'a> From<&'a [BString]> for Prefix {
    fn from(tokens: &'a [BString]) -> Self {
        Prefix(tokens.to_vec())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for token in iter {
                write!(f, " {}", token)?;
            }
        }
        Ok(())
    }
}

/// Splits on single spaces only, so text that is not exactly the space-joined
/// form of a key (extra spaces, tabs, leading or trailing blanks) yields empty
/// or whitespace-bearing tokens and never matches one.
impl<'a> From<&'a str> for Prefix {
    fn from(text: &'a str) -> Self {
        Prefix(text.split(' ').map(BString::from).collect())
    }
}

#[derive(Debug, Clone)]
struct Entry {
    prefix: Prefix,
    continuations: Vec<BString>,
}

/// Maps each prefix seen in the source to every token that followed it.
///
/// Keys are kept in the order they were first seen, so picking a key by
/// index is reproducible for a given random seed. Duplicates are preserved,
/// so a continuation seen N times is N times as likely to be sampled.
#[derive(Debug, Clone)]
pub struct Table {
    prefix_len: usize,
    lookup: HashMap<Prefix, usize>,
    entries: Vec<Entry>,
}

impl Table {
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn continuation_count(&self) -> usize {
        self.entries.iter().map(|e| e.continuations.len()).sum()
    }

    pub fn get(&self, prefix: &Prefix) -> Option<&[BString]> {
        self.lookup
            .get(prefix)
            .map(|&i| self.entries[i].continuations.as_slice())
    }

    pub fn contains(&self, prefix: &Prefix) -> bool {
        self.lookup.contains_key(prefix)
    }

    pub fn first_prefix(&self) -> Option<&Prefix> {
        self.entries.first().map(|e| &e.prefix)
    }

    pub fn random_prefix<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Prefix> {
        if self.entries.is_empty() {
            return None;
        }

        let i = rng.gen_range(0, self.entries.len());
        Some(&self.entries[i].prefix)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &Prefix> {
        self.entries.iter().map(|e| &e.prefix)
    }
}

/// Builds the continuation table in a single pass over `tokens`.
///
/// Empty when there are no more tokens than `prefix_len`. The caller is
/// responsible for keeping `prefix_len` within range.
pub fn build<T: AsRef<[u8]>>(tokens: &[T], prefix_len: usize) -> Table {
    let mut table = Table {
        prefix_len,
        lookup: HashMap::new(),
        entries: Vec::new(),
    };

    for window in tokens.windows(prefix_len + 1) {
        let (prefix, next) = window.split_at(prefix_len);
        let prefix = Prefix(prefix.iter().map(|t| BString::from(t.as_ref())).collect());
        let next = BString::from(next[0].as_ref());

        match table.lookup.get(&prefix) {
            Some(&i) => table.entries[i].continuations.push(next),
            None => {
                table.lookup.insert(prefix.clone(), table.entries.len());
                table.entries.push(Entry {
                    prefix,
                    continuations: vec![next],
                });
            }
        }
    }

    table
}
