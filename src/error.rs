use std::error::Error as StdError;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of a failure. Every kind is fatal to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An option value is out of range or unparsable
    Config,
    /// The source text is missing, unreadable or empty
    Input,
    /// The source text is too short to produce a single prefix
    InsufficientData,
    /// The requested start prefix is not in the table
    Seed,
    /// Writing the output failed
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    context: String,
    cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    pub fn new<S: Into<String>>(kind: ErrorKind, context: S) -> Self {
        Error {
            kind,
            context: context.into(),
            cause: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Iterates over this error followed by each underlying cause.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let mut next: Option<&(dyn StdError + 'static)> = Some(self);
        std::iter::from_fn(move || {
            let current = next?;
            next = current.source();
            Some(current)
        })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.context)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|boxed| boxed.as_ref() as &(dyn StdError + 'static))
    }
}

pub trait ResultExt<T> {
    fn context<S: Into<String>>(self, kind: ErrorKind, message: S) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<S: Into<String>>(self, kind: ErrorKind, message: S) -> Result<T> {
        self.map_err(|e| Error {
            kind,
            context: message.into(),
            cause: Some(e.into()),
        })
    }
}
