use crate::error::*;
use bstr::{BString, ByteSlice};
use slog::Logger;
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// Splits text into tokens on runs of Unicode whitespace. Bytes that are not
/// valid UTF-8 are kept as they are.
pub fn tokenize(text: &[u8]) -> Vec<BString> {
    text.fields().map(BString::from).collect()
}

/// Reads everything from `source` and tokenizes it. Fails if the text holds
/// no tokens at all.
pub fn read_tokens(source: &mut impl Read) -> Result<Vec<BString>> {
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .context(ErrorKind::Input, "failed to read input text")?;

    let tokens = tokenize(&bytes);
    if tokens.is_empty() {
        return Err(Error::new(ErrorKind::Input, "Text is empty"));
    }

    Ok(tokens)
}

/// Reads tokens from `path`, or from piped standard input when no path is given.
pub fn load(log: &Logger, path: Option<&Path>) -> Result<Vec<BString>> {
    let tokens = match path {
        Some(path) => {
            slog::info!(log, "Reading text from file"; "path" => %path.display());
            let mut file = File::open(path).context(
                ErrorKind::Input,
                format!("failed to open `{}`", path.display()),
            )?;
            read_tokens(&mut file)?
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(Error::new(
                    ErrorKind::Input,
                    "no piped input detected; pipe text into standard input or pass a file",
                ));
            }

            slog::info!(log, "Reading text from standard input");
            read_tokens(&mut stdin.lock())?
        }
    };

    slog::info!(log, "Read input text"; "tokens" => tokens.len());

    Ok(tokens)
}
