// Where the ADF document comes from.
//
// An explicit input file wins over a document passed as the positional argument, which wins
// over stdin. Stdin is only read when something is piped into it. Bytes that are not valid
// UTF-8 are replaced with U+FFFD instead of failing the whole document.

use std::fmt;
use std::fs;
use std::io::{self, IsTerminal, Read};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(String),
    Argument(String),
    Stdin,
}

impl InputSource {
    pub fn resolve(file: Option<&str>, argument: Option<&str>) -> Self {
        match (file, argument) {
            (Some(path), _) => InputSource::File(path.to_string()),
            (None, Some(document)) => InputSource::Argument(document.to_string()),
            (None, None) => InputSource::Stdin,
        }
    }

    pub fn read(self) -> io::Result<String> {
        match self {
            InputSource::File(path) => fs::read(path).map(lossy_utf8),
            InputSource::Argument(document) => Ok(document),
            InputSource::Stdin => read_stdin(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "file '{path}'"),
            InputSource::Argument(_) => f.write_str("command-line argument"),
            InputSource::Stdin => f.write_str("stdin"),
        }
    }
}

fn read_stdin() -> io::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(io::Error::other("no input provided via stdin"));
    }
    let mut buffer = Vec::new();
    stdin.read_to_end(&mut buffer)?;
    Ok(lossy_utf8(buffer))
}

fn lossy_utf8(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
