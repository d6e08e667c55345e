//! Corpus loading: read a text file (or stdin) under a declared encoding
//! and hand the searchers a decoded string. Decoding problems surface
//! here, never inside the search core.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf-8"),
            Encoding::Latin1 => write!(f, "latin-1"),
        }
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Encoding::Latin1),
            other => Err(format!("unsupported encoding: {other}")),
        }
    }
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid {encoding}")]
    Decode { path: String, encoding: Encoding },
}

/// Read `path` and decode it under `encoding`. A path of `-` reads stdin.
pub fn load_text(path: &Path, encoding: Encoding) -> Result<String, CorpusError> {
    let display = path.display().to_string();

    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|source| CorpusError::Io {
                path: display.clone(),
                source,
            })?;
        buf
    } else {
        fs::read(path).map_err(|source| CorpusError::Io {
            path: display.clone(),
            source,
        })?
    };

    decode(bytes, encoding).ok_or(CorpusError::Decode {
        path: display,
        encoding,
    })
}

/// Decode `bytes` under `encoding`; None on malformed input. Latin-1 is
/// total: each byte maps to the code point of the same value.
pub fn decode(bytes: Vec<u8>, encoding: Encoding) -> Option<String> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes).ok(),
        Encoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn encoding_names_parse() {
        assert_eq!("utf8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("latin-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("ISO-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert!("koi8-r".parse::<Encoding>().is_err());
    }

    #[test]
    fn decode_utf8_valid_and_invalid() {
        assert_eq!(
            decode("привіт".as_bytes().to_vec(), Encoding::Utf8).as_deref(),
            Some("привіт")
        );
        assert_eq!(decode(vec![0xff, 0xfe], Encoding::Utf8), None);
    }

    #[test]
    fn decode_latin1_is_total() {
        // 0xE9 is é in Latin-1
        assert_eq!(
            decode(vec![b'c', b'a', b'f', 0xE9], Encoding::Latin1).as_deref(),
            Some("café")
        );
        assert_eq!(
            decode(vec![0xff, 0xfe], Encoding::Latin1).as_deref(),
            Some("ÿþ")
        );
    }

    #[test]
    fn load_text_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello world").unwrap();

        let text = load_text(file.path(), Encoding::Utf8).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn load_text_fails_fast_on_bad_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xff]).unwrap();

        let err = load_text(file.path(), Encoding::Utf8).unwrap_err();
        assert!(matches!(err, CorpusError::Decode { .. }));

        // the same bytes decode fine as Latin-1
        let text = load_text(file.path(), Encoding::Latin1).unwrap();
        assert_eq!(text, "okÿ");
    }

    #[test]
    fn load_text_missing_file() {
        let err = load_text(Path::new("/no/such/corpus.txt"), Encoding::Utf8).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }
}
