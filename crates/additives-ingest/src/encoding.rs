//! Text decoding for input feeds.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::{IngestError, Result};

/// Character encoding of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceEncoding {
    /// UTF-8, with an optional leading BOM. Invalid sequences are an error.
    #[default]
    Utf8,
    /// 8-bit Western. Decoded as Windows-1252, the WHATWG superset of
    /// ISO-8859-1; every byte sequence is valid.
    Latin1,
}

impl SourceEncoding {
    fn encoding(self) -> &'static Encoding {
        match self {
            Self::Utf8 => UTF_8,
            Self::Latin1 => WINDOWS_1252,
        }
    }
}

/// Reads a whole file and decodes it.
pub fn read_text(path: &Path, encoding: SourceEncoding) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let (text, had_errors) = match encoding {
        SourceEncoding::Utf8 => UTF_8.decode_with_bom_removal(&bytes),
        SourceEncoding::Latin1 => encoding.encoding().decode_without_bom_handling(&bytes),
    };

    if had_errors {
        return Err(IngestError::InvalidEncoding {
            path: path.to_path_buf(),
            encoding: encoding.encoding().name(),
        });
    }

    Ok(text.into_owned())
}

/// Skips `lines` lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// A final line without a terminator still counts. Returns the number
/// of lines actually present when the text is shorter than the preamble.
pub fn skip_preamble(text: &str, lines: usize) -> std::result::Result<&str, usize> {
    let mut rest = text;
    for skipped in 0..lines {
        if rest.is_empty() {
            return Err(skipped);
        }
        rest = match rest.find(['\r', '\n']) {
            Some(idx) if rest[idx..].starts_with("\r\n") => &rest[idx + 2..],
            Some(idx) => &rest[idx + 1..],
            None => "",
        };
    }
    Ok(rest)
}
