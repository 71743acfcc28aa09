use std::path::Path;

use base64::{engine::general_purpose, Engine as _};

use crate::csv::{parse_csv, write_csv};
use crate::error::CsvError;
use crate::table::Table;

/// Decoded file content: the UTF-8 text plus its tabular form when the
/// path hint carries a recognized tabular extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub table: Option<Table>,
}

/// Decode base64 transfer content into text, and into rows when the path
/// hint names a tabular file.
///
/// The contents endpoint wraps its base64 at a fixed column width, so ASCII
/// whitespace is stripped before decoding. Non-tabular paths keep the text
/// opaque with no table.
pub fn decode(raw_base64: &str, path_hint: &str) -> Result<Decoded, CsvError> {
    let compact: String = raw_base64
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD.decode(compact.as_bytes())?;
    let text = String::from_utf8(bytes)?;

    let table = if is_tabular_path(path_hint) {
        Some(parse_csv(&text)?)
    } else {
        None
    };

    Ok(Decoded { text, table })
}

/// Serialize rows to comma-delimited text and base64-encode the result,
/// unwrapped.
#[must_use]
pub fn encode(table: &Table) -> String {
    general_purpose::STANDARD.encode(write_csv(table))
}

/// Whether the path names a file parsed as tabular content.
#[must_use]
pub fn is_tabular_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"))
}
