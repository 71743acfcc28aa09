//! Content codec for remotely hosted tabular files.
//!
//! This crate owns the base64 ↔ UTF-8 text ↔ rows transformation only. It
//! intentionally contains no transport code and no session coupling: input
//! is the transfer-encoded content plus a path hint, output is a [`Table`]
//! value (or opaque text for non-tabular paths) with line-numbered errors
//! for malformed input.

pub mod codec;
pub mod csv;
pub mod error;
pub mod table;

pub use codec::{decode, encode, is_tabular_path, Decoded};
pub use csv::{parse_csv, write_csv};
pub use error::CsvError;
pub use table::Table;
