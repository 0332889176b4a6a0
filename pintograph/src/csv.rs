//! Functions for reading/writing curves in CSV format.
pub use csv::Error;
use csv::{ReaderBuilder, Writer};
use serde::{de::DeserializeOwned, Serialize};
use std::io::Cursor;

/// Parse CSV from a string.
///
/// Headerless, `#` starts a comment line.
pub fn parse_csv<D>(s: &str) -> Result<Vec<D>, Error>
where
    D: DeserializeOwned,
{
    ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .from_reader(Cursor::new(s))
        .deserialize()
        .collect()
}

/// Dump rows to a CSV string.
pub fn dump_csv<S>(rows: impl IntoIterator<Item = S>) -> Result<String, Box<dyn std::error::Error>>
where
    S: Serialize,
{
    let mut w = Writer::from_writer(Vec::new());
    rows.into_iter().try_for_each(|row| w.serialize(row))?;
    Ok(String::from_utf8(w.into_inner()?)?)
}
