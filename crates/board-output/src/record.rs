//! Shared plumbing for the space-separated, variable-width record files.
//!
//! Every file this crate writes is a sequence of lines of space-separated
//! integers (plus one text field in the timing header).  Lines have
//! different lengths, so both directions run the `csv` crate in flexible,
//! header-less mode with a single-space delimiter.

use std::io;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::{OutputError, OutputResult};

pub(crate) fn writer<W: io::Write>(inner: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_writer(inner)
}

pub(crate) fn reader<R: io::Read>(inner: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(inner)
}

/// Parse field `i` of `record`, naming `what` in the error.
pub(crate) fn field<T: FromStr>(record: &StringRecord, i: usize, what: &str) -> OutputResult<T> {
    let raw = record.get(i).ok_or_else(|| {
        OutputError::Parse(format!("{}: missing {what} (field {i})", line_of(record)))
    })?;
    raw.parse()
        .map_err(|_| OutputError::Parse(format!("{}: invalid {what} {raw:?}", line_of(record))))
}

/// Require exactly `n` fields.
pub(crate) fn expect_len(record: &StringRecord, n: usize, what: &str) -> OutputResult<()> {
    if record.len() != n {
        return Err(OutputError::Parse(format!(
            "{}: {what} needs {n} fields, found {}",
            line_of(record),
            record.len()
        )));
    }
    Ok(())
}

fn line_of(record: &StringRecord) -> String {
    match record.position() {
        Some(pos) => format!("line {}", pos.line()),
        None => "record".to_owned(),
    }
}
