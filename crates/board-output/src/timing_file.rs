//! Aggregate timing file: total boarding times of repeated runs.
//!
//! ```text
//! <policy> <proportion>
//! t1 t2 … tn
//! ```

use std::fs::File;
use std::io;
use std::path::Path;

use crate::naming::format_proportion;
use crate::record::{expect_len, field, reader, writer};
use crate::{OutputError, OutputResult};

/// Boarding times of one (policy, load factor) combination.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingFile {
    /// Policy name as written in the header (lower snake case).
    pub policy:     String,
    pub proportion: f64,
    pub times:      Vec<u64>,
}

impl TimingFile {
    pub fn mean(&self) -> Option<f64> {
        if self.times.is_empty() {
            return None;
        }
        Some(self.times.iter().sum::<u64>() as f64 / self.times.len() as f64)
    }
}

pub fn write_timing(path: &Path, timing: &TimingFile) -> OutputResult<()> {
    write_timing_to(File::create(path)?, timing)
}

pub fn write_timing_to<W: io::Write>(out: W, timing: &TimingFile) -> OutputResult<()> {
    let mut w = writer(out);
    w.write_record([timing.policy.as_str(), format_proportion(timing.proportion).as_str()])?;
    if !timing.times.is_empty() {
        w.write_record(timing.times.iter().map(u64::to_string))?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_timing(path: &Path) -> OutputResult<TimingFile> {
    read_timing_from(File::open(path)?)
}

pub fn read_timing_from<R: io::Read>(input: R) -> OutputResult<TimingFile> {
    let mut records = reader(input).into_records();
    let header = records
        .next()
        .ok_or_else(|| OutputError::Parse("empty timing file".into()))??;
    expect_len(&header, 2, "timing header")?;

    let mut times = Vec::new();
    for record in records {
        let record = record?;
        for i in 0..record.len() {
            times.push(field(&record, i, "boarding time")?);
        }
    }

    Ok(TimingFile {
        policy:     header[0].to_owned(),
        proportion: field(&header, 1, "passenger proportion")?,
        times,
    })
}
