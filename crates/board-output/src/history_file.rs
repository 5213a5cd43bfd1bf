//! History file: the per-passenger tracks and baggage log of one run.
//!
//! ```text
//! rows dummy_rows seats_left seats_right passenger_count baggage_count
//! <n>                   ┐
//! tick x y state        │ one block per passenger, in order of first
//! … (n lines)           ┘ appearance in the log (not id order)
//! tick row side         ─ baggage_count lines, side 0 = left, 1 = right
//! ```
//!
//! Readers must not assume one block per passenger: blocks are read until
//! only the baggage lines are left.

use std::fs::File;
use std::io;
use std::path::Path;

use board_core::{AircraftConfig, Side, Tick};
use board_sim::{BaggageEvent, History, HistoryEntry, PassengerState, Simulation};

use crate::record::{expect_len, field, reader, writer};
use crate::{OutputError, OutputResult};

/// A history file read back into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryFile {
    pub aircraft:        AircraftConfig,
    /// Passengers on the flight, as stated in the header.
    pub passenger_count: usize,
    /// Per-passenger tracks in file order.
    pub tracks:          Vec<Vec<HistoryEntry>>,
    pub baggage:         Vec<BaggageEvent>,
}

/// Write the history of the last run of `sim` to `path`.
pub fn write_history(path: &Path, sim: &Simulation) -> OutputResult<()> {
    let file = File::create(path)?;
    write_history_to(file, sim.cabin().aircraft(), sim.passenger_count(), sim.history())
}

/// Write `history` to any byte sink.
pub fn write_history_to<W: io::Write>(
    out:             W,
    aircraft:        &AircraftConfig,
    passenger_count: usize,
    history:         &History,
) -> OutputResult<()> {
    let mut w = writer(out);
    w.write_record(&[
        aircraft.rows.to_string(),
        aircraft.dummy_rows.to_string(),
        aircraft.seats_left.to_string(),
        aircraft.seats_right.to_string(),
        passenger_count.to_string(),
        history.baggage().len().to_string(),
    ])?;

    for (_, track) in history.tracks() {
        w.write_record(&[track.len().to_string()])?;
        for e in track {
            w.write_record(&[
                e.tick.0.to_string(),
                e.x.to_string(),
                e.y.to_string(),
                e.state.code().to_string(),
            ])?;
        }
    }

    for b in history.baggage() {
        w.write_record(&[b.tick.0.to_string(), b.row.to_string(), b.side.code().to_string()])?;
    }
    w.flush()?;
    Ok(())
}

/// Read a history file from `path`.
pub fn read_history(path: &Path) -> OutputResult<HistoryFile> {
    read_history_from(File::open(path)?)
}

/// Read a history file from any byte source.
pub fn read_history_from<R: io::Read>(input: R) -> OutputResult<HistoryFile> {
    let records: Vec<csv::StringRecord> = reader(input).into_records().collect::<Result<_, _>>()?;
    let mut records = records.into_iter();

    let header = records
        .next()
        .ok_or_else(|| OutputError::Parse("empty history file".into()))?;
    expect_len(&header, 6, "header")?;
    let aircraft = AircraftConfig {
        rows:        field(&header, 0, "rows")?,
        dummy_rows:  field(&header, 1, "dummy rows")?,
        seats_left:  field(&header, 2, "seats left")?,
        seats_right: field(&header, 3, "seats right")?,
    };
    aircraft.validate()?;
    let passenger_count: usize = field(&header, 4, "passenger count")?;
    let baggage_count: usize = field(&header, 5, "baggage count")?;

    let mut tracks = Vec::new();
    while records.len() > baggage_count {
        let count_line = records.next().ok_or_else(|| truncated("track length"))?;
        expect_len(&count_line, 1, "track length")?;
        let n: usize = field(&count_line, 0, "track length")?;
        if n > records.len() {
            return Err(truncated("track entry"));
        }
        let track = records
            .by_ref()
            .take(n)
            .map(|r| parse_entry(&r))
            .collect::<OutputResult<Vec<_>>>()?;
        tracks.push(track);
    }

    if records.len() != baggage_count {
        return Err(OutputError::Parse(format!(
            "header announces {baggage_count} baggage events, file has {}",
            records.len()
        )));
    }
    let baggage = records.map(|r| parse_baggage(&r)).collect::<OutputResult<Vec<_>>>()?;

    Ok(HistoryFile { aircraft, passenger_count, tracks, baggage })
}

fn parse_entry(r: &csv::StringRecord) -> OutputResult<HistoryEntry> {
    expect_len(r, 4, "history entry")?;
    let code: u8 = field(r, 3, "state code")?;
    let state = PassengerState::from_code(code)
        .ok_or_else(|| OutputError::Parse(format!("unknown state code {code}")))?;
    Ok(HistoryEntry {
        tick: Tick(field(r, 0, "tick")?),
        x:    field(r, 1, "x")?,
        y:    field(r, 2, "y")?,
        state,
    })
}

fn parse_baggage(r: &csv::StringRecord) -> OutputResult<BaggageEvent> {
    expect_len(r, 3, "baggage event")?;
    let code: u8 = field(r, 2, "side")?;
    let side = Side::from_code(code)
        .ok_or_else(|| OutputError::Parse(format!("unknown side code {code}")))?;
    Ok(BaggageEvent { tick: Tick(field(r, 0, "tick")?), row: field(r, 1, "row")?, side })
}

fn truncated(what: &str) -> OutputError {
    OutputError::Parse(format!("unexpected end of file: expected {what}"))
}
