//! Boarding-order file: the zone score of every seat, one cabin row per line.
//!
//! ```text
//! l_window … l_aisle -1 r_aisle … r_window
//! ```
//!
//! Only real rows are written.  `-1` marks the aisle; seats nobody was
//! assigned to are written as `0`.

use std::fs::File;
use std::io;
use std::path::Path;

use board_core::Side;
use board_zones::{BoardingOrder, ZoneScore};

use crate::record::{field, reader, writer};
use crate::{OutputError, OutputResult};

/// Aisle marker between the two seat blocks.
pub const AISLE: ZoneScore = -1;

/// One line of a boarding-order file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRow {
    /// Left block, window to aisle (file order).
    pub left:  Vec<ZoneScore>,
    /// Right block, aisle to window.
    pub right: Vec<ZoneScore>,
}

pub fn write_boarding_order(path: &Path, order: &BoardingOrder) -> OutputResult<()> {
    write_boarding_order_to(File::create(path)?, order)
}

pub fn write_boarding_order_to<W: io::Write>(out: W, order: &BoardingOrder) -> OutputResult<()> {
    let mut w = writer(out);
    for row in order.aircraft().real_rows() {
        let mut line: Vec<String> = order.left_row(row).iter().rev().map(|&s| cell(s)).collect();
        line.push(AISLE.to_string());
        line.extend(order.right_row(row).iter().map(|&s| cell(s)));
        w.write_record(&line)?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_boarding_order(path: &Path) -> OutputResult<Vec<OrderRow>> {
    read_boarding_order_from(File::open(path)?)
}

pub fn read_boarding_order_from<R: io::Read>(input: R) -> OutputResult<Vec<OrderRow>> {
    let mut rows = Vec::new();
    for record in reader(input).into_records() {
        let record = record?;
        let values = (0..record.len())
            .map(|i| field::<ZoneScore>(&record, i, "zone score"))
            .collect::<OutputResult<Vec<_>>>()?;
        let aisle = values
            .iter()
            .position(|&v| v == AISLE)
            .ok_or_else(|| OutputError::Parse(format!("row {} has no aisle marker", rows.len())))?;
        rows.push(OrderRow { left: values[..aisle].to_vec(), right: values[aisle + 1..].to_vec() });
    }
    Ok(rows)
}

impl OrderRow {
    /// Score of the seat `distance` places from the aisle on `side` (1-based).
    pub fn score(&self, side: Side, distance: usize) -> Option<ZoneScore> {
        let i = distance.checked_sub(1)?;
        match side {
            Side::Left => self.left.iter().rev().nth(i).copied(),
            Side::Right => self.right.get(i).copied(),
        }
    }
}

fn cell(score: Option<ZoneScore>) -> String {
    score.unwrap_or(0).to_string()
}
