//! Pivot a long (Pulse, RangeBin, I, Q) table into one wide row per range bin.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use iqtab_model::{IqtabError, Result, Table};

const PULSE: &str = "Pulse";
const RANGE_BIN: &str = "RangeBin";
const IN_PHASE: &str = "I";
const QUADRATURE: &str = "Q";

/// Pivot a long-format pulse table into wide format.
///
/// Output rows are keyed by ascending `RangeBin`; columns after the key
/// interleave `P{n}_I, P{n}_Q` for every pulse in the input, ascending by
/// numeric pulse index. A pulse with no record for a given range bin leaves
/// both of its cells empty.
///
/// # Errors
///
/// Fails when any of `Pulse`, `RangeBin`, `I`, `Q` is absent, when a key
/// cell does not parse as an integer, or when the same (Pulse, RangeBin)
/// pair appears twice.
pub fn reshape_pulses(table: &Table) -> Result<Table> {
    let pulse_col = table.column_index(PULSE);
    let bin_col = table.column_index(RANGE_BIN);
    let i_col = table.column_index(IN_PHASE);
    let q_col = table.column_index(QUADRATURE);
    let (Some(pulse_col), Some(bin_col), Some(i_col), Some(q_col)) =
        (pulse_col, bin_col, i_col, q_col)
    else {
        let columns = [
            (PULSE, pulse_col),
            (RANGE_BIN, bin_col),
            (IN_PHASE, i_col),
            (QUADRATURE, q_col),
        ]
        .into_iter()
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| name.to_string())
        .collect();
        return Err(IqtabError::MissingColumns { columns });
    };

    let mut pulses: BTreeSet<i64> = BTreeSet::new();
    let mut bins: BTreeSet<i64> = BTreeSet::new();
    let mut cells: BTreeMap<(i64, i64), (String, String)> = BTreeMap::new();
    for idx in 0..table.rows.len() {
        let pulse = parse_key(PULSE, idx + 1, table.cell(idx, pulse_col))?;
        let bin = parse_key(RANGE_BIN, idx + 1, table.cell(idx, bin_col))?;
        pulses.insert(pulse);
        bins.insert(bin);
        let values = (
            table.cell(idx, i_col).to_string(),
            table.cell(idx, q_col).to_string(),
        );
        if cells.insert((bin, pulse), values).is_some() {
            return Err(IqtabError::DuplicateKey {
                pulse,
                range_bin: bin,
            });
        }
    }

    let mut headers = Vec::with_capacity(1 + 2 * pulses.len());
    headers.push(RANGE_BIN.to_string());
    for pulse in &pulses {
        headers.push(format!("P{pulse}_I"));
        headers.push(format!("P{pulse}_Q"));
    }
    let mut wide = Table::new(headers);
    let mut gaps = 0usize;
    for bin in &bins {
        let mut row = Vec::with_capacity(wide.width());
        row.push(bin.to_string());
        for pulse in &pulses {
            match cells.get(&(*bin, *pulse)) {
                Some((i_value, q_value)) => {
                    row.push(i_value.clone());
                    row.push(q_value.clone());
                }
                None => {
                    gaps += 1;
                    row.push(String::new());
                    row.push(String::new());
                }
            }
        }
        wide.push_row(row);
    }
    if gaps > 0 {
        warn!(
            pairs = gaps,
            "pulse/range-bin combinations without a record were left empty"
        );
    }
    debug!(
        range_bins = bins.len(),
        pulses = pulses.len(),
        "reshaped pulse table"
    );
    Ok(wide)
}

fn parse_key(column: &str, row: usize, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| IqtabError::InvalidInteger {
            column: column.to_string(),
            row,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_reports_column_and_row() {
        let err = parse_key(PULSE, 4, "x7").expect_err("not an integer");
        assert_eq!(err.to_string(), "column 'Pulse' row 4: 'x7' is not an integer");
    }

    #[test]
    fn parse_key_accepts_negative_and_padded() {
        assert_eq!(parse_key(RANGE_BIN, 1, " -3 ").expect("parse"), -3);
    }
}
