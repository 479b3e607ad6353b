//! Merge paired I/Q component rows into one wide row per frequency.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use iqtab_model::{IqtabError, Result, Table};

const COMPONENT: &str = "Component";
const FREQ_COL: usize = 0;

/// Merge a long-format component table into wide format.
///
/// The first input column is treated as the frequency key and its name is
/// carried into the output verbatim. Rows are partitioned by the
/// `Component` column (case-insensitive `I`/`Q`; anything else is dropped),
/// and every remaining column `p` expands into `p_I` and `p_Q`. Row order
/// encodes the pairing: the I and Q partitions must agree position by
/// position on the frequency key.
///
/// # Errors
///
/// Fails when `Component` is absent, when the partitions differ in size, or
/// when their frequency sequences diverge.
pub fn split_components(table: &Table) -> Result<Table> {
    let Some(component_col) = table.column_index(COMPONENT) else {
        return Err(IqtabError::MissingColumns {
            columns: vec![COMPONENT.to_string()],
        });
    };

    let mut i_rows: Vec<usize> = Vec::new();
    let mut q_rows: Vec<usize> = Vec::new();
    let mut dropped = 0usize;
    let mut dropped_values: BTreeSet<String> = BTreeSet::new();
    for idx in 0..table.rows.len() {
        let component = table.cell(idx, component_col).trim();
        if component.eq_ignore_ascii_case("I") {
            i_rows.push(idx);
        } else if component.eq_ignore_ascii_case("Q") {
            q_rows.push(idx);
        } else {
            dropped += 1;
            dropped_values.insert(component.to_string());
        }
    }
    if dropped > 0 {
        warn!(
            rows = dropped,
            values = ?dropped_values,
            "ignored rows whose component is neither I nor Q"
        );
    }
    if i_rows.len() != q_rows.len() {
        return Err(IqtabError::ComponentCountMismatch {
            i_rows: i_rows.len(),
            q_rows: q_rows.len(),
        });
    }
    for (pair, (&i_idx, &q_idx)) in i_rows.iter().zip(&q_rows).enumerate() {
        let i_freq = table.cell(i_idx, FREQ_COL);
        let q_freq = table.cell(q_idx, FREQ_COL);
        if !frequencies_match(i_freq, q_freq) {
            return Err(IqtabError::FrequencyMismatch {
                row: pair + 1,
                i_value: i_freq.to_string(),
                q_value: q_freq.to_string(),
            });
        }
    }

    let pulse_cols: Vec<usize> = (0..table.width())
        .filter(|&col| col != FREQ_COL && col != component_col)
        .collect();
    let mut headers = Vec::with_capacity(1 + 2 * pulse_cols.len());
    headers.push(table.headers[FREQ_COL].clone());
    for &col in &pulse_cols {
        headers.push(format!("{}_I", table.headers[col]));
        headers.push(format!("{}_Q", table.headers[col]));
    }
    let mut wide = Table::new(headers);
    for (&i_idx, &q_idx) in i_rows.iter().zip(&q_rows) {
        let mut row = Vec::with_capacity(wide.width());
        row.push(table.cell(i_idx, FREQ_COL).to_string());
        for &col in &pulse_cols {
            row.push(table.cell(i_idx, col).to_string());
            row.push(table.cell(q_idx, col).to_string());
        }
        wide.push_row(row);
    }
    debug!(
        pairs = wide.rows.len(),
        pulse_columns = pulse_cols.len(),
        "split component table"
    );
    Ok(wide)
}

/// Positional frequency comparison: numeric when both cells parse, exact
/// trimmed text otherwise, so `10` and `10.0` align.
fn frequencies_match(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}
