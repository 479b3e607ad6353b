//! Integration tests for the pulse pivot.

use iqtab_model::{IqtabError, Table};
use iqtab_transform::reshape_pulses;

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(headers.iter().map(|h| (*h).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|c| (*c).to_string()).collect());
    }
    table
}

#[test]
fn pivots_one_row_per_range_bin() {
    let long = table(
        &["Pulse", "RangeBin", "I", "Q"],
        &[
            &["0", "1", "1.5", "-0.5"],
            &["1", "1", "2.0", "0.25"],
            &["0", "2", "3.5", "-1.5"],
            &["1", "2", "4.0", "1.25"],
        ],
    );

    let wide = reshape_pulses(&long).expect("reshape");

    assert_eq!(wide.headers, vec!["RangeBin", "P0_I", "P0_Q", "P1_I", "P1_Q"]);
    assert_eq!(wide.rows.len(), 2);
    assert_eq!(wide.rows[0], vec!["1", "1.5", "-0.5", "2.0", "0.25"]);
    assert_eq!(wide.rows[1], vec!["2", "3.5", "-1.5", "4.0", "1.25"]);
}

#[test]
fn output_shape_is_bins_by_pulses() {
    // 3 range bins x 4 pulses, fully populated
    let mut rows: Vec<Vec<String>> = Vec::new();
    for pulse in 0..4 {
        for bin in 0..3 {
            rows.push(vec![
                pulse.to_string(),
                bin.to_string(),
                format!("{pulse}.{bin}"),
                format!("-{pulse}.{bin}"),
            ]);
        }
    }
    let mut long = Table::new(
        ["Pulse", "RangeBin", "I", "Q"].map(String::from).to_vec(),
    );
    for row in rows {
        long.push_row(row);
    }

    let wide = reshape_pulses(&long).expect("reshape");

    assert_eq!(wide.rows.len(), 3);
    assert_eq!(wide.width(), 1 + 2 * 4);
}

#[test]
fn pulses_sort_numerically_not_lexically() {
    let long = table(
        &["Pulse", "RangeBin", "I", "Q"],
        &[
            &["10", "0", "a", "b"],
            &["2", "0", "c", "d"],
            &["1", "0", "e", "f"],
        ],
    );

    let wide = reshape_pulses(&long).expect("reshape");

    assert_eq!(
        wide.headers,
        vec!["RangeBin", "P1_I", "P1_Q", "P2_I", "P2_Q", "P10_I", "P10_Q"]
    );
    assert_eq!(wide.rows[0], vec!["0", "e", "f", "c", "d", "a", "b"]);
}

#[test]
fn range_bins_sort_ascending() {
    let long = table(
        &["Pulse", "RangeBin", "I", "Q"],
        &[
            &["0", "30", "x", "y"],
            &["0", "-1", "u", "v"],
            &["0", "7", "s", "t"],
        ],
    );

    let wide = reshape_pulses(&long).expect("reshape");

    let bins: Vec<&str> = wide.rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(bins, vec!["-1", "7", "30"]);
}

#[test]
fn extra_columns_are_ignored() {
    let long = table(
        &["Timestamp", "Pulse", "RangeBin", "I", "Q", "Gain"],
        &[&["t0", "0", "1", "1.5", "-0.5", "12"]],
    );

    let wide = reshape_pulses(&long).expect("reshape");

    assert_eq!(wide.headers, vec!["RangeBin", "P0_I", "P0_Q"]);
    assert_eq!(wide.rows[0], vec!["1", "1.5", "-0.5"]);
}

#[test]
fn absent_pair_leaves_empty_cells() {
    let long = table(
        &["Pulse", "RangeBin", "I", "Q"],
        &[
            &["0", "1", "1.5", "-0.5"],
            &["1", "2", "4.0", "1.25"],
        ],
    );

    let wide = reshape_pulses(&long).expect("reshape");

    assert_eq!(wide.rows[0], vec!["1", "1.5", "-0.5", "", ""]);
    assert_eq!(wide.rows[1], vec!["2", "", "", "4.0", "1.25"]);
}

#[test]
fn missing_columns_reported_as_a_set() {
    let long = table(&["Pulse", "I"], &[&["0", "1.5"]]);

    let err = reshape_pulses(&long).expect_err("missing columns");

    match err {
        IqtabError::MissingColumns { columns } => {
            assert_eq!(columns, vec!["RangeBin".to_string(), "Q".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_key_is_rejected() {
    let long = table(
        &["Pulse", "RangeBin", "I", "Q"],
        &[
            &["0", "1", "1.5", "-0.5"],
            &["0", "1", "9.9", "9.9"],
        ],
    );

    let err = reshape_pulses(&long).expect_err("duplicate key");

    assert!(matches!(
        err,
        IqtabError::DuplicateKey {
            pulse: 0,
            range_bin: 1
        }
    ));
}

#[test]
fn non_integer_key_is_rejected() {
    let long = table(
        &["Pulse", "RangeBin", "I", "Q"],
        &[&["0", "1", "1.0", "2.0"], &["zero", "2", "1.0", "2.0"]],
    );

    let err = reshape_pulses(&long).expect_err("non-integer pulse");

    match err {
        IqtabError::InvalidInteger { column, row, value } => {
            assert_eq!(column, "Pulse");
            assert_eq!(row, 2);
            assert_eq!(value, "zero");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn value_text_is_carried_verbatim() {
    let long = table(
        &["Pulse", "RangeBin", "I", "Q"],
        &[&["0", "1", "1.2500", "-3e-2"]],
    );

    let wide = reshape_pulses(&long).expect("reshape");

    assert_eq!(wide.rows[0], vec!["1", "1.2500", "-3e-2"]);
}

#[test]
fn empty_input_produces_key_column_only() {
    let long = table(&["Pulse", "RangeBin", "I", "Q"], &[]);

    let wide = reshape_pulses(&long).expect("reshape");

    assert_eq!(wide.headers, vec!["RangeBin"]);
    assert!(wide.is_empty());
}
