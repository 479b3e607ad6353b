//! Read → transform → write pipelines behind the two binaries.
//!
//! Each pipeline is a single linear pass with no partial-failure recovery:
//! any validation error aborts the run before the output file is created.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info_span};

use iqtab_ingest::{read_table, write_table};
use iqtab_transform::{reshape_pulses, split_components};

/// Pivot a long-format (Pulse, RangeBin, I, Q) CSV into wide format.
pub fn reshape_file(input: &Path, output: &Path) -> Result<()> {
    let span = info_span!("pulse_reshape", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let long = read_table(input)?;
    let wide = reshape_pulses(&long)?;
    write_table(output, &wide)?;
    debug!(
        rows = wide.rows.len(),
        columns = wide.width(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "pulse reshape complete"
    );
    Ok(())
}

/// Merge paired I/Q component rows of a CSV into wide format.
pub fn split_file(input: &Path, output: &Path) -> Result<()> {
    let span = info_span!("component_split", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let long = read_table(input)?;
    let wide = split_components(&long)?;
    write_table(output, &wide)?;
    debug!(
        rows = wide.rows.len(),
        columns = wide.width(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "component split complete"
    );
    Ok(())
}
