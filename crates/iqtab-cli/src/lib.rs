//! Pipeline glue, CLI arguments, and logging bootstrap for the iqtab
//! binaries (`pulse-reshape` and `component-split`).

pub mod cli;
pub mod logging;
pub mod pipeline;
