//! Long/wide reshaping transforms for I/Q measurement tables.
//!
//! Both transforms are pure functions from [`iqtab_model::Table`] to
//! [`iqtab_model::Table`]: validation failures abort the whole run, and no
//! output is produced for partially consistent input.

pub mod reshape;
pub mod split;

pub use reshape::reshape_pulses;
pub use split::split_components;
