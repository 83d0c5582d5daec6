//! Utility modules: persistence and logging bootstrap.

pub mod logging;
pub mod persistence;
