//! Adapters that feed the use cases from outside the process.

pub mod csv;
