//! Concrete repository and message channel backends.

pub mod in_memory;
#[cfg(feature = "broker-kafka")]
pub mod kafka;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
