//! Domain types and the ports the application layer depends on.

pub mod events;
pub mod order;
pub mod ports;
