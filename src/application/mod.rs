//! Application layer: the use cases shared by every transport front-end.
//!
//! Use cases only talk to the repository port and the event dispatcher.
//! Each call runs to completion inside the caller's task.

pub mod create_order;
pub mod dto;
pub mod list_orders;
