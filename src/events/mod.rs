//! In-process event dispatch and the handlers wired to it.

pub mod dispatcher;
pub mod order_created;
