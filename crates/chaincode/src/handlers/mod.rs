//! One handler per implemented sub-operation.

pub mod create;
pub mod query;
