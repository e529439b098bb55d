//! Asset-tracking record logic: data model, argument validation, record
//! construction and routing tags. No IO happens in this crate.

pub mod builder;
pub mod error;
pub mod operation;
pub mod record;
pub mod types;
pub mod validation;
