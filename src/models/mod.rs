//! Biolevate Elise API model types.
//!
//! Generated-style models: every optional field is a
//! [`ValueSlot`](crate::ValueSlot), undeclared wire keys are preserved in
//! `additional_properties`, and each model carries a `static` descriptor.

mod annotation;
mod data_value;
mod file;
mod item;
mod job;
mod position;
mod provider;

pub use annotation::*;
pub use data_value::*;
pub use file::*;
pub use item::*;
pub use job::*;
pub use position::*;
pub use provider::*;
