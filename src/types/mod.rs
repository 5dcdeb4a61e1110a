//! Data types for nested column headers.

mod cell;
mod header;

pub use cell::*;
pub use header::*;
