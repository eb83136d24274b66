//! Shared table description types for Zod schema generation
//!
//! This crate provides the column and table descriptions consumed by the
//! `zodgen` generator crate:
//!
//! - [`Dialect`] - Database dialect enum (SQLite, PostgreSQL, MySQL)
//! - [`DataType`] / [`ColumnKind`] - the two layers of column type information
//! - [`ColumnDef`] / [`Column`] - const-friendly and runtime column descriptions
//! - [`TableDef`] / [`Table`] - const-friendly and runtime table descriptions
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization (camelCase JSON)

mod column;
mod dialect;
#[cfg(feature = "serde")]
pub mod serde_helpers;
mod sql_type;
mod table;

pub use column::{Column, ColumnDef};
pub use dialect::{Dialect, DialectParseError};
pub use sql_type::{ColumnKind, DataType};
pub use table::{Table, TableDef};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Column, ColumnDef, ColumnKind, DataType, Dialect, Table, TableDef};
}
