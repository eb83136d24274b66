//! # zodgen
//!
//! Generates TypeScript source text declaring [Zod] validation schemas from
//! ORM-style table descriptions. Each table yields two declarations: a
//! select schema validating rows read back from storage, and an insert
//! schema where NOT NULL columns with storage-side defaults become optional.
//!
//! [Zod]: https://zod.dev
//!
//! ## Generating a single declaration
//!
//! ```
//! use zodgen::{Column, ColumnKind, DataType, Table, create_select_schema};
//!
//! let users = Table::new("users")
//!     .with_column(
//!         Column::new("id", DataType::String)
//!             .kind(ColumnKind::PgUuid)
//!             .not_null(),
//!     )
//!     .with_column(Column::new("bio", DataType::String));
//!
//! let schema = create_select_schema(&users);
//! assert_eq!(
//!     schema,
//!     "export const usersSchema = z.object({\n  id: z.string().uuid(),\n  bio: z.string().nullable()\n});"
//! );
//! ```
//!
//! ## Writing a schema file
//!
//! ```no_run
//! use zodgen::{SchemaWriter, Table, WriteError};
//!
//! # fn main() -> Result<(), WriteError> {
//! let tables = vec![Table::new("users")];
//! let result = SchemaWriter::new("./generated/schema.ts").write(&tables)?;
//! for warning in &result.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Compile-time table definitions are available through [`TableDef`] and
//! [`ColumnDef`]; with the `serde` feature, descriptions can also be
//! deserialized from the ORM's camelCase JSON shape.
//!
//! # Features
//!
//! - `serde` - serialize/deserialize table descriptions as JSON
//! - `tracing` - emit generation events via the `tracing` crate

pub mod codegen;
mod tracing;
pub mod utils;
pub mod writer;

pub use codegen::{
    FileOptions, GeneratedFile, SchemaVariant, create_insert_schema, create_schema,
    create_select_schema, generate_schema_file,
};
pub use writer::{SchemaWriter, WriteError};

// Re-export the table description types
pub use zodgen_types::{
    Column, ColumnDef, ColumnKind, DataType, Dialect, DialectParseError, Table, TableDef,
};
