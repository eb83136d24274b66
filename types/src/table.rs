//! Table description types
//!
//! This module provides two complementary types:
//! - [`TableDef`] - A const-friendly definition type for compile-time table definitions
//! - [`Table`] - A runtime type for serde serialization/deserialization

use std::borrow::Cow;

use crate::{Column, ColumnDef};

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

// =============================================================================
// Const-friendly Definition Type
// =============================================================================

/// Const-friendly table definition for compile-time table definitions.
///
/// This type uses only `Copy` types (`&'static str`, static slices) so it can
/// be used in const contexts. Use [`TableDef::into_table`] to convert to the
/// runtime [`Table`] type when needed.
///
/// # Examples
///
/// ```
/// use zodgen_types::{ColumnDef, DataType, TableDef};
///
/// const USERS: TableDef = TableDef::new(
///     "users",
///     &[
///         ColumnDef::new("id", DataType::String).not_null(),
///         ColumnDef::new("bio", DataType::String),
///     ],
/// );
///
/// assert_eq!(USERS.name, "users");
/// assert_eq!(USERS.columns.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableDef {
    /// Table name
    pub name: &'static str,
    /// Column definitions in declaration order
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    /// Create a new table definition
    #[must_use]
    pub const fn new(name: &'static str, columns: &'static [ColumnDef]) -> Self {
        Self { name, columns }
    }

    /// Convert to runtime [`Table`] type
    #[must_use]
    pub fn into_table(self) -> Table {
        Table {
            name: Cow::Borrowed(self.name),
            columns: self.columns.iter().map(|def| def.into_column()).collect(),
        }
    }
}

impl Default for TableDef {
    fn default() -> Self {
        Self::new("", &[])
    }
}

// =============================================================================
// Runtime Type for Serde
// =============================================================================

/// Runtime table description.
///
/// Column order is declaration order and is preserved through generation.
/// Column names are expected to be unique; duplicates are not rejected here
/// but are surfaced as warnings by the schema-file generator.
///
/// # Examples
///
/// ```
/// use zodgen_types::{Column, DataType, Table};
///
/// let table = Table::new("users")
///     .with_column(Column::new("id", DataType::String).not_null())
///     .with_column(Column::new("bio", DataType::String));
///
/// assert_eq!(table.len(), 2);
/// assert!(table.column("bio").is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Table {
    /// Table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Columns in declaration order
    #[cfg_attr(feature = "serde", serde(default))]
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a new table (runtime) with no columns
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column, preserving declaration order
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Get the table name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a column by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the table has no columns
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<TableDef> for Table {
    fn from(def: TableDef) -> Self {
        def.into_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnKind, DataType};

    #[test]
    fn test_const_table_def() {
        const USERS: TableDef = TableDef::new(
            "users",
            &[
                ColumnDef::new("id", DataType::String)
                    .kind(ColumnKind::PgUuid)
                    .not_null(),
                ColumnDef::new("bio", DataType::String),
            ],
        );

        assert_eq!(USERS.name, "users");
        assert_eq!(USERS.columns.len(), 2);

        let table = USERS.into_table();
        assert_eq!(table.name(), "users");
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns[0].name(), "id");
    }

    #[test]
    fn test_column_lookup() {
        let table = Table::new("posts")
            .with_column(Column::new("id", DataType::Number).not_null())
            .with_column(Column::new("title", DataType::String).not_null());

        assert!(table.column("title").is_some());
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new("empty");
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let table = Table::new("users")
            .with_column(Column::new("id", DataType::String).not_null())
            .with_column(
                Column::new("role", DataType::String).enum_values(["admin", "user"]),
            );

        let json = serde_json::to_string(&table).unwrap();
        let parsed: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_columns_default_empty() {
        let table: Table = serde_json::from_str(r#"{"name":"bare"}"#).unwrap();
        assert!(table.is_empty());
    }
}
