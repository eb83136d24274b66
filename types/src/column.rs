//! Column description types
//!
//! This module provides two complementary types:
//! - [`ColumnDef`] - A const-friendly definition type for compile-time table definitions
//! - [`Column`] - A runtime type for serde serialization/deserialization

use std::borrow::Cow;

use crate::{ColumnKind, DataType};

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_from_string, cow_vec_from_strings};

// =============================================================================
// Const-friendly Definition Type
// =============================================================================

/// Const-friendly column definition for compile-time table definitions.
///
/// # Examples
///
/// ```
/// use zodgen_types::{ColumnDef, ColumnKind, DataType};
///
/// const ID: ColumnDef = ColumnDef::new("id", DataType::String)
///     .kind(ColumnKind::PgUuid)
///     .not_null();
///
/// const COLUMNS: &[ColumnDef] = &[
///     ID,
///     ColumnDef::new("email", DataType::String)
///         .kind(ColumnKind::PgVarchar)
///         .length(255)
///         .not_null(),
///     ColumnDef::new("bio", DataType::String),
/// ];
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnDef {
    /// Column name, emitted verbatim as the object key
    pub name: &'static str,
    /// ORM-level data type
    pub data_type: DataType,
    /// Dialect-specific flavor
    pub kind: ColumnKind,
    /// Is this column NOT NULL?
    pub not_null: bool,
    /// Does storage supply a value when the column is omitted on write?
    pub has_default: bool,
    /// Enumerated values; non-empty overrides type-based mapping
    pub enum_values: &'static [&'static str],
    /// Length limit for bounded character/binary kinds
    pub length: Option<u32>,
    /// Element description for array columns
    pub base_column: Option<&'static ColumnDef>,
}

impl ColumnDef {
    /// Create a new column definition
    #[must_use]
    pub const fn new(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            kind: ColumnKind::Generic,
            not_null: false,
            has_default: false,
            enum_values: &[],
            length: None,
            base_column: None,
        }
    }

    /// Set NOT NULL
    #[must_use]
    pub const fn not_null(self) -> Self {
        Self {
            not_null: true,
            ..self
        }
    }

    /// Mark the column as having a storage-side default
    #[must_use]
    pub const fn has_default(self) -> Self {
        Self {
            has_default: true,
            ..self
        }
    }

    /// Set the dialect-specific kind
    #[must_use]
    pub const fn kind(self, kind: ColumnKind) -> Self {
        Self { kind, ..self }
    }

    /// Set the length limit
    #[must_use]
    pub const fn length(self, length: u32) -> Self {
        Self {
            length: Some(length),
            ..self
        }
    }

    /// Set the enumerated values
    #[must_use]
    pub const fn enum_values(self, values: &'static [&'static str]) -> Self {
        Self {
            enum_values: values,
            ..self
        }
    }

    /// Set the array element description
    #[must_use]
    pub const fn base_column(self, base: &'static ColumnDef) -> Self {
        Self {
            base_column: Some(base),
            ..self
        }
    }

    /// Convert to runtime [`Column`] type
    #[must_use]
    pub fn into_column(self) -> Column {
        Column {
            name: Cow::Borrowed(self.name),
            data_type: self.data_type,
            kind: self.kind,
            not_null: self.not_null,
            has_default: self.has_default,
            enum_values: self.enum_values.iter().map(|v| Cow::Borrowed(*v)).collect(),
            length: self.length,
            base_column: self.base_column.map(|def| Box::new(def.into_column())),
        }
    }
}

impl Default for ColumnDef {
    fn default() -> Self {
        Self::new("", DataType::String)
    }
}

// =============================================================================
// Runtime Type for Serde
// =============================================================================

/// Runtime column description.
///
/// Field names serialize in camelCase (`dataType`, `notNull`, `hasDefault`,
/// `enumValues`, `baseColumn`), matching the ORM's column metadata shape.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Column {
    /// Column name, emitted verbatim as the object key
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// ORM-level data type
    pub data_type: DataType,

    /// Dialect-specific flavor
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ColumnKind,

    /// Is this column NOT NULL?
    #[cfg_attr(feature = "serde", serde(default))]
    pub not_null: bool,

    /// Does storage supply a value when the column is omitted on write?
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_default: bool,

    /// Enumerated values; non-empty overrides type-based mapping
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Vec::is_empty",
            deserialize_with = "cow_vec_from_strings"
        )
    )]
    pub enum_values: Vec<Cow<'static, str>>,

    /// Length limit for bounded character/binary kinds
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub length: Option<u32>,

    /// Element description for array columns
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub base_column: Option<Box<Column>>,
}

impl Column {
    /// Create a new column (runtime)
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            kind: ColumnKind::Generic,
            not_null: false,
            has_default: false,
            enum_values: Vec::new(),
            length: None,
            base_column: None,
        }
    }

    /// Set NOT NULL
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark the column as having a storage-side default
    #[must_use]
    pub fn has_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Set the dialect-specific kind
    #[must_use]
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the length limit
    #[must_use]
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the enumerated values
    #[must_use]
    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the array element description
    #[must_use]
    pub fn base_column(mut self, base: Column) -> Self {
        self.base_column = Some(Box::new(base));
        self
    }

    /// Get the column name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this column carries enumerated values
    #[inline]
    #[must_use]
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new("", DataType::String)
    }
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        def.into_column()
    }
}
