//! Column data types and dialect-specific kind tags
//!
//! A column description carries two layers of type information:
//! - [`DataType`] - the ORM-level data type that drives validator selection
//! - [`ColumnKind`] - the dialect-specific column flavor that refines it
//!   (UUID columns, bounded character/binary types)

use crate::Dialect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer};

/// ORM-level data type of a column.
///
/// These are the type names the ORM layer reports for a column, independent
/// of the SQL dialect it was declared in. Each maps to a Zod validator in the
/// generated schema text.
///
/// # Examples
///
/// ```
/// use zodgen_types::DataType;
///
/// assert_eq!(DataType::parse("number"), DataType::Number);
/// assert_eq!(DataType::parse("something else"), DataType::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    /// Character data - maps to `z.string()`
    String,

    /// Floating point or integer data - maps to `z.number()`
    Number,

    /// 64-bit integer data - maps to `z.bigint()`
    Bigint,

    /// True/false data - maps to `z.boolean()`
    Boolean,

    /// Date and timestamp data - maps to `z.date()`
    Date,

    /// Structured JSON data - maps to a recursive JSON value validator
    Json,

    /// Array data; the element type lives in the column's `base_column`
    Array,

    /// User-defined column type the ORM cannot classify - maps to `z.any()`
    Custom,

    /// Unrecognized data type name - maps to `z.any()`
    Other,
}

impl DataType {
    /// Parse a data type from its ORM name.
    ///
    /// Total: unrecognized names degrade to [`DataType::Other`] rather than
    /// failing, so generation never aborts on an unknown type.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "string" => Self::String,
            "number" => Self::Number,
            "bigint" => Self::Bigint,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "json" => Self::Json,
            "array" => Self::Array,
            "custom" => Self::Custom,
            _ => Self::Other,
        }
    }

    /// Get the data type name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Bigint => "bigint",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::Json => "json",
            DataType::Array => "array",
            DataType::Custom => "custom",
            DataType::Other => "other",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Deserialization goes through `parse` so unknown names degrade instead of
// erroring.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Dialect-specific column flavor.
///
/// The ORM distinguishes some columns beyond their [`DataType`]: PostgreSQL
/// UUID columns validate as `z.string().uuid()`, and the bounded
/// character/binary types of each dialect carry a length limit that becomes
/// `.max(length)` on the generated string validator. Everything else is
/// [`ColumnKind::Generic`].
///
/// # Examples
///
/// ```
/// use zodgen_types::ColumnKind;
///
/// assert!(ColumnKind::PgUuid.is_uuid());
/// assert!(ColumnKind::PgVarchar.supports_max_length());
/// assert!(!ColumnKind::Generic.supports_max_length());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ColumnKind {
    /// No dialect-specific refinement
    #[default]
    Generic,

    /// PostgreSQL UUID column
    PgUuid,

    /// PostgreSQL CHAR column
    PgChar,

    /// PostgreSQL VARCHAR column
    PgVarchar,

    /// MySQL CHAR column
    MySqlChar,

    /// MySQL VARCHAR column
    MySqlVarchar,

    /// MySQL VARBINARY column
    MySqlVarbinary,

    /// SQLite TEXT column (optionally declared with a length)
    SqliteText,
}

impl ColumnKind {
    /// Returns `true` for UUID columns, which validate as `z.string().uuid()`
    #[inline]
    #[must_use]
    pub const fn is_uuid(&self) -> bool {
        matches!(self, ColumnKind::PgUuid)
    }

    /// Returns `true` for bounded character/binary kinds.
    ///
    /// These are the kinds whose `length` is honored as `.max(length)` on a
    /// generated string validator.
    #[inline]
    #[must_use]
    pub const fn supports_max_length(&self) -> bool {
        matches!(
            self,
            ColumnKind::PgChar
                | ColumnKind::PgVarchar
                | ColumnKind::MySqlChar
                | ColumnKind::MySqlVarchar
                | ColumnKind::MySqlVarbinary
                | ColumnKind::SqliteText
        )
    }

    /// The dialect this kind belongs to, or `None` for [`ColumnKind::Generic`]
    #[must_use]
    pub const fn dialect(&self) -> Option<Dialect> {
        match self {
            ColumnKind::Generic => None,
            ColumnKind::PgUuid | ColumnKind::PgChar | ColumnKind::PgVarchar => {
                Some(Dialect::PostgreSQL)
            }
            ColumnKind::MySqlChar | ColumnKind::MySqlVarchar | ColumnKind::MySqlVarbinary => {
                Some(Dialect::MySQL)
            }
            ColumnKind::SqliteText => Some(Dialect::SQLite),
        }
    }

    /// Parse a kind from its camelCase tag.
    ///
    /// Total: unrecognized tags degrade to [`ColumnKind::Generic`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "pgUuid" => Self::PgUuid,
            "pgChar" => Self::PgChar,
            "pgVarchar" => Self::PgVarchar,
            "mySqlChar" => Self::MySqlChar,
            "mySqlVarchar" => Self::MySqlVarchar,
            "mySqlVarbinary" => Self::MySqlVarbinary,
            "sqliteText" => Self::SqliteText,
            _ => Self::Generic,
        }
    }

    /// Get the kind as its camelCase tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Generic => "generic",
            ColumnKind::PgUuid => "pgUuid",
            ColumnKind::PgChar => "pgChar",
            ColumnKind::PgVarchar => "pgVarchar",
            ColumnKind::MySqlChar => "mySqlChar",
            ColumnKind::MySqlVarchar => "mySqlVarchar",
            ColumnKind::MySqlVarbinary => "mySqlVarbinary",
            ColumnKind::SqliteText => "sqliteText",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ColumnKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_parse() {
        assert_eq!(DataType::parse("string"), DataType::String);
        assert_eq!(DataType::parse("number"), DataType::Number);
        assert_eq!(DataType::parse("bigint"), DataType::Bigint);
        assert_eq!(DataType::parse("boolean"), DataType::Boolean);
        assert_eq!(DataType::parse("date"), DataType::Date);
        assert_eq!(DataType::parse("json"), DataType::Json);
        assert_eq!(DataType::parse("array"), DataType::Array);
        assert_eq!(DataType::parse("custom"), DataType::Custom);

        assert_eq!(DataType::parse("geometry"), DataType::Other);
        assert_eq!(DataType::parse(""), DataType::Other);
    }

    #[test]
    fn test_data_type_display() {
        assert_eq!(DataType::String.to_string(), "string");
        assert_eq!(DataType::Bigint.to_string(), "bigint");
        assert_eq!(DataType::Other.to_string(), "other");
    }

    #[test]
    fn test_kind_is_uuid() {
        assert!(ColumnKind::PgUuid.is_uuid());
        assert!(!ColumnKind::Generic.is_uuid());
        assert!(!ColumnKind::PgVarchar.is_uuid());
    }

    #[test]
    fn test_kind_supports_max_length() {
        assert!(ColumnKind::PgChar.supports_max_length());
        assert!(ColumnKind::PgVarchar.supports_max_length());
        assert!(ColumnKind::MySqlChar.supports_max_length());
        assert!(ColumnKind::MySqlVarchar.supports_max_length());
        assert!(ColumnKind::MySqlVarbinary.supports_max_length());
        assert!(ColumnKind::SqliteText.supports_max_length());

        assert!(!ColumnKind::Generic.supports_max_length());
        assert!(!ColumnKind::PgUuid.supports_max_length());
    }

    #[test]
    fn test_kind_dialect() {
        assert_eq!(ColumnKind::Generic.dialect(), None);
        assert_eq!(ColumnKind::PgUuid.dialect(), Some(Dialect::PostgreSQL));
        assert_eq!(ColumnKind::MySqlVarchar.dialect(), Some(Dialect::MySQL));
        assert_eq!(ColumnKind::SqliteText.dialect(), Some(Dialect::SQLite));
    }

    #[test]
    fn test_kind_parse_roundtrip() {
        for kind in [
            ColumnKind::Generic,
            ColumnKind::PgUuid,
            ColumnKind::PgChar,
            ColumnKind::PgVarchar,
            ColumnKind::MySqlChar,
            ColumnKind::MySqlVarchar,
            ColumnKind::MySqlVarbinary,
            ColumnKind::SqliteText,
        ] {
            assert_eq!(ColumnKind::parse(kind.as_str()), kind);
        }
        assert_eq!(ColumnKind::parse("somethingNew"), ColumnKind::Generic);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_unknown_degrades() {
        let dt: DataType = serde_json::from_str("\"vector\"").unwrap();
        assert_eq!(dt, DataType::Other);

        let kind: ColumnKind = serde_json::from_str("\"pgGeometry\"").unwrap();
        assert_eq!(kind, ColumnKind::Generic);
    }
}
