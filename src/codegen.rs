//! Zod schema code generation
//!
//! This module generates TypeScript source text declaring Zod validation
//! schemas from table descriptions. Each table yields a select variant
//! (validating rows read back from storage) and an insert variant, where
//! required columns with storage-side defaults become optional.

use std::collections::HashSet;

use zodgen_types::{Column, DataType, Dialect, Table};

use crate::utils::{is_ts_identifier, ts_string_literal};

/// Validator text for JSON columns. Matches drizzle-zod's JSON value
/// validator shape, self-reference spelling included.
const JSON_VALUE_EXPR: &str = "z.lazy(() => z.union([z.union([z.string(), z.number(), z.boolean(), z.null()]), z.array(f), z.record(f)]))";

/// Which schema flavor to generate for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemaVariant {
    /// Validates rows read back from storage
    #[default]
    Select,

    /// Validates data accepted for writing; required columns with
    /// storage-side defaults become optional
    Insert,
}

impl SchemaVariant {
    /// Suffix spliced into the exported const name
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            SchemaVariant::Select => "",
            SchemaVariant::Insert => "Insert",
        }
    }

    /// Returns `true` for the insert variant
    #[inline]
    #[must_use]
    pub const fn is_insert(&self) -> bool {
        matches!(self, SchemaVariant::Insert)
    }

    /// Get the variant as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Select => "select",
            SchemaVariant::Insert => "insert",
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate the select schema declaration for a table.
///
/// # Examples
///
/// ```
/// use zodgen::{Column, DataType, Table, create_select_schema};
///
/// let table = Table::new("users")
///     .with_column(Column::new("id", DataType::Number).not_null());
///
/// let schema = create_select_schema(&table);
/// assert!(schema.starts_with("export const usersSchema = z.object({"));
/// ```
pub fn create_select_schema(table: &Table) -> String {
    create_schema(table, SchemaVariant::Select)
}

/// Generate the insert schema declaration for a table.
///
/// Differs from the select variant only in that NOT NULL columns with a
/// storage-side default are marked `.optional()`.
pub fn create_insert_schema(table: &Table) -> String {
    create_schema(table, SchemaVariant::Insert)
}

/// Generate one schema declaration for a table.
///
/// Columns are emitted in declaration order; the output is deterministic for
/// a given table description. A table with no columns still yields a
/// (degenerate) `z.object({})` declaration.
pub fn create_schema(table: &Table, variant: SchemaVariant) -> String {
    let fields: Vec<String> = table
        .columns
        .iter()
        .map(|column| format!("  {}: {}", column.name, column_expr(column, variant)))
        .collect();

    crate::zodgen_trace_schema!(table.name(), table.len(), variant);

    format!(
        "export const {}{}Schema = z.object({{\n{}\n}});",
        table.name,
        variant.suffix(),
        fields.join(",\n")
    )
}

/// Map a column to its full validator expression, nullability modifiers included
fn column_expr(column: &Column, variant: SchemaVariant) -> String {
    let mut expr = type_expr(column, variant);

    if !column.not_null {
        expr.push_str(".nullable()");
    }
    if variant.is_insert() && column.not_null && column.has_default {
        expr.push_str(".optional()");
    }

    expr
}

/// Type-based validator selection; the first matching rule wins
fn type_expr(column: &Column, variant: SchemaVariant) -> String {
    // Enumerated values override the data type entirely
    if column.is_enum() {
        let values: Vec<String> = column
            .enum_values
            .iter()
            .map(|value| ts_string_literal(value))
            .collect();
        return format!("z.enum({})", values.join(","));
    }

    if column.kind.is_uuid() {
        return "z.string().uuid()".to_string();
    }

    match column.data_type {
        DataType::Custom => "z.any()".to_string(),
        DataType::Json => JSON_VALUE_EXPR.to_string(),
        DataType::Array => {
            // The element carries its own flags, so they apply inside the array
            let element = match column.base_column.as_deref() {
                Some(base) => column_expr(base, variant),
                None => "z.any()".to_string(),
            };
            format!("z.array({element})")
        }
        DataType::Number => "z.number()".to_string(),
        DataType::Bigint => "z.bigint()".to_string(),
        DataType::Boolean => "z.boolean()".to_string(),
        DataType::Date => "z.date()".to_string(),
        DataType::String => {
            if column.kind.supports_max_length()
                && let Some(length) = column.length
            {
                format!("z.string().max({length})")
            } else {
                "z.string()".to_string()
            }
        }
        DataType::Other => "z.any()".to_string(),
    }
}

// =============================================================================
// Schema File Generation
// =============================================================================

/// Result of schema file generation
#[derive(Debug, Clone, Default)]
pub struct GeneratedFile {
    /// The generated TypeScript source
    pub code: String,
    /// Exported schema const names, in emission order
    pub schemas: Vec<String>,
    /// Any warnings during generation
    pub warnings: Vec<String>,
}

/// Options for schema file generation
#[derive(Debug, Clone)]
pub struct FileOptions {
    /// Extra header comment lines
    pub module_doc: Option<String>,
    /// Emit select schemas
    pub select: bool,
    /// Emit insert schemas
    pub insert: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            module_doc: None,
            select: true,
            insert: true,
        }
    }
}

/// Generate a complete schema file from table descriptions.
///
/// The file carries a header comment, the `zod` import, and the enabled
/// variants for each table in order. Issues that do not prevent generation
/// (duplicate column names, table names that are not JS identifiers, kinds
/// from several dialects in one table) are reported as warnings on the
/// result, never as errors.
pub fn generate_schema_file(tables: &[Table], options: &FileOptions) -> GeneratedFile {
    let mut result = GeneratedFile::default();
    let mut code = String::new();

    // File header
    code.push_str("// Auto-generated Zod schemas. Do not edit by hand.\n");
    if let Some(doc) = &options.module_doc {
        for line in doc.lines() {
            code.push_str("// ");
            code.push_str(line);
            code.push('\n');
        }
    }
    code.push('\n');

    // Imports
    code.push_str("import { z } from \"zod\";\n");

    for table in tables {
        check_table(table, &mut result.warnings);

        if options.select {
            code.push('\n');
            code.push_str(&create_schema(table, SchemaVariant::Select));
            code.push('\n');
            result.schemas.push(format!("{}Schema", table.name));
        }
        if options.insert {
            code.push('\n');
            code.push_str(&create_schema(table, SchemaVariant::Insert));
            code.push('\n');
            result.schemas.push(format!("{}InsertSchema", table.name));
        }
    }

    crate::zodgen_trace_file!(result.schemas.len(), result.warnings.len());

    result.code = code;
    result
}

/// Surface non-fatal issues with a table description
fn check_table(table: &Table, warnings: &mut Vec<String>) {
    if !is_ts_identifier(&table.name) {
        warnings.push(format!(
            "Table name '{}' is not a valid JS identifier",
            table.name
        ));
    }

    let mut seen = HashSet::new();
    for column in &table.columns {
        if !seen.insert(column.name.as_ref()) {
            warnings.push(format!(
                "Column '{}' in table '{}' is declared more than once",
                column.name, table.name
            ));
        }
    }

    let dialects: HashSet<Dialect> = table
        .columns
        .iter()
        .filter_map(|column| column.kind.dialect())
        .collect();
    if dialects.len() > 1 {
        warnings.push(format!(
            "Table '{}' mixes column kinds from more than one dialect",
            table.name
        ));
    }
}
