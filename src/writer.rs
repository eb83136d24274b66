//! Schema file writer

use std::fs;
use std::path::{Path, PathBuf};

use zodgen_types::Table;

use crate::codegen::{FileOptions, GeneratedFile, generate_schema_file};

/// Writer for generated schema files
pub struct SchemaWriter {
    /// Output file path
    out: PathBuf,
    /// File generation options
    options: FileOptions,
}

impl SchemaWriter {
    /// Create a new schema writer targeting the given file
    pub fn new(out: impl Into<PathBuf>) -> Self {
        Self {
            out: out.into(),
            options: FileOptions::default(),
        }
    }

    /// Set the file generation options
    pub fn with_options(mut self, options: FileOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the output file path
    pub fn path(&self) -> &Path {
        &self.out
    }

    /// Generate and write the schema file for the given tables.
    ///
    /// Parent directories are created as needed. Returns the generation
    /// result so callers can inspect warnings and the exported names.
    pub fn write(&self, tables: &[Table]) -> Result<GeneratedFile, WriteError> {
        if tables.is_empty() {
            return Err(WriteError::NoTables);
        }

        let generated = generate_schema_file(tables, &self.options);

        if let Some(parent) = self.out.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.out, &generated.code)?;

        Ok(generated)
    }
}

/// Schema file write errors
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to write
    #[error("No tables to generate schemas for")]
    NoTables,
}
