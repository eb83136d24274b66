//! Integration tests for writing generated schema files to disk

use tempfile::TempDir;
use zodgen::{Column, DataType, FileOptions, SchemaWriter, Table, WriteError};

fn sample_tables() -> Vec<Table> {
    vec![
        Table::new("users").with_column(Column::new("id", DataType::Number).not_null()),
        Table::new("posts").with_column(Column::new("title", DataType::String).not_null()),
    ]
}

#[test]
fn test_write_schema_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("generated").join("schema.ts");

    let result = SchemaWriter::new(&path).write(&sample_tables()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, result.code, "File content should match the result");
    assert!(
        written.starts_with("// Auto-generated Zod schemas."),
        "Header should survive the round trip"
    );
    assert!(written.contains("import { z } from \"zod\";"));
    assert!(written.contains("export const usersSchema"));
    assert!(written.contains("export const postsInsertSchema"));
    assert_eq!(
        result.schemas,
        vec![
            "usersSchema",
            "usersInsertSchema",
            "postsSchema",
            "postsInsertSchema"
        ]
    );
}

#[test]
fn test_writer_options_are_applied() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.ts");

    let options = FileOptions {
        module_doc: Some("Application tables".to_string()),
        insert: false,
        ..Default::default()
    };
    let result = SchemaWriter::new(&path)
        .with_options(options)
        .write(&sample_tables())
        .unwrap();

    assert_eq!(result.schemas, vec!["usersSchema", "postsSchema"]);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(
        written.contains("// Application tables"),
        "Module doc should appear as a comment: {written}"
    );
    assert!(
        !written.contains("InsertSchema"),
        "Insert schemas were disabled: {written}"
    );
}

#[test]
fn test_writer_rejects_empty_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.ts");

    let err = SchemaWriter::new(&path).write(&[]).unwrap_err();
    assert!(matches!(err, WriteError::NoTables));
    assert!(!path.exists(), "No file should be created on error");
}

#[test]
fn test_writer_overwrites_previous_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.ts");
    let writer = SchemaWriter::new(&path);

    writer.write(&sample_tables()).unwrap();
    writer
        .write(&[Table::new("only").with_column(Column::new("id", DataType::Number).not_null())])
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("export const onlySchema"));
    assert!(
        !written.contains("usersSchema"),
        "Old content should be replaced: {written}"
    );
}

#[test]
fn test_writer_surfaces_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.ts");

    let tables = vec![Table::new("2fa_codes")];
    let result = SchemaWriter::new(&path).write(&tables).unwrap();

    assert_eq!(result.warnings.len(), 1, "{:?}", result.warnings);
    assert!(
        result.warnings[0].contains("not a valid JS identifier"),
        "{:?}",
        result.warnings
    );
    assert!(path.exists(), "Warnings do not block the write");
}
