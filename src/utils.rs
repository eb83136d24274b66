//! Common utilities for schema text generation
//!
//! This module provides the TypeScript literal helpers shared by the
//! declaration generator and the schema-file assembler.

// =============================================================================
// String Utilities
// =============================================================================

/// Escape a string for a TypeScript string literal
pub fn ts_string_literal(input: &str) -> String {
    // JSON.stringify equivalent
    serde_json::to_string(input).unwrap_or_else(|_| format!("\"{}\"", input))
}

/// Check whether a string is a valid ASCII JS identifier.
///
/// Used for warnings only; names are emitted verbatim either way.
pub fn is_ts_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
