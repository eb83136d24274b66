//! Tracing utilities for schema generation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event for one generated schema declaration.
///
/// ```ignore
/// zodgen_trace_schema!(table.name(), table.len(), variant);
/// ```
#[macro_export]
macro_rules! zodgen_trace_schema {
    ($table:expr, $columns:expr, $variant:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(table = %$table, columns = $columns, variant = %$variant, "zodgen.schema");
    };
}

/// Emit an info-level tracing event when a schema file has been assembled.
///
/// ```ignore
/// zodgen_trace_file!(result.schemas.len(), result.warnings.len());
/// ```
#[macro_export]
macro_rules! zodgen_trace_file {
    ($schemas:expr, $warnings:expr) => {
        #[cfg(feature = "tracing")]
        tracing::info!(schemas = $schemas, warnings = $warnings, "zodgen.file");
    };
}
