//! Error types for the site survey crate.
//!
//! The tree operations themselves never fail; these cover the file boundary
//! and pricing.

use crate::model::CatalogKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading survey, catalog or pricing documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the document from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON of the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when pricing a rollup.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Gross-up from a margin of 100% or more has no finite price.
    #[error("{} '{id}' has margin {margin_percent}%, must be below 100%", .kind.label())]
    InvalidMargin {
        kind: CatalogKind,
        id: String,
        margin_percent: f64,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
