// ABOUTME: Error type for malformed import documents and stored data
// ABOUTME: Import is all-or-nothing, so any of these rejects the whole document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use thiserror::Error;

/// Errors raised while reading an exported document
#[derive(Debug, Error)]
pub enum FormatError {
    /// The document root is not a JSON object
    #[error("Invalid data format: document root must be an object")]
    NotAnObject,

    /// A required top-level field is absent
    #[error("Invalid data format: missing field '{field}'")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A top-level field exists but is not an array
    #[error("Invalid data format: field '{field}' must be an array")]
    NotAnArray {
        /// Name of the offending field
        field: &'static str,
    },

    /// The text is not valid JSON or an element has the wrong shape
    #[error("Invalid data format: {0}")]
    Malformed(#[from] serde_json::Error),
}
