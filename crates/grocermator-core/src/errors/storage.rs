// ABOUTME: Error type for key-value store backends
// ABOUTME: Wraps I/O failures and backend-specific messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use std::io;
use thiserror::Error;

/// Failures reported by a key-value store backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file system error
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Key contains characters the backend cannot represent
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Backend unavailable or misconfigured
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}
