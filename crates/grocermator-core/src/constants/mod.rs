// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys and the standard unit vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Standard unit vocabulary and unit suggestions
pub mod units;

/// Persistence keys and export naming
pub mod storage {
    /// Key under which the whole application document is stored
    pub const DATA_KEY: &str = "grocermator-data";
    /// Prefix of exported backup file names
    pub const BACKUP_FILE_PREFIX: &str = "grocermator-backup-";
    /// Extension of exported backup files
    pub const BACKUP_FILE_EXTENSION: &str = "json";
}

