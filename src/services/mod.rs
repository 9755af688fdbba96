// ABOUTME: Application services around the planning engine
// ABOUTME: Document import/export and import conflict resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Application service layer
//!
//! Services operate on the exchanged [`data_transfer::AppData`] document and
//! are independent of any particular storage backend.

/// Document import, export, and backup naming
pub mod data_transfer;

/// Conflict detection and resolution for imports
pub mod import_preview;
