// ABOUTME: Key-value persistence boundary for the application document
// ABOUTME: Pluggable backends (in-memory, JSON files) behind the KeyValueStore trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

/// File-per-key JSON store
pub mod file;
/// In-memory store
pub mod memory;
/// Typed document repository over a store
pub mod repository;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::DataRepository;

use grocermator_core::errors::StorageError;

/// String key-value store holding serialized documents
///
/// Mirrors browser local storage: values are opaque strings and a missing
/// key is not an error.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be written
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`; removing a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
