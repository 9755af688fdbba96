// ABOUTME: Common benchmark utilities and fixtures for planner performance tests
// ABOUTME: Provides reusable catalog generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Common benchmark utilities and fixtures.

pub mod fixtures;
