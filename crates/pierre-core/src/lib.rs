// ABOUTME: Core crate entry point shared by the classifier and the HTTP server
// ABOUTME: Exposes activity models and the unified error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Types shared across the workspace:
//! - **models**: activity classification DTOs and the persisted log record
//! - **errors**: `AppError` / `ErrorCode` with optional HTTP mapping
//!   (enable the `http-response` feature)

/// Unified error handling with standard error codes
pub mod errors;

/// Activity classification and activity log data models
pub mod models;
