// ABOUTME: Configuration module root
// ABOUTME: Environment-only configuration for the activity log server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based server configuration
pub mod environment;
