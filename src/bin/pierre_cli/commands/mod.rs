// ABOUTME: Command implementations for pierre-cli
// ABOUTME: Stateless classification and activity log storage commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod activity_log;
pub mod classify;
