// ABOUTME: Configuration module for the analytics core
// ABOUTME: Environment-driven policy configuration with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! Configuration management for analytics policy values.

/// Analytics policy configuration
pub mod analytics;

pub use analytics::{AnalyticsConfig, AnalyticsConfigError};
