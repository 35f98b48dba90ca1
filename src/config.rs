// ABOUTME: Environment-driven configuration for embedding applications
// ABOUTME: Bundles logging settings and the environment name, read once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

//! Environment-only configuration, read once at startup

use crate::logging::LoggingConfig;
use std::env;

/// Top-level service configuration assembled from environment variables
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Environment name (development, staging, production)
    pub environment: String,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            logging: LoggingConfig::from_env(),
        }
    }
}
