// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`ReducerConfig`](crate::config::ReducerConfig).
///
/// The reducer itself never fails; only configuration input can.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The config was not valid JSON or did not have the expected shape.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
