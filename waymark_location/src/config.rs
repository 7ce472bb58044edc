// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reducer configuration.
//!
//! A [`ReducerConfig`] names the route table and the location the store starts at. It
//! deserializes from JSON with camelCase keys:
//!
//! ```json
//! {
//!   "routes": { "/": { "title": "Home" } },
//!   "initialLocation": { "pathname": "/", "search": "?tab=feed", "basename": "/app" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use waymark_query::{Query, QueryCodec};

use crate::error::ConfigError;
use crate::queue::IntentQueue;
use crate::types::{Location, LocationOptions, RouteTable};

/// Where the store starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDescriptor {
    /// Path segment.
    pub pathname: String,
    /// Search segment, `?` included.
    #[serde(default)]
    pub search: String,
    /// Fragment, `#` included.
    #[serde(default)]
    pub hash: String,
    /// Decoded query; decoded from `search` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    /// Basename for every location that does not name its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basename: Option<String>,
}

impl LocationDescriptor {
    /// A descriptor for `pathname` with everything else empty.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Build the starting location: the given routes, no history, and an empty queue.
    pub fn into_location<R>(self, routes: R, codec: &impl QueryCodec) -> Location<R> {
        let query = self.query.unwrap_or_else(|| codec.decode(&self.search));
        Location {
            pathname: self.pathname,
            search: self.search,
            hash: self.hash,
            query,
            basename: self.basename,
            previous: None,
            routes,
            queue: IntentQueue::new(),
            options: LocationOptions::default(),
        }
    }
}

/// Configuration for [`LocationReducer`](crate::reducer::LocationReducer).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "R: Deserialize<'de> + Default")
)]
pub struct ReducerConfig<R = RouteTable> {
    /// Opaque route table; empty when omitted.
    #[serde(default)]
    pub routes: R,
    /// Starting location.
    pub initial_location: LocationDescriptor,
}

impl<R: Default> ReducerConfig<R> {
    /// Start at `initial_location` with an empty route table.
    pub fn new(initial_location: LocationDescriptor) -> Self {
        Self {
            routes: R::default(),
            initial_location,
        }
    }
}

impl<R> ReducerConfig<R> {
    /// Replace the route table.
    pub fn with_routes(mut self, routes: R) -> Self {
        self.routes = routes;
        self
    }
}

impl<R> ReducerConfig<R>
where
    R: for<'de> Deserialize<'de> + Default,
{
    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use waymark_query::FormCodec;

    #[test]
    fn parses_camel_case_json() {
        let config: ReducerConfig = ReducerConfig::from_json_str(
            r#"{
                "routes": { "/": { "title": "Home" } },
                "initialLocation": { "pathname": "/", "search": "?tab=feed", "basename": "/app" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.initial_location.pathname, "/");
        assert_eq!(config.initial_location.basename.as_deref(), Some("/app"));
    }

    #[test]
    fn routes_default_to_empty() {
        let config: ReducerConfig =
            ReducerConfig::from_json_str(r#"{ "initialLocation": { "pathname": "/" } }"#).unwrap();
        assert!(config.routes.is_empty());
    }

    #[test]
    fn missing_initial_location_is_an_error() {
        let err = ReducerConfig::<RouteTable>::from_json_str(r#"{ "routes": {} }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "{err}");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ReducerConfig::<RouteTable>::load("/nonexistent/waymark.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "{err}");
        assert!(err.to_string().contains("/nonexistent/waymark.json"));
    }

    #[test]
    fn descriptor_decodes_query_when_absent() {
        let descriptor = LocationDescriptor {
            search: "?a=1&b=2".into(),
            ..LocationDescriptor::new("/x")
        };
        let location = descriptor.into_location(RouteTable::new(), &FormCodec);
        assert_eq!(location.query.get("a").map(String::as_str), Some("1"));
        assert_eq!(location.query.len(), 2);
        assert!(location.queue.is_empty());
        assert!(location.previous.is_none());
    }

    #[test]
    fn descriptor_keeps_explicit_query() {
        let descriptor = LocationDescriptor {
            search: "?a=1".into(),
            query: Some(Query::new()),
            ..LocationDescriptor::new("/x")
        };
        let location = descriptor.into_location((), &FormCodec);
        assert!(location.query.is_empty());
    }
}
