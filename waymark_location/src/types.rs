// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: locations, previous-location snapshots, navigation intents, and options.
//!
//! ## Overview
//!
//! [`Location`] is the canonical navigation state produced by the
//! [`reducer`](crate::reducer). It is generic over the route table `R`, which this crate
//! stores and hands back but never interprets.
//!
//! [`PreviousLocation`] is the snapshot kept in [`Location::previous`]. It has no
//! `previous` field of its own and no route table, so a location's history is at most one
//! level deep by construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use waymark_query::{Query, QueryCodec};

use crate::href::Href;
use crate::queue::IntentQueue;

/// Default opaque route table: route keys to arbitrary JSON route data.
pub type RouteTable = BTreeMap<String, serde_json::Value>;

/// Options that change how a navigation is resolved.
///
/// Carried by a [`NavigationIntent`] from dispatch time to resolution time, and staged on
/// [`Location::options`] during a route-table replacement.
///
/// Only `persistQuery` is read here. Every other key is kept as-is in
/// [`extra`](Self::extra) for the collaborators that staged it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationOptions {
    /// Merge the previous query into the new one (new keys win) instead of replacing it.
    pub persist_query: bool,
    /// Keys this crate does not interpret, e.g. `updateRoutes`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl LocationOptions {
    /// Options with `persist_query` set.
    pub const PERSIST_QUERY: Self = Self {
        persist_query: true,
        extra: BTreeMap::new(),
    };

    /// Look up an uninterpreted option.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Set an uninterpreted option.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Payload of a location-changed action, as reported by the history integration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    /// Path segment, e.g. `/users/7`.
    pub pathname: String,
    /// Serialized query, including the leading `?` when non-empty.
    #[serde(default)]
    pub search: String,
    /// Fragment, including the leading `#` when non-empty.
    #[serde(default)]
    pub hash: String,
    /// Explicit basename; when absent the previous location's basename is inherited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basename: Option<String>,
}

impl LocationPayload {
    /// Build a payload from an href such as `/users?page=2#top`.
    pub fn from_href(href: &str) -> Self {
        let Href {
            pathname,
            search,
            hash,
        } = Href::parse(href);
        Self {
            pathname,
            search,
            hash,
            basename: None,
        }
    }

    /// Set an explicit basename.
    pub fn with_basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }
}

/// A requested navigation that has not been applied yet.
///
/// Queued by push/replace actions and consumed, in order, by the next location-changed
/// transition. Its `query` and `options` are what that transition resolves with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationIntent {
    /// Target path.
    pub pathname: String,
    /// Target search, including the leading `?` when non-empty.
    #[serde(default)]
    pub search: String,
    /// Target fragment, including the leading `#` when non-empty.
    #[serde(default)]
    pub hash: String,
    /// Decoded query for the target, if the dispatcher supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    /// Resolution options for this navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LocationOptions>,
}

impl NavigationIntent {
    /// Build an intent from an href, decoding its query with `codec`.
    pub fn from_href(href: &str, codec: &impl QueryCodec) -> Self {
        let Href {
            pathname,
            search,
            hash,
        } = Href::parse(href);
        let query = codec.decode(&search);
        Self {
            pathname,
            search,
            hash,
            query: Some(query),
            options: None,
        }
    }

    /// Build an intent from a pathname and a query mapping, encoding `search` with `codec`.
    pub fn from_query(pathname: impl Into<String>, query: Query, codec: &impl QueryCodec) -> Self {
        let search = if query.is_empty() {
            String::new()
        } else {
            format!("?{}", codec.encode(&query))
        };
        Self {
            pathname: pathname.into(),
            search,
            hash: String::new(),
            query: Some(query),
            options: None,
        }
    }

    /// Attach resolution options.
    pub fn with_options(mut self, options: LocationOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Snapshot of a prior location, stored in [`Location::previous`].
///
/// Holds everything a [`Location`] does except its own `previous` and its route table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousLocation {
    /// Path segment.
    pub pathname: String,
    /// Serialized query.
    pub search: String,
    /// Fragment.
    pub hash: String,
    /// Decoded query.
    pub query: Query,
    /// Basename in effect for that location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basename: Option<String>,
    /// Intents that were pending when the location was left.
    #[serde(default)]
    pub queue: IntentQueue,
    /// Options staged at the time.
    #[serde(default)]
    pub options: LocationOptions,
}

impl<R> From<&Location<R>> for PreviousLocation {
    fn from(location: &Location<R>) -> Self {
        Self {
            pathname: location.pathname.clone(),
            search: location.search.clone(),
            hash: location.hash.clone(),
            query: location.query.clone(),
            basename: location.basename.clone(),
            queue: location.queue.clone(),
            options: location.options.clone(),
        }
    }
}

/// Canonical navigation state.
///
/// Produced by [`LocationReducer`](crate::reducer::LocationReducer); callers treat it as
/// immutable and share it behind an `Arc`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location<R = RouteTable> {
    /// Path segment.
    pub pathname: String,
    /// Serialized query, the authoritative form of [`Location::query`].
    #[serde(default)]
    pub search: String,
    /// Fragment.
    #[serde(default)]
    pub hash: String,
    /// Decoded query.
    #[serde(default)]
    pub query: Query,
    /// Prefix inherited across transitions unless a navigation overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basename: Option<String>,
    /// The location this one replaced, one level deep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Box<PreviousLocation>>,
    /// Opaque route table.
    pub routes: R,
    /// Pending navigation intents, oldest first.
    #[serde(default)]
    pub queue: IntentQueue,
    /// Options staged by a route-table replacement.
    #[serde(default)]
    pub options: LocationOptions,
}

impl<R> Location<R> {
    /// Whether `payload` names the same pathname, search, and hash as this location.
    pub fn same_target(&self, payload: &LocationPayload) -> bool {
        self.pathname == payload.pathname
            && self.search == payload.search
            && self.hash == payload.hash
    }

    /// Render the full href: basename, pathname, search, and hash.
    pub fn href(&self) -> String {
        let base = self
            .basename
            .as_deref()
            .map(|b| b.trim_end_matches('/'))
            .unwrap_or_default();
        format!("{base}{}{}{}", self.pathname, self.search, self.hash)
    }
}
