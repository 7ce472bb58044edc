// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution pipeline.
//!
//! ## Overview
//!
//! Turns a draft location (the reported target plus the dequeued intent's query) into the
//! next location, given the old location and the intent's options. Three stages run in a
//! fixed order, each taking and returning a [`ResolverContext`]:
//!
//! 1. [`resolve_query`]: merge or replace the query, depending on
//!    [`LocationOptions::persist_query`].
//! 2. [`resolve_basename`]: inherit the old basename unless the draft names one.
//! 3. [`resolve_previous`]: attach the old location as `previous`.
//!
//! Only `new_location` changes between stages; `old_location` and `options` pass through.
//! The order matters: the basename stage sees the query-resolved draft, and the previous
//! stage sees the old location exactly as it was handed in.
//!
//! ## Example
//!
//! ```
//! use waymark_location::resolve::{DraftLocation, ResolverContext, resolve};
//! use waymark_location::types::{LocationOptions, PreviousLocation};
//! use waymark_query::FormCodec;
//!
//! let old = PreviousLocation {
//!     pathname: "/list".into(),
//!     query: [("sort".to_owned(), "asc".to_owned())].into(),
//!     basename: Some("/app".into()),
//!     ..PreviousLocation::default()
//! };
//! let draft = DraftLocation {
//!     pathname: "/list".into(),
//!     query: Some([("page".to_owned(), "2".to_owned())].into()),
//!     ..DraftLocation::default()
//! };
//! let cx = ResolverContext::new(old, draft, LocationOptions::PERSIST_QUERY);
//! let next = resolve(cx, &FormCodec);
//! assert_eq!(next.search, "?page=2&sort=asc");
//! assert_eq!(next.basename.as_deref(), Some("/app"));
//! assert_eq!(next.previous.map(|p| p.pathname).as_deref(), Some("/list"));
//! ```

use waymark_query::{Query, QueryCodec};

use crate::queue::IntentQueue;
use crate::types::{Location, LocationOptions, LocationPayload, PreviousLocation};

/// The next location while it is being resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftLocation {
    /// Path segment.
    pub pathname: String,
    /// Serialized query.
    pub search: String,
    /// Fragment.
    pub hash: String,
    /// Decoded query; always `Some` once [`resolve_query`] has run.
    pub query: Option<Query>,
    /// Explicit or inherited basename.
    pub basename: Option<String>,
    /// Set by [`resolve_previous`].
    pub previous: Option<Box<PreviousLocation>>,
}

impl DraftLocation {
    /// Draft a location from a reported target and the query of the intent that caused it.
    pub fn from_payload(payload: LocationPayload, query: Option<Query>) -> Self {
        let LocationPayload {
            pathname,
            search,
            hash,
            basename,
        } = payload;
        Self {
            pathname,
            search,
            hash,
            query,
            basename,
            previous: None,
        }
    }

    /// Finish the draft as a full location with the given route table and queue.
    ///
    /// Staged options are not carried over; the result starts with default options.
    pub fn into_location<R>(self, routes: R, queue: IntentQueue) -> Location<R> {
        Location {
            pathname: self.pathname,
            search: self.search,
            hash: self.hash,
            query: self.query.unwrap_or_default(),
            basename: self.basename,
            previous: self.previous,
            routes,
            queue,
            options: LocationOptions::default(),
        }
    }
}

/// Values threaded through the pipeline stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverContext {
    /// The location being left, already stripped of its own `previous`.
    pub old_location: PreviousLocation,
    /// The draft being resolved.
    pub new_location: DraftLocation,
    /// Options of the intent that caused this navigation.
    pub options: LocationOptions,
}

impl ResolverContext {
    /// Bundle the pipeline inputs.
    pub fn new(
        old_location: PreviousLocation,
        new_location: DraftLocation,
        options: LocationOptions,
    ) -> Self {
        Self {
            old_location,
            new_location,
            options,
        }
    }
}

/// Query stage.
///
/// With `persist_query`, the old and new queries merge (new values win on conflict) and
/// `search` is re-encoded from the merged mapping. Otherwise the draft's query is used as
/// given, or an empty mapping, and `search` is left alone.
pub fn resolve_query(mut cx: ResolverContext, codec: &impl QueryCodec) -> ResolverContext {
    let incoming = cx.new_location.query.take();
    if cx.options.persist_query {
        let mut merged = cx.old_location.query.clone();
        merged.extend(incoming.unwrap_or_default());
        cx.new_location.search = format!("?{}", codec.encode(&merged));
        cx.new_location.query = Some(merged);
    } else {
        cx.new_location.query = Some(incoming.unwrap_or_default());
    }
    cx
}

/// Basename stage.
///
/// A non-empty old basename becomes the default; a basename already on the draft wins.
pub fn resolve_basename(mut cx: ResolverContext) -> ResolverContext {
    if cx.new_location.basename.is_none()
        && let Some(inherited) = cx.old_location.basename.as_ref().filter(|b| !b.is_empty())
    {
        cx.new_location.basename = Some(inherited.clone());
    }
    cx
}

/// Previous stage: the old location becomes the draft's `previous`.
pub fn resolve_previous(mut cx: ResolverContext) -> ResolverContext {
    cx.new_location.previous = Some(Box::new(cx.old_location.clone()));
    cx
}

/// Run all three stages in order and return the resolved draft.
pub fn resolve(cx: ResolverContext, codec: &impl QueryCodec) -> DraftLocation {
    let cx = resolve_query(cx, codec);
    let cx = resolve_basename(cx);
    resolve_previous(cx).new_location
}
