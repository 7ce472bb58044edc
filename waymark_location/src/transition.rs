// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Location-changed transition.
//!
//! ## Steps
//!
//! 1. No-op guard: a report of the current pathname, search, and hash with nothing
//!    queued returns the same `Arc`, so consumers can skip work by pointer comparison.
//! 2. Dequeue the head intent for its options and query (empty when nothing is queued).
//! 3. Snapshot the current state as a [`PreviousLocation`], which leaves out its own
//!    `previous` and the route table.
//! 4. Draft the next location from the payload plus the dequeued query and run the
//!    [resolution pipeline](crate::resolve).
//! 5. Reattach the current route table and the rest of the queue.

use std::sync::Arc;

use tracing::{debug, trace};
use waymark_query::QueryCodec;

use crate::resolve::{DraftLocation, ResolverContext, resolve};
use crate::types::{Location, LocationOptions, LocationPayload, PreviousLocation};

/// Apply a location-changed report to `state`.
pub fn location_changed<R: Clone>(
    state: &Arc<Location<R>>,
    payload: &LocationPayload,
    codec: &impl QueryCodec,
) -> Arc<Location<R>> {
    if state.same_target(payload) && state.queue.is_empty() {
        trace!(pathname = %payload.pathname, "location unchanged");
        return Arc::clone(state);
    }

    let mut queue = state.queue.clone();
    let (options, query) = match queue.dequeue() {
        Some(intent) => (intent.options.unwrap_or_default(), intent.query),
        None => (LocationOptions::default(), None),
    };

    let old_location = PreviousLocation::from(&**state);
    let draft = DraftLocation::from_payload(payload.clone(), query);
    let persist_query = options.persist_query;
    let resolved = resolve(ResolverContext::new(old_location, draft, options), codec);

    debug!(
        from = %state.pathname,
        to = %resolved.pathname,
        persist_query,
        pending = queue.len(),
        "location changed"
    );
    Arc::new(resolved.into_location(state.routes.clone(), queue))
}
