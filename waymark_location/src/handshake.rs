// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route-table replacement handshake.
//!
//! Replacing the route table takes two actions. The first swaps the table in and stages
//! options next to it. Once whatever depends on the table (route matching, say) has been
//! recomputed, the second clears the staged options. Neither touches the location or the
//! intent queue.

use crate::types::{Location, LocationOptions};

/// Install `routes` and stage `options`.
pub fn replace_routes<R: Clone>(
    state: &Location<R>,
    routes: R,
    options: LocationOptions,
) -> Location<R> {
    Location {
        routes,
        options,
        ..state.clone()
    }
}

/// Clear staged options after a replacement has been processed.
pub fn did_replace_routes<R: Clone>(state: &Location<R>) -> Location<R> {
    Location {
        options: LocationOptions::default(),
        ..state.clone()
    }
}
