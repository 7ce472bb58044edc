// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymark_location --heading-base-level=0

//! Waymark Location: deterministic location state for client-side routers.
//!
//! ## Overview
//!
//! This crate computes the current [`Location`](crate::types::Location) of a router store
//! from a stream of dispatched [`Action`](crate::action::Action)s.
//! It does not match routes, touch browser history, or perform navigation.
//! A history integration does that and reports back with a location-changed action; this
//! crate only turns `(state, action)` into the next state.
//!
//! ## Intents and the queue
//!
//! A push or replace carries options (such as
//! [`persist_query`](crate::types::LocationOptions::persist_query)) that matter only when
//! the navigation lands. The history integration's later report does not carry them.
//! So push and replace are not applied; their [`NavigationIntent`](crate::types::NavigationIntent)
//! is appended to the state's [queue](crate::queue), and the next location change consumes
//! the head intent, first in first out.
//!
//! ## Resolution
//!
//! A location change runs the [resolution pipeline](crate::resolve) over the old location,
//! the reported target, and the dequeued intent:
//!
//! 1) Query: with `persist_query` the old and new query mappings merge, new values winning,
//!    and `search` is re-encoded. Otherwise the intent's query replaces the old one.
//! 2) Basename: the old basename carries over unless the report names its own.
//! 3) Previous: the old location, minus its own `previous` and the route table, becomes
//!    `previous`. History is therefore at most one level deep.
//!
//! A report that repeats the current pathname, search, and hash while nothing is queued
//! is a no-op and returns the same `Arc`.
//!
//! ## Route tables
//!
//! The route table is opaque. Replacing it is a [two-step handshake](crate::handshake):
//! install the table with staged options, then clear the options once dependants have
//! been recomputed.
//!
//! ## Example
//!
//! ```
//! use waymark_location::action::Action;
//! use waymark_location::config::{LocationDescriptor, ReducerConfig};
//! use waymark_location::reducer::LocationReducer;
//! use waymark_location::types::LocationOptions;
//!
//! let reducer: LocationReducer = LocationReducer::new(ReducerConfig::new(LocationDescriptor {
//!     search: "?sort=asc".into(),
//!     basename: Some("/app".into()),
//!     ..LocationDescriptor::new("/list")
//! }));
//!
//! let state = reducer.initial_state();
//! let push = Action::push("/list?page=2", Some(LocationOptions::PERSIST_QUERY), reducer.codec());
//! let state = reducer.dispatch(&state, &push);
//! assert_eq!(state.pathname, "/list", "push only queues");
//!
//! // The history integration reports where it went.
//! let state = reducer.dispatch(&state, &Action::location_changed("/list?page=2"));
//! assert_eq!(state.search, "?page=2&sort=asc");
//! assert_eq!(state.href(), "/app/list?page=2&sort=asc");
//! assert_eq!(state.previous.as_ref().map(|p| p.search.as_str()), Some("?sort=asc"));
//! ```
//!
//! ## Logging
//!
//! Transitions emit [`tracing`] events: `debug` for committed location changes and route
//! table replacement, `trace` for queued intents and no-op reports. No subscriber is
//! installed by this crate.

pub mod action;
pub mod config;
pub mod error;
pub mod handshake;
pub mod href;
pub mod queue;
pub mod reducer;
pub mod resolve;
pub mod transition;
pub mod types;
