// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reducer basics.
//!
//! Queues two pushes, then lands them one at a time, showing how each landing takes the
//! options of the intent at the head of the queue.
//!
//! Run:
//! - `RUST_LOG=waymark_location=trace cargo run -p waymark_demos --example navigate_basics`

use tracing_subscriber::EnvFilter;
use waymark_location::action::Action;
use waymark_location::config::{LocationDescriptor, ReducerConfig};
use waymark_location::reducer::LocationReducer;
use waymark_location::types::LocationOptions;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reducer: LocationReducer = LocationReducer::new(ReducerConfig::new(LocationDescriptor {
        search: "?sort=name".into(),
        basename: Some("/app".into()),
        ..LocationDescriptor::new("/users")
    }));
    let mut state = reducer.initial_state();
    println!("start:    {}", state.href());

    // Page 2 keeps the sort order; the profile link does not.
    let codec = reducer.codec();
    state = reducer.dispatch(
        &state,
        &Action::push("/users?page=2", Some(LocationOptions::PERSIST_QUERY), codec),
    );
    state = reducer.dispatch(&state, &Action::push("/users/7", None, codec));
    println!("queued:   {} intents, still at {}", state.queue.len(), state.href());

    state = reducer.dispatch(&state, &Action::location_changed("/users?page=2"));
    println!("landed:   {} (query {:?})", state.href(), state.query);

    state = reducer.dispatch(&state, &Action::location_changed("/users/7"));
    println!("landed:   {} (query {:?})", state.href(), state.query);

    if let Some(previous) = &state.previous {
        println!("previous: {}{}", previous.pathname, previous.search);
    }

    // Reporting the current location again with nothing queued changes nothing.
    let again = reducer.dispatch(&state, &Action::location_changed("/users/7"));
    println!("repeat report is a no-op: {}", std::sync::Arc::ptr_eq(&state, &again));
}
