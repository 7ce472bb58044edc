// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A toy history integration.
//!
//! The reducer never navigates. Something else watches navigation actions, moves a
//! history stack, and reports the new location back. This example plays that part with an
//! in-memory stack, which is enough to see why intents wait in the queue: the report only
//! carries the pathname, search, and hash, while the options ride along in the queue.
//!
//! While history is blocked the store does not dispatch push or replace to the reducer at
//! all. A queued intent with no matching landing would otherwise be consumed by the next
//! unrelated location change.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p waymark_demos --example history_listener`

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use waymark_location::action::Action;
use waymark_location::config::{LocationDescriptor, ReducerConfig};
use waymark_location::href::Href;
use waymark_location::reducer::LocationReducer;
use waymark_location::types::{Location, LocationOptions};

/// In-memory browser history.
#[derive(Debug)]
struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    blocked: bool,
}

impl MemoryHistory {
    fn new(start: &str) -> Self {
        Self {
            entries: vec![start.to_owned()],
            index: 0,
            blocked: false,
        }
    }

    /// Apply a navigation command; returns the href to report, if the location moved.
    fn apply(&mut self, action: &Action) -> Option<String> {
        if self.blocked && !matches!(action, Action::Unblock) {
            return None;
        }
        match action {
            Action::Push(intent) => {
                self.entries.truncate(self.index + 1);
                self.entries.push(href_of(&intent.pathname, &intent.search, &intent.hash));
                self.index += 1;
            }
            Action::Replace(intent) => {
                self.entries[self.index] = href_of(&intent.pathname, &intent.search, &intent.hash);
            }
            Action::Go(delta) => {
                let target = self.index as i64 + i64::from(*delta);
                let target = usize::try_from(target).ok().filter(|t| *t < self.entries.len())?;
                self.index = target;
            }
            Action::GoBack => self.index = self.index.checked_sub(1)?,
            Action::GoForward if self.index + 1 < self.entries.len() => self.index += 1,
            Action::Block => {
                self.blocked = true;
                return None;
            }
            Action::Unblock => {
                self.blocked = false;
                return None;
            }
            _ => return None,
        }
        Some(self.entries[self.index].clone())
    }
}

fn href_of(pathname: &str, search: &str, hash: &str) -> String {
    Href {
        pathname: pathname.to_owned(),
        search: search.to_owned(),
        hash: hash.to_owned(),
    }
    .to_string()
}

struct Store {
    reducer: LocationReducer,
    history: MemoryHistory,
    state: Arc<Location>,
}

impl Store {
    fn dispatch(&mut self, action: Action) {
        // Blocked history drops push/replace; their intents must not reach the queue.
        if self.history.blocked && action.kind().is_navigation_with_payload() {
            println!("{:<12} -> blocked", format!("{:?}", action.kind()));
            return;
        }
        self.state = self.reducer.dispatch(&self.state, &action);
        if let Some(href) = self.history.apply(&action) {
            self.state = self
                .reducer
                .dispatch(&self.state, &Action::location_changed(&href));
        }
        println!(
            "{:<12} -> {:<28} pending={}",
            format!("{:?}", action.kind()),
            self.state.href(),
            self.state.queue.len()
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ReducerConfig::new(LocationDescriptor::new("/"));
    let reducer: LocationReducer = LocationReducer::new(config);
    let state = reducer.initial_state();
    let mut store = Store {
        history: MemoryHistory::new(&state.href()),
        reducer,
        state,
    };

    let persist = Some(LocationOptions::PERSIST_QUERY);
    let push = |href: &str, options| Action::push(href, options, &waymark_query::FormCodec);

    store.dispatch(push("/search?q=rust", None));
    store.dispatch(push("/search?page=2", persist.clone()));
    store.dispatch(push("/search?page=3", persist.clone()));
    store.dispatch(Action::GoBack);
    // Blocked history ignores commands; the reducer treats them as identity either way.
    store.dispatch(Action::Block);
    store.dispatch(Action::GoBack);
    store.dispatch(push("/ignored", persist));
    store.dispatch(Action::Unblock);
    store.dispatch(Action::GoForward);
}
