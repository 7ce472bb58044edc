// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-level reducer.
//!
//! ## Overview
//!
//! [`LocationReducer`] maps `(state, action)` to the next state. It is total: every
//! action produces a state, and actions it does not own return the input `Arc`
//! unchanged.
//!
//! | action | effect |
//! |---|---|
//! | push, replace | intent appended to the queue |
//! | location changed | [transition](crate::transition) |
//! | replace routes | table installed, options staged |
//! | did replace routes | staged options cleared |
//! | anything else | identity |
//!
//! ## Sharing
//!
//! States are handed around as `Arc<Location<R>>` and never mutated. A transition
//! builds a new value; the identity and no-op cases return the same `Arc`, so a store
//! can skip notifying subscribers when `Arc::ptr_eq` holds.

use std::sync::Arc;

use tracing::{debug, trace};
use waymark_query::{FormCodec, QueryCodec};

use crate::action::{Action, AsAction};
use crate::config::ReducerConfig;
use crate::handshake::{did_replace_routes, replace_routes};
use crate::queue::queue_intent;
use crate::transition::location_changed;
use crate::types::{Location, RouteTable};

/// Location reducer.
///
/// ## Usage
///
/// - Construct with [`LocationReducer::new`] to use the form-urlencoded query codec, or
///   with [`LocationReducer::with_codec`] to supply your own [`QueryCodec`].
/// - Seed the store with [`LocationReducer::initial_state`].
/// - Call [`LocationReducer::dispatch`] for each action, in dispatch order.
pub struct LocationReducer<R = RouteTable, C: QueryCodec = FormCodec> {
    pub(crate) initial: Arc<Location<R>>,
    pub(crate) codec: C,
}

impl<R, C: QueryCodec + core::fmt::Debug> core::fmt::Debug for LocationReducer<R, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LocationReducer")
            .field("initial", &self.initial.href())
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl<R: Clone> LocationReducer<R, FormCodec> {
    /// Create a reducer with the default query codec.
    pub fn new(config: ReducerConfig<R>) -> Self {
        Self::with_codec(config, FormCodec)
    }
}

impl<R: Clone, C: QueryCodec> LocationReducer<R, C> {
    /// Create a reducer with an explicit query codec.
    pub fn with_codec(config: ReducerConfig<R>, codec: C) -> Self {
        let ReducerConfig {
            routes,
            initial_location,
        } = config;
        let initial = Arc::new(initial_location.into_location(routes, &codec));
        Self { initial, codec }
    }

    /// The state a store starts from: the configured location and routes, nothing queued.
    pub fn initial_state(&self) -> Arc<Location<R>> {
        Arc::clone(&self.initial)
    }

    /// The query codec in use.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Reduce with an optional state, starting from [`initial_state`](Self::initial_state)
    /// when there is none.
    pub fn reduce(
        &self,
        state: Option<&Arc<Location<R>>>,
        action: &impl AsAction<R>,
    ) -> Arc<Location<R>> {
        match state {
            Some(state) => self.dispatch(state, action),
            None => self.dispatch(&self.initial, action),
        }
    }

    /// Compute the state that follows `state` after `action`.
    pub fn dispatch(
        &self,
        state: &Arc<Location<R>>,
        action: &impl AsAction<R>,
    ) -> Arc<Location<R>> {
        let Some(action) = action.as_action() else {
            return Arc::clone(state);
        };
        match action {
            Action::Push(intent) | Action::Replace(intent) => {
                trace!(
                    kind = ?action.kind(),
                    pathname = %intent.pathname,
                    pending = state.queue.len() + 1,
                    "queued navigation intent"
                );
                Arc::new(queue_intent(state, intent.clone()))
            }
            Action::LocationChanged(payload) => location_changed(state, payload, &self.codec),
            Action::ReplaceRoutes { routes, options } => {
                debug!(persist_query = options.persist_query, "replacing route table");
                Arc::new(replace_routes(state, routes.clone(), options.clone()))
            }
            Action::DidReplaceRoutes => {
                trace!("route table replacement done");
                Arc::new(did_replace_routes(state))
            }
            Action::Go(_)
            | Action::GoBack
            | Action::GoForward
            | Action::Block
            | Action::Unblock => Arc::clone(state),
        }
    }
}


#[cfg(test)]
mod sequence_tests {
    use super::*;
    use crate::config::LocationDescriptor;
    use crate::types::LocationOptions;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Step {
        Push(u8, bool),
        Replace(u8, bool),
        Change(u8),
        History,
        ReplaceRoutes(u8),
        DidReplaceRoutes,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (0_u8..4, any::<bool>()).prop_map(|(p, persist)| Step::Push(p, persist)),
            (0_u8..4, any::<bool>()).prop_map(|(p, persist)| Step::Replace(p, persist)),
            (0_u8..4).prop_map(Step::Change),
            Just(Step::History),
            (0_u8..4).prop_map(Step::ReplaceRoutes),
            Just(Step::DidReplaceRoutes),
        ]
    }

    fn table(n: u8) -> RouteTable {
        let mut routes = RouteTable::new();
        routes.insert(format!("/r{n}"), serde_json::Value::from(n));
        routes
    }

    proptest! {
        // Pushes and replaces are consumed in order, one per change, and routes only move
        // on replacement.
        #[test]
        fn queue_is_fifo_and_routes_survive(steps in proptest::collection::vec(step(), 0..40)) {
            let config = ReducerConfig::new(LocationDescriptor::new("/")).with_routes(table(0));
            let r = LocationReducer::new(config);
            let mut state = r.initial_state();
            let mut expected_queue: Vec<String> = Vec::new();
            let mut expected_routes = table(0);

            for step in steps {
                let action = match step {
                    Step::Push(p, persist) => {
                        let href = format!("/p{p}?k{p}=v");
                        expected_queue.push(format!("/p{p}"));
                        let options = persist.then_some(LocationOptions::PERSIST_QUERY);
                        Action::push(&href, options, r.codec())
                    }
                    Step::Replace(p, persist) => {
                        let href = format!("/r{p}?k{p}=v");
                        expected_queue.push(format!("/r{p}"));
                        let options = persist.then_some(LocationOptions::PERSIST_QUERY);
                        Action::replace(&href, options, r.codec())
                    }
                    Step::Change(p) => {
                        if !expected_queue.is_empty() {
                            expected_queue.remove(0);
                        }
                        Action::location_changed(&format!("/c{p}"))
                    }
                    Step::History => Action::GoBack,
                    Step::ReplaceRoutes(n) => {
                        expected_routes = table(n);
                        Action::replace_routes(table(n), LocationOptions::default())
                    }
                    Step::DidReplaceRoutes => Action::DidReplaceRoutes,
                };
                state = r.dispatch(&state, &action);

                let queued: Vec<String> =
                    state.queue.iter().map(|i| i.pathname.clone()).collect();
                prop_assert_eq!(&queued, &expected_queue);
                prop_assert_eq!(&state.routes, &expected_routes);
            }
        }
    }
}
