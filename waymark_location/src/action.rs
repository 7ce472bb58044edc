// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions consumed by the reducer.
//!
//! ## Overview
//!
//! [`Action`] is the closed set of router actions. Only some of them change location
//! state:
//!
//! - [`Action::Push`] and [`Action::Replace`] carry a [`NavigationIntent`] and are queued.
//! - [`Action::LocationChanged`] runs the [transition](crate::transition).
//! - [`Action::ReplaceRoutes`] and [`Action::DidReplaceRoutes`] form the
//!   [handshake](crate::handshake).
//!
//! The history commands (`Go`, `GoBack`, `GoForward`, `Block`, `Unblock`) are acted on
//! by the history integration and leave location state untouched.
//!
//! Host applications usually have a wider action type of their own. Implement
//! [`AsAction`] for it so the reducer can pick out router actions; everything else is
//! the identity transition.
//!
//! Actions serialize in the usual `{ "type": ..., "payload": ... }` shape:
//!
//! ```
//! use waymark_location::action::Action;
//!
//! let action: Action = serde_json::from_value(serde_json::json!({
//!     "type": "PUSH",
//!     "payload": {
//!         "pathname": "/users",
//!         "search": "?page=2",
//!         "options": { "persistQuery": true }
//!     }
//! }))
//! .unwrap();
//! assert!(action.kind().is_navigation_with_payload());
//! ```

use serde::{Deserialize, Serialize};
use waymark_query::QueryCodec;

use crate::types::{LocationOptions, LocationPayload, NavigationIntent, RouteTable};

/// A router action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum Action<R = RouteTable> {
    /// Navigate to a new entry.
    Push(NavigationIntent),
    /// Navigate, replacing the current entry.
    Replace(NavigationIntent),
    /// Move through history by a relative offset.
    Go(i32),
    /// Move one entry back.
    GoBack,
    /// Move one entry forward.
    GoForward,
    /// Block navigation.
    Block,
    /// Lift a navigation block.
    Unblock,
    /// The history integration reports the location it navigated to.
    LocationChanged(LocationPayload),
    /// Install a new route table and stage options for the recompute that follows.
    ReplaceRoutes {
        /// The new table.
        routes: R,
        /// Options staged until [`Action::DidReplaceRoutes`].
        #[serde(default)]
        options: LocationOptions,
    },
    /// The recompute after a route-table replacement has finished.
    DidReplaceRoutes,
}

/// Discriminant of an [`Action`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// [`Action::Push`].
    Push,
    /// [`Action::Replace`].
    Replace,
    /// [`Action::Go`].
    Go,
    /// [`Action::GoBack`].
    GoBack,
    /// [`Action::GoForward`].
    GoForward,
    /// [`Action::Block`].
    Block,
    /// [`Action::Unblock`].
    Unblock,
    /// [`Action::LocationChanged`].
    LocationChanged,
    /// [`Action::ReplaceRoutes`].
    ReplaceRoutes,
    /// [`Action::DidReplaceRoutes`].
    DidReplaceRoutes,
}

impl ActionKind {
    /// Whether this kind carries a navigation intent that the reducer queues.
    pub fn is_navigation_with_payload(self) -> bool {
        matches!(self, Self::Push | Self::Replace)
    }

    /// Whether this kind is a command for the history integration.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::Push
                | Self::Replace
                | Self::Go
                | Self::GoBack
                | Self::GoForward
                | Self::Block
                | Self::Unblock
        )
    }
}

impl<R> Action<R> {
    /// Push the location described by `href`, decoding its query with `codec`.
    pub fn push(href: &str, options: Option<LocationOptions>, codec: &impl QueryCodec) -> Self {
        Self::Push(intent(href, options, codec))
    }

    /// Replace the current entry with the location described by `href`.
    pub fn replace(href: &str, options: Option<LocationOptions>, codec: &impl QueryCodec) -> Self {
        Self::Replace(intent(href, options, codec))
    }

    /// Report that the history integration is now at `href`.
    pub fn location_changed(href: &str) -> Self {
        Self::LocationChanged(LocationPayload::from_href(href))
    }

    /// Install `routes`, staging `options`.
    pub fn replace_routes(routes: R, options: LocationOptions) -> Self {
        Self::ReplaceRoutes { routes, options }
    }

    /// The discriminant of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Push(_) => ActionKind::Push,
            Self::Replace(_) => ActionKind::Replace,
            Self::Go(_) => ActionKind::Go,
            Self::GoBack => ActionKind::GoBack,
            Self::GoForward => ActionKind::GoForward,
            Self::Block => ActionKind::Block,
            Self::Unblock => ActionKind::Unblock,
            Self::LocationChanged(_) => ActionKind::LocationChanged,
            Self::ReplaceRoutes { .. } => ActionKind::ReplaceRoutes,
            Self::DidReplaceRoutes => ActionKind::DidReplaceRoutes,
        }
    }

    /// The intent carried by a push or replace.
    pub fn intent(&self) -> Option<&NavigationIntent> {
        match self {
            Self::Push(intent) | Self::Replace(intent) => Some(intent),
            _ => None,
        }
    }
}

fn intent(
    href: &str,
    options: Option<LocationOptions>,
    codec: &impl QueryCodec,
) -> NavigationIntent {
    NavigationIntent {
        options,
        ..NavigationIntent::from_href(href, codec)
    }
}

/// Pick the router action, if any, out of a host application's action type.
pub trait AsAction<R = RouteTable> {
    /// Returns the router action, or `None` when this action is not one.
    fn as_action(&self) -> Option<&Action<R>>;
}

impl<R> AsAction<R> for Action<R> {
    #[inline]
    fn as_action(&self) -> Option<&Action<R>> {
        Some(self)
    }
}

impl<R, A: AsAction<R>> AsAction<R> for Option<A> {
    #[inline]
    fn as_action(&self) -> Option<&Action<R>> {
        self.as_ref().and_then(AsAction::as_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use waymark_query::FormCodec;

    #[test]
    fn push_and_replace_are_the_payload_family() {
        let push: Action = Action::push("/a", None, &FormCodec);
        let replace: Action = Action::replace("/a", None, &FormCodec);
        assert!(push.kind().is_navigation_with_payload());
        assert!(replace.kind().is_navigation_with_payload());
        for other in [
            Action::Go(-1),
            Action::GoBack,
            Action::GoForward,
            Action::Block,
            Action::Unblock,
            Action::location_changed("/a"),
            Action::replace_routes(RouteTable::new(), LocationOptions::default()),
            Action::DidReplaceRoutes,
        ] {
            assert!(!other.kind().is_navigation_with_payload(), "{other:?}");
            assert!(other.intent().is_none(), "{other:?}");
        }
    }

    #[test]
    fn history_commands_are_navigation() {
        assert!(ActionKind::Go.is_navigation());
        assert!(ActionKind::Block.is_navigation());
        assert!(!ActionKind::LocationChanged.is_navigation());
        assert!(!ActionKind::DidReplaceRoutes.is_navigation());
    }

    #[test]
    fn push_carries_options_and_decoded_query() {
        let persist = Some(LocationOptions::PERSIST_QUERY);
        let action: Action = Action::push("/list?page=3", persist, &FormCodec);
        let intent = action.intent().expect("push carries an intent");
        assert_eq!(intent.options, Some(LocationOptions::PERSIST_QUERY));
        assert_eq!(
            intent.query.as_ref().and_then(|q| q.get("page")).map(String::as_str),
            Some("3")
        );
    }

    #[test]
    fn serde_shape() {
        let action: Action =
            Action::replace_routes(RouteTable::new(), LocationOptions::PERSIST_QUERY);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "REPLACE_ROUTES",
                "payload": { "routes": {}, "options": { "persistQuery": true } }
            })
        );
        let unit: Action =
            serde_json::from_value(serde_json::json!({ "type": "DID_REPLACE_ROUTES" })).unwrap();
        assert_eq!(unit, Action::DidReplaceRoutes);
        let changed: Action = serde_json::from_value(serde_json::json!({
            "type": "LOCATION_CHANGED",
            "payload": { "pathname": "/a", "search": "?x=1", "hash": "" }
        }))
        .unwrap();
        assert_eq!(changed, Action::location_changed("/a?x=1"));
    }

    #[test]
    fn option_wrapper_forwards() {
        let some: Option<Action> = Some(Action::GoBack);
        let none: Option<Action> = None;
        assert_eq!(some.as_action().map(Action::kind), Some(ActionKind::GoBack));
        assert!(none.as_action().is_none());
    }
}
