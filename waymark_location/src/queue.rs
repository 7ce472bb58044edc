// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation intent queue.
//!
//! ## Overview
//!
//! A push or replace does not change the location directly. The history integration
//! performs the navigation and later reports it back as a location-changed action, and
//! that report carries no options. The queue bridges the gap: the intent, with its
//! options and query, waits here until the matching location change consumes it.
//!
//! Entries are appended at the tail and removed only from the head.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::{Location, NavigationIntent};

/// FIFO of pending [`NavigationIntent`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentQueue {
    entries: VecDeque<NavigationIntent>,
}

impl IntentQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Number of pending intents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The oldest pending intent, which the next location change will consume.
    pub fn head(&self) -> Option<&NavigationIntent> {
        self.entries.front()
    }

    /// Append an intent at the tail.
    pub fn enqueue(&mut self, intent: NavigationIntent) {
        self.entries.push_back(intent);
    }

    /// Remove and return the head.
    pub fn dequeue(&mut self) -> Option<NavigationIntent> {
        self.entries.pop_front()
    }

    /// Iterate pending intents, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &NavigationIntent> {
        self.entries.iter()
    }
}

impl FromIterator<NavigationIntent> for IntentQueue {
    fn from_iter<I: IntoIterator<Item = NavigationIntent>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IntentQueue {
    type Item = &'a NavigationIntent;
    type IntoIter = std::collections::vec_deque::Iter<'a, NavigationIntent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Return `state` with `intent` appended to its queue and nothing else changed.
pub fn queue_intent<R: Clone>(state: &Location<R>, intent: NavigationIntent) -> Location<R> {
    let mut next = state.clone();
    next.queue.enqueue(intent);
    next
}
