// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codec trait and the form-urlencoded default.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// A decoded query: flat string keys to string values, in sorted key order.
pub type Query = BTreeMap<String, String>;

/// Convert between a [`Query`] mapping and the body of a `search` segment.
///
/// `encode` never emits the leading `?`; callers that build a `search` segment add it.
/// `decode` tolerates a leading `?` so a location's `search` can be passed as-is.
///
/// Implementations must round-trip flat mappings: `decode(&encode(q)) == q`.
pub trait QueryCodec {
    /// Serialize a mapping into a query-string body.
    fn encode(&self, query: &Query) -> String;
    /// Parse a query-string body (with or without a leading `?`) into a mapping.
    fn decode(&self, search: &str) -> Query;
}

impl<C: QueryCodec + ?Sized> QueryCodec for &C {
    #[inline]
    fn encode(&self, query: &Query) -> String {
        (**self).encode(query)
    }

    #[inline]
    fn decode(&self, search: &str) -> Query {
        (**self).decode(search)
    }
}

/// `application/x-www-form-urlencoded` codec.
///
/// Spaces encode as `+`. When a key repeats on decode, the last value wins, since
/// [`Query`] holds a single value per key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormCodec;

impl QueryCodec for FormCodec {
    fn encode(&self, query: &Query) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter())
            .finish()
    }

    fn decode(&self, search: &str) -> Query {
        let body = search.strip_prefix('?').unwrap_or(search);
        form_urlencoded::parse(body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}
