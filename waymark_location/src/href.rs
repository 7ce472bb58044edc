// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting an href into pathname, search, and hash.

use core::fmt;

/// An href split into its three location segments.
///
/// `search` keeps its leading `?` and `hash` its leading `#`; a bare `?` or `#` with
/// nothing after it is dropped. An empty path becomes `/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Href {
    /// Path segment.
    pub pathname: String,
    /// Search segment, `?` included.
    pub search: String,
    /// Hash segment, `#` included.
    pub hash: String,
}

impl Href {
    /// Split `href` at the first `#`, then the first `?` before it.
    pub fn parse(href: &str) -> Self {
        let (rest, hash) = match href.find('#') {
            Some(i) => href.split_at(i),
            None => (href, ""),
        };
        let (path, search) = match rest.find('?') {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };
        Self {
            pathname: if path.is_empty() { "/" } else { path }.to_owned(),
            search: segment(search, '?'),
            hash: segment(hash, '#'),
        }
    }
}

fn segment(raw: &str, marker: char) -> String {
    if raw.len() == marker.len_utf8() {
        String::new()
    } else {
        raw.to_owned()
    }
}

impl From<&str> for Href {
    fn from(href: &str) -> Self {
        Self::parse(href)
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_all_segments() {
        let href = Href::parse("/a/b?x=1&y=2#frag");
        assert_eq!(href.pathname, "/a/b");
        assert_eq!(href.search, "?x=1&y=2");
        assert_eq!(href.hash, "#frag");
    }

    #[test]
    fn question_mark_inside_hash_stays_in_hash() {
        let href = Href::parse("/a#section?not-a-query");
        assert_eq!(href.pathname, "/a");
        assert_eq!(href.search, "");
        assert_eq!(href.hash, "#section?not-a-query");
    }

    #[test]
    fn empty_path_defaults_to_root() {
        assert_eq!(Href::parse("?q=1").pathname, "/");
        assert_eq!(Href::parse("").pathname, "/");
    }

    #[test]
    fn bare_markers_are_dropped() {
        let href = Href::parse("/a?#");
        assert_eq!(href.search, "");
        assert_eq!(href.hash, "");
        assert_eq!(href.to_string(), "/a");
    }

    #[test]
    fn display_round_trips() {
        let raw = "/users/7?tab=posts#latest";
        assert_eq!(Href::from(raw).to_string(), raw);
    }
}
