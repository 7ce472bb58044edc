// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Query: the query-string codec used by location resolution.
//!
//! ## Overview
//!
//! A location carries its query twice: as the serialized `search` segment and as a
//! decoded [`Query`] mapping. This crate defines the seam between the two.
//! [`QueryCodec`] turns a mapping into a `search` body and back, and [`FormCodec`] is the
//! default implementation, using `application/x-www-form-urlencoded` rules.
//!
//! The mapping is flat: one string value per key. Keys are kept in sorted order, so
//! encoding is deterministic for a given mapping.
//!
//! ## Minimal example
//!
//! ```
//! use waymark_query::{FormCodec, Query, QueryCodec};
//!
//! let mut query = Query::new();
//! query.insert("b".into(), "2".into());
//! query.insert("a".into(), "hello world".into());
//!
//! let codec = FormCodec;
//! let search = codec.encode(&query);
//! assert_eq!(search, "a=hello+world&b=2");
//! assert_eq!(codec.decode(&format!("?{search}")), query);
//! ```

pub mod codec;

pub use codec::{FormCodec, Query, QueryCodec};
