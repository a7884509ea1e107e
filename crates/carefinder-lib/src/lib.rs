//! CareFinder library entry points.
//!
//! This crate exposes the provider-directory lookup pipeline: classifying a
//! free-text location string, building a bounded filter set from raw query
//! input, executing the filtered search against the provider store, and
//! shaping the resulting rows into the map feed contract. Higher-level
//! consumers (the HTTP service, the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod feed;
pub mod filter;
pub mod location;
pub mod store;

pub use error::{Error, Result};
pub use feed::{format_feed, format_item, FeedFailure, FeedItem, FeedResponse};
pub use filter::{FilterSpec, MapFeedQuery};
pub use location::{parse_location, ParsedLocation};
pub use store::{ProviderRecord, ProviderStore};
