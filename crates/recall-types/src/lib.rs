//! Foundation types for the Recall selection-recency store.
//!
//! This crate provides the identity seam and the reference item type used
//! throughout the Recall system. Every other Recall crate depends on
//! `recall-types`.
//!
//! # Key Types
//!
//! - [`Keyed`] — Identity seam: items are deduplicated by a stable key,
//!   never by full-struct equality
//! - [`Place`] — Reference item: a selectable place with a stable
//!   `place_id` and a human-readable description
//! - [`AutocompleteResponse`] / [`DetailsResponse`] — Minimal remote-API
//!   response envelopes (decoded by `recall-codec`, never touched by the
//!   history manager)

pub mod envelope;
pub mod keyed;
pub mod place;

pub use envelope::{AutocompleteResponse, DetailsResponse};
pub use keyed::Keyed;
pub use place::Place;
