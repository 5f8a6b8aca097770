//! JSON codec for the Recall selection-recency store.
//!
//! Two independent halves share this crate:
//!
//! - **History documents** — [`encode_history`] / [`decode_history`] map an
//!   ordered item sequence to/from the persisted on-disk format: a UTF-8
//!   JSON array, one element per item, sequence order preserved.
//! - **Response envelopes** — [`decode_autocomplete`] / [`decode_details`]
//!   parse the remote places API's minimal response shapes. The history
//!   manager never uses this half.
//!
//! # Design Rules
//!
//! 1. Encoding is deterministic: the same sequence always produces the same
//!    bytes.
//! 2. `decode_history(encode_history(s)) == s` for every sequence the
//!    history manager can produce.
//! 3. Decoding is strict: malformed JSON, a non-array document, or elements
//!    of the wrong shape are hard [`CodecError::Decode`] failures, never
//!    silently dropped data.
//! 4. The codec is pure and synchronous; it owns no I/O.

pub mod envelope;
pub mod error;
pub mod history;

pub use envelope::{decode_autocomplete, decode_details};
pub use error::{CodecError, CodecResult};
pub use history::{decode_history, encode_history};
