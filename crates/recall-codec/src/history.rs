use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CodecError, CodecResult};

/// Encode an ordered item sequence as the persisted history document: a
/// pretty-printed UTF-8 JSON array, one element per item, sequence order
/// preserved.
pub fn encode_history<T: Serialize>(items: &[T]) -> CodecResult<Vec<u8>> {
    serde_json::to_vec_pretty(items).map_err(CodecError::Encode)
}

/// Decode a persisted history document back into an ordered item sequence.
///
/// Strict: anything other than a well-formed JSON array whose elements all
/// deserialize as `T` is a [`CodecError::Decode`].
pub fn decode_history<T: DeserializeOwned>(bytes: &[u8]) -> CodecResult<Vec<T>> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}
