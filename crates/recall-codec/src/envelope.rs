use recall_types::{AutocompleteResponse, DetailsResponse};

use crate::error::{CodecError, CodecResult};

/// Decode a remote autocomplete response body.
pub fn decode_autocomplete(bytes: &[u8]) -> CodecResult<AutocompleteResponse> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

/// Decode a remote place-details response body.
pub fn decode_details(bytes: &[u8]) -> CodecResult<DetailsResponse> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_autocomplete_predictions() {
        let body = br#"{
            "predictions": [
                {"place_id": "p1", "description": "First St"},
                {"place_id": "p2", "description": "Second Ave"}
            ],
            "status": "OK"
        }"#;
        let resp = decode_autocomplete(body).unwrap();
        assert_eq!(resp.status, "OK");
        assert_eq!(resp.predictions.len(), 2);
        assert_eq!(resp.predictions[0].place_id, "p1");
    }

    #[test]
    fn decodes_details_result() {
        let body = br#"{
            "result": {"place_id": "p1", "description": "First St"},
            "status": "OK"
        }"#;
        let resp = decode_details(body).unwrap();
        assert_eq!(resp.result.unwrap().description, "First St");
    }

    #[test]
    fn malformed_envelope_is_a_decode_error() {
        assert!(matches!(
            decode_autocomplete(b"not json"),
            Err(CodecError::Decode(_))
        ));
    }
}
