use serde::{Deserialize, Serialize};

use crate::place::Place;

/// Response envelope for an autocomplete query: the predicted places plus
/// the service status string (`"OK"`, `"ZERO_RESULTS"`, ...).
///
/// Only the minimal `predictions` list shape is modeled; the remote API's
/// richer per-prediction fields are out of scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    /// Predicted places, best match first. Absent in error responses.
    #[serde(default)]
    pub predictions: Vec<Place>,
    /// Service status string.
    pub status: String,
}

/// Response envelope for a place-details query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsResponse {
    /// The resolved place, if the lookup succeeded.
    #[serde(default)]
    pub result: Option<Place>,
    /// Service status string.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autocomplete_predictions_default_to_empty() {
        let resp: AutocompleteResponse =
            serde_json::from_str(r#"{"status":"ZERO_RESULTS"}"#).unwrap();
        assert!(resp.predictions.is_empty());
        assert_eq!(resp.status, "ZERO_RESULTS");
    }

    #[test]
    fn details_result_is_optional() {
        let resp: DetailsResponse =
            serde_json::from_str(r#"{"status":"NOT_FOUND"}"#).unwrap();
        assert!(resp.result.is_none());
    }
}
