use serde::{Deserialize, Serialize};

use crate::keyed::Keyed;

/// A selectable place, as surfaced by an address-autocomplete service.
///
/// `place_id` is the stable identity key assigned by the remote service;
/// `description` is the display string shown to (and selected by) the user.
/// Only these two fields are persisted in recency history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Stable identifier assigned by the remote places service.
    pub place_id: String,
    /// Human-readable address or establishment description.
    pub description: String,
}

impl Place {
    /// Create a new place from an identifier and a description.
    pub fn new(place_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            description: description.into(),
        }
    }
}

impl Keyed for Place {
    type Key = str;

    fn key(&self) -> &str {
        &self.place_id
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_place_id_only() {
        let a = Place::new("ChIJ123", "1 Main St, Springfield");
        let b = Place::new("ChIJ123", "1 Main Street, Springfield");
        assert!(a.same_key(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn display_shows_description() {
        let p = Place::new("ChIJ123", "221B Baker St, London");
        assert_eq!(p.to_string(), "221B Baker St, London");
    }

    #[test]
    fn serde_roundtrip() {
        let p = Place::new("ChIJ456", "4 Privet Drive");
        let json = serde_json::to_string(&p).unwrap();
        let back: Place = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn serde_field_names_are_wire_names() {
        let p = Place::new("id-1", "somewhere");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["place_id"], "id-1");
        assert_eq!(json["description"], "somewhere");
    }
}
