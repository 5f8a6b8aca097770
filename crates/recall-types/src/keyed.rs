/// Identity seam for history items.
///
/// Recency bookkeeping deduplicates by a stable identity key, not by full
/// value equality: two items with the same key are the same logical entry
/// even if their display fields differ (a place whose description was
/// re-fetched is still the same place).
pub trait Keyed {
    /// The stable identity key. Borrowed, so string-keyed items can expose
    /// `str` without cloning.
    type Key: PartialEq + ?Sized;

    /// The identity key of this item.
    fn key(&self) -> &Self::Key;

    /// Returns `true` if `self` and `other` are the same logical entry.
    fn same_key(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named {
        id: String,
        label: String,
    }

    impl Keyed for Named {
        type Key = str;
        fn key(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn same_key_ignores_non_key_fields() {
        let a = Named {
            id: "x".into(),
            label: "first".into(),
        };
        let b = Named {
            id: "x".into(),
            label: "second".into(),
        };
        let c = Named {
            id: "y".into(),
            label: "first".into(),
        };
        assert!(a.same_key(&b));
        assert!(!a.same_key(&c));
        assert_eq!(a.label, "first");
        assert_eq!(b.label, "second");
    }
}
