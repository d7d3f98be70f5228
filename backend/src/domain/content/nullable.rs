//! Serde helpers for store projections where any field may be `null`.

use serde::{Deserialize, Deserializer};

/// Decode `null` (or an absent field, combined with `#[serde(default)]`) as
/// `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "or_default")]
        items: Vec<u8>,
        #[serde(default, deserialize_with = "or_default")]
        flag: bool,
    }

    #[test]
    fn null_and_missing_fields_become_defaults() {
        let holder: Holder = serde_json::from_value(json!({ "items": null })).expect("decodes");
        assert!(holder.items.is_empty());
        assert!(!holder.flag);
    }

    #[test]
    fn present_values_are_kept() {
        let holder: Holder =
            serde_json::from_value(json!({ "items": [1, 2], "flag": true })).expect("decodes");
        assert_eq!(holder.items, vec![1, 2]);
        assert!(holder.flag);
    }
}
