//! Serde support for partial-update payloads.
//!
//! A plain `Option<Option<T>>` field collapses an explicit `null` into the
//! outer `None`, so "absent" and "set to null" become indistinguishable.
//! Fields that may be cleared use [`double_option`] together with
//! `#[serde(default)]`:
//!
//! - field absent      -> `None`
//! - field is `null`   -> `Some(None)`
//! - field has a value -> `Some(Some(value))`

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(inner)`, keeping `null` as `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "super::double_option")]
        parent_id: Option<Option<i64>>,
    }

    #[test]
    fn absent_field_is_none() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p.parent_id, None);
    }

    #[test]
    fn null_field_is_some_none() {
        let p: Payload = serde_json::from_str(r#"{"parent_id": null}"#).unwrap();
        assert_eq!(p.parent_id, Some(None));
    }

    #[test]
    fn value_field_is_some_some() {
        let p: Payload = serde_json::from_str(r#"{"parent_id": 7}"#).unwrap();
        assert_eq!(p.parent_id, Some(Some(7)));
    }
}
