//! Property tests for key hashing and partial matching.

#[cfg(test)]
mod tests {
    use crate::key::{hash_key, partial_match_key};
    use crate::testing::{arb_key, arb_value, deep_copy, reverse_fields};
    use crate::value::Value;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hash_ignores_field_order(key in arb_key()) {
            prop_assert_eq!(hash_key(&key), hash_key(&reverse_fields(&key)));
        }

        #[test]
        fn hash_of_equal_keys_is_equal(key in arb_key()) {
            prop_assert_eq!(hash_key(&key), hash_key(&deep_copy(&key)));
        }

        #[test]
        fn hash_is_valid_json(key in arb_key()) {
            let parsed: serde_json::Value = serde_json::from_str(&hash_key(&key)).unwrap();
            prop_assert!(parsed.is_array());
        }

        #[test]
        fn key_matches_its_own_prefix(key in arb_key(), cut in 0usize..6) {
            let items = key.as_list().unwrap();
            let prefix = Value::list(items.iter().take(cut).cloned());
            prop_assert!(partial_match_key(&key, &prefix));
        }

        #[test]
        fn key_matches_a_fresh_copy_of_itself(value in arb_value()) {
            prop_assert!(partial_match_key(&value, &deep_copy(&value)));
            prop_assert!(partial_match_key(&value, &reverse_fields(&value)));
        }

        #[test]
        fn longer_key_does_not_match(key in arb_key(), extra in arb_value()) {
            let mut items = key.as_list().unwrap().to_vec();
            items.push(extra);
            prop_assert!(!partial_match_key(&key, &Value::from(items)));
        }
    }
}
