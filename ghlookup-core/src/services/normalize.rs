//! Response normalizer
//!
//! Maps a raw API payload onto one of the two fixed result shapes. Field
//! presence and types are not trusted: every field comes back as a `Field`.

use serde_json::Value as JsonValue;

use crate::domain::{Field, LookupKind, LookupResult, RepoSummary, UserSummary};

/// Normalize a payload fetched under `kind`. Pure and deterministic.
pub fn normalize(kind: LookupKind, raw: &JsonValue) -> LookupResult {
    match kind {
        LookupKind::User => LookupResult::User(normalize_user(raw)),
        LookupKind::Repo => LookupResult::Repo(normalize_repo(raw)),
    }
}

pub fn normalize_user(raw: &JsonValue) -> UserSummary {
    UserSummary {
        full_name: string_field(raw, "name"),
        public_repo_count: count_field(raw, "public_repos"),
    }
}

pub fn normalize_repo(raw: &JsonValue) -> RepoSummary {
    RepoSummary {
        name: string_field(raw, "name"),
        star_count: count_field(raw, "stargazers_count"),
    }
}

fn string_field(raw: &JsonValue, key: &str) -> Field<String> {
    match raw.get(key) {
        None | Some(JsonValue::Null) => Field::Missing,
        Some(JsonValue::String(s)) => Field::Known(s.clone()),
        Some(_) => Field::Malformed,
    }
}

/// Non-negative integers only; negatives, floats and strings are malformed
fn count_field(raw: &JsonValue, key: &str) -> Field<u64> {
    match raw.get(key) {
        None | Some(JsonValue::Null) => Field::Missing,
        Some(value) => value.as_u64().map_or(Field::Malformed, Field::Known),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_payload() {
        let raw = json!({ "name": "Chris Wanstrath", "public_repos": 107 });
        let result = normalize(LookupKind::User, &raw);

        assert_eq!(
            result,
            LookupResult::User(UserSummary {
                full_name: Field::Known("Chris Wanstrath".to_string()),
                public_repo_count: Field::Known(107),
            })
        );
    }

    #[test]
    fn test_repo_payload() {
        let raw = json!({ "name": "node", "stargazers_count": 100000 });
        let result = normalize(LookupKind::Repo, &raw);

        assert_eq!(
            result,
            LookupResult::Repo(RepoSummary {
                name: Field::Known("node".to_string()),
                star_count: Field::Known(100000),
            })
        );
    }

    #[test]
    fn test_null_name_is_missing() {
        let summary = normalize_user(&json!({ "name": null, "public_repos": 4 }));
        assert_eq!(summary.full_name, Field::Missing);
        assert_eq!(summary.public_repo_count, Field::Known(4));
    }

    #[test]
    fn test_absent_fields_are_missing() {
        let summary = normalize_repo(&json!({ "full_name": "nodejs/node" }));
        assert_eq!(summary.name, Field::Missing);
        assert_eq!(summary.star_count, Field::Missing);
    }

    #[test]
    fn test_mistyped_fields_are_malformed() {
        let summary = normalize_user(&json!({ "name": 42, "public_repos": "7" }));
        assert_eq!(summary.full_name, Field::Malformed);
        assert_eq!(summary.public_repo_count, Field::Malformed);
    }

    #[test]
    fn test_negative_and_fractional_counts_are_malformed() {
        assert_eq!(
            normalize_repo(&json!({ "stargazers_count": -1 })).star_count,
            Field::Malformed
        );
        assert_eq!(
            normalize_repo(&json!({ "stargazers_count": 1.5 })).star_count,
            Field::Malformed
        );
    }

    #[test]
    fn test_non_object_payload() {
        let result = normalize(LookupKind::User, &json!([1, 2, 3]));
        assert_eq!(
            result,
            LookupResult::User(UserSummary {
                full_name: Field::Missing,
                public_repo_count: Field::Missing,
            })
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let raw = json!({
            "login": "defunkt",
            "name": "Chris Wanstrath",
            "public_repos": 107,
            "stargazers_count": 5
        });
        // Tag follows the requested kind, not whatever keys happen to exist
        assert_eq!(normalize(LookupKind::User, &raw).kind(), LookupKind::User);
    }
}
