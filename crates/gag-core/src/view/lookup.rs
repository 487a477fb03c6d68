use serde::Deserialize;

use crate::error::DomainError;

/// What a detail view does when the requested record does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Show the first record of the dataset instead.
    #[default]
    FallbackToFirst,
    /// Report the record as not found.
    Strict,
}

/// A looked-up record and whether it came from the fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<T> {
    pub value: T,
    pub fallback: bool,
}

impl LookupPolicy {
    /// Settle a lookup result. `first` is only consulted on a miss.
    pub fn resolve<T>(
        self,
        found: Option<T>,
        first: impl FnOnce() -> Option<T>,
        entity_type: &'static str,
        key: &str,
    ) -> Result<Lookup<T>, DomainError> {
        let not_found = || DomainError::NotFound {
            entity_type,
            key: key.to_string(),
        };

        match (found, self) {
            (Some(value), _) => Ok(Lookup {
                value,
                fallback: false,
            }),
            (None, LookupPolicy::Strict) => Err(not_found()),
            (None, LookupPolicy::FallbackToFirst) => first()
                .map(|value| Lookup {
                    value,
                    fallback: true,
                })
                .ok_or_else(not_found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_ignores_policy() {
        let hit = LookupPolicy::Strict
            .resolve(Some(7), || Some(1), "post", "7")
            .unwrap();
        assert_eq!(hit, Lookup { value: 7, fallback: false });
    }

    #[test]
    fn test_miss_falls_back_by_default() {
        let miss = LookupPolicy::default()
            .resolve(None, || Some(1), "post", "404")
            .unwrap();
        assert_eq!(miss, Lookup { value: 1, fallback: true });
    }

    #[test]
    fn test_strict_miss_is_not_found() {
        let err = LookupPolicy::Strict
            .resolve::<u32>(None, || Some(1), "user", "ghost")
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "user", .. }));
    }

    #[test]
    fn test_fallback_on_empty_dataset_is_not_found() {
        let err = LookupPolicy::FallbackToFirst
            .resolve::<u32>(None, || None, "post", "1")
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
