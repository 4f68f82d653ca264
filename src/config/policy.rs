//! Missing-source policy attached to every manifest entry.
use serde::Deserialize;
use std::fmt;

/// What to do when a copy entry's source path does not exist.
///
/// Each manifest role carries a default (dependency and executable
/// directories skip silently, validation files warn, dependent files fail),
/// and any entry may override it with the structured form
/// `{ path = "...", on-missing = "warn" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Silently skip the entry.
    Skip,
    /// Log a warning and skip the entry.
    Warn,
    /// Abort the run with an error.
    Fail,
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPolicy::Skip => write!(f, "skip"),
            MissingPolicy::Warn => write!(f, "warn"),
            MissingPolicy::Fail => write!(f, "fail"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        policy: MissingPolicy,
    }

    #[test]
    fn deserializes_lowercase_values() {
        let h: Holder = toml::from_str(r#"policy = "skip""#).unwrap();
        assert_eq!(h.policy, MissingPolicy::Skip);
        let h: Holder = toml::from_str(r#"policy = "warn""#).unwrap();
        assert_eq!(h.policy, MissingPolicy::Warn);
        let h: Holder = toml::from_str(r#"policy = "fail""#).unwrap();
        assert_eq!(h.policy, MissingPolicy::Fail);
    }

    #[test]
    fn rejects_unknown_values() {
        let res: Result<Holder, _> = toml::from_str(r#"policy = "ignore""#);
        assert!(res.is_err());
    }

    #[test]
    fn display_round_trips_names() {
        assert_eq!(MissingPolicy::Skip.to_string(), "skip");
        assert_eq!(MissingPolicy::Warn.to_string(), "warn");
        assert_eq!(MissingPolicy::Fail.to_string(), "fail");
    }
}
