//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Unique identifier for a gym member.
///
/// Assigned by whoever enrolls the member (the front desk types it in), so
/// unlike generated ids it carries no randomness. Uniqueness is enforced by
/// the member directory, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u32);

impl MemberId {
    /// Creates a MemberId from a raw integer.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the inner integer.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for MemberId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("id", "must be a whole number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_parses_from_string() {
        let id: MemberId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn member_id_parse_trims_whitespace() {
        let id: MemberId = " 7 ".parse().unwrap();
        assert_eq!(id, MemberId::new(7));
    }

    #[test]
    fn member_id_rejects_empty_input() {
        let result = "".parse::<MemberId>();
        assert_eq!(result, Err(ValidationError::empty_field("id")));
    }

    #[test]
    fn member_id_rejects_non_numeric_input() {
        assert!("abc".parse::<MemberId>().is_err());
        assert!("-3".parse::<MemberId>().is_err());
        assert!("1.5".parse::<MemberId>().is_err());
    }

    #[test]
    fn member_id_displays_as_integer() {
        assert_eq!(MemberId::new(1001).to_string(), "1001");
    }

    #[test]
    fn member_id_serializes_transparently() {
        let json = serde_json::to_string(&MemberId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
