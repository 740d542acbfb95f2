use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MemberId(u64);

impl MemberId {
    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        match u64::try_from(id) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ValidationError::new(format!(
                "Invalid member ID: {id} is not a positive integer"
            ))),
        }
    }

    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl AsRef<u64> for MemberId {
    fn as_ref(&self) -> &u64 {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_valid_ids() {
    for valid_id in [1, 42, i64::MAX] {
        let parsed = MemberId::parse(valid_id).expect("Failed to parse ID");
        assert_eq!(
            *parsed.as_ref() as i64,
            valid_id,
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_invalid_ids() {
    let result = MemberId::parse(-3);
    let error = result.expect_err("negative ID should not parse");
    assert_eq!(
        error.as_ref(),
        "Invalid member ID: -3 is not a positive integer"
    );
    assert!(MemberId::parse(0).is_err());
}
