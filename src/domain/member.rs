use serde::{Deserialize, Serialize};

use super::{MemberId, MemberName, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: MemberName,
    pub last_name: MemberName,
}

impl Member {
    pub fn new(id: MemberId, first_name: MemberName, last_name: MemberName) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }

    pub fn parse(
        id: i64,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            MemberId::parse(id)?,
            MemberName::parse(first_name.to_owned())?,
            MemberName::parse(last_name.to_owned())?,
        ))
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.as_ref(), self.last_name.as_ref())
    }
}
