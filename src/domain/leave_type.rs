use serde::{Deserialize, Serialize};

use super::ValidationError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LeaveTypeId(u64);

impl LeaveTypeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl AsRef<u64> for LeaveTypeId {
    fn as_ref(&self) -> &u64 {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeName(String);

impl LeaveTypeName {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        match name.trim().chars().count() {
            x if x < 1 => Err(ValidationError::new(
                "Leave type name cannot be empty".to_string(),
            )),
            x if x > 255 => Err(ValidationError::new(
                "Max leave type name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name.trim().to_owned())),
        }
    }
}

impl AsRef<String> for LeaveTypeName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

/// Presentation hint passed through untouched, e.g. `"blue-500"` or `"#ff0000"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCode(String);

impl ColorCode {
    pub fn new(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<String> for ColorCode {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: LeaveTypeId,
    pub name: LeaveTypeName,
    pub color_code: Option<ColorCode>,
}

impl LeaveType {
    pub fn new(
        id: LeaveTypeId,
        name: LeaveTypeName,
        color_code: Option<ColorCode>,
    ) -> Self {
        Self {
            id,
            name,
            color_code,
        }
    }
}
