//! Subject identity for regulatory reports

use serde::{Deserialize, Serialize};

/// Identity of the person a suspicious-activity report is filed about.
///
/// Only the fields the report formatter renders; KYC documents and account
/// data live outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub full_name: String,
    pub email: String,
    pub address: Option<String>,
    pub id_number: Option<String>,
}

impl SubjectInfo {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            address: None,
            id_number: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_id_number(mut self, id_number: impl Into<String>) -> Self {
        self.id_number = Some(id_number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fields() {
        let subject = SubjectInfo::new("Jane Roe", "jane@example.com")
            .with_address("1 Main St")
            .with_id_number("ID-443");

        assert_eq!(subject.full_name, "Jane Roe");
        assert_eq!(subject.address.as_deref(), Some("1 Main St"));
        assert_eq!(subject.id_number.as_deref(), Some("ID-443"));
    }

    #[test]
    fn test_optional_fields_default_none() {
        let subject = SubjectInfo::new("Jane Roe", "jane@example.com");
        assert!(subject.address.is_none());
        assert!(subject.id_number.is_none());
    }
}
