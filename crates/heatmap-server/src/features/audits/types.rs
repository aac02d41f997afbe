//! Audit domain types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{validate_audit_type, ValidationError};

/// The fixed audit type enumeration
///
/// Immutable after creation; no operation mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AuditType {
    Internal,
    External,
}

impl AuditType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditType::Internal => "internal",
            AuditType::External => "external",
        }
    }
}

impl std::fmt::Display for AuditType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AuditType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_audit_type(s)?;
        match s {
            "internal" => Ok(AuditType::Internal),
            _ => Ok(AuditType::External),
        }
    }
}

/// A materialized audit row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Audit {
    pub id: i64,
    pub audit_type: AuditType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub audit_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_audit_type_round_trip() {
        assert_eq!(AuditType::from_str("internal"), Ok(AuditType::Internal));
        assert_eq!(AuditType::from_str("external"), Ok(AuditType::External));
        assert_eq!(AuditType::Internal.as_str(), "internal");
        assert_eq!(AuditType::External.to_string(), "external");
    }

    #[test]
    fn test_audit_type_rejects_unknown_values() {
        assert_eq!(AuditType::from_str("INTERNAL"), Err(ValidationError::InvalidEnum));
        assert_eq!(AuditType::from_str("vendor"), Err(ValidationError::InvalidEnum));
    }

    #[test]
    fn test_audit_type_serde_lowercase() {
        let json = serde_json::to_string(&AuditType::Internal).unwrap();
        assert_eq!(json, "\"internal\"");
        let parsed: AuditType = serde_json::from_str("\"external\"").unwrap();
        assert_eq!(parsed, AuditType::External);
    }
}
