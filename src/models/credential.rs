use crate::core::policy::{self, RotationStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked credential. Only the rotation date is recorded, never the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub name: String,
    pub last_rotated: NaiveDate,
    pub rotation_days: u32,
}

impl CredentialRecord {
    pub fn new(name: impl Into<String>, last_rotated: NaiveDate, rotation_days: u32) -> Self {
        Self {
            name: name.into(),
            last_rotated,
            rotation_days,
        }
    }

    pub fn next_due_date(&self) -> NaiveDate {
        policy::next_due_date(self.last_rotated, self.rotation_days)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        policy::is_overdue(self.last_rotated, self.rotation_days, today)
    }

    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        policy::days_remaining(self.last_rotated, self.rotation_days, today)
    }

    pub fn status(&self, today: NaiveDate) -> RotationStatus {
        RotationStatus::compute(self.last_rotated, self.rotation_days, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_plain_date_and_integer_interval() {
        let record = CredentialRecord::new(
            "db-password",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            30,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"db-password","last_rotated":"2024-01-01","rotation_days":30}"#
        );
    }

    #[test]
    fn test_rejects_malformed_date_on_deserialize() {
        let json = r#"{"name":"x","last_rotated":"01/02/2024","rotation_days":30}"#;
        assert!(serde_json::from_str::<CredentialRecord>(json).is_err());
    }

    #[test]
    fn test_rejects_negative_interval_on_deserialize() {
        let json = r#"{"name":"x","last_rotated":"2024-01-02","rotation_days":-3}"#;
        assert!(serde_json::from_str::<CredentialRecord>(json).is_err());
    }
}
