//! Read-only views derived from a snapshot.

use crate::models::credential::CredentialRecord;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub overdue: usize,
}

/// Overdue records in collection order.
pub fn overdue(records: &[CredentialRecord], today: NaiveDate) -> Vec<CredentialRecord> {
    records
        .iter()
        .filter(|r| r.is_overdue(today))
        .cloned()
        .collect()
}

pub fn summarize(records: &[CredentialRecord], today: NaiveDate) -> Summary {
    Summary {
        total: records.len(),
        overdue: records.iter().filter(|r| r.is_overdue(today)).count(),
    }
}
