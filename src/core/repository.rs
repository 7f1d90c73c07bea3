//! Record repository: positional add/list/update/delete over a store.
//!
//! Every call reloads the collection from the store, so positions are only
//! meaningful relative to the most recent listing. Mutations write the whole
//! collection back; on a failed save the store keeps its previous contents.

use crate::core::error::{Result, TrackerError, ValidationError};
use crate::core::report::{self, Summary};
use crate::core::storage::RecordStore;
use crate::core::validate;
use crate::models::credential::CredentialRecord;
use chrono::NaiveDate;
use tracing::info;

/// A record together with the 1-based position it occupies in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub position: usize,
    pub record: CredentialRecord,
}

/// The collection as loaded at the start of one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    records: Vec<CredentialRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CredentialRecord> {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with their store positions, optionally ordered by due date.
    ///
    /// The sort is stable: records due on the same day keep their store order.
    pub fn listing(&self, sort_by_due: bool) -> Vec<Listing> {
        let mut listing: Vec<Listing> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| Listing {
                position: i + 1,
                record: record.clone(),
            })
            .collect();
        if sort_by_due {
            listing.sort_by_key(|l| l.record.next_due_date());
        }
        listing
    }

    /// The record at a 1-based position.
    pub fn get(&self, position: i64) -> Result<&CredentialRecord> {
        let idx = self.resolve(position)?;
        Ok(&self.records[idx])
    }

    /// Zero-based offset for a user-facing position.
    fn resolve(&self, position: i64) -> Result<usize> {
        if self.records.is_empty() {
            return Err(ValidationError::EmptyCollection.into());
        }
        let count = self.records.len();
        match usize::try_from(position) {
            Ok(p) if (1..=count).contains(&p) => Ok(p - 1),
            _ => Err(TrackerError::Index { position, count }),
        }
    }
}

pub struct CredentialRepository<S> {
    store: S,
}

impl<S: RecordStore> CredentialRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot::new(self.store.load()?))
    }

    /// Validate the raw fields and append a new record.
    pub fn add(
        &self,
        name: &str,
        last_rotated: &str,
        rotation_days: &str,
    ) -> Result<CredentialRecord> {
        let name = validate::parse_name(name)?;
        let last_rotated = validate::parse_date(last_rotated)?;
        let rotation_days = validate::parse_rotation_days(rotation_days)?;
        let record = CredentialRecord::new(name, last_rotated, rotation_days);

        let mut records = self.store.load()?;
        records.push(record.clone());
        self.store.save(&records)?;
        info!(name = %record.name, position = records.len(), "added credential");
        Ok(record)
    }

    /// The collection in store order, or ordered by next due date.
    pub fn list(&self, sort_by_due: bool) -> Result<Vec<CredentialRecord>> {
        let mut records = self.store.load()?;
        if sort_by_due {
            records.sort_by_key(CredentialRecord::next_due_date);
        }
        Ok(records)
    }

    /// Set a new rotation date on the record at `position` (1-based).
    pub fn update(&self, position: i64, new_date: &str) -> Result<CredentialRecord> {
        let snapshot = self.snapshot()?;
        let idx = snapshot.resolve(position)?;
        let new_date = validate::parse_date(new_date)?;

        let mut records = snapshot.into_records();
        records[idx].last_rotated = new_date;
        let updated = records[idx].clone();
        self.store.save(&records)?;
        info!(name = %updated.name, position, last_rotated = %new_date, "updated rotation date");
        Ok(updated)
    }

    /// Remove the record at `position` (1-based). Later records shift down by one.
    pub fn delete(&self, position: i64) -> Result<CredentialRecord> {
        let snapshot = self.snapshot()?;
        let idx = snapshot.resolve(position)?;

        let mut records = snapshot.into_records();
        let removed = records.remove(idx);
        self.store.save(&records)?;
        info!(name = %removed.name, position, "deleted credential");
        Ok(removed)
    }

    pub fn overdue_report(&self, today: NaiveDate) -> Result<Vec<CredentialRecord>> {
        Ok(report::overdue(self.snapshot()?.records(), today))
    }

    pub fn summary(&self, today: NaiveDate) -> Result<Summary> {
        Ok(report::summarize(self.snapshot()?.records(), today))
    }
}
