use chrono::NaiveDate;
use rotation_tracker::core::report::Summary;
use rotation_tracker::core::{CredentialRepository, JsonFileStore, TrackerError};
use std::fs;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn repo(dir: &TempDir) -> CredentialRepository<JsonFileStore> {
    CredentialRepository::new(JsonFileStore::new(dir.path().join("credentials.json")))
}

#[test]
fn test_db_password_scenario() {
    let dir = TempDir::new().unwrap();
    let repo = repo(&dir);
    let record = repo.add("db-password", "2024-01-01", "30").unwrap();
    let today = date(2024, 2, 15);

    assert_eq!(record.next_due_date(), date(2024, 1, 31));
    assert!(record.is_overdue(today));
    assert_eq!(record.days_remaining(today), -15);
}

#[test]
fn test_records_survive_new_repository() {
    let dir = TempDir::new().unwrap();
    repo(&dir).add("api-key", "2024-02-01", "90").unwrap();

    let reopened = repo(&dir);
    let records = reopened.list(false).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "api-key");
}

#[test]
fn test_delete_second_of_three() {
    let dir = TempDir::new().unwrap();
    let repo = repo(&dir);
    for name in ["one", "two", "three"] {
        repo.add(name, "2024-01-01", "30").unwrap();
    }

    assert_eq!(repo.delete(2).unwrap().name, "two");

    let listing = repo.snapshot().unwrap().listing(false);
    let shown: Vec<_> = listing
        .iter()
        .map(|l| (l.position, l.record.name.as_str()))
        .collect();
    assert_eq!(shown, vec![(1, "one"), (2, "three")]);
}

#[test]
fn test_external_edit_seen_by_next_operation() {
    let dir = TempDir::new().unwrap();
    let repo = repo(&dir);
    repo.add("one", "2024-01-01", "30").unwrap();

    fs::write(
        dir.path().join("credentials.json"),
        r#"[{"name":"edited","last_rotated":"2024-02-01","rotation_days":7}]"#,
    )
    .unwrap();

    let records = repo.list(false).unwrap();
    assert_eq!(records[0].name, "edited");
}

#[test]
fn test_corrupt_store_reported_and_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    fs::write(&path, "not json").unwrap();
    let repo = repo(&dir);

    assert!(matches!(repo.list(false), Err(TrackerError::Storage(_))));
    assert!(matches!(
        repo.add("x", "2024-01-01", "30"),
        Err(TrackerError::Storage(_))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
}

#[test]
fn test_summary_with_one_overdue() {
    let dir = TempDir::new().unwrap();
    let repo = repo(&dir);
    repo.add("old", "2024-01-01", "30").unwrap();
    repo.add("fresh", "2024-02-10", "30").unwrap();
    repo.add("due-today", "2024-02-14", "1").unwrap();

    let today = date(2024, 2, 15);
    assert_eq!(repo.summary(today).unwrap(), Summary { total: 3, overdue: 1 });
    let overdue = repo.overdue_report(today).unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].name, "old");
}
