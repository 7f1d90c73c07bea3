use crate::cli::CliContext;
use crate::constants;
use crate::core::policy::RotationState;
use crate::core::validate;
use crate::core::Listing;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, Table};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Credential name (duplicates allowed)
    pub name: String,

    /// Date the credential was last rotated (YYYY-MM-DD)
    pub last_rotated: String,

    /// Rotation interval in days
    pub rotation_days: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Order by next due date instead of store order
    #[arg(long)]
    pub sort_by_due: bool,

    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Position shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub position: String,

    /// New rotation date (YYYY-MM-DD)
    pub date: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Position shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub position: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListItem {
    position: usize,
    name: String,
    last_rotated: NaiveDate,
    rotation_days: u32,
    next_due: NaiveDate,
    days_remaining: i64,
    status: RotationState,
}

impl ListItem {
    fn new(listing: &Listing, today: NaiveDate) -> Self {
        let status = listing.record.status(today);
        Self {
            position: listing.position,
            name: listing.record.name.clone(),
            last_rotated: listing.record.last_rotated,
            rotation_days: listing.record.rotation_days,
            next_due: status.next_due,
            days_remaining: status.days_remaining,
            status: status.state,
        }
    }
}

pub(crate) fn check_format(format: &str) -> Result<()> {
    if format != "table" && format != "json" {
        bail!("invalid format: {} (use table|json)", format);
    }
    Ok(())
}

pub(crate) fn status_cell(state: RotationState) -> Cell {
    let color = match state {
        RotationState::Ok => Color::Green,
        RotationState::Overdue => Color::Red,
    };
    Cell::new(state.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

pub(crate) fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
        .collect()
}

/// Table of listed records with their status as of `today`.
pub(crate) fn listing_table(listing: &[Listing], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header(&[
        "#",
        "Name",
        "Last Rotated",
        "Next Due",
        "Due In",
        "Status",
    ]));
    for item in listing.iter().map(|l| ListItem::new(l, today)) {
        table.add_row(vec![
            Cell::new(item.position),
            Cell::new(item.name),
            Cell::new(item.last_rotated.format(constants::DATE_FORMAT)),
            Cell::new(item.next_due.format(constants::DATE_FORMAT)),
            Cell::new(format!("{} days", item.days_remaining)),
            status_cell(item.status),
        ]);
    }
    table
}

pub fn run_add(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let record = ctx
        .repo
        .add(&args.name, &args.last_rotated, &args.rotation_days)?;
    println!(
        "Added {} (next due {})",
        record.name,
        record.next_due_date().format(constants::DATE_FORMAT)
    );
    Ok(())
}

pub fn run_list(ctx: &CliContext, args: ListArgs) -> Result<()> {
    check_format(&args.format)?;
    let listing = ctx.repo.snapshot()?.listing(args.sort_by_due);

    if args.format == "json" {
        let items: Vec<ListItem> = listing.iter().map(|l| ListItem::new(l, ctx.today)).collect();
        let json = serde_json::to_string_pretty(&items).context("serialize list")?;
        println!("{}", json);
        return Ok(());
    }

    if listing.is_empty() {
        println!("No credentials found");
        return Ok(());
    }

    println!("{}", listing_table(&listing, ctx.today));
    Ok(())
}

pub fn run_update(ctx: &CliContext, args: UpdateArgs) -> Result<()> {
    let position = validate::parse_position(&args.position)?;
    let record = ctx.repo.update(position, &args.date)?;
    println!(
        "Updated {}: last rotated {}, next due {}",
        record.name,
        record.last_rotated.format(constants::DATE_FORMAT),
        record.next_due_date().format(constants::DATE_FORMAT)
    );
    Ok(())
}

pub fn run_delete(ctx: &CliContext, args: DeleteArgs) -> Result<()> {
    let position = validate::parse_position(&args.position)?;
    let removed = ctx.repo.delete(position)?;
    println!("Deleted {}", removed.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::credential::CredentialRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_check_format() {
        assert!(check_format("table").is_ok());
        assert!(check_format("json").is_ok());
        assert!(check_format("yaml").is_err());
    }

    #[test]
    fn test_list_item_json() {
        let listing = Listing {
            position: 2,
            record: CredentialRecord::new("db-password", date(2024, 1, 1), 30),
        };
        let item = ListItem::new(&listing, date(2024, 2, 15));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["position"], 2);
        assert_eq!(value["next_due"], "2024-01-31");
        assert_eq!(value["days_remaining"], -15);
        assert_eq!(value["status"], "overdue");
    }

    #[test]
    fn test_listing_table_has_row_per_record() {
        let listing = vec![
            Listing {
                position: 1,
                record: CredentialRecord::new("a", date(2024, 1, 1), 30),
            },
            Listing {
                position: 2,
                record: CredentialRecord::new("b", date(2024, 2, 1), 30),
            },
        ];
        let table = listing_table(&listing, date(2024, 2, 15));
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("OVERDUE"));
        assert!(rendered.contains("2024-03-02"));
    }
}
