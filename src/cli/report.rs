use crate::cli::credential::{check_format, header};
use crate::cli::CliContext;
use crate::constants;
use crate::core::report::Summary;
use crate::models::credential::CredentialRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

#[derive(Args, Debug)]
pub struct OverdueArgs {
    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub(crate) fn overdue_table(records: &[CredentialRecord], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header(&["Name", "Last Rotated", "Next Due", "Days Overdue"]));
    for record in records {
        table.add_row(vec![
            Cell::new(&record.name).fg(Color::Red),
            Cell::new(record.last_rotated.format(constants::DATE_FORMAT)),
            Cell::new(record.next_due_date().format(constants::DATE_FORMAT)),
            Cell::new(-record.days_remaining(today)),
        ]);
    }
    table
}

pub(crate) fn summary_table(summary: Summary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec![
        Cell::new("Total credentials tracked"),
        Cell::new(summary.total),
    ]);
    let overdue = Cell::new(summary.overdue);
    table.add_row(vec![
        Cell::new("Overdue credentials"),
        if summary.overdue > 0 {
            overdue.fg(Color::Red)
        } else {
            overdue.fg(Color::Green)
        },
    ]);
    table
}

pub fn run_overdue(ctx: &CliContext, args: OverdueArgs) -> Result<()> {
    check_format(&args.format)?;
    let records = ctx.repo.overdue_report(ctx.today)?;

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&records).context("serialize overdue report")?;
        println!("{}", json);
        return Ok(());
    }

    if records.is_empty() {
        println!("No overdue credentials.");
        return Ok(());
    }
    println!("{}", overdue_table(&records, ctx.today));
    Ok(())
}

pub fn run_summary(ctx: &CliContext, args: SummaryArgs) -> Result<()> {
    check_format(&args.format)?;
    let summary = ctx.repo.summary(ctx.today)?;

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&summary).context("serialize summary")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", summary_table(summary));
    Ok(())
}
