//! Interactive menu over the repository.
//!
//! Tracker errors are printed and the loop continues; only Exit (or a failed
//! prompt, e.g. no terminal) ends it.

use crate::cli::credential::listing_table;
use crate::cli::report::{overdue_table, summary_table};
use crate::cli::CliContext;
use crate::constants;
use crate::core::{validate, TrackerError};
use anyhow::Result;
use dialoguer::console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;

const ITEMS: &[&str] = &[
    "Add credential",
    "List credentials",
    "Update rotation date",
    "Delete credential",
    "Check overdue credentials",
    "View summary",
    "Exit",
];

fn banner() {
    println!(
        "{}",
        style(
            "========================================\n      \
             CREDENTIAL ROTATION TRACKER\n\
             ========================================"
        )
        .cyan()
    );
}

fn success(msg: &str) {
    println!("{}", style(msg).green());
}

fn report_error(err: &TrackerError) {
    match err {
        TrackerError::Storage(e) => {
            println!("{} {}", style("warning:").yellow().bold(), e);
            println!("Fix or restore the store file, then try again.");
        }
        other => println!("{}", style(other).red()),
    }
}

fn prompt(theme: &ColorfulTheme, label: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

pub fn run(ctx: &CliContext) -> Result<()> {
    let theme = ColorfulTheme::default();
    banner();
    println!("Store: {}", ctx.store.file.display());

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an option")
            .items(ITEMS)
            .default(0)
            .interact()?;
        debug!(choice = ITEMS[choice], "menu selection");

        let outcome = match choice {
            0 => add(ctx, &theme),
            1 => list(ctx, &theme),
            2 => update(ctx, &theme),
            3 => delete(ctx, &theme),
            4 => overdue(ctx),
            5 => summary(ctx),
            _ => {
                println!("Exiting...");
                return Ok(());
            }
        };

        if let Err(err) = outcome {
            match err.downcast_ref::<TrackerError>() {
                Some(e) => report_error(e),
                None => return Err(err),
            }
        }
    }
}

fn add(ctx: &CliContext, theme: &ColorfulTheme) -> Result<()> {
    let name = prompt(theme, "Credential name")?;
    let last_rotated = prompt(theme, "Last rotated date (YYYY-MM-DD)")?;
    let rotation_days = prompt(theme, "Rotation interval (days)")?;
    let record = ctx.repo.add(&name, &last_rotated, &rotation_days)?;
    success(&format!(
        "Added {} (next due {}).",
        record.name,
        record.next_due_date().format(constants::DATE_FORMAT)
    ));
    Ok(())
}

fn list(ctx: &CliContext, theme: &ColorfulTheme) -> Result<()> {
    let snapshot = ctx.repo.snapshot()?;
    if snapshot.is_empty() {
        println!("No credentials found.");
        return Ok(());
    }
    let sort_by_due = Confirm::with_theme(theme)
        .with_prompt("Sort by next due date?")
        .default(false)
        .interact()?;
    println!("{}", listing_table(&snapshot.listing(sort_by_due), ctx.today));
    Ok(())
}

/// Show the current listing and read a position valid for it.
fn select_position(ctx: &CliContext, theme: &ColorfulTheme, verb: &str) -> Result<Option<i64>> {
    let snapshot = ctx.repo.snapshot()?;
    if snapshot.is_empty() {
        println!("No credentials found.");
        return Ok(None);
    }
    println!("{}", listing_table(&snapshot.listing(false), ctx.today));
    let text = prompt(theme, &format!("Select credential number to {}", verb))?;
    let position = validate::parse_position(&text).map_err(TrackerError::from)?;
    snapshot.get(position)?;
    Ok(Some(position))
}

fn update(ctx: &CliContext, theme: &ColorfulTheme) -> Result<()> {
    let Some(position) = select_position(ctx, theme, "update")? else {
        return Ok(());
    };
    let new_date = prompt(theme, "New rotation date (YYYY-MM-DD)")?;
    let record = ctx.repo.update(position, &new_date)?;
    success(&format!(
        "Rotation date updated for {} (next due {}).",
        record.name,
        record.next_due_date().format(constants::DATE_FORMAT)
    ));
    Ok(())
}

fn delete(ctx: &CliContext, theme: &ColorfulTheme) -> Result<()> {
    let Some(position) = select_position(ctx, theme, "delete")? else {
        return Ok(());
    };
    let removed = ctx.repo.delete(position)?;
    println!("{}", style(format!("Deleted: {}", removed.name)).yellow());
    Ok(())
}

fn overdue(ctx: &CliContext) -> Result<()> {
    let records = ctx.repo.overdue_report(ctx.today)?;
    if records.is_empty() {
        success("No overdue credentials.");
        return Ok(());
    }
    println!("{}", overdue_table(&records, ctx.today));
    Ok(())
}

fn summary(ctx: &CliContext) -> Result<()> {
    let summary = ctx.repo.summary(ctx.today)?;
    println!("{}", summary_table(summary));
    Ok(())
}
