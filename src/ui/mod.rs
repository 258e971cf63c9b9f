//! Terminal UI helpers for task display.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::entities::{Statistics, Task};

fn status_color(completed: bool) -> Color {
    if completed {
        Color::Green
    } else {
        Color::Yellow
    }
}

fn priority_color(priority: &str) -> Color {
    match priority {
        "P1" => Color::Red,
        "P3" => Color::DarkGrey,
        _ => Color::White,
    }
}

/// Create a table for displaying tasks
pub fn task_table<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Priority").fg(Color::Cyan),
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Created At").fg(Color::Cyan),
    ]);

    for task in tasks {
        let status = if task.completed { "Completed" } else { "Pending" };

        table.add_row(vec![
            Cell::new(task.id),
            Cell::new(&task.title),
            Cell::new(status).fg(status_color(task.completed)),
            Cell::new(&task.priority).fg(priority_color(&task.priority)),
            Cell::new(&task.category),
            Cell::new(task.created_at.format("%b %d %H:%M")),
        ]);
    }

    table
}

/// Display aggregate statistics in a formatted way
pub fn display_stats(stats: &Statistics) {
    println!("{}", "═".repeat(44).dimmed());
    println!("{}", "📊 Task Statistics".cyan().bold());
    println!("{}", "═".repeat(44).dimmed());
    println!();

    println!("{}: {}", "Total Tasks".bold(), stats.total);
    println!("{}: {}", "Completed".bold(), stats.completed);
    println!(
        "{}: {:.1}%",
        "Completion Rate".bold(),
        stats.completion_rate
    );
    println!(
        "{}: {:.1}% ({}/{})",
        "Weekly Completion Rate".bold(),
        stats.weekly_rate,
        stats.completed_last_week,
        stats.created_last_week
    );
    println!(
        "{}: {:.1}% ({}/{})",
        "Monthly Completion Rate".bold(),
        stats.monthly_rate,
        stats.completed_last_month,
        stats.created_last_month
    );

    if !stats.priority_breakdown.is_empty() {
        println!();
        println!("{}", "Tasks by priority".bold().underline());
        for entry in &stats.priority_breakdown {
            println!(
                "  {} {}: {} ({:.1}%)",
                "•".dimmed(),
                entry.priority,
                entry.count,
                entry.percent
            );
        }
    }

    println!();
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
