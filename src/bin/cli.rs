//! Taskman CLI - interactive to-do list manager.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use taskman::domain::TasksDomain;
use taskman::errors::TasksError;
use taskman::storage::FileStorage;
use taskman::ui;

#[derive(Parser)]
#[command(name = "taskman")]
#[command(about = "Interactive to-do list manager", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the tasks file
    #[arg(long, value_name = "FILE", default_value = "data/tasks.json")]
    file: PathBuf,
}

const MENU_ITEMS: &[&str] = &[
    "Add task",
    "Show tasks",
    "Complete task",
    "Delete task",
    "Search tasks",
    "Statistics",
    "Exit",
];

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let storage = Arc::new(FileStorage::new(&cli.file));
    let mut domain = TasksDomain::open(storage).await?;

    let theme = ColorfulTheme::default();
    Term::stdout().clear_screen().ok();

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("📋 Task Manager")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => add_task(&theme, &mut domain).await?,
            1 => show_tasks(&domain),
            2 => complete_task(&theme, &mut domain).await?,
            3 => delete_task(&theme, &mut domain).await?,
            4 => search_tasks(&theme, &domain)?,
            5 => ui::display_stats(&domain.stats()),
            _ => {
                println!("Exiting...");
                break;
            }
        }
    }

    Ok(())
}

async fn add_task(theme: &ColorfulTheme, domain: &mut TasksDomain) -> Result<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Task title")
        .allow_empty(true)
        .interact_text()?;

    let category: String = Input::with_theme(theme)
        .with_prompt("Category (press enter for personal)")
        .allow_empty(true)
        .interact_text()?;

    let priority: String = Input::with_theme(theme)
        .with_prompt("Priority P1/P2/P3 (press enter for P2)")
        .allow_empty(true)
        .interact_text()?;

    let task = domain.add_task(&title, &category, &priority).await?;
    ui::print_success(&format!("Task {} added successfully!", task.id));
    Ok(())
}

fn show_tasks(domain: &TasksDomain) {
    let tasks = domain.list_tasks();
    if tasks.is_empty() {
        ui::print_info("No tasks found");
    } else {
        let table = ui::task_table(tasks);
        println!("{table}");
        println!();
        ui::print_info(&format!("{} task(s) total", tasks.len()));
    }
}

async fn complete_task(theme: &ColorfulTheme, domain: &mut TasksDomain) -> Result<()> {
    let id: u64 = Input::with_theme(theme)
        .with_prompt("Task ID to complete")
        .interact_text()?;

    match domain.complete_task(id).await {
        Ok(()) => ui::print_success("Task marked as completed!"),
        Err(e @ TasksError::TaskNotFound { .. }) => ui::print_error(&e.to_string()),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn delete_task(theme: &ColorfulTheme, domain: &mut TasksDomain) -> Result<()> {
    let id: u64 = Input::with_theme(theme)
        .with_prompt("Task ID to delete")
        .interact_text()?;

    let title = match domain.get_task(id) {
        Some(task) => task.title.clone(),
        None => {
            ui::print_error(&TasksError::TaskNotFound { id }.to_string());
            return Ok(());
        }
    };

    ui::print_warning(&format!("You are about to delete task: {title}"));
    let confirmed = Confirm::with_theme(theme)
        .with_prompt("Are you sure?")
        .default(false)
        .interact()?;

    if !confirmed {
        ui::print_warning("Delete operation cancelled");
        return Ok(());
    }

    match domain.remove_task(id).await {
        Ok(task) => ui::print_success(&format!("Deleted task {} - {}", task.id, task.title)),
        Err(e @ TasksError::TaskNotFound { .. }) => ui::print_error(&e.to_string()),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn search_tasks(theme: &ColorfulTheme, domain: &TasksDomain) -> Result<()> {
    let term: String = Input::with_theme(theme)
        .with_prompt("Search term")
        .allow_empty(true)
        .interact_text()?;

    let matches = domain.search_tasks(&term);
    if matches.is_empty() {
        ui::print_warning("No tasks found matching the search term");
    } else {
        ui::print_info(&format!(
            "Found {} task(s) matching '{}'",
            matches.len(),
            term
        ));
        let table = ui::task_table(matches);
        println!("{table}");
    }
    Ok(())
}
