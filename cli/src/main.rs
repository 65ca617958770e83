mod table;
mod tui;

use anyhow::{anyhow, Result};
use clap::Parser;
use taskboard_core::{
    derive_view, today, BoardService, Category, HttpTaskStore, SortOrder, Task, TaskDraft,
    DEFAULT_BASE_URL,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A board-style client for a remote task collection", long_about = None)]
struct Cli {
    /// Base URL of the task collection (falls back to $TASKBOARD_URL)
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive board
    Tui,
    /// Print tasks; without --category the raw collection is listed
    List {
        /// all | overdue | today | favorites | repeating | archive
        #[arg(long)]
        category: Option<String>,
        /// up | down (by due date, undated tasks always last)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Add a task (usage: add "Water the plants" due:2025-01-31 color:green repeat:mo,we)
    Add {
        /// Description plus key:value metadata tokens
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Toggle the archived flag of a task (id may be abbreviated)
    Archive { id: String },
    /// Toggle the favorite flag of a task (id may be abbreviated)
    Favorite { id: String },
    /// Delete a task (id may be abbreviated)
    Rm { id: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let url = cli
        .url
        .or_else(|| std::env::var("TASKBOARD_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    tracing::debug!(%url, "using task collection");
    let service = BoardService::new(HttpTaskStore::new(url)?);

    match cli.command {
        Some(Commands::List { category, sort }) => {
            // Lenient boundary parsing: an unknown category falls back to a
            // pass-through listing, an unknown sort to ascending.
            let category = match category {
                Some(value) => match value.parse::<Category>() {
                    Ok(c) => Some(c),
                    Err(e) => {
                        println!("Warning: {}; listing everything.", e);
                        None
                    }
                },
                None => None,
            };
            let order = match sort.as_deref() {
                None | Some("up") => SortOrder::Ascending,
                Some("down") => SortOrder::Descending,
                Some(other) => {
                    println!("Warning: unknown sort '{}'; using 'up'.", other);
                    SortOrder::Ascending
                }
            };

            let tasks = service.fetch()?;
            let visible = derive_view(&tasks, category, order, today());
            if visible.is_empty() {
                println!("No tasks found.");
            } else {
                println!("{}", table::render(&visible));
            }
        }
        Some(Commands::Add { args }) => {
            if args.is_empty() {
                return Err(anyhow!("Task description is required"));
            }
            let draft = TaskDraft::from_tokens(&args, today())?;
            let created = service.create_task(&draft, today())?;
            println!("Task added: {} (ID: {})", created.description, created.id);
            if let Some(due) = created.due_date {
                println!("  Due: {}", taskboard_core::format_date_info(due));
            }
            let repeats = created.repeating_days.active_days();
            if !repeats.is_empty() {
                let keys: Vec<&str> = repeats
                    .iter()
                    .map(|d| taskboard_core::RecurrenceSet::day_key(*d))
                    .collect();
                println!("  Repeats: {}", keys.join(" "));
            }
            println!("  Color: {}", created.color.as_str());
        }
        Some(Commands::Archive { id }) => {
            let task = find_task(&service.fetch()?, &id)?;
            let updated = service.toggle_archived(&task)?;
            println!(
                "Task {}: {}",
                if updated.is_archived { "archived" } else { "unarchived" },
                updated.description
            );
        }
        Some(Commands::Favorite { id }) => {
            let task = find_task(&service.fetch()?, &id)?;
            let updated = service.toggle_favorite(&task)?;
            println!(
                "Task {} favorites: {}",
                if updated.is_favorite { "added to" } else { "removed from" },
                updated.description
            );
        }
        Some(Commands::Rm { id }) => {
            let task = find_task(&service.fetch()?, &id)?;
            let ack = service.delete_task(&task.id)?;
            println!("{}: {}", ack.status, ack.message);
        }
        Some(Commands::Tui) | None => {
            tui::run(service)?;
        }
    }
    Ok(())
}

/// Resolves a possibly abbreviated task id against the fetched collection.
fn find_task(tasks: &[Task], id: &str) -> Result<Task> {
    if let Some(task) = tasks.iter().find(|t| t.id == id) {
        return Ok(task.clone());
    }

    let matches: Vec<&Task> = tasks.iter().filter(|t| t.id.starts_with(id)).collect();
    match matches.len() {
        1 => Ok(matches[0].clone()),
        0 => Err(anyhow!("No task with id '{}'", id)),
        n => Err(anyhow!("Id '{}' is ambiguous ({} matches)", id, n)),
    }
}
