mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use quadrant_core::{FileTaskRepository, Priority, SearchQuery, TaskService};

#[derive(Parser)]
#[command(name = "quadrant")]
#[command(about = "An Eisenhower-matrix task tracker", long_about = None)]
struct Cli {
    /// Directory holding the task store (defaults to ~/.quadrant)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print tasks as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task (usage: add "Title|Description|2025-08-13>FOREVER|URGENT_IMPORTANT")
    Add {
        /// Pipe-delimited task input; trailing segments are optional
        input: String,
    },
    /// List all tasks
    List,
    /// Show tasks for a date
    Show {
        /// YYYY-MM-DD
        date: NaiveDate,
    },
    /// Delete a task by id and print it
    Delete { id: u64 },
    /// Delete every task on a date and print the removed tasks
    DeleteDate {
        /// YYYY-MM-DD
        date: NaiveDate,
    },
    /// Edit a task; blank segments keep the old values
    Edit {
        id: u64,
        /// Pipe-delimited task input, same grammar as `add`
        input: String,
    },
    /// Filter tasks by title, date and priority, with paging
    Search {
        /// Case-insensitive substring of the title
        #[arg(long)]
        title: Option<String>,
        /// Exact date match (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// One of the four quadrant names
        #[arg(long)]
        priority: Option<String>,
        #[arg(long, default_value_t = 0)]
        page: i64,
        #[arg(long, default_value_t = 20)]
        size: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileTaskRepository::new(cli.data_dir.clone())?;
    let service = TaskService::new(repo);

    match cli.command {
        Commands::Add { input } => {
            if input.trim().is_empty() {
                eprintln!("Usage: add \"Title|Description|2025-08-13>FOREVER|URGENT_IMPORTANT\"");
                return Ok(());
            }
            let task = service.insert(&input)?;
            println!("Inserted task {}", task.id);
            render::print_task(&task, cli.json)?;
        }
        Commands::List => {
            render::print_tasks(&service.list()?, cli.json)?;
        }
        Commands::Show { date } => {
            render::print_tasks(&service.find_by_date(date)?, cli.json)?;
        }
        Commands::Delete { id } => {
            let removed = service.delete(id)?;
            println!("Deleted task {}", removed.id);
            render::print_task(&removed, cli.json)?;
        }
        Commands::DeleteDate { date } => {
            let removed = service.delete_by_date(date)?;
            println!("Deleted {} task(s) on {}", removed.len(), date);
            render::print_tasks(&removed, cli.json)?;
        }
        Commands::Edit { id, input } => {
            let task = service.edit(id, &input)?;
            println!("Updated task {}", task.id);
            render::print_task(&task, cli.json)?;
        }
        Commands::Search {
            title,
            date,
            priority,
            page,
            size,
        } => {
            // An unrecognized priority name just drops the filter
            let priority = priority.as_deref().and_then(Priority::parse);
            let query = SearchQuery {
                title,
                date,
                priority,
                page,
                size,
            };
            render::print_tasks(&service.search(&query)?, cli.json)?;
        }
    }

    Ok(())
}
