use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize};
use eyre::{Context, Result, bail};
use std::path::PathBuf;
use std::process;
use todostore::{
    Config, NewTask, Priority, SortOrder, StatusFilter, Store, StoreError, Task, TaskFilter, TaskId, TaskUpdate,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "Local to-do list with SQLite storage, search and CSV export")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the database file (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,

        /// high, medium or low
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
    },

    /// Edit fields of an existing task
    Edit {
        id: TaskId,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete a task permanently
    Rm { id: TaskId },

    /// Mark a task completed
    Done { id: TaskId },

    /// Mark a task not completed
    Undone { id: TaskId },

    /// Flip the completed state of a task
    Toggle { id: TaskId },

    /// Show a single task
    Show { id: TaskId },

    /// List tasks
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export tasks to a CSV file
    Export {
        path: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Args)]
struct EditArgs {
    #[arg(long)]
    title: Option<String>,

    #[arg(short, long, conflicts_with = "clear_description")]
    description: Option<String>,

    #[arg(long)]
    clear_description: bool,

    /// Due date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "clear_due")]
    due: Option<NaiveDate>,

    #[arg(long)]
    clear_due: bool,

    #[arg(short, long)]
    priority: Option<Priority>,
}

impl EditArgs {
    /// Clear flags win over values; clap already rejects passing both
    fn into_update(self) -> TaskUpdate {
        let description = if self.clear_description {
            Some(None)
        } else {
            self.description.map(Some)
        };
        let due_date = if self.clear_due { Some(None) } else { self.due.map(Some) };

        TaskUpdate {
            title: self.title,
            description,
            due_date,
            priority: self.priority,
            completed: None,
        }
    }
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive text matched against title and description
    #[arg(short, long, default_value = "")]
    query: String,

    /// all, completed or incomplete
    #[arg(long, default_value = "all")]
    status: StatusFilter,

    /// Only tasks with this priority
    #[arg(short, long)]
    priority: Option<Priority>,

    /// priority, created or due (default from config)
    #[arg(long)]
    sort: Option<SortOrder>,
}

impl FilterArgs {
    fn into_filter(self, default_sort: SortOrder) -> TaskFilter {
        TaskFilter {
            query: self.query,
            status: self.status,
            priority: self.priority,
            sort: self.sort.unwrap_or(default_sort),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<StoreError>() {
            Some(store_err) => eprintln!("{} ({}): {:#}", "Error".red().bold(), store_err.kind(), e),
            None => eprintln!("{}: {:#}", "Error".red().bold(), e),
        }
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("todostore={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let db_path = cli.db.unwrap_or(config.database);
    debug!(db = %db_path.display(), "Using database");

    let mut store =
        Store::open(&db_path).wrap_err_with(|| format!("Failed to open database {}", db_path.display()))?;

    match cli.command {
        Commands::Add {
            title,
            description,
            due,
            priority,
        } => {
            let new = NewTask {
                title,
                description,
                due_date: due,
                priority,
            };
            let task = store.create(new).wrap_err("Failed to add task")?;
            println!("Added task {}", task.id);
            print_task(&task);
        }
        Commands::Edit { id, fields } => {
            let update = fields.into_update();
            if update.is_empty() {
                bail!("Nothing to change; pass at least one field to edit");
            }

            let task = store.update(id, update).wrap_err("Failed to update task")?;
            println!("Updated task {}", task.id);
            print_task(&task);
        }
        Commands::Rm { id } => {
            store.delete(id).wrap_err("Failed to delete task")?;
            println!("Deleted task {}", id);
        }
        Commands::Done { id } => {
            let task = store.set_completed(id, true).wrap_err("Failed to complete task")?;
            print_task(&task);
        }
        Commands::Undone { id } => {
            let task = store.set_completed(id, false).wrap_err("Failed to reopen task")?;
            print_task(&task);
        }
        Commands::Toggle { id } => {
            let task = store.toggle_completed(id).wrap_err("Failed to toggle task")?;
            print_task(&task);
        }
        Commands::Show { id } => {
            let task = store.get(id)?.ok_or(StoreError::NotFound(id))?;
            print_details(&task);
        }
        Commands::List { filter, json } => {
            let tasks = store.list(&filter.into_filter(config.default_sort))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks).context("Failed to serialize tasks")?);
            } else if tasks.is_empty() {
                println!("{}", "No tasks".dimmed());
            } else {
                for task in &tasks {
                    print_task(task);
                }
            }
        }
        Commands::Export { path, filter } => {
            let count = store
                .export_csv(&path, &filter.into_filter(config.default_sort))
                .wrap_err_with(|| format!("Failed to export to {}", path.display()))?;
            println!("Exported {} tasks to {}", count, path.display());
        }
    }

    Ok(())
}

fn priority_colored(task: &Task) -> ColoredString {
    match task.priority {
        Priority::High => task.title.as_str().red().bold(),
        Priority::Medium => task.title.as_str().yellow(),
        Priority::Low => task.title.as_str().green(),
    }
}

fn print_task(task: &Task) {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let title = if task.completed {
        priority_colored(task).strikethrough()
    } else {
        priority_colored(task)
    };

    let mut line = format!("{} {:>4}  {}", checkbox, task.id, title);
    if let Some(due) = task.due_date {
        line.push_str(&format!("  {}", format!("due {}", due).as_str().cyan()));
    }
    line.push_str(&format!(
        "  {}",
        format!("created {}", task.created_at.format("%Y-%m-%d %H:%M"))
            .as_str()
            .dimmed()
    ));
    println!("{}", line);
}

fn print_details(task: &Task) {
    println!("{} {}", "Task".bold(), task.id);
    println!("  Title:       {}", priority_colored(task));
    println!("  Description: {}", task.description.as_deref().unwrap_or("-"));
    println!(
        "  Due:         {}",
        task.due_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("  Priority:    {}", task.priority);
    println!("  Completed:   {}", if task.completed { "Yes" } else { "No" });
    println!("  Created:     {}", task.created_at.to_rfc3339());
}
