//! To-do CLI commands.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use navigator_core::error::AppError;
use navigator_core::types::{ProgramId, TodoId};
use navigator_entity::todo::TodoItem;
use navigator_service::NavigatorServices;

/// Arguments for to-do commands
#[derive(Debug, Args)]
pub struct TodoArgs {
    /// To-do subcommand
    #[command(subcommand)]
    pub command: TodoCommand,
}

/// To-do subcommands
#[derive(Debug, Subcommand)]
pub enum TodoCommand {
    /// List tasks
    List,
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        due: Option<String>,
        /// Longer description
        #[arg(long)]
        description: Option<String>,
        /// Related program ID
        #[arg(long)]
        program: Option<String>,
    },
    /// Mark a task done
    Done {
        /// Task ID
        id: String,
    },
    /// Reopen a finished task
    Reopen {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Add the starter tasks to an empty list
    Seed,
}

/// Task display row for table output
#[derive(Debug, Serialize, Tabled)]
struct TodoRow {
    /// Task ID
    id: String,
    /// Title
    title: String,
    /// Due date
    due: String,
    /// Status
    status: String,
}

/// Execute to-do commands
pub async fn execute(
    args: &TodoArgs,
    services: &NavigatorServices,
    format: OutputFormat,
) -> Result<(), AppError> {
    let todos = &services.todos;

    match &args.command {
        TodoCommand::List => {
            let items = todos.list().await?;
            match format {
                OutputFormat::Json => output::print_json(&items),
                OutputFormat::Table => {
                    let now = Utc::now();
                    let rows: Vec<TodoRow> = items.iter().map(|t| row(t, now)).collect();
                    output::print_list(&rows, format);
                }
            }
        }
        TodoCommand::Add {
            title,
            due,
            description,
            program,
        } => {
            let due = due.as_deref().map(super::parse_date).transpose()?;
            let todo = todos
                .add(
                    title,
                    description.clone(),
                    due,
                    program.as_deref().map(ProgramId::from),
                )
                .await?;
            output::print_success(&format!("Task added ({})", todo.id));
        }
        TodoCommand::Done { id } => {
            let todo = todos
                .set_completed(super::parse_id::<TodoId>(id, "task")?, true)
                .await?;
            output::print_success(&format!("'{}' marked done", todo.title));
        }
        TodoCommand::Reopen { id } => {
            let todo = todos
                .set_completed(super::parse_id::<TodoId>(id, "task")?, false)
                .await?;
            output::print_success(&format!("'{}' reopened", todo.title));
        }
        TodoCommand::Delete { id } => {
            todos.delete(super::parse_id::<TodoId>(id, "task")?).await?;
            output::print_success("Task deleted");
        }
        TodoCommand::Seed => {
            let added = todos.seed_sample_tasks().await?;
            if added == 0 {
                output::print_warning("Task list is not empty, nothing seeded");
            } else {
                output::print_success(&format!("Added {added} starter task(s)"));
            }
        }
    }

    Ok(())
}

fn row(todo: &TodoItem, now: chrono::DateTime<Utc>) -> TodoRow {
    let status = if todo.completed {
        "done"
    } else if todo.is_overdue(now) {
        "overdue"
    } else {
        "open"
    };
    TodoRow {
        id: todo.id.to_string(),
        title: todo.title.clone(),
        due: output::or_dash(todo.due_date.map(|d| d.format("%Y-%m-%d %H:%M"))),
        status: status.to_string(),
    }
}
