//! Application tracker CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use navigator_core::error::AppError;
use navigator_core::types::{ApplicationId, ProgramId};
use navigator_entity::application::ApplicationStatus;
use navigator_service::NavigatorServices;

/// Arguments for application commands
#[derive(Debug, Args)]
pub struct ApplicationArgs {
    /// Application subcommand
    #[command(subcommand)]
    pub command: ApplicationCommand,
}

/// Application subcommands
#[derive(Debug, Subcommand)]
pub enum ApplicationCommand {
    /// List tracked applications
    List,
    /// Start tracking a program
    Start {
        /// Program ID from the catalog
        program: String,
        /// Initial status
        #[arg(short, long, default_value = "saved")]
        status: ApplicationStatus,
    },
    /// Record a status change
    Status {
        /// Application ID
        id: String,
        /// New status (saved, started, submitted, approved, denied)
        status: ApplicationStatus,
    },
    /// Set or clear the deadline
    Deadline {
        /// Application ID
        id: String,
        /// Deadline (YYYY-MM-DD or RFC 3339); omit to clear
        date: Option<String>,
    },
    /// Check off a document, or un-check it
    Doc {
        /// Application ID
        id: String,
        /// Document name
        document: String,
    },
    /// Replace the notes
    Notes {
        /// Application ID
        id: String,
        /// Notes text; omit to clear
        text: Option<String>,
    },
    /// Status counts and document completion
    Progress,
}

/// Application display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ApplicationRow {
    /// Application ID
    id: String,
    /// Program
    program: String,
    /// Status
    status: String,
    /// Applied at
    applied: String,
    /// Deadline
    deadline: String,
}

/// Document progress row for table output
#[derive(Debug, Serialize, Tabled)]
struct ProgressRow {
    /// Program
    program: String,
    /// Status
    status: String,
    /// Documents checked of required
    documents: String,
    /// Completion percentage
    complete: String,
}

/// Execute application commands
pub async fn execute(
    args: &ApplicationArgs,
    services: &NavigatorServices,
    format: OutputFormat,
) -> Result<(), AppError> {
    let tracker = &services.applications;

    match &args.command {
        ApplicationCommand::List => {
            let applications = tracker.list().await?;
            match format {
                OutputFormat::Json => output::print_json(&applications),
                OutputFormat::Table => {
                    let rows: Vec<ApplicationRow> = applications
                        .iter()
                        .map(|a| ApplicationRow {
                            id: a.id.to_string(),
                            program: a.program_name.clone(),
                            status: a.status.to_string(),
                            applied: a.applied_at.format("%Y-%m-%d").to_string(),
                            deadline: output::or_dash(a.deadline.map(|d| d.format("%Y-%m-%d"))),
                        })
                        .collect();
                    output::print_list(&rows, format);
                }
            }
        }
        ApplicationCommand::Start { program, status } => {
            let application = tracker.start(&ProgramId::from(program.as_str()), *status).await?;
            output::print_success(&format!(
                "Tracking '{}' as {} ({})",
                application.program_name, application.status, application.id
            ));
        }
        ApplicationCommand::Status { id, status } => {
            let application = tracker.update_status(parse(id)?, *status).await?;
            output::print_success(&format!(
                "'{}' is now {}",
                application.program_name, application.status
            ));
        }
        ApplicationCommand::Deadline { id, date } => {
            let deadline = date.as_deref().map(super::parse_date).transpose()?;
            let application = tracker.set_deadline(parse(id)?, deadline).await?;
            match application.deadline {
                Some(d) => output::print_success(&format!(
                    "Deadline for '{}' set to {}",
                    application.program_name,
                    d.format("%Y-%m-%d %H:%M")
                )),
                None => output::print_success(&format!(
                    "Deadline for '{}' cleared",
                    application.program_name
                )),
            }
        }
        ApplicationCommand::Doc { id, document } => {
            if tracker.toggle_document(parse(id)?, document).await? {
                output::print_success(&format!("'{document}' checked"));
            } else {
                output::print_success(&format!("'{document}' unchecked"));
            }
        }
        ApplicationCommand::Notes { id, text } => {
            tracker.set_notes(parse(id)?, text.clone()).await?;
            output::print_success("Notes saved");
        }
        ApplicationCommand::Progress => {
            let summary = tracker.progress().await?;
            match format {
                OutputFormat::Json => output::print_json(&summary),
                OutputFormat::Table => {
                    output::print_kv("Total", &summary.total.to_string());
                    for (status, count) in &summary.by_status {
                        output::print_kv(status, &count.to_string());
                    }
                    let rows: Vec<ProgressRow> = summary
                        .applications
                        .iter()
                        .map(|p| ProgressRow {
                            program: p.program_name.clone(),
                            status: p.status.to_string(),
                            documents: format!("{}/{}", p.documents_checked, p.documents_required),
                            complete: format!("{}%", p.completion_percentage),
                        })
                        .collect();
                    println!();
                    output::print_list(&rows, format);
                }
            }
        }
    }

    Ok(())
}

fn parse(id: &str) -> Result<ApplicationId, AppError> {
    super::parse_id(id, "application")
}
