//! Recommendation CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use navigator_core::error::AppError;
use navigator_service::{NavigatorServices, RecommendationScore};

/// Arguments for recommendation commands
#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Recommendation subcommand
    #[command(subcommand)]
    pub command: RecommendCommand,
}

/// Recommendation subcommands
#[derive(Debug, Subcommand)]
pub enum RecommendCommand {
    /// Best matches overall
    Top {
        /// Number of programs to show
        #[arg(short = 'n', long, default_value_t = 5)]
        limit: usize,
    },
    /// Matches grouped by primary need
    Grouped,
    /// Every program with its score and reasons
    Explain,
}

/// Recommendation display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ScoreRow {
    /// Program ID
    id: String,
    /// Program name
    program: String,
    /// Category
    category: String,
    /// Score
    score: u32,
    /// Match percentage
    #[tabled(rename = "match")]
    match_percentage: String,
    /// Top reason
    reason: String,
}

impl From<&RecommendationScore> for ScoreRow {
    fn from(s: &RecommendationScore) -> Self {
        Self {
            id: s.program.id.to_string(),
            program: s.program.name.clone(),
            category: s.program.category.label().to_string(),
            score: s.score,
            match_percentage: format!("{}%", s.match_percentage),
            reason: s.reasons.first().cloned().unwrap_or_default(),
        }
    }
}

/// Execute recommendation commands
pub async fn execute(
    args: &RecommendArgs,
    services: &NavigatorServices,
    format: OutputFormat,
) -> Result<(), AppError> {
    if services.profiles.get().await?.is_none() {
        output::print_warning("No profile yet. Create one with `profile set` to get matches.");
        return Ok(());
    }

    match &args.command {
        RecommendCommand::Top { limit } => {
            let top = services.recommendations.top(*limit).await;
            print_scores(&top, format);
        }
        RecommendCommand::Grouped => {
            let groups = services.recommendations.categorized().await;
            match format {
                OutputFormat::Json => output::print_json(&groups),
                OutputFormat::Table => {
                    if groups.is_empty() {
                        println!("Nothing to show.");
                    }
                    for group in &groups {
                        println!("\n{} ({} programs)", group.label, group.items.len());
                        print_scores(&group.items, format);
                    }
                }
            }
        }
        RecommendCommand::Explain => {
            let all = services.recommendations.all().await;
            match format {
                OutputFormat::Json => output::print_json(&all),
                OutputFormat::Table => {
                    for score in &all {
                        println!(
                            "\n{} [{}]: {} points ({}%)",
                            score.program.name,
                            score.program.id,
                            score.score,
                            score.match_percentage
                        );
                        for reason in &score.reasons {
                            println!("  - {reason}");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_scores(scores: &[RecommendationScore], format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(scores),
        OutputFormat::Table => {
            let rows: Vec<ScoreRow> = scores.iter().map(ScoreRow::from).collect();
            output::print_list(&rows, format);
        }
    }
}
