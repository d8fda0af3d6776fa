//! Profile CLI commands.

use chrono::Utc;
use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use navigator_core::error::AppError;
use navigator_entity::profile::{IncomeBracket, NeedCategory, UserProfile};
use navigator_service::NavigatorServices;

/// Arguments for profile commands
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile subcommand
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show the stored profile
    Show,
    /// Create or update the profile; omitted fields keep their value
    Set(SetProfile),
    /// Delete the profile and every stored record
    ClearAll {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

/// Profile fields
#[derive(Debug, Args)]
pub struct SetProfile {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,
    /// Number of people in the household
    #[arg(long)]
    pub household_size: Option<u32>,
    /// Whether there are children in the household
    #[arg(long)]
    pub children: Option<bool>,
    /// Income bracket (under-15k, 15k-30k, 30k-50k, 50k-75k, over-75k)
    #[arg(long)]
    pub income: Option<IncomeBracket>,
    /// Five-digit ZIP code
    #[arg(long)]
    pub zip: Option<String>,
    /// Primary needs, comma separated, most important first
    #[arg(long, value_delimiter = ',')]
    pub needs: Option<Vec<NeedCategory>>,
    /// Preferred language
    #[arg(long)]
    pub language: Option<String>,
}

/// Execute profile commands
pub async fn execute(
    args: &ProfileArgs,
    services: &NavigatorServices,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ProfileCommand::Show => match services.profiles.get().await? {
            Some(profile) => print_profile(&profile, format),
            None => output::print_warning("No profile yet. Create one with `profile set`."),
        },
        ProfileCommand::Set(fields) => {
            let mut profile = services
                .profiles
                .get()
                .await?
                .unwrap_or_else(|| UserProfile::new(Utc::now()));
            apply(&mut profile, fields);
            let saved = services.profiles.save(profile).await?;
            output::print_success("Profile saved");
            print_profile(&saved, format);
        }
        ProfileCommand::ClearAll { yes } => {
            if !yes {
                return Err(AppError::validation(
                    "Refusing to clear all data without --yes",
                ));
            }
            let removed = services.profiles.clear_all_data().await?;
            output::print_success(&format!("Cleared {removed} stored collection(s)"));
        }
    }

    Ok(())
}

fn apply(profile: &mut UserProfile, fields: &SetProfile) {
    if let Some(name) = &fields.name {
        profile.name = Some(name.clone());
    }
    if let Some(size) = fields.household_size {
        profile.household_size = Some(size);
    }
    if let Some(children) = fields.children {
        profile.has_children = children;
    }
    if let Some(income) = fields.income {
        profile.income_bracket = Some(income);
    }
    if let Some(zip) = &fields.zip {
        profile.zip_code = Some(zip.clone());
    }
    if let Some(needs) = &fields.needs {
        profile.primary_needs = needs.clone();
    }
    if let Some(language) = &fields.language {
        profile.preferred_language = Some(language.clone());
    }
}

fn print_profile(profile: &UserProfile, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(profile);
        return;
    }

    let needs: Vec<&str> = profile.primary_needs.iter().map(|n| n.label()).collect();
    output::print_kv("Name", &output::or_dash(profile.name.as_deref()));
    output::print_kv("Household size", &output::or_dash(profile.household_size));
    output::print_kv("Children", if profile.has_children { "yes" } else { "no" });
    output::print_kv("Income", &output::or_dash(profile.income_bracket));
    output::print_kv("ZIP code", &output::or_dash(profile.zip_code.as_deref()));
    output::print_kv("Primary needs", &needs.join(", "));
    output::print_kv(
        "Language",
        &output::or_dash(profile.preferred_language.as_deref()),
    );
    output::print_kv(
        "Updated",
        &profile.updated_at.format("%Y-%m-%d %H:%M").to_string(),
    );
}
