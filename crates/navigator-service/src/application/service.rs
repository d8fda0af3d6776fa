//! Application tracker: start, update, and summarize applications.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use navigator_core::error::AppError;
use navigator_core::result::AppResult;
use navigator_core::traits::clock::Clock;
use navigator_core::types::{ApplicationId, ProgramId};
use navigator_entity::application::{Application, ApplicationStatus};
use navigator_store::{NavigatorStore, ProgramCatalog};

/// Document completion of one application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationProgress {
    /// Application id.
    pub application_id: ApplicationId,
    /// Program name.
    pub program_name: String,
    /// Current status.
    pub status: ApplicationStatus,
    /// Required documents checked off.
    pub documents_checked: usize,
    /// Required documents listed by the program.
    pub documents_required: usize,
    /// Checked share of required documents, 0–100. 100 when none are required.
    pub completion_percentage: u8,
}

/// Overview of the tracker.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    /// Total tracked applications.
    pub total: usize,
    /// Count per status; every status is present.
    pub by_status: BTreeMap<String, usize>,
    /// Per-application document progress, in tracker order.
    pub applications: Vec<ApplicationProgress>,
}

/// Manages the user's tracked applications.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    /// Persistent records.
    store: NavigatorStore,
    /// Program catalog, for names, deadlines, and required documents.
    catalog: Arc<ProgramCatalog>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(store: NavigatorStore, catalog: Arc<ProgramCatalog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            catalog,
            clock,
        }
    }

    /// Starts tracking a catalog program.
    ///
    /// The program's name and deadline are copied onto the record. Only one
    /// application per program is tracked.
    pub async fn start(
        &self,
        program_id: &ProgramId,
        status: ApplicationStatus,
    ) -> AppResult<Application> {
        let program = self
            .catalog
            .get(program_id)
            .ok_or_else(|| AppError::not_found(format!("Program '{program_id}' not found")))?;

        if self
            .store
            .applications()
            .await?
            .iter()
            .any(|a| &a.program_id == program_id)
        {
            return Err(AppError::conflict(format!(
                "An application for '{}' is already tracked",
                program.name
            )));
        }

        let mut application = Application::new(
            program.id.clone(),
            program.name.clone(),
            status,
            self.clock.now(),
        );
        application.deadline = program.deadline;
        self.store.save_application(&application).await?;

        info!(
            application_id = %application.id,
            program_id = %program_id,
            status = %status,
            "Application tracked"
        );
        Ok(application)
    }

    /// All tracked applications.
    pub async fn list(&self) -> AppResult<Vec<Application>> {
        self.store.applications().await
    }

    /// One application by id.
    pub async fn get(&self, id: ApplicationId) -> AppResult<Application> {
        self.store
            .application(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Application {id} not found")))
    }

    /// Records a user-reported status change.
    ///
    /// Moving to `submitted` restarts the clock the status-check reminder
    /// measures from.
    pub async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> AppResult<Application> {
        let mut application = self.get(id).await?;
        let now = self.clock.now();
        let previous = application.status;

        if status == ApplicationStatus::Submitted && previous != ApplicationStatus::Submitted {
            application.applied_at = now;
        }
        application.status = status;
        application.updated_at = now;
        self.store.save_application(&application).await?;

        info!(application_id = %id, from = %previous, to = %status, "Application status updated");
        Ok(application)
    }

    /// Sets or clears the deadline.
    pub async fn set_deadline(
        &self,
        id: ApplicationId,
        deadline: Option<DateTime<Utc>>,
    ) -> AppResult<Application> {
        let mut application = self.get(id).await?;
        application.deadline = deadline;
        application.updated_at = self.clock.now();
        self.store.save_application(&application).await?;
        Ok(application)
    }

    /// Replaces the notes.
    pub async fn set_notes(
        &self,
        id: ApplicationId,
        notes: Option<String>,
    ) -> AppResult<Application> {
        let mut application = self.get(id).await?;
        application.notes = notes.filter(|n| !n.trim().is_empty());
        application.updated_at = self.clock.now();
        self.store.save_application(&application).await?;
        Ok(application)
    }

    /// Checks a document off, or un-checks it if already checked.
    /// Returns whether the document is checked afterwards.
    pub async fn toggle_document(&self, id: ApplicationId, document: &str) -> AppResult<bool> {
        let document = document.trim();
        if document.is_empty() {
            return Err(AppError::validation("Document name must not be empty"));
        }

        let mut application = self.get(id).await?;
        let checked = if application.has_document(document) {
            application
                .documents_checked
                .retain(|d| !d.eq_ignore_ascii_case(document));
            false
        } else {
            application.documents_checked.push(document.to_string());
            true
        };
        application.updated_at = self.clock.now();
        self.store.save_application(&application).await?;
        Ok(checked)
    }

    /// Per-status counts and document completion.
    pub async fn progress(&self) -> AppResult<ProgressSummary> {
        let applications = self.store.applications().await?;

        let mut by_status: BTreeMap<String, usize> = ApplicationStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), 0))
            .collect();
        for app in &applications {
            *by_status.entry(app.status.as_str().to_string()).or_default() += 1;
        }

        let progress = applications
            .iter()
            .map(|app| {
                let required = self
                    .catalog
                    .get(&app.program_id)
                    .map(|p| p.required_documents.as_slice())
                    .unwrap_or_default();
                let checked = required.iter().filter(|d| app.has_document(d)).count();
                let completion_percentage = if required.is_empty() {
                    100
                } else {
                    ((checked * 100) / required.len()) as u8
                };
                ApplicationProgress {
                    application_id: app.id,
                    program_name: app.program_name.clone(),
                    status: app.status,
                    documents_checked: checked,
                    documents_required: required.len(),
                    completion_percentage,
                }
            })
            .collect();

        Ok(ProgressSummary {
            total: applications.len(),
            by_status,
            applications: progress,
        })
    }
}
