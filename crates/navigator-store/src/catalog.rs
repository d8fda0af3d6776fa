//! Static program catalog.

use std::collections::HashSet;
use std::path::Path;

use tokio::fs;
use tracing::info;

use navigator_core::error::{AppError, ErrorKind};
use navigator_core::result::AppResult;
use navigator_core::types::ProgramId;
use navigator_entity::profile::NeedCategory;
use navigator_entity::program::Program;

/// Read-only list of programs, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ProgramCatalog {
    programs: Vec<Program>,
}

impl ProgramCatalog {
    /// Build a catalog from programs. Program ids must be unique.
    pub fn from_programs(programs: Vec<Program>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(programs.len());
        for program in &programs {
            if !seen.insert(&program.id) {
                return Err(AppError::catalog(format!(
                    "Duplicate program id in catalog: '{}'",
                    program.id
                )));
            }
        }
        Ok(Self { programs })
    }

    /// Parse a catalog from a JSON array of programs.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let programs: Vec<Program> = serde_json::from_str(json).map_err(|e| {
            AppError::with_source(ErrorKind::Catalog, format!("Invalid catalog JSON: {e}"), e)
        })?;
        Self::from_programs(programs)
    }

    /// Load a catalog from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Catalog,
                format!("Failed to read catalog: {}", path.display()),
                e,
            )
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(path = %path.display(), programs = catalog.len(), "Program catalog loaded");
        Ok(catalog)
    }

    /// All programs in catalog order.
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Look up one program.
    pub fn get(&self, id: &ProgramId) -> Option<&Program> {
        self.programs.iter().find(|p| &p.id == id)
    }

    /// Programs in one category.
    pub fn by_category(&self, category: NeedCategory) -> impl Iterator<Item = &Program> {
        self.programs.iter().filter(move |p| p.category == category)
    }

    /// Number of programs.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the catalog has no programs.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
