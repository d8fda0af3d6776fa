//! The user's past applications, reduced to what scoring needs.

use navigator_core::types::ProgramId;
use navigator_entity::application::Application;
use navigator_entity::profile::NeedCategory;
use navigator_entity::program::Program;

/// Categories of programs the user has already applied to.
#[derive(Debug, Clone, Default)]
pub struct ApplicationHistory {
    entries: Vec<(ProgramId, NeedCategory)>,
}

impl ApplicationHistory {
    /// An empty history.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve each application's program category through the catalog.
    /// Applications to programs missing from the catalog are dropped.
    pub fn from_applications(applications: &[Application], programs: &[Program]) -> Self {
        let entries = applications
            .iter()
            .filter_map(|app| {
                programs
                    .iter()
                    .find(|p| p.id == app.program_id)
                    .map(|p| (p.id.clone(), p.category))
            })
            .collect();
        Self { entries }
    }

    /// Number of applications to *other* programs in the same category.
    pub fn similar_count(&self, program: &Program) -> usize {
        self.entries
            .iter()
            .filter(|(id, category)| *category == program.category && *id != program.id)
            .count()
    }

    /// Number of applications with a resolvable program.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
