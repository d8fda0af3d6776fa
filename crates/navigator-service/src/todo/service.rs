//! To-do list management.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use navigator_core::error::AppError;
use navigator_core::result::AppResult;
use navigator_core::traits::clock::Clock;
use navigator_core::types::{ProgramId, TodoId};
use navigator_entity::todo::TodoItem;
use navigator_store::NavigatorStore;

/// Starter tasks offered to a new user: title, description, days until due.
const SAMPLE_TASKS: &[(&str, &str, i64)] = &[
    (
        "Gather identification documents",
        "Photo ID, Social Security cards, and birth certificates for everyone in the household.",
        3,
    ),
    (
        "Collect proof of income",
        "Recent pay stubs, benefit letters, or a signed statement of no income.",
        5,
    ),
    (
        "Get proof of Detroit residency",
        "A lease, utility bill, or bank statement showing your current address.",
        7,
    ),
    (
        "Review your recommended programs",
        "Open your recommendations and save the programs you want to apply to.",
        10,
    ),
];

/// Manages the user's to-do list.
#[derive(Debug, Clone)]
pub struct TodoService {
    /// Persistent records.
    store: NavigatorStore,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl TodoService {
    /// Creates a new to-do service.
    pub fn new(store: NavigatorStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Adds an open task.
    pub async fn add(
        &self,
        title: &str,
        description: Option<String>,
        due_date: Option<DateTime<Utc>>,
        program_id: Option<ProgramId>,
    ) -> AppResult<TodoItem> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Task title must not be empty"));
        }

        let mut todo = TodoItem::new(title, due_date, self.clock.now());
        todo.description = description.filter(|d| !d.trim().is_empty());
        todo.program_id = program_id;
        self.store.save_todo(&todo).await?;

        info!(todo_id = %todo.id, "Task added");
        Ok(todo)
    }

    /// All tasks in the order they were added.
    pub async fn list(&self) -> AppResult<Vec<TodoItem>> {
        self.store.todos().await
    }

    /// Marks a task done or reopens it.
    pub async fn set_completed(&self, id: TodoId, completed: bool) -> AppResult<TodoItem> {
        let mut todo = self
            .store
            .todos()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("Task {id} not found")))?;
        todo.completed = completed;
        self.store.save_todo(&todo).await?;
        Ok(todo)
    }

    /// Deletes a task.
    pub async fn delete(&self, id: TodoId) -> AppResult<()> {
        if !self.store.delete_todo(id).await? {
            return Err(AppError::not_found(format!("Task {id} not found")));
        }
        info!(todo_id = %id, "Task deleted");
        Ok(())
    }

    /// Seeds the starter tasks into an empty list. Returns how many were
    /// added; a non-empty list is left untouched.
    pub async fn seed_sample_tasks(&self) -> AppResult<usize> {
        if !self.store.todos().await?.is_empty() {
            return Ok(0);
        }

        let now = self.clock.now();
        let todos: Vec<TodoItem> = SAMPLE_TASKS
            .iter()
            .map(|(title, description, days)| {
                let mut todo = TodoItem::new(*title, Some(now + Duration::days(*days)), now);
                todo.description = Some((*description).to_string());
                todo
            })
            .collect();
        self.store.save_todos(&todos).await?;

        info!(count = todos.len(), "Sample tasks seeded");
        Ok(todos.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use navigator_core::error::ErrorKind;
    use navigator_core::traits::clock::FixedClock;

    fn service() -> TodoService {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        ));
        TodoService::new(NavigatorStore::in_memory(), clock)
    }

    #[tokio::test]
    async fn test_add_complete_reopen_delete() {
        let todos = service();
        let todo = todos
            .add("  Call DHHS  ", None, None, Some(ProgramId::from("snap")))
            .await
            .unwrap();
        assert_eq!(todo.title, "Call DHHS");

        assert!(todos.set_completed(todo.id, true).await.unwrap().completed);
        assert!(!todos.set_completed(todo.id, false).await.unwrap().completed);

        todos.delete(todo.id).await.unwrap();
        assert!(todos.list().await.unwrap().is_empty());
        assert_eq!(
            todos.delete(todo.id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let err = service().add(" ", None, None, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_seed_only_into_empty_list() {
        let todos = service();
        assert_eq!(todos.seed_sample_tasks().await.unwrap(), SAMPLE_TASKS.len());
        assert_eq!(todos.seed_sample_tasks().await.unwrap(), 0);
        assert_eq!(todos.list().await.unwrap().len(), SAMPLE_TASKS.len());

        let other = service();
        other.add("Mine", None, None, None).await.unwrap();
        assert_eq!(other.seed_sample_tasks().await.unwrap(), 0);
    }
}
