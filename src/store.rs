//! Task entity and the store contract the agent's tools delegate to.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::Result;

/// A task managed by the store.
///
/// The id is assigned by the store and stable for the task's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub is_complete: bool,
}

/// Storage contract consumed by the task tools.
///
/// Implementations own persistence; the tools never retain a task beyond
/// a single call. Update applies only the supplied fields.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Create a task and assign it an id.
    async fn add_task(&self, title: &str, is_complete: bool) -> Result<Task>;

    /// All tasks, in the store's own order.
    async fn get_all_tasks(&self) -> Result<Vec<Task>>;

    /// Look up one task by id.
    async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// Update the supplied fields of a task. Returns `None` when absent.
    async fn update_task(
        &self,
        id: i64,
        title: Option<String>,
        is_complete: Option<bool>,
    ) -> Result<Option<Task>>;

    /// Delete a task. Returns whether anything was removed.
    async fn delete_task(&self, id: i64) -> Result<bool>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    next_id: i64,
    tasks: Vec<Task>,
}

/// In-memory [`TaskStore`] with insertion-ordered listing.
///
/// Backs the crate's tests and gives embedders a working store without
/// wiring up external persistence.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn add_task(&self, title: &str, is_complete: bool) -> Result<Task> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let task = Task {
            id: inner.next_id,
            title: title.to_string(),
            is_complete,
        };
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn get_all_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.inner.read().await.tasks.clone())
    }

    async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>> {
        Ok(self
            .inner
            .read()
            .await
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn update_task(
        &self,
        id: i64,
        title: Option<String>,
        is_complete: Option<bool>,
    ) -> Result<Option<Task>> {
        let mut inner = self.inner.write().await;
        let Some(task) = inner.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(is_complete) = is_complete {
            task.is_complete = is_complete;
        }
        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        Ok(inner.tasks.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_increase_and_stay_stable() {
        let store = MemoryTaskStore::new();
        let a = store.add_task("A", false).await.unwrap();
        let b = store.add_task("B", true).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        store.delete_task(a.id).await.unwrap();
        let c = store.add_task("C", false).await.unwrap();
        // deleted ids are never reused
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order() {
        let store = MemoryTaskStore::new();
        store.add_task("first", false).await.unwrap();
        store.add_task("second", true).await.unwrap();

        let all = store.get_all_tasks().await.unwrap();
        let titles: Vec<_> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let store = MemoryTaskStore::new();
        let task = store.add_task("draft", false).await.unwrap();

        let updated = store
            .update_task(task.id, Some("final".into()), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "final");
        assert!(!updated.is_complete);

        let updated = store
            .update_task(task.id, None, Some(true))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "final");
        assert!(updated.is_complete);
    }

    #[tokio::test]
    async fn missing_ids_are_not_errors() {
        let store = MemoryTaskStore::new();
        assert!(store.get_task_by_id(42).await.unwrap().is_none());
        assert!(store
            .update_task(42, Some("x".into()), None)
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete_task(42).await.unwrap());
    }
}
