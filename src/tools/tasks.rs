//! Task CRUD functions exposed to the model.
//!
//! Each function delegates to the [`TaskStore`] and renders its outcome as
//! a short human-readable string. A missing task is a normal result, not
//! an error: the model reads the text and reacts to it.

use std::sync::Arc;

use serde_json::Value;

use super::tool::{FunctionTool, Tool};
use super::types::ToolParameters;
use crate::store::{Task, TaskStore};

fn status_label(task: &Task) -> &'static str {
    if task.is_complete {
        "Complete"
    } else {
        "Incomplete"
    }
}

/// The bridge between the agent's function-calling surface and a task store.
pub struct TaskToolkit {
    store: Arc<dyn TaskStore>,
}

impl TaskToolkit {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// All five task functions, ready to register with an agent.
    pub fn tools(&self) -> Vec<Box<dyn Tool>> {
        vec![
            self.create_task(),
            self.get_tasks(),
            self.get_task(),
            self.update_task(),
            self.delete_task(),
        ]
    }

    fn create_task(&self) -> Box<dyn Tool> {
        let store = Arc::clone(&self.store);
        Box::new(FunctionTool::new(
            "CreateTask",
            "Create a new task.",
            ToolParameters::object()
                .string("title", "The title of the new task.", true)
                .boolean_with_default(
                    "isComplete",
                    "The status of the task. When true, the task is already completed.",
                    false,
                )
                .build(),
            move |args, _ctx| {
                let store = Arc::clone(&store);
                async move {
                    let title = args.get_str("title")?.to_string();
                    let is_complete = args.get_bool_opt("isComplete").unwrap_or(false);
                    let task = store.add_task(&title, is_complete).await?;
                    Ok(Value::String(format!(
                        "Task created successfully: \"{}\" (ID: {})",
                        task.title, task.id
                    )))
                }
            },
        ))
    }

    fn get_tasks(&self) -> Box<dyn Tool> {
        let store = Arc::clone(&self.store);
        Box::new(FunctionTool::new(
            "GetTasks",
            "Get all tasks.",
            ToolParameters::empty(),
            move |_args, _ctx| {
                let store = Arc::clone(&store);
                async move {
                    let tasks = store.get_all_tasks().await?;
                    if tasks.is_empty() {
                        return Ok(Value::String("No tasks found.".to_string()));
                    }
                    let listing = tasks
                        .iter()
                        .map(|t| format!("- {}: {} ({})", t.id, t.title, status_label(t)))
                        .collect::<Vec<_>>()
                        .join("\n");
                    Ok(Value::String(format!(
                        "Found {} tasks:\n{}",
                        tasks.len(),
                        listing
                    )))
                }
            },
        ))
    }

    fn get_task(&self) -> Box<dyn Tool> {
        let store = Arc::clone(&self.store);
        Box::new(FunctionTool::new(
            "GetTask",
            "Get one specific task with id.",
            ToolParameters::object()
                .integer("id", "The id of the target task.", true)
                .build(),
            move |args, _ctx| {
                let store = Arc::clone(&store);
                async move {
                    let id = args.get_i64("id")?;
                    let Some(task) = store.get_task_by_id(id).await? else {
                        return Ok(Value::String(format!("Task with ID {id} not found.")));
                    };
                    Ok(Value::String(format!(
                        "Task {}: \"{}\" - Status: {}",
                        task.id,
                        task.title,
                        status_label(&task)
                    )))
                }
            },
        ))
    }

    fn update_task(&self) -> Box<dyn Tool> {
        let store = Arc::clone(&self.store);
        Box::new(FunctionTool::new(
            "UpdateTask",
            "Update a specific task with its id, its new title and its new complete status.",
            ToolParameters::object()
                .integer("id", "The id of the target task.", true)
                .string("title", "The new title of the task.", false)
                .boolean(
                    "isComplete",
                    "The new status of the task. When true, the task is completed.",
                    false,
                )
                .build(),
            move |args, _ctx| {
                let store = Arc::clone(&store);
                async move {
                    let id = args.get_i64("id")?;
                    let title = args.get_str_opt("title").map(str::to_string);
                    let is_complete = args.get_bool_opt("isComplete");
                    let updated = store.update_task(id, title, is_complete).await?;
                    if updated.is_none() {
                        return Ok(Value::String(format!("Task with ID {id} not found.")));
                    }
                    Ok(Value::String(format!("Task {id} updated successfully.")))
                }
            },
        ))
    }

    fn delete_task(&self) -> Box<dyn Tool> {
        let store = Arc::clone(&self.store);
        Box::new(FunctionTool::new(
            "DeleteTask",
            "Delete a specific task with its id.",
            ToolParameters::object()
                .integer("id", "The id of the target task.", true)
                .build(),
            move |args, _ctx| {
                let store = Arc::clone(&store);
                async move {
                    let id = args.get_i64("id")?;
                    let deleted = store.delete_task(id).await?;
                    if !deleted {
                        return Ok(Value::String(format!("Task with ID {id} not found.")));
                    }
                    Ok(Value::String(format!("Task {id} deleted successfully.")))
                }
            },
        ))
    }
}
