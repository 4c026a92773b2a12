//! Core data model for the enrichment map.
//! All mutation goes through the `AppAction` reducer; components never edit
//! `AppState` directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Reducible;

use crate::catalog;

/// Categories (and subcategories) are open-ended, user-creatable labels,
/// so they stay strings rather than a closed enum.
pub type CategoryId = String;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub icon: String,
    /// Default position in percentage space (0..100). A user drag records an
    /// override in `AppState::category_positions` instead of mutating this.
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub category: CategoryId,
    pub sub_category: String,
    pub content: String,
    pub is_custom: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub task_id: String,
    pub count: u32,
    /// Millisecond timestamp of the most recent completion.
    pub completed_at: f64,
    /// Offset from the resolved parent node, rolled once at first completion
    /// and never recomputed. The label follows the parent rigidly.
    pub dx: f64,
    pub dy: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub completed_tasks: Vec<CompletionRecord>,
    pub custom_tasks: Vec<Task>,
    pub custom_categories: Vec<Category>,
    pub visitor_count: u32,
    pub category_positions: HashMap<CategoryId, Point>,
}

impl AppState {
    pub fn fresh(visitor_count: u32) -> Self {
        Self {
            completed_tasks: Vec::new(),
            custom_tasks: Vec::new(),
            custom_categories: Vec::new(),
            visitor_count,
            category_positions: HashMap::new(),
        }
    }

    /// Built-in categories followed by the user's custom ones.
    pub fn all_categories(&self) -> Vec<Category> {
        let mut cats = catalog::default_categories();
        cats.extend(self.custom_categories.iter().cloned());
        cats
    }

    /// Built-in tasks followed by the user's custom ones.
    pub fn all_tasks(&self) -> Vec<Task> {
        let mut tasks = catalog::initial_tasks();
        tasks.extend(self.custom_tasks.iter().cloned());
        tasks
    }

    pub fn record_for(&self, task_id: &str) -> Option<&CompletionRecord> {
        self.completed_tasks.iter().find(|r| r.task_id == task_id)
    }
}

/// Partial update for a custom task, applied by `AppAction::UpdateTask`.
/// Only the fields the edit overlay exposes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskPatch {
    pub sub_category: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone, Debug)]
pub enum AppAction {
    /// Bump the visitor counter (once per browser session).
    IncrementVisitor,
    /// Commit a completion. `dx`/`dy` are a freshly rolled label offset,
    /// only used when no record exists yet.
    Confirm {
        task_id: String,
        now_ms: f64,
        dx: f64,
        dy: f64,
    },
    /// Adjust a record's count by `delta`, clamped at zero. A record
    /// reaching zero is removed outright.
    AdjustCount { task_id: String, delta: i32 },
    AddTask(Task),
    AddCategory(Category),
    UpdateCategory { id: CategoryId, name: String },
    UpdateTask { id: String, patch: TaskPatch },
    /// Cascades: custom tasks of the category, completion records of those
    /// tasks, and the category's position override.
    DeleteCategory { id: CategoryId },
    DeleteTask { id: String },
    /// Persisted result of dragging a category node, in percentage space.
    MoveCategory { id: CategoryId, x: f64, y: f64 },
    /// Wipe progress and customizations; the visitor count survives.
    ResetProgress,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use AppAction::*;
        let mut new = (*self).clone();
        match action {
            IncrementVisitor => {
                new.visitor_count = new.visitor_count.saturating_add(1);
            }
            Confirm {
                task_id,
                now_ms,
                dx,
                dy,
            } => {
                if let Some(rec) = new
                    .completed_tasks
                    .iter_mut()
                    .find(|r| r.task_id == task_id)
                {
                    rec.count = rec.count.saturating_add(1);
                    rec.completed_at = now_ms;
                } else {
                    new.completed_tasks.push(CompletionRecord {
                        task_id,
                        count: 1,
                        completed_at: now_ms,
                        dx,
                        dy,
                    });
                }
            }
            AdjustCount { task_id, delta } => {
                if let Some(rec) = new
                    .completed_tasks
                    .iter_mut()
                    .find(|r| r.task_id == task_id)
                {
                    rec.count = if delta < 0 {
                        rec.count.saturating_sub(delta.unsigned_abs())
                    } else {
                        rec.count.saturating_add(delta as u32)
                    };
                }
                new.completed_tasks.retain(|r| r.count > 0);
            }
            AddTask(task) => {
                new.custom_tasks.push(task);
            }
            AddCategory(cat) => {
                new.custom_categories.push(cat);
            }
            UpdateCategory { id, name } => {
                if let Some(cat) = new.custom_categories.iter_mut().find(|c| c.id == id) {
                    cat.name = name;
                }
            }
            UpdateTask { id, patch } => {
                if let Some(task) = new.custom_tasks.iter_mut().find(|t| t.id == id) {
                    if let Some(sub) = patch.sub_category {
                        task.sub_category = sub;
                    }
                    if let Some(content) = patch.content {
                        task.content = content;
                    }
                }
            }
            DeleteCategory { id } => {
                // Resolve records against the pre-deletion pool; records whose
                // task cannot be found at all are dropped too.
                let pool = new.all_tasks();
                new.completed_tasks.retain(|rec| {
                    pool.iter()
                        .find(|t| t.id == rec.task_id)
                        .map(|t| t.category != id)
                        .unwrap_or(false)
                });
                new.custom_tasks.retain(|t| t.category != id);
                new.custom_categories.retain(|c| c.id != id);
                new.category_positions.remove(&id);
            }
            DeleteTask { id } => {
                new.custom_tasks.retain(|t| t.id != id);
                new.completed_tasks.retain(|r| r.task_id != id);
            }
            MoveCategory { id, x, y } => {
                new.category_positions.insert(id, Point { x, y });
            }
            ResetProgress => {
                new.completed_tasks.clear();
                new.custom_tasks.clear();
                new.custom_categories.clear();
                new.category_positions.clear();
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: AppState, action: AppAction) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn confirm(state: AppState, task_id: &str, now_ms: f64) -> AppState {
        dispatch(
            state,
            AppAction::Confirm {
                task_id: task_id.to_string(),
                now_ms,
                dx: 20.0,
                dy: -5.0,
            },
        )
    }

    fn custom_task(id: &str, category: &str) -> Task {
        Task {
            id: id.to_string(),
            category: category.to_string(),
            sub_category: "书影音".to_string(),
            content: "自定义任务".to_string(),
            is_custom: true,
        }
    }

    #[test]
    fn confirm_twice_counts_two_and_keeps_first_offset() {
        let state = confirm(AppState::fresh(2048), "s1", 1_000.0);
        let state = confirm(state, "s1", 2_000.0);

        assert_eq!(state.completed_tasks.len(), 1);
        let rec = state.record_for("s1").unwrap();
        assert_eq!(rec.count, 2);
        assert_eq!(rec.completed_at, 2_000.0);
        // The positional offset is set at first completion only.
        assert_eq!((rec.dx, rec.dy), (20.0, -5.0));
    }

    #[test]
    fn adjust_count_clamps_at_zero_and_removes_empty_records() {
        let state = confirm(AppState::fresh(2048), "s1", 1_000.0);
        let state = confirm(state, "s1", 2_000.0);

        let state = dispatch(
            state,
            AppAction::AdjustCount {
                task_id: "s1".to_string(),
                delta: -2,
            },
        );
        assert!(state.completed_tasks.is_empty());

        // Over-decrementing a fresh record also just removes it.
        let state = confirm(state, "s2", 3_000.0);
        let state = dispatch(
            state,
            AppAction::AdjustCount {
                task_id: "s2".to_string(),
                delta: -10,
            },
        );
        assert!(state.record_for("s2").is_none());
    }

    #[test]
    fn adjust_count_increments_existing_record() {
        let state = confirm(AppState::fresh(2048), "c1", 1_000.0);
        let state = dispatch(
            state,
            AppAction::AdjustCount {
                task_id: "c1".to_string(),
                delta: 3,
            },
        );
        assert_eq!(state.record_for("c1").unwrap().count, 4);
    }

    #[test]
    fn delete_category_cascades_tasks_records_and_position() {
        let mut state = AppState::fresh(2048);
        state = dispatch(
            state,
            AppAction::AddCategory(Category {
                id: "custom-cat-1".to_string(),
                name: "精神丰容".to_string(),
                color: "#ffed4a".to_string(),
                icon: "🌟".to_string(),
                x: 40.0,
                y: 40.0,
            }),
        );
        state = dispatch(state, AppAction::AddTask(custom_task("ct1", "custom-cat-1")));
        state = confirm(state, "ct1", 1_000.0);
        state = confirm(state, "s1", 1_500.0);
        state = dispatch(
            state,
            AppAction::MoveCategory {
                id: "custom-cat-1".to_string(),
                x: 12.0,
                y: 80.0,
            },
        );

        state = dispatch(
            state,
            AppAction::DeleteCategory {
                id: "custom-cat-1".to_string(),
            },
        );

        assert!(state.custom_categories.is_empty());
        assert!(state.custom_tasks.is_empty());
        assert!(state.record_for("ct1").is_none());
        assert!(!state.category_positions.contains_key("custom-cat-1"));
        // Other categories' data is untouched.
        assert_eq!(state.record_for("s1").unwrap().count, 1);
    }

    #[test]
    fn delete_category_drops_records_with_unresolvable_tasks() {
        let mut state = confirm(AppState::fresh(2048), "no-such-task", 1_000.0);
        state = dispatch(
            state,
            AppAction::DeleteCategory {
                id: "whatever".to_string(),
            },
        );
        assert!(state.completed_tasks.is_empty());
    }

    #[test]
    fn delete_task_removes_its_record() {
        let mut state = AppState::fresh(2048);
        state = dispatch(state, AppAction::AddTask(custom_task("ct1", "sensory")));
        state = confirm(state, "ct1", 1_000.0);

        state = dispatch(
            state,
            AppAction::DeleteTask {
                id: "ct1".to_string(),
            },
        );
        assert!(state.custom_tasks.is_empty());
        assert!(state.completed_tasks.is_empty());
    }

    #[test]
    fn update_task_applies_partial_patch() {
        let mut state = AppState::fresh(2048);
        state = dispatch(state, AppAction::AddTask(custom_task("ct1", "sensory")));
        state = dispatch(
            state,
            AppAction::UpdateTask {
                id: "ct1".to_string(),
                patch: TaskPatch {
                    sub_category: Some("手工制作".to_string()),
                    content: None,
                },
            },
        );
        let task = &state.custom_tasks[0];
        assert_eq!(task.sub_category, "手工制作");
        assert_eq!(task.content, "自定义任务");
    }

    #[test]
    fn reset_keeps_visitor_count() {
        let mut state = confirm(AppState::fresh(2101), "s1", 1_000.0);
        state = dispatch(state, AppAction::ResetProgress);
        assert!(state.completed_tasks.is_empty());
        assert!(state.custom_tasks.is_empty());
        assert!(state.category_positions.is_empty());
        assert_eq!(state.visitor_count, 2101);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let state = AppState::fresh(2048);
        let tasks = state.all_tasks();
        let cats = state.all_categories();
        for (i, t) in tasks.iter().enumerate() {
            assert!(!tasks[i + 1..].iter().any(|o| o.id == t.id), "dup {}", t.id);
        }
        for (i, c) in cats.iter().enumerate() {
            assert!(!cats[i + 1..].iter().any(|o| o.id == c.id), "dup {}", c.id);
        }
    }
}
