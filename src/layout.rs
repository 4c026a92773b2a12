//! Node layout engine: maps categories, subcategories and completed-task
//! labels to percentage-space coordinates. Everything here is a pure
//! function of the current state plus label text, so a re-render can never
//! shift a node.

use std::collections::HashMap;

use crate::catalog;
use crate::model::{Category, CategoryId, CompletionRecord, Point, Task};

/// Where labels land when neither subcategory nor category resolves.
pub const HUB: Point = Point { x: 50.0, y: 50.0 };

/// A rendered subcategory node, derived on the fly from the task set.
#[derive(Clone, Debug, PartialEq)]
pub struct SubNode {
    pub name: String,
    pub cat_id: CategoryId,
    pub pos: Point,
    pub color: String,
    /// At least one task under this subcategory has been completed.
    pub active: bool,
}

/// Category position: the user's drag override when present, else the
/// category's default coordinates.
pub fn category_position(overrides: &HashMap<CategoryId, Point>, cat: &Category) -> Point {
    overrides
        .get(&cat.id)
        .copied()
        .unwrap_or(Point { x: cat.x, y: cat.y })
}

/// Deterministic pseudo-random offset for subcategory labels without a
/// hand-placed entry. Polynomial hash over UTF-16 code units, folded into
/// [-10, 10) on each axis; the same label always lands in the same spot.
pub fn stable_offset(label: &str) -> (f64, f64) {
    let mut hash: i32 = 0;
    for unit in label.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    let dx = (hash.unsigned_abs() % 20) as f64 - 10.0;
    let dy = ((hash >> 5).unsigned_abs() % 20) as f64 - 10.0;
    (dx, dy)
}

pub fn subcat_offset(label: &str) -> (f64, f64) {
    catalog::builtin_subcat_offset(label).unwrap_or_else(|| stable_offset(label))
}

pub fn subcategory_position(parent: Point, label: &str) -> Point {
    let (dx, dy) = subcat_offset(label);
    Point {
        x: parent.x + dx,
        y: parent.y + dy,
    }
}

/// True when some completion record resolves to this category (and, when
/// given, this subcategory). Dangling records are skipped.
pub fn node_active(
    completed: &[CompletionRecord],
    tasks: &[Task],
    cat_id: &str,
    sub: Option<&str>,
) -> bool {
    completed.iter().any(|rec| {
        let Some(task) = tasks.iter().find(|t| t.id == rec.task_id) else {
            return false;
        };
        task.category == cat_id && sub.is_none_or(|s| task.sub_category == s)
    })
}

/// Derive the subcategory node set: one node per distinct (category,
/// subcategory-label) pair found in the task pool, offset from the parent's
/// resolved position.
pub fn sub_nodes(
    categories: &[Category],
    tasks: &[Task],
    overrides: &HashMap<CategoryId, Point>,
    completed: &[CompletionRecord],
) -> Vec<SubNode> {
    let mut subs = Vec::new();
    for cat in categories {
        let parent = category_position(overrides, cat);
        let mut seen: Vec<&str> = Vec::new();
        for t in tasks.iter().filter(|t| t.category == cat.id) {
            if seen.contains(&t.sub_category.as_str()) {
                continue;
            }
            seen.push(&t.sub_category);
            subs.push(SubNode {
                name: t.sub_category.clone(),
                cat_id: cat.id.clone(),
                pos: subcategory_position(parent, &t.sub_category),
                color: cat.color.clone(),
                active: node_active(completed, tasks, &cat.id, Some(&t.sub_category)),
            });
        }
    }
    subs
}

/// Position of a completed-task label: its record's fixed offset from the
/// subcategory node when one still exists, else from the task's category,
/// else from the hub.
pub fn record_position(
    record: &CompletionRecord,
    task: &Task,
    subs: &[SubNode],
    categories: &[Category],
    overrides: &HashMap<CategoryId, Point>,
) -> (Point, Point) {
    let parent = subs
        .iter()
        .find(|n| n.name == task.sub_category)
        .map(|n| n.pos)
        .or_else(|| {
            categories
                .iter()
                .find(|c| c.id == task.category)
                .map(|c| category_position(overrides, c))
        })
        .unwrap_or(HUB);
    let label = Point {
        x: parent.x + record.dx,
        y: parent.y + record.dy,
    };
    (parent, label)
}

/// Roll the one-time label offset at confirmation: uniform angle, distance
/// uniform in [15, 28] percentage units so the label clears the parent
/// node's footprint. `r_angle`/`r_dist` are uniform samples in [0, 1).
pub fn roll_label_offset(r_angle: f64, r_dist: f64) -> (f64, f64) {
    let angle = r_angle * std::f64::consts::TAU;
    let distance = 15.0 + r_dist * 13.0;
    (angle.cos() * distance, angle.sin() * distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppState;

    fn record(task_id: &str) -> CompletionRecord {
        CompletionRecord {
            task_id: task_id.to_string(),
            count: 1,
            completed_at: 0.0,
            dx: 20.0,
            dy: 0.0,
        }
    }

    #[test]
    fn stable_offset_is_deterministic_and_bounded() {
        for label in ["书影音", "手工制作", "a", "österreich", "🌟🌟🌟"] {
            let first = stable_offset(label);
            for _ in 0..10 {
                assert_eq!(stable_offset(label), first);
            }
            assert!((-10.0..10.0).contains(&first.0), "{label}: {first:?}");
            assert!((-10.0..10.0).contains(&first.1), "{label}: {first:?}");
        }
    }

    #[test]
    fn builtin_labels_use_the_hand_placed_table() {
        let parent = Point { x: 30.0, y: 45.0 };
        let pos = subcategory_position(parent, "触觉");
        assert_eq!((pos.x, pos.y), (20.0, 41.0));
    }

    #[test]
    fn category_position_prefers_override() {
        let state = AppState::fresh(2048);
        let cats = state.all_categories();
        let sensory = cats.iter().find(|c| c.id == "sensory").unwrap();

        assert_eq!(
            category_position(&state.category_positions, sensory),
            Point { x: 30.0, y: 45.0 }
        );

        let mut overrides = state.category_positions.clone();
        overrides.insert("sensory".to_string(), Point { x: 10.0, y: 90.0 });
        assert_eq!(
            category_position(&overrides, sensory),
            Point { x: 10.0, y: 90.0 }
        );
    }

    #[test]
    fn sub_nodes_are_unique_per_category_and_follow_parent() {
        let state = AppState::fresh(2048);
        let cats = state.all_categories();
        let tasks = state.all_tasks();

        let subs = sub_nodes(&cats, &tasks, &state.category_positions, &[]);
        // 16 distinct built-in subcategories, none duplicated.
        assert_eq!(subs.len(), 16);

        let mut overrides = HashMap::new();
        overrides.insert("sensory".to_string(), Point { x: 0.0, y: 0.0 });
        let moved = sub_nodes(&cats, &tasks, &overrides, &[]);
        let touch = moved.iter().find(|n| n.name == "触觉").unwrap();
        assert_eq!((touch.pos.x, touch.pos.y), (-10.0, -4.0));
    }

    #[test]
    fn record_position_falls_back_from_sub_to_category_to_hub() {
        let state = AppState::fresh(2048);
        let cats = state.all_categories();
        let tasks = state.all_tasks();
        let subs = sub_nodes(&cats, &tasks, &state.category_positions, &[]);
        let rec = record("s1");
        let s1 = tasks.iter().find(|t| t.id == "s1").unwrap();

        // Normal case: anchored to the 触觉 subcategory node.
        let (parent, label) = record_position(&rec, s1, &subs, &cats, &state.category_positions);
        assert_eq!((parent.x, parent.y), (20.0, 41.0));
        assert_eq!((label.x, label.y), (40.0, 41.0));

        // Subcategory gone: fall back to the category position.
        let (parent, _) = record_position(&rec, s1, &[], &cats, &state.category_positions);
        assert_eq!((parent.x, parent.y), (30.0, 45.0));

        // Category gone too: fall back to the hub.
        let (parent, _) = record_position(&rec, s1, &[], &[], &state.category_positions);
        assert_eq!(parent, HUB);
    }

    #[test]
    fn node_active_skips_dangling_records() {
        let state = AppState::fresh(2048);
        let tasks = state.all_tasks();
        let completed = vec![record("s1"), record("deleted-task")];

        assert!(node_active(&completed, &tasks, "sensory", None));
        assert!(node_active(&completed, &tasks, "sensory", Some("触觉")));
        assert!(!node_active(&completed, &tasks, "sensory", Some("视觉")));
        assert!(!node_active(&completed, &tasks, "food", None));
    }

    #[test]
    fn rolled_label_offset_stays_in_the_ring() {
        for i in 0..50 {
            let r = i as f64 / 50.0;
            let (dx, dy) = roll_label_offset(r, 1.0 - r);
            let distance = (dx * dx + dy * dy).sqrt();
            assert!((15.0..=28.0).contains(&distance), "distance {distance}");
        }
    }
}
