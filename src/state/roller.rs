//! Randomized-selection state machine: Idle -> Rolling -> Settling -> Idle.
//! The machine is advanced by an external scheduler tick and takes its
//! clock and random samples as arguments, so the driving interval lives in
//! the view layer and tests can run it with an injected clock.

use crate::model::Task;

/// Total flicker time before the real draw.
pub const ROLL_DURATION_MS: f64 = 3000.0;
/// Cadence of the driving interval.
pub const FLICKER_INTERVAL_MS: i32 = 120;
/// How long the spotlight holds on the winning category.
pub const SETTLE_HOLD_MS: f64 = 500.0;

#[derive(Clone, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Rolling {
        started_at: f64,
    },
    Settling {
        since: f64,
        pick: Task,
    },
}

#[derive(Clone, Debug, Default)]
pub struct SelectionRoller {
    phase: Phase,
    pool: Vec<Task>,
    node_ids: Vec<String>,
}

/// What the driving tick should do next.
#[derive(Clone, Debug, PartialEq)]
pub enum RollerTick {
    /// Move the spotlight to this node id (category id or subcategory label).
    Highlight(String),
    /// Roll finished: clear the spotlight and surface the picked task for
    /// confirmation.
    Finished(Task),
    /// Nothing to do.
    Idle,
}

impl SelectionRoller {
    pub fn is_rolling(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Begin a roll over `pool`, flickering across `node_ids`. A start with
    /// an empty pool, or while a roll is in progress, is ignored.
    pub fn start(&mut self, pool: Vec<Task>, node_ids: Vec<String>, now_ms: f64) -> bool {
        if pool.is_empty() || self.is_rolling() {
            return false;
        }
        self.pool = pool;
        self.node_ids = node_ids;
        self.phase = Phase::Rolling { started_at: now_ms };
        true
    }

    /// Advance the machine. `r` is a uniform sample in [0, 1), used for the
    /// cosmetic flicker while rolling and for the actual draw at settle
    /// time (the two never happen on the same tick).
    pub fn tick(&mut self, now_ms: f64, r: f64) -> RollerTick {
        match self.phase.clone() {
            Phase::Idle => RollerTick::Idle,
            Phase::Rolling { started_at } => {
                if now_ms - started_at < ROLL_DURATION_MS {
                    match pick(&self.node_ids, r) {
                        Some(id) => RollerTick::Highlight(id.clone()),
                        None => RollerTick::Idle,
                    }
                } else {
                    // The real draw. The spotlight snaps to the winner's
                    // category, since uncompleted tasks are unlabeled dots.
                    let pick = pick(&self.pool, r)
                        .cloned()
                        .expect("pool is non-empty while rolling");
                    let cat = pick.category.clone();
                    self.phase = Phase::Settling { since: now_ms, pick };
                    RollerTick::Highlight(cat)
                }
            }
            Phase::Settling { since, pick } => {
                if now_ms - since >= SETTLE_HOLD_MS {
                    self.phase = Phase::Idle;
                    self.pool.clear();
                    self.node_ids.clear();
                    RollerTick::Finished(pick)
                } else {
                    RollerTick::Highlight(pick.category.clone())
                }
            }
        }
    }
}

fn pick<T>(items: &[T], r: f64) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let idx = ((r * items.len() as f64) as usize).min(items.len() - 1);
    Some(&items[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, category: &str) -> Task {
        Task {
            id: id.to_string(),
            category: category.to_string(),
            sub_category: "触觉".to_string(),
            content: "内容".to_string(),
            is_custom: false,
        }
    }

    fn node_ids() -> Vec<String> {
        vec!["sensory".to_string(), "触觉".to_string(), "视觉".to_string()]
    }

    /// Drive the roller at the real cadence until it finishes.
    fn run_to_completion(roller: &mut SelectionRoller, start_ms: f64) -> (Task, f64) {
        let mut now = start_ms;
        for _ in 0..1000 {
            now += FLICKER_INTERVAL_MS as f64;
            if let RollerTick::Finished(t) = roller.tick(now, 0.5) {
                return (t, now - start_ms);
            }
        }
        panic!("roller never finished");
    }

    #[test]
    fn singleton_pool_always_settles_on_that_task() {
        let mut roller = SelectionRoller::default();
        assert!(roller.start(vec![task("s1", "sensory")], node_ids(), 0.0));
        let (picked, elapsed) = run_to_completion(&mut roller, 0.0);
        assert_eq!(picked.id, "s1");
        // Full rolling duration plus the settle hold must elapse first.
        assert!(elapsed >= ROLL_DURATION_MS + SETTLE_HOLD_MS);
        assert!(!roller.is_rolling());
    }

    #[test]
    fn settle_highlights_the_picked_tasks_category() {
        let mut roller = SelectionRoller::default();
        roller.start(vec![task("f1", "food")], node_ids(), 0.0);
        let tick = roller.tick(ROLL_DURATION_MS, 0.0);
        assert_eq!(tick, RollerTick::Highlight("food".to_string()));
        // Still holding just before the 500 ms mark.
        let tick = roller.tick(ROLL_DURATION_MS + SETTLE_HOLD_MS - 1.0, 0.9);
        assert_eq!(tick, RollerTick::Highlight("food".to_string()));
    }

    #[test]
    fn flicker_draws_from_the_node_id_set() {
        let mut roller = SelectionRoller::default();
        roller.start(vec![task("s1", "sensory")], node_ids(), 0.0);
        let ids = node_ids();
        for i in 0..24 {
            let r = i as f64 / 24.0;
            match roller.tick(120.0 * (i + 1) as f64, r) {
                RollerTick::Highlight(id) => assert!(ids.contains(&id)),
                other => panic!("unexpected tick {other:?}"),
            }
        }
    }

    #[test]
    fn start_is_ignored_while_rolling_and_on_empty_pool() {
        let mut roller = SelectionRoller::default();
        assert!(!roller.start(Vec::new(), node_ids(), 0.0));
        assert!(roller.start(vec![task("s1", "sensory")], node_ids(), 0.0));
        // A second request mid-roll is a no-op.
        assert!(!roller.start(vec![task("f1", "food")], node_ids(), 100.0));
        let (picked, _) = run_to_completion(&mut roller, 0.0);
        assert_eq!(picked.id, "s1");
    }

    #[test]
    fn roller_is_reusable_after_finishing() {
        let mut roller = SelectionRoller::default();
        roller.start(vec![task("s1", "sensory")], node_ids(), 0.0);
        run_to_completion(&mut roller, 0.0);
        assert!(roller.start(vec![task("f1", "food")], node_ids(), 10_000.0));
        let (picked, _) = run_to_completion(&mut roller, 10_000.0);
        assert_eq!(picked.id, "f1");
    }

    #[test]
    fn uniform_pick_covers_the_whole_pool() {
        let pool = vec![task("a", "x"), task("b", "x"), task("c", "x")];
        assert_eq!(pick(&pool, 0.0).unwrap().id, "a");
        assert_eq!(pick(&pool, 0.5).unwrap().id, "b");
        assert_eq!(pick(&pool, 0.999).unwrap().id, "c");
        // Degenerate r = 1.0 still lands on the last element.
        assert_eq!(pick(&pool, 1.0).unwrap().id, "c");
    }
}
