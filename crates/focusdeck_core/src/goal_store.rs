//! crates/focusdeck_core/src/goal_store.rs
//!
//! The bounded, in-memory collection of planning goals plus the snapshot view
//! shown on the insights page.

use crate::domain::{Goal, GoalRecord, GoalSnapshot, Priority};
use crate::validate::{
    int_in_range, raw_scalar, required_with_max, trimmed, ValidationErrors,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use std::collections::VecDeque;
use uuid::Uuid;

/// Label returned by [`GoalStore::snapshot`] when no goals exist.
pub const EMPTY_SNAPSHOT_LABEL: &str = "No goals scheduled";

/// Raw, untyped field values for a goal, exactly as a form or JSON body
/// delivered them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalDraft {
    #[serde(deserialize_with = "raw_scalar")]
    pub title: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub target_focus_minutes: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub set_reminder: Option<String>,
    #[serde(deserialize_with = "raw_scalar")]
    pub notes: Option<String>,
}

/// Owns the goal collection. Structurally a sibling of
/// [`crate::session_store::SessionStore`] with its own fields, bounds, and a
/// smaller capacity; eviction is FIFO by insertion order here too.
#[derive(Debug, Default)]
pub struct GoalStore {
    goals: VecDeque<Goal>,
}

impl GoalStore {
    pub const CAPACITY: usize = 15;

    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the demo goals shown on first run.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            goals: VecDeque::from([
                Goal {
                    id: Uuid::new_v4(),
                    title: "Finish algorithms worksheet".to_string(),
                    target_focus_minutes: 120,
                    priority: Priority::High,
                    due_date: now + Duration::days(1),
                    set_reminder: true,
                    notes: "Pair it with the Discrete Math recap session.".to_string(),
                    created_at: now - Duration::hours(6),
                },
                Goal {
                    id: Uuid::new_v4(),
                    title: "Prep UX critique slides".to_string(),
                    target_focus_minutes: 90,
                    priority: Priority::Medium,
                    due_date: now + Duration::days(2),
                    set_reminder: false,
                    notes: "Highlight the two competitive audits from Week 6.".to_string(),
                    created_at: now - Duration::hours(12),
                },
            ]),
        }
    }

    /// Validates a draft and, when every field passes, stores a new goal.
    pub fn add_goal(&mut self, draft: &GoalDraft) -> Result<GoalRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = trimmed(draft.title.as_deref());
        required_with_max(
            &mut errors,
            "title",
            title,
            80,
            "Add a quick description for this goal.",
            "Goal title should be 80 characters or less.",
        );

        let target_focus_minutes = int_in_range(
            &mut errors,
            "targetFocusMinutes",
            draft.target_focus_minutes.as_deref(),
            30,
            600,
            "Pick between 30 and 600 minutes of focus time.",
        );

        let due_date = parse_due_date(trimmed(draft.due_date.as_deref()));
        if due_date.is_none() {
            errors.insert(
                "dueDate".to_string(),
                "Choose a deadline for this goal.".to_string(),
            );
        }

        let priority = trimmed(draft.priority.as_deref()).parse::<Priority>().ok();
        if priority.is_none() {
            errors.insert(
                "priority".to_string(),
                "Pick one of the listed priority levels.".to_string(),
            );
        }

        let notes = trimmed(draft.notes.as_deref());
        if notes.chars().count() > 160 {
            errors.insert(
                "notes".to_string(),
                "Notes should be 160 characters or less.".to_string(),
            );
        }

        // Checkbox semantics: only an explicit truthy value turns the flag on.
        let set_reminder = matches!(
            trimmed(draft.set_reminder.as_deref()),
            "on" | "true" | "1"
        );

        match (target_focus_minutes, due_date, priority) {
            (Some(target_focus_minutes), Some(due_date), Some(priority))
                if errors.is_empty() =>
            {
                let goal = Goal {
                    id: Uuid::new_v4(),
                    title: title.to_string(),
                    target_focus_minutes,
                    priority,
                    due_date,
                    set_reminder,
                    notes: notes.to_string(),
                    created_at: Utc::now(),
                };
                let record = GoalRecord::from(&goal);

                self.goals.push_back(goal);
                if self.goals.len() > Self::CAPACITY {
                    self.goals.pop_front();
                }

                Ok(record)
            }
            _ => Err(errors),
        }
    }

    /// Returns a snapshot of every goal ordered by ascending due date, soonest
    /// deadline first. The opposite convention from session listing: goals are
    /// triaged by deadline, sessions by recency.
    pub fn list_goals(&self) -> Vec<GoalRecord> {
        let mut ordered: Vec<&Goal> = self.goals.iter().collect();
        ordered.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        ordered.into_iter().map(GoalRecord::from).collect()
    }

    /// Computes the small dashboard view: total count, High-priority count,
    /// and a label naming the soonest-due goal.
    pub fn snapshot(&self) -> GoalSnapshot {
        let mut ordered: Vec<&Goal> = self.goals.iter().collect();
        ordered.sort_by(|a, b| a.due_date.cmp(&b.due_date));

        let Some(next) = ordered.first() else {
            return GoalSnapshot {
                total: 0,
                high_priority: 0,
                next_due_label: EMPTY_SNAPSHOT_LABEL.to_string(),
            };
        };

        GoalSnapshot {
            total: ordered.len(),
            high_priority: ordered
                .iter()
                .filter(|g| g.priority == Priority::High)
                .count(),
            next_due_label: format!(
                "{} · due {}",
                next.title,
                next.due_date.format("%a, %b %-d")
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Drops every goal. Exposed for tests and explicit resets.
    pub fn clear(&mut self) {
        self.goals.clear();
    }
}

/// Parses the due-date field. The goal form submits an HTML date input
/// (`YYYY-MM-DD`); JSON callers may send a full RFC 3339 timestamp instead.
fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Utc
            .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
            .single();
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
