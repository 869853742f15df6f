//! crates/focusdeck_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or rendering concern.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A logged or queued Pomodoro-style work block.
#[derive(Debug, Clone)]
pub struct FocusSession {
    pub id: Uuid,
    pub title: String,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub cycles: u32,
    pub mood: String,
    pub created_at: DateTime<Utc>,
}

/// A planning record with a focus-minutes budget and a deadline.
#[derive(Debug, Clone)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub target_focus_minutes: u32,
    pub priority: Priority,
    pub due_date: DateTime<Utc>,
    pub set_reminder: bool,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// The fixed set of goal priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=========================================================================================
// Serialized (Wire) Records
//=========================================================================================
//
// Stores hand out these snapshots instead of live references, so callers can
// never mutate stored state. Field names and timestamp format match the JSON
// the HTTP layer exposes (camelCase, RFC 3339 with millisecond precision).

/// A serialized snapshot of a [`FocusSession`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: Uuid,
    pub title: String,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub cycles: u32,
    pub mood: String,
    pub created_at: String,
}

impl From<&FocusSession> for SessionRecord {
    fn from(session: &FocusSession) -> Self {
        Self {
            id: session.id,
            title: session.title.clone(),
            focus_minutes: session.focus_minutes,
            break_minutes: session.break_minutes,
            cycles: session.cycles,
            mood: session.mood.clone(),
            created_at: timestamp(session.created_at),
        }
    }
}

/// A serialized snapshot of a [`Goal`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: Uuid,
    pub title: String,
    pub target_focus_minutes: u32,
    pub priority: Priority,
    pub due_date: String,
    pub set_reminder: bool,
    pub notes: String,
    pub created_at: String,
}

impl From<&Goal> for GoalRecord {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id,
            title: goal.title.clone(),
            target_focus_minutes: goal.target_focus_minutes,
            priority: goal.priority,
            due_date: timestamp(goal.due_date),
            set_reminder: goal.set_reminder,
            notes: goal.notes.clone(),
            created_at: timestamp(goal.created_at),
        }
    }
}

/// Aggregate statistics derived from the current session collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total_focus_minutes: u32,
    pub total_cycles: u32,
    pub average_focus_block: u32,
}

/// A small derived read-only view of the current goal collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSnapshot {
    pub total: usize,
    pub high_priority: usize,
    pub next_due_label: String,
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
